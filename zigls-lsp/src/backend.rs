//! LSP backend implementation
//!
//! Contains the main `Backend` struct that implements the `LanguageServer`
//! trait on top of the document store.

use tokio::sync::Mutex;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    CompletionItemKind, CompletionOptions, CompletionParams, CompletionResponse,
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    DidSaveTextDocumentParams, InitializeParams, InitializeResult, InitializedParams,
    ServerCapabilities, ServerInfo, TextDocumentSyncCapability, TextDocumentSyncKind,
    TextDocumentSyncOptions, TextDocumentSyncSaveOptions, Url,
};
use tower_lsp::{Client, LanguageServer};
use zigls_core::{Config, OffsetEncoding};

use crate::capabilities::completion::{self, TagContext};
use crate::capabilities::diagnostics;
use crate::convert;
use crate::store::{self, Change, DocumentStore};

/// LSP backend for Zig documents
pub struct Backend {
    /// Client handle for sending messages back to the editor
    client: Client,
    /// The document store; every operation on it is serialized here.
    store: Mutex<DocumentStore>,
}

impl Backend {
    /// Create a new backend instance
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self {
            client,
            store: Mutex::new(DocumentStore::new(Config::default())),
        }
    }

    /// Publish a parse diagnostic for a failed open or edit, or clear the
    /// document's diagnostics when it parsed.
    async fn publish_outcome(&self, uri: Url, text: &str, outcome: &std::result::Result<(), store::Error>) {
        let diagnostics = match outcome {
            Ok(()) => vec![],
            Err(store::Error::Parse(parse_error)) => vec![diagnostics::parse_error_to_diagnostic(
                text,
                parse_error,
                OffsetEncoding::Utf16,
            )],
            Err(err) => {
                tracing::error!("Failed to update {uri}: {err}");
                vec![]
            }
        };
        self.client.publish_diagnostics(uri, diagnostics, None).await;
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        tracing::info!("Initializing zigls");

        if let Some(options) = params.initialization_options {
            match serde_json::from_value::<Config>(options) {
                Ok(config) => {
                    let mut store = self.store.lock().await;
                    *store = DocumentStore::new(config);
                }
                Err(err) => tracing::error!("Invalid initialization options: {err}"),
            }
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        change: Some(TextDocumentSyncKind::INCREMENTAL),
                        save: Some(TextDocumentSyncSaveOptions::Supported(true)),
                        ..Default::default()
                    },
                )),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec![".".to_string()]),
                    ..Default::default()
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "zigls".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _params: InitializedParams) {
        tracing::info!("zigls initialized");
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!("Shutting down zigls");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let text = params.text_document.text;

        tracing::debug!("Document opened: {uri}");

        let outcome = {
            let mut store = self.store.lock().await;
            store.open_document(&uri, text.clone()).map(|_| ())
        };
        self.publish_outcome(uri, &text, &outcome).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let changes: Vec<Change> = params
            .content_changes
            .into_iter()
            .map(convert::change_from_lsp)
            .collect();

        tracing::debug!("Document changed: {uri}");

        let (outcome, text) = {
            let mut store = self.store.lock().await;
            let outcome = store.apply_changes(&uri, &changes, OffsetEncoding::Utf16);
            let text = store
                .get_handle(&uri)
                .map(|handle| handle.text().to_string())
                .unwrap_or_default();
            (outcome, text)
        };
        self.publish_outcome(uri, &text, &outcome).await;
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        let uri = params.text_document.uri;

        tracing::debug!("Document saved: {uri}");

        let mut store = self.store.lock().await;
        store.apply_save(&uri);
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;

        tracing::debug!("Document closed: {uri}");

        {
            let mut store = self.store.lock().await;
            store.close_document(&uri);
        }
        // Clear diagnostics for the closed file.
        self.client.publish_diagnostics(uri, vec![], None).await;
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let store = self.store.lock().await;
        let Some(handle) = store.get_handle(&uri) else {
            return Ok(None);
        };

        let items = match completion::detect_context(handle.text(), position) {
            TagContext::ErrorTag { prefix } => completion::tag_completion_items(
                &store.error_completion_items(&uri),
                CompletionItemKind::CONSTANT,
                &prefix,
            ),
            TagContext::EnumLiteral { prefix } => completion::tag_completion_items(
                &store.enum_completion_items(&uri),
                CompletionItemKind::ENUM_MEMBER,
                &prefix,
            ),
            TagContext::None => return Ok(None),
        };

        Ok(Some(CompletionResponse::Array(items)))
    }
}
