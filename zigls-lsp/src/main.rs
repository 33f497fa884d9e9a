//! zigls: Language Server Protocol implementation for Zig
//!
//! This binary provides LSP support for Zig documents: document tracking
//! with build-graph discovery, import resolution, and tag completions.

use tower_lsp::{LspService, Server};
use tracing_subscriber::EnvFilter;

use zigls_lsp::Backend;

#[tokio::main]
async fn main() {
    // Logs go to stderr since stdout carries the LSP transport.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting zigls server");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
