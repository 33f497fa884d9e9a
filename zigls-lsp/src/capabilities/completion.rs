//! Completion: error tags and enum literals, aggregated across a document
//! and the imports it retains.

use tower_lsp::lsp_types::{CompletionItem, CompletionItemKind, Position};

/// Completion context at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagContext {
    /// After `error.` — complete error tags.
    ErrorTag { prefix: String },
    /// After a bare `.` — complete enum literals.
    EnumLiteral { prefix: String },
    None,
}

/// Detect whether the cursor sits in a tag position.
#[must_use]
pub fn detect_context(text: &str, position: Position) -> TagContext {
    let Some(line) = text.lines().nth(position.line as usize) else {
        return TagContext::None;
    };
    let before_cursor: String = line.chars().take(position.character as usize).collect();

    let Some(dot) = before_cursor.rfind('.') else {
        return TagContext::None;
    };
    let prefix = before_cursor[dot + 1..].to_string();
    if !prefix.chars().all(|ch| ch.is_alphanumeric() || ch == '_') {
        return TagContext::None;
    }

    let head = &before_cursor[..dot];
    if head.ends_with("error") && !ends_with_identifier_char(&head[..head.len() - 5]) {
        return TagContext::ErrorTag { prefix };
    }
    TagContext::EnumLiteral { prefix }
}

fn ends_with_identifier_char(text: &str) -> bool {
    text.chars()
        .next_back()
        .is_some_and(|ch| ch.is_alphanumeric() || ch == '_')
}

/// Convert tag labels to completion items, filtered by the typed prefix.
#[must_use]
pub fn tag_completion_items(
    labels: &[String],
    kind: CompletionItemKind,
    prefix: &str,
) -> Vec<CompletionItem> {
    labels
        .iter()
        .filter(|label| label.starts_with(prefix))
        .map(|label| CompletionItem {
            label: label.clone(),
            kind: Some(kind),
            ..Default::default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_error_tag_context() {
        let context = detect_context(
            "    return error.OutOf",
            Position {
                line: 0,
                character: 22,
            },
        );
        assert_eq!(
            context,
            TagContext::ErrorTag {
                prefix: "OutOf".to_string()
            }
        );
    }

    #[test]
    fn test_detect_enum_literal_context() {
        let context = detect_context(
            "    .mode = .deb",
            Position {
                line: 0,
                character: 16,
            },
        );
        assert_eq!(
            context,
            TagContext::EnumLiteral {
                prefix: "deb".to_string()
            }
        );
    }

    #[test]
    fn test_identifier_ending_in_error_is_not_an_error_tag() {
        let context = detect_context(
            "    my_error.foo",
            Position {
                line: 0,
                character: 16,
            },
        );
        assert_eq!(
            context,
            TagContext::EnumLiteral {
                prefix: "foo".to_string()
            }
        );
    }

    #[test]
    fn test_no_context_without_a_dot() {
        let context = detect_context(
            "const x = 1;",
            Position {
                line: 0,
                character: 12,
            },
        );
        assert_eq!(context, TagContext::None);
    }

    #[test]
    fn test_tag_items_filter_by_prefix() {
        let labels = vec!["OutOfMemory".to_string(), "AccessDenied".to_string()];
        let items = tag_completion_items(&labels, CompletionItemKind::CONSTANT, "Out");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "OutOfMemory");
        assert_eq!(items[0].kind, Some(CompletionItemKind::CONSTANT));
    }
}
