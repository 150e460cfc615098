use tracing::debug;

/// Find every fenced block opened by ```<label> and return the trimmed
/// body of each, in order of appearance.
///
/// The opener must sit at the end of its own line (trailing whitespace is
/// tolerated). The body runs until the next ``` fence and may span many
/// lines, contain nested braces/brackets, and be surrounded by prose.
fn find_fenced(text: &str, label: &str) -> Vec<String> {
    let opener = format!("```{}", label);
    let mut bodies = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(&opener) {
        let after = &rest[start + opener.len()..];

        let Some(newline) = after.find('\n') else {
            break;
        };

        // Not a fence opener if something other than whitespace follows
        // the label on the same line (e.g. ```jsonl).
        if !after[..newline].trim().is_empty() {
            rest = after;
            continue;
        }

        let body = &after[newline + 1..];
        match body.find("```") {
            Some(end) => {
                bodies.push(body[..end].trim().to_string());
                rest = &body[end + 3..];
            }
            None => break, // Unterminated fence
        }
    }

    debug!(label, count = bodies.len(), "Scanned for fenced blocks");
    bodies
}

/// Extract the improved document body from a raw model reply.
///
/// Returns the FIRST ```markdown block, trimmed. A missing block is not an
/// error: the caller treats an empty document as "nothing to write".
pub fn extract_markdown_block(text: &str) -> String {
    find_fenced(text, "markdown").into_iter().next().unwrap_or_default()
}

/// Extract the changes payload from a raw model reply.
///
/// Returns the LAST ```json block: models sometimes emit a draft block
/// early and a corrected one later, and the final block is the one the
/// prompt asks for. `None` means no json block exists at all.
pub fn extract_json_block(text: &str) -> Option<String> {
    find_fenced(text, "json").pop()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_takes_first_block() {
        let text = "intro\n```markdown\n# First\n```\nmore\n```markdown\n# Second\n```\n";
        assert_eq!(extract_markdown_block(text), "# First");
    }

    #[test]
    fn markdown_missing_is_empty() {
        assert_eq!(extract_markdown_block("no fences here"), "");
    }

    #[test]
    fn json_takes_last_block() {
        let text = r#"
Here is a draft:
```json
{"changes_made": ["draft"]}
```
Actually, the final version:
```json
{"changes_made": ["final"]}
```
"#;
        let block = extract_json_block(text).unwrap();
        assert!(block.contains("final"));
        assert!(!block.contains("draft"));
    }

    #[test]
    fn json_missing_is_none() {
        assert_eq!(extract_json_block("plain prose, no payload"), None);
    }

    #[test]
    fn multiline_body_with_nested_brackets() {
        let text = "```json\n{\n  \"changes_made\": [\n    \"added {braces} and [brackets]\"\n  ]\n}\n```";
        let block = extract_json_block(text).unwrap();
        assert!(block.starts_with('{'));
        assert!(block.ends_with('}'));
        assert!(block.contains("[brackets]"));
    }

    #[test]
    fn prose_around_block_is_ignored() {
        let text = "Sure! Here you go.\n```markdown\n# README\n```\nHope that helps.";
        assert_eq!(extract_markdown_block(text), "# README");
    }

    #[test]
    fn label_prefix_does_not_match() {
        // ```jsonl is a different fence kind, not a json block
        let text = "```jsonl\n{\"a\": 1}\n```";
        assert_eq!(extract_json_block(text), None);
    }

    #[test]
    fn unterminated_fence_is_skipped() {
        let text = "```json\n{\"changes_made\": []}";
        assert_eq!(extract_json_block(text), None);
    }
}
