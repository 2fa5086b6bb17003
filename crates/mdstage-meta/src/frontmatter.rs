//! YAML frontmatter parsing.
//!
//! A document carries frontmatter when its very first line is `---`. The
//! region runs until the next line that is exactly `---` (or `...`, the YAML
//! end-of-document marker) and is parsed as a YAML mapping. Everything after
//! the closing fence is the document body.

use std::collections::BTreeMap;

use crate::MetaError;

/// Structured frontmatter data.
///
/// A `BTreeMap` keeps keys ordered, so JSON serialization of the same data is
/// always byte-identical. Both the emitted component script and snapshot
/// comparison rely on that.
pub type FrontmatterData = BTreeMap<String, serde_json::Value>;

/// Result of splitting a document into frontmatter and body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frontmatter {
    /// Parsed frontmatter mapping (empty when the document has none).
    pub data: FrontmatterData,
    /// Document body with the frontmatter region stripped.
    pub content: String,
}

/// Parse the frontmatter region of a raw markdown document.
///
/// Documents without an opening `---` fence, and documents whose fence is
/// never closed, are returned unchanged with empty data.
///
/// # Errors
///
/// Returns [`MetaError::Frontmatter`] when the region is not a valid YAML
/// mapping.
pub fn parse_frontmatter(raw: &str) -> Result<Frontmatter, MetaError> {
    let Some(rest) = strip_opening_fence(raw) else {
        return Ok(Frontmatter {
            data: FrontmatterData::new(),
            content: raw.to_owned(),
        });
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if is_closing_fence(line) {
            let data = parse_yaml_mapping(&rest[..offset])?;
            let content = rest[offset + line.len()..].to_owned();
            return Ok(Frontmatter { data, content });
        }
        offset += line.len();
    }

    // Unterminated fence: the opening `---` is ordinary content.
    Ok(Frontmatter {
        data: FrontmatterData::new(),
        content: raw.to_owned(),
    })
}

/// Strip a `---` line at the very start of the document.
///
/// Returns the text after the fence line, or `None` when the document does
/// not open with one.
fn strip_opening_fence(raw: &str) -> Option<&str> {
    let rest = raw.strip_prefix("---")?;
    let rest = rest.strip_prefix('\r').unwrap_or(rest);
    rest.strip_prefix('\n')
}

fn is_closing_fence(line: &str) -> bool {
    let trimmed = line.trim_end_matches(['\n', '\r']);
    trimmed == "---" || trimmed == "..."
}

fn parse_yaml_mapping(yaml: &str) -> Result<FrontmatterData, MetaError> {
    if yaml.trim().is_empty() {
        return Ok(FrontmatterData::new());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_without_frontmatter() {
        let raw = "# Title\n\nBody text\n";
        let result = parse_frontmatter(raw).unwrap();
        assert!(result.data.is_empty());
        assert_eq!(result.content, raw);
    }

    #[test]
    fn test_parse_basic_frontmatter() {
        let raw = "---\ntitle: Hello\ndraft: true\n---\n# Hi\n";
        let result = parse_frontmatter(raw).unwrap();
        assert_eq!(result.data.get("title"), Some(&serde_json::json!("Hello")));
        assert_eq!(result.data.get("draft"), Some(&serde_json::json!(true)));
        assert_eq!(result.content, "# Hi\n");
    }

    #[test]
    fn test_parse_nested_values() {
        let raw = "---\nnav:\n  - label: Home\n    link: /\ncount: 3\n---\nbody";
        let result = parse_frontmatter(raw).unwrap();
        assert_eq!(
            result.data.get("nav"),
            Some(&serde_json::json!([{"label": "Home", "link": "/"}])),
        );
        assert_eq!(result.data.get("count"), Some(&serde_json::json!(3)));
        assert_eq!(result.content, "body");
    }

    #[test]
    fn test_parse_empty_region() {
        let result = parse_frontmatter("---\n---\nbody\n").unwrap();
        assert!(result.data.is_empty());
        assert_eq!(result.content, "body\n");
    }

    #[test]
    fn test_parse_yaml_document_end_marker() {
        let result = parse_frontmatter("---\ntitle: Hello\n...\nbody").unwrap();
        assert_eq!(result.data.get("title"), Some(&serde_json::json!("Hello")));
        assert_eq!(result.content, "body");
    }

    #[test]
    fn test_parse_crlf_line_endings() {
        let result = parse_frontmatter("---\r\ntitle: Hello\r\n---\r\nbody").unwrap();
        assert_eq!(result.data.get("title"), Some(&serde_json::json!("Hello")));
        assert_eq!(result.content, "body");
    }

    #[test]
    fn test_parse_unterminated_fence_is_content() {
        let raw = "---\ntitle: Hello\n";
        let result = parse_frontmatter(raw).unwrap();
        assert!(result.data.is_empty());
        assert_eq!(result.content, raw);
    }

    #[test]
    fn test_parse_thematic_break_not_frontmatter() {
        // A `---` later in the document is a thematic break, not a fence.
        let raw = "intro\n---\ntitle: x\n---\n";
        let result = parse_frontmatter(raw).unwrap();
        assert!(result.data.is_empty());
        assert_eq!(result.content, raw);
    }

    #[test]
    fn test_parse_longer_dash_run_not_fence() {
        let raw = "----\nbody\n";
        let result = parse_frontmatter(raw).unwrap();
        assert!(result.data.is_empty());
        assert_eq!(result.content, raw);
    }

    #[test]
    fn test_parse_malformed_yaml_errors() {
        assert!(parse_frontmatter("---\ntitle: [unclosed\n---\nbody").is_err());
    }

    #[test]
    fn test_parse_non_mapping_yaml_errors() {
        assert!(parse_frontmatter("---\njust a scalar\n---\nbody").is_err());
    }

    #[test]
    fn test_data_serializes_deterministically() {
        let raw = "---\nzebra: 1\nalpha: 2\n---\n";
        let result = parse_frontmatter(raw).unwrap();
        assert_eq!(
            serde_json::to_string(&result.data).unwrap(),
            r#"{"alpha":2,"zebra":1}"#,
        );
    }
}
