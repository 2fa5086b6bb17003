//! Document title inference.

use serde_json::Value;

use crate::frontmatter::FrontmatterData;
use crate::headers::first_h1;

/// Infer the title of a document.
///
/// Resolution order:
/// 1. `home: true` in frontmatter names the page "Home"
/// 2. a string `title` frontmatter field
/// 3. the text of the first H1 heading in the body
#[must_use]
pub fn infer_title(data: &FrontmatterData, content: &str) -> Option<String> {
    if data.get("home") == Some(&Value::Bool(true)) {
        return Some("Home".to_owned());
    }
    if let Some(Value::String(title)) = data.get("title") {
        return Some(title.clone());
    }
    first_h1(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_frontmatter;

    fn data_for(raw: &str) -> (FrontmatterData, String) {
        let frontmatter = parse_frontmatter(raw).unwrap();
        (frontmatter.data, frontmatter.content)
    }

    #[test]
    fn test_home_page_wins() {
        let (data, content) = data_for("---\nhome: true\ntitle: Ignored\n---\n# Also ignored\n");
        assert_eq!(infer_title(&data, &content), Some("Home".to_owned()));
    }

    #[test]
    fn test_frontmatter_title_beats_heading() {
        let (data, content) = data_for("---\ntitle: From Frontmatter\n---\n# From Heading\n");
        assert_eq!(infer_title(&data, &content), Some("From Frontmatter".to_owned()));
    }

    #[test]
    fn test_falls_back_to_first_h1() {
        let (data, content) = data_for("# Heading Title\n\ntext\n");
        assert_eq!(infer_title(&data, &content), Some("Heading Title".to_owned()));
    }

    #[test]
    fn test_non_string_title_ignored() {
        let (data, content) = data_for("---\ntitle: 42\n---\n# Fallback\n");
        assert_eq!(infer_title(&data, &content), Some("Fallback".to_owned()));
    }

    #[test]
    fn test_home_false_is_not_home() {
        let (data, content) = data_for("---\nhome: false\n---\nno heading\n");
        assert_eq!(infer_title(&data, &content), None);
    }

    #[test]
    fn test_untitled_document() {
        let (data, content) = data_for("just text\n");
        assert_eq!(infer_title(&data, &content), None);
    }
}
