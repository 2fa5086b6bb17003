//! Component string assembly.

/// Assemble the final component from rendered markup and serialized
/// frontmatter data.
///
/// The shape is a fixed contract with the consuming build pipeline: a
/// template root element wrapping the markup, and a script block exporting
/// `data` and `meta`, both set to the frontmatter data.
pub(crate) fn assemble_component(html: &str, data_json: &str) -> String {
    format!(
        "<template>\n\
         <div>{html}</div>\n\
         </template>\n\
         <script>\n\
         export default {{\n\
         data: () => ({data_json}),\n\
         meta: {data_json},\n\
         }}\n\
         </script>"
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_component_shape() {
        let component = assemble_component("<h1>Hi</h1>", r#"{"title":"Hello"}"#);
        assert_eq!(
            component,
            "<template>\n\
             <div><h1>Hi</h1></div>\n\
             </template>\n\
             <script>\n\
             export default {\n\
             data: () => ({\"title\":\"Hello\"}),\n\
             meta: {\"title\":\"Hello\"},\n\
             }\n\
             </script>",
        );
    }

    #[test]
    fn test_empty_frontmatter_exports_empty_object() {
        let component = assemble_component("", "{}");
        assert!(component.contains("data: () => ({}),"));
        assert!(component.contains("meta: {},"));
    }
}
