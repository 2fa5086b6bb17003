//! Markdown metadata extraction for mdstage.
//!
//! This crate derives the per-document metadata the transform layer tracks:
//!
//! - [`parse_frontmatter`]: Split a raw document into YAML frontmatter data
//!   and body content
//! - [`infer_title`]: Resolve a document title from frontmatter or the first
//!   H1 heading
//! - [`extract_headers`]: Collect the heading outline for a set of levels
//!
//! # Example
//!
//! ```
//! use mdstage_meta::{extract_headers, infer_title, parse_frontmatter};
//!
//! let raw = "---\ntitle: Guide\n---\n## Setup\n";
//! let frontmatter = parse_frontmatter(raw)?;
//! assert_eq!(
//!     infer_title(&frontmatter.data, &frontmatter.content),
//!     Some("Guide".to_owned()),
//! );
//!
//! let headers = extract_headers(&frontmatter.content, &[2, 3]);
//! assert_eq!(headers[0].title, "Setup");
//! # Ok::<(), mdstage_meta::MetaError>(())
//! ```

mod frontmatter;
mod headers;
mod title;

pub use frontmatter::{Frontmatter, FrontmatterData, parse_frontmatter};
pub use headers::{HeaderEntry, extract_headers};
pub use title::infer_title;

/// Error type for metadata extraction.
#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    /// The frontmatter region is not a valid YAML mapping.
    #[error("invalid frontmatter: {0}")]
    Frontmatter(#[from] serde_yaml::Error),
}
