//! Render engine abstraction for mdstage.
//!
//! The transform layer renders document bodies through the [`RenderEngine`]
//! trait so a host can substitute its own markdown pipeline. The default
//! implementation, [`MarkdownEngine`], is built on pulldown-cmark with GFM
//! extensions.
//!
//! Engines receive a [`RenderContext`] carrying the document's frontmatter
//! data, its source-relative path, and a [`LoaderHandle`] — a narrow
//! capability for reporting build dependencies discovered during rendering
//! (local link and image targets), instead of a handle to the whole build
//! context.
//!
//! # Example
//!
//! ```
//! use mdstage_renderer::{MarkdownEngine, NullLoaderHandle, RenderContext, RenderEngine};
//!
//! let mut engine = MarkdownEngine::new();
//! let frontmatter = mdstage_meta::FrontmatterData::new();
//! let mut loader = NullLoaderHandle;
//! let rendered = engine.render(
//!     "# Hello\n",
//!     RenderContext {
//!         frontmatter: &frontmatter,
//!         relative_path: "guide.md",
//!         loader: &mut loader,
//!     },
//! )?;
//! assert!(rendered.html.contains("<h1>Hello</h1>"));
//! # Ok::<(), mdstage_renderer::RenderError>(())
//! ```

mod engine;
mod loader;

pub use engine::{MarkdownEngine, RenderContext, RenderEngine, Rendered};
pub use loader::{LoaderHandle, NullLoaderHandle};

/// Error type for render engines.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// An engine-specific rendering failure.
    #[error("render failed: {0}")]
    Engine(String),
}
