//! Default markdown render engine.

use std::path::{Path, PathBuf};

use pulldown_cmark::{Event, Options, Parser, Tag};

use mdstage_meta::FrontmatterData;

use crate::RenderError;
use crate::loader::LoaderHandle;

/// Result of rendering a document body.
#[derive(Clone, Debug)]
pub struct Rendered {
    /// Rendered HTML markup.
    pub html: String,
}

/// Per-invocation context passed to a render engine.
pub struct RenderContext<'a> {
    /// Frontmatter data of the document being rendered.
    pub frontmatter: &'a FrontmatterData,
    /// Path of the document relative to the source directory, with `/`
    /// separators.
    pub relative_path: &'a str,
    /// Capability for reporting build dependencies.
    pub loader: &'a mut dyn LoaderHandle,
}

/// A markdown render engine.
///
/// Implemented by [`MarkdownEngine`]; hosts may provide their own engine to
/// customize rendering.
pub trait RenderEngine {
    /// Render a document body to markup.
    ///
    /// # Errors
    ///
    /// Engine failures abort the transform of the current document; the
    /// error surfaces to the build pipeline uninterpreted.
    fn render(&mut self, content: &str, ctx: RenderContext<'_>) -> Result<Rendered, RenderError>;
}

/// Default render engine built on pulldown-cmark.
///
/// GFM extensions (tables, strikethrough, task lists) are enabled by default.
/// Local link and image targets are reported to the [`LoaderHandle`] as build
/// dependencies, resolved against the directory of the rendering document.
#[derive(Debug)]
pub struct MarkdownEngine {
    gfm: bool,
}

impl MarkdownEngine {
    /// Create a new engine with GFM enabled.
    #[must_use]
    pub fn new() -> Self {
        Self { gfm: true }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }
}

impl Default for MarkdownEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderEngine for MarkdownEngine {
    fn render(&mut self, content: &str, ctx: RenderContext<'_>) -> Result<Rendered, RenderError> {
        let mut events = Vec::new();
        for event in Parser::new_ext(content, self.parser_options()) {
            if let Event::Start(Tag::Link { dest_url, .. } | Tag::Image { dest_url, .. }) = &event
                && let Some(dependency) = local_dependency(ctx.relative_path, dest_url)
            {
                ctx.loader.add_dependency(&dependency);
            }
            events.push(event);
        }

        let mut html = String::with_capacity(content.len() * 2);
        pulldown_cmark::html::push_html(&mut html, events.into_iter());
        Ok(Rendered { html })
    }
}

/// Resolve a link target to a source-relative dependency path.
///
/// Absolute URLs, anchors and site-absolute paths are not file dependencies
/// and return `None`. Relative targets resolve against the directory of
/// `relative_path`; any fragment or query suffix is dropped.
fn local_dependency(relative_path: &str, target: &str) -> Option<PathBuf> {
    if target.is_empty()
        || target.starts_with('#')
        || target.starts_with('/')
        || target.contains("://")
        || target.starts_with("mailto:")
    {
        return None;
    }

    let target = target
        .split_once(['#', '?'])
        .map_or(target, |(path, _)| path);
    if target.is_empty() {
        return None;
    }

    let dir = relative_path.rsplit_once('/').map_or("", |(dir, _)| dir);
    if dir.is_empty() {
        Some(PathBuf::from(target))
    } else {
        Some(Path::new(dir).join(target))
    }
}
