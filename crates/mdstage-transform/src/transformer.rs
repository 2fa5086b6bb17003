//! Transform orchestration.
//!
//! [`Transformer`] sequences one transform invocation: fingerprint the raw
//! source, serve a cached component when the mode allows it, otherwise
//! extract frontmatter, run metadata change detection (dev client builds
//! only), render the body and assemble the component.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mdstage_meta::{Frontmatter, MetaError, extract_headers, infer_title, parse_frontmatter};
use mdstage_renderer::{LoaderHandle, MarkdownEngine, RenderContext, RenderEngine, RenderError};

use crate::cache::TransformCache;
use crate::component::assemble_component;
use crate::fingerprint::Fingerprint;
use crate::notifier::ChangeNotifier;
use crate::tracker::{MetadataSnapshot, MetadataTracker};

/// Default heading levels tracked for change detection.
pub const DEFAULT_HEADER_LEVELS: [u8; 2] = [2, 3];

/// Error type for the transform step.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// Frontmatter extraction failed.
    #[error(transparent)]
    Meta(#[from] MetaError),
    /// The render engine failed.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// Frontmatter data could not be serialized into the component script.
    #[error("failed to serialize frontmatter data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Per-invocation context for a transform.
///
/// `block_request` is the explicit signal that this invocation is a
/// re-entrant sub-block extraction for an already-processed document; such
/// calls may serve the cached component and must not re-run change
/// detection.
#[derive(Clone, Debug)]
pub struct TransformOptions {
    /// Production build: content is immutable for the build's duration.
    pub production: bool,
    /// Server-target build: no client to hot-reload, metadata tracking off.
    pub server_target: bool,
    /// Re-entrant sub-block request for an already-processed document.
    pub block_request: bool,
    /// Base directory for computing source-relative paths.
    pub source_dir: PathBuf,
    /// Heading levels included in the tracked outline.
    pub header_levels: Vec<u8>,
}

impl TransformOptions {
    /// Create development-client options with default heading levels.
    #[must_use]
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            production: false,
            server_target: false,
            block_request: false,
            source_dir: source_dir.into(),
            header_levels: DEFAULT_HEADER_LEVELS.to_vec(),
        }
    }
}

/// How one invocation will be served.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RenderPlan {
    /// Serve the cached component without re-rendering.
    CachedHit,
    /// Full render, no metadata tracking (production or server target).
    Render,
    /// Full render plus metadata change detection (dev client builds).
    RenderTracked,
}

/// Memoized markdown-to-component transformer.
///
/// Owns the component cache and the metadata tracker; a build worker keeps
/// one instance alive across invocations so repeated transforms of unchanged
/// files are served from memory. Access is single-threaded by construction
/// ([`transform`](Self::transform) takes `&mut self`); a multi-threaded host
/// must wrap the transformer in its own mutual exclusion.
pub struct Transformer {
    cache: TransformCache,
    tracker: MetadataTracker,
    notifier: Arc<ChangeNotifier>,
    engine: Box<dyn RenderEngine>,
}

impl Transformer {
    /// Create a transformer using the default [`MarkdownEngine`].
    #[must_use]
    pub fn new(notifier: Arc<ChangeNotifier>) -> Self {
        Self::with_engine(notifier, Box::new(MarkdownEngine::new()))
    }

    /// Create a transformer with a custom render engine.
    #[must_use]
    pub fn with_engine(notifier: Arc<ChangeNotifier>, engine: Box<dyn RenderEngine>) -> Self {
        Self {
            cache: TransformCache::new(),
            tracker: MetadataTracker::new(),
            notifier,
            engine,
        }
    }

    /// The shared change notifier.
    #[must_use]
    pub fn notifier(&self) -> &Arc<ChangeNotifier> {
        &self.notifier
    }

    /// Transform a raw markdown document into a component string.
    ///
    /// # Errors
    ///
    /// Fails when frontmatter is malformed or the render engine errors.
    /// There is no retry or fallback; the caller decides whether to fail the
    /// build or report a per-file diagnostic.
    pub fn transform(
        &mut self,
        file: &Path,
        raw: &str,
        options: &TransformOptions,
        loader: &mut dyn LoaderHandle,
    ) -> Result<String, TransformError> {
        let fingerprint = Fingerprint::compute(file, raw);
        let plan = self.plan(&fingerprint, options);

        if plan == RenderPlan::CachedHit
            && let Some(cached) = self.cache.get(&fingerprint)
        {
            tracing::debug!(file = %file.display(), "serving cached component");
            return Ok(cached.to_owned());
        }

        let frontmatter = parse_frontmatter(raw)?;

        if plan == RenderPlan::RenderTracked {
            self.track_metadata(file, &frontmatter, &options.header_levels);
        }

        let relative_path = relative_source_path(file, &options.source_dir);
        let rendered = self.engine.render(
            &frontmatter.content,
            RenderContext {
                frontmatter: &frontmatter.data,
                relative_path: &relative_path,
                loader,
            },
        )?;

        let data_json = serde_json::to_string(&frontmatter.data)?;
        let component = assemble_component(&rendered.html, &data_json);

        self.cache.put(fingerprint, component.clone());
        Ok(component)
    }

    /// Decide how an invocation is served.
    ///
    /// The cached component may only short-circuit a production build (content
    /// is immutable for its duration) or a sub-block re-request (the document
    /// was fully processed moments ago); a plain dev request re-renders even
    /// on a fingerprint hit so change detection observes it.
    fn plan(&self, fingerprint: &Fingerprint, options: &TransformOptions) -> RenderPlan {
        if (options.production || options.block_request) && self.cache.contains(fingerprint) {
            RenderPlan::CachedHit
        } else if options.production || options.server_target {
            RenderPlan::Render
        } else {
            RenderPlan::RenderTracked
        }
    }

    /// Diff derived metadata against the last snapshot and notify watchers.
    ///
    /// The first observation of a file is never a change. The snapshot is
    /// overwritten unconditionally, changed or not.
    fn track_metadata(&mut self, file: &Path, frontmatter: &Frontmatter, header_levels: &[u8]) {
        let snapshot = MetadataSnapshot {
            inferred_title: infer_title(&frontmatter.data, &frontmatter.content),
            frontmatter: frontmatter.data.clone(),
            headers: extract_headers(&frontmatter.content, header_levels),
        };

        if let Some(previous) = self.tracker.get(file)
            && snapshot.differs_from(previous)
        {
            tracing::debug!(file = %file.display(), "metadata changed, forcing reload");
            self.notifier.notify_update(file);
        }

        self.tracker.put(file.to_path_buf(), snapshot);
    }
}

/// Path of `file` relative to `source_dir`, with separators normalized
/// to `/`.
///
/// Files outside `source_dir` keep their full path.
fn relative_source_path(file: &Path, source_dir: &Path) -> String {
    let relative = file.strip_prefix(source_dir).unwrap_or(file);
    relative
        .to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, "/")
}
