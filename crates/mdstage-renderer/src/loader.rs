//! Loader capability interface.

use std::path::Path;

/// Capability handed to render engines for talking back to the build host.
///
/// Deliberately narrow: engines may report files the rendered output depends
/// on (so the host can re-run the transform when they change) and nothing
/// else.
pub trait LoaderHandle {
    /// Register a source-relative file as a build dependency of the current
    /// document.
    fn add_dependency(&mut self, path: &Path);
}

/// No-op [`LoaderHandle`] that discards all dependency reports.
///
/// Use for standalone rendering outside a build pipeline.
#[derive(Debug, Default)]
pub struct NullLoaderHandle;

impl LoaderHandle for NullLoaderHandle {
    fn add_dependency(&mut self, _path: &Path) {}
}
