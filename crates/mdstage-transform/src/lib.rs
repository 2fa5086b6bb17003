//! Memoized markdown-to-component transform for mdstage.
//!
//! A build pipeline invokes the transform several times per file per build
//! (once per sub-block extraction), and a watch process invokes it on every
//! edit. This crate keeps that cheap with two independent bounded caches:
//!
//! - [`TransformCache`]: content-addressed memoization of finished component
//!   strings, keyed by a [`Fingerprint`] of (file path, raw source)
//! - [`MetadataTracker`]: per-file snapshots of derived metadata (title,
//!   frontmatter, heading outline) used in development builds to detect
//!   changes that do not appear in the rendered output but that downstream
//!   consumers depend on
//!
//! When tracked metadata drifts, an `update` event carrying the file's
//! identity is published on the shared [`ChangeNotifier`] so watch
//! infrastructure can force a full reload of the file.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use std::sync::Arc;
//! use mdstage_transform::{ChangeNotifier, TransformOptions, Transformer};
//! use mdstage_renderer::NullLoaderHandle;
//!
//! let notifier = Arc::new(ChangeNotifier::new());
//! notifier.subscribe(|file| println!("reload {}", file.display()));
//!
//! let mut transformer = Transformer::new(notifier);
//! let component = transformer.transform(
//!     Path::new("/docs/guide.md"),
//!     "---\ntitle: Guide\n---\n# Hi\n",
//!     &TransformOptions::new("/docs"),
//!     &mut NullLoaderHandle,
//! )?;
//! assert!(component.contains("<h1>Hi</h1>"));
//! # Ok::<(), mdstage_transform::TransformError>(())
//! ```

mod cache;
mod component;
mod fingerprint;
mod notifier;
mod tracker;
mod transformer;

pub use cache::{DEFAULT_CAPACITY, TransformCache};
pub use fingerprint::Fingerprint;
pub use notifier::ChangeNotifier;
pub use tracker::{MetadataSnapshot, MetadataTracker};
pub use transformer::{DEFAULT_HEADER_LEVELS, TransformError, TransformOptions, Transformer};

// Re-export the metadata types appearing in the public API for convenience
pub use mdstage_meta::{FrontmatterData, HeaderEntry};
