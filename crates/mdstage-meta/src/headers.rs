//! Heading outline extraction.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};

/// A single entry in a document's heading outline.
///
/// Entries are ordered by document position; order is significant when
/// comparing two outlines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    /// Heading text with inline markup flattened to plain text.
    pub title: String,
    /// Heading level (1-6).
    pub level: u8,
}

/// Extract the heading outline of a markdown body.
///
/// Collects headings whose level appears in `levels`, in document order.
/// Inline markup inside a heading is flattened: text and code spans are
/// concatenated, formatting is dropped.
#[must_use]
pub fn extract_headers(content: &str, levels: &[u8]) -> Vec<HeaderEntry> {
    let mut headers = Vec::new();
    let mut current: Option<(u8, String)> = None;

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                let level = heading_level_to_num(level);
                if levels.contains(&level) {
                    current = Some((level, String::new()));
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, title)) = current.take() {
                    headers.push(HeaderEntry {
                        title: title.trim().to_owned(),
                        level,
                    });
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buffer)) = current.as_mut() {
                    buffer.push_str(&text);
                }
            }
            _ => {}
        }
    }

    headers
}

/// Text of the first H1 heading, if any.
pub(crate) fn first_h1(content: &str) -> Option<String> {
    let mut buffer: Option<String> = None;

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => buffer = Some(String::new()),
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                if let Some(title) = buffer.take() {
                    return Some(title.trim().to_owned());
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(buffer) = buffer.as_mut() {
                    buffer.push_str(&text);
                }
            }
            _ => {}
        }
    }

    None
}

/// Convert heading level enum to number (1-6).
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
