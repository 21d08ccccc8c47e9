//! Splitting raw input lines into flavor texts.
//!
//! A flavor text is a phrase terminated by [`MARKER`]. A line such as
//! `Thinking... Moonwalking...` holds two of them. Text after the last marker
//! has no terminator and is ignored, so a line without any marker yields
//! nothing. Segments that are blank after trimming are dropped silently.

/// The literal sequence that terminates a flavor text.
pub const MARKER: &str = "...";

/// Returns the flavor texts in `line`, left to right.
///
/// Each phrase is trimmed of surrounding whitespace. This never fails:
/// malformed lines simply produce no phrases.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    let mut segments = line.split(MARKER).peekable();
    std::iter::from_fn(move || {
        while let Some(segment) = segments.next() {
            // The final segment is never followed by a marker.
            segments.peek()?;
            let phrase = segment.trim();
            if !phrase.is_empty() {
                return Some(phrase);
            }
        }
        None
    })
}
