//! The [`description`](self) module contains the sink that matchers write
//! their reports to.

/// Append-only sink for the text a matcher produces about an expectation or
/// a candidate.
///
/// The assertion entry point owns the sink and passes it to the different
/// `describe` methods of the matcher. [`String`] is the canonical
/// implementation.
pub trait Description {
    /// Append the passed `text` to the description.
    fn append_text(&mut self, text: &str);
}

impl Description for String {
    fn append_text(&mut self, text: &str) {
        self.push_str(text);
    }
}
