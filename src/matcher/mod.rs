//! The [`matcher`](self) module defines the matcher traits the assertion
//! entry points are built on, and the [`Raises`] matcher itself.

mod raises;

use crate::Description;

pub use raises::{raises, Raises};

/// A value that can describe the expectation it stands for.
///
/// Split off from [`Matcher`] so the expectation can be rendered without
/// fixing the candidate type the matcher is used with.
pub trait SelfDescribing {
    /// Append a description of the expectation to `description`.
    fn describe_to(&self, description: &mut dyn Description);
}

/// A matcher is used to check if the passed candidate satisfies a
/// pre-defined expectation, and to render a report for either outcome.
pub trait Matcher<T>: SelfDescribing {
    /// Return `true` if the passed `candidate` satisfies the expectation,
    /// `false` if not.
    fn matches(&self, candidate: &T) -> bool;

    /// Append a report to `description` that explains why `candidate` did
    /// not match.
    ///
    /// Only called after [`matches`](Self::matches) returned `false` for the
    /// same candidate.
    fn describe_mismatch(&self, candidate: &T, description: &mut dyn Description);

    /// Append a report of a successful match of `candidate` to
    /// `description`.
    fn describe_match(&self, candidate: &T, description: &mut dyn Description);
}
