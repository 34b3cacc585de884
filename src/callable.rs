//! The [`callable`](self) module defines the candidate contract of the
//! [`Raises`](crate::Raises) matcher.

/// A candidate the [`Raises`](crate::Raises) matcher can exercise: a value
/// that wraps a call taking no arguments.
///
/// Every closure and function without parameters is a candidate through the
/// blanket implementation, with the return value of the call discarded.
/// [`Calling`](crate::Calling) implements the trait for deferred calls with
/// bound arguments.
pub trait Callable {
    /// Return `false` if the value does not actually wrap anything that can
    /// be invoked. Wrappers around dynamically looked up targets may have no
    /// target at all; the matcher refuses such candidates without invoking
    /// them.
    fn is_callable(&self) -> bool {
        true
    }

    /// Perform the wrapped call once. Panics raised by the call unwind to
    /// the caller unmodified.
    ///
    /// Callers that accept arbitrary candidates usually consult
    /// [`is_callable`](Self::is_callable) first, but are not required to.
    fn invoke(&self);
}

impl<F, R> Callable for F
where
    F: Fn() -> R,
{
    fn invoke(&self) {
        self();
    }
}
