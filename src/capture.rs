//! The [`capture`](self) module invokes candidates and absorbs the panics
//! they raise.

use std::any::{type_name, Any};
use std::cell::Cell;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::panic::{catch_unwind, AssertUnwindSafe};

use once_cell::sync::Lazy;

use crate::Callable;

/// A panic captured from a candidate invocation.
///
/// Wraps the type-erased payload and renders it on a best-effort basis: the
/// payloads produced by [`panic!`] (`&'static str` and [`String`]) are
/// probed for their message text, anything else stays opaque.
pub struct Raised {
    payload: Box<dyn Any + Send + 'static>,
}

impl Raised {
    pub(crate) fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Return `true` if the payload is a value of type `E`.
    #[must_use]
    pub fn is<E: Any>(&self) -> bool {
        self.payload.is::<E>()
    }

    /// Get a reference to the payload as a value of type `E`, if it is one.
    #[must_use]
    pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
        self.payload.downcast_ref::<E>()
    }

    /// Get the message text of a string payload.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Render the payload the way the standard library renders absorbed
    /// panics: the quoted message for string payloads, `Box<dyn Any>` for
    /// everything else.
    #[must_use]
    pub fn repr(&self) -> String {
        match self.text() {
            Some(text) => format!("{text:?}"),
            None => String::from("Box<dyn Any>"),
        }
    }

    /// Name the type of the payload, as far as it can be recovered from the
    /// type-erased value.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        if self.is::<&'static str>() {
            type_name::<&str>()
        } else if self.is::<String>() {
            type_name::<String>()
        } else {
            "Box<dyn Any>"
        }
    }
}

impl Debug for Raised {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Raised")
            .field("payload", &self.repr())
            .finish()
    }
}

/// Invoke the passed `candidate` once and absorb any panic it raises.
///
/// Returns the captured panic, or `None` if the invocation completed. The
/// global panic hook is muted on the current thread while the candidate
/// runs, so absorbed panics do not clutter the output with messages and
/// backtraces.
///
/// The candidate is invoked unconditionally; probe
/// [`is_callable`](Callable::is_callable) first if the candidate may not be
/// invocable.
pub fn capture<C: Callable>(candidate: &C) -> Option<Raised> {
    // The candidate is only borrowed for the call and nothing is read back
    // from it after an unwind, so it is fine to treat it as unwind safe.
    silenced(|| catch_unwind(AssertUnwindSafe(|| candidate.invoke())))
        .err()
        .map(Raised::new)
}

/// Run `f` with panic output suppressed on the current thread.
fn silenced<R>(f: impl FnOnce() -> R) -> R {
    Lazy::force(&QUIET_HOOK);

    SUPPRESS_DEPTH.with(|depth| depth.set(depth.get() + 1));
    let result = f();
    SUPPRESS_DEPTH.with(|depth| depth.set(depth.get() - 1));

    result
}

/// Installs a hook that delegates to the previous one unless the current
/// thread is inside [`capture`]. Installed once, on the first capture.
static QUIET_HOOK: Lazy<()> = Lazy::new(|| {
    let previous = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |info| {
        if SUPPRESS_DEPTH.with(Cell::get) == 0 {
            previous(info);
        }
    }));
});

thread_local! {
    static SUPPRESS_DEPTH: Cell<usize> = const { Cell::new(0) };
}

#[cfg(test)]
mod tests {
    use std::panic::panic_any;

    use super::capture;

    #[test]
    fn captures_a_str_payload() {
        let raised = capture(&|| panic!("boom")).unwrap();
        assert!(raised.is::<&str>());
        assert_eq!(raised.text(), Some("boom"));
        assert_eq!(raised.repr(), "\"boom\"");
    }

    #[test]
    fn captures_a_formatted_payload() {
        let code = 7;
        let raised = capture(&|| panic!("code {code}")).unwrap();
        assert!(raised.is::<String>());
        assert_eq!(raised.text(), Some("code 7"));
    }

    #[test]
    fn keeps_other_payloads_opaque() {
        let raised = capture(&|| panic_any(42_u8)).unwrap();
        assert_eq!(raised.text(), None);
        assert_eq!(raised.repr(), "Box<dyn Any>");
        assert_eq!(raised.kind_name(), "Box<dyn Any>");
        assert_eq!(raised.downcast_ref::<u8>(), Some(&42));
    }

    #[test]
    fn captures_nothing_from_a_completed_invocation() {
        assert!(capture(&|| ()).is_none());
    }
}
