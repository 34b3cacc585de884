use std::any::{type_name, Any};
use std::cell::RefCell;
use std::fmt::{Debug, Display};
use std::marker::PhantomData;

use regex::Regex;

use crate::capture::{capture, Raised};
use crate::{Callable, Description, Matcher, SelfDescribing};

/// Create a new [`Raises`] matcher that checks whether invoking a candidate
/// raises a panic whose payload is a value of type `E`.
///
/// The payload type follows the rules of [`panic!`]: a bare string literal
/// raises `&'static str`, a message formatted from runtime values raises
/// [`String`], and [`panic_any`](std::panic::panic_any) raises the value it
/// is given. A format whose arguments are all literals is folded into the
/// string literal at compile time and raises `&'static str` as well.
///
/// ```
/// use raises::{assert_that, calling, raises};
///
/// fn guard(limit: usize, value: usize) {
///     if value > limit {
///         panic!("value {value} exceeds limit {limit}");
///     }
/// }
///
/// assert_that(calling(guard).with_args((3, 5)), raises::<String>());
/// assert_that(
///     calling(guard).with_args((3, 5)),
///     raises::<String>().with_pattern("exceeds limit"),
/// );
/// ```
pub fn raises<E>() -> Raises<E> {
    Raises::new()
}

/// Matcher that invokes a candidate and checks that it raises a panic with
/// the expected payload type and, optionally, a message that matches a
/// pattern.
///
/// The matcher records the outcome of the most recent invocation together
/// with the identity of the candidate it belongs to, so a following report
/// for the same candidate reuses the outcome instead of invoking the
/// candidate a second time.
#[must_use]
#[derive(Debug)]
pub struct Raises<E> {
    pattern: Option<Regex>,
    state: RefCell<Captured>,
    _kind: PhantomData<E>,
}

impl<E> Raises<E> {
    /// Create a new [`Raises`] matcher without a message pattern.
    pub fn new() -> Self {
        Self {
            pattern: None,
            state: RefCell::new(Captured::default()),
            _kind: PhantomData,
        }
    }

    /// Additionally require the message of the payload to match `pattern`.
    ///
    /// The pattern is a regular expression that is searched anywhere in the
    /// message, it is not anchored.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression.
    #[track_caller]
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = match Regex::new(pattern) {
            Ok(pattern) => Some(pattern),
            Err(err) => panic!("invalid pattern for the raises matcher: {err}"),
        };

        self
    }
}

impl<E> Raises<E>
where
    E: Any + Display,
{
    /// Invoke the passed `candidate`, record the outcome and judge it
    /// against the expected payload type and pattern.
    fn check<C: Callable>(&self, candidate: &C) -> bool {
        let raised = capture(candidate);

        let mut state = self.state.borrow_mut();
        state.raised = raised;

        let raised = match state.raised.as_ref() {
            Some(raised) => raised,
            None => return false,
        };

        let actual = match raised.downcast_ref::<E>() {
            Some(actual) => actual,
            None => return false,
        };

        match self.pattern.as_ref() {
            Some(pattern) => pattern.is_match(&actual.to_string()),
            None => true,
        }
    }
}

impl<E> Default for Raises<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> SelfDescribing for Raises<E> {
    fn describe_to(&self, description: &mut dyn Description) {
        description.append_text(&format!(
            "Expected a callable raising {}",
            type_name::<E>()
        ));
    }
}

impl<C, E> Matcher<C> for Raises<E>
where
    C: Callable,
    E: Any + Debug + Display,
{
    fn matches(&self, candidate: &C) -> bool {
        if !candidate.is_callable() {
            return false;
        }

        self.state.borrow_mut().candidate = Some(CandidateId::of(candidate));

        self.check(candidate)
    }

    fn describe_mismatch(&self, candidate: &C, description: &mut dyn Description) {
        if !candidate.is_callable() {
            description.append_text(&format!("{} is not callable", type_name::<C>()));
            return;
        }

        let id = CandidateId::of(candidate);
        if self.state.borrow().candidate != Some(id) {
            // A candidate this matcher has not exercised yet; check it now.
            self.state.borrow_mut().candidate = Some(id);

            if self.check(candidate) {
                // The fresh invocation matches, there is no mismatch left to
                // report.
                return;
            }
        }

        let state = self.state.borrow();
        match state.raised.as_ref() {
            None => description.append_text("No exception raised."),
            Some(raised) => match raised.downcast_ref::<E>() {
                Some(actual) => {
                    if let Some(pattern) = self.pattern.as_ref() {
                        description.append_text(&format!(
                            "Correct assertion type raised, but the expected pattern (\"{pattern}\") not found. "
                        ));
                        description
                            .append_text(&format!("Exception message was: \"{actual}\""));
                    }
                }
                None => description.append_text(&format!(
                    "{} of type {} was raised instead",
                    raised.repr(),
                    raised.kind_name()
                )),
            },
        }
    }

    fn describe_match(&self, candidate: &C, description: &mut dyn Description) {
        // Invoke again so the report reflects this candidate even if the
        // matcher was used on another one in between.
        self.check(candidate);

        let state = self.state.borrow();
        match state.raised.as_ref() {
            Some(raised) => {
                let (repr, kind) = match raised.downcast_ref::<E>() {
                    Some(actual) => (format!("{actual:?}"), type_name::<E>()),
                    None => (raised.repr(), raised.kind_name()),
                };

                description.append_text(&format!("{repr} of type {kind} was raised."));
            }
            None => description.append_text("No exception raised."),
        }
    }
}

/// Outcome bookkeeping of the most recent candidate invocation.
#[derive(Debug, Default)]
struct Captured {
    /// Panic captured by the last invocation, `None` after a panic free run.
    raised: Option<Raised>,

    /// Identity of the candidate the outcome belongs to.
    candidate: Option<CandidateId>,
}

/// Identity token of a candidate, taken without keeping the candidate alive.
///
/// Only equality is meaningful. A later candidate reusing the address of a
/// dropped one reads as the same candidate, and zero-sized candidates may
/// share an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CandidateId(usize);

impl CandidateId {
    fn of<C>(candidate: &C) -> Self {
        Self((candidate as *const C).cast::<()>() as usize)
    }
}
