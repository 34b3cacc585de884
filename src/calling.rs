//! The [`calling`](self) module defers a function call so a matcher can
//! perform it later.

use crate::Callable;

/// Create a new [`Calling`] that wraps the passed `target` so a matcher can
/// invoke it later.
///
/// Arguments for the call are bound with [`with_args`](Calling::with_args):
///
/// ```
/// use raises::{assert_that, calling, raises};
///
/// fn parse(input: &str) -> i32 {
///     input.parse().unwrap_or_else(|_| panic!("invalid number: {input}"))
/// }
///
/// assert_that(calling(parse).with_args(("twelve",)), raises::<String>());
/// ```
pub fn calling<F>(target: F) -> Calling<F> {
    Calling { target, args: () }
}

/// A target callable bundled with a fixed list of arguments, to be called
/// later without passing anything.
///
/// `Calling` does no error handling of its own: whatever the target raises
/// unwinds out of [`invoke`](Self::invoke) unmodified.
#[must_use]
#[derive(Debug, Clone)]
pub struct Calling<F, A = ()> {
    target: F,
    args: A,
}

impl<F, A> Calling<F, A> {
    /// Record `args` as the arguments for the deferred call.
    ///
    /// The argument list is a tuple with one element per parameter of the
    /// target, `(x,)` for a single parameter. Binding again replaces the
    /// previously recorded arguments.
    pub fn with_args<B>(self, args: B) -> Calling<F, B> {
        Calling {
            target: self.target,
            args,
        }
    }

    /// Perform the deferred call, forwarding the bound arguments to the
    /// target.
    ///
    /// The arguments are cloned into the call, so the same `Calling` can be
    /// invoked repeatedly.
    pub fn invoke(&self)
    where
        A: Arguments<F>,
    {
        self.args.apply(&self.target);
    }
}

impl<F, A> Callable for Calling<F, A>
where
    A: Arguments<F>,
{
    fn invoke(&self) {
        Calling::invoke(self);
    }
}

/// Argument lists that can be forwarded to a target callable.
///
/// Implemented for tuples of up to ten [`Clone`] elements where the target
/// is callable with the element types of the tuple.
pub trait Arguments<F> {
    /// Call `target` with a copy of the recorded arguments, discarding the
    /// result of the call.
    fn apply(&self, target: &F);
}

impl<F, R> Arguments<F> for ()
where
    F: Fn() -> R,
{
    fn apply(&self, target: &F) {
        target();
    }
}

macro_rules! impl_arguments {
    ($( $arg_name:ident: $arg_type:ident ),+) => {
        impl<F, R, $( $arg_type ),+> Arguments<F> for ($( $arg_type, )+)
        where
            F: Fn($( $arg_type ),+) -> R,
            $(
                $arg_type: Clone,
            )+
        {
            fn apply(&self, target: &F) {
                let ($( $arg_name, )+) = self;

                target($( $arg_name.clone() ),+);
            }
        }
    };
}

impl_arguments!(a0: T0);
impl_arguments!(a0: T0, a1: T1);
impl_arguments!(a0: T0, a1: T1, a2: T2);
impl_arguments!(a0: T0, a1: T1, a2: T2, a3: T3);
impl_arguments!(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4);
impl_arguments!(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4, a5: T5);
impl_arguments!(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4, a5: T5, a6: T6);
impl_arguments!(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4, a5: T5, a6: T6, a7: T7);
impl_arguments!(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4, a5: T5, a6: T6, a7: T7, a8: T8);
impl_arguments!(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4, a5: T5, a6: T6, a7: T7, a8: T8, a9: T9);
