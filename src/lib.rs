//! Matchers for asserting that a callable panics.
//!
//! The entry points are [`raises()`], which builds a matcher for an expected
//! panic payload type and an optional message pattern, and [`calling()`],
//! which defers a function call so the matcher can perform it.
//!
//! ```
//! use raises::{assert_that, calling, raises};
//!
//! fn checked(x: i32) {
//!     if x < 0 {
//!         panic!("negative input: {x}");
//!     }
//! }
//!
//! assert_that(
//!     calling(checked).with_args((-1,)),
//!     raises::<String>().with_pattern("negative input"),
//! );
//! ```

pub mod assert;
pub mod callable;
pub mod calling;
pub mod capture;
pub mod description;
pub mod matcher;

pub use assert::assert_that;
pub use callable::Callable;
pub use calling::{calling, Arguments, Calling};
pub use capture::{capture, Raised};
pub use description::Description;
pub use matcher::{raises, Matcher, Raises, SelfDescribing};
