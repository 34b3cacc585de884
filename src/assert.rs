//! The [`assert`](self) module contains the assertion entry point that
//! connects candidates and matchers.

use crate::{Description, Matcher};

/// Assert that the passed `candidate` is matched by `matcher`.
///
/// On a mismatch the assertion panics with the expectation of the matcher
/// and its mismatch report:
///
/// ```text
/// Expected: ...
///      but: ...
/// ```
#[track_caller]
pub fn assert_that<T, M>(candidate: T, matcher: M)
where
    M: Matcher<T>,
{
    if matcher.matches(&candidate) {
        return;
    }

    let mut description = String::new();
    description.append_text("\nExpected: ");
    matcher.describe_to(&mut description);
    description.append_text("\n     but: ");
    matcher.describe_mismatch(&candidate, &mut description);

    panic!("{description}");
}
