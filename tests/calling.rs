use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use pretty_assertions::assert_eq;
use raises::calling;

#[test]
fn forwards_the_bound_arguments_exactly_once() {
    let seen = Mutex::new(Vec::new());
    let record = |x: usize, label: &str| {
        seen.lock().unwrap().push((x, label.to_string()));
    };

    calling(record).with_args((7, "seven")).invoke();

    assert_eq!(*seen.lock().unwrap(), vec![(7, "seven".to_string())]);
}

#[test]
fn later_bindings_replace_earlier_ones() {
    let calls = AtomicUsize::new(0);
    let add = |x: usize| {
        calls.fetch_add(x, Ordering::Relaxed);
    };

    calling(add).with_args((3,)).with_args((10,)).invoke();

    assert_eq!(calls.load(Ordering::Relaxed), 10);
}

#[test]
fn a_target_without_parameters_needs_no_binding() {
    let calls = AtomicUsize::new(0);

    calling(|| calls.fetch_add(1, Ordering::Relaxed)).invoke();

    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn binds_larger_argument_lists() {
    let total = AtomicUsize::new(0);
    let sum = |a: usize, b: usize, c: usize, d: usize, e: usize| {
        total.fetch_add(a + b + c + d + e, Ordering::Relaxed);
    };

    calling(sum).with_args((1, 2, 3, 4, 5)).invoke();

    assert_eq!(total.load(Ordering::Relaxed), 15);
}

#[test]
fn can_be_invoked_repeatedly() {
    let calls = AtomicUsize::new(0);
    let deferred = calling(|step: usize| {
        calls.fetch_add(step, Ordering::Relaxed);
    })
    .with_args((2,));

    deferred.invoke();
    deferred.invoke();

    assert_eq!(calls.load(Ordering::Relaxed), 4);
}

#[test]
fn panics_of_the_target_unwind_unmodified() {
    let deferred = calling(|limit: usize| panic!("over {limit}")).with_args((3,));

    let failure = catch_unwind(AssertUnwindSafe(|| deferred.invoke())).unwrap_err();

    assert_eq!(
        failure.downcast_ref::<String>().map(String::as_str),
        Some("over 3")
    );
}
