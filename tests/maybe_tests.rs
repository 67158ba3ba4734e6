//! Unit tests for the Maybe<T> type.
//!
//! Maybe represents a value that may be absent:
//! - `Some(T)`: a present value
//! - `None`: no value
//!
//! Functions supplied for the `Some` branch are verified never to run on
//! `None` by counting their invocations.

use std::cell::Cell;

use maybers::maybe::{IntoMaybe, Maybe, NoneError, unchecked};
use rstest::rstest;

fn counting<'a, A, B>(counter: &'a Cell<usize>, function: impl Fn(A) -> B + 'a) -> impl Fn(A) -> B + 'a {
    move |value| {
        counter.set(counter.get() + 1);
        function(value)
    }
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn of_present_value_is_some() {
    let value = Maybe::of("Something");
    assert!(value.is_some());
    assert_eq!(unchecked::unwrap(value), "Something");
}

#[rstest]
fn of_nullable_absent_value_is_none() {
    let value: Maybe<String> = Maybe::of_nullable(None);
    assert!(value.is_none());
    assert!(!value.is_some());
}

#[rstest]
fn of_nullable_present_value_is_some() {
    assert_eq!(Maybe::of_nullable(Some(1)), Maybe::Some(1));
}

#[rstest]
fn none_is_shared_across_types() {
    assert_eq!(Maybe::<i32>::none(), Maybe::<i32>::NONE);
    assert_eq!(Maybe::<String>::none(), Maybe::None);
    assert_eq!(std::mem::size_of::<Maybe<()>>(), std::mem::size_of::<Option<()>>());
}

#[rstest]
fn try_as_maybe_wraps_success() {
    assert_eq!(Maybe::try_as_maybe(|| "Something".parse::<String>()), Maybe::Some("Something".to_string()));
}

#[rstest]
fn try_as_maybe_failure_is_none() {
    let missing: Option<i32> = None;
    let value = Maybe::try_as_maybe(|| missing.ok_or("missing").map(|n| n.to_string()));
    assert!(value.is_none());
}

#[rstest]
fn try_as_maybe_absent_result_is_none() {
    let value: Maybe<i32> = Maybe::try_as_maybe(|| None::<i32>);
    assert_eq!(value, Maybe::None);
}

// =============================================================================
// Side Effects
// =============================================================================

#[rstest]
fn if_some_runs_once_on_some() {
    let calls = Cell::new(0);
    let value = Maybe::of("").if_some(|_| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 1);
    assert_eq!(value, Maybe::Some(""));
}

#[rstest]
fn if_some_skips_none() {
    let calls = Cell::new(0);
    let _ = Maybe::<&str>::None.if_some(|_| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn if_none_skips_some() {
    let calls = Cell::new(0);
    let _ = Maybe::of("").if_none(|| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn if_none_runs_once_on_none() {
    let calls = Cell::new(0);
    let value = Maybe::<&str>::None.if_none(|| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 1);
    assert_eq!(value, Maybe::None);
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn map_on_some_transforms() {
    assert_eq!(Maybe::of("x").map(|s| format!("{s}y")), Maybe::Some("xy".to_string()));
}

#[rstest]
fn map_on_none_never_invokes_function() {
    let calls = Cell::new(0);
    let result = Maybe::<&str>::of_nullable(None).map(counting(&calls, |s: &str| format!("{s}y")));
    assert_eq!(result, Maybe::None);
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case(Some(2), Maybe::Some(2))]
#[case(None, Maybe::None)]
fn map_nullable_demotes_absent_results(#[case] produced: Option<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(Maybe::of(()).map_nullable(|()| produced), expected);
}

#[rstest]
fn map_nullable_on_none_never_invokes_function() {
    let calls = Cell::new(0);
    let result: Maybe<i32> = Maybe::<i32>::None.map_nullable(counting(&calls, Some));
    assert_eq!(result, Maybe::None);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn flat_map_on_some_returns_inner_result() {
    assert_eq!(Maybe::of("").flat_map(|_| Maybe::of("Something")), Maybe::Some("Something"));
    assert_eq!(Maybe::of("Something").flat_map(|_| Maybe::<&str>::none()), Maybe::None);
}

#[rstest]
fn flat_map_on_none_never_invokes_function() {
    let calls = Cell::new(0);
    let result = Maybe::<&str>::None.flat_map(counting(&calls, |_: &str| Maybe::of(1)));
    assert_eq!(result, Maybe::None);
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case("Something", Maybe::Some("Something"))]
#[case("Other", Maybe::None)]
fn filter_keeps_matching_values(#[case] input: &str, #[case] expected: Maybe<&str>) {
    assert_eq!(Maybe::of(input).filter(|value| *value == "Something"), expected);
}

#[rstest]
fn filter_on_none_never_invokes_predicate() {
    let calls = Cell::new(0);
    let result = Maybe::<i32>::None.filter(|_| {
        calls.set(calls.get() + 1);
        true
    });
    assert_eq!(result, Maybe::None);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn id_returns_same_value() {
    let value = Maybe::of("");
    assert_eq!(value.id(), value);
}

// =============================================================================
// Fallbacks
// =============================================================================

#[rstest]
fn or_maybe_on_some_does_not_evaluate_fallback() {
    let calls = Cell::new(0);
    let result = Maybe::of("Something").or_maybe(|| {
        calls.set(calls.get() + 1);
        Maybe::of("")
    });
    assert_eq!(result, Maybe::Some("Something"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn or_maybe_on_none_uses_fallback() {
    assert_eq!(Maybe::none().or_maybe(|| Maybe::of("Something")), Maybe::Some("Something"));
}

#[rstest]
fn or_default_on_some_does_not_evaluate_default() {
    let calls = Cell::new(0);
    let result = Maybe::of("Something").or_default(|| {
        calls.set(calls.get() + 1);
        ""
    });
    assert_eq!(result, "Something");
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn or_default_on_none_uses_default() {
    assert_eq!(Maybe::none().or_default(|| "Something"), "Something");
}

// =============================================================================
// Matching
// =============================================================================

#[rstest]
#[case(Maybe::Some(""), "some", (1, 0))]
#[case(Maybe::None, "none", (0, 1))]
fn match_with_evaluates_exactly_one_branch(
    #[case] value: Maybe<&str>,
    #[case] expected: &str,
    #[case] expected_calls: (usize, usize),
) {
    let some_calls = Cell::new(0);
    let none_calls = Cell::new(0);

    let result = value.match_with(
        |_| {
            some_calls.set(some_calls.get() + 1);
            "some"
        },
        || {
            none_calls.set(none_calls.get() + 1);
            "none"
        },
    );

    assert_eq!(result, expected);
    assert_eq!((some_calls.get(), none_calls.get()), expected_calls);
}

#[rstest]
#[case(Maybe::Some(1), (1, 0))]
#[case(Maybe::None, (0, 1))]
fn match_action_runs_exactly_one_branch(#[case] value: Maybe<i32>, #[case] expected_calls: (usize, usize)) {
    let some_calls = Cell::new(0);
    let none_calls = Cell::new(0);

    value.match_action(|_| some_calls.set(some_calls.get() + 1), || none_calls.set(none_calls.get() + 1));

    assert_eq!((some_calls.get(), none_calls.get()), expected_calls);
}

// =============================================================================
// Runtime Type Checks
// =============================================================================

#[rstest]
fn of_type_with_matching_type_is_some() {
    assert_eq!(Maybe::of("something").of_type::<&str>(), Maybe::Some("something"));
}

#[rstest]
fn of_type_with_other_type_is_none() {
    assert_eq!(Maybe::of("something").of_type::<i32>(), Maybe::None);
}

#[rstest]
fn of_type_on_none_is_none() {
    assert_eq!(Maybe::<i32>::None.of_type::<String>(), Maybe::None);
}

#[rstest]
fn downcast_looks_through_box() {
    let boxed: Box<dyn std::any::Any> = Box::new("something".to_string());
    assert_eq!(Maybe::of(boxed).downcast::<String>(), Maybe::Some("something".to_string()));

    let boxed: Box<dyn std::any::Any> = Box::new(1_u8);
    assert_eq!(Maybe::of(boxed).downcast::<String>(), Maybe::None);
}

// =============================================================================
// Logging
// =============================================================================

#[rstest]
fn log_sends_one_message() {
    let mut messages = Vec::new();
    let _ = Maybe::of("").log_untagged(|message| messages.push(message));
    assert_eq!(messages.len(), 1);
}

#[rstest]
fn log_without_tag_uses_bare_rendering() {
    let value = Maybe::of("something");
    let mut messages = Vec::new();
    let returned = value.log("", |message| messages.push(message));
    assert_eq!(messages, vec![value.to_string()]);
    assert_eq!(returned, value);
}

#[rstest]
fn log_renders_none() {
    let mut messages = Vec::new();
    let _ = Maybe::<i32>::None.log_untagged(|message| messages.push(message));
    assert_eq!(messages, vec!["None".to_string()]);
}

#[rstest]
fn log_renders_present_value_bare() {
    let mut messages = Vec::new();
    let value = Maybe::of(1).log("tag", |message| messages.push(message));
    let _ = value.log_untagged(|message| messages.push(message));
    assert_eq!(messages, vec!["tag: 1".to_string(), "1".to_string()]);
}

#[rstest]
fn log_with_tag_prefixes_rendering() {
    let mut messages = Vec::new();
    let _ = Maybe::of("something").log("someTag", |message| messages.push(message));
    assert_eq!(messages, vec!["someTag: something".to_string()]);
}

// =============================================================================
// Unchecked Access
// =============================================================================

#[rstest]
fn unwrap_returns_value_of_some() {
    assert_eq!(unchecked::unwrap(Maybe::of(1)), 1);
}

#[rstest]
#[should_panic(expected = "called `unchecked::unwrap()` on a `None` value")]
fn unwrap_on_none_panics() {
    unchecked::unwrap(Maybe::<i32>::NONE);
}

#[rstest]
fn unwrap_or_throw_returns_value_of_some() {
    assert_eq!(unchecked::unwrap_or_throw(Maybe::of(1), "unused"), Ok(1));
}

#[rstest]
fn unwrap_or_throw_surfaces_custom_error() {
    assert_eq!(unchecked::unwrap_or_throw(Maybe::<i32>::NONE, "missing"), Err("missing"));
}

// =============================================================================
// Conversions and Standard Traits
// =============================================================================

#[rstest]
fn option_round_trip_preserves_presence() {
    let value: Option<i32> = Maybe::of(3).into();
    assert_eq!(value, Some(3));
    assert_eq!(Maybe::from(None::<i32>), Maybe::None);
    assert_eq!(Some(4).into_maybe(), Maybe::Some(4));
}

#[rstest]
fn ok_or_none_error_converts_absence() {
    assert_eq!(Maybe::of(1).ok_or_none_error(), Ok(1));
    assert_eq!(Maybe::<i32>::None.ok_or_none_error(), Err(NoneError));
}

#[rstest]
fn equal_values_hash_equally() {
    use std::collections::HashSet;

    let set: HashSet<Maybe<i32>> = [Maybe::of(1), Maybe::of(1), Maybe::None, Maybe::None].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[rstest]
fn none_orders_before_some() {
    assert!(Maybe::None < Maybe::Some(i32::MIN));
}
