//! The optional shape's whole-optional and value-focused families.

use crate::common::{err, CallLog, Maybe, Plain, Signal};
use verdict::{BoolOutcome, OptionalState};

// ============================================================================
// VALUE-FOCUSED FAMILY
// ============================================================================

#[test]
fn value_focused_closures_skip_empty() {
    let log = CallLog::new();
    let empty = Maybe::empty()
        .transform_value(|x| {
            log.record("transform");
            x + 1
        })
        .chain_value_to_optional(|x| {
            log.record("chain");
            Maybe::success(x)
        })
        .inspect_value(|_| log.record("inspect"))
        .verify_value(
            |_| {
                log.record("verify");
                false
            },
            || err("rejected"),
        )
        .flat_run_if_value(|| {
            log.record("effect");
            Signal::error(err("effect failed"))
        });

    assert_eq!(empty, Maybe::empty());
    assert!(log.is_empty());
}

#[test]
fn mapping_to_none_is_empty_not_error() {
    let mapped = Maybe::success(4).transform_value_to_optional(|x| (x > 10).then_some(x));
    assert!(mapped.is_empty());
    assert!(mapped.is_success());
}

#[test]
fn chain_value_flattens_one_level() {
    assert_eq!(Maybe::success(3).chain_value(|x| Plain::success(x * 3)), Maybe::success(9));
    assert_eq!(
        Maybe::success(3).chain_value(|_| Plain::error(err("inner"))),
        Maybe::error(err("inner"))
    );
    assert_eq!(
        Maybe::success(3).chain_value_to_bool(|x| BoolOutcome::success(x > 2)),
        verdict::OptionalOutcome::success(true)
    );
}

#[test]
fn verify_value_with_adopts_check_error() {
    let checked = Maybe::success(-1).verify_value_with(|x| {
        if *x >= 0 {
            Signal::success()
        } else {
            Signal::error(err("negative"))
        }
    });
    assert_eq!(checked, Maybe::error(err("negative")));
}

// ============================================================================
// WHOLE-OPTIONAL FAMILY
// ============================================================================

#[test]
fn whole_optional_closures_see_empty_as_none() {
    let described = Maybe::empty().transform(|maybe| match maybe {
        Some(x) => format!("value {}", x),
        None => "nothing".to_string(),
    });
    assert_eq!(described.into_result(), Ok("nothing".to_string()));

    let log = CallLog::new();
    let _ = Maybe::empty().inspect(
        |maybe| {
            assert!(maybe.is_none());
            log.record("inspect");
        },
        |_| log.record("error"),
    );
    assert_eq!(log.entries(), vec!["inspect"]);
}

#[test]
fn whole_optional_verify_can_reject_empty() {
    let required = Maybe::empty().verify(|maybe| maybe.is_some(), || err("required"));
    assert_eq!(required, Maybe::error(err("required")));
}

#[test]
fn three_way_side_effects() {
    let log = CallLog::new();
    for outcome in [Maybe::success(1), Maybe::empty(), Maybe::error(err("e"))] {
        let _ = outcome
            .inspect_each(|_| log.record("value"), || log.record("empty"), |_| log.record("error"))
            .run_if_no_value(|| log.record("no value"));
    }
    assert_eq!(
        log.entries(),
        vec!["value", "empty", "no value", "error", "no value"]
    );
}

#[test]
fn state_view_supports_matching() {
    let outcome = Maybe::success(8);
    let label = match outcome.state() {
        OptionalState::Value(v) => format!("value {}", v),
        OptionalState::Empty => "empty".to_string(),
        OptionalState::Error(e) => format!("error {}", e),
    };
    assert_eq!(label, "value 8");
}

// ============================================================================
// REPLACE-IF-EMPTY AND EXTRACTORS
// ============================================================================

#[test]
fn replace_if_empty_only_touches_empty() {
    let log = CallLog::new();
    let supply = || {
        log.record("supplier");
        Maybe::success(99)
    };
    assert_eq!(Maybe::empty().flat_replace_empty(supply), Maybe::success(99));
    assert_eq!(Maybe::success(1).flat_replace_empty(|| Maybe::success(99)), Maybe::success(1));
    assert_eq!(
        Maybe::error(err("e")).flat_replace_empty(|| Maybe::success(99)),
        Maybe::error(err("e"))
    );
    assert_eq!(log.count("supplier"), 1);

    assert_eq!(
        Maybe::empty().flat_replace_empty_with_plain(|| Plain::error(err("none"))),
        Plain::error(err("none"))
    );
}

#[test]
fn extractors() {
    assert_eq!(Maybe::empty().value_or(5), 5);
    assert_eq!(Maybe::error(err("e")).value_or_else(|| 6), 6);
    assert_eq!(Maybe::empty().value_or_raise(|| "absent"), Err("absent"));
    assert_eq!(Maybe::success(2).value_or_raise(|| "absent"), Ok(2));
    assert_eq!(Maybe::empty().default_to(Some(1)), None);
    assert_eq!(Maybe::error(err("e")).default_from(|_| Some(3)), Some(3));
    assert_eq!(Maybe::error(err("e")).recover(|_| None), Maybe::empty());
}
