//! End-to-end scenarios across the four shapes.

use crate::common::{err, CallLog, Flag, Maybe, Plain, Signal};
use verdict::{Fault, OptionalOutcome, Outcome};

#[test]
fn transform_doubles_success_and_keeps_error() {
    assert_eq!(Plain::success(7).transform(|x| x * 2), Plain::success(14));
    assert_eq!(Plain::error(err("bad")).transform(|x| x * 2), Plain::error(err("bad")));
}

#[test]
fn verify_value_on_empty_never_runs_predicate() {
    let log = CallLog::new();
    let verified = Maybe::empty().verify_value(
        |_| {
            log.record("predicate");
            true
        },
        || err("e"),
    );
    assert_eq!(verified, Maybe::empty());
    assert!(log.is_empty());
}

#[test]
fn value_does_not_survive_the_unit_hub() {
    let hub = Plain::success(5).to_unit().to_optional::<i32>();
    assert!(hub.is_empty());
    assert!(hub.is_success());
}

#[test]
fn division_by_zero_becomes_an_error() {
    let zero = std::hint::black_box(0);
    let divided: Outcome<i32, Fault> = Outcome::capture_panic(|| 1 / zero);
    assert!(divided.is_error());
    assert!(divided
        .as_error()
        .is_some_and(|fault| fault.message().contains("divide by zero")));
}

#[test]
fn pipeline_stops_at_first_error() {
    let log = CallLog::new();
    let result = Plain::success(10)
        .inspect_value(|_| log.record("start"))
        .verify(|x| *x > 100, || err("too small"))
        .transform(|x| {
            log.record("transform");
            x + 1
        })
        .chain(|x| {
            log.record("chain");
            Plain::success(x)
        })
        .inspect_error(|_| log.record("error seen"))
        .run_always(|| log.record("always"));

    assert_eq!(result, Plain::error(err("too small")));
    assert_eq!(log.entries(), vec!["start", "error seen", "always"]);
}

#[test]
fn recover_then_continue() {
    let total = Plain::error(err("missing"))
        .recover(|e| e.len() as i32)
        .transform(|x| x * 10)
        .default_to(0);
    assert_eq!(total, 70);
}

#[test]
fn boolean_paths_are_exclusive() {
    let log = CallLog::new();
    for flag in [Flag::success_true(), Flag::success_false(), Flag::error(err("e"))] {
        let _ = flag.branch_each(
            || log.record("true"),
            || log.record("false"),
            || log.record("error"),
        );
    }
    assert_eq!(log.entries(), vec!["true", "false", "error"]);
}

#[test]
fn boolean_gates_a_unit_effect() {
    let saved = Flag::success_true().chain_to_unit(|should_save| {
        if should_save {
            Signal::success()
        } else {
            Signal::error(err("skipped"))
        }
    });
    assert_eq!(saved, Signal::success());
}

#[test]
fn unit_join_point_replaces_into_each_shape() {
    let ready = Signal::success();
    assert_eq!(ready.clone().replace(|| 3), Plain::success(3));
    assert_eq!(ready.clone().replace_with_optional(|| None::<i32>), Maybe::empty());
    assert_eq!(ready.replace_with_bool(|| false), Flag::success_false());

    let failed = Signal::error(err("down"));
    assert_eq!(failed.replace(|| 3), Plain::error(err("down")));
}

#[test]
fn display_forms() {
    assert_eq!(Plain::success(1).to_string(), "Outcome[Value: 1]");
    assert_eq!(Plain::error(err("x")).to_string(), "Outcome[Error: x]");
    assert_eq!(Maybe::empty().to_string(), "OptionalOutcome[Empty]");
    assert_eq!(
        OptionalOutcome::<i32, String>::success(2).to_string(),
        "OptionalOutcome[Value: 2]"
    );
    assert_eq!(Flag::success_true().to_string(), "BoolOutcome[Value: true]");
    assert_eq!(Signal::error(err("y")).to_string(), "UnitOutcome[Error: y]");
}
