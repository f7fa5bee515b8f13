//! Cross-shape conversions.

use crate::common::{err, Flag, Maybe, Plain, Signal};

#[test]
fn plain_to_optional_keeps_value() {
    assert_eq!(Plain::success(3).to_optional(), Maybe::success(3));
    assert_eq!(Plain::error(err("e")).to_optional(), Maybe::error(err("e")));
}

#[test]
fn optional_to_plain_applies_policy() {
    assert_eq!(Maybe::empty().to_plain(|| err("none")), Plain::error(err("none")));
    assert_eq!(Maybe::success(1).to_plain(|| err("none")), Plain::success(1));
    assert_eq!(Maybe::error(err("e")).to_plain(|| err("none")), Plain::error(err("e")));
}

#[test]
fn to_unit_discards_values_and_keeps_errors() {
    assert_eq!(Plain::success(1).to_unit(), Signal::success());
    assert_eq!(Maybe::empty().to_unit(), Signal::success());
    assert_eq!(Maybe::success(2).to_unit(), Signal::success());
    assert_eq!(Flag::success_false().to_unit(), Signal::success());
    assert_eq!(Flag::error(err("e")).to_unit(), Signal::error(err("e")));
}

#[test]
fn bool_to_optional_carries_the_flag() {
    assert_eq!(Flag::success_false().to_optional(), verdict::OptionalOutcome::success(false));
}

#[test]
fn result_round_trips() {
    let plain: Plain = Ok(4).into();
    assert_eq!(plain.into_result(), Ok(4));

    let maybe: Maybe = Ok(None).into();
    assert!(maybe.is_empty());

    let signal: Signal = Err(err("e")).into();
    assert_eq!(signal.into_result(), Err(err("e")));
}
