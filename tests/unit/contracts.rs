//! Contract checks through the public API.

use std::panic;

use log::Level;

use crate::common::{err, init_logging, take_records, Flag, Maybe, Plain, Signal};
use verdict::contracts::{self, Law};

#[test]
fn conversions_satisfy_every_law() {
    init_logging();
    for plain in [Plain::success(1), Plain::error(err("e"))] {
        contracts::check_single_slot(&plain);
        let optional = plain.clone().to_optional();
        contracts::check_optional_state(optional.has_value(), optional.is_empty(), optional.is_error());
        contracts::check_single_slot(&plain.to_unit());
    }
    for maybe in [Maybe::success(1), Maybe::empty(), Maybe::error(err("e"))] {
        contracts::check_single_slot(&maybe.clone().to_plain(|| err("none")));
        contracts::check_single_slot(&maybe.to_unit());
    }
    contracts::check_single_slot(&Flag::success_true().to_optional());
    contracts::check_single_slot(&Signal::success().to_optional::<u8>());
    assert!(take_records().is_empty());
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "Contract violation: plain success never converts to empty")]
fn violation_is_logged_then_panics() {
    init_logging();
    contracts::check_never_empty(true, true);
}

#[test]
#[cfg(debug_assertions)]
fn violation_emits_one_error_record_before_panicking() {
    init_logging();
    let _ = take_records();

    let outcome = panic::catch_unwind(|| contracts::check_never_empty(true, true));
    assert!(outcome.is_err());

    let records = take_records();
    assert_eq!(records.len(), 1, "records: {:?}", records);
    let record = &records[0];
    assert_eq!(record.level, Level::Error);
    assert_eq!(record.target, "verdict::contracts");
    assert!(record
        .message
        .starts_with("plain success never converts to empty"));
}

#[test]
fn laws_have_readable_names() {
    assert_eq!(Law::NeverEmpty.to_string(), "plain success never converts to empty");
    assert_eq!(Law::TriState.to_string(), "optional tri-state exclusivity");
}
