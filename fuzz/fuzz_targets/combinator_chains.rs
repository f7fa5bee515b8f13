// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for random combinator chains on the optional shape.
//!
//! Each step is applied twice: once to an `OptionalOutcome<u8, u8>` and once to a
//! plain `Result<Option<u8>, u8>` model. After every step the two must agree, and
//! a closure on the success path must never have run on an error.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use verdict::{OptionalOutcome, Outcome, UnitOutcome};

type Model = Result<Option<u8>, u8>;

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Step {
    TransformValue(u8),
    TransformToNone,
    ChainValue { fail_at: u8, error: u8 },
    VerifyValue { below: u8, error: u8 },
    VerifyWhole { error: u8 },
    Recover(Option<u8>),
    ReplaceEmpty(u8),
    MapError(u8),
    FlatRunIfValue { fail: bool, error: u8 },
    ThroughPlain { error: u8 },
    ThroughUnit,
}

#[derive(Debug, Arbitrary)]
struct ChainInput {
    start: Model,
    steps: Vec<Step>,
}

/// Apply `step`, setting `ran_on_error` if a success-path closure ran on an error.
fn apply(
    outcome: OptionalOutcome<u8, u8>,
    step: Step,
    ran_on_error: &mut bool,
) -> OptionalOutcome<u8, u8> {
    let was_error = outcome.is_error();
    let mut mark = || *ran_on_error |= was_error;
    match step {
        Step::TransformValue(add) => outcome.transform_value(|x| {
            mark();
            x.wrapping_add(add)
        }),
        Step::TransformToNone => outcome.transform_value_to_optional(|_| {
            mark();
            None
        }),
        Step::ChainValue { fail_at, error } => outcome.chain_value(|x| {
            mark();
            if x == fail_at {
                Outcome::error(error)
            } else {
                Outcome::success(x)
            }
        }),
        Step::VerifyValue { below, error } => outcome.verify_value(
            |x| {
                mark();
                *x < below
            },
            || error,
        ),
        Step::VerifyWhole { error } => outcome.verify(|maybe| maybe.is_some(), || error),
        Step::Recover(fallback) => outcome.recover(|_| fallback),
        Step::ReplaceEmpty(value) => outcome.flat_replace_empty(|| OptionalOutcome::success(value)),
        Step::MapError(add) => outcome.map_error(|e| e.wrapping_add(add)),
        Step::FlatRunIfValue { fail, error } => outcome.flat_run_if_value(|| {
            mark();
            if fail {
                UnitOutcome::error(error)
            } else {
                UnitOutcome::success()
            }
        }),
        Step::ThroughPlain { error } => outcome.to_plain(|| error).to_optional(),
        Step::ThroughUnit => {
            let value = outcome.value();
            let unit = outcome.to_unit();
            match value {
                Some(v) => unit.replace_with_optional(|| Some(v)),
                None => unit.to_optional(),
            }
        }
    }
}

fn model(state: Model, step: Step) -> Model {
    match step {
        Step::TransformValue(add) => state.map(|maybe| maybe.map(|x| x.wrapping_add(add))),
        Step::TransformToNone => state.map(|_| None),
        Step::ChainValue { fail_at, error } => state.and_then(|maybe| match maybe {
            Some(x) if x == fail_at => Err(error),
            other => Ok(other),
        }),
        Step::VerifyValue { below, error } => state.and_then(|maybe| match maybe {
            Some(x) if x >= below => Err(error),
            other => Ok(other),
        }),
        Step::VerifyWhole { error } => state.and_then(|maybe| maybe.map(Some).ok_or(error)),
        Step::Recover(fallback) => Ok(state.unwrap_or(fallback)),
        Step::ReplaceEmpty(value) => state.map(|maybe| maybe.or(Some(value))),
        Step::MapError(add) => state.map_err(|e| e.wrapping_add(add)),
        Step::FlatRunIfValue { fail, error } => state.and_then(|maybe| match maybe {
            Some(_) if fail => Err(error),
            other => Ok(other),
        }),
        Step::ThroughPlain { error } => state.and_then(|maybe| maybe.map(Some).ok_or(error)),
        Step::ThroughUnit => state,
    }
}

fuzz_target!(|input: ChainInput| {
    let mut outcome = OptionalOutcome::from(input.start);
    let mut expected = input.start;

    for step in input.steps.into_iter().take(64) {
        let mut ran_on_error = false;
        outcome = apply(outcome, step, &mut ran_on_error);
        expected = model(expected, step);

        assert!(!ran_on_error, "success-path closure ran on an error: {:?}", step);
        assert_eq!(outcome.into_result(), expected, "diverged after {:?}", step);
        let exclusive = [outcome.has_value(), outcome.is_empty(), outcome.is_error()];
        assert_eq!(exclusive.iter().filter(|held| **held).count(), 1);
    }
});
