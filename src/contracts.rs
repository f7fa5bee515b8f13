// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the outcome algebra's laws.
//!
//! The type system already rules out the worst mistakes (there is no way to build
//! an outcome with both slots or neither slot populated). What it cannot see are the
//! laws that tie shapes together: a conversion must keep an error an error, a plain
//! success can never turn into an empty optional, an empty optional converted with an
//! empty-to-error policy must come out as an error.
//!
//! These checks:
//!
//! 1. Run under `debug_assertions`, or always with the `strict-contracts` feature
//! 2. Compile to nothing otherwise
//! 3. Report a broken law as a **contract violation**: an `error` log record on the
//!    `verdict::contracts` target, followed by a panic at the violating call
//!
//! # Law Correspondence
//!
//! | Contract Function         | Law                                            |
//! |---------------------------|------------------------------------------------|
//! | `check_single_slot`       | exactly one of success / error                 |
//! | `check_optional_state`    | exactly one of value / empty / error           |
//! | `check_error_preserved`   | conversions never clear or invent an error     |
//! | `check_never_empty`       | plain success → optional carries its value     |
//! | `check_empty_policy`      | empty → plain applies the empty-to-error policy |

use core::fmt;

use crate::base::Settled;

/// Whether law checks are compiled in.
pub const ENABLED: bool = cfg!(any(debug_assertions, feature = "strict-contracts"));

/// The algebraic laws a contract can check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    /// Exactly one of the value and error slots is populated.
    SingleSlot,
    /// An optional outcome is in exactly one of value, empty or error.
    TriState,
    /// A conversion keeps success as success and error as error.
    ErrorPreserved,
    /// Converting a plain success to the optional shape never yields empty.
    NeverEmpty,
    /// Converting an empty optional to the plain shape yields the policy's error.
    EmptyPolicy,
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Law::SingleSlot => "single populated slot",
            Law::TriState => "optional tri-state exclusivity",
            Law::ErrorPreserved => "error preserved across conversion",
            Law::NeverEmpty => "plain success never converts to empty",
            Law::EmptyPolicy => "empty converts through the empty-to-error policy",
        };
        f.write_str(name)
    }
}

/// Report a contract violation: log it, then panic at the caller.
#[cold]
#[inline(never)]
#[track_caller]
pub fn violation(law: Law, detail: fmt::Arguments<'_>) -> ! {
    log::error!(target: "verdict::contracts", "{}: {}", law, detail);
    panic!("Contract violation: {} - {}", law, detail)
}

// ============================================================================
// STATE CONTRACTS
// ============================================================================

/// Check that exactly one slot of `outcome` is populated.
#[inline]
#[track_caller]
pub fn check_single_slot<R: Settled>(outcome: &R) {
    if ENABLED && outcome.is_success() == outcome.is_error() {
        violation(
            Law::SingleSlot,
            format_args!(
                "is_success() = {}, is_error() = {}",
                outcome.is_success(),
                outcome.is_error()
            ),
        );
    }
}

/// Check that exactly one optional state holds.
#[inline]
#[track_caller]
pub fn check_optional_state(has_value: bool, is_empty: bool, is_error: bool) {
    let held = usize::from(has_value) + usize::from(is_empty) + usize::from(is_error);
    if ENABLED && held != 1 {
        violation(
            Law::TriState,
            format_args!(
                "has_value = {}, is_empty = {}, is_error = {}",
                has_value, is_empty, is_error
            ),
        );
    }
}

// ============================================================================
// CONVERSION CONTRACTS
// ============================================================================

/// Check that a conversion kept the success/error split of its source.
#[inline]
#[track_caller]
pub fn check_error_preserved<R: Settled>(source_was_success: bool, converted: &R) {
    if ENABLED && source_was_success != converted.is_success() {
        violation(
            Law::ErrorPreserved,
            format_args!(
                "source success = {}, converted success = {}",
                source_was_success,
                converted.is_success()
            ),
        );
    }
}

/// Check that a plain success converted to the optional shape still has a value.
#[inline]
#[track_caller]
pub fn check_never_empty(source_was_success: bool, converted_is_empty: bool) {
    if ENABLED && source_was_success && converted_is_empty {
        violation(
            Law::NeverEmpty,
            format_args!("plain success converted to an empty optional"),
        );
    }
}

/// Check that an empty optional converted to the plain shape came out as an error.
#[inline]
#[track_caller]
pub fn check_empty_policy<R: Settled>(source_was_empty: bool, converted: &R) {
    if ENABLED && source_was_empty && converted.is_success() {
        violation(
            Law::EmptyPolicy,
            format_args!("empty optional converted to a plain success"),
        );
    }
}
