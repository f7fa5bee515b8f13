// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shape-agnostic combinators.
//!
//! Every shape forwards its transform/chain/inspect/verify/recover operations here,
//! passing its own constructors. This is the one place the short-circuit rule lives:
//! a success-path closure never runs on an error, an error-path closure never runs on
//! a success, and every closure runs at most once.
//!
//! Constructors arrive as `FnOnce` values so that shapes can pass `Self::success`,
//! `Self::error`, or a small adapter such as `|_| UnitOutcome::success()`.
//!
//! Same-shape operations (`inspect`, `verify`, `recover`, ...) take the outcome by
//! value and rebuild it through the constructors. Rebuilding moves the payload; it
//! never clones it.

use crate::base::Settled;

// ============================================================================
// TRANSFORMATION
// ============================================================================

/// Map the success payload, leaving an error untouched.
#[inline]
pub fn transform<R, N, NR>(
    outcome: R,
    function: impl FnOnce(R::Value) -> N,
    success: impl FnOnce(N) -> NR,
    error: impl FnOnce(R::Error) -> NR,
) -> NR
where
    R: Settled,
{
    match outcome.into_parts() {
        Ok(value) => success(function(value)),
        Err(err) => error(err),
    }
}

/// Map the error payload, leaving a success untouched.
#[inline]
pub fn map_error<R, N, NR>(
    outcome: R,
    function: impl FnOnce(R::Error) -> N,
    success: impl FnOnce(R::Value) -> NR,
    error: impl FnOnce(N) -> NR,
) -> NR
where
    R: Settled,
{
    match outcome.into_parts() {
        Ok(value) => success(value),
        Err(err) => error(function(err)),
    }
}

/// Replace a success with whatever outcome `function` returns.
///
/// The error is re-expressed in the target shape through `error`.
#[inline]
pub fn chain<R, NR>(
    outcome: R,
    function: impl FnOnce(R::Value) -> NR,
    error: impl FnOnce(R::Error) -> NR,
) -> NR
where
    R: Settled,
{
    match outcome.into_parts() {
        Ok(value) => function(value),
        Err(err) => error(err),
    }
}

/// Collapse the outcome into a plain value, leaving the algebra.
#[inline]
pub fn fold<R, N>(
    outcome: R,
    on_value: impl FnOnce(R::Value) -> N,
    on_error: impl FnOnce(R::Error) -> N,
) -> N
where
    R: Settled,
{
    match outcome.into_parts() {
        Ok(value) => on_value(value),
        Err(err) => on_error(err),
    }
}

// ============================================================================
// SIDE EFFECTS
// ============================================================================

/// Run exactly one of `on_value`/`on_error` against the populated slot.
#[inline]
pub fn inspect<R>(
    outcome: R,
    on_value: impl FnOnce(&R::Value),
    on_error: impl FnOnce(&R::Error),
    success: impl FnOnce(R::Value) -> R,
    error: impl FnOnce(R::Error) -> R,
) -> R
where
    R: Settled,
{
    match outcome.into_parts() {
        Ok(value) => {
            on_value(&value);
            success(value)
        }
        Err(err) => {
            on_error(&err);
            error(err)
        }
    }
}

/// Run exactly one of two payload-free procedures.
#[inline]
pub fn branch<R>(outcome: R, on_success: impl FnOnce(), on_error: impl FnOnce()) -> R
where
    R: Settled,
{
    if outcome.is_success() {
        on_success();
    } else {
        on_error();
    }
    outcome
}

// ============================================================================
// VERIFICATION
// ============================================================================

/// Turn a success into an error when `predicate` rejects its payload.
///
/// `predicate` is never evaluated on an error; `error_supplier` only runs when the
/// predicate fails.
#[inline]
pub fn verify<R>(
    outcome: R,
    predicate: impl FnOnce(&R::Value) -> bool,
    error_supplier: impl FnOnce() -> R::Error,
    success: impl FnOnce(R::Value) -> R,
    error: impl FnOnce(R::Error) -> R,
) -> R
where
    R: Settled,
{
    match outcome.into_parts() {
        Ok(value) if predicate(&value) => success(value),
        Ok(_) => error(error_supplier()),
        Err(err) => error(err),
    }
}

/// Verify a success with a check that itself reports through a no-value outcome.
///
/// A failed check replaces the success with the check's error.
#[inline]
pub fn verify_with<R, U>(
    outcome: R,
    check: impl FnOnce(&R::Value) -> U,
    success: impl FnOnce(R::Value) -> R,
    error: impl FnOnce(R::Error) -> R,
) -> R
where
    R: Settled,
    U: Settled<Value = (), Error = R::Error>,
{
    match outcome.into_parts() {
        Ok(value) => match check(&value).into_parts() {
            Ok(()) => success(value),
            Err(err) => error(err),
        },
        Err(err) => error(err),
    }
}

/// Run a fallible side effect on success; its failure becomes this outcome's error.
#[inline]
pub fn flat_run_if_success<R, U>(
    outcome: R,
    supplier: impl FnOnce() -> U,
    error: impl FnOnce(R::Error) -> R,
) -> R
where
    R: Settled,
    U: Settled<Value = (), Error = R::Error>,
{
    if outcome.is_error() {
        return outcome;
    }
    match supplier().into_parts() {
        Ok(()) => outcome,
        Err(err) => error(err),
    }
}

// ============================================================================
// RECOVERY
// ============================================================================

/// Turn an error into a success through `function`.
#[inline]
pub fn recover<R>(
    outcome: R,
    function: impl FnOnce(R::Error) -> R::Value,
    success: impl FnOnce(R::Value) -> R,
) -> R
where
    R: Settled,
{
    match outcome.into_parts() {
        Ok(value) => success(value),
        Err(err) => success(function(err)),
    }
}

/// Substitute an entire alternate outcome for an error.
#[inline]
pub fn flat_recover<R, NR>(
    outcome: R,
    function: impl FnOnce(R::Error) -> NR,
    success: impl FnOnce(R::Value) -> NR,
) -> NR
where
    R: Settled,
{
    match outcome.into_parts() {
        Ok(value) => success(value),
        Err(err) => function(err),
    }
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// The success payload, or `other` on error.
#[inline]
pub fn default_to<R: Settled>(outcome: R, other: R::Value) -> R::Value {
    outcome.into_parts().unwrap_or(other)
}

/// The success payload, or a fallback computed from the error.
#[inline]
pub fn default_from<R: Settled>(outcome: R, function: impl FnOnce(R::Error) -> R::Value) -> R::Value {
    outcome.into_parts().unwrap_or_else(function)
}

/// The success payload, or the caller's error type built from the outcome's error.
#[inline]
pub fn unwrap_or_raise<R, X>(outcome: R, function: impl FnOnce(R::Error) -> X) -> Result<R::Value, X>
where
    R: Settled,
{
    outcome.into_parts().map_err(function)
}
