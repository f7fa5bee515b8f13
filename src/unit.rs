// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The no-value shape: success carries nothing, or an error.
//!
//! `UnitOutcome` answers "did the side effect succeed". It is also the hub every
//! other shape converts through (`to_unit`), and the replace family turns it back
//! into any other shape:
//!
//! ```text
//!   Outcome ─────┐                ┌──▶ replace / flat_replace          ─▶ Outcome
//!   OptionalOutcome ──▶ UnitOutcome ──▶ replace_with_optional / ...  ─▶ OptionalOutcome
//!   BoolOutcome ─┘                └──▶ replace_with_bool / ...       ─▶ BoolOutcome
//! ```
//!
//! A value does not survive the hub: `Outcome::success(5).to_unit().to_optional()`
//! is empty.

use core::fmt;

use crate::base::Settled;
use crate::boolean::BoolOutcome;
use crate::contracts;
use crate::engine;
use crate::optional::OptionalOutcome;
use crate::outcome::Outcome;

/// A payload-free success, or an error carrying one `E`.
#[must_use = "an outcome may hold an error that should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitOutcome<E> {
    inner: Result<(), E>,
}

impl<E> Settled for UnitOutcome<E> {
    type Value = ();
    type Error = E;

    #[inline]
    fn into_parts(self) -> Result<(), E> {
        self.inner
    }

    #[inline]
    fn as_error(&self) -> Option<&E> {
        self.inner.as_ref().err()
    }
}

impl<E> UnitOutcome<E> {
    #[inline]
    pub const fn success() -> Self {
        Self { inner: Ok(()) }
    }

    #[inline]
    pub fn error(error: E) -> Self {
        Self { inner: Err(error) }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.inner.is_ok()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.inner.is_err()
    }

    #[inline]
    pub fn as_error(&self) -> Option<&E> {
        self.inner.as_ref().err()
    }

    #[inline]
    pub fn err(self) -> Option<E> {
        self.inner.err()
    }

    #[inline]
    pub fn into_result(self) -> Result<(), E> {
        self.inner
    }

    pub fn map_error<N>(self, function: impl FnOnce(E) -> N) -> UnitOutcome<N> {
        engine::map_error(self, function, |()| UnitOutcome::success(), UnitOutcome::error)
    }

    // ------------------------------------------------------------------------
    // Replace family
    // ------------------------------------------------------------------------

    /// On success, produce a value; on error, `supplier` never runs.
    pub fn replace<N>(self, supplier: impl FnOnce() -> N) -> Outcome<N, E> {
        engine::transform(self, |()| supplier(), Outcome::success, Outcome::error)
    }

    pub fn replace_with_optional<N>(
        self,
        supplier: impl FnOnce() -> Option<N>,
    ) -> OptionalOutcome<N, E> {
        engine::transform(
            self,
            |()| supplier(),
            OptionalOutcome::from_option,
            OptionalOutcome::error,
        )
    }

    pub fn replace_with_bool(self, supplier: impl FnOnce() -> bool) -> BoolOutcome<E> {
        engine::transform(self, |()| supplier(), BoolOutcome::success, BoolOutcome::error)
    }

    /// On success, substitute the outcome `supplier` returns.
    pub fn flat_replace<N>(self, supplier: impl FnOnce() -> Outcome<N, E>) -> Outcome<N, E> {
        engine::chain(self, |()| supplier(), Outcome::error)
    }

    pub fn flat_replace_to_optional<N>(
        self,
        supplier: impl FnOnce() -> OptionalOutcome<N, E>,
    ) -> OptionalOutcome<N, E> {
        engine::chain(self, |()| supplier(), OptionalOutcome::error)
    }

    pub fn flat_replace_to_bool(self, supplier: impl FnOnce() -> BoolOutcome<E>) -> BoolOutcome<E> {
        engine::chain(self, |()| supplier(), BoolOutcome::error)
    }

    pub fn flat_replace_to_unit(self, supplier: impl FnOnce() -> UnitOutcome<E>) -> UnitOutcome<E> {
        engine::chain(self, |()| supplier(), UnitOutcome::error)
    }

    // ------------------------------------------------------------------------
    // Side effects
    // ------------------------------------------------------------------------

    pub fn inspect(self, on_success: impl FnOnce(), on_error: impl FnOnce(&E)) -> Self {
        engine::inspect(
            self,
            |_| on_success(),
            on_error,
            |()| Self::success(),
            Self::error,
        )
    }

    pub fn inspect_error(self, on_error: impl FnOnce(&E)) -> Self {
        self.inspect(|| {}, on_error)
    }

    pub fn run_if_success(self, procedure: impl FnOnce()) -> Self {
        engine::branch(self, procedure, || {})
    }

    pub fn run_if_error(self, procedure: impl FnOnce()) -> Self {
        engine::branch(self, || {}, procedure)
    }

    pub fn branch(self, on_success: impl FnOnce(), on_error: impl FnOnce()) -> Self {
        engine::branch(self, on_success, on_error)
    }

    pub fn run_always(self, procedure: impl FnOnce()) -> Self {
        procedure();
        self
    }

    pub fn flat_run_if_success(self, supplier: impl FnOnce() -> UnitOutcome<E>) -> Self {
        engine::flat_run_if_success(self, supplier, Self::error)
    }

    // ------------------------------------------------------------------------
    // Folding, recovery and extraction
    // ------------------------------------------------------------------------

    pub fn fold<N>(self, on_success: impl FnOnce() -> N, on_error: impl FnOnce(E) -> N) -> N {
        engine::fold(self, |()| on_success(), on_error)
    }

    /// Clear an error after running `function` on it.
    pub fn recover(self, function: impl FnOnce(E)) -> Self {
        engine::recover(self, function, |()| Self::success())
    }

    pub fn flat_recover(self, function: impl FnOnce(E) -> UnitOutcome<E>) -> Self {
        engine::flat_recover(self, function, |()| Self::success())
    }

    /// `Ok(())`, or `Err` built from the error by `function`.
    pub fn unwrap_or_raise<X>(self, function: impl FnOnce(E) -> X) -> Result<(), X> {
        engine::unwrap_or_raise(self, function)
    }

    // ------------------------------------------------------------------------
    // Conversion
    // ------------------------------------------------------------------------

    /// Convert to the optional shape. Success becomes empty: there is no value to carry.
    pub fn to_optional<N>(self) -> OptionalOutcome<N, E> {
        let was_success = self.is_success();
        let converted = engine::transform(
            self,
            |()| None,
            OptionalOutcome::from_option,
            OptionalOutcome::error,
        );
        contracts::check_error_preserved(was_success, &converted);
        converted
    }
}

impl<E> Default for UnitOutcome<E> {
    fn default() -> Self {
        Self::success()
    }
}

impl<E> From<Result<(), E>> for UnitOutcome<E> {
    fn from(inner: Result<(), E>) -> Self {
        Self { inner }
    }
}

impl<E> From<UnitOutcome<E>> for Result<(), E> {
    fn from(outcome: UnitOutcome<E>) -> Self {
        outcome.inner
    }
}

impl<E: fmt::Display> fmt::Display for UnitOutcome<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(()) => f.write_str("UnitOutcome[Value: ()]"),
            Err(err) => write!(f, "UnitOutcome[Error: {}]", err),
        }
    }
}
