// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The plain shape: a success carrying exactly one value, or an error.
//!
//! `Outcome` is the workhorse. It converts into the optional shape without ever
//! producing an empty state, and into the no-value shape by dropping its value.
//!
//! # Example
//!
//! ```
//! use verdict::Outcome;
//!
//! let parsed: Outcome<i32, String> = Outcome::success(7);
//! let doubled = parsed
//!     .transform(|x| x * 2)
//!     .verify(|x| *x < 100, || "too large".to_string());
//!
//! assert_eq!(doubled, Outcome::success(14));
//! assert_eq!(doubled.default_to(0), 14);
//! ```

use core::fmt;

use crate::base::Settled;
use crate::boolean::BoolOutcome;
use crate::contracts;
use crate::engine;
use crate::optional::OptionalOutcome;
use crate::unit::UnitOutcome;

/// A success carrying one `T`, or an error carrying one `E`.
#[must_use = "an outcome may hold an error that should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Outcome<T, E> {
    inner: Result<T, E>,
}

impl<T, E> Settled for Outcome<T, E> {
    type Value = T;
    type Error = E;

    #[inline]
    fn into_parts(self) -> Result<T, E> {
        self.inner
    }

    #[inline]
    fn as_error(&self) -> Option<&E> {
        self.inner.as_ref().err()
    }
}

impl<T, E> Outcome<T, E> {
    // ------------------------------------------------------------------------
    // Construction and access
    // ------------------------------------------------------------------------

    #[inline]
    pub fn success(value: T) -> Self {
        Self { inner: Ok(value) }
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

    /// The success value, if any.
    #[inline]
    pub fn as_value(&self) -> Option<&T> {
        self.inner.as_ref().ok()
    }

    /// The error, if any.
    #[inline]
    pub fn as_error(&self) -> Option<&E> {
        self.inner.as_ref().err()
    }

    /// Consume into the success value, dropping any error.
    #[inline]
    pub fn value(self) -> Option<T> {
        self.inner.ok()
    }

    /// Consume into the error, dropping any value.
    #[inline]
    pub fn err(self) -> Option<E> {
        self.inner.err()
    }

    /// Borrow both slots as a standard `Result`, for pattern matching.
    #[inline]
    pub fn as_result(&self) -> Result<&T, &E> {
        self.inner.as_ref()
    }

    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.inner
    }

    // ------------------------------------------------------------------------
    // Transformation
    // ------------------------------------------------------------------------

    /// Map the success value; an error passes through unchanged.
    pub fn transform<N>(self, function: impl FnOnce(T) -> N) -> Outcome<N, E> {
        engine::transform(self, function, Outcome::success, Outcome::error)
    }

    /// Map the success value to an optional; `None` becomes empty-success.
    pub fn transform_to_optional<N>(
        self,
        function: impl FnOnce(T) -> Option<N>,
    ) -> OptionalOutcome<N, E> {
        engine::transform(
            self,
            function,
            OptionalOutcome::from_option,
            OptionalOutcome::error,
        )
    }

    pub fn transform_to_bool(self, function: impl FnOnce(T) -> bool) -> BoolOutcome<E> {
        engine::transform(self, function, BoolOutcome::success, BoolOutcome::error)
    }

    pub fn map_error<N>(self, function: impl FnOnce(E) -> N) -> Outcome<T, N> {
        engine::map_error(self, function, Outcome::success, Outcome::error)
    }

    /// Replace a success with the outcome `function` returns.
    pub fn chain<N>(self, function: impl FnOnce(T) -> Outcome<N, E>) -> Outcome<N, E> {
        engine::chain(self, function, Outcome::error)
    }

    pub fn chain_to_optional<N>(
        self,
        function: impl FnOnce(T) -> OptionalOutcome<N, E>,
    ) -> OptionalOutcome<N, E> {
        engine::chain(self, function, OptionalOutcome::error)
    }

    pub fn chain_to_bool(self, function: impl FnOnce(T) -> BoolOutcome<E>) -> BoolOutcome<E> {
        engine::chain(self, function, BoolOutcome::error)
    }

    pub fn chain_to_unit(self, function: impl FnOnce(T) -> UnitOutcome<E>) -> UnitOutcome<E> {
        engine::chain(self, function, UnitOutcome::error)
    }

    // ------------------------------------------------------------------------
    // Side effects
    // ------------------------------------------------------------------------

    /// Run exactly one of the two procedures, then hand the outcome back.
    pub fn inspect(self, on_value: impl FnOnce(&T), on_error: impl FnOnce(&E)) -> Self {
        engine::inspect(self, on_value, on_error, Self::success, Self::error)
    }

    pub fn inspect_value(self, on_value: impl FnOnce(&T)) -> Self {
        self.inspect(on_value, |_| {})
    }

    pub fn inspect_error(self, on_error: impl FnOnce(&E)) -> Self {
        self.inspect(|_| {}, on_error)
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

    /// Run a fallible side effect on success; its error replaces the success.
    pub fn flat_run_if_success(self, supplier: impl FnOnce() -> UnitOutcome<E>) -> Self {
        engine::flat_run_if_success(self, supplier, Self::error)
    }

    // ------------------------------------------------------------------------
    // Verification
    // ------------------------------------------------------------------------

    /// Fail a success whose value does not satisfy `predicate`.
    ///
    /// On an error, neither `predicate` nor `error_supplier` runs.
    pub fn verify(
        self,
        predicate: impl FnOnce(&T) -> bool,
        error_supplier: impl FnOnce() -> E,
    ) -> Self {
        engine::verify(self, predicate, error_supplier, Self::success, Self::error)
    }

    /// Fail a success when `check` reports an error.
    pub fn verify_with(self, check: impl FnOnce(&T) -> UnitOutcome<E>) -> Self {
        engine::verify_with(self, check, Self::success, Self::error)
    }

    // ------------------------------------------------------------------------
    // Recovery and extraction
    // ------------------------------------------------------------------------

    pub fn recover(self, function: impl FnOnce(E) -> T) -> Self {
        engine::recover(self, function, Self::success)
    }

    /// Substitute an alternate outcome for an error.
    pub fn flat_recover(self, function: impl FnOnce(E) -> Outcome<T, E>) -> Self {
        engine::flat_recover(self, function, Self::success)
    }

    pub fn fold<N>(self, on_value: impl FnOnce(T) -> N, on_error: impl FnOnce(E) -> N) -> N {
        engine::fold(self, on_value, on_error)
    }

    pub fn default_to(self, other: T) -> T {
        engine::default_to(self, other)
    }

    pub fn default_from(self, function: impl FnOnce(E) -> T) -> T {
        engine::default_from(self, function)
    }

    /// The value, or `Err` built from the error by `function`.
    ///
    /// This is the bridge to `?`:
    /// `outcome.unwrap_or_raise(anyhow::Error::msg)?`.
    pub fn unwrap_or_raise<X>(self, function: impl FnOnce(E) -> X) -> Result<T, X> {
        engine::unwrap_or_raise(self, function)
    }

    // ------------------------------------------------------------------------
    // Conversion
    // ------------------------------------------------------------------------

    /// Convert to the optional shape. A success always carries its value.
    pub fn to_optional(self) -> OptionalOutcome<T, E> {
        let was_success = self.is_success();
        let converted = engine::transform(self, Some, OptionalOutcome::from_option, OptionalOutcome::error);
        contracts::check_error_preserved(was_success, &converted);
        contracts::check_never_empty(was_success, converted.is_empty());
        converted
    }

    /// Convert to the no-value shape, discarding the success value.
    pub fn to_unit(self) -> UnitOutcome<E> {
        let was_success = self.is_success();
        let converted = engine::transform(self, |_| (), |()| UnitOutcome::success(), UnitOutcome::error);
        contracts::check_error_preserved(was_success, &converted);
        converted
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(inner: Result<T, E>) -> Self {
        Self { inner }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.inner
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(value) => write!(f, "Outcome[Value: {}]", value),
            Err(err) => write!(f, "Outcome[Error: {}]", err),
        }
    }
}
