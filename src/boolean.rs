// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The boolean shape: a plain outcome specialized to `bool`.
//!
//! Adds true/false branching on top of the usual success/error split. The
//! three paths (true, false, error) are mutually exclusive.

use core::fmt;

use crate::base::Settled;
use crate::contracts;
use crate::engine;
use crate::optional::OptionalOutcome;
use crate::outcome::Outcome;
use crate::unit::UnitOutcome;

/// A success carrying one `bool`, or an error carrying one `E`.
#[must_use = "an outcome may hold an error that should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoolOutcome<E> {
    inner: Result<bool, E>,
}

impl<E> Settled for BoolOutcome<E> {
    type Value = bool;
    type Error = E;

    #[inline]
    fn into_parts(self) -> Result<bool, E> {
        self.inner
    }

    #[inline]
    fn as_error(&self) -> Option<&E> {
        self.inner.as_ref().err()
    }
}

impl<E> BoolOutcome<E> {
    #[inline]
    pub const fn success(value: bool) -> Self {
        Self { inner: Ok(value) }
    }

    #[inline]
    pub const fn success_true() -> Self {
        Self::success(true)
    }

    #[inline]
    pub const fn success_false() -> Self {
        Self::success(false)
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

    /// Success with `true`.
    #[inline]
    pub fn is_true(&self) -> bool {
        matches!(self.inner, Ok(true))
    }

    /// Success with `false`.
    #[inline]
    pub fn is_false(&self) -> bool {
        matches!(self.inner, Ok(false))
    }

    /// The flag by copy, unlike the other shapes' `Option<&T>`.
    #[inline]
    pub fn as_value(&self) -> Option<bool> {
        self.inner.as_ref().ok().copied()
    }

    #[inline]
    pub fn as_error(&self) -> Option<&E> {
        self.inner.as_ref().err()
    }

    #[inline]
    pub fn value(self) -> Option<bool> {
        self.inner.ok()
    }

    #[inline]
    pub fn err(self) -> Option<E> {
        self.inner.err()
    }

    #[inline]
    pub fn as_result(&self) -> Result<bool, &E> {
        self.inner.as_ref().copied()
    }

    #[inline]
    pub fn into_result(self) -> Result<bool, E> {
        self.inner
    }

    // ------------------------------------------------------------------------
    // Transformation
    // ------------------------------------------------------------------------

    pub fn transform<N>(self, function: impl FnOnce(bool) -> N) -> Outcome<N, E> {
        engine::transform(self, function, Outcome::success, Outcome::error)
    }

    pub fn transform_to_optional<N>(
        self,
        function: impl FnOnce(bool) -> Option<N>,
    ) -> OptionalOutcome<N, E> {
        engine::transform(
            self,
            function,
            OptionalOutcome::from_option,
            OptionalOutcome::error,
        )
    }

    pub fn transform_to_bool(self, function: impl FnOnce(bool) -> bool) -> BoolOutcome<E> {
        engine::transform(self, function, BoolOutcome::success, BoolOutcome::error)
    }

    pub fn map_error<N>(self, function: impl FnOnce(E) -> N) -> BoolOutcome<N> {
        engine::map_error(self, function, BoolOutcome::success, BoolOutcome::error)
    }

    pub fn chain<N>(self, function: impl FnOnce(bool) -> Outcome<N, E>) -> Outcome<N, E> {
        engine::chain(self, function, Outcome::error)
    }

    pub fn chain_to_optional<N>(
        self,
        function: impl FnOnce(bool) -> OptionalOutcome<N, E>,
    ) -> OptionalOutcome<N, E> {
        engine::chain(self, function, OptionalOutcome::error)
    }

    pub fn chain_to_bool(self, function: impl FnOnce(bool) -> BoolOutcome<E>) -> BoolOutcome<E> {
        engine::chain(self, function, BoolOutcome::error)
    }

    pub fn chain_to_unit(self, function: impl FnOnce(bool) -> UnitOutcome<E>) -> UnitOutcome<E> {
        engine::chain(self, function, UnitOutcome::error)
    }

    // ------------------------------------------------------------------------
    // Side effects
    // ------------------------------------------------------------------------

    pub fn inspect(self, on_value: impl FnOnce(bool), on_error: impl FnOnce(&E)) -> Self {
        engine::inspect(
            self,
            |value| on_value(*value),
            on_error,
            Self::success,
            Self::error,
        )
    }

    pub fn inspect_value(self, on_value: impl FnOnce(bool)) -> Self {
        self.inspect(on_value, |_| {})
    }

    pub fn inspect_error(self, on_error: impl FnOnce(&E)) -> Self {
        self.inspect(|_| {}, on_error)
    }

    /// Run exactly one of three procedures: true, false or error.
    pub fn inspect_each(
        self,
        on_true: impl FnOnce(),
        on_false: impl FnOnce(),
        on_error: impl FnOnce(&E),
    ) -> Self {
        self.inspect(
            |value| if value { on_true() } else { on_false() },
            on_error,
        )
    }

    pub fn run_if_success(self, procedure: impl FnOnce()) -> Self {
        engine::branch(self, procedure, || {})
    }

    pub fn run_if_true(self, procedure: impl FnOnce()) -> Self {
        if self.is_true() {
            procedure();
        }
        self
    }

    pub fn run_if_false(self, procedure: impl FnOnce()) -> Self {
        if self.is_false() {
            procedure();
        }
        self
    }

    pub fn run_if_error(self, procedure: impl FnOnce()) -> Self {
        engine::branch(self, || {}, procedure)
    }

    pub fn branch(self, on_success: impl FnOnce(), on_error: impl FnOnce()) -> Self {
        engine::branch(self, on_success, on_error)
    }

    pub fn branch_each(
        self,
        on_true: impl FnOnce(),
        on_false: impl FnOnce(),
        on_error: impl FnOnce(),
    ) -> Self {
        let is_true = self.is_true();
        engine::branch(
            self,
            || if is_true { on_true() } else { on_false() },
            on_error,
        )
    }

    pub fn run_always(self, procedure: impl FnOnce()) -> Self {
        procedure();
        self
    }

    pub fn flat_run_if_success(self, supplier: impl FnOnce() -> UnitOutcome<E>) -> Self {
        engine::flat_run_if_success(self, supplier, Self::error)
    }

    // ------------------------------------------------------------------------
    // Verification
    // ------------------------------------------------------------------------

    pub fn verify(
        self,
        predicate: impl FnOnce(bool) -> bool,
        error_supplier: impl FnOnce() -> E,
    ) -> Self {
        engine::verify(
            self,
            |value| predicate(*value),
            error_supplier,
            Self::success,
            Self::error,
        )
    }

    pub fn verify_with(self, check: impl FnOnce(bool) -> UnitOutcome<E>) -> Self {
        engine::verify_with(self, |value| check(*value), Self::success, Self::error)
    }

    // ------------------------------------------------------------------------
    // Folding, recovery and extraction
    // ------------------------------------------------------------------------

    pub fn fold<N>(self, on_value: impl FnOnce(bool) -> N, on_error: impl FnOnce(E) -> N) -> N {
        engine::fold(self, on_value, on_error)
    }

    pub fn fold_each<N>(
        self,
        on_true: impl FnOnce() -> N,
        on_false: impl FnOnce() -> N,
        on_error: impl FnOnce(E) -> N,
    ) -> N {
        self.fold(
            |value| if value { on_true() } else { on_false() },
            on_error,
        )
    }

    pub fn recover(self, function: impl FnOnce(E) -> bool) -> Self {
        engine::recover(self, function, Self::success)
    }

    pub fn flat_recover(self, function: impl FnOnce(E) -> BoolOutcome<E>) -> Self {
        engine::flat_recover(self, function, Self::success)
    }

    pub fn default_to(self, other: bool) -> bool {
        engine::default_to(self, other)
    }

    pub fn default_true(self) -> bool {
        self.default_to(true)
    }

    pub fn default_false(self) -> bool {
        self.default_to(false)
    }

    pub fn default_from(self, function: impl FnOnce(E) -> bool) -> bool {
        engine::default_from(self, function)
    }

    pub fn unwrap_or_raise<X>(self, function: impl FnOnce(E) -> X) -> Result<bool, X> {
        engine::unwrap_or_raise(self, function)
    }

    // ------------------------------------------------------------------------
    // Conversion
    // ------------------------------------------------------------------------

    /// Convert to the optional shape. A success always carries its bool.
    pub fn to_optional(self) -> OptionalOutcome<bool, E> {
        let was_success = self.is_success();
        let converted = engine::transform(self, Some, OptionalOutcome::from_option, OptionalOutcome::error);
        contracts::check_error_preserved(was_success, &converted);
        contracts::check_never_empty(was_success, converted.is_empty());
        converted
    }

    pub fn to_unit(self) -> UnitOutcome<E> {
        let was_success = self.is_success();
        let converted = engine::transform(self, |_| (), |()| UnitOutcome::success(), UnitOutcome::error);
        contracts::check_error_preserved(was_success, &converted);
        converted
    }
}

impl<E> From<Result<bool, E>> for BoolOutcome<E> {
    fn from(inner: Result<bool, E>) -> Self {
        Self { inner }
    }
}

impl<E> From<BoolOutcome<E>> for Result<bool, E> {
    fn from(outcome: BoolOutcome<E>) -> Self {
        outcome.inner
    }
}

impl<E> From<Outcome<bool, E>> for BoolOutcome<E> {
    fn from(outcome: Outcome<bool, E>) -> Self {
        Self {
            inner: outcome.into_result(),
        }
    }
}

impl<E: fmt::Display> fmt::Display for BoolOutcome<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(value) => write!(f, "BoolOutcome[Value: {}]", value),
            Err(err) => write!(f, "BoolOutcome[Error: {}]", err),
        }
    }
}
