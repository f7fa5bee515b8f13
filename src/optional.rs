// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The optional shape: a success carrying zero or one value, or an error.
//!
//! Three states instead of two:
//!
//! ```text
//!              ┌──────────── success ────────────┐
//!  OptionalOutcome:  Value(T)        Empty          Error(E)
//! ```
//!
//! Empty is a legitimate success, not a missing slot. It is a variant of its own,
//! so "both" or "neither" is not something the type can express.
//!
//! # Two operation families
//!
//! Most operations come twice:
//!
//! - **Whole-optional** (`transform`, `chain`, `inspect`, `verify`, `fold`, ...): the
//!   closure receives the success payload as an `Option<T>` and must handle empty
//!   itself.
//! - **Value-focused** (`transform_value`, `chain_value`, `inspect_value`,
//!   `verify_value`, `fold_each`, ...): the closure only ever sees a present `T`.
//!   Empty short-circuits to empty without running it.
//!
//! Mapping a value to `None` (`transform_value_to_optional`) yields empty-success,
//! never an error: absence and failure stay distinct.

use core::fmt;

use crate::base::Settled;
use crate::boolean::BoolOutcome;
use crate::contracts;
use crate::engine;
use crate::outcome::Outcome;
use crate::unit::UnitOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Slot<T, E> {
    Value(T),
    Empty,
    Error(E),
}

/// A borrowed view of an [`OptionalOutcome`]'s state, for pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalState<'a, T, E> {
    Value(&'a T),
    Empty,
    Error(&'a E),
}

/// A success carrying zero or one `T`, or an error carrying one `E`.
#[must_use = "an outcome may hold an error that should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OptionalOutcome<T, E> {
    slot: Slot<T, E>,
}

impl<T, E> Settled for OptionalOutcome<T, E> {
    type Value = Option<T>;
    type Error = E;

    #[inline]
    fn into_parts(self) -> Result<Option<T>, E> {
        match self.slot {
            Slot::Value(value) => Ok(Some(value)),
            Slot::Empty => Ok(None),
            Slot::Error(err) => Err(err),
        }
    }

    #[inline]
    fn as_error(&self) -> Option<&E> {
        match &self.slot {
            Slot::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl<T, E> OptionalOutcome<T, E> {
    // ------------------------------------------------------------------------
    // Construction and access
    // ------------------------------------------------------------------------

    /// Success with a present value.
    #[inline]
    pub fn success(value: T) -> Self {
        Self {
            slot: Slot::Value(value),
        }
    }

    /// Success from an optional value; `None` becomes empty-success.
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::success(value),
            None => Self::empty(),
        }
    }

    /// Success without a value.
    #[inline]
    pub const fn empty() -> Self {
        Self { slot: Slot::Empty }
    }

    #[inline]
    pub fn error(error: E) -> Self {
        Self {
            slot: Slot::Error(error),
        }
    }

    #[inline]
    pub fn has_value(&self) -> bool {
        matches!(self.slot, Slot::Value(_))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.slot, Slot::Empty)
    }

    /// Value or empty.
    #[inline]
    pub fn is_success(&self) -> bool {
        !self.is_error()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.slot, Slot::Error(_))
    }

    #[inline]
    pub fn state(&self) -> OptionalState<'_, T, E> {
        match &self.slot {
            Slot::Value(value) => OptionalState::Value(value),
            Slot::Empty => OptionalState::Empty,
            Slot::Error(err) => OptionalState::Error(err),
        }
    }

    #[inline]
    pub fn as_value(&self) -> Option<&T> {
        match &self.slot {
            Slot::Value(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_error(&self) -> Option<&E> {
        Settled::as_error(self)
    }

    /// Consume into the value, dropping emptiness and errors alike.
    #[inline]
    pub fn value(self) -> Option<T> {
        match self.slot {
            Slot::Value(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn err(self) -> Option<E> {
        self.into_parts().err()
    }

    #[inline]
    pub fn into_result(self) -> Result<Option<T>, E> {
        self.into_parts()
    }

    // ------------------------------------------------------------------------
    // Whole-optional transformation
    // ------------------------------------------------------------------------

    /// Map the success payload (present or not) to a plain outcome.
    pub fn transform<N>(self, function: impl FnOnce(Option<T>) -> N) -> Outcome<N, E> {
        engine::transform(self, function, Outcome::success, Outcome::error)
    }

    pub fn transform_to_optional<N>(
        self,
        function: impl FnOnce(Option<T>) -> Option<N>,
    ) -> OptionalOutcome<N, E> {
        engine::transform(
            self,
            function,
            OptionalOutcome::from_option,
            OptionalOutcome::error,
        )
    }

    pub fn transform_to_bool(self, function: impl FnOnce(Option<T>) -> bool) -> BoolOutcome<E> {
        engine::transform(self, function, BoolOutcome::success, BoolOutcome::error)
    }

    pub fn map_error<N>(self, function: impl FnOnce(E) -> N) -> OptionalOutcome<T, N> {
        engine::map_error(
            self,
            function,
            OptionalOutcome::from_option,
            OptionalOutcome::error,
        )
    }

    pub fn chain<N>(self, function: impl FnOnce(Option<T>) -> Outcome<N, E>) -> Outcome<N, E> {
        engine::chain(self, function, Outcome::error)
    }

    pub fn chain_to_optional<N>(
        self,
        function: impl FnOnce(Option<T>) -> OptionalOutcome<N, E>,
    ) -> OptionalOutcome<N, E> {
        engine::chain(self, function, OptionalOutcome::error)
    }

    pub fn chain_to_bool(
        self,
        function: impl FnOnce(Option<T>) -> BoolOutcome<E>,
    ) -> BoolOutcome<E> {
        engine::chain(self, function, BoolOutcome::error)
    }

    pub fn chain_to_unit(
        self,
        function: impl FnOnce(Option<T>) -> UnitOutcome<E>,
    ) -> UnitOutcome<E> {
        engine::chain(self, function, UnitOutcome::error)
    }

    // ------------------------------------------------------------------------
    // Value-focused transformation
    // ------------------------------------------------------------------------

    /// Map a present value. Empty stays empty and `function` does not run.
    pub fn transform_value<N>(self, function: impl FnOnce(T) -> N) -> OptionalOutcome<N, E> {
        self.transform_to_optional(|maybe| maybe.map(function))
    }

    /// Map a present value to an optional; `None` yields empty-success.
    pub fn transform_value_to_optional<N>(
        self,
        function: impl FnOnce(T) -> Option<N>,
    ) -> OptionalOutcome<N, E> {
        self.transform_to_optional(|maybe| maybe.and_then(function))
    }

    /// Chain a present value into a plain outcome, flattening one level of optionality.
    pub fn chain_value<N>(
        self,
        function: impl FnOnce(T) -> Outcome<N, E>,
    ) -> OptionalOutcome<N, E> {
        self.chain_value_to_optional(|value| function(value).to_optional())
    }

    pub fn chain_value_to_optional<N>(
        self,
        function: impl FnOnce(T) -> OptionalOutcome<N, E>,
    ) -> OptionalOutcome<N, E> {
        engine::chain(
            self,
            |maybe| maybe.map_or_else(OptionalOutcome::empty, function),
            OptionalOutcome::error,
        )
    }

    pub fn chain_value_to_bool(
        self,
        function: impl FnOnce(T) -> BoolOutcome<E>,
    ) -> OptionalOutcome<bool, E> {
        self.chain_value_to_optional(|value| function(value).to_optional())
    }

    // ------------------------------------------------------------------------
    // Side effects
    // ------------------------------------------------------------------------

    /// Run `on_success` with the payload (present or not), or `on_error`.
    pub fn inspect(
        self,
        on_success: impl FnOnce(Option<&T>),
        on_error: impl FnOnce(&E),
    ) -> Self {
        engine::inspect(
            self,
            |maybe| on_success(maybe.as_ref()),
            on_error,
            Self::from_option,
            Self::error,
        )
    }

    /// Run `on_value` only when a value is present.
    pub fn inspect_value(self, on_value: impl FnOnce(&T)) -> Self {
        self.inspect(
            |maybe| {
                if let Some(value) = maybe {
                    on_value(value);
                }
            },
            |_| {},
        )
    }

    pub fn inspect_error(self, on_error: impl FnOnce(&E)) -> Self {
        self.inspect(|_| {}, on_error)
    }

    /// Run exactly one of three procedures: value, empty or error.
    pub fn inspect_each(
        self,
        on_value: impl FnOnce(&T),
        on_empty: impl FnOnce(),
        on_error: impl FnOnce(&E),
    ) -> Self {
        self.inspect(
            |maybe| match maybe {
                Some(value) => on_value(value),
                None => on_empty(),
            },
            on_error,
        )
    }

    pub fn run_if_success(self, procedure: impl FnOnce()) -> Self {
        engine::branch(self, procedure, || {})
    }

    pub fn run_if_value(self, procedure: impl FnOnce()) -> Self {
        if self.has_value() {
            procedure();
        }
        self
    }

    pub fn run_if_empty(self, procedure: impl FnOnce()) -> Self {
        if self.is_empty() {
            procedure();
        }
        self
    }

    /// Run `procedure` when there is no value: empty or error.
    pub fn run_if_no_value(self, procedure: impl FnOnce()) -> Self {
        if !self.has_value() {
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
        on_value: impl FnOnce(),
        on_empty: impl FnOnce(),
        on_error: impl FnOnce(),
    ) -> Self {
        let has_value = self.has_value();
        engine::branch(
            self,
            || if has_value { on_value() } else { on_empty() },
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

    /// Like `flat_run_if_success`, but empty also skips `supplier`.
    pub fn flat_run_if_value(self, supplier: impl FnOnce() -> UnitOutcome<E>) -> Self {
        let has_value = self.has_value();
        engine::flat_run_if_success(
            self,
            || if has_value { supplier() } else { UnitOutcome::success() },
            Self::error,
        )
    }

    // ------------------------------------------------------------------------
    // Verification
    // ------------------------------------------------------------------------

    /// Verify the success payload as a whole; the predicate sees empty as `None`.
    pub fn verify(
        self,
        predicate: impl FnOnce(Option<&T>) -> bool,
        error_supplier: impl FnOnce() -> E,
    ) -> Self {
        engine::verify(
            self,
            |maybe| predicate(maybe.as_ref()),
            error_supplier,
            Self::from_option,
            Self::error,
        )
    }

    /// Verify a present value. Empty passes without running `predicate`.
    pub fn verify_value(
        self,
        predicate: impl FnOnce(&T) -> bool,
        error_supplier: impl FnOnce() -> E,
    ) -> Self {
        self.verify(|maybe| maybe.is_none_or(predicate), error_supplier)
    }

    pub fn verify_with(self, check: impl FnOnce(Option<&T>) -> UnitOutcome<E>) -> Self {
        engine::verify_with(
            self,
            |maybe| check(maybe.as_ref()),
            Self::from_option,
            Self::error,
        )
    }

    /// Verify a present value with a no-value check. Empty passes without running it.
    pub fn verify_value_with(self, check: impl FnOnce(&T) -> UnitOutcome<E>) -> Self {
        self.verify_with(|maybe| maybe.map_or_else(UnitOutcome::success, check))
    }

    // ------------------------------------------------------------------------
    // Folding, recovery and extraction
    // ------------------------------------------------------------------------

    pub fn fold<N>(
        self,
        on_success: impl FnOnce(Option<T>) -> N,
        on_error: impl FnOnce(E) -> N,
    ) -> N {
        engine::fold(self, on_success, on_error)
    }

    /// Fold with a separate path for each of the three states.
    pub fn fold_each<N>(
        self,
        on_value: impl FnOnce(T) -> N,
        on_empty: impl FnOnce() -> N,
        on_error: impl FnOnce(E) -> N,
    ) -> N {
        self.fold(|maybe| maybe.map_or_else(on_empty, on_value), on_error)
    }

    /// Turn an error into a success; the function may recover to empty.
    pub fn recover(self, function: impl FnOnce(E) -> Option<T>) -> Self {
        engine::recover(self, function, Self::from_option)
    }

    pub fn flat_recover(self, function: impl FnOnce(E) -> OptionalOutcome<T, E>) -> Self {
        engine::flat_recover(self, function, Self::from_option)
    }

    /// Substitute a fresh outcome for empty-success. Values and errors are kept.
    pub fn flat_replace_empty(self, supplier: impl FnOnce() -> OptionalOutcome<T, E>) -> Self {
        if self.is_empty() {
            supplier()
        } else {
            self
        }
    }

    /// Substitute a plain outcome for empty-success, leaving the optional shape.
    pub fn flat_replace_empty_with_plain(
        self,
        supplier: impl FnOnce() -> Outcome<T, E>,
    ) -> Outcome<T, E> {
        engine::chain(
            self,
            |maybe| maybe.map_or_else(supplier, Outcome::success),
            Outcome::error,
        )
    }

    pub fn default_to(self, other: Option<T>) -> Option<T> {
        engine::default_to(self, other)
    }

    pub fn default_from(self, function: impl FnOnce(E) -> Option<T>) -> Option<T> {
        engine::default_from(self, function)
    }

    pub fn unwrap_or_raise<X>(self, function: impl FnOnce(E) -> X) -> Result<Option<T>, X> {
        engine::unwrap_or_raise(self, function)
    }

    /// The value, or `other` when empty or erroneous.
    pub fn value_or(self, other: T) -> T {
        self.value().unwrap_or(other)
    }

    pub fn value_or_else(self, supplier: impl FnOnce() -> T) -> T {
        self.value().unwrap_or_else(supplier)
    }

    /// The value, or `Err` from `supplier` when empty or erroneous.
    pub fn value_or_raise<X>(self, supplier: impl FnOnce() -> X) -> Result<T, X> {
        self.value().ok_or_else(supplier)
    }

    // ------------------------------------------------------------------------
    // Conversion
    // ------------------------------------------------------------------------

    /// Convert to the plain shape; empty becomes the error from `empty_error`.
    pub fn to_plain(self, empty_error: impl FnOnce() -> E) -> Outcome<T, E> {
        let was_success = self.is_success();
        let was_empty = self.is_empty();
        let converted = self.fold_each(
            Outcome::success,
            || Outcome::error(empty_error()),
            Outcome::error,
        );
        if !was_empty {
            contracts::check_error_preserved(was_success, &converted);
        }
        contracts::check_empty_policy(was_empty, &converted);
        converted
    }

    /// Convert to the no-value shape. Value and empty both become success.
    pub fn to_unit(self) -> UnitOutcome<E> {
        let was_success = self.is_success();
        let converted = engine::transform(
            self,
            |_| (),
            |()| UnitOutcome::success(),
            UnitOutcome::error,
        );
        contracts::check_error_preserved(was_success, &converted);
        converted
    }
}

impl<T, E> From<Result<Option<T>, E>> for OptionalOutcome<T, E> {
    fn from(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(maybe) => Self::from_option(maybe),
            Err(err) => Self::error(err),
        }
    }
}

impl<T, E> From<OptionalOutcome<T, E>> for Result<Option<T>, E> {
    fn from(outcome: OptionalOutcome<T, E>) -> Self {
        outcome.into_parts()
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for OptionalOutcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Value(value) => write!(f, "OptionalOutcome[Value: {}]", value),
            Slot::Empty => f.write_str("OptionalOutcome[Empty]"),
            Slot::Error(err) => write!(f, "OptionalOutcome[Error: {}]", err),
        }
    }
}
