// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The base contract every outcome shape is built on.
//!
//! An outcome has two slots, a value slot and an error slot, and exactly one of
//! them is populated. The shapes differ only in what the value slot holds:
//!
//! | Shape            | `Value`     | Success states          |
//! |------------------|-------------|-------------------------|
//! | `Outcome`        | `T`         | value                   |
//! | `OptionalOutcome`| `Option<T>` | value, empty            |
//! | `BoolOutcome`    | `bool`      | true, false             |
//! | `UnitOutcome`    | `()`        | success                 |
//!
//! The trait has no constructors. Each shape builds itself, and the
//! combinator engine receives those constructors as plain functions.

/// Read access to the populated slot of an outcome.
pub trait Settled: Sized {
    /// Payload carried on success.
    type Value;
    /// Payload carried on failure.
    type Error;

    /// Consume the outcome, yielding whichever slot is populated.
    fn into_parts(self) -> Result<Self::Value, Self::Error>;

    /// The error slot, if populated.
    fn as_error(&self) -> Option<&Self::Error>;

    /// `true` iff the error slot is empty.
    #[inline]
    fn is_success(&self) -> bool {
        self.as_error().is_none()
    }

    #[inline]
    fn is_error(&self) -> bool {
        !self.is_success()
    }
}
