// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lifting fallible computations into outcomes.
//!
//! Two kinds of failure can be captured:
//!
//! - **Returned errors**: `capture` / `capture_with` take a computation returning
//!   `Result` and forward `Ok` to `success` and `Err` to `error`.
//! - **Panics** (`std` only): `capture_panic` / `capture_panic_with` run a plain
//!   computation under [`std::panic::catch_unwind`] and turn a panic into a
//!   [`Fault`].
//!
//! The computation runs exactly once. Nothing is retried and nothing is logged.
//!
//! ```
//! use verdict::{Fault, Outcome};
//!
//! let parsed = Outcome::capture(|| "42".parse::<i32>());
//! assert_eq!(parsed.value(), Some(42));
//!
//! let zero = std::hint::black_box(0);
//! let divided: Outcome<i32, Fault> = Outcome::capture_panic(|| 1 / zero);
//! assert!(divided.is_error());
//! ```

use crate::boolean::BoolOutcome;
use crate::optional::OptionalOutcome;
use crate::outcome::Outcome;
use crate::unit::UnitOutcome;

#[cfg(feature = "std")]
pub use self::fault::Fault;

impl<T, E> Outcome<T, E> {
    /// Run `computation` once; `Ok` becomes success, `Err` becomes error.
    pub fn capture(computation: impl FnOnce() -> Result<T, E>) -> Self {
        computation().into()
    }

    /// Like [`Outcome::capture`], translating the caught error through `mapper`.
    pub fn capture_with<X>(
        computation: impl FnOnce() -> Result<T, X>,
        mapper: impl FnOnce(X) -> E,
    ) -> Self {
        computation().map_err(mapper).into()
    }
}

impl<T, E> OptionalOutcome<T, E> {
    /// Run `computation` once; `Ok(None)` becomes empty.
    pub fn capture(computation: impl FnOnce() -> Result<Option<T>, E>) -> Self {
        computation().into()
    }

    pub fn capture_with<X>(
        computation: impl FnOnce() -> Result<Option<T>, X>,
        mapper: impl FnOnce(X) -> E,
    ) -> Self {
        computation().map_err(mapper).into()
    }
}

impl<E> BoolOutcome<E> {
    pub fn capture(computation: impl FnOnce() -> Result<bool, E>) -> Self {
        computation().into()
    }

    pub fn capture_with<X>(
        computation: impl FnOnce() -> Result<bool, X>,
        mapper: impl FnOnce(X) -> E,
    ) -> Self {
        computation().map_err(mapper).into()
    }
}

impl<E> UnitOutcome<E> {
    pub fn capture(computation: impl FnOnce() -> Result<(), E>) -> Self {
        computation().into()
    }

    pub fn capture_with<X>(
        computation: impl FnOnce() -> Result<(), X>,
        mapper: impl FnOnce(X) -> E,
    ) -> Self {
        computation().map_err(mapper).into()
    }
}

#[cfg(feature = "std")]
mod fault {
    use std::any::Any;
    use std::fmt;
    use std::panic::{self, AssertUnwindSafe};
    use std::string::String;

    use crate::boolean::BoolOutcome;
    use crate::optional::OptionalOutcome;
    use crate::outcome::Outcome;
    use crate::unit::UnitOutcome;

    /// A panic caught while running a captured computation.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct Fault {
        message: String,
    }

    impl Fault {
        pub fn new(message: impl Into<String>) -> Self {
            Self {
                message: message.into(),
            }
        }

        /// The panic message, or a placeholder when the payload was not a string.
        pub fn message(&self) -> &str {
            &self.message
        }

        fn from_payload(payload: Box<dyn Any + Send>) -> Self {
            let message = match payload.downcast::<String>() {
                Ok(message) => *message,
                Err(payload) => match payload.downcast_ref::<&'static str>() {
                    Some(message) => String::from(*message),
                    None => String::from("non-string panic payload"),
                },
            };
            Self { message }
        }
    }

    impl fmt::Display for Fault {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "computation panicked: {}", self.message)
        }
    }

    impl std::error::Error for Fault {}

    /// Run `computation` once, catching a panic as a [`Fault`].
    ///
    /// The closure is asserted unwind-safe: nothing it touched is observed again
    /// by this crate after a panic.
    fn catch<P>(computation: impl FnOnce() -> P) -> Result<P, Fault> {
        panic::catch_unwind(AssertUnwindSafe(computation)).map_err(Fault::from_payload)
    }

    impl<T> Outcome<T, Fault> {
        /// Run `computation` once; a panic becomes `error(Fault)`.
        pub fn capture_panic(computation: impl FnOnce() -> T) -> Self {
            catch(computation).into()
        }
    }

    impl<T, E> Outcome<T, E> {
        pub fn capture_panic_with(
            computation: impl FnOnce() -> T,
            mapper: impl FnOnce(Fault) -> E,
        ) -> Self {
            catch(computation).map_err(mapper).into()
        }
    }

    impl<T> OptionalOutcome<T, Fault> {
        /// Run `computation` once; `None` becomes empty and a panic becomes `error(Fault)`.
        pub fn capture_panic(computation: impl FnOnce() -> Option<T>) -> Self {
            catch(computation).into()
        }
    }

    impl<T, E> OptionalOutcome<T, E> {
        pub fn capture_panic_with(
            computation: impl FnOnce() -> Option<T>,
            mapper: impl FnOnce(Fault) -> E,
        ) -> Self {
            catch(computation).map_err(mapper).into()
        }
    }

    impl BoolOutcome<Fault> {
        pub fn capture_panic(computation: impl FnOnce() -> bool) -> Self {
            catch(computation).into()
        }
    }

    impl<E> BoolOutcome<E> {
        pub fn capture_panic_with(
            computation: impl FnOnce() -> bool,
            mapper: impl FnOnce(Fault) -> E,
        ) -> Self {
            catch(computation).map_err(mapper).into()
        }
    }

    impl UnitOutcome<Fault> {
        pub fn capture_panic(computation: impl FnOnce()) -> Self {
            catch(computation).into()
        }
    }

    impl<E> UnitOutcome<E> {
        pub fn capture_panic_with(
            computation: impl FnOnce(),
            mapper: impl FnOnce(Fault) -> E,
        ) -> Self {
            catch(computation).map_err(mapper).into()
        }
    }
}
