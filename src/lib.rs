// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Immutable outcome containers with a shared combinator algebra.
//!
//! An outcome is either a success or an error, never both and never neither.
//! Four shapes cover the common payloads:
//!
//! | Shape                  | Success carries        | Extra state      |
//! |------------------------|------------------------|------------------|
//! | [`Outcome<T, E>`]      | exactly one `T`        |                  |
//! | [`OptionalOutcome<T, E>`] | a `T`, or nothing   | empty            |
//! | [`BoolOutcome<E>`]     | `true` or `false`      |                  |
//! | [`UnitOutcome<E>`]     | nothing                |                  |
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────────────┐
//! │   base.rs    │────▶│  engine.rs   │────▶│ outcome.rs  optional.rs  │
//! │  (Settled)   │     │ (transform,  │     │ boolean.rs  unit.rs      │
//! │              │     │  chain, ...) │     │ (the four shapes)        │
//! └──────────────┘     └──────────────┘     └──────────────────────────┘
//!                                                │              │
//!                                                ▼              ▼
//!                                    ┌──────────────┐  ┌──────────────┐
//!                                    │ capture.rs   │  │ contracts.rs │
//!                                    │ (Fault, lift │  │ (law checks) │
//!                                    │  Result/panic)│ │              │
//!                                    └──────────────┘  └──────────────┘
//! ```
//!
//! # Short-circuiting
//!
//! Once an outcome holds an error, no success-path closure runs: transforms,
//! chains, predicates and value inspections are skipped. Only error-path and
//! always-run operations execute. Errors are cleared explicitly by `recover`,
//! `flat_recover`, the no-value `replace` family and the `fold`/`default_*`
//! extractors.
//!
//! # Usage
//!
//! ```
//! use verdict::{OptionalOutcome, Outcome};
//!
//! let user: OptionalOutcome<&str, String> = OptionalOutcome::success("ada");
//! let greeting = user
//!     .transform_value(|name| name.to_uppercase())
//!     .to_plain(|| "no user".to_string())
//!     .transform(|name| format!("hello {}", name));
//!
//! assert_eq!(greeting, Outcome::success("hello ADA".to_string()));
//!
//! let hub = Outcome::<i32, String>::success(5).to_unit().to_optional::<i32>();
//! assert_eq!(hub, OptionalOutcome::empty());
//! ```
//!
//! # Features
//!
//! - `std` (default): panic capture (`capture_panic`) and [`Fault`]. Without it the
//!   crate is `no_std`.
//! - `strict-contracts`: keep the [`contracts`] checks in release builds.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod base;
mod boolean;
mod capture;
pub mod contracts;
mod engine;
mod optional;
mod outcome;
mod unit;

#[cfg(any(test, feature = "std"))]
pub mod testing;

pub use base::Settled;
pub use boolean::BoolOutcome;
#[cfg(feature = "std")]
pub use capture::Fault;
pub use contracts::Law;
pub use optional::{OptionalOutcome, OptionalState};
pub use outcome::Outcome;
pub use unit::UnitOutcome;
