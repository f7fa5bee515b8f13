//! Conversion laws between shapes.

use crate::common::{error_strategy, flag_strategy, maybe_strategy, plain_strategy, signal_strategy};
use proptest::prelude::*;

proptest! {
    /// Plain → optional → plain is the identity, and the optional is never empty.
    #[test]
    fn prop_plain_optional_round_trip(plain in plain_strategy(), policy in error_strategy()) {
        let optional = plain.clone().to_optional();
        prop_assert!(!optional.is_empty());
        prop_assert_eq!(optional.to_plain(|| policy), plain);
    }

    /// Optional → plain maps empty to the policy error and keeps the rest.
    #[test]
    fn prop_optional_to_plain(maybe in maybe_strategy(), policy in error_strategy()) {
        let plain = maybe.clone().to_plain(|| policy.clone());
        if maybe.is_empty() {
            prop_assert_eq!(plain.err(), Some(policy));
        } else {
            prop_assert_eq!(plain.is_error(), maybe.is_error());
            prop_assert_eq!(plain.value(), maybe.value());
        }
    }

    /// Every shape's `to_unit` keeps exactly the error.
    #[test]
    fn prop_to_unit_keeps_error(
        plain in plain_strategy(),
        maybe in maybe_strategy(),
        flag in flag_strategy()
    ) {
        prop_assert_eq!(plain.clone().to_unit().err(), plain.err());
        prop_assert_eq!(maybe.clone().to_unit().err(), maybe.err());
        prop_assert_eq!(flag.clone().to_unit().err(), flag.err());
    }

    /// The unit hub never carries a value into the optional shape.
    #[test]
    fn prop_unit_to_optional_is_empty_or_error(signal in signal_strategy()) {
        let optional = signal.clone().to_optional::<i32>();
        prop_assert!(!optional.has_value());
        prop_assert_eq!(optional.err(), signal.err());
    }

    /// `Result` conversions round-trip.
    #[test]
    fn prop_result_round_trip(plain in plain_strategy(), maybe in maybe_strategy()) {
        let back: crate::common::Plain = plain.clone().into_result().into();
        prop_assert_eq!(back, plain);
        let back: crate::common::Maybe = maybe.clone().into_result().into();
        prop_assert_eq!(back, maybe);
    }
}
