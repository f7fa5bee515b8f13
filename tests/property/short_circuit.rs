//! Short-circuiting: no success-path closure runs on an error.

use crate::common::{error_strategy, CallLog, Flag, Maybe, Plain, Signal};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_plain_error_skips_success_path(message in error_strategy()) {
        let log = CallLog::new();
        let result = Plain::error(message.clone())
            .transform(|x| { log.record("transform"); x })
            .chain(|x| { log.record("chain"); Plain::success(x) })
            .inspect_value(|_| log.record("inspect"))
            .verify(|_| { log.record("predicate"); true }, || { log.record("supplier"); String::new() })
            .verify_with(|_| { log.record("check"); Signal::success() })
            .run_if_success(|| log.record("run"))
            .flat_run_if_success(|| { log.record("effect"); Signal::success() });

        prop_assert_eq!(result, Plain::error(message));
        prop_assert!(log.is_empty());
    }

    #[test]
    fn prop_optional_error_skips_both_families(message in error_strategy()) {
        let log = CallLog::new();
        let result = Maybe::error(message.clone())
            .transform_to_optional(|x| { log.record("whole"); x })
            .transform_value(|x| { log.record("value"); x })
            .inspect_each(|_| log.record("value"), || log.record("empty"), |_| {})
            .run_if_empty(|| log.record("empty"))
            .flat_replace_empty(|| { log.record("replace"); Maybe::empty() });

        prop_assert_eq!(result, Maybe::error(message));
        prop_assert!(log.is_empty());
    }

    #[test]
    fn prop_bool_and_unit_error_skip_success_path(message in error_strategy()) {
        let log = CallLog::new();
        let flag = Flag::error(message.clone())
            .run_if_true(|| log.record("true"))
            .run_if_false(|| log.record("false"))
            .transform_to_bool(|b| { log.record("transform"); b });
        let signal = Signal::error(message.clone())
            .replace(|| { log.record("replace"); 1 });

        prop_assert_eq!(flag, Flag::error(message.clone()));
        prop_assert_eq!(signal, Plain::error(message));
        prop_assert!(log.is_empty());
    }

    /// Each closure runs at most once, and error-path closures run on errors.
    #[test]
    fn prop_error_path_runs_once(message in error_strategy()) {
        let log = CallLog::new();
        let _ = Plain::error(message)
            .inspect_error(|_| log.record("inspect"))
            .run_if_error(|| log.record("run"))
            .run_always(|| log.record("always"));
        prop_assert_eq!(log.entries(), vec!["inspect", "run", "always"]);
    }
}
