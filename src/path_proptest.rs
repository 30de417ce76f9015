//! Property-based tests for path manipulation functions.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{dest_parent, normalize, relative_to, resolve};
    use proptest::prelude::*;
    use std::path::{Path, PathBuf};

    fn segments() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z][a-z0-9_]{0,6}", 0..6)
    }

    fn under(root: &Path, segments: &[String]) -> PathBuf {
        segments.iter().fold(root.to_path_buf(), |path, s| path.join(s))
    }

    // ============================================================================
    // relative_to property tests
    // ============================================================================

    proptest! {
        /// Property: joining the relative path back onto the base reaches the target
        #[test]
        fn relative_to_round_trips_through_base(target in segments(), base in segments()) {
            let root = std::env::temp_dir();
            let target = under(&root, &target);
            let base = under(&root, &base);

            let relative = relative_to(&target, &base);
            prop_assert!(relative.is_relative());
            prop_assert_eq!(normalize(&base.join(&relative)), normalize(&target));
        }

        /// Property: a target inside the base never needs to walk upwards
        #[test]
        fn relative_to_descendant_has_no_parent_components(base in segments(), rest in segments()) {
            let root = std::env::temp_dir();
            let base = under(&root, &base);
            let target = under(&base, &rest);

            let relative = relative_to(&target, &base);
            prop_assert!(!relative.components().any(|c| c == std::path::Component::ParentDir));
        }
    }

    // ============================================================================
    // normalize / resolve / dest_parent property tests
    // ============================================================================

    proptest! {
        /// Property: normalize is idempotent
        #[test]
        fn normalize_is_idempotent(input in "[a-z./]{0,20}") {
            let once = normalize(Path::new(&input));
            let twice = normalize(&once);
            prop_assert_eq!(once, twice);
        }

        /// Property: resolving a relative path always lands under the working directory
        #[test]
        fn resolve_relative_stays_under_working_dir(rel in segments()) {
            let wd = std::env::temp_dir();
            let rel: PathBuf = rel.iter().collect();
            let resolved = resolve(&wd, &rel);
            prop_assert!(resolved.starts_with(&wd));
        }

        /// Property: a single-component destination never has a parent to create
        #[test]
        fn dest_parent_of_bare_name_is_none(name in "[a-z][a-z0-9_.]{0,10}") {
            prop_assert_eq!(dest_parent(Path::new(&name)), None);
        }
    }
}
