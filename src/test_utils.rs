//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a valid target name (lowercase alphanumeric with hyphens)
    pub fn target_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,20}".prop_filter("Name must not be empty", |s| !s.is_empty())
    }

    /// Generate adjacency lists of an acyclic dependency forest.
    ///
    /// Node `i` may only depend on nodes with smaller indices, so any tree
    /// materialized from the result is cycle-free by construction.
    pub fn dependency_forest() -> impl Strategy<Value = Vec<Vec<usize>>> {
        (1usize..8).prop_flat_map(|count| {
            (0..count)
                .map(|node| {
                    if node == 0 {
                        Just(Vec::new()).boxed()
                    } else {
                        proptest::collection::vec(0..node, 0..=node.min(3))
                            .prop_map(|mut deps| {
                                deps.sort_unstable();
                                deps.dedup();
                                deps
                            })
                            .boxed()
                    }
                })
                .collect::<Vec<_>>()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_target_name_generator(name in target_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn test_dependency_forest_is_acyclic(forest in dependency_forest()) {
            for (node, deps) in forest.iter().enumerate() {
                for dep in deps {
                    prop_assert!(*dep < node);
                }
            }
        }
    }
}
