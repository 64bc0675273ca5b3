//! Shared test utilities for `blockmodel-core`.

use blockmodel_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::adjacency::AdjacencyMatrix;

/// Coverage jobs cap shrink iterations to prevent long minimization tails.
const COVERAGE_MAX_SHRINK_ITERS: u32 = 128;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROPTEST_CASES` and
/// `BLOCKMODEL_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        max_shrink_iters: max_shrink_iters(),
        ..ProptestConfig::default()
    }
}

fn max_shrink_iters() -> u32 {
    if cfg!(coverage) {
        COVERAGE_MAX_SHRINK_ITERS
    } else {
        ProptestConfig::default().max_shrink_iters
    }
}

/// Returns `true` when `matrix` is symmetric with a zero diagonal.
#[must_use]
pub(crate) fn is_simple_undirected(matrix: &AdjacencyMatrix) -> bool {
    let order = matrix.order();
    (0..order).all(|i| {
        matrix.get(i, i) == Some(0) && (0..order).all(|j| matrix.get(i, j) == matrix.get(j, i))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn suite_config_keeps_a_positive_budget() {
        let config = suite_proptest_config(32);
        assert!(config.cases > 0);
        assert!(config.max_shrink_iters > 0);
        assert!(config.max_shrink_iters <= ProptestConfig::default().max_shrink_iters);
    }
}
