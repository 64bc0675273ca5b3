//! Benchmark setup error type.
//!
//! Lets setup functions propagate generator failures with `?` instead of
//! calling `.expect()`.

use blockmodel_core::BlockModelError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A generator rejected its input.
    #[error("block model generation failed: {0}")]
    Model(#[from] BlockModelError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
