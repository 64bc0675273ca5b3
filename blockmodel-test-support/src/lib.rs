//! Shared test utilities used across the blockmodel crates.
//!
//! [`tracing::RecordingLayer`] captures spans and events so instrumentation
//! can be asserted, and [`ci::property_test_profile`] reads the environment
//! overrides that tune property-test suites.

pub mod ci;
pub mod tracing;
