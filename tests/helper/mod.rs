//! Shared test utilities

pub mod registry;

pub use registry::{FixedProbe, MockRegistry};
