//! Version layer for the release check
//!
//! This module fetches the running version and the upstream releases and
//! compares them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Probe    │────▶│   Checker   │◀────│  Registry   │
//! │ (HTTP hdr)  │     │  (classify) │     │ (git refs)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │   Number    │
//!                     │ (parse/cmp) │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Latest-version selection and status classification
//! - [`number`]: The numeric `Version` type and pattern extraction
//! - [`probe`]: Probe trait and HTTP implementation for the version header
//! - [`registry`]: Registry trait for listing release branches and tags
//! - [`registries`]: Concrete registry implementations (`git ls-remote`)
//! - [`error`]: Error types for probe and registry operations

pub mod checker;
pub mod error;
pub mod number;
pub mod probe;
pub mod registries;
pub mod registry;
