//! Registry implementations for listing release refs

pub mod git;

pub use git::GitRegistry;
