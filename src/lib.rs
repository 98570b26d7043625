//! csmaturity - Customer Success Maturity Benchmark Library
//!
//! A terminal-based maturity assessment: ten questions, five categories,
//! four maturity tiers, and webhook submission of the results.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
