//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing the wizard state, profile input, and the submission workflow.

pub mod state;

pub use state::*;
