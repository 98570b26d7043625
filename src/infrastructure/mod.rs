//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns like session
//! persistence, webhook delivery, and captcha generation.

pub mod persistence;
pub mod delivery;
pub mod captcha;

pub use persistence::*;
pub use delivery::*;
pub use captcha::*;
