pub mod models;
pub mod catalog;
pub mod scoring;
pub mod insights;
pub mod submission;
pub mod errors;

pub use models::*;
pub use catalog::*;
pub use scoring::*;
pub use insights::*;
pub use submission::*;
pub use errors::*;
