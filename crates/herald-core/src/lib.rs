//! # herald-core
//!
//! Core crate for Herald. Contains the collaborator traits the notification
//! view-model calls into, configuration schemas, shared message and site
//! value types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Herald crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
