//! # vaultkit-core
//!
//! Core crate for VaultKit. Contains configuration schemas, the unified
//! error system, and small ownership/time helpers.
//!
//! This crate has **no** internal dependencies on other VaultKit crates.

pub mod config;
pub mod error;
pub mod result;
pub mod util;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
