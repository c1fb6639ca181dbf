//! Password hashing and policy enforcement.

pub mod hasher;
pub mod strength;
pub mod validator;

pub use hasher::PasswordHasher;
pub use strength::{StrengthEstimate, estimate};
pub use validator::{CharClass, PasswordReport, PasswordValidator, validate_password};
