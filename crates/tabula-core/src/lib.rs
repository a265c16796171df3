//! Core traits and types for tabulation
//!
//! This crate provides the pieces shared by every tabula crate: the unified
//! [`Error`] type and the numeric traits that describe which types can serve
//! as dense-table levels ([`Level`]) and which can be accumulated as counts or
//! weights ([`Numeric`]).
//!
//! # Example
//!
//! ```rust
//! use tabula_core::{numeric::total, Level, Numeric};
//!
//! let weights = [0.5, 1.5, 2.0];
//! assert_eq!(total(&weights).as_f64(), 4.0);
//! assert_eq!((-3i32).widen(), -3);
//! ```

pub mod error;
pub mod numeric;

// Re-export core types
pub use error::{check_len, Error, Result};

// Numeric traits
pub use numeric::{Level, Numeric};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{Level, Numeric, Result};
}
