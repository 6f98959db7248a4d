//! Error types and result definitions for the basalt type layer.
//!
//! This crate provides the unified error type ([`Error`]) and result type
//! alias ([`Result<T>`]) used throughout the basalt crates. All operations
//! that can fail return `Result<T>`, where the error variant carries enough
//! context for the caller to decide whether to skip a record, fail a batch,
//! or report to the user.
//!
//! # Error Philosophy
//!
//! Basalt uses a single error enum rather than crate-specific error types.
//! This approach:
//! - Simplifies error handling across crate boundaries
//! - Allows errors to propagate naturally with the `?` operator
//! - Provides clear messages for end users
//! - Enables structured matching for programmatic handling
//!
//! Two tiers exist. Data-quality failures (malformed text, out-of-range
//! literals) are recoverable and surfaced through this enum. Contract
//! violations, caller bugs such as passing an unrecognized format
//! generation, are not representable here at all: those paths abort,
//! because no sensible fallback value exists.

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
