//! Utility functions for code generation, URL validation and error mapping.
//!
//! - [`code_generator`] - Short code generation and lookup validation
//! - [`url_validator`] - Absolute URL validation and title derivation
//! - [`db_error`] - SQLx error classification

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
