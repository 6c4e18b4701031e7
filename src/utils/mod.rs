//! Utility functions for code generation and URL validation.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - Input URL checks

pub mod code_generator;
pub mod url_validator;
