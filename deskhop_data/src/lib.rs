//! Shared data model for the deskhop space catalog.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_spaces};
