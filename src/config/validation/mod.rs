//! Configuration validation
//!
//! - `base_url`: base URL checks
//! - `config_validators`: one `Validate` impl per configuration section
//! - `trait_def`: the `Validate` trait
//! - `tests`: validator tests

mod base_url;
mod config_validators;
mod trait_def;

pub use base_url::validate_base_url;
pub use trait_def::Validate;
