//! The `Validate` trait
//!
//! Every configuration section checks itself before the client is built.

/// A configuration section that can reject its own values.
///
/// The error names the offending setting, shown as is when the
/// configuration fails to load.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
