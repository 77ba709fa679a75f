//! Utility modules.

pub mod hash;
mod plural;

pub use plural::{plural_count, plural_s};
