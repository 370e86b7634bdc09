//! Core types: PathSpec, ResolvedTarget, WildcardPattern, ResolveError

mod error;
mod path_spec;
mod pattern;
mod target;

pub use error::ResolveError;
pub use path_spec::PathSpec;
pub use pattern::{MatchCase, WildcardPattern};
pub use target::{ResolvedTarget, has_extension};
