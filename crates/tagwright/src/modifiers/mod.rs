//! Named post-processing functions applied to values.

mod builtins;
mod error;
mod registry;

pub use error::ModifierNotFound;
pub use registry::{ModifierFn, ModifierRegistry};
