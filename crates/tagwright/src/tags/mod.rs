//! Built-in tags.

mod range;
mod scope;

use crate::runtime::TagRegistry;

pub use range::{LOOP_HANDLE, MAX_LOOP_ITERATIONS};
pub use scope::SCOPE_HANDLE;

/// Register every built-in tag.
pub fn register_builtins(registry: &mut TagRegistry) {
    registry.register(range::class());
    registry.register(scope::class());
}
