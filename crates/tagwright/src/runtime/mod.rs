//! Tag dispatch runtime.
//!
//! This module binds tag occurrences found by an external parser, resolves
//! the method to call (explicit, macro or wildcard) and renders tag pair
//! contents by re-entering that parser.

mod class;
mod context;
mod dispatcher;
mod error;
mod hooks;
mod params;
mod parser;
mod registry;
mod settings;
mod tag;

pub use class::{MethodFn, TagClass, WildcardFn};
pub use context::Context;
pub use dispatcher::TagRuntime;
pub use error::TagError;
pub use hooks::{HookFn, Hooks, INIT_HOOK};
pub use params::Parameters;
pub use parser::{Parser, Rendered, TagRenderer};
pub use registry::TagRegistry;
pub use settings::{DEFAULT_DOCS_URL, DEFAULT_MAX_DEPTH, Settings};
pub use tag::{AS_PARAM, NATIVE_LANGUAGE, SCOPE_PARAM, Tag, TagProperties};
