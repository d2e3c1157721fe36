//! Lifecycle hooks fired on tag invocations.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::runtime::Tag;

/// Event fired once a tag invocation has been bound, before dispatch.
pub const INIT_HOOK: &str = "init";

/// Hook callback signature.
///
/// Hooks receive the invocation mutably so they can observe or adjust its
/// state (content, parameters, method) before the method runs.
pub type HookFn = Box<dyn Fn(&mut Tag<'_>) + Send + Sync>;

/// Callbacks subscribed to named lifecycle events.
///
/// Callbacks run synchronously in registration order. A hook cannot abort
/// the caller; its only effect is what it does to the invocation.
#[derive(Default)]
pub struct Hooks {
    hooks: BTreeMap<String, Vec<HookFn>>,
}

impl Hooks {
    /// Create an empty set of hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a callback to an event.
    pub fn on<F>(&mut self, event: impl Into<String>, callback: F)
    where
        F: Fn(&mut Tag<'_>) + Send + Sync + 'static,
    {
        self.hooks
            .entry(event.into())
            .or_default()
            .push(Box::new(callback));
    }

    /// Number of callbacks subscribed to an event.
    pub fn count(&self, event: &str) -> usize {
        self.hooks.get(event).map_or(0, Vec::len)
    }

    /// Fire an event.
    pub fn run(&self, event: &str, tag: &mut Tag<'_>) {
        let Some(callbacks) = self.hooks.get(event) else {
            return;
        };
        tracing::trace!(event, tag = tag.tag_name(), count = callbacks.len(), "running hooks");
        for callback in callbacks {
            callback(tag);
        }
    }
}

impl Debug for Hooks {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_map()
            .entries(self.hooks.iter().map(|(event, hooks)| (event, hooks.len())))
            .finish()
    }
}
