//! `{{ scope:name }}`: expose the whole context under `name`.
//!
//! The method part of the tag is the scope name, so the class has no
//! explicit methods and handles every call through its wildcard.

use crate::runtime::{Tag, TagClass, TagError};
use crate::types::{Data, Value};

pub const SCOPE_HANDLE: &str = "scope";

pub(crate) fn class() -> TagClass {
    TagClass::new(SCOPE_HANDLE).with_wildcard(wildcard)
}

fn wildcard(tag: &mut Tag<'_>, scope: &str) -> Result<Value, TagError> {
    let mut data = Data::new();
    data.insert(scope.to_string(), Value::Map(tag.context().all().clone()));

    if tag.is_pair() {
        tag.parse(data)
    } else {
        Ok(tag.aliased_result(Value::Map(data)))
    }
}
