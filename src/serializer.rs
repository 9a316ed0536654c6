//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! JSON conversion of items stored in the database.
//!
//! Items are converted with [`serde`]: any type implementing
//! [`Serialize`](serde::Serialize) can be written and any type implementing
//! [`DeserializeOwned`](serde::de::DeserializeOwned) can be read. Field
//! renames and custom representations are usually expressed with serde
//! attributes on the item type itself. For cases where the representation
//! should be changed for every item handled by a [`Client`](crate::Client),
//! a [`JsonSerializer`] holding one or more [`JsonConverter`]s can be given to
//! the [`ClientBuilder`](crate::ClientBuilder).
use crate::error::OrchestrateError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Debug;
use std::sync::Arc;

/// A transformation applied to every item value sent to or received from the service.
///
/// Converters see the item as a [`serde_json::Value`] after serde has done its
/// work (on write) or before serde runs (on read). Both methods default to the
/// identity transformation.
pub trait JsonConverter: Send + Sync + Debug {
    /// Transform a value on its way to the service.
    fn write(&self, value: Value) -> Value {
        value
    }
    /// Transform a value received from the service.
    fn read(&self, value: Value) -> Value {
        value
    }
}

/// Serializer used by a [`Client`](crate::Client) for all item values.
///
/// Write converters run in the order they were added; read converters run in
/// reverse order, so a chain of converters round-trips.
#[derive(Debug, Clone, Default)]
pub struct JsonSerializer {
    converters: Vec<Arc<dyn JsonConverter>>,
}

impl JsonSerializer {
    /// Create a serializer that uses plain serde conversion.
    pub fn new() -> JsonSerializer {
        JsonSerializer {
            ..Default::default()
        }
    }

    /// Add a converter to the chain.
    pub fn converter(mut self, converter: impl JsonConverter + 'static) -> JsonSerializer {
        self.converters.push(Arc::new(converter));
        self
    }

    pub fn to_value<T: Serialize + ?Sized>(&self, item: &T) -> Result<Value, OrchestrateError> {
        let mut value = serde_json::to_value(item)?;
        for c in self.converters.iter() {
            value = c.write(value);
        }
        Ok(value)
    }

    pub fn from_value<T: DeserializeOwned>(&self, value: Value) -> Result<T, serde_json::Error> {
        let mut value = value;
        for c in self.converters.iter().rev() {
            value = c.read(value);
        }
        serde_json::from_value(value)
    }

    pub(crate) fn encode(&self, value: &Value) -> Result<Vec<u8>, OrchestrateError> {
        Ok(serde_json::to_vec(value)?)
    }
}

/// Converter mapping snake_case field names on the Rust side to camelCase
/// field names on the wire.
///
/// Object keys are renamed recursively, including objects nested in arrays.
/// The read direction inserts an underscore before every upper-case letter,
/// so names with consecutive capitals (`itemID`) do not round-trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCaseConverter;

impl JsonConverter for CamelCaseConverter {
    fn write(&self, value: Value) -> Value {
        rename_keys(value, &snake_to_camel)
    }
    fn read(&self, value: Value) -> Value {
        rename_keys(value, &camel_to_snake)
    }
}

fn rename_keys(value: Value, f: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(m) => {
            let mut out = Map::new();
            for (k, v) in m {
                out.insert(f(&k), rename_keys(v, f));
            }
            Value::Object(out)
        }
        Value::Array(a) => Value::Array(a.into_iter().map(|v| rename_keys(v, f)).collect()),
        v => v,
    }
}

pub(crate) fn snake_to_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper = false;
    for c in s.chars() {
        if c == '_' && !out.is_empty() {
            upper = true;
            continue;
        }
        if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

pub(crate) fn camel_to_snake(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_uppercase() {
            if !out.is_empty() {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
