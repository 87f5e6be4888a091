//! JSON serialization provider.
//!
//! A small capability for turning values into JSON text or UTF-8 bytes and
//! back. Consumers take the provider as a value (or generic parameter), so
//! tests can swap in their own implementation.
//!
//! ## Example
//!
//! ```
//! use domain_helpers::serialization::{JsonSerializationProvider, SerializationProvider};
//! use std::collections::BTreeMap;
//!
//! let provider = JsonSerializationProvider::default();
//! let mut value = BTreeMap::new();
//! value.insert("name", Some("example"));
//! value.insert("alias", None);
//!
//! // Compact output, null fields omitted
//! assert_eq!(provider.serialize(&value).unwrap(), r#"{"name":"example"}"#);
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Output options for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializerOptions {
    /// Pretty-print with indentation
    pub indented: bool,
    /// Drop object fields whose value is null
    pub omit_null: bool,
}

impl Default for SerializerOptions {
    fn default() -> Self {
        Self {
            indented: false,
            omit_null: true,
        }
    }
}

/// Serialize/deserialize capability
pub trait SerializationProvider: Send + Sync {
    /// Options used by [`serialize`](Self::serialize) and
    /// [`serialize_to_bytes`](Self::serialize_to_bytes)
    fn options(&self) -> &SerializerOptions;

    /// Serialize a value to a string with explicit options
    fn serialize_with<T: Serialize + ?Sized>(
        &self,
        value: &T,
        options: &SerializerOptions,
    ) -> Result<String>;

    /// Serialize a value to UTF-8 bytes with explicit options
    fn serialize_to_bytes_with<T: Serialize + ?Sized>(
        &self,
        value: &T,
        options: &SerializerOptions,
    ) -> Result<Vec<u8>>;

    /// Deserialize a value from a string
    fn deserialize<T: DeserializeOwned>(&self, data: &str) -> Result<T>;

    /// Deserialize a value from UTF-8 bytes
    fn deserialize_from_bytes<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T>;

    /// Serialize a value to a string with the provider's options
    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        self.serialize_with(value, self.options())
    }

    /// Serialize a value to UTF-8 bytes with the provider's options
    fn serialize_to_bytes<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        self.serialize_to_bytes_with(value, self.options())
    }
}

/// `serde_json` backed serialization provider
#[derive(Debug, Clone, Default)]
pub struct JsonSerializationProvider {
    options: SerializerOptions,
}

impl JsonSerializationProvider {
    /// Create a provider with default options (compact, nulls omitted)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with explicit options
    pub fn with_options(options: SerializerOptions) -> Self {
        Self { options }
    }

    fn to_value<T: Serialize + ?Sized>(value: &T, options: &SerializerOptions) -> Result<Value> {
        let mut value = serde_json::to_value(value)?;
        if options.omit_null {
            strip_nulls(&mut value);
        }
        Ok(value)
    }
}

impl SerializationProvider for JsonSerializationProvider {
    fn options(&self) -> &SerializerOptions {
        &self.options
    }

    fn serialize_with<T: Serialize + ?Sized>(
        &self,
        value: &T,
        options: &SerializerOptions,
    ) -> Result<String> {
        let value = Self::to_value(value, options)?;
        let text = if options.indented {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }

    fn serialize_to_bytes_with<T: Serialize + ?Sized>(
        &self,
        value: &T,
        options: &SerializerOptions,
    ) -> Result<Vec<u8>> {
        let value = Self::to_value(value, options)?;
        let bytes = if options.indented {
            serde_json::to_vec_pretty(&value)?
        } else {
            serde_json::to_vec(&value)?
        };
        Ok(bytes)
    }

    fn deserialize<T: DeserializeOwned>(&self, data: &str) -> Result<T> {
        Ok(serde_json::from_str(data)?)
    }

    fn deserialize_from_bytes<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T> {
        Ok(serde_json::from_slice(data)?)
    }
}

/// Remove null-valued object fields, recursively. Nulls inside arrays are kept.
fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_nulls_nested() {
        let mut value = json!({
            "a": null,
            "b": { "c": null, "d": 1 },
            "e": [null, { "f": null }]
        });
        strip_nulls(&mut value);
        assert_eq!(value, json!({ "b": { "d": 1 }, "e": [null, {}] }));
    }

    #[derive(Serialize)]
    struct Row {
        zeta: u32,
        alpha: Option<u32>,
        mid: u32,
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let row = Row {
            zeta: 1,
            alpha: None,
            mid: 2,
        };
        let keep_nulls = JsonSerializationProvider::with_options(SerializerOptions {
            indented: false,
            omit_null: false,
        });
        let direct = serde_json::to_string(&row).unwrap();
        assert_eq!(keep_nulls.serialize(&row).unwrap(), direct);
        assert_eq!(direct, r#"{"zeta":1,"alpha":null,"mid":2}"#);

        let provider = JsonSerializationProvider::new();
        assert_eq!(provider.serialize(&row).unwrap(), r#"{"zeta":1,"mid":2}"#);
    }

    #[test]
    fn test_default_options() {
        let options = SerializerOptions::default();
        assert!(!options.indented);
        assert!(options.omit_null);
    }

    #[test]
    fn test_keep_nulls_when_disabled() {
        let provider = JsonSerializationProvider::with_options(SerializerOptions {
            indented: false,
            omit_null: false,
        });
        let text = provider.serialize(&json!({ "a": null })).unwrap();
        assert_eq!(text, r#"{"a":null}"#);
    }

    #[test]
    fn test_indented_output() {
        let provider = JsonSerializationProvider::new();
        let options = SerializerOptions {
            indented: true,
            omit_null: true,
        };
        let text = provider.serialize_with(&json!({ "a": 1 }), &options).unwrap();
        assert!(text.contains('\n'), "got: {}", text);
    }

    #[test]
    fn test_deserialize_error() {
        let provider = JsonSerializationProvider::new();
        let err = provider.deserialize::<Value>("{not json").unwrap_err();
        assert!(matches!(err, crate::error::HelperError::Serialization(_)));
    }
}
