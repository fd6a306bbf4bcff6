//! Safe navigation over loosely-structured ESPN documents.
//!
//! Two layers share one failure policy: any missing or mistyped link yields
//! the caller's default, never a partial value and never an error.
//!
//! * [`lenient`] absorbs type drift while deserializing, so a field of the
//!   wrong JSON type becomes `None` and a malformed list element becomes its
//!   type's `Default` (list length is preserved).
//! * [`resolve`], [`OptionalListExt`] and [`OptionalTextExt`] are the access
//!   steps extractors chain together with `?`.
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Run an optional-chaining `path` against `root`, falling back to `default`
/// when any step along it is missing.
pub fn resolve<'a, R, T>(root: &'a R, path: impl FnOnce(&'a R) -> Option<T>, default: T) -> T
where
    R: ?Sized,
{
    path(root).unwrap_or(default)
}

/// Build a document from an arbitrary JSON value. Anything other than an
/// object degrades to the empty document.
pub fn document<T: DeserializeOwned + Default>(value: Value) -> T {
    match value {
        Value::Object(_) => T::deserialize(value).unwrap_or_default(),
        _ => T::default(),
    }
}

/// Access steps over an optional list field.
pub trait OptionalListExt<T> {
    /// The list contents, or an empty slice when the field is absent.
    fn items(&self) -> &[T];

    fn first_item(&self) -> Option<&T> {
        self.items().first()
    }

    /// First element satisfying `predicate`.
    fn find_item<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&&T) -> bool,
    {
        self.items().iter().find(predicate)
    }
}

impl<T> OptionalListExt<T> for Option<Vec<T>> {
    fn items(&self) -> &[T] {
        self.as_deref().unwrap_or_default()
    }
}

pub trait OptionalTextExt {
    /// The text when it is present and non-empty.
    fn present(&self) -> Option<&str>;
}

impl OptionalTextExt for Option<String> {
    fn present(&self) -> Option<&str> {
        self.as_deref().filter(|s| !s.is_empty())
    }
}

/// `deserialize_with` adapters. Each one accepts any JSON value and never
/// fails the enclosing document.
pub mod lenient {
    use super::*;
    use serde::Deserializer;

    /// A scalar or enum field; `None` when the value has the wrong shape.
    pub fn opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(T::deserialize(value).ok())
    }

    /// A nested object; `None` unless the value is a JSON object.
    pub fn node<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        Ok(match Value::deserialize(deserializer)? {
            value @ Value::Object(_) => Some(document(value)),
            _ => None,
        })
    }

    /// A list of objects. Elements that are not objects become `T::default()`
    /// so the list keeps its length and order.
    pub fn seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => Some(items.into_iter().map(document).collect()),
            _ => None,
        })
    }

    /// Text that ESPN sends as a string on some feeds and a number on others.
    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }
}
