//! Dynamically-typed payload values
//!
//! Lists and records are shared handles: cloning one clones the handle, not
//! the contents, so the same list can appear several times in a payload or
//! contain itself.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// A single payload argument
#[derive(Clone, Default)]
pub enum Value {
    /// Absent value, rendered as `null`
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// Text; rendered raw at the top level and quoted when nested
    Str(String),
    /// Shared, ordered list
    List(List),
    /// Shared record of named fields
    Record(Record),
    /// Pre-rendered text, emitted verbatim at every level
    Opaque(String),
}

impl Value {
    /// Capture a value through its `Debug` representation
    pub fn debug(value: &impl fmt::Debug) -> Self {
        Self::Opaque(format!("{value:?}"))
    }

    /// Capture a value through its `Display` representation
    pub fn display(value: &impl fmt::Display) -> Self {
        Self::Opaque(value.to_string())
    }

    /// Convert any serializable value through its JSON form
    ///
    /// Values that fail to serialize become an opaque marker instead of an error.
    pub fn serialize(value: &impl serde::Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => Self::from(json),
            Err(e) => Self::Opaque(format!("[Unserializable: {e}]")),
        }
    }

    /// Name of the variant
    ///
    /// Containers cut off by the depth limit render as `[kind]`.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::Int(_) | Self::UInt(_) | Self::Float(_) => "Number",
            Self::Str(_) => "Str",
            Self::List(_) => "List",
            Self::Record(_) => "Record",
            Self::Opaque(_) => "Opaque",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug goes through the cycle-safe renderer; a derived impl would
        // recurse forever on self-referencing lists.
        f.write_str(&super::inspect(self, &super::InspectOptions::default()))
    }
}

impl PartialEq for Value {
    /// Structural equality for scalars, identity for lists and records
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) | (Self::Opaque(a), Self::Opaque(b)) => a == b,
            (Self::List(a), Self::List(b)) => a.ptr_eq(b),
            (Self::Record(a), Self::Record(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// Shared list handle
///
/// A list that contains itself, directly or through a record, forms a
/// reference cycle and is never freed. Call [`List::clear`] (or
/// [`Record::remove`] on the record holding the back-reference) to break it.
#[derive(Clone, Default)]
pub struct List(Arc<RwLock<Vec<Value>>>);

impl List {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item
    pub fn push(&self, item: impl Into<Value>) {
        self.0.write().push(item.into());
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Remove every item, dropping the handles it held
    pub fn clear(&self) {
        self.0.write().clear();
    }

    /// Item at `index`, cloned
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.read().get(index).cloned()
    }

    /// Copy of the current items
    ///
    /// Nested lists and records are shared, not deep-copied.
    pub fn items(&self) -> Vec<Value> {
        self.0.read().clone()
    }

    /// Whether both handles point to the same list
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn id(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl<T: Into<Value>> FromIterator<T> for List {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(Arc::new(RwLock::new(iter.into_iter().map(Into::into).collect())))
    }
}

#[derive(Default)]
struct RecordInner {
    name: Option<String>,
    fields: Vec<(String, Value)>,
}

/// Shared record handle with ordered, named fields
///
/// Like [`List`], a record that refers back to itself is a reference cycle;
/// [`Record::remove`] the back-reference once it is no longer logged.
#[derive(Clone, Default)]
pub struct Record(Arc<RwLock<RecordInner>>);

impl Record {
    /// Create an anonymous record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record tagged with a type name, rendered as `Name { .. }`
    pub fn named(name: impl Into<String>) -> Self {
        let record = Self::new();
        record.0.write().name = Some(name.into());
        record
    }

    /// Builder-style [`Record::insert`]
    pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a field, replacing an existing one with the same key in place
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        let mut inner = self.0.write();
        if let Some(slot) = inner.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            inner.fields.push((key, value));
        }
    }

    /// Remove a field, returning its value
    pub fn remove(&self, key: &str) -> Option<Value> {
        let mut inner = self.0.write();
        let index = inner.fields.iter().position(|(k, _)| k == key)?;
        Some(inner.fields.remove(index).1)
    }

    /// Field value, cloned
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0
            .read()
            .fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    /// Type name, if any
    pub fn name(&self) -> Option<String> {
        self.0.read().name.clone()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.read().fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.read().fields.is_empty()
    }

    /// Copy of the current fields in insertion order
    pub fn fields(&self) -> Vec<(String, Value)> {
        self.0.read().fields.clone()
    }

    /// Whether both handles point to the same record
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn id(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(v: $source) -> Self {
                    Self::$variant(<$target>::from(v))
                }
            }
        )+
    };
}

impl_from!(Int as i64: i8, i16, i32, i64);
impl_from!(UInt as u64: u8, u16, u32, u64);
impl_from!(Float as f64: f32, f64);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::UInt(v as u64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::Str(v.clone())
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl From<List> for Value {
    fn from(v: List) -> Self {
        Self::List(v)
    }
}

impl From<&List> for Value {
    fn from(v: &List) -> Self {
        Self::List(v.clone())
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Self::Record(v)
    }
}

impl From<&Record> for Value {
    fn from(v: &Record) -> Self {
        Self::Record(v.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match v {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::UInt(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Self::Str(s),
            Json::Array(items) => Self::List(items.into_iter().collect()),
            Json::Object(map) => {
                let record = Record::new();
                for (key, value) in map {
                    record.insert(key, value);
                }
                Self::Record(record)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_handles_are_shared() {
        let list = List::new();
        let alias = list.clone();
        alias.push(1);
        list.push("two");

        assert_eq!(list.len(), 2);
        assert!(list.ptr_eq(&alias));
        assert_eq!(alias.get(1), Some(Value::from("two")));
    }

    #[test]
    fn test_record_insert_replaces_in_place() {
        let record = Record::named("Point").with("x", 1).with("y", 2);
        record.insert("x", 10);

        let keys: Vec<_> = record.fields().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["x", "y"]);
        assert_eq!(record.get("x"), Some(Value::Int(10)));
        assert_eq!(record.name().as_deref(), Some("Point"));
    }

    #[test]
    fn test_json_conversion() {
        let value = Value::from(serde_json::json!({"id": 7, "tags": ["a", "b"], "ok": true}));
        let Value::Record(record) = value else {
            panic!("expected record");
        };
        assert_eq!(record.get("id"), Some(Value::Int(7)));
        assert_eq!(record.get("ok"), Some(Value::Bool(true)));
        let Some(Value::List(tags)) = record.get("tags") else {
            panic!("expected list");
        };
        assert_eq!(tags.items(), vec![Value::from("a"), Value::from("b")]);
    }

    #[test]
    fn test_serialize_through_json() {
        #[derive(serde::Serialize)]
        struct Endpoint {
            host: &'static str,
            port: u16,
        }

        let value = Value::serialize(&Endpoint { host: "db", port: 5432 });
        assert_eq!(value.kind(), "Record");
        assert_eq!(format!("{value:?}"), "{ host: 'db', port: 5432 }");
    }

    #[test]
    fn test_serialize_failure_is_opaque() {
        let mut map = std::collections::HashMap::new();
        map.insert((1, 2), "pair keys are not JSON object keys");

        let value = Value::serialize(&map);
        let Value::Opaque(text) = &value else {
            panic!("expected opaque marker, got {value:?}");
        };
        assert!(text.starts_with("[Unserializable: "), "{text}");
        assert!(text.ends_with(']'), "{text}");
    }

    #[test]
    fn test_display_and_debug_capture() {
        let addr = std::net::Ipv4Addr::new(10, 0, 0, 1);
        assert_eq!(Value::display(&addr), Value::Opaque("10.0.0.1".to_string()));
        assert_eq!(Value::debug(&"quoted"), Value::Opaque("\"quoted\"".to_string()));
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::Null.kind(), "Null");
        assert_eq!(Value::from(1.5).kind(), "Number");
        assert_eq!(Value::from("s").kind(), "Str");
        assert_eq!(Value::from(List::new()).kind(), "List");
        assert_eq!(Value::from(Record::new()).kind(), "Record");
    }

    #[test]
    fn test_breaking_cycles_releases_handles() {
        let record = Record::named("Node");
        record.insert("me", &record);
        assert_eq!(Arc::strong_count(&record.0), 2);

        assert!(record.remove("me").is_some());
        assert_eq!(Arc::strong_count(&record.0), 1);
        assert!(record.remove("me").is_none());

        let list = List::new();
        list.push(&list);
        assert_eq!(Arc::strong_count(&list.0), 2);
        list.clear();
        assert_eq!(Arc::strong_count(&list.0), 1);
    }

    #[test]
    fn test_option_and_unit() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(3u8)), Value::UInt(3));
        assert_eq!(Value::from(()), Value::Null);
    }
}
