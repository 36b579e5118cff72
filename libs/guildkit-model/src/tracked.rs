//! Change tracking for update payloads.
//!
//! A [`Tracked`] field distinguishes "never touched" from "explicitly set to
//! X". An [`UpdatePayload`] lists its tracked fields under their wire names and
//! derives a [`SparseMap`] holding only the touched ones, so a request never
//! resets fields the caller did not mean to change.
//!
//! ```
//! use guildkit_model::payloads::VoiceChannelProperties;
//! use guildkit_model::tracked::UpdatePayload;
//!
//! let mut props = VoiceChannelProperties::default();
//! props.user_limit.set(5);
//!
//! let body = props.to_sparse_map().into_value();
//! assert_eq!(body, serde_json::json!({ "user_limit": 5 }));
//! ```

use serde_json::{Map, Value};

use crate::wire::ToWire;

/// A value plus a flag recording whether it was ever explicitly written.
///
/// `touched` starts `false` and flips to `true` on the first write; it never
/// reverts for the lifetime of the instance. Reading never changes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracked<T> {
    value: T,
    touched: bool,
}

impl<T> Tracked<T> {
    /// Creates an already touched field.
    #[must_use]
    pub fn touched(value: T) -> Self {
        Self {
            value,
            touched: true,
        }
    }

    /// Current value, or `T::default()` when never set.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.touched = true;
    }

    /// Edits the value in place and marks the field touched.
    pub fn update(&mut self, edit: impl FnOnce(&mut T)) {
        edit(&mut self.value);
        self.touched = true;
    }

    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// The value if the field was touched.
    #[must_use]
    pub fn as_touched(&self) -> Option<&T> {
        self.touched.then_some(&self.value)
    }

    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<T> for Tracked<T> {
    fn from(value: T) -> Self {
        Self::touched(value)
    }
}

/// Sparse request body: wire name to encoded value, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseMap(Map<String, Value>);

impl SparseMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits `name -> field.to_wire()` if and only if the field was touched.
    pub fn put<T: ToWire>(&mut self, name: &'static str, field: &Tracked<T>) -> &mut Self {
        if let Some(value) = field.as_touched() {
            self.0.insert(name.to_owned(), value.to_wire());
        }
        self
    }

    /// Emits every touched field of `base` (used by composed payloads).
    pub fn extend_from<P: UpdatePayload + ?Sized>(&mut self, base: &P) -> &mut Self {
        base.write_touched(self);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// The body as a JSON object (`{}` when nothing was touched).
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// An object whose fields are [`Tracked`] and which serializes to a sparse
/// body.
pub trait UpdatePayload {
    /// Writes every touched field, in declaration order.
    fn write_touched(&self, out: &mut SparseMap);

    fn to_sparse_map(&self) -> SparseMap {
        let mut out = SparseMap::new();
        self.write_touched(&mut out);
        out
    }

    /// Wire names of the touched fields, in declaration order.
    fn touched_fields(&self) -> Vec<String> {
        self.to_sparse_map().keys().map(str::to_owned).collect()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Default)]
    struct Sample {
        count: Tracked<u32>,
        label: Tracked<String>,
        flags: Tracked<Vec<u8>>,
    }

    impl UpdatePayload for Sample {
        fn write_touched(&self, out: &mut SparseMap) {
            out.put("count", &self.count)
                .put("label", &self.label)
                .put("flags", &self.flags);
        }
    }

    #[test]
    fn fresh_field_is_untouched_and_default() {
        let field: Tracked<u32> = Tracked::default();
        assert!(!field.is_touched());
        assert_eq!(*field.get(), 0);
        assert_eq!(field.as_touched(), None);
    }

    #[test]
    fn reading_does_not_touch() {
        let field: Tracked<String> = Tracked::default();
        let _ = field.get();
        let _ = field.get();
        assert!(!field.is_touched());
    }

    #[test]
    fn set_marks_touched_and_stays_touched() {
        let mut field = Tracked::default();
        field.set(10u32);
        assert!(field.is_touched());
        field.set(0);
        assert!(field.is_touched());
        assert_eq!(*field.get(), 0);
    }

    #[test]
    fn update_edits_in_place() {
        let mut field: Tracked<Vec<u8>> = Tracked::default();
        field.update(|v| v.push(3));
        assert!(field.is_touched());
        assert_eq!(field.get(), &vec![3]);
    }

    #[test]
    fn empty_payload_yields_empty_map() {
        let sample = Sample::default();
        let map = sample.to_sparse_map();
        assert!(map.is_empty());
        assert_eq!(map.into_value(), json!({}));
    }

    #[test]
    fn zero_value_is_still_emitted() {
        let mut sample = Sample::default();
        sample.count.set(0);
        sample.label.set(String::new());

        assert_eq!(
            sample.to_sparse_map().into_value(),
            json!({ "count": 0, "label": "" })
        );
    }

    #[test]
    fn keys_follow_declaration_order() {
        let mut sample = Sample::default();
        sample.flags.set(vec![1]);
        sample.count.set(1);

        assert_eq!(sample.touched_fields(), vec!["count", "flags"]);
    }
}
