//! Tree walker shared by extraction, completeness checking and translation.
//!
//! A single traversal skeleton over `serde_json::Value` decides, key by key,
//! which strings are translatable and hands them to a [`FieldVisitor`]. A
//! visitor that only records (collect mode) returns `None` everywhere and the
//! walk allocates nothing but paths; a visitor that rewrites strings
//! (transform mode) gets back a rebuilt document. Containers are only rebuilt
//! along branches where something actually changed.

use crate::classifier::{classify, ARCHETYPES_KEY};
use serde_json::{Map, Value};

/// Keys holding arrays of free-text strings (rules text, conditions, content
/// pack names). They are not translatable fields, but transform-mode visitors
/// may still rewrite their elements through [`FieldVisitor::free_text`].
pub const FREE_TEXT_LIST_KEYS: &[&str] = &["effects", "conditions", "packs"];

/// Path of `key` inside the object at `parent` (`a.b`, or `b` at the root).
pub fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Path of element `index` inside the array at `parent` (`a[3]`).
pub fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

/// Callbacks invoked for every string the walker considers.
///
/// Each method returns `Some(replacement)` to rewrite the string or `None` to
/// leave it untouched. Strings that are empty after trimming are never passed
/// to a visitor.
pub trait FieldVisitor {
    /// A string held by a translatable key, or a string element of an array
    /// held by a translatable key (other than `archetypes`).
    fn text(&mut self, path: &str, key: &str, text: &str) -> Option<String>;

    /// A string element of the `archetypes` category-label array.
    fn label(&mut self, path: &str, key: &str, text: &str) -> Option<String> {
        self.text(path, key, text)
    }

    /// A string element of an array under one of [`FREE_TEXT_LIST_KEYS`].
    fn free_text(&mut self, _path: &str, _key: &str, _text: &str) -> Option<String> {
        None
    }
}

/// Which visitor callback handles a string element.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Text,
    Label,
    FreeText,
}

impl Slot {
    fn visit<V: FieldVisitor + ?Sized>(
        self,
        visitor: &mut V,
        path: &str,
        key: &str,
        text: &str,
    ) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        match self {
            Slot::Text => visitor.text(path, key, text),
            Slot::Label => visitor.label(path, key, text),
            Slot::FreeText => visitor.free_text(path, key, text),
        }
    }
}

/// Walk `value` from the root path `""`.
///
/// Returns `None` when the visitor changed nothing, otherwise the rebuilt
/// document.
pub fn walk<V: FieldVisitor + ?Sized>(value: &Value, visitor: &mut V) -> Option<Value> {
    walk_value(value, "", visitor)
}

fn walk_value<V: FieldVisitor + ?Sized>(
    value: &Value,
    path: &str,
    visitor: &mut V,
) -> Option<Value> {
    match value {
        Value::Object(map) => walk_object(map, path, visitor).map(Value::Object),
        Value::Array(items) => walk_array(items, path, visitor).map(Value::Array),
        _ => None,
    }
}

fn walk_object<V: FieldVisitor + ?Sized>(
    map: &Map<String, Value>,
    path: &str,
    visitor: &mut V,
) -> Option<Map<String, Value>> {
    let mut changes = Vec::new();

    for (key, value) in map {
        let key_path = child_path(path, key);
        if let Some(new_value) = walk_field(key, value, &key_path, visitor) {
            changes.push((key.clone(), new_value));
        }
    }

    if changes.is_empty() {
        return None;
    }

    // Existing keys keep their position on insert
    let mut rebuilt = map.clone();
    for (key, new_value) in changes {
        rebuilt.insert(key, new_value);
    }
    Some(rebuilt)
}

fn walk_array<V: FieldVisitor + ?Sized>(
    items: &[Value],
    path: &str,
    visitor: &mut V,
) -> Option<Vec<Value>> {
    let mut changes = Vec::new();

    for (index, item) in items.iter().enumerate() {
        if let Some(new_item) = walk_value(item, &index_path(path, index), visitor) {
            changes.push((index, new_item));
        }
    }

    apply_element_changes(items, changes)
}

fn walk_field<V: FieldVisitor + ?Sized>(
    key: &str,
    value: &Value,
    path: &str,
    visitor: &mut V,
) -> Option<Value> {
    if classify(key).translatable {
        let slot = if key == ARCHETYPES_KEY {
            Slot::Label
        } else {
            Slot::Text
        };
        return match value {
            Value::String(text) => slot.visit(visitor, path, key, text).map(Value::String),
            Value::Array(items) => {
                walk_string_elements(items, key, path, slot, false, visitor).map(Value::Array)
            }
            // Translatable keys holding objects or numbers are left alone
            _ => None,
        };
    }

    match value {
        Value::Array(items) if FREE_TEXT_LIST_KEYS.contains(&key) => {
            walk_string_elements(items, key, path, Slot::FreeText, true, visitor)
                .map(Value::Array)
        }
        _ => walk_value(value, path, visitor),
    }
}

/// Visit the string elements of an array held by `key`. Containers inside the
/// array are walked only when `recurse` is set.
fn walk_string_elements<V: FieldVisitor + ?Sized>(
    items: &[Value],
    key: &str,
    path: &str,
    slot: Slot,
    recurse: bool,
    visitor: &mut V,
) -> Option<Vec<Value>> {
    let mut changes = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let item_path = index_path(path, index);
        let changed = match item {
            Value::String(text) => slot
                .visit(visitor, &item_path, key, text)
                .map(Value::String),
            Value::Object(_) | Value::Array(_) if recurse => {
                walk_value(item, &item_path, visitor)
            }
            _ => None,
        };
        if let Some(new_item) = changed {
            changes.push((index, new_item));
        }
    }

    apply_element_changes(items, changes)
}

fn apply_element_changes(items: &[Value], changes: Vec<(usize, Value)>) -> Option<Vec<Value>> {
    if changes.is_empty() {
        return None;
    }

    let mut rebuilt = items.to_vec();
    for (index, new_item) in changes {
        rebuilt[index] = new_item;
    }
    Some(rebuilt)
}
