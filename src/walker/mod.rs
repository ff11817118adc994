use std::sync::Arc;

use crate::functions::Functions;
use crate::value::{Key, Value, WalkError};

mod dispatch;
mod proxy;

pub use proxy::DeferredCall;

/// Ordered keyed collection of heterogeneous elements plus the
/// whole-collection combinators.
///
/// The source is materialized eagerly at construction; mutating it
/// afterwards never affects the walker. `walk`/`each`/`apply` mutate
/// elements in place; `map` and [`Walker::call_each`] build a new
/// walker keyed identically to this one.
#[derive(Debug, Clone)]
pub struct Walker {
    entries: Vec<(Key, Value)>,
    cursor: usize,
    functions: Arc<Functions>,
}

impl Walker {
    /// Build an index-keyed walker from any sequence of values.
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::with_functions(source, Functions::shared())
    }

    /// Like [`Walker::new`], but dispatching against a custom registry.
    pub fn with_functions<I>(source: I, functions: Arc<Functions>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let entries = source
            .into_iter()
            .enumerate()
            .map(|(index, value)| (Key::from(index), value.into()))
            .collect();
        Self {
            entries,
            cursor: 0,
            functions,
        }
    }

    /// Build a walker from (key, value) pairs. A duplicate key
    /// overwrites the earlier value and keeps its position.
    pub fn from_entries<I, K, V>(source: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        let mut walker = Self {
            entries: Vec::new(),
            cursor: 0,
            functions: Functions::shared(),
        };
        for (key, value) in source {
            walker.set(key, value);
        }
        walker
    }

    /// Result collections from the copying combinators are rewrapped
    /// through this single factory hook.
    pub(crate) fn rewrap(&self, entries: Vec<(Key, Value)>) -> Walker {
        Walker {
            entries,
            cursor: 0,
            functions: Arc::clone(&self.functions),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn functions(&self) -> &Arc<Functions> {
        &self.functions
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Insert or overwrite; an existing key keeps its position.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Snapshot of the stored values, in insertion order.
    pub fn to_vec(&self) -> Vec<Value> {
        self.values().cloned().collect()
    }

    // --- cursor (standard iterator protocol; `apply` reads it) ---

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub fn advance(&mut self) {
        if self.cursor < self.entries.len() {
            self.cursor += 1;
        }
    }

    pub fn valid(&self) -> bool {
        self.cursor < self.entries.len()
    }

    pub fn key(&self) -> Option<&Key> {
        self.entries.get(self.cursor).map(|(k, _)| k)
    }

    pub fn current(&self) -> Option<&Value> {
        self.entries.get(self.cursor).map(|(_, v)| v)
    }

    // --- whole-collection combinators ---

    /// Invoke `callback(element, key)` for every entry in insertion
    /// order. The element is passed by mutable reference, so the
    /// stored collection reflects whatever the callback does to it.
    pub fn walk<F>(&mut self, mut callback: F) -> bool
    where
        F: FnMut(&mut Value, &Key),
    {
        for (key, element) in &mut self.entries {
            callback(element, key);
        }
        true
    }

    /// Same element-by-element mutation as [`Walker::walk`], returning
    /// the walker itself so in-place passes chain.
    pub fn each<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(&mut Value, &Key),
    {
        self.walk(callback);
        self
    }

    /// Collect `callback(element)` over every entry into a new walker
    /// keyed identically to this one. The source is unmodified.
    pub fn map<F>(&self, mut callback: F) -> Walker
    where
        F: FnMut(&Value) -> Value,
    {
        let entries = self
            .entries
            .iter()
            .map(|(key, element)| (key.clone(), callback(element)))
            .collect();
        self.rewrap(entries)
    }

    /// Invoke the callback on the element under the cursor, or do
    /// nothing when the cursor is past the end. Mutations persist.
    pub fn apply<R, F>(&mut self, callback: F) -> Option<R>
    where
        F: FnOnce(&mut Value, &Key) -> R,
    {
        let (key, element) = self.entries.get_mut(self.cursor)?;
        Some(callback(element, &*key))
    }

    /// Deferred-call proxy for `name`, bound to this walker with the
    /// element at argument position 0 until narrowed with
    /// [`DeferredCall::at`].
    pub fn op(&mut self, name: impl Into<String>) -> DeferredCall<'_> {
        DeferredCall::new(self, name.into())
    }
}

impl PartialEq for Walker {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl FromIterator<Value> for Walker {
    fn from_iter<I: IntoIterator<Item = Value>>(source: I) -> Self {
        Walker::new(source)
    }
}

impl FromIterator<(Key, Value)> for Walker {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(source: I) -> Self {
        Walker::from_entries(source)
    }
}

impl IntoIterator for Walker {
    type Item = (Key, Value);
    type IntoIter = std::vec::IntoIter<(Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl TryFrom<Value> for Walker {
    type Error = WalkError;

    /// Only array values are enumerable; anything else is invalid
    /// input.
    fn try_from(source: Value) -> Result<Self, WalkError> {
        match source {
            Value::Array(items) => Ok(Walker::new(items)),
            other => Err(WalkError::invalid_input(format!(
                "cannot build a walker from {}",
                other.type_name()
            ))),
        }
    }
}
