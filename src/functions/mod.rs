use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::value::{Value, WalkError};

mod collections;
mod regex;
mod sprintf;
mod strings;

pub(crate) use sprintf::format_sprintf;

/// A registered free function or closure.
///
/// Callees receive the fully spliced argument list mutably; writing
/// through the slot holding the element is the write-back channel that
/// makes positional dispatch mutate the stored collection.
pub type NativeFn = dyn Fn(&mut [Value]) -> Result<Value, WalkError> + Send + Sync;

/// Name-keyed registry of free functions available to positional
/// dispatch. Lookup happens lazily, per element, at invocation time.
#[derive(Default)]
pub struct Functions {
    table: HashMap<String, Arc<NativeFn>>,
}

impl Functions {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Registry preloaded with the builtin string, collection, regex
    /// and formatting functions.
    pub fn standard() -> Self {
        let mut functions = Self::new();
        strings::register(&mut functions);
        collections::register(&mut functions);
        regex::register(&mut functions);
        functions
    }

    /// Insert or replace a callable. Closures capture freely.
    pub fn register<F>(&mut self, name: impl Into<String>, callable: F)
    where
        F: Fn(&mut [Value]) -> Result<Value, WalkError> + Send + Sync + 'static,
    {
        self.table.insert(name.into(), Arc::new(callable));
    }

    pub fn has(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub(crate) fn resolve(&self, name: &str) -> Option<Arc<NativeFn>> {
        self.table.get(name).cloned()
    }

    /// Process-wide standard registry shared by plain constructors.
    pub fn shared() -> Arc<Functions> {
        static STANDARD: OnceLock<Arc<Functions>> = OnceLock::new();
        Arc::clone(STANDARD.get_or_init(|| Arc::new(Functions::standard())))
    }
}

impl fmt::Debug for Functions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Functions")
            .field("registered", &self.table.len())
            .finish()
    }
}
