//! Elementwise dispatch over an ordered keyed collection.
//!
//! A [`Walker`] owns a collection of heterogeneous [`Value`]s and
//! applies one operation across every element: a closure (`walk`,
//! `each`, `map`, `apply`) or a named callable (`call_each` and the
//! [`DeferredCall`] proxy). Object elements receive the name as a
//! method call; plain values are spliced into a registered free
//! function at a caller-chosen argument position.

mod functions;
mod value;
mod walker;

pub use functions::{Functions, NativeFn};
pub use value::{ErrorCode, Key, Receiver, Value, WalkError};
pub use walker::{DeferredCall, Walker};
