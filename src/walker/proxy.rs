use super::Walker;
use crate::value::{Value, WalkError};

/// Deferred invocation of a named operation across a walker.
///
/// Captures the operation name and an argument offset until the caller
/// supplies arguments. [`DeferredCall::at`] narrows to a different
/// offset by producing a new proxy; it never mutates one already
/// handed out. The proxy borrows its walker exclusively, so the
/// collection cannot change underneath it before it is invoked.
#[derive(Debug)]
pub struct DeferredCall<'w> {
    walker: &'w mut Walker,
    name: String,
    offset: usize,
}

impl<'w> DeferredCall<'w> {
    pub(super) fn new(walker: &'w mut Walker, name: String) -> Self {
        Self {
            walker,
            name,
            offset: 0,
        }
    }

    /// New proxy for the same operation with the element injected at
    /// `offset` instead. Any offset is accepted; positions beyond the
    /// supplied arguments only lengthen the padding.
    pub fn at(self, offset: usize) -> Self {
        Self { offset, ..self }
    }

    /// Run the captured operation across every element.
    pub fn invoke(self, args: &[Value]) -> Result<Walker, WalkError> {
        self.walker.call_each(&self.name, args, self.offset)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}
