use std::sync::Arc;

use super::Walker;
use crate::value::{SharedReceiver, Value, WalkError};

/// Per-element dispatch outcome: an object element receives the named
/// operation as a method, everything else is passed positionally to a
/// registered free function.
enum Dispatch {
    Receiver(SharedReceiver),
    Positional,
}

fn classify(element: &Value) -> Dispatch {
    match element {
        Value::Object(object) => Dispatch::Receiver(Arc::clone(object)),
        _ => Dispatch::Positional,
    }
}

/// Argument list for positional dispatch: caller args below the offset
/// (`Nil`-padded where none were supplied), the element at the offset,
/// the remaining caller args after it.
fn splice_args(element: &Value, args: &[Value], offset: usize) -> Vec<Value> {
    let mut argv = Vec::with_capacity((offset + 1).max(args.len() + 1));
    for i in 0..offset {
        argv.push(args.get(i).cloned().unwrap_or(Value::Nil));
    }
    argv.push(element.clone());
    if args.len() > offset {
        argv.extend(args[offset..].iter().cloned());
    }
    argv
}

impl Walker {
    /// Apply the named operation to every element, collecting per-key
    /// results into a new walker.
    ///
    /// Object elements get `element.name(args)` verbatim. Other
    /// elements are spliced into a free-function call at `offset`;
    /// after the call the slot holding the element is written back, so
    /// callees that mutate their subject mutate the stored collection.
    /// Name resolution happens inside the loop: an empty collection
    /// never fails, even for an unknown name. The first failing
    /// element aborts the whole operation.
    pub fn call_each(
        &mut self,
        name: &str,
        args: &[Value],
        offset: usize,
    ) -> Result<Walker, WalkError> {
        let functions = Arc::clone(&self.functions);
        let mut results = Vec::with_capacity(self.entries.len());
        for (key, element) in &mut self.entries {
            let result = match classify(element) {
                Dispatch::Receiver(object) => object.lock().unwrap().call(name, args)?,
                Dispatch::Positional => {
                    let callable = functions
                        .resolve(name)
                        .ok_or_else(|| WalkError::unresolvable(name))?;
                    let mut argv = splice_args(element, args, offset);
                    let result = callable(&mut argv)?;
                    *element = argv.swap_remove(offset);
                    result
                }
            };
            results.push((key.clone(), result));
        }
        Ok(self.rewrap(results))
    }
}
