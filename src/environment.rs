use std::fmt;
use std::rc::Rc;

use crate::types::{Type, Value};

/// Persistent scope chain. Extending never mutates: each `extend` allocates a
/// new head node whose parent is the previous head, so a handle taken earlier
/// keeps resolving names exactly as it did when it was taken. Cloning the
/// handle is cheap (one `Rc` bump); nodes are reclaimed once no handle can
/// reach them.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    head: Option<Rc<Binding>>,
}

#[derive(Debug)]
struct Binding {
    name: String,
    value: Value,
    var_type: Type,
    parent: Option<Rc<Binding>>,
}

impl Environment {
    pub fn new() -> Environment {
        Environment { head: None }
    }

    /// Linear scan from the head toward the terminal node. The first binding
    /// whose name matches wins, so a newer binding shadows any older one with
    /// the same name, including one recorded with a different type.
    pub fn lookup(&self, name: &str) -> Option<(Value, Type)> {
        let mut current = self.head.as_deref();
        while let Some(binding) = current {
            if binding.name == name {
                return Some((binding.value.clone(), binding.var_type));
            }
            current = binding.parent.as_deref();
        }
        None
    }

    /// O(1) prepend. There is no removal; shadowing is the only form of
    /// update the chain supports.
    pub fn extend(&self, name: &str, value: Value, var_type: Type) -> Environment {
        Environment {
            head: Some(Rc::new(Binding {
                name: name.to_string(),
                value,
                var_type,
                parent: self.head.clone(),
            })),
        }
    }
}

// Debug dump format: one `name: (value, type), ` entry per binding, newest
// first, with the empty environment rendering as empty text.
impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current = self.head.as_deref();
        while let Some(binding) = current {
            write!(
                f,
                "{}: ({}, {}), ",
                binding.name, binding.value, binding.var_type
            )?;
            current = binding.parent.as_deref();
        }
        Ok(())
    }
}
