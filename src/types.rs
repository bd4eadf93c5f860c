use std::fmt;

/// Runtime type tags. A closed set with no parameters and no subtyping;
/// two tags are compatible for an operator only when they are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Unit,
    Integer,
    FloatingPoint,
    String,
    Boolean,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unit => "Unit",
            Self::Integer => "Integer",
            Self::FloatingPoint => "FloatingPoint",
            Self::String => "String",
            Self::Boolean => "Boolean",
        };
        write!(f, "{name}")
    }
}

/// Runtime values. Immediate scalars only; a value never carries its tag
/// outside the `(value, type)` pairs threaded by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Unit,
    Integer(i64),
    FloatingPoint(f64),
    String(String),
    Boolean(bool),
}

impl Value {
    pub fn type_tag(&self) -> Type {
        match self {
            Self::Unit => Type::Unit,
            Self::Integer(_) => Type::Integer,
            Self::FloatingPoint(_) => Type::FloatingPoint,
            Self::String(_) => Type::String,
            Self::Boolean(_) => Type::Boolean,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => write!(f, "Unit"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::FloatingPoint(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
        }
    }
}
