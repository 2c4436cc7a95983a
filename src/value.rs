/// A single element held by a container and produced during traversal.
///
/// Intentionally dynamic — matchers need runtime type identity
/// ([`Matcher::TypeOf`](crate::Matcher::TypeOf)) and truthiness
/// ([`Matcher::Identity`](crate::Matcher::Identity)), so elements carry
/// their own tag rather than being a generic parameter.
///
/// Equality is structural. Truthiness follows the convention that only
/// [`Value::Nil`] and `Value::Bool(false)` are falsy — `Int(0)` and the
/// empty string are truthy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The absent value.
    Nil,

    /// A boolean.
    Bool(bool),

    /// A signed integer.
    Int(i64),

    /// An owned string.
    Str(String),
}

impl Value {
    /// The runtime type of this value.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Nil => TypeTag::Nil,
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
            Value::Str(_) => TypeTag::Str,
        }
    }

    /// `false` only for `Nil` and `Bool(false)`.
    ///
    /// Zero and the empty string are truthy — matchers that default to
    /// [`Matcher::Identity`](crate::Matcher::Identity) rely on this.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// The integer payload, if this value is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if this value is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// The closed set of runtime types a [`Value`] can have.
///
/// This is the type-descriptor side of [`Matcher::TypeOf`](crate::Matcher::TypeOf):
/// a closed tag enumeration, compared by identity, with no reflection involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Nil,
    Bool,
    Int,
    Str,
}

/// The key half of a [`Pair`].
///
/// Sequences and ranges key their elements by position; maps key them by
/// name. Keeping the two cases distinct lets block predicates tell the
/// shapes apart without the source threading extra context through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// 0-based position within a sequence or range.
    Index(usize),

    /// Map key, in the map's own iteration order.
    Name(String),
}

impl Key {
    /// The position, if this key is positional.
    pub fn index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            _ => None,
        }
    }

    /// The map key, if this key is named.
    pub fn name(&self) -> Option<&str> {
        match self {
            Key::Name(s) => Some(s),
            _ => None,
        }
    }
}

/// The unit a [`Source`](crate::Source) produces during traversal.
///
/// A `Pair` is an owned snapshot of one element — cloned out of the
/// container, never a live reference into it — so traversal cannot mutate
/// or consume the underlying container.
///
/// Block predicates and actions always receive a full `&Pair` and project
/// to `value` or `(key, value)` themselves. There is no dual calling
/// convention to route: a map-shaped source simply produces pairs whose
/// keys are meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// Position or map key of this element.
    pub key: Key,

    /// The element itself.
    pub value: Value,
}

impl Pair {
    /// Build a pair from its parts.
    pub fn new(key: Key, value: Value) -> Self {
        Self { key, value }
    }

    /// Shorthand for a positionally keyed pair.
    pub fn indexed(index: usize, value: Value) -> Self {
        Self {
            key: Key::Index(index),
            value,
        }
    }

    /// Shorthand for a name-keyed pair.
    pub fn named(name: impl Into<String>, value: Value) -> Self {
        Self {
            key: Key::Name(name.into()),
            value,
        }
    }
}
