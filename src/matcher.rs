use crate::error::CollexError;
use crate::traits::Pattern;
use crate::value::{Pair, TypeTag, Value};

/// Boxed block predicate, as stored by [`Matcher::Block`].
pub type BlockFn = Box<dyn Fn(&Pair) -> bool>;

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

/// A single test to run against each traversed pair.
///
/// Exactly one kind of test is active per matcher — the quantifier and
/// counting operations (`all`, `any`, `none`, `count`) accept any of the
/// four explicit kinds, or fall back to [`Matcher::Identity`] when the
/// caller supplies nothing.
///
/// Construct one directly with [`Matcher::block`], [`Matcher::equals`],
/// [`Matcher::type_of`], or [`Matcher::pattern`], or from an optional
/// argument/block pair with [`Matcher::from_parts`], which enforces the
/// argument-XOR-block rule.
pub enum Matcher {
    /// An explicit predicate over the full pair.
    Block(BlockFn),

    /// Structural equality against one expected value.
    Equals(Value),

    /// Runtime type membership.
    TypeOf(TypeTag),

    /// Delegated pattern match; only string values qualify.
    Pattern(Box<dyn Pattern>),

    /// Truthiness of the value itself. The default when nothing is supplied.
    Identity,
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Matcher::Block(_) => f.write_str("Block(..)"),
            Matcher::Equals(v) => f.debug_tuple("Equals").field(v).finish(),
            Matcher::TypeOf(t) => f.debug_tuple("TypeOf").field(t).finish(),
            Matcher::Pattern(_) => f.write_str("Pattern(..)"),
            Matcher::Identity => f.write_str("Identity"),
        }
    }
}

impl Matcher {
    /// Matcher from an explicit block predicate.
    pub fn block(f: impl Fn(&Pair) -> bool + 'static) -> Self {
        Matcher::Block(Box::new(f))
    }

    /// Matcher testing equality against `expected`.
    pub fn equals(expected: impl Into<Value>) -> Self {
        Matcher::Equals(expected.into())
    }

    /// Matcher testing runtime type membership.
    pub fn type_of(tag: TypeTag) -> Self {
        Matcher::TypeOf(tag)
    }

    /// Matcher delegating to a [`Pattern`] capability.
    pub fn pattern(p: impl Pattern + 'static) -> Self {
        Matcher::Pattern(Box::new(p))
    }

    /// Build a matcher from the optional argument and optional block a
    /// caller handed to a quantifier operation.
    ///
    /// Supplying both is ambiguous and fails construction; supplying
    /// neither falls back to [`Matcher::Identity`].
    ///
    /// # Errors
    ///
    /// [`CollexError::AmbiguousMatcher`] if `arg` and `block` are both set.
    pub fn from_parts(arg: Option<MatchArg>, block: Option<BlockFn>) -> Result<Self, CollexError> {
        match (arg, block) {
            (Some(_), Some(_)) => Err(CollexError::AmbiguousMatcher),
            (Some(arg), None) => Ok(arg.into_matcher()),
            (None, Some(f)) => Ok(Matcher::Block(f)),
            (None, None) => Ok(Matcher::Identity),
        }
    }

    /// Evaluate this matcher against one pair.
    ///
    /// # Errors
    ///
    /// [`CollexError::TypeMismatch`] if a pattern matcher meets a
    /// non-string value. The other kinds cannot fail.
    pub fn test(&self, pair: &Pair) -> Result<bool, CollexError> {
        match self {
            Matcher::Block(f) => Ok(f(pair)),
            Matcher::Equals(expected) => Ok(pair.value == *expected),
            Matcher::TypeOf(tag) => Ok(pair.value.type_tag() == *tag),
            Matcher::Pattern(p) => match &pair.value {
                Value::Str(s) => Ok(p.matches(s)),
                other => Err(CollexError::TypeMismatch {
                    expected: TypeTag::Str,
                    found: other.type_tag(),
                }),
            },
            Matcher::Identity => Ok(pair.value.is_truthy()),
        }
    }
}

// ---------------------------------------------------------------------------
// MatchArg
// ---------------------------------------------------------------------------

/// The non-block argument a caller can pass to a quantifier operation.
///
/// This is the "argument" half of the argument-XOR-block rule enforced by
/// [`Matcher::from_parts`].
pub enum MatchArg {
    /// Match elements equal to this value.
    Equals(Value),

    /// Match elements of this runtime type.
    TypeOf(TypeTag),

    /// Match string elements against this pattern.
    Pattern(Box<dyn Pattern>),
}

impl MatchArg {
    fn into_matcher(self) -> Matcher {
        match self {
            MatchArg::Equals(v) => Matcher::Equals(v),
            MatchArg::TypeOf(t) => Matcher::TypeOf(t),
            MatchArg::Pattern(p) => Matcher::Pattern(p),
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in patterns (collex ships this one as a convenience)
// ---------------------------------------------------------------------------

/// Matches strings containing `pattern` (case-insensitive).
pub struct Substring {
    pattern: String,
}

impl Substring {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into().to_lowercase(),
        }
    }
}

impl Pattern for Substring {
    fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.pattern)
    }
}
