use thiserror::Error;

use crate::value::TypeTag;

#[derive(Error, Debug)]
pub enum CollexError {
    // Matcher construction
    #[error("ambiguous matcher")]
    AmbiguousMatcher,

    // Matcher / operator evaluation
    #[error("type mismatch")]
    TypeMismatch { expected: TypeTag, found: TypeTag },

    // Reduction
    #[error("empty source")]
    EmptySource,

    #[error("unsupported operator")]
    UnsupportedOperator(String),
}

impl CollexError {
    /// The type tags involved, if this is a type error.
    /// Callers use this to report "expected X, found Y" without pattern
    /// matching on variants.
    pub fn type_tags(&self) -> Option<(TypeTag, TypeTag)> {
        match self {
            Self::TypeMismatch { expected, found } => Some((*expected, *found)),
            _ => None,
        }
    }

    /// Whether this error is raised while building a matcher, before any
    /// traversal runs.
    ///
    /// Evaluation errors (type mismatch, unsupported operator, empty
    /// source) surface mid-operation instead. All four are fail-fast
    /// programming errors; none has a recovery flow.
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::AmbiguousMatcher)
    }
}
