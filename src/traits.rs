use crate::value::Pair;

/// Which of the three container shapes a source presents.
///
/// Operations use this to decide output shape: `select` over a map keeps
/// map keys and map kind, while over a sequence or range it reindexes
/// into a fresh sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A finite, positionally indexed sequence.
    Sequence,

    /// A numeric range stepped from its lower bound.
    Range,

    /// A key-ordered associative map.
    Map,
}

/// A uniform traversal view over a container.
///
/// Implement this to make any container shape enumerable — the operation
/// library ([`Enumerable`](crate::Enumerable)) is written once against
/// this contract and never touches concrete storage.
///
/// # Object Safety
///
/// `Source` is object-safe. Enumerators store their adapter as
/// `&dyn Source`, so `pairs()` returns `Box<dyn Iterator>` rather than
/// `impl Iterator` (which would not be object-safe).
///
/// # Restartability
///
/// `pairs()` must start a fresh traversal on every call, yielding the
/// same pairs in the same order as long as the container is unchanged.
/// Adapters hold no cursor state of their own; that is what makes
/// enumerators restartable by contract.
///
/// # Mutation
///
/// Traversal never mutates the underlying container, and each yielded
/// [`Pair`] is an owned snapshot. Mutating the container while a
/// traversal is in flight is undefined by this contract — treat the
/// container as borrowed for the traversal's lifetime.
///
/// # Example
///
/// ```rust
/// use collex::{Pair, Source, SourceKind, Value};
///
/// /// Words split out of a sentence, presented as a sequence.
/// struct WordSource<'a>(&'a str);
///
/// impl Source for WordSource<'_> {
///     fn pairs(&self) -> Box<dyn Iterator<Item = Pair> + '_> {
///         Box::new(
///             self.0
///                 .split_whitespace()
///                 .enumerate()
///                 .map(|(i, w)| Pair::indexed(i, Value::from(w))),
///         )
///     }
///
///     fn size(&self) -> Option<usize> {
///         Some(self.0.split_whitespace().count())
///     }
///
///     fn kind(&self) -> SourceKind {
///         SourceKind::Sequence
///     }
/// }
/// ```
pub trait Source {
    /// Start a fresh traversal, yielding each element as a [`Pair`].
    fn pairs(&self) -> Box<dyn Iterator<Item = Pair> + '_>;

    /// Number of pairs a full traversal yields, or `None` if unknown.
    fn size(&self) -> Option<usize>;

    /// Whether a traversal would yield nothing.
    fn is_empty(&self) -> bool {
        match self.size() {
            Some(n) => n == 0,
            None => self.pairs().next().is_none(),
        }
    }

    /// Which container shape this source presents.
    fn kind(&self) -> SourceKind;
}

/// A pattern that string elements can be tested against.
///
/// The pattern matcher ([`Matcher::Pattern`](crate::Matcher::Pattern))
/// delegates entirely to this capability — the crate ships no pattern
/// language of its own beyond the [`Substring`](crate::Substring)
/// convenience. Inject a regex-backed implementation, a glob, or anything
/// else that can answer "does this text match".
///
/// Only string-like values can be pattern-matched; applying a pattern to
/// any other value fails with
/// [`CollexError::TypeMismatch`](crate::CollexError::TypeMismatch)
/// rather than coercing.
///
/// # Example
///
/// ```rust
/// use collex::Pattern;
///
/// struct Prefix(String);
///
/// impl Pattern for Prefix {
///     fn matches(&self, text: &str) -> bool {
///         text.starts_with(&self.0)
///     }
/// }
/// ```
pub trait Pattern {
    /// Returns `true` if `text` matches this pattern.
    fn matches(&self, text: &str) -> bool;
}
