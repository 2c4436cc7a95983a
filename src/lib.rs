//! # collex
//!
//! Generic enumerable protocol — lazy, restartable, zero opinions.
//!
//! collex is an enumeration framework. It owns the operation library
//! ([`Enumerable`]), the contracts ([`Source`], [`Pattern`]), the matcher
//! abstraction ([`Matcher`]), the lazy [`Enumerator`], and the error type.
//! It does **not** own container storage or output formatting — callers
//! hand in slices and bounds, and take typed results back.
//!
//! Three container shapes enumerate uniformly: finite sequences, numeric
//! ranges, and key-ordered maps. Every operation is written once against
//! [`Source`] and works on all of them, on its own outputs, and on any
//! source a caller implements.
//!
//! # Quick Start
//!
//! ```rust
//! use collex::{Enumerable, Matcher, Value};
//!
//! let nums: Vec<Value> = (1..=20).map(Value::Int).collect();
//! let seq = collex::seq(&nums);
//!
//! // Reduction with a named operator
//! assert_eq!(seq.inject_op("+").unwrap(), Value::Int(210));
//!
//! // Counting with a block predicate
//! let evens = seq.count_with(|p| p.value.as_int().is_some_and(|n| n % 2 == 0));
//! assert_eq!(evens, 10);
//!
//! // Quantifiers with a matcher argument
//! assert!(seq.any_match(&Matcher::equals(2i64)).unwrap());
//! ```
//!
//! # Lazy enumerators
//!
//! Staging an operation without an action returns an [`Enumerator`]
//! instead of executing — a restartable descriptor that borrows the
//! container and completes whenever an action arrives:
//!
//! ```rust
//! use collex::{Completed, Enumerable, Op, Value};
//!
//! let nums: Vec<Value> = (1..=5).map(Value::Int).collect();
//! let seq = collex::seq(&nums);
//! let staged = seq.stage(Op::Select);
//!
//! // Nothing ran yet. Materialize it, twice — same pairs both times.
//! assert_eq!(staged.to_list(), staged.to_list());
//!
//! // Or complete the deferred select now.
//! let odds = staged.run(|p, _| Value::Bool(p.value.as_int().is_some_and(|n| n % 2 == 1)));
//! if let Completed::Collected(pairs) = odds {
//!     assert_eq!(pairs.len(), 3);
//! }
//! ```
//!
//! # Matchers
//!
//! Quantifier operations take one of four mutually exclusive test kinds —
//! a block, an equality value, a type, or a pattern — or default to
//! truthiness when none is given:
//!
//! ```rust
//! use collex::{Enumerable, Matcher, Substring, TypeTag, Value};
//!
//! let words: Vec<Value> = ["a", "string", "very_long_string"]
//!     .into_iter()
//!     .map(Value::from)
//!     .collect();
//! let seq = collex::seq(&words);
//!
//! assert!(seq.all_match(&Matcher::type_of(TypeTag::Str)).unwrap());
//! assert!(seq.none_match(&Matcher::pattern(Substring::new("d"))).unwrap());
//! ```

#![forbid(unsafe_code)]

mod adapter;
mod enumerator;
mod error;
mod matcher;
mod ops;
mod traits;
mod value;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use adapter::{MapSource, Pairs, RangeSource, SequenceSource};
pub use enumerator::{Completed, Enumerator, Op};
pub use error::CollexError;
pub use matcher::{BlockFn, MatchArg, Matcher, Substring};
pub use ops::Enumerable;
pub use traits::{Pattern, Source, SourceKind};
pub use value::{Key, Pair, TypeTag, Value};

// ── Entry points ──────────────────────────────────────────────────────────────

/// View a slice of values as a sequence-shaped [`Source`].
///
/// # Example
///
/// ```rust
/// use collex::{Enumerable, Value};
///
/// let nums: Vec<Value> = (1..=3).map(Value::Int).collect();
/// assert_eq!(collex::seq(&nums).count(), 3);
/// ```
pub fn seq(values: &[Value]) -> SequenceSource<'_> {
    SequenceSource::new(values)
}

/// View the integers `start..=end` as a range-shaped [`Source`].
///
/// # Example
///
/// ```rust
/// use collex::{Enumerable, Value};
///
/// assert_eq!(collex::range(1, 20).inject_op("+").unwrap(), Value::Int(210));
/// ```
pub fn range(start: i64, end: i64) -> RangeSource {
    RangeSource::inclusive(start, end)
}

/// View the integers `start..end` (upper bound excluded) as a
/// range-shaped [`Source`].
pub fn range_to(start: i64, end: i64) -> RangeSource {
    RangeSource::exclusive(start, end)
}

/// View an ordered entry slice as a map-shaped [`Source`].
///
/// The slice's order is taken as the map's iteration order.
///
/// # Example
///
/// ```rust
/// use collex::{Enumerable, Value};
///
/// let entries = vec![
///     ("a".to_string(), Value::Int(1)),
///     ("b".to_string(), Value::Int(2)),
/// ];
/// let m = collex::map(&entries);
/// assert!(m.any_with(|p| p.key.name() == Some("a")));
/// ```
pub fn map(entries: &[(String, Value)]) -> MapSource<'_> {
    MapSource::new(entries)
}
