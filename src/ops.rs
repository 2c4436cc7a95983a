use crate::adapter::Pairs;
use crate::enumerator::{Enumerator, Op};
use crate::error::CollexError;
use crate::matcher::Matcher;
use crate::traits::{Source, SourceKind};
use crate::value::{Key, Pair, TypeTag, Value};

// ---------------------------------------------------------------------------
// Enumerable
// ---------------------------------------------------------------------------

/// The operation library, defined once over any [`Source`].
///
/// Blanket-implemented for every source — the three shape adapters,
/// [`Pairs`] results, [`Enumerator`]s, and any caller-defined source all
/// carry the full set. Nothing here is overridable; implement [`Source`]
/// and the operations follow.
///
/// Eager forms take their action directly (`each`, `select`, `map`,
/// `inject`, ...). The lazy form is [`stage`](Enumerable::stage), which
/// returns an [`Enumerator`] holding the operation for later.
///
/// Quantifiers come in two flavors: `*_with` takes a plain block
/// predicate, `*_match` takes a [`Matcher`] and is fallible because
/// pattern matchers can hit non-string values mid-traversal.
pub trait Enumerable: Source {
    // ── Staging ───────────────────────────────────────────────────────────

    /// Stage `op` over this source, deferring execution.
    ///
    /// This is the no-action form of every traversal operation: the
    /// returned [`Enumerator`] is restartable, borrows this source, and
    /// is itself enumerable.
    fn stage(&self, op: Op) -> Enumerator<'_>
    where
        Self: Sized,
    {
        Enumerator::stage(self, op)
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Invoke `action` on every pair, in order, exactly once each.
    ///
    /// Returns `self` unchanged so side-effecting traversals chain.
    fn each<F>(&self, mut action: F) -> &Self
    where
        F: FnMut(&Pair),
    {
        for pair in self.pairs() {
            action(&pair);
        }
        self
    }

    /// Invoke `action` on every pair together with its 0-based traversal
    /// index. Returns `self` unchanged.
    fn each_with_index<F>(&self, mut action: F) -> &Self
    where
        F: FnMut(&Pair, usize),
    {
        for (i, pair) in self.pairs().enumerate() {
            action(&pair, i);
        }
        self
    }

    // ── Transformation ────────────────────────────────────────────────────

    /// Keep the pairs `predicate` accepts, preserving order.
    ///
    /// Map-shaped sources yield a map-shaped result with keys intact;
    /// sequences and ranges yield a fresh sequence reindexed from zero.
    /// Reapplying the same predicate to the result is a no-op.
    fn select<F>(&self, mut predicate: F) -> Pairs
    where
        F: FnMut(&Pair) -> bool,
    {
        let kept = self.pairs().filter(|p| predicate(p)).collect();
        Pairs::from_selection(self.kind(), kept)
    }

    /// Alias for [`select`](Enumerable::select).
    fn filter<F>(&self, predicate: F) -> Pairs
    where
        F: FnMut(&Pair) -> bool,
    {
        self.select(predicate)
    }

    /// Apply `action` to every pair and collect the results into a fresh
    /// sequence of the same length, in order.
    fn map<F>(&self, mut action: F) -> Pairs
    where
        F: FnMut(&Pair) -> Value,
    {
        let items = self
            .pairs()
            .enumerate()
            .map(|(i, pair)| Pair {
                key: Key::Index(i),
                value: action(&pair),
            })
            .collect();
        Pairs::new(SourceKind::Sequence, items)
    }

    // ── Counting ──────────────────────────────────────────────────────────

    /// Total number of pairs.
    fn count(&self) -> usize {
        self.pairs().count()
    }

    /// Number of pairs `predicate` accepts.
    fn count_with<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&Pair) -> bool,
    {
        self.pairs().filter(|p| predicate(p)).count()
    }

    /// Number of pairs `matcher` accepts.
    ///
    /// # Errors
    ///
    /// Propagates the first matcher failure — a pattern matcher meeting a
    /// non-string value stops the count there.
    fn count_matching(&self, matcher: &Matcher) -> Result<usize, CollexError> {
        let mut n = 0;
        for pair in self.pairs() {
            if matcher.test(&pair)? {
                n += 1;
            }
        }
        Ok(n)
    }

    // ── Quantifiers ───────────────────────────────────────────────────────

    /// `true` iff every pair satisfies `predicate`. Vacuously true when
    /// empty; stops at the first failure.
    fn all_with<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Pair) -> bool,
    {
        self.pairs().all(|p| predicate(&p))
    }

    /// `true` iff at least one pair satisfies `predicate`. Vacuously
    /// false when empty; stops at the first success.
    fn any_with<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Pair) -> bool,
    {
        self.pairs().any(|p| predicate(&p))
    }

    /// `true` iff no pair satisfies `predicate`. Stops at the first
    /// success (returning false).
    fn none_with<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Pair) -> bool,
    {
        !self.any_with(predicate)
    }

    /// `true` iff every pair satisfies `matcher`. Vacuously true when
    /// empty; stops at the first failure, so pairs past the deciding one
    /// are never tested.
    fn all_match(&self, matcher: &Matcher) -> Result<bool, CollexError> {
        for pair in self.pairs() {
            if !matcher.test(&pair)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// `true` iff at least one pair satisfies `matcher`. Vacuously false
    /// when empty; stops at the first success.
    fn any_match(&self, matcher: &Matcher) -> Result<bool, CollexError> {
        for pair in self.pairs() {
            if matcher.test(&pair)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Negation of [`any_match`](Enumerable::any_match) over the same
    /// matcher, with the same short-circuit.
    fn none_match(&self, matcher: &Matcher) -> Result<bool, CollexError> {
        Ok(!self.any_match(matcher)?)
    }

    // ── Reduction ─────────────────────────────────────────────────────────

    /// Fold values left-to-right, seeding from the first value.
    ///
    /// # Errors
    ///
    /// [`CollexError::EmptySource`] when there is no first value to seed
    /// from.
    fn inject<F>(&self, mut step: F) -> Result<Value, CollexError>
    where
        F: FnMut(Value, &Pair) -> Value,
    {
        let mut pairs = self.pairs();
        let first = pairs.next().ok_or(CollexError::EmptySource)?;
        let mut acc = first.value;
        for pair in pairs {
            acc = step(acc, &pair);
        }
        Ok(acc)
    }

    /// Fold values left-to-right from an explicit seed.
    ///
    /// An empty source yields the seed back.
    fn inject_seeded<F>(&self, seed: Value, mut step: F) -> Value
    where
        F: FnMut(Value, &Pair) -> Value,
    {
        let mut acc = seed;
        for pair in self.pairs() {
            acc = step(acc, &pair);
        }
        acc
    }

    /// Fold values left-to-right under a named binary operator.
    ///
    /// `"+"` adds integers and concatenates strings; `"*"` multiplies
    /// integers. Integer arithmetic wraps on overflow. The name is
    /// validated before traversal starts, so an unknown operator fails
    /// even over an empty source. An empty source under a recognized
    /// operator yields [`Value::Nil`].
    ///
    /// # Errors
    ///
    /// [`CollexError::UnsupportedOperator`] for names outside the lookup
    /// table; [`CollexError::TypeMismatch`] when the operator meets
    /// operand kinds it does not cover.
    fn inject_op(&self, name: &str) -> Result<Value, CollexError> {
        let op = NamedOp::parse(name)?;
        let mut pairs = self.pairs();
        let Some(first) = pairs.next() else {
            return Ok(Value::Nil);
        };
        let mut acc = first.value;
        for pair in pairs {
            acc = op.apply(acc, &pair.value)?;
        }
        Ok(acc)
    }
}

impl<S: Source + ?Sized> Enumerable for S {}

// ---------------------------------------------------------------------------
// Named operators
// ---------------------------------------------------------------------------

/// Operators `inject_op` can look up as binary functions on [`Value`].
#[derive(Debug, Clone, Copy)]
enum NamedOp {
    Add,
    Mul,
}

impl NamedOp {
    fn parse(name: &str) -> Result<Self, CollexError> {
        match name {
            "+" => Ok(NamedOp::Add),
            "*" => Ok(NamedOp::Mul),
            other => Err(CollexError::UnsupportedOperator(other.to_string())),
        }
    }

    fn apply(self, acc: Value, next: &Value) -> Result<Value, CollexError> {
        match (self, acc, next) {
            (NamedOp::Add, Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_add(*b))),
            (NamedOp::Mul, Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_mul(*b))),
            (NamedOp::Add, Value::Str(mut a), Value::Str(b)) => {
                a.push_str(b);
                Ok(Value::Str(a))
            }
            (_, Value::Int(_), other) => Err(CollexError::TypeMismatch {
                expected: TypeTag::Int,
                found: other.type_tag(),
            }),
            (NamedOp::Add, Value::Str(_), other) => Err(CollexError::TypeMismatch {
                expected: TypeTag::Str,
                found: other.type_tag(),
            }),
            (_, other, _) => Err(CollexError::TypeMismatch {
                expected: TypeTag::Int,
                found: other.type_tag(),
            }),
        }
    }
}
