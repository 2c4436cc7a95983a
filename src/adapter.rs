use crate::traits::{Source, SourceKind};
use crate::value::{Key, Pair, Value};

// ---------------------------------------------------------------------------
// SequenceSource
// ---------------------------------------------------------------------------

/// Presents a slice of values as a sequence-shaped [`Source`].
///
/// A cheap, stateless, non-owning wrapper — build one per operation and
/// throw it away. Pairs are `(index, element)` in storage order.
#[derive(Debug, Clone, Copy)]
pub struct SequenceSource<'a> {
    values: &'a [Value],
}

impl<'a> SequenceSource<'a> {
    pub fn new(values: &'a [Value]) -> Self {
        Self { values }
    }
}

impl Source for SequenceSource<'_> {
    fn pairs(&self) -> Box<dyn Iterator<Item = Pair> + '_> {
        Box::new(
            self.values
                .iter()
                .enumerate()
                .map(|(i, v)| Pair::indexed(i, v.clone())),
        )
    }

    fn size(&self) -> Option<usize> {
        Some(self.values.len())
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Sequence
    }
}

// ---------------------------------------------------------------------------
// RangeSource
// ---------------------------------------------------------------------------

/// Presents an integer range as a range-shaped [`Source`].
///
/// Pairs are `(offset, value)` generated by successor-stepping from the
/// lower bound until the upper bound is exceeded; whether the upper bound
/// itself is yielded follows the range's own inclusivity flag. A range
/// with `start` past `end` enumerates as empty.
#[derive(Debug, Clone, Copy)]
pub struct RangeSource {
    start: i64,
    end: i64,
    inclusive: bool,
}

impl RangeSource {
    /// A range covering `start..=end`.
    pub fn inclusive(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            inclusive: true,
        }
    }

    /// A range covering `start..end`.
    pub fn exclusive(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            inclusive: false,
        }
    }
}

impl Source for RangeSource {
    fn pairs(&self) -> Box<dyn Iterator<Item = Pair> + '_> {
        let RangeSource {
            start,
            end,
            inclusive,
        } = *self;
        let steps = std::iter::successors(Some(start), |v| v.checked_add(1))
            .take_while(move |&v| if inclusive { v <= end } else { v < end });
        Box::new(
            steps
                .enumerate()
                .map(|(i, v)| Pair::indexed(i, Value::Int(v))),
        )
    }

    fn size(&self) -> Option<usize> {
        let span = if self.inclusive {
            self.end.checked_sub(self.start)?.checked_add(1)?
        } else {
            self.end.checked_sub(self.start)?
        };
        Some(span.max(0) as usize)
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Range
    }
}

// ---------------------------------------------------------------------------
// MapSource
// ---------------------------------------------------------------------------

/// Presents a key-ordered entry slice as a map-shaped [`Source`].
///
/// The slice's order is the map's defined iteration order — insertion
/// order for the usual callers. Pairs are `(key, value)`, and block
/// predicates over map-shaped sources see meaningful keys.
#[derive(Debug, Clone, Copy)]
pub struct MapSource<'a> {
    entries: &'a [(String, Value)],
}

impl<'a> MapSource<'a> {
    pub fn new(entries: &'a [(String, Value)]) -> Self {
        Self { entries }
    }
}

impl Source for MapSource<'_> {
    fn pairs(&self) -> Box<dyn Iterator<Item = Pair> + '_> {
        Box::new(
            self.entries
                .iter()
                .map(|(k, v)| Pair::named(k.clone(), v.clone())),
        )
    }

    fn size(&self) -> Option<usize> {
        Some(self.entries.len())
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Map
    }
}

// ---------------------------------------------------------------------------
// Pairs
// ---------------------------------------------------------------------------

/// A materialized pair list — the output of `select`, `map`, and
/// [`Enumerator::to_list`](crate::Enumerator::to_list).
///
/// `Pairs` owns its elements and is itself a [`Source`], so results of
/// one operation feed straight into the next: `seq.select(p).count()`,
/// `enumerator.to_list().map(f)`, and so on. The carried [`SourceKind`]
/// is what makes `select` over a map produce a map-shaped result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairs {
    kind: SourceKind,
    items: Vec<Pair>,
}

impl Pairs {
    /// Build a pair list of the given shape.
    pub fn new(kind: SourceKind, items: Vec<Pair>) -> Self {
        Self { kind, items }
    }

    /// Build the result of a selection over a source of shape `kind`.
    ///
    /// Map-shaped selections keep their keys and stay map-shaped.
    /// Sequence and range selections become a fresh sequence with keys
    /// reindexed from zero — the filtered-down "new same-kind container".
    pub(crate) fn from_selection(kind: SourceKind, kept: Vec<Pair>) -> Self {
        match kind {
            SourceKind::Map => Self {
                kind: SourceKind::Map,
                items: kept,
            },
            SourceKind::Sequence | SourceKind::Range => Self {
                kind: SourceKind::Sequence,
                items: kept
                    .into_iter()
                    .enumerate()
                    .map(|(i, p)| Pair {
                        key: Key::Index(i),
                        value: p.value,
                    })
                    .collect(),
            },
        }
    }

    /// The pairs, in order.
    pub fn items(&self) -> &[Pair] {
        &self.items
    }

    /// Just the values, in order.
    pub fn values(&self) -> Vec<Value> {
        self.items.iter().map(|p| p.value.clone()).collect()
    }

    /// Number of pairs held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Source for Pairs {
    fn pairs(&self) -> Box<dyn Iterator<Item = Pair> + '_> {
        Box::new(self.items.iter().cloned())
    }

    fn size(&self) -> Option<usize> {
        Some(self.items.len())
    }

    fn kind(&self) -> SourceKind {
        self.kind
    }
}
