use crate::adapter::Pairs;
use crate::traits::{Source, SourceKind};
use crate::value::{Key, Pair, Value};

/// The operation an [`Enumerator`] has staged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Each,
    EachWithIndex,
    Select,
    Map,
}

/// The result of completing a staged operation with [`Enumerator::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completed {
    /// `Each` / `EachWithIndex` ran for side effect; holds the number of
    /// pairs visited. The original container is untouched.
    Traversed(usize),

    /// `Select` / `Map` produced a new container.
    Collected(Pairs),
}

// ---------------------------------------------------------------------------
// Enumerator
// ---------------------------------------------------------------------------

/// A staged operation waiting for its action — the value every traversal
/// operation returns when invoked without one.
///
/// An enumerator is an immutable descriptor of deferred work: a borrow of
/// the source plus the name of the operation to run. It owns no cursor —
/// every consumption ([`to_list`](Enumerator::to_list), [`run`](Enumerator::run),
/// or any [`Enumerable`](crate::Enumerable) call) replays the source from
/// the beginning, so consuming it twice yields the same result as long as
/// the container is unchanged.
///
/// The enumerator borrows its container rather than copying it; the
/// lifetime parameter keeps it from outliving the container.
///
/// `Enumerator` is itself a [`Source`] (delegating to the bound adapter),
/// which means it carries the full [`Enumerable`](crate::Enumerable)
/// operation set — enumerators compose with everything else in the crate.
///
/// # Example
///
/// ```rust
/// use collex::{Enumerable, Op, Value};
///
/// let nums: Vec<Value> = (1..=4).map(Value::Int).collect();
/// let seq = collex::seq(&nums);
///
/// let staged = seq.stage(Op::Map);
/// // Nothing has run yet; complete it whenever convenient.
/// let doubled = staged.run(|p, _| match p.value {
///     Value::Int(n) => Value::Int(n * 2),
///     _ => Value::Nil,
/// });
///
/// // And it is enumerable in its own right.
/// assert_eq!(staged.count(), 4);
/// # let _ = doubled;
/// ```
pub struct Enumerator<'a> {
    source: &'a dyn Source,
    op: Op,
}

impl<'a> Enumerator<'a> {
    /// Stage `op` over `source` without running it.
    pub fn stage(source: &'a dyn Source, op: Op) -> Self {
        Self { source, op }
    }

    /// The operation this enumerator will run.
    pub fn op(&self) -> Op {
        self.op
    }

    /// Materialize the source into an ordered pair list.
    ///
    /// Replays the adapter from the start; calling this twice returns
    /// independent lists with identical content.
    pub fn to_list(&self) -> Pairs {
        Pairs::new(self.source.kind(), self.source.pairs().collect())
    }

    /// Complete the staged operation eagerly with `action`.
    ///
    /// The action receives each pair together with its 0-based traversal
    /// index and returns a value whose use depends on the staged op:
    ///
    /// - [`Op::Each`] / [`Op::EachWithIndex`] discard it and report how
    ///   many pairs were visited.
    /// - [`Op::Select`] keeps pairs whose returned value is truthy,
    ///   with the same shape rules as eager
    ///   [`select`](crate::Enumerable::select).
    /// - [`Op::Map`] collects the returned values into a fresh sequence.
    pub fn run<F>(&self, mut action: F) -> Completed
    where
        F: FnMut(&Pair, usize) -> Value,
    {
        match self.op {
            Op::Each | Op::EachWithIndex => {
                let mut visited = 0;
                for (i, pair) in self.source.pairs().enumerate() {
                    action(&pair, i);
                    visited += 1;
                }
                Completed::Traversed(visited)
            }
            Op::Select => {
                let mut kept = Vec::new();
                for (i, pair) in self.source.pairs().enumerate() {
                    if action(&pair, i).is_truthy() {
                        kept.push(pair);
                    }
                }
                Completed::Collected(Pairs::from_selection(self.source.kind(), kept))
            }
            Op::Map => {
                let items = self
                    .source
                    .pairs()
                    .enumerate()
                    .map(|(i, pair)| Pair {
                        key: Key::Index(i),
                        value: action(&pair, i),
                    })
                    .collect();
                Completed::Collected(Pairs::new(SourceKind::Sequence, items))
            }
        }
    }
}

impl Source for Enumerator<'_> {
    fn pairs(&self) -> Box<dyn Iterator<Item = Pair> + '_> {
        self.source.pairs()
    }

    fn size(&self) -> Option<usize> {
        self.source.size()
    }

    fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    fn kind(&self) -> SourceKind {
        self.source.kind()
    }
}
