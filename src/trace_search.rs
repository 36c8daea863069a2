/// This module implements a variant of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
/// which reports every node it puts on the frontier or finalizes, in order, to an
/// observer. Finalized nodes are never reopened and stale heap entries are skipped
/// on extraction.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::search::TraceKind;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.index == other.index
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favours the entry furthest from the
        // start, then the one discovered first. The last rule makes the whole
        // exploration order a function of the input.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// What a search explored and, if it reached a goal, how.
pub(crate) struct Exploration<N, C> {
    pub path: Option<(Vec<N>, C)>,
    /// Number of finalized nodes, the start node included.
    pub finalized: usize,
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = std::iter::successors(Some(start), |&i| {
        parents.get_index(i).map(|(_, value)| parent(value))
    })
    .map_while(|i| parents.get_index(i).map(|(node, _)| node.clone()))
    .collect();
    path.reverse();
    path
}

/// Best-first search from `start` until `success` holds for a finalized node.
/// `successors` yields neighbours with their move cost; it does not need to filter
/// out finalized nodes. `observe` receives [TraceKind::Frontier] whenever a node is
/// pushed with an improved cost and [TraceKind::Visited] whenever a node other than
/// the start is finalized.
pub(crate) fn trace_search<N, C, FN, IN, FH, FS, FO>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    mut observe: FO,
) -> Exploration<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
    FO: FnMut(&N, TraceKind),
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    // Indexed like `parents`.
    let mut finalized: Vec<bool> = vec![false];
    let mut finalized_count = 0;
    while let Some(SmallestCostHolder { index, .. }) = to_see.pop() {
        // A node may sit in the heap several times if a cheaper way to it was
        // found after it was first pushed. Only the first extraction counts.
        if finalized[index] {
            continue;
        }
        finalized[index] = true;
        finalized_count += 1;
        let (cost, successors) = {
            let Some((node, &(_, cost))) = parents.get_index(index) else {
                continue;
            };
            if index != 0 {
                observe(node, TraceKind::Visited);
            }
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return Exploration {
                    path: Some((path, cost)),
                    finalized: finalized_count,
                };
            }
            (cost, successors(node))
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                    finalized.push(false);
                }
                Occupied(mut e) => {
                    if !finalized[e.index()] && e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }
            if let Some((node, _)) = parents.get_index(n) {
                observe(node, TraceKind::Frontier);
            }
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    Exploration {
        path: None,
        finalized: finalized_count,
    }
}
