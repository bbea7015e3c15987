/// This module implements a best-first search in the style of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
/// changed to finalize each node exactly once (lazy deletion of stale heap entries) and to report
/// every finalized node alongside the path.
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use num_traits::Zero;

use log::warn;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
pub type FxIndexSet<K> = indexmap::IndexSet<K, FxBuildHasher>;

/// Outcome of a search. An empty `path` means the goal could not be reached.
#[derive(Clone, Debug)]
pub struct SearchOutcome<N, C> {
    pub path: Vec<N>,
    pub cost: C,
    /// Finalized nodes in the order they were finalized.
    pub explored: FxIndexSet<N>,
}

struct SmallestCostHolder<N, C> {
    estimated_cost: C,
    cost: C,
    /// Push order, used as the last tie-breaker.
    sequence: usize,
    node: N,
    parent: usize,
}

impl<N, C: PartialEq> Eq for SmallestCostHolder<N, C> {}

impl<N, C: PartialEq> PartialEq for SmallestCostHolder<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.sequence == other.sequence
    }
}

impl<N, C: Ord> PartialOrd for SmallestCostHolder<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, C: Ord> Ord for SmallestCostHolder<N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favours the larger cost (deeper node), then the
        // entry that was pushed first.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => match self.cost.cmp(&other.cost) {
                Ordering::Equal => other.sequence.cmp(&self.sequence),
                s => s,
            },
            s => s,
        }
    }
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

/// Searches from `start` until `success` holds for a finalized node.
///
/// `successors` yields `(node, move_cost)` pairs; `heuristic` must not overestimate the remaining
/// cost for the returned path to be optimal. Successors are pushed in the order they are yielded.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> SearchOutcome<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    let mut sequence = 0;
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        sequence,
        node: start.clone(),
        parent: usize::MAX,
    });
    // Finalized nodes mapped to the index of the node they were reached from.
    let mut finalized: FxIndexMap<N, usize> = FxIndexMap::default();
    while let Some(SmallestCostHolder {
        cost, node, parent, ..
    }) = to_see.pop()
    {
        // A node may sit in the heap several times; only its first extraction counts.
        if finalized.contains_key(&node) {
            continue;
        }
        let (index, _) = finalized.insert_full(node.clone(), parent);
        if success(&node) {
            let path = reverse_path(&finalized, |&p| p, index);
            let explored = finalized.into_keys().collect();
            return SearchOutcome {
                path,
                cost,
                explored,
            };
        }
        for (successor, move_cost) in successors(&node) {
            if finalized.contains_key(&successor) {
                continue;
            }
            let new_cost = cost + move_cost;
            sequence += 1;
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + heuristic(&successor),
                cost: new_cost,
                sequence,
                node: successor,
                parent: index,
            });
        }
    }
    warn!(
        "Search exhausted after finalizing {} nodes without reaching the goal",
        finalized.len()
    );
    SearchOutcome {
        path: Vec::new(),
        cost: Zero::zero(),
        explored: finalized.into_keys().collect(),
    }
}
