use std::borrow::Borrow;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::graph::Graph;

/// Enumerate every simple path from `start` to `goal`.
///
/// Paths are returned in depth-first discovery order, following each node's
/// neighbour order. A node already on the current path is never revisited,
/// but sibling branches may reuse nodes seen elsewhere. The search stops at
/// `goal` instead of extending past it. When `start == goal` the result is the
/// single path `[start]`; an endpoint missing from the graph yields no paths.
///
/// The number of paths is exponential in the worst case, so this is meant for
/// small sparse networks.
pub fn find_all_paths<N, Q>(graph: &Graph<N>, start: &Q, goal: &Q) -> Vec<Vec<N>>
where
    N: Eq + Hash + Clone + Borrow<Q>,
    Q: Hash + Eq + ToOwned<Owned = N> + ?Sized,
{
    if !graph.contains(start) || !graph.contains(goal) {
        return Vec::new();
    }

    let mut paths = Vec::new();
    // Every frame owns the path that leads to its node, so backtracking is
    // just dropping the frame.
    let mut stack: Vec<Vec<N>> = vec![vec![start.to_owned()]];

    while let Some(path) = stack.pop() {
        let Some(current) = path.last() else {
            continue;
        };

        if Borrow::<Q>::borrow(current) == goal {
            paths.push(path);
            continue;
        }

        for next in graph.neighbours::<N>(current).iter().rev() {
            if path.contains(next) {
                continue;
            }
            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.extend_from_slice(&path);
            extended.push(next.clone());
            stack.push(extended);
        }
    }

    paths
}

/// Pick the path with the fewest nodes; the earliest one wins ties.
///
/// Returns `None` for an empty input.
pub fn shortest_path<N>(paths: &[Vec<N>]) -> Option<&Vec<N>> {
    paths.iter().min_by_key(|path| path.len())
}

/// Find a minimum-hop route between `start` and `goal` using breadth-first
/// search.
pub fn find_route<N, Q>(graph: &Graph<N>, start: &Q, goal: &Q) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone + Borrow<Q>,
    Q: Hash + Eq + ToOwned<Owned = N> + ?Sized,
{
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }

    let start = start.to_owned();
    if Borrow::<Q>::borrow(&start) == goal {
        return Some(vec![start]);
    }

    let mut parents: HashMap<N, Option<N>> = HashMap::new();
    let mut queue = VecDeque::new();

    parents.insert(start.clone(), None);
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        for next in graph.neighbours::<N>(&current) {
            if parents.contains_key::<N>(next) {
                continue;
            }

            parents.insert(next.clone(), Some(current.clone()));
            if Borrow::<Q>::borrow(next) == goal {
                return Some(reconstruct_path(&parents, &start, next.clone()));
            }
            queue.push_back(next.clone());
        }
    }

    None
}

fn reconstruct_path<N>(parents: &HashMap<N, Option<N>>, start: &N, goal: N) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        current = if &node == start {
            None
        } else {
            parents.get(&node).cloned().flatten()
        };
        path.push(node);
    }
    path.reverse();
    path
}
