use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;
use std::sync::Arc;

/// Granularity of the nodes in a graph.
///
/// This is a label recorded by the builder and reported in logs; the graph
/// and the searches behave the same for both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphMode {
    /// One node per hub display name.
    Hub,
    /// One node per city label (legacy reachability).
    City,
}

/// Undirected graph used by the path searches.
///
/// Neighbour lists keep first-insertion order and never contain duplicates or
/// self-loops. The adjacency is shared behind an [`Arc`], so clones are cheap
/// and a built graph can be queried from several threads at once.
#[derive(Debug, Clone)]
pub struct Graph<N = String> {
    mode: GraphMode,
    adjacency: Arc<HashMap<N, Vec<N>>>,
}

impl<N> Graph<N>
where
    N: Eq + Hash,
{
    /// Mode that produced this graph.
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// Return the neighbours of `node`, or an empty slice for unknown nodes.
    pub fn neighbours<Q>(&self, node: &Q) -> &[N]
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `node` was seeded into the graph, isolated or not.
    pub fn contains<Q>(&self, node: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.contains_key(node)
    }

    /// Whether an edge joins `a` and `b`.
    pub fn are_adjacent<Q>(&self, a: &Q, b: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.neighbours(a)
            .iter()
            .any(|n| Borrow::<Q>::borrow(n) == b)
    }

    /// Iterate over every node in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

impl<N> Graph<N>
where
    N: Eq + Hash + Ord + Clone,
{
    /// Adjacency as ordered sets, independent of insertion order.
    pub fn to_sorted_map(&self) -> BTreeMap<N, BTreeSet<N>> {
        self.adjacency
            .iter()
            .map(|(node, neighbours)| (node.clone(), neighbours.iter().cloned().collect()))
            .collect()
    }
}

/// Mutable accumulator that produces an immutable [`Graph`].
///
/// Each build owns its own builder; nothing is shared between builds.
#[derive(Debug)]
pub struct AdjacencyBuilder<N> {
    mode: GraphMode,
    adjacency: HashMap<N, Vec<N>>,
}

impl<N> AdjacencyBuilder<N>
where
    N: Eq + Hash + Clone,
{
    pub fn new(mode: GraphMode) -> Self {
        Self {
            mode,
            adjacency: HashMap::new(),
        }
    }

    /// Seed `node` with an empty neighbour list if it is not present yet.
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Insert an undirected edge, seeding both endpoints.
    ///
    /// Returns `true` when the edge was new. Self-loops are dropped but the
    /// node is still seeded.
    pub fn add_edge(&mut self, a: N, b: N) -> bool {
        if a == b {
            self.add_node(a);
            return false;
        }

        let forward = link(&mut self.adjacency, a.clone(), b.clone());
        let backward = link(&mut self.adjacency, b, a);
        forward || backward
    }

    pub fn build(self) -> Graph<N> {
        Graph {
            mode: self.mode,
            adjacency: Arc::new(self.adjacency),
        }
    }
}

fn link<N>(adjacency: &mut HashMap<N, Vec<N>>, from: N, to: N) -> bool
where
    N: Eq + Hash,
{
    let neighbours = adjacency.entry(from).or_default();
    if neighbours.contains(&to) {
        return false;
    }
    neighbours.push(to);
    true
}
