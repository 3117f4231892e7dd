//! DFS/BFS traversal and path helpers for skeleton topologies.
//!
//! Path queries follow the tree fast path when the topology allows it: the
//! path between two nodes is found by walking both ancestor chains until they
//! meet, which costs O(depth). When the input is not tree-shaped (a node with
//! several parents, or a parent cycle) the query falls back to a
//! breadth-first search over the undirected graph, so the answer is still a
//! shortest path.

use crate::geometry::metrics::distance;
use crate::skeleton::Skeleton;
use crate::skeleton_error::SkeletonError;
use crate::topology::arbor::Arbor;
use crate::topology::bounds::NodeLike;
use itertools::Itertools;
use std::collections::{HashMap, HashSet, VecDeque};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    /// Follow children.
    Down,
    /// Follow parents.
    Up,
    /// Follow both (undirected).
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    DFS,
    BFS,
}

/// Configurable traversal returning nodes in visit order.
///
/// DFS visits children in insertion order (pre-order), so walking `Down`
/// from the root reproduces the order in which branches were added.
pub struct TraversalBuilder<'a, A: Arbor> {
    arbor: &'a A,
    seeds: Vec<A::Node>,
    dir: Dir,
    strat: Strategy,
    max_depth: Option<u32>,
}

impl<'a, A: Arbor> TraversalBuilder<'a, A> {
    pub fn new(arbor: &'a A) -> Self {
        Self {
            arbor,
            seeds: Vec::new(),
            dir: Dir::Down,
            strat: Strategy::DFS,
            max_depth: None,
        }
    }
    pub fn seeds<I: IntoIterator<Item = A::Node>>(mut self, it: I) -> Self {
        self.seeds = it.into_iter().collect();
        self
    }
    pub fn dir(mut self, d: Dir) -> Self {
        self.dir = d;
        self
    }
    pub fn dfs(mut self) -> Self {
        self.strat = Strategy::DFS;
        self
    }
    pub fn bfs(mut self) -> Self {
        self.strat = Strategy::BFS;
        self
    }
    pub fn max_depth(mut self, d: Option<u32>) -> Self {
        self.max_depth = d;
        self
    }

    pub fn run(self) -> Vec<A::Node> {
        match self.strat {
            Strategy::DFS => self.run_dfs(),
            Strategy::BFS => self.run_bfs(),
        }
    }

    fn run_dfs(self) -> Vec<A::Node> {
        let TraversalBuilder {
            arbor,
            seeds,
            dir,
            strat: _,
            max_depth,
        } = self;
        let mut seen: HashSet<A::Node> = HashSet::new();
        let mut out = Vec::new();
        let mut stack: Vec<(A::Node, u32)> = seeds.into_iter().rev().map(|p| (p, 0)).collect();

        while let Some((p, d)) = stack.pop() {
            if !seen.insert(p) {
                continue;
            }
            out.push(p);
            if max_depth.map_or(false, |md| d >= md) {
                continue;
            }
            let next: Vec<_> = step_neighbors(arbor, dir, p).collect();
            for q in next.into_iter().rev() {
                if !seen.contains(&q) {
                    stack.push((q, d + 1));
                }
            }
        }
        out
    }

    fn run_bfs(self) -> Vec<A::Node> {
        let TraversalBuilder {
            arbor,
            seeds,
            dir,
            strat: _,
            max_depth,
        } = self;
        let mut seen: HashSet<A::Node> = HashSet::new();
        let mut out = Vec::new();
        let mut q: VecDeque<(A::Node, u32)> = VecDeque::new();
        for s in seeds {
            if seen.insert(s) {
                q.push_back((s, 0));
            }
        }

        while let Some((p, d)) = q.pop_front() {
            out.push(p);
            if max_depth.map_or(false, |md| d >= md) {
                continue;
            }
            for qn in step_neighbors(arbor, dir, p) {
                if seen.insert(qn) {
                    q.push_back((qn, d + 1));
                }
            }
        }
        out
    }
}

fn step_neighbors<'a, A: Arbor>(
    arbor: &'a A,
    dir: Dir,
    p: A::Node,
) -> Box<dyn Iterator<Item = A::Node> + 'a> {
    match dir {
        Dir::Down => Box::new(arbor.children(p)),
        Dir::Up => Box::new(arbor.parents(p)),
        Dir::Both => arbor.neighbors(p),
    }
}

/// Every directed `(parent, child)` edge reachable from the sorted roots.
///
/// Edges are grouped by parent; parents appear in DFS pre-order and each
/// parent's children in insertion order.
///
/// Components without a root (parent cycles) are not visited; a warning
/// reports how many edges were skipped.
pub fn preorder_edges<A: Arbor>(arbor: &A) -> Vec<(A::Node, A::Node)> {
    let roots: Vec<_> = arbor
        .sorted_nodes()
        .into_iter()
        .filter(|&p| arbor.parent_count(p) == 0)
        .collect();
    let order = TraversalBuilder::new(arbor)
        .dir(Dir::Down)
        .dfs()
        .seeds(roots)
        .run();
    let edges: Vec<_> = order
        .into_iter()
        .flat_map(|p| arbor.children(p).map(move |c| (p, c)))
        .collect();
    let skipped = arbor.edge_count().saturating_sub(edges.len());
    if skipped > 0 {
        log::warn!("preorder_edges: skipped {skipped} edge(s) not reachable from a root");
    }
    edges
}

enum AncestorWalk<P> {
    Found(Vec<P>),
    /// Tree assumptions did not hold; the caller must search the full graph.
    Fallback,
}

/// Walk both parent chains until they meet.
fn ancestor_path<A: Arbor>(arbor: &A, a: A::Node, b: A::Node) -> AncestorWalk<A::Node> {
    let mut chain_a = Vec::new();
    let mut index_a: HashMap<A::Node, usize> = HashMap::new();
    let mut cur = Some(a);
    while let Some(p) = cur {
        if index_a.insert(p, chain_a.len()).is_some() {
            return AncestorWalk::Fallback;
        }
        chain_a.push(p);
        if arbor.parent_count(p) > 1 {
            return AncestorWalk::Fallback;
        }
        cur = arbor.parent(p);
    }

    let mut chain_b = Vec::new();
    let mut seen_b = HashSet::new();
    let mut cur = Some(b);
    while let Some(p) = cur {
        if let Some(&i) = index_a.get(&p) {
            let mut path = chain_a[..=i].to_vec();
            path.extend(chain_b.into_iter().rev());
            return AncestorWalk::Found(path);
        }
        if !seen_b.insert(p) || arbor.parent_count(p) > 1 {
            return AncestorWalk::Fallback;
        }
        chain_b.push(p);
        cur = arbor.parent(p);
    }
    AncestorWalk::Fallback
}

/// Breadth-first search over the undirected graph.
fn bfs_path<A: Arbor>(arbor: &A, a: A::Node, b: A::Node) -> Option<Vec<A::Node>> {
    let mut prev: HashMap<A::Node, A::Node> = HashMap::new();
    let mut seen = HashSet::from([a]);
    let mut q = VecDeque::from([a]);
    while let Some(p) = q.pop_front() {
        if p == b {
            let mut path = vec![b];
            let mut cur = b;
            while let Some(&before) = prev.get(&cur) {
                path.push(before);
                cur = before;
            }
            path.reverse();
            return Some(path);
        }
        for n in arbor.neighbors(p) {
            if seen.insert(n) {
                prev.insert(n, p);
                q.push_back(n);
            }
        }
    }
    None
}

/// Ordered node sequence from `a` to `b`, both inclusive.
///
/// # Errors
/// - [`SkeletonError::MissingNode`] if either endpoint is unknown.
/// - [`SkeletonError::NoPath`] if the endpoints lie in different components.
pub fn shortest_path<A: Arbor>(
    arbor: &A,
    a: A::Node,
    b: A::Node,
) -> Result<Vec<A::Node>, SkeletonError> {
    for p in [a, b] {
        if !arbor.contains(p) {
            return Err(SkeletonError::missing_node(p));
        }
    }
    if a == b {
        return Ok(vec![a]);
    }
    if arbor.is_tree_shaped() {
        if let AncestorWalk::Found(path) = ancestor_path(arbor, a, b) {
            return Ok(path);
        }
    } else {
        log::warn!("shortest_path({a:?}, {b:?}): topology is not a tree, using BFS");
    }
    bfs_path(arbor, a, b).ok_or_else(|| SkeletonError::no_path(a, b))
}

/// Sum of Euclidean distances along `path`.
pub fn path_nodes_length<P: NodeLike>(
    skeleton: &Skeleton<P>,
    path: &[P],
) -> Result<f64, SkeletonError> {
    path.iter()
        .tuple_windows()
        .map(|(&u, &v)| Ok::<f64, SkeletonError>(distance(skeleton.position(u)?, skeleton.position(v)?)))
        .sum()
}

/// Length of the shortest path between `a` and `b`.
///
/// Symmetric in its arguments, and 0 when `a == b`.
pub fn path_length<P: NodeLike>(skeleton: &Skeleton<P>, a: P, b: P) -> Result<f64, SkeletonError> {
    let path = shortest_path(skeleton, a, b)?;
    path_nodes_length(skeleton, &path)
}

/// Number of branch nodes (undirected degree > 2) on the path from `base`
/// to `v`, both endpoints included.
///
/// `base` defaults to the soma. Returns `Ok(None)` when neither is set.
pub fn branch_order<A: Arbor>(
    arbor: &A,
    v: A::Node,
    base: Option<A::Node>,
    soma: Option<A::Node>,
) -> Result<Option<u32>, SkeletonError> {
    let Some(base) = base.or(soma) else {
        return Ok(None);
    };
    let path = shortest_path(arbor, base, v)?;
    let order = path.iter().filter(|&&p| arbor.degree(p) > 2).count();
    Ok(Some(order as u32))
}

impl<P: NodeLike> Skeleton<P> {
    /// See [`shortest_path`].
    pub fn find_path(&self, a: P, b: P) -> Result<Vec<P>, SkeletonError> {
        shortest_path(self, a, b)
    }

    /// See [`path_length`].
    pub fn path_length(&self, a: P, b: P) -> Result<f64, SkeletonError> {
        path_length(self, a, b)
    }

    /// See [`branch_order`]; the soma is the default base.
    pub fn branch_order(&self, v: P, base: Option<P>) -> Result<Option<u32>, SkeletonError> {
        branch_order(self, v, base, self.soma())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::arbor::InMemoryArbor;

    //        1
    //        |
    //        2
    //       / \
    //      3   4
    //     / \
    //    5   6
    fn tree() -> InMemoryArbor<u32> {
        InMemoryArbor::from_edges([(2, 1), (3, 2), (4, 2), (5, 3), (6, 3)])
    }

    #[test]
    fn dfs_is_preorder() {
        let a = tree();
        let v = TraversalBuilder::new(&a).dir(Dir::Down).dfs().seeds([1]).run();
        assert_eq!(v, vec![1, 2, 3, 5, 6, 4]);
    }

    #[test]
    fn bfs_levels() {
        let a = tree();
        let v = TraversalBuilder::new(&a).dir(Dir::Down).bfs().seeds([1]).run();
        assert_eq!(v, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn max_depth_limits() {
        let a = tree();
        let v = TraversalBuilder::new(&a)
            .dir(Dir::Down)
            .dfs()
            .max_depth(Some(1))
            .seeds([2])
            .run();
        assert_eq!(v, vec![2, 3, 4]);
        let up = TraversalBuilder::new(&a).dir(Dir::Up).bfs().seeds([5]).run();
        assert_eq!(up, vec![5, 3, 2, 1]);
    }

    #[test]
    fn preorder_edges_cover_tree() {
        let a = tree();
        assert_eq!(
            preorder_edges(&a),
            vec![(1, 2), (2, 3), (2, 4), (3, 5), (3, 6)]
        );
    }

    #[test]
    fn preorder_edges_skip_rootless_cycle() {
        // 1 → 2, plus a detached 3 ⇄ 4 loop.
        let a = InMemoryArbor::from_edges([(2u32, 1), (4, 3), (3, 4)]);
        assert_eq!(a.edge_count(), 3);
        assert_eq!(preorder_edges(&a), vec![(1, 2)]);
    }

    #[test]
    fn path_through_common_ancestor() {
        let a = tree();
        assert_eq!(shortest_path(&a, 5, 4).unwrap(), vec![5, 3, 2, 4]);
        assert_eq!(shortest_path(&a, 4, 5).unwrap(), vec![4, 2, 3, 5]);
        assert_eq!(shortest_path(&a, 1, 6).unwrap(), vec![1, 2, 3, 6]);
        assert_eq!(shortest_path(&a, 6, 1).unwrap(), vec![6, 3, 2, 1]);
        assert_eq!(shortest_path(&a, 3, 3).unwrap(), vec![3]);
    }

    #[test]
    fn disconnected_nodes_have_no_path() {
        let mut a = tree();
        a.add_edge(8, 7);
        let err = shortest_path(&a, 5, 8).unwrap_err();
        assert!(matches!(err, SkeletonError::NoPath { .. }));
        let err = shortest_path(&a, 5, 99).unwrap_err();
        assert_eq!(err, SkeletonError::MissingNode("99".into()));
    }

    #[test]
    fn general_graph_uses_bfs() {
        // Diamond: 4 has two parents, so there are two routes from 1 to 4.
        let a = InMemoryArbor::from_edges([(2u32, 1), (3, 1), (4, 2), (4, 3), (5, 4)]);
        assert!(!a.is_tree_shaped());
        let p = shortest_path(&a, 1, 5).unwrap();
        assert_eq!(p.len(), 4);
        assert_eq!(p.first(), Some(&1));
        assert_eq!(p.last(), Some(&5));
    }

    #[test]
    fn parent_cycle_falls_back_to_bfs() {
        let a = InMemoryArbor::from_edges([(2u32, 1), (3, 2), (1, 3)]);
        assert_eq!(shortest_path(&a, 1, 3).unwrap(), vec![1, 3]);
    }

    #[test]
    fn branch_order_counts_degree_three_nodes() {
        let a = tree();
        // 2 and 3 both have degree 3; 1 is a root with one child.
        assert_eq!(branch_order(&a, 5, Some(1), None).unwrap(), Some(2));
        assert_eq!(branch_order(&a, 4, Some(1), None).unwrap(), Some(1));
        assert_eq!(branch_order(&a, 1, Some(1), None).unwrap(), Some(0));
        assert_eq!(branch_order(&a, 5, None, Some(2)).unwrap(), Some(2));
        assert_eq!(branch_order(&a, 5, None, None).unwrap(), None);
    }
}
