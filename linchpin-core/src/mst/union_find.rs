//! Union-find (disjoint set union) used by every spanning-weight evaluation.
//!
//! Each evaluation builds a fresh [`DisjointSet`] and drops it afterwards, so
//! no connectivity state is shared between evaluations. `find` compresses
//! paths iteratively to keep stack usage flat on long parent chains.

/// Disjoint-set forest over the vertices `0..node_count`.
///
/// # Examples
/// ```
/// use linchpin_core::DisjointSet;
///
/// let mut set = DisjointSet::new(3);
/// assert!(set.union(0, 1));
/// assert!(!set.union(1, 0));
/// assert_eq!(set.find(0), set.find(1));
/// assert_eq!(set.components(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `node_count` singleton components.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            parent: (0..node_count).collect(),
            components: node_count,
        }
    }

    /// Returns the number of vertices tracked by the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the set tracks no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint components.
    #[must_use]
    pub fn components(&self) -> usize {
        self.components
    }

    /// Returns `true` when every vertex belongs to a single component.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.components <= 1
    }

    /// Returns the canonical root of `node`, re-pointing every vertex on the
    /// walked path directly at that root.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the components holding `left` and `right`.
    ///
    /// Returns `false` when both already share a component, meaning the
    /// connecting edge would close a cycle. On success the root of `left` is
    /// attached beneath the root of `right`.
    ///
    /// # Panics
    /// Panics when either vertex is out of range.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }
        self.parent[left_root] = right_root;
        self.components = self.components.saturating_sub(1);
        true
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::DisjointSet;

    #[test]
    fn starts_with_singleton_components() {
        let mut set = DisjointSet::new(4);
        assert_eq!(set.components(), 4);
        assert!(!set.is_connected());
        for node in 0..4 {
            assert_eq!(set.find(node), node);
        }
    }

    #[test]
    fn union_reports_cycles() {
        let mut set = DisjointSet::new(3);
        assert!(set.union(0, 1));
        assert!(set.union(1, 2));
        assert!(!set.union(2, 0));
        assert!(set.is_connected());
    }

    #[test]
    fn union_attaches_left_root_under_right_root() {
        let mut set = DisjointSet::new(2);
        assert!(set.union(0, 1));
        assert_eq!(set.find(0), 1);
    }

    #[test]
    fn find_flattens_long_chains() {
        let node_count = 10_000;
        let mut set = DisjointSet::new(node_count);
        for node in 0..node_count - 1 {
            assert!(set.union(node, node + 1));
        }
        let root = set.find(0);
        assert_eq!(root, node_count - 1);
        assert!(set.parent.iter().all(|&parent| parent == root));
    }

    #[rstest]
    #[case::empty(0, true)]
    #[case::single(1, true)]
    #[case::pair(2, false)]
    fn trivial_sets_report_connectivity(#[case] node_count: usize, #[case] connected: bool) {
        let set = DisjointSet::new(node_count);
        assert_eq!(set.is_connected(), connected);
        assert_eq!(set.is_empty(), node_count == 0);
    }
}
