//! Classification output types.

/// Role an edge plays across the minimum spanning trees of its graph.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EdgeClass {
    /// Present in every minimum spanning tree.
    Critical,
    /// Present in some, but not all, minimum spanning trees.
    PseudoCritical,
    /// Present in no minimum spanning tree.
    Redundant,
}

/// Per-edge classes for one graph, indexed by original edge position.
///
/// # Examples
/// ```
/// use linchpin_core::{Classification, EdgeClass};
///
/// let classification = Classification::new(
///     vec![EdgeClass::Critical, EdgeClass::Redundant, EdgeClass::PseudoCritical],
///     4,
/// );
/// assert_eq!(classification.critical(), vec![0]);
/// assert_eq!(classification.pseudo_critical(), vec![2]);
/// assert_eq!(classification.class_of(1), Some(EdgeClass::Redundant));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Classification {
    classes: Vec<EdgeClass>,
    mst_weight: u64,
}

impl Classification {
    /// Creates a classification from per-edge classes and the baseline weight.
    #[must_use]
    pub fn new(classes: Vec<EdgeClass>, mst_weight: u64) -> Self {
        Self {
            classes,
            mst_weight,
        }
    }

    /// Returns the class of every edge in original order.
    #[must_use]
    pub fn classes(&self) -> &[EdgeClass] {
        &self.classes
    }

    /// Returns the class of the edge at `index`, if any.
    #[must_use]
    pub fn class_of(&self, index: usize) -> Option<EdgeClass> {
        self.classes.get(index).copied()
    }

    /// Returns the weight of any minimum spanning tree of the graph.
    #[must_use]
    pub fn mst_weight(&self) -> u64 {
        self.mst_weight
    }

    /// Returns the ascending indices of critical edges.
    #[must_use]
    pub fn critical(&self) -> Vec<usize> {
        self.indices_of(EdgeClass::Critical)
    }

    /// Returns the ascending indices of pseudo-critical edges.
    #[must_use]
    pub fn pseudo_critical(&self) -> Vec<usize> {
        self.indices_of(EdgeClass::PseudoCritical)
    }

    fn indices_of(&self, wanted: EdgeClass) -> Vec<usize> {
        self.classes
            .iter()
            .enumerate()
            .filter_map(|(index, class)| (*class == wanted).then_some(index))
            .collect()
    }
}
