use linchpin_core::Graph;

/// Five-vertex graph from the reference console demo.
#[must_use]
pub fn pentagon() -> Graph {
    Graph::from_triples(
        5,
        &[
            (0, 1, 1),
            (1, 2, 1),
            (2, 3, 2),
            (0, 3, 2),
            (0, 4, 3),
            (3, 4, 3),
            (1, 4, 6),
        ],
    )
    .expect("pentagon is valid")
}

/// Four-cycle where every edge has the same weight.
#[must_use]
pub fn square() -> Graph {
    Graph::from_triples(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 3, 1)])
        .expect("square is valid")
}
