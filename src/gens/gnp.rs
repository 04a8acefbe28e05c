use std::ops::RangeInclusive;

use crate::{gens::*, utils::*};

/// `G(n,p)` graphs generate every possible edge `(u, v)`, loops included, in a graph with `n`
/// nodes with probability `p` independent from each other.
///
/// Each generated edge carries [`DEFAULT_WEIGHT`] unless a weight range is set, in which case
/// its weight is drawn uniformly from the range.
///
/// # Examples
/// ```
/// use adjgraph::{prelude::*, gens::*};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64;
///
/// let rng = &mut Pcg64::seed_from_u64(1);
/// let g: AdjListUndir = Gnp::new().nodes(10).prob(1.0).weights(0..=1).graph(rng);
///
/// assert_eq!(g.number_of_edges(), 55);
/// assert!(g.weighted_edges(false).all(|e| e.2 <= 1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: Option<f64>,
    weights: Option<RangeInclusive<Weight>>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility());
        self.p = Some(prob);
        self
    }

    /// Draws edge weights uniformly from `weights`
    /// ** Panics if the range is empty or contains `Weight::MAX` **
    pub fn weights(mut self, weights: RangeInclusive<Weight>) -> Self {
        assert!(!weights.is_empty());
        assert!(*weights.end() < Weight::MAX, "Weight::MAX is not a valid weight");
        self.weights = Some(weights);
        self
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng,
    {
        let Some(p) = self.p else {
            panic!("Probability of Gnp was not set!");
        };
        let n = self.n;
        let weights = self.weights.clone();

        (0..n)
            .flat_map(move |u| (0..n).map(move |v| Edge(u, v)))
            .filter_map(move |Edge(u, v)| {
                if !rng.random_bool(p) {
                    return None;
                }

                let weight = match &weights {
                    None => DEFAULT_WEIGHT,
                    Some(range) => rng.random_range(range.clone()),
                };
                Some(WeightedEdge(u, v, weight))
            })
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        assert_eq!(Gnp::new().nodes(20).prob(0.0).stream(rng).count(), 0);

        let all = Gnp::new().nodes(20).prob(1.0).generate(rng);
        assert_eq!(all.len(), 400);
        assert!(all.iter().all(|e| e.2 == DEFAULT_WEIGHT));

        let graph: AdjMatrix = Gnp::new().nodes(20).prob(1.0).graph(rng);
        assert_eq!(graph.number_of_edges(), 400);

        let graph: AdjMatrixUndir = Gnp::new().nodes(20).prob(1.0).graph(rng);
        assert_eq!(graph.number_of_edges(), 210);
    }

    #[test]
    fn weights_and_density() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        let edges = Gnp::new()
            .nodes(100)
            .prob(0.2)
            .weights(3..=5)
            .generate(rng);

        // 10000 possible edges, expect 2000
        assert!((1700..2300).contains(&edges.len()));
        assert!(edges.iter().all(|e| (3..=5).contains(&e.2)));
        assert_eq!(edges.iter().map(|e| e.2).unique().count(), 3);
        assert!(edges.iter().map(|e| e.edge()).all_unique());
    }

    #[test]
    fn seeded_streams_are_reproducible() {
        let generator = Gnp::new().nodes(30).prob(0.3).weights(0..=9);
        let a = generator.generate(&mut Pcg64Mcg::seed_from_u64(5));
        let b = generator.generate(&mut Pcg64Mcg::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn invalid_probability() {
        let _ = Gnp::new().prob(1.5);
    }
}
