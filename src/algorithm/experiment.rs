//! Monte Carlo sampling of shuffle outcomes into a frequency tally

use crate::algorithm::random::RandomSource;
use crate::algorithm::shuffle::ShuffleAlgorithm;
use crate::io::error::{Result, invalid_configuration};
use num_traits::FromPrimitive;
use std::collections::HashMap;
use std::hash::Hash;

/// Immutable, order-sensitive shuffle outcome used as a tally key
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation<T>(Box<[T]>);

impl<T> Permutation<T> {
    /// Elements of the outcome in order
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Number of elements in the outcome
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the outcome has no elements
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Ord + Clone> Permutation<T> {
    /// Whether this outcome is a rearrangement of `base`
    pub fn is_rearrangement_of(&self, base: &[T]) -> bool {
        if self.0.len() != base.len() {
            return false;
        }
        let mut ours = self.0.to_vec();
        let mut theirs = base.to_vec();
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }
}

impl<T> From<Vec<T>> for Permutation<T> {
    fn from(values: Vec<T>) -> Self {
        Self(values.into_boxed_slice())
    }
}

/// Occurrence count of every distinct outcome observed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tally<T: Eq + Hash> {
    counts: HashMap<Permutation<T>, u64>,
    total: u64,
}

impl<T: Eq + Hash> Default for Tally<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Tally<T> {
    /// Create an empty tally
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }

    /// Count one occurrence of `outcome`
    pub fn record(&mut self, outcome: Permutation<T>) {
        self.record_many(outcome, 1);
    }

    /// Count `count` occurrences of `outcome`
    pub fn record_many(&mut self, outcome: Permutation<T>, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(outcome).or_insert(0) += count;
        self.total += count;
    }

    /// Number of outcomes recorded, equal to the sum of all counts
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct outcomes with a non-zero count
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing has been recorded
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Occurrences of `outcome`, zero if never observed
    pub fn count_of(&self, outcome: &Permutation<T>) -> u64 {
        self.counts.get(outcome).copied().unwrap_or(0)
    }

    /// Iterate over `(outcome, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&Permutation<T>, u64)> {
        self.counts.iter().map(|(outcome, &count)| (outcome, count))
    }

    /// Per-outcome counts in arbitrary order
    pub fn counts(&self) -> impl Iterator<Item = u64> + '_ {
        self.counts.values().copied()
    }

    /// Most frequent outcome, ties broken towards the smallest outcome
    pub fn most_frequent(&self) -> Option<(&Permutation<T>, u64)>
    where
        T: Ord,
    {
        self.iter()
            .max_by(|(a, count_a), (b, count_b)| count_a.cmp(count_b).then_with(|| b.cmp(a)))
    }

    /// Number of trials whose outcome is not a rearrangement of `base`
    pub fn invalid_outcomes(&self, base: &[T]) -> u64
    where
        T: Ord + Clone,
    {
        self.iter()
            .filter(|(outcome, _)| !outcome.is_rearrangement_of(base))
            .map(|(_, count)| count)
            .sum()
    }

    /// Fold another tally into this one
    pub fn merge(&mut self, other: Self) {
        for (outcome, count) in other.counts {
            self.record_many(outcome, count);
        }
    }
}

/// Repeatedly shuffles a fixed base sequence and tallies the outcomes
#[derive(Clone, Debug)]
pub struct ExperimentRunner<T> {
    base: Vec<T>,
    trials: u64,
}

impl<T> ExperimentRunner<T>
where
    T: Clone + Eq + Hash + FromPrimitive,
{
    /// Create a runner over `base` performing `trials` shuffles per run
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `trials` is zero or `base` is empty
    pub fn new(base: Vec<T>, trials: u64) -> Result<Self> {
        if base.is_empty() {
            return Err(invalid_configuration(
                "size",
                &0,
                &"base sequence must contain at least one element",
            ));
        }
        if trials == 0 {
            return Err(invalid_configuration(
                "trials",
                &trials,
                &"at least one trial is required",
            ));
        }
        Ok(Self { base, trials })
    }

    /// Sequence every trial starts from
    pub fn base(&self) -> &[T] {
        &self.base
    }

    /// Number of shuffles per run
    pub const fn trials(&self) -> u64 {
        self.trials
    }

    /// Run every trial and return the completed tally
    ///
    /// # Errors
    ///
    /// Propagates shuffle failures
    pub fn run<R>(&self, algorithm: ShuffleAlgorithm, source: &mut R) -> Result<Tally<T>>
    where
        R: RandomSource + ?Sized,
    {
        self.run_observed(algorithm, source, |_| {})
    }

    /// Run every trial, calling `observer` with the number of completed trials after each one
    ///
    /// # Errors
    ///
    /// Propagates shuffle failures
    pub fn run_observed<R, F>(
        &self,
        algorithm: ShuffleAlgorithm,
        source: &mut R,
        mut observer: F,
    ) -> Result<Tally<T>>
    where
        R: RandomSource + ?Sized,
        F: FnMut(u64),
    {
        let mut tally = Tally::new();
        for completed in 1..=self.trials {
            // Every trial restarts from the base sequence
            let outcome = algorithm.apply(&self.base, source)?;
            tally.record(Permutation::from(outcome));
            observer(completed);
        }
        tracing::debug!(
            algorithm = algorithm.label(),
            trials = self.trials,
            distinct = tally.distinct(),
            "experiment run complete"
        );
        Ok(tally)
    }
}
