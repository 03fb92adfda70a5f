//! Unbiased and deliberately biased shuffle algorithms
//!
//! Both variants copy their input and never mutate it. The biased variant
//! writes loop indices into the working copy, so its output is in general
//! not a permutation of the input at all.

use crate::algorithm::random::RandomSource;
use crate::io::error::{Result, arithmetic_degeneracy};
use num_traits::FromPrimitive;
use std::fmt;

/// Shuffle strategy under measurement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShuffleAlgorithm {
    /// Descending Fisher-Yates, uniform over all N! permutations
    FisherYates,
    /// Ascending index-assigning variant with a skewed distribution
    Biased,
}

impl ShuffleAlgorithm {
    /// Both variants in report order
    pub const ALL: [Self; 2] = [Self::FisherYates, Self::Biased];

    /// Human-readable name used in reports
    pub const fn label(self) -> &'static str {
        match self {
            Self::FisherYates => "Fisher-Yates",
            Self::Biased => "Biased Shuffle",
        }
    }

    /// Shuffle a private copy of `input` using indices drawn from `source`
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticDegeneracy` if the biased variant must store an
    /// index that the element type cannot represent
    pub fn apply<T, R>(self, input: &[T], source: &mut R) -> Result<Vec<T>>
    where
        T: Clone + FromPrimitive,
        R: RandomSource + ?Sized,
    {
        match self {
            Self::FisherYates => Ok(fisher_yates(input, source)),
            Self::Biased => biased(input, source),
        }
    }
}

impl fmt::Display for ShuffleAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fisher-Yates shuffle: swap position `i` with a draw from `0..=i`, for `i` descending
pub fn fisher_yates<T, R>(input: &[T], source: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut working = input.to_vec();
    for i in (1..working.len()).rev() {
        let j = source.next_index(i);
        working.swap(i, j);
    }
    working
}

/// Biased shuffle: for `i` ascending, copy `working[j]` into `working[i]` and store `i` at `j`
///
/// The draw range grows with `i`, and the assignment of the raw index is
/// kept as-is: both are what make the distribution skewed.
///
/// # Errors
///
/// Returns `ArithmeticDegeneracy` if an index cannot be converted into `T`
pub fn biased<T, R>(input: &[T], source: &mut R) -> Result<Vec<T>>
where
    T: Clone + FromPrimitive,
    R: RandomSource + ?Sized,
{
    let mut working = input.to_vec();
    for i in 0..working.len() {
        let j = source.next_index(i);
        let Some(drawn) = working.get(j).cloned() else {
            return Err(arithmetic_degeneracy(
                "biased shuffle",
                &format!("random source returned {j} for range 0..={i}"),
            ));
        };
        let index_value = T::from_usize(i).ok_or_else(|| {
            arithmetic_degeneracy(
                "biased shuffle",
                &format!("index {i} is not representable in the element type"),
            )
        })?;
        if let Some(slot) = working.get_mut(i) {
            *slot = drawn;
        }
        if let Some(slot) = working.get_mut(j) {
            *slot = index_value;
        }
    }
    Ok(working)
}
