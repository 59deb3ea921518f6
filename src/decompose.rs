// Copyright 2023 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Decomposition of a fraction into a sum of fractions with pairwise coprime
//! denominators.
//!
//! The denominator is split into a coprime pair `d1 * d2`, and a solution of
//! `d1*x + d2*y = numerator` gives `numerator / (d1*d2) = y/d1 + x/d2`. The
//! first term is kept, and the second one is decomposed recursively.

use crate::arithmetic::{solve, UnsolvableEquation};
use crate::factor::{classify_denominator, FactorOptions, Factorization};
use crate::normalize::normalize;
use log::debug;
use num::traits::Zero;
use num::BigRational;
use std::fmt::{self, Display};

/// Options to control the decomposition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecomposeOptions {
    /// Options to split denominators.
    pub factor: FactorOptions,
    /// Whether to move all the integer parts into a single term.
    pub normalize: bool,
}

impl Default for DecomposeOptions {
    fn default() -> Self {
        DecomposeOptions {
            factor: FactorOptions::default(),
            normalize: true,
        }
    }
}

/// Error returned when a decomposition fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecompositionError {
    /// A split step didn't have a solution.
    Unsolvable(UnsolvableEquation),
    /// The terms don't add up to the decomposed value.
    SumMismatch {
        /// The decomposed value.
        expected: BigRational,
        /// The sum of the terms.
        actual: BigRational,
    },
}

impl Display for DecompositionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecompositionError::Unsolvable(e) => Display::fmt(e, f),
            DecompositionError::SumMismatch { expected, actual } => {
                write!(f, "Terms sum to {actual} instead of {expected}")
            }
        }
    }
}

impl std::error::Error for DecompositionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecompositionError::Unsolvable(e) => Some(e),
            DecompositionError::SumMismatch { .. } => None,
        }
    }
}

impl From<UnsolvableEquation> for DecompositionError {
    fn from(e: UnsolvableEquation) -> Self {
        DecompositionError::Unsolvable(e)
    }
}

/// Decomposes a value into a list of fractions with pairwise coprime
/// denominators, whose sum is the value.
///
/// Each denominator in the result is either one, or could not be split further
/// (a prime, a prime power, or a number without any factor below the trial
/// division bound). Zero decomposes into an empty list.
pub fn decompose(
    value: &BigRational,
    options: &DecomposeOptions,
) -> Result<Vec<BigRational>, DecompositionError> {
    let mut terms = decompose_terms(value, &options.factor)?;
    if options.normalize {
        normalize(&mut terms);
    }

    let sum: BigRational = terms.iter().sum();
    if sum != *value {
        return Err(DecompositionError::SumMismatch {
            expected: value.clone(),
            actual: sum,
        });
    }
    debug!("Decomposed {value} into {} term(s)", terms.len());
    Ok(terms)
}

/// Recursively splits the value, without normalizing the integer parts.
pub fn decompose_terms(
    value: &BigRational,
    options: &FactorOptions,
) -> Result<Vec<BigRational>, UnsolvableEquation> {
    if value.is_zero() {
        return Ok(Vec::new());
    }

    let split = match classify_denominator(value.denom(), options) {
        Factorization::Split(split) => split,
        reason => {
            debug!("Keeping {value} ({reason})");
            return Ok(vec![value.clone()]);
        }
    };

    let (d1, d2) = (split.prime_power, split.rest);
    let (x, y) = solve(&d1, &d2, value.numer())?;
    let head = BigRational::new(y, d1);
    let tail = BigRational::new(x, d2);
    debug!("Split {value} into {head} + {tail}");

    let mut terms = vec![head];
    terms.extend(decompose_terms(&tail, options)?);
    Ok(terms)
}
