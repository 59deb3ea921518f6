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

//! Module to split a denominator into two coprime factors.
//!
//! The search for a factor is a bounded trial division: a denominator without
//! any factor below [`FactorOptions::trial_division_bound`] is considered
//! unsplittable, even if it is composite. Making the search complete would
//! change the termination and performance guarantees of the decomposition.

use crate::arithmetic::is_probably_prime;
use log::trace;
use num::traits::{One, Zero};
use num::BigInt;
use std::fmt::{self, Display};

/// Options to control the factorization of denominators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactorOptions {
    /// Largest candidate factor tried by trial division.
    pub trial_division_bound: u64,
    /// Number of Miller-Rabin rounds used to skip the trial division for prime
    /// denominators.
    pub primality_rounds: usize,
}

impl Default for FactorOptions {
    fn default() -> Self {
        FactorOptions {
            trial_division_bound: 10_000,
            primality_rounds: 100,
        }
    }
}

/// Split of an integer `n` into `prime_power * rest == n`, where both parts
/// are greater than one and coprime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoprimeSplit {
    /// All the copies of the smallest prime factor of `n`.
    pub prime_power: BigInt,
    /// The remaining cofactor.
    pub rest: BigInt,
}

/// Outcome of the search for a coprime split of a denominator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Factorization {
    /// The denominator can be split.
    Split(CoprimeSplit),
    /// The denominator is one (or not positive), there is nothing to split.
    Unit,
    /// The denominator is (probably) prime.
    Prime,
    /// The denominator is a power of its smallest prime factor.
    PrimePower {
        /// The prime factor.
        prime: u64,
        /// Its multiplicity.
        exponent: usize,
    },
    /// No factor was found below the trial division bound.
    NoSmallFactor,
}

impl Factorization {
    /// Discards the reason why no split was found.
    pub fn into_split(self) -> Option<CoprimeSplit> {
        match self {
            Factorization::Split(split) => Some(split),
            Factorization::Unit
            | Factorization::Prime
            | Factorization::PrimePower { .. }
            | Factorization::NoSmallFactor => None,
        }
    }
}

impl Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Factorization::Split(split) => write!(f, "{} x {}", split.prime_power, split.rest),
            Factorization::Unit => f.write_str("unit"),
            Factorization::Prime => f.write_str("prime"),
            Factorization::PrimePower { prime, exponent } => {
                write!(f, "prime power {prime}^{exponent}")
            }
            Factorization::NoSmallFactor => f.write_str("no small factor"),
        }
    }
}

/// Finds a coprime split `(d1, d2)` of `n`, with `d1 * d2 == n`, `d1, d2 > 1`
/// and `gcd(d1, d2) == 1`. Returns [`None`] if `n` is prime, a prime power,
/// or if it has no factor below the trial division bound.
pub fn find_coprime_split(n: &BigInt, options: &FactorOptions) -> Option<(BigInt, BigInt)> {
    classify_denominator(n, options)
        .into_split()
        .map(|split| (split.prime_power, split.rest))
}

/// Same as [`find_coprime_split()`], but also reports why no split was found.
pub fn classify_denominator(n: &BigInt, options: &FactorOptions) -> Factorization {
    let result = classify_impl(n, options);
    trace!("Denominator {n}: {result}");
    result
}

fn classify_impl(n: &BigInt, options: &FactorOptions) -> Factorization {
    if n <= &BigInt::one() {
        return Factorization::Unit;
    }
    if is_probably_prime(n, options.primality_rounds) {
        return Factorization::Prime;
    }

    let factor = match smallest_factor(n, options.trial_division_bound) {
        Some(factor) => factor,
        None => return Factorization::NoSmallFactor,
    };

    // Absorb all the copies of the smallest factor into the first part.
    let mut prime_power = BigInt::from(factor);
    let mut exponent = 1;
    loop {
        let next = &prime_power * factor;
        if !(n % &next).is_zero() {
            break;
        }
        prime_power = next;
        exponent += 1;
    }

    let rest = n / &prime_power;
    if rest.is_one() {
        Factorization::PrimePower {
            prime: factor,
            exponent,
        }
    } else {
        Factorization::Split(CoprimeSplit { prime_power, rest })
    }
}

/// Returns the smallest factor `f` of `n` such that `2 <= f <= bound` and
/// `f * f < n`, if any. The square of a prime is therefore never split, which
/// is harmless as it has no coprime split anyway.
fn smallest_factor(n: &BigInt, bound: u64) -> Option<u64> {
    (2..=bound)
        .take_while(|&f| BigInt::from(f) * f < *n)
        .find(|&f| (n % f).is_zero())
}
