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

//! Module providing the integer arithmetic needed to split fractions: greatest
//! common divisors, two-term linear Diophantine equations and probabilistic
//! primality testing.

pub mod diophantine;
pub mod primality;

pub use diophantine::{solve, UnsolvableEquation};
pub use primality::{is_probably_prime, is_probably_prime_with_rng};

use num::traits::{Signed, Zero};
use num::{BigInt, Integer};
use std::borrow::Borrow;

/// Computes the greatest common divisor of the non-zero values among the
/// inputs. Returns [`None`] if there is no such value, i.e. if all the inputs
/// are zero or if there are no inputs at all.
///
/// The result is always positive.
pub fn gcd_nonzero<B: Borrow<BigInt>>(values: impl IntoIterator<Item = B>) -> Option<BigInt> {
    values
        .into_iter()
        .filter(|x| !x.borrow().is_zero())
        .fold(None, |acc, x| match acc {
            None => Some(x.borrow().abs()),
            Some(g) => Some(g.gcd(x.borrow())),
        })
}

#[cfg(test)]
mod test {
    use super::*;

    fn big(x: i64) -> BigInt {
        BigInt::from(x)
    }

    #[test]
    fn test_gcd_nonzero_empty() {
        assert_eq!(gcd_nonzero(Vec::<BigInt>::new()), None);
    }

    #[test]
    fn test_gcd_nonzero_all_zeros() {
        assert_eq!(gcd_nonzero([big(0), big(0), big(0)]), None);
    }

    #[test]
    fn test_gcd_nonzero_single() {
        assert_eq!(gcd_nonzero([big(42)]), Some(big(42)));
        assert_eq!(gcd_nonzero([big(-42)]), Some(big(42)));
    }

    #[test]
    fn test_gcd_nonzero_ignores_zeros() {
        assert_eq!(gcd_nonzero([big(0), big(12), big(0), big(18)]), Some(big(6)));
        assert_eq!(gcd_nonzero([big(-12), big(0), big(-18)]), Some(big(6)));
    }

    #[test]
    fn test_gcd_nonzero_references() {
        let values = [big(35), big(21), big(0)];
        assert_eq!(gcd_nonzero(values.iter()), Some(big(7)));
    }

    #[test]
    fn test_gcd_nonzero_coprime() {
        assert_eq!(gcd_nonzero([big(8), big(27)]), Some(big(1)));
    }
}
