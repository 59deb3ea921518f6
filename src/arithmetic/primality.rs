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

//! Miller-Rabin probabilistic primality test.

use num::bigint::RandBigInt;
use num::traits::One;
use num::{BigInt, Integer};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed of the generator used by [`is_probably_prime()`], so that the chosen
/// bases are the same from one run to the next.
const PRIMALITY_SEED: u64 = 0x6d69_6c6c_6572_7261;

/// Tests whether `n` is prime with `rounds` Miller-Rabin trials, using bases
/// drawn from a deterministically seeded generator.
///
/// A `false` result is definitive. A `true` result is wrong with probability
/// at most `4^(-rounds)`.
pub fn is_probably_prime(n: &BigInt, rounds: usize) -> bool {
    let mut rng = ChaCha8Rng::seed_from_u64(PRIMALITY_SEED);
    is_probably_prime_with_rng(n, rounds, &mut rng)
}

/// Same as [`is_probably_prime()`], drawing the trial bases from the given
/// random number generator.
pub fn is_probably_prime_with_rng<R: Rng + ?Sized>(
    n: &BigInt,
    rounds: usize,
    rng: &mut R,
) -> bool {
    let two = BigInt::from(2);
    if n < &two {
        return false;
    }
    if n <= &BigInt::from(3) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n - 1 = d * 2^s with d odd.
    let n_minus_one: BigInt = n - 1;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'trials: for _ in 0..rounds {
        let base = rng.gen_bigint_range(&two, &n_minus_one);
        let mut x = base.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'trials;
            }
            if x.is_one() {
                // Non-trivial square root of one.
                return false;
            }
        }
        return false;
    }
    true
}
