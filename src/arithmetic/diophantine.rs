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

//! Solver for two-term linear Diophantine equations `a*x + b*y = c`.

use super::gcd_nonzero;
use num::traits::Zero;
use num::{BigInt, Integer};
use std::fmt::{self, Display};

/// Error returned when an equation `a*x + b*y = c` has no integer solution,
/// i.e. when `gcd(a, b)` doesn't divide `c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsolvableEquation {
    /// Coefficient of `x`.
    pub a: BigInt,
    /// Coefficient of `y`.
    pub b: BigInt,
    /// Right-hand side.
    pub c: BigInt,
}

impl Display for UnsolvableEquation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "No solution to the Diophantine equation {}*x + {}*y = {}",
            self.a, self.b, self.c
        )
    }
}

impl std::error::Error for UnsolvableEquation {}

/// Finds integers `(x, y)` such that `a*x + b*y == c`.
///
/// A solution exists if and only if the gcd of the non-zero coefficients
/// divides `c` (or `c` is zero when both coefficients are). Otherwise, an
/// [`UnsolvableEquation`] error is returned. The returned solution is checked
/// against the equation before being returned.
pub fn solve(a: &BigInt, b: &BigInt, c: &BigInt) -> Result<(BigInt, BigInt), UnsolvableEquation> {
    let unsolvable = || UnsolvableEquation {
        a: a.clone(),
        b: b.clone(),
        c: c.clone(),
    };

    let solvable = match gcd_nonzero([a, b]) {
        Some(g) => c.is_multiple_of(&g),
        None => c.is_zero(),
    };
    if !solvable {
        return Err(unsolvable());
    }

    let (x, y) = solve_inner(a, b, c);
    if a * &x + b * &y != *c {
        return Err(unsolvable());
    }
    Ok((x, y))
}

/// Recursive extended Euclid. The gcd of `(a, b)` is invariant through the
/// recursion, so the precondition checked by [`solve()`] holds at every level.
/// In particular, `b` is never zero when reaching the division: either `a` is
/// then the gcd and divides `c`, or both are zero and so is `c`.
fn solve_inner(a: &BigInt, b: &BigInt, c: &BigInt) -> (BigInt, BigInt) {
    if c.is_zero() {
        return (BigInt::zero(), BigInt::zero());
    }
    if !a.is_zero() && c.is_multiple_of(a) {
        return (c / a, BigInt::zero());
    }
    if !b.is_zero() && c.is_multiple_of(b) {
        return (BigInt::zero(), c / b);
    }

    let (q, r) = a.div_rem(b);
    let (u, v) = solve_inner(b, &r, c);
    let y = u - q * &v;
    (v, y)
}

#[cfg(test)]
mod test {
    use super::*;
    use num::traits::One;
    use rand::distributions::{Distribution, Uniform};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn big(x: i64) -> BigInt {
        BigInt::from(x)
    }

    fn check_solution(a: i64, b: i64, c: i64) {
        let (a, b, c) = (big(a), big(b), big(c));
        let (x, y) = solve(&a, &b, &c).unwrap();
        assert_eq!(&a * &x + &b * &y, c, "Wrong solution ({x}, {y}) for {a}*x + {b}*y = {c}");
    }

    #[test]
    fn test_solve_zero_rhs() {
        assert_eq!(solve(&big(4), &big(3), &big(0)), Ok((big(0), big(0))));
        assert_eq!(solve(&big(0), &big(0), &big(0)), Ok((big(0), big(0))));
    }

    #[test]
    fn test_solve_fast_paths() {
        assert_eq!(solve(&big(4), &big(3), &big(12)), Ok((big(3), big(0))));
        assert_eq!(solve(&big(4), &big(3), &big(9)), Ok((big(0), big(3))));
        assert_eq!(solve(&big(0), &big(5), &big(10)), Ok((big(0), big(2))));
        assert_eq!(solve(&big(5), &big(0), &big(10)), Ok((big(2), big(0))));
    }

    #[test]
    fn test_solve_general() {
        assert_eq!(solve(&big(4), &big(3), &big(7)), Ok((big(7), big(-7))));
        check_solution(4, 3, 7);
        check_solution(3, 4, 7);
        check_solution(27, 11, 5);
        check_solution(101, 64, -13);
        check_solution(-15, 8, 1);
        check_solution(15, -8, -1);
        check_solution(-15, -8, 3);
    }

    #[test]
    fn test_solve_non_coprime() {
        check_solution(6, 10, 4);
        check_solution(12, 18, -30);
    }

    #[test]
    fn test_solve_unsolvable() {
        let err = solve(&big(6), &big(10), &big(3)).unwrap_err();
        assert_eq!(
            err,
            UnsolvableEquation {
                a: big(6),
                b: big(10),
                c: big(3)
            }
        );
        assert_eq!(
            err.to_string(),
            "No solution to the Diophantine equation 6*x + 10*y = 3"
        );
    }

    #[test]
    fn test_solve_unsolvable_zero_coefficients() {
        assert!(solve(&big(0), &big(0), &big(1)).is_err());
        assert!(solve(&big(0), &big(4), &big(2)).is_err());
    }

    #[test]
    fn test_solve_large() {
        let a = BigInt::one() << 200usize;
        let b: BigInt = "1000000000000000000000000000000000000000000000000000000000007"
            .parse()
            .unwrap();
        let c: BigInt = "-123456789123456789123456789123456789".parse().unwrap();
        let (x, y) = solve(&a, &b, &c).unwrap();
        assert_eq!(&a * &x + &b * &y, c);
    }

    #[test]
    fn test_solve_random_coprime() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let dist = Uniform::new_inclusive(-1_000_000i64, 1_000_000);
        let mut count = 0;
        while count < 1000 {
            let a = dist.sample(&mut rng);
            let b = dist.sample(&mut rng);
            let c = dist.sample(&mut rng);
            if gcd_nonzero([big(a), big(b)]) != Some(BigInt::one()) {
                continue;
            }
            check_solution(a, b, c);
            count += 1;
        }
    }
}
