//! Crumble SRA
//!
//! Mental Poker (1979) implemented using Shamir–Rivest–Adleman commutative encryption.
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;

use crate::CipherError;

/// Trial divisors run before any Miller-Rabin round.
const SMALL_PRIMES: [u32; 24] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
];

/// Miller-Rabin rounds used when validating or generating a modulus.
pub const MILLER_RABIN_ROUNDS: usize = 40;

/// Miller-Rabin with `rounds` witnesses drawn uniformly from `[2, n-2]`.
///
/// A composite passes with probability at most `4^-rounds`, whoever chose it.
pub fn is_probable_prime<R: Rng + ?Sized>(n: &BigUint, rounds: usize, rng: &mut R) -> bool {
    let one = BigUint::one();
    if n <= &one {
        return false;
    }

    for &small in SMALL_PRIMES.iter() {
        let small = BigUint::from(small);
        if n == &small {
            return true;
        }
        if (n % &small).is_zero() {
            return false;
        }
    }

    let two = BigUint::from(2u32);
    let n_minus_one = n - &one;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

/// Draws random odd `bits`-wide candidates until one passes the primality test.
pub fn generate_prime<R: Rng + ?Sized>(
    bits: u64,
    rng: &mut R,
    max_attempts: usize,
) -> Result<BigUint, CipherError> {
    if bits < 2 {
        return Err(CipherError::PrimeGenerationExhausted {
            bits,
            attempts: 0,
        });
    }

    let top_bit = BigUint::one() << (bits - 1);
    for _ in 0..max_attempts {
        let candidate = rng.gen_biguint(bits) | &top_bit | BigUint::one();
        if is_probable_prime(&candidate, MILLER_RABIN_ROUNDS, rng) {
            return Ok(candidate);
        }
    }

    Err(CipherError::PrimeGenerationExhausted {
        bits,
        attempts: max_attempts,
    })
}
