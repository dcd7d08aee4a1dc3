//! Crumble SRA
//!
//! Mental Poker (1979) implemented using Shamir–Rivest–Adleman commutative encryption.
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use std::fmt;

use num_bigint::BigUint;
use num_traits::One;
use rand::Rng;

use crate::{CipherError, prime};

/// A card value, either plaintext or carrying one or more encryption layers.
pub type CardValue = BigUint;

pub const MIN_MODULUS_BITS: u64 = 64;

/// Shared prime modulus of a table, together with the exponent group order p-1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modulus {
    p: BigUint,
    order: BigUint,
}

impl Modulus {
    /// Wraps a caller supplied prime. Undersized or composite values are rejected;
    /// primality is checked with Miller-Rabin witnesses drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(p: BigUint, rng: &mut R) -> Result<Self, CipherError> {
        let bits = p.bits();
        if bits < MIN_MODULUS_BITS {
            return Err(CipherError::ModulusTooSmall {
                bits,
                min: MIN_MODULUS_BITS,
            });
        }
        if !prime::is_probable_prime(&p, prime::MILLER_RABIN_ROUNDS, rng) {
            return Err(CipherError::ModulusNotPrime);
        }
        let order = &p - BigUint::one();
        Ok(Self { p, order })
    }

    pub fn generate<R: Rng + ?Sized>(
        bits: u64,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<Self, CipherError> {
        if bits < MIN_MODULUS_BITS {
            return Err(CipherError::ModulusTooSmall {
                bits,
                min: MIN_MODULUS_BITS,
            });
        }
        let p = prime::generate_prime(bits, rng, max_attempts)?;
        Self::new(p, rng)
    }

    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Order of the exponent group, p-1.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    pub fn bits(&self) -> u64 {
        self.p.bits()
    }

    /// Width of a value in bytes when serialised with fixed padding.
    pub fn byte_len(&self) -> usize {
        self.bits().div_ceil(8) as usize
    }
}

/// Encrypt/decrypt exponent pair with `encrypt * decrypt ≡ 1 (mod p-1)`.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    encrypt_exponent: BigUint,
    decrypt_exponent: BigUint,
}

impl KeyPair {
    pub(crate) fn new(encrypt_exponent: BigUint, decrypt_exponent: BigUint) -> Self {
        Self {
            encrypt_exponent,
            decrypt_exponent,
        }
    }

    pub fn encrypt_exponent(&self) -> &BigUint {
        &self.encrypt_exponent
    }

    pub fn decrypt_exponent(&self) -> &BigUint {
        &self.decrypt_exponent
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("encrypt_exponent", &self.encrypt_exponent)
            .field("decrypt_exponent", &"<redacted>")
            .finish()
    }
}
