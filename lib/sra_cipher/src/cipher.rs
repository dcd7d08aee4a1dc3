//! Crumble SRA
//!
//! Mental Poker (1979) implemented using Shamir–Rivest–Adleman commutative encryption.
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use num_bigint::{BigUint, RandBigInt};
use rand::Rng;

use crate::{
    CipherError,
    types::{CardValue, KeyPair, Modulus},
    util::{is_coprime, mod_inverse},
};

/// Draws an encrypt exponent coprime to p-1 and derives its decrypt exponent.
pub fn generate_key_pair<R: Rng + ?Sized>(
    modulus: &Modulus,
    rng: &mut R,
    max_attempts: usize,
) -> Result<KeyPair, CipherError> {
    let order = modulus.order();
    let lower = BigUint::from(3u32);

    for _ in 0..max_attempts {
        let c = rng.gen_biguint_range(&lower, order);
        if !is_coprime(&c, order) {
            continue;
        }
        let d = mod_inverse(&c, order).ok_or(CipherError::NotInvertible)?;
        return Ok(KeyPair::new(c, d));
    }

    Err(CipherError::KeyGenerationExhausted {
        attempts: max_attempts,
    })
}

/// v^C mod p
pub fn encrypt(value: &CardValue, exponent: &BigUint, modulus: &Modulus) -> CardValue {
    value.modpow(exponent, modulus.p())
}

/// v^D mod p
pub fn decrypt(value: &CardValue, exponent: &BigUint, modulus: &Modulus) -> CardValue {
    value.modpow(exponent, modulus.p())
}

pub fn mask(value: &CardValue, key: &KeyPair, modulus: &Modulus) -> CardValue {
    encrypt(value, key.encrypt_exponent(), modulus)
}

pub fn unmask(value: &CardValue, key: &KeyPair, modulus: &Modulus) -> CardValue {
    decrypt(value, key.decrypt_exponent(), modulus)
}
