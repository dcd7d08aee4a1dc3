//! Crumble SRA
//!
//! Mental Poker (1979) implemented using Shamir–Rivest–Adleman commutative encryption.
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("no exponent coprime to p-1 found after {attempts} attempts")]
    KeyGenerationExhausted { attempts: usize },

    #[error("no {bits}-bit prime found after {attempts} attempts")]
    PrimeGenerationExhausted { bits: u64, attempts: usize },

    #[error("modulus has {bits} bits, at least {min} required")]
    ModulusTooSmall { bits: u64, min: u64 },

    #[error("modulus is not prime")]
    ModulusNotPrime,

    #[error("value has no inverse modulo p-1")]
    NotInvertible,
}
