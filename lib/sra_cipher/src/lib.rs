//! Crumble SRA
//!
//! Mental Poker (1979) implemented using Shamir–Rivest–Adleman commutative encryption.
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

pub mod cipher;
pub mod error;
pub mod prime;
pub mod types;
pub mod util;

pub use error::CipherError;
