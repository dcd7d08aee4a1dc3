//! Crumble SRA
//!
//! Mental Poker (1979) implemented using Shamir–Rivest–Adleman commutative encryption.
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};
use sra_cipher::{
    cipher,
    types::{CardValue, KeyPair, Modulus},
};

use crate::{PokerError, poker_config::ShuffleMode, poker_deck::MaskedCards};

/// What the table may ask of a seated participant.
///
/// The table never sees a decrypt exponent; it only hands values over and
/// takes back the result, so an implementation may live behind any channel.
pub trait Participant: fmt::Debug {
    /// Adds this participant's layer to every slot, then permutes the slots.
    fn layer_deck(&mut self, deck: MaskedCards, mode: ShuffleMode) -> MaskedCards;

    /// Removes this participant's layer from one value.
    fn strip(&self, value: &CardValue) -> Result<CardValue, PokerError>;
}

/// Participant whose key lives in this process.
pub struct LocalParticipant {
    key: KeyPair,
    modulus: Modulus,
    rng: StdRng,
}

impl LocalParticipant {
    /// Draws a key pair and seeds a private shuffle RNG from `rng`.
    pub fn new<R: Rng + ?Sized>(
        modulus: &Modulus,
        rng: &mut R,
        max_key_attempts: usize,
    ) -> Result<Self, PokerError> {
        let key = cipher::generate_key_pair(modulus, rng, max_key_attempts)?;

        let mut seed = <StdRng as SeedableRng>::Seed::default();
        rng.fill(&mut seed);

        Ok(Self {
            key,
            modulus: modulus.clone(),
            rng: StdRng::from_seed(seed),
        })
    }
}

impl fmt::Debug for LocalParticipant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalParticipant")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl Participant for LocalParticipant {
    fn layer_deck(&mut self, mut deck: MaskedCards, mode: ShuffleMode) -> MaskedCards {
        deck.mask(&self.key, &self.modulus);
        if mode == ShuffleMode::Random {
            deck.shuffle(&mut self.rng);
        }
        deck
    }

    fn strip(&self, value: &CardValue) -> Result<CardValue, PokerError> {
        Ok(cipher::unmask(value, &self.key, &self.modulus))
    }
}
