//! Crumble SRA
//!
//! Mental Poker (1979) implemented using Shamir–Rivest–Adleman commutative encryption.
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use std::{collections::HashMap, fmt};

use alloy_primitives::{B256, Keccak256, keccak256};
use num_bigint::BigUint;
use rand::{Rng, seq::SliceRandom};
use sra_cipher::{
    cipher,
    types::{CardValue, KeyPair, Modulus},
};

use crate::PokerError;

pub const DECK_SIZE: usize = 52;

const RANKS: &[u8; 13] = b"23456789TJQKA";
const SUITS: &[u8; 4] = b"scdh";

/// Card identity 0..51, `rank = id / 4`, `suit = id % 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PokerCard(u8);

impl PokerCard {
    pub fn new(id: u8) -> Option<Self> {
        (usize::from(id) < DECK_SIZE).then_some(Self(id))
    }

    pub const fn id(&self) -> u8 {
        self.0
    }

    /// 0 is a two, 12 is an ace.
    pub const fn rank(&self) -> u8 {
        self.0 / 4
    }

    /// Spades, clubs, diamonds, hearts.
    pub const fn suit(&self) -> u8 {
        self.0 % 4
    }
}

impl fmt::Display for PokerCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = RANKS[usize::from(self.rank())] as char;
        let suit = SUITS[usize::from(self.suit())] as char;
        write!(f, "{}{}", rank, suit)
    }
}

/// Reference deck binding each identity to a plaintext value mod p.
///
/// Values are squares of the card name's Keccak digest, so all of them are
/// quadratic residues and a ciphertext's residuosity says nothing about its card.
#[derive(Clone, Debug)]
pub struct PokerDeck {
    poker_cards: Vec<PokerCard>,
    card_values: Vec<CardValue>,
    card_index: HashMap<CardValue, usize>,
}

impl PokerDeck {
    pub fn new(modulus: &Modulus) -> Result<Self, PokerError> {
        let poker_cards: Vec<PokerCard> = (0..DECK_SIZE as u8).map(PokerCard).collect();
        let two = BigUint::from(2u32);

        let card_values: Vec<CardValue> = poker_cards
            .iter()
            .map(|card| {
                let digest = keccak256(card.to_string().as_bytes());
                let value = BigUint::from_bytes_be(digest.as_slice()) % modulus.p();
                // odd exponents keep the Legendre symbol, so every card must share it
                value.modpow(&two, modulus.p())
            })
            .collect();

        // 0, 1 and p-1 are fixed points of odd exponents
        let lowest = BigUint::from(2u32);
        let highest = modulus.order() - 1u32;

        let mut card_index = HashMap::with_capacity(DECK_SIZE);
        for (index, value) in card_values.iter().enumerate() {
            if *value < lowest || *value > highest || card_index.insert(value.clone(), index).is_some()
            {
                return Err(PokerError::ReferenceCollision {
                    card: poker_cards[index],
                });
            }
        }

        Ok(Self {
            poker_cards,
            card_values,
            card_index,
        })
    }

    pub fn find_card(&self, revealed: &CardValue) -> Option<PokerCard> {
        self.card_index
            .get(revealed)
            .and_then(|&index| self.poker_cards.get(index).copied())
    }

    pub fn value_of(&self, card: PokerCard) -> &CardValue {
        &self.card_values[usize::from(card.id())]
    }

    pub fn cards(&self) -> &[CardValue] {
        &self.card_values
    }

    pub fn masked_cards(&self) -> MaskedCards {
        MaskedCards::new(self.card_values.clone())
    }
}

/// Working deck: every slot carries zero or more encryption layers.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct MaskedCards {
    cards: Vec<CardValue>,
}

impl MaskedCards {
    pub fn new(cards: Vec<CardValue>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[CardValue] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn encrypt(&mut self, exponent: &BigUint, modulus: &Modulus) {
        self.cards
            .iter_mut()
            .for_each(|card| *card = cipher::encrypt(card, exponent, modulus));
    }

    pub fn mask(&mut self, key: &KeyPair, modulus: &Modulus) {
        self.encrypt(key.encrypt_exponent(), modulus);
    }

    /// Fisher-Yates over all remaining slots.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn find_card(&self, value: &CardValue) -> Option<usize> {
        self.cards.iter().position(|card| card == value)
    }

    /// Keccak commitment over the slots, each padded to `width` bytes.
    pub fn hash(&self, width: usize) -> B256 {
        let mut hasher = Keccak256::new();
        for card in &self.cards {
            let bytes = card.to_bytes_be();
            let padding = width.saturating_sub(bytes.len());
            hasher.update(vec![0u8; padding]);
            hasher.update(&bytes);
        }
        hasher.finalize()
    }

    pub fn front(&self) -> Option<&CardValue> {
        self.cards.first()
    }

    pub fn pop_front(&mut self) -> Option<CardValue> {
        if self.cards.is_empty() {
            return None;
        }
        Some(self.cards.remove(0))
    }

    /// Removes up to `count` slots from the top of the deck.
    pub fn drain_front(&mut self, count: usize) -> Vec<CardValue> {
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }
}

/// Cards held by one participant, still carrying the holder's own layer.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct UnmaskedCards {
    cards: Vec<CardValue>,
}

impl UnmaskedCards {
    pub fn new(cards: Vec<CardValue>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[CardValue] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&CardValue> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn push(&mut self, card: CardValue) {
        self.cards.push(card);
    }
}
