//! Crumble SRA
//!
//! Mental Poker (1979) implemented using Shamir–Rivest–Adleman commutative encryption.
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use std::fmt;

use crate::poker_deck::PokerCard;

/// Hand categories, weakest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };
        f.write_str(text)
    }
}

pub trait HandEvaluator {
    fn evaluate(&self, cards: &[PokerCard]) -> (HandRank, String);
}

/// Category-only evaluator; kickers are not compared.
#[derive(Clone, Copy, Debug, Default)]
pub struct CategoryEvaluator;

impl HandEvaluator for CategoryEvaluator {
    fn evaluate(&self, cards: &[PokerCard]) -> (HandRank, String) {
        let rank = classify(cards);
        (rank, rank.to_string())
    }
}

pub fn classify(cards: &[PokerCard]) -> HandRank {
    let mut rank_counts = [0u8; 13];
    let mut suit_masks = [0u16; 4];
    let mut rank_mask = 0u16;

    for card in cards {
        rank_counts[usize::from(card.rank())] += 1;
        suit_masks[usize::from(card.suit())] |= 1 << card.rank();
        rank_mask |= 1 << card.rank();
    }

    if suit_masks.iter().any(|&mask| has_straight(mask)) {
        return HandRank::StraightFlush;
    }

    let count_of = |n: u8| rank_counts.iter().filter(|&&c| c == n).count();
    let quads = rank_counts.iter().filter(|&&c| c >= 4).count();
    let trips = count_of(3);
    let pairs = count_of(2);
    let is_flush = suit_masks.iter().any(|mask| mask.count_ones() >= 5);

    if quads > 0 {
        HandRank::FourOfAKind
    } else if trips > 1 || (trips > 0 && pairs > 0) {
        HandRank::FullHouse
    } else if is_flush {
        HandRank::Flush
    } else if has_straight(rank_mask) {
        HandRank::Straight
    } else if trips > 0 {
        HandRank::ThreeOfAKind
    } else if pairs > 1 {
        HandRank::TwoPair
    } else if pairs == 1 {
        HandRank::Pair
    } else {
        HandRank::HighCard
    }
}

/// Five consecutive ranks in a 13-bit rank mask; the ace also plays low.
fn has_straight(mask: u16) -> bool {
    let ace_low = (mask >> 12) & 1;
    let extended = (mask << 1) | ace_low;
    (0..=9).any(|low| (extended >> low) & 0b11111 == 0b11111)
}
