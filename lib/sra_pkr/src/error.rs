//! Crumble SRA
//!
//! Mental Poker (1979) implemented using Shamir–Rivest–Adleman commutative encryption.
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use sra_cipher::CipherError;
use thiserror::Error;

use crate::poker_deck::PokerCard;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PokerError {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error("table needs between {min} and {max} participants, got {count}")]
    InvalidParticipantCount { count: usize, min: usize, max: usize },

    #[error("participant {0} is not seated at this table")]
    UnknownParticipant(usize),

    #[error("participant {participant} holds no card at position {index}")]
    UnknownCard { participant: usize, index: usize },

    #[error("reference value of {card} collides with another card or a fixed point")]
    ReferenceCollision { card: PokerCard },

    #[error("card value does not resolve to a reference card")]
    UnresolvedCard,

    #[error("deck is exhausted")]
    DeckExhausted,

    #[error("board already holds {0} cards")]
    BoardFull(usize),

    #[error("deck has not been shuffled")]
    NotShuffled,

    #[error("deck has already been shuffled")]
    AlreadyShuffled,

    #[error("strip order must name every other participant exactly once")]
    InvalidStripOrder,

    #[error("participant {participant} failed to strip a card: {reason}")]
    ParticipantFailed { participant: usize, reason: String },

    #[error("card conservation violated: {0}")]
    ConservationViolated(String),

    #[error("participant {participant} acted out of turn, participant {acting} is to act")]
    NotYourTurn { participant: usize, acting: usize },

    #[error("chip amounts do not fit in 64 bits")]
    ChipOverflow,

    #[error("hand is over")]
    GameOver,
}
