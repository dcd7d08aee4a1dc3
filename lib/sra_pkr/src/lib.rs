//! Crumble SRA
//!
//! Mental Poker (1979) implemented using Shamir–Rivest–Adleman commutative encryption.
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

pub mod error;
pub mod poker_bets;
pub mod poker_config;
pub mod poker_deck;
pub mod poker_hand;
pub mod poker_player;
pub mod poker_rank;
pub mod poker_state;
pub mod poker_table;

pub use error::PokerError;
