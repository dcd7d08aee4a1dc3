//! Crumble SRA
//!
//! Mental Poker (1979) implemented using Shamir–Rivest–Adleman commutative encryption.
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use std::fmt;

/// Betting phases of one hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Phase {
    pub const fn next(self) -> Option<Phase> {
        match self {
            Phase::PreFlop => Some(Phase::Flop),
            Phase::Flop => Some(Phase::Turn),
            Phase::Turn => Some(Phase::River),
            Phase::River => Some(Phase::Showdown),
            Phase::Showdown => None,
        }
    }

    /// Board cards dealt when the phase is entered.
    pub const fn board_cards_on_entry(self) -> usize {
        match self {
            Phase::Flop => 3,
            Phase::Turn | Phase::River => 1,
            Phase::PreFlop | Phase::Showdown => 0,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Showdown)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Phase::PreFlop => "Pre-Flop",
            Phase::Flop => "Flop",
            Phase::Turn => "Turn",
            Phase::River => "River",
            Phase::Showdown => "Showdown",
        };
        f.write_str(text)
    }
}

/// Turn bookkeeping: who acts, who closes the round, which phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PokerHandState {
    pub(super) num_players: usize,
    pub(super) action_player: usize,
    pub(super) last_raiser: usize,
    pub(super) phase: Phase,
    pub(super) game_over: bool,
}

impl PokerHandState {
    pub const fn new(num_players: usize) -> Self {
        Self {
            num_players,
            action_player: 0,
            last_raiser: 0,
            phase: Phase::PreFlop,
            game_over: false,
        }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub const fn action_player(&self) -> usize {
        self.action_player
    }

    pub const fn last_raiser(&self) -> usize {
        self.last_raiser
    }

    /// First seat after `player` that is not folded, wrapping around.
    pub fn next_player_masked(&self, player: usize, folded: &[bool]) -> Option<usize> {
        (1..=self.num_players)
            .map(|step| (player + step) % self.num_players)
            .find(|&seat| !folded[seat])
    }

    /// First unfolded seat counting from seat 0.
    pub fn first_player_masked(&self, folded: &[bool]) -> Option<usize> {
        (0..self.num_players).find(|&seat| !folded[seat])
    }

    pub fn start_round(&mut self, phase: Phase, first_player: usize) {
        self.phase = phase;
        self.action_player = first_player;
        self.last_raiser = first_player;
    }

    pub fn finish(&mut self) {
        self.phase = Phase::Showdown;
        self.game_over = true;
    }
}
