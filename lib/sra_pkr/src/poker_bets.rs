//! Crumble SRA
//!
//! Mental Poker (1979) implemented using Shamir–Rivest–Adleman commutative encryption.
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use std::fmt;

use crate::{PokerError, poker_rank::HandRank};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PokerAction {
    Fold,
    /// Also a check when nothing is owed.
    Call,
    Raise,
}

impl fmt::Display for PokerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PokerAction::Fold => "Fold",
            PokerAction::Call => "Call",
            PokerAction::Raise => "Raise",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaiseOutcome {
    Raised { paid: u64 },
    /// Stack too short for the increment: everything goes in, wager unchanged.
    AllIn { paid: u64 },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    chips: u64,
    bet: u64,
    committed: u64,
    folded: bool,
    all_in: bool,
    is_winner: bool,
    hand_rank: Option<HandRank>,
    hand_desc: Option<String>,
}

impl PlayerState {
    fn new(chips: u64) -> Self {
        Self {
            chips,
            ..Self::default()
        }
    }

    pub const fn chips(&self) -> u64 {
        self.chips
    }

    /// Amount put in during the current betting round.
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Amount put in during the whole hand.
    pub const fn committed(&self) -> u64 {
        self.committed
    }

    pub const fn is_folded(&self) -> bool {
        self.folded
    }

    pub const fn is_all_in(&self) -> bool {
        self.all_in
    }

    pub const fn is_winner(&self) -> bool {
        self.is_winner
    }

    pub const fn hand_rank(&self) -> Option<HandRank> {
        self.hand_rank
    }

    pub fn hand_desc(&self) -> Option<&str> {
        self.hand_desc.as_deref()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PokerBettingState {
    players: Vec<PlayerState>,
    pot: u64,
    current_wager: u64,
    raise_increment: u64,
}

impl PokerBettingState {
    pub fn new(
        num_players: usize,
        initial_chips: u64,
        raise_increment: u64,
    ) -> Result<Self, PokerError> {
        Self::with_stacks(vec![initial_chips; num_players], raise_increment)
    }

    /// Seats players with the given stacks.
    ///
    /// Fails when the chips on the table, or a stack plus one raise increment,
    /// would not fit in a `u64`; past this check no pot or wager sum can overflow.
    pub fn with_stacks(stacks: Vec<u64>, raise_increment: u64) -> Result<Self, PokerError> {
        let total = stacks
            .iter()
            .try_fold(0u64, |total, &chips| total.checked_add(chips))
            .ok_or(PokerError::ChipOverflow)?;
        let largest = stacks.iter().copied().max().unwrap_or(0);
        largest
            .checked_add(raise_increment)
            .ok_or(PokerError::ChipOverflow)?;

        tracing::debug!(players = stacks.len(), total, raise_increment, "betting state seated");

        Ok(Self {
            players: stacks.into_iter().map(PlayerState::new).collect(),
            pot: 0,
            current_wager: 0,
            raise_increment,
        })
    }

    pub fn player(&self, player: usize) -> Option<&PlayerState> {
        self.players.get(player)
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub const fn pot(&self) -> u64 {
        self.pot
    }

    pub const fn current_wager(&self) -> u64 {
        self.current_wager
    }

    pub fn call_amount_required(&self, player: usize) -> u64 {
        self.current_wager.saturating_sub(self.players[player].bet)
    }

    pub fn folded_mask(&self) -> Vec<bool> {
        self.players.iter().map(|p| p.folded).collect()
    }

    pub fn active_players(&self) -> Vec<usize> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.folded)
            .map(|(player, _)| player)
            .collect()
    }

    pub fn fold(&mut self, player: usize) {
        self.players[player].folded = true;
    }

    /// Matches the wager, or goes all-in when the stack is short.
    pub fn call(&mut self, player: usize) -> u64 {
        let needed = self
            .call_amount_required(player)
            .min(self.players[player].chips);
        self.pay(player, needed);
        needed
    }

    pub fn raise(&mut self, player: usize) -> Result<RaiseOutcome, PokerError> {
        let target = self
            .current_wager
            .checked_add(self.raise_increment)
            .ok_or(PokerError::ChipOverflow)?;
        let needed = target.saturating_sub(self.players[player].bet);
        let chips = self.players[player].chips;

        if needed > chips {
            self.pay(player, chips);
            return Ok(RaiseOutcome::AllIn { paid: chips });
        }

        self.pay(player, needed);
        self.current_wager = self.players[player].bet;
        Ok(RaiseOutcome::Raised { paid: needed })
    }

    fn pay(&mut self, player: usize, amount: u64) {
        let state = &mut self.players[player];
        state.chips -= amount;
        state.bet += amount;
        state.committed += amount;
        if state.chips == 0 {
            state.all_in = true;
        }
        self.pot += amount;
    }

    /// Every unfolded player that still has chips has matched the wager.
    pub fn is_round_settled(&self) -> bool {
        self.players
            .iter()
            .filter(|p| !p.folded && !p.all_in)
            .all(|p| p.bet == self.current_wager)
    }

    /// Resets the per-round bets for the next phase.
    pub fn next_street(&mut self) {
        self.players.iter_mut().for_each(|p| p.bet = 0);
        self.current_wager = 0;
    }

    pub fn set_hand(&mut self, player: usize, rank: HandRank, desc: String) {
        let state = &mut self.players[player];
        state.hand_rank = Some(rank);
        state.hand_desc = Some(desc);
    }

    /// Splits the pot evenly; odd chips go one each to the lowest seats.
    pub fn award_pot(&mut self, winners: &[usize]) -> Vec<(usize, u64)> {
        if winners.is_empty() {
            return vec![];
        }

        let mut winners = winners.to_vec();
        winners.sort_unstable();
        winners.dedup();

        let count = winners.len() as u64;
        let share = self.pot / count;
        let remainder = self.pot % count;

        let payouts: Vec<(usize, u64)> = winners
            .iter()
            .enumerate()
            .map(|(i, &player)| {
                let extra = u64::from((i as u64) < remainder);
                (player, share + extra)
            })
            .collect();

        for &(player, amount) in &payouts {
            let state = &mut self.players[player];
            state.chips += amount;
            state.is_winner = true;
        }
        self.pot = 0;

        payouts
    }
}
