//! Crumble SRA
//!
//! Mental Poker (1979) implemented using Shamir–Rivest–Adleman commutative encryption.
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use std::time::Instant;

use rand::Rng;

use crate::{
    PokerError,
    poker_bets::{PlayerState, PokerAction, PokerBettingState, RaiseOutcome},
    poker_config::{HOLE_CARDS, TableConfig, TimeoutAction},
    poker_rank::{CategoryEvaluator, HandEvaluator, HandRank},
    poker_state::{Phase, PokerHandState},
    poker_table::PokerTable,
};

/// One hand of Hold'em: the table plus the betting state machine driving it.
pub struct PokerHand {
    table: PokerTable,
    evaluator: Box<dyn HandEvaluator>,
    betting_state: PokerBettingState,
    current_state: PokerHandState,
    turn_started: Instant,
}

impl PokerHand {
    /// Creates a table, shuffles, and deals two private cards to everyone.
    pub fn start<R: Rng + ?Sized>(config: TableConfig, rng: &mut R) -> Result<Self, PokerError> {
        let table = PokerTable::new(config, rng)?;
        Self::with_table(table, Box::new(CategoryEvaluator))
    }

    /// Starts a hand on a freshly built, not yet shuffled table.
    pub fn with_table(
        table: PokerTable,
        evaluator: Box<dyn HandEvaluator>,
    ) -> Result<Self, PokerError> {
        let num_players = table.num_participants();
        let config = table.config();
        let betting_state =
            PokerBettingState::new(num_players, config.initial_chips, config.raise_increment)?;
        let table = Self::deal_hole_cards(table)?;

        tracing::info!(players = num_players, "hand started");

        Ok(Self {
            table,
            evaluator,
            betting_state,
            current_state: PokerHandState::new(num_players),
            turn_started: Instant::now(),
        })
    }

    /// Throws the hand away and starts over with new keys, a new deck and full stacks.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PokerError> {
        let config = self.table.config().clone();
        let num_players = config.num_participants;
        let betting_state =
            PokerBettingState::new(num_players, config.initial_chips, config.raise_increment)?;
        let table = Self::deal_hole_cards(PokerTable::new(config, rng)?)?;

        self.betting_state = betting_state;
        self.current_state = PokerHandState::new(num_players);
        self.table = table;
        self.turn_started = Instant::now();

        tracing::info!(players = num_players, "hand restarted");

        Ok(())
    }

    fn deal_hole_cards(mut table: PokerTable) -> Result<PokerTable, PokerError> {
        table.full_shuffle()?;
        for _ in 0..HOLE_CARDS {
            for player in 0..table.num_participants() {
                table.deal_card_to_player(player)?;
            }
        }
        Ok(table)
    }

    pub const fn table(&self) -> &PokerTable {
        &self.table
    }

    pub const fn phase(&self) -> Phase {
        self.current_state.phase()
    }

    pub const fn is_game_over(&self) -> bool {
        self.current_state.is_game_over()
    }

    pub const fn acting_participant(&self) -> usize {
        self.current_state.action_player()
    }

    pub const fn last_raiser(&self) -> usize {
        self.current_state.last_raiser()
    }

    pub const fn pot(&self) -> u64 {
        self.betting_state.pot()
    }

    pub const fn current_wager(&self) -> u64 {
        self.betting_state.current_wager()
    }

    pub fn player(&self, player: usize) -> Option<&PlayerState> {
        self.betting_state.player(player)
    }

    pub fn players(&self) -> &[PlayerState] {
        self.betting_state.players()
    }

    pub fn call_amount_required(&self, player: usize) -> Result<u64, PokerError> {
        if player >= self.table.num_participants() {
            return Err(PokerError::UnknownParticipant(player));
        }
        Ok(self.betting_state.call_amount_required(player))
    }

    /// Applies a betting action for the acting participant and advances the turn.
    ///
    /// All or nothing: if advancing fails (a participant will not strip a board
    /// card, say) the bets and turn are rolled back and no board card is dealt,
    /// so the same action can be retried.
    pub fn perform_action(&mut self, player: usize, action: PokerAction) -> Result<(), PokerError> {
        if self.is_game_over() {
            return Err(PokerError::GameOver);
        }

        let acting = self.acting_participant();
        if player != acting {
            return Err(PokerError::NotYourTurn {
                participant: player,
                acting,
            });
        }

        let saved = (self.betting_state.clone(), self.current_state.clone());
        let result = self.apply_action(player, action);
        if let Err(err) = &result {
            tracing::warn!(player, %action, %err, "action rolled back");
            (self.betting_state, self.current_state) = saved;
        }
        result
    }

    fn apply_action(&mut self, player: usize, action: PokerAction) -> Result<(), PokerError> {
        let mut may_close = true;
        match action {
            PokerAction::Fold => {
                self.betting_state.fold(player);
                if self.current_state.last_raiser == player {
                    // hand the round-closing seat to whoever acts next; it has not acted yet
                    let folded = self.betting_state.folded_mask();
                    if let Some(next) = self.current_state.next_player_masked(player, &folded) {
                        self.current_state.last_raiser = next;
                        may_close = false;
                    }
                }
                tracing::info!(player, "fold");
            }
            PokerAction::Call => {
                let paid = self.betting_state.call(player);
                tracing::info!(player, paid, pot = self.pot(), "call");
            }
            PokerAction::Raise => match self.betting_state.raise(player)? {
                RaiseOutcome::Raised { paid } => {
                    self.current_state.last_raiser = player;
                    tracing::info!(player, paid, wager = self.current_wager(), "raise");
                }
                RaiseOutcome::AllIn { paid } => {
                    tracing::info!(player, paid, wager = self.current_wager(), "raise short, all-in");
                }
            },
        }

        self.next_turn(may_close)
    }

    fn next_turn(&mut self, may_close: bool) -> Result<(), PokerError> {
        self.turn_started = Instant::now();

        let active = self.betting_state.active_players();
        if let [winner] = *active.as_slice() {
            self.betting_state.award_pot(&[winner]);
            self.current_state.finish();
            tracing::info!(winner, "wins by default");
            return Ok(());
        }

        let acting = self.acting_participant();
        let folded = self.betting_state.folded_mask();
        let next = self
            .current_state
            .next_player_masked(acting, &folded)
            .unwrap_or(acting);

        if may_close
            && next == self.current_state.last_raiser
            && self.betting_state.is_round_settled()
        {
            return self.next_phase();
        }

        self.current_state.action_player = next;
        Ok(())
    }

    fn next_phase(&mut self) -> Result<(), PokerError> {
        let Some(phase) = self.phase().next() else {
            return Err(PokerError::GameOver);
        };

        self.table.deal_board_cards(phase.board_cards_on_entry())?;

        self.betting_state.next_street();
        let folded = self.betting_state.folded_mask();
        let first = self.current_state.first_player_masked(&folded).unwrap_or(0);
        self.current_state.start_round(phase, first);

        tracing::info!(
            %phase,
            board = %self.table.board().iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "),
            "next phase"
        );

        if phase.is_terminal() {
            self.showdown()?;
        }

        Ok(())
    }

    fn showdown(&mut self) -> Result<(), PokerError> {
        let mut best: Option<HandRank> = None;
        let mut winners = vec![];

        for player in self.betting_state.active_players() {
            let held = self.table.hand(player).map_or(0, |hand| hand.len());
            let mut cards = (0..held)
                .map(|index| self.table.resolve_player_card(player, index))
                .collect::<Result<Vec<_>, _>>()?;
            cards.extend_from_slice(self.table.board());

            let (rank, desc) = self.evaluator.evaluate(&cards);
            tracing::info!(player, %rank, "showdown hand");
            self.betting_state.set_hand(player, rank, desc);

            match best {
                Some(top) if rank < top => {}
                Some(top) if rank == top => winners.push(player),
                _ => {
                    best = Some(rank);
                    winners = vec![player];
                }
            }
        }

        let payouts = self.betting_state.award_pot(&winners);
        self.current_state.finish();
        tracing::info!(?payouts, "showdown settled");

        Ok(())
    }

    /// Whether the acting participant has overrun the configured timeout.
    pub fn is_turn_expired(&self, now: Instant) -> bool {
        match self.table.config().action_timeout {
            Some(timeout) if !self.is_game_over() => {
                now.saturating_duration_since(self.turn_started) >= timeout
            }
            _ => false,
        }
    }

    /// Applies the timeout action for the acting participant if their time is up.
    pub fn expire_turn(&mut self, now: Instant) -> Result<bool, PokerError> {
        if !self.is_turn_expired(now) {
            return Ok(false);
        }

        let player = self.acting_participant();
        let action = match self.table.config().timeout_action {
            TimeoutAction::Fold => PokerAction::Fold,
            TimeoutAction::CheckOrFold if self.betting_state.call_amount_required(player) == 0 => {
                PokerAction::Call
            }
            TimeoutAction::CheckOrFold => PokerAction::Fold,
        };

        tracing::warn!(player, %action, "action timed out");
        self.perform_action(player, action)?;

        Ok(true)
    }
}
