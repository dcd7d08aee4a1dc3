//! Crumble SRA
//!
//! Mental Poker (1979) implemented using Shamir–Rivest–Adleman commutative encryption.
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use std::error::Error;

use itertools::Itertools;
use rand::{
    Rng,
    distributions::{Uniform, WeightedIndex},
    rngs::ThreadRng,
    thread_rng,
};
use sra_pkr::{
    PokerError,
    poker_bets::PokerAction,
    poker_config::{HOLE_CARDS, TableConfig},
    poker_deck::PokerCard,
    poker_hand::PokerHand,
};

pub struct PokerCards(Vec<PokerCard>);

#[cfg(not(feature = "fancy_cards"))]
impl ToString for PokerCards {
    fn to_string(&self) -> String {
        self.0.iter().map(|c| c.to_string()).join(", ")
    }
}

#[cfg(feature = "fancy_cards")]
impl ToString for PokerCards {
    fn to_string(&self) -> String {
        // Playing Cards block: spades, clubs, diamonds, hearts
        const SUIT_BASE: [u32; 4] = [0x1F0A0, 0x1F0D0, 0x1F0C0, 0x1F0B0];

        self.0
            .iter()
            .map(|c| {
                let face = match c.rank() {
                    12 => 0x1,
                    11 => 0xE,
                    10 => 0xD,
                    9 => 0xB,
                    r => u32::from(r) + 2,
                };
                char::from_u32(SUIT_BASE[usize::from(c.suit())] + face)
                    .map_or_else(|| c.to_string(), String::from)
            })
            .join(", ")
    }
}

fn player_own_cards(player: usize, hand: &PokerHand) -> Result<PokerCards, PokerError> {
    let cards = (0..HOLE_CARDS)
        .map(|index| hand.table().resolve_player_card(player, index))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PokerCards(cards))
}

pub struct PokerBot {
    player: usize,
    rng: ThreadRng,
}

impl PokerBot {
    pub fn new(player: usize) -> Self {
        Self {
            player,
            rng: thread_rng(),
        }
    }

    pub fn act(&mut self, hand: &mut PokerHand) -> Result<(), Box<dyn Error>> {
        let owed = hand.call_amount_required(self.player)?;

        let weights = [1, 6, 2];
        let dist = WeightedIndex::new(&weights)?;
        let action = match self.rng.sample(dist) {
            // nothing to fold against
            0 if owed == 0 => PokerAction::Call,
            0 => PokerAction::Fold,
            1 => PokerAction::Call,
            _ => PokerAction::Raise,
        };

        tracing::info!(
            "Player {} ({}) {} (owes ${}, pot ${})",
            self.player + 1,
            player_own_cards(self.player, hand)?.to_string(),
            action,
            owed,
            hand.pot()
        );

        hand.perform_action(self.player, action)?;
        Ok(())
    }
}

fn show_results(hand: &PokerHand) -> Result<(), PokerError> {
    let board = PokerCards(hand.table().board().to_vec());
    tracing::info!("Community cards: {}", board.to_string());

    for (player, state) in hand.players().iter().enumerate() {
        tracing::info!(
            "Player {} cards: {} {} chips: ${}{}",
            player + 1,
            player_own_cards(player, hand)?.to_string(),
            state.hand_desc().unwrap_or(if state.is_folded() { "(folded)" } else { "" }),
            state.chips(),
            if state.is_winner() { " WINNER" } else { "" }
        );
    }
    Ok(())
}

pub fn run(num_players: usize, initial_chips: u64) -> Result<(), Box<dyn Error>> {
    let mut bots: Vec<_> = (0..num_players).map(PokerBot::new).collect();

    let config = TableConfig::new(num_players).with_initial_chips(initial_chips);
    let mut hand = PokerHand::start(config, &mut thread_rng())?;

    for (pass, commitment) in hand.table().shuffle_commitments().iter().enumerate() {
        tracing::info!("Shuffle by Player {}: {}", pass + 1, commitment);
    }

    let mut phase = hand.phase();
    while !hand.is_game_over() {
        let player = hand.acting_participant();
        let Some(bot) = bots.get_mut(player) else {
            return Err(PokerError::UnknownParticipant(player).into());
        };
        bot.act(&mut hand)?;

        if phase != hand.phase() {
            phase = hand.phase();
            let board = PokerCards(hand.table().board().to_vec());
            tracing::info!("{}: {}", phase, board.to_string());
        }
    }

    show_results(&hand)?;
    hand.table().audit_conservation()?;
    tracing::info!("Hand ended");

    Ok(())
}

fn init_logging() {
    if cfg!(feature = "pure_output") {
        tracing_subscriber::fmt()
            .with_target(false)
            .with_level(false)
            .without_time()
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }
}

pub fn main() {
    init_logging();

    #[cfg(not(feature = "six_player"))]
    let num_players = thread_rng().sample(Uniform::new_inclusive(2usize, 6usize));

    #[cfg(feature = "six_player")]
    let num_players = 6;

    let initial_chips = 1000;

    if let Err(err) = run(num_players, initial_chips) {
        tracing::error!("Error: {}", err);
    }
}
