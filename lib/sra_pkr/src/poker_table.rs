//! Crumble SRA
//!
//! Mental Poker (1979) implemented using Shamir–Rivest–Adleman commutative encryption.
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use alloy_primitives::B256;
use rand::Rng;
use sra_cipher::types::{CardValue, Modulus};

use crate::{
    PokerError,
    poker_config::{MAX_BOARD_CARDS, MAX_PARTICIPANTS, MIN_PARTICIPANTS, TableConfig},
    poker_deck::{DECK_SIZE, MaskedCards, PokerCard, PokerDeck, UnmaskedCards},
    poker_player::{LocalParticipant, Participant},
};

/// Reference deck, working deck, hands, board and the seated participants.
///
/// A card leaves the working deck only once every layer it needed removed
/// has come off, so an interrupted deal leaves the deck untouched.
pub struct PokerTable {
    config: TableConfig,
    modulus: Modulus,
    poker_deck: PokerDeck,
    working_deck: MaskedCards,
    player_cards: Vec<UnmaskedCards>,
    board: Vec<PokerCard>,
    participants: Vec<Box<dyn Participant>>,
    shuffle_history: Vec<B256>,
    is_shuffled: bool,
}

impl PokerTable {
    /// Generates the shared prime and seats `config.num_participants` local participants.
    pub fn new<R: Rng + ?Sized>(config: TableConfig, rng: &mut R) -> Result<Self, PokerError> {
        check_participant_count(config.num_participants)?;

        let modulus = Modulus::generate(config.prime_bits, rng, config.max_prime_attempts)?;

        let participants = (0..config.num_participants)
            .map(|_| {
                LocalParticipant::new(&modulus, rng, config.max_key_attempts)
                    .map(|p| Box::new(p) as Box<dyn Participant>)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::with_participants(config, modulus, participants)
    }

    /// Seats the given participants; their count overrides `config.num_participants`.
    pub fn with_participants(
        mut config: TableConfig,
        modulus: Modulus,
        participants: Vec<Box<dyn Participant>>,
    ) -> Result<Self, PokerError> {
        check_participant_count(participants.len())?;
        config.num_participants = participants.len();

        let poker_deck = PokerDeck::new(&modulus)?;
        let working_deck = poker_deck.masked_cards();

        tracing::debug!(
            participants = participants.len(),
            modulus_bits = modulus.bits(),
            "table created"
        );

        Ok(Self {
            player_cards: vec![UnmaskedCards::default(); participants.len()],
            config,
            modulus,
            poker_deck,
            working_deck,
            board: vec![],
            participants,
            shuffle_history: vec![],
            is_shuffled: false,
        })
    }

    pub const fn config(&self) -> &TableConfig {
        &self.config
    }

    pub const fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    pub const fn poker_deck(&self) -> &PokerDeck {
        &self.poker_deck
    }

    pub const fn working_deck(&self) -> &MaskedCards {
        &self.working_deck
    }

    pub fn num_participants(&self) -> usize {
        self.participants.len()
    }

    pub fn remaining(&self) -> usize {
        self.working_deck.len()
    }

    pub fn board(&self) -> &[PokerCard] {
        &self.board
    }

    pub fn hand(&self, player: usize) -> Option<&UnmaskedCards> {
        self.player_cards.get(player)
    }

    /// Commitment to the working deck after each participant's pass, in seat order.
    pub fn shuffle_commitments(&self) -> &[B256] {
        &self.shuffle_history
    }

    pub const fn is_shuffled(&self) -> bool {
        self.is_shuffled
    }

    /// Every participant in seat order layers their encryption over the
    /// previous deck and permutes it.
    pub fn full_shuffle(&mut self) -> Result<(), PokerError> {
        if self.is_shuffled {
            return Err(PokerError::AlreadyShuffled);
        }

        let width = self.modulus.byte_len();
        let mut deck = std::mem::take(&mut self.working_deck);

        for (player, participant) in self.participants.iter_mut().enumerate() {
            deck = participant.layer_deck(deck, self.config.shuffle_mode);
            let commitment = deck.hash(width);
            tracing::debug!(player, %commitment, "shuffle pass");
            self.shuffle_history.push(commitment);
        }

        self.working_deck = deck;
        self.is_shuffled = true;

        Ok(())
    }

    /// Deals the top card to `player`; everyone else strips in seat order.
    pub fn deal_card_to_player(&mut self, player: usize) -> Result<(), PokerError> {
        self.check_participant(player)?;
        let order: Vec<usize> = (0..self.num_participants())
            .filter(|&other| other != player)
            .collect();
        self.deal_card_to_player_in_order(player, &order)
    }

    /// Deals the top card to `player` with the other layers stripped in `order`.
    pub fn deal_card_to_player_in_order(
        &mut self,
        player: usize,
        order: &[usize],
    ) -> Result<(), PokerError> {
        self.check_participant(player)?;

        let mut given = order.to_vec();
        given.sort_unstable();
        let expected: Vec<usize> = (0..self.num_participants())
            .filter(|&other| other != player)
            .collect();
        if given != expected {
            return Err(PokerError::InvalidStripOrder);
        }

        let card = self.top_card()?;
        let card = self.strip_layers(card, order.iter().copied())?;

        self.working_deck.pop_front();
        self.player_cards[player].push(card);

        tracing::debug!(
            player,
            held = self.player_cards[player].len(),
            remaining = self.remaining(),
            "card dealt to player"
        );

        Ok(())
    }

    /// Deals the top card face up; every participant strips their layer.
    pub fn deal_board_card(&mut self) -> Result<PokerCard, PokerError> {
        let cards = self.deal_board_cards(1)?;
        cards.first().copied().ok_or(PokerError::DeckExhausted)
    }

    /// Deals `count` cards face up, all or none: the deck and board only
    /// change once every layer of every card has come off.
    pub fn deal_board_cards(&mut self, count: usize) -> Result<Vec<PokerCard>, PokerError> {
        if self.board.len() + count > MAX_BOARD_CARDS {
            return Err(PokerError::BoardFull(self.board.len()));
        }
        if !self.is_shuffled {
            return Err(PokerError::NotShuffled);
        }
        if self.remaining() < count {
            return Err(PokerError::DeckExhausted);
        }

        let poker_cards = self.working_deck.cards()[..count]
            .iter()
            .map(|card| {
                let card = self.strip_layers(card.clone(), 0..self.num_participants())?;
                self.poker_deck
                    .find_card(&card)
                    .ok_or(PokerError::UnresolvedCard)
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.working_deck.drain_front(count);
        self.board.extend_from_slice(&poker_cards);

        for card in &poker_cards {
            tracing::debug!(card = %card, board = self.board.len(), "board card dealt");
        }

        Ok(poker_cards)
    }

    /// Lets `player` remove the last layer of one of their cards.
    pub fn resolve_player_card(&self, player: usize, index: usize) -> Result<PokerCard, PokerError> {
        self.check_participant(player)?;

        let card = self.player_cards[player]
            .get(index)
            .ok_or(PokerError::UnknownCard {
                participant: player,
                index,
            })?;

        let card = self.strip_with(player, card)?;
        self.poker_deck
            .find_card(&card)
            .ok_or(PokerError::UnresolvedCard)
    }

    /// Checks that deck, hands and board together hold every reference card once.
    pub fn audit_conservation(&self) -> Result<(), PokerError> {
        let mut seen = [false; DECK_SIZE];
        let mut mark = |card: PokerCard| {
            if std::mem::replace(&mut seen[usize::from(card.id())], true) {
                return Err(PokerError::ConservationViolated(format!(
                    "{} is held twice",
                    card
                )));
            }
            Ok(())
        };

        for card in self.working_deck.cards() {
            let card = if self.is_shuffled {
                self.strip_layers(card.clone(), 0..self.num_participants())?
            } else {
                card.clone()
            };
            let poker_card = self
                .poker_deck
                .find_card(&card)
                .ok_or(PokerError::UnresolvedCard)?;
            mark(poker_card)?;
        }

        for (player, hand) in self.player_cards.iter().enumerate() {
            for index in 0..hand.len() {
                mark(self.resolve_player_card(player, index)?)?;
            }
        }

        for card in &self.board {
            mark(*card)?;
        }

        if let Some(missing) = seen.iter().position(|held| !held) {
            let card = PokerCard::new(missing as u8).ok_or(PokerError::UnresolvedCard)?;
            return Err(PokerError::ConservationViolated(format!(
                "{} is missing",
                card
            )));
        }

        Ok(())
    }

    fn check_participant(&self, player: usize) -> Result<(), PokerError> {
        if player >= self.num_participants() {
            return Err(PokerError::UnknownParticipant(player));
        }
        Ok(())
    }

    fn top_card(&self) -> Result<CardValue, PokerError> {
        if !self.is_shuffled {
            return Err(PokerError::NotShuffled);
        }
        self.working_deck
            .front()
            .cloned()
            .ok_or(PokerError::DeckExhausted)
    }

    fn strip_with(&self, player: usize, card: &CardValue) -> Result<CardValue, PokerError> {
        self.participants[player]
            .strip(card)
            .map_err(|err| match err {
                PokerError::ParticipantFailed { .. } => err,
                other => PokerError::ParticipantFailed {
                    participant: player,
                    reason: other.to_string(),
                },
            })
    }

    fn strip_layers(
        &self,
        card: CardValue,
        order: impl IntoIterator<Item = usize>,
    ) -> Result<CardValue, PokerError> {
        order
            .into_iter()
            .try_fold(card, |card, player| self.strip_with(player, &card))
    }
}

fn check_participant_count(count: usize) -> Result<(), PokerError> {
    if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&count) {
        return Err(PokerError::InvalidParticipantCount {
            count,
            min: MIN_PARTICIPANTS,
            max: MAX_PARTICIPANTS,
        });
    }
    Ok(())
}
