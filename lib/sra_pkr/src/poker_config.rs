//! Crumble SRA
//!
//! Mental Poker (1979) implemented using Shamir–Rivest–Adleman commutative encryption.
//!
//! Copyright (c) 2026 Sonia Code; See LICENSE file for license details.

use std::time::Duration;

pub const MIN_PARTICIPANTS: usize = 2;
/// Two hole cards each plus a full board must fit in one deck.
pub const MAX_PARTICIPANTS: usize = 23;
pub const HOLE_CARDS: usize = 2;
pub const MAX_BOARD_CARDS: usize = 5;

pub const DEFAULT_PARTICIPANTS: usize = 4;
pub const DEFAULT_PRIME_BITS: u64 = 128;
pub const DEFAULT_MAX_PRIME_ATTEMPTS: usize = 4096;
pub const DEFAULT_MAX_KEY_ATTEMPTS: usize = 256;
pub const DEFAULT_INITIAL_CHIPS: u64 = 1000;
pub const DEFAULT_RAISE_INCREMENT: u64 = 50;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShuffleMode {
    /// Every participant permutes the deck after adding their layer.
    #[default]
    Random,
    /// Layers are added but slot order is kept, so slot k holds reference card k.
    Identity,
}

/// What happens to a participant who overruns the action timeout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeoutAction {
    Fold,
    /// Check when nothing is owed, fold otherwise.
    #[default]
    CheckOrFold,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableConfig {
    pub num_participants: usize,
    pub prime_bits: u64,
    pub max_prime_attempts: usize,
    pub max_key_attempts: usize,
    pub shuffle_mode: ShuffleMode,
    pub initial_chips: u64,
    pub raise_increment: u64,
    pub action_timeout: Option<Duration>,
    pub timeout_action: TimeoutAction,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_participants: DEFAULT_PARTICIPANTS,
            prime_bits: DEFAULT_PRIME_BITS,
            max_prime_attempts: DEFAULT_MAX_PRIME_ATTEMPTS,
            max_key_attempts: DEFAULT_MAX_KEY_ATTEMPTS,
            shuffle_mode: ShuffleMode::default(),
            initial_chips: DEFAULT_INITIAL_CHIPS,
            raise_increment: DEFAULT_RAISE_INCREMENT,
            action_timeout: None,
            timeout_action: TimeoutAction::default(),
        }
    }
}

impl TableConfig {
    pub fn new(num_participants: usize) -> Self {
        Self {
            num_participants,
            ..Self::default()
        }
    }

    pub fn with_prime_bits(mut self, prime_bits: u64) -> Self {
        self.prime_bits = prime_bits;
        self
    }

    pub fn with_shuffle_mode(mut self, shuffle_mode: ShuffleMode) -> Self {
        self.shuffle_mode = shuffle_mode;
        self
    }

    pub fn with_initial_chips(mut self, initial_chips: u64) -> Self {
        self.initial_chips = initial_chips;
        self
    }

    pub fn with_raise_increment(mut self, raise_increment: u64) -> Self {
        self.raise_increment = raise_increment;
        self
    }

    pub fn with_max_key_attempts(mut self, max_key_attempts: usize) -> Self {
        self.max_key_attempts = max_key_attempts;
        self
    }

    pub fn with_action_timeout(mut self, timeout: Duration, action: TimeoutAction) -> Self {
        self.action_timeout = Some(timeout);
        self.timeout_action = action;
        self
    }
}
