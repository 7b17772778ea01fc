//! Per-round snapshots of the encryption state.
//!
//! The cipher reports the state after every round to a [`RoundObserver`]. What
//! the observer does with it never feeds back into the computation.

use crate::key::ROUND_KEY_COUNT;
use crate::state::State;

/// Receives the state at the end of each round (0 through 10).
pub trait RoundObserver {
    /// Called once per round, in order.
    fn observe(&mut self, round: usize, state: &State);
}

impl<F> RoundObserver for F
where
    F: FnMut(usize, &State),
{
    fn observe(&mut self, round: usize, state: &State) {
        self(round, state)
    }
}

/// Collects every round's state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    rounds: Vec<State>,
}

impl Trace {
    /// Creates an empty trace with room for a full encryption.
    pub fn new() -> Self {
        Self {
            rounds: Vec::with_capacity(ROUND_KEY_COUNT),
        }
    }

    /// State recorded at the end of `round`, if any.
    pub fn round(&self, round: usize) -> Option<&State> {
        self.rounds.get(round)
    }

    /// Number of recorded rounds.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Drops every recorded round.
    pub fn clear(&mut self) {
        self.rounds.clear();
    }

    /// Iterates `(round, state)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &State)> {
        self.rounds.iter().enumerate()
    }
}

/// Round 0 starts a new encryption and discards whatever was recorded before.
impl RoundObserver for Trace {
    fn observe(&mut self, round: usize, state: &State) {
        if round == 0 {
            self.rounds.clear();
        }
        self.rounds.push(*state);
    }
}

/// Emits each round's state as a `tracing` debug event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl RoundObserver for TracingObserver {
    fn observe(&mut self, round: usize, state: &State) {
        tracing::debug!(round, state = %format_args!("{state:x}"), "round complete");
    }
}

/// Forwards each round to two observers.
#[derive(Debug)]
pub struct Tee<'a, A, B>(pub &'a mut A, pub &'a mut B);

impl<A, B> RoundObserver for Tee<'_, A, B>
where
    A: RoundObserver,
    B: RoundObserver,
{
    fn observe(&mut self, round: usize, state: &State) {
        self.0.observe(round, state);
        self.1.observe(round, state);
    }
}
