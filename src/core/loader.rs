//! Load status for asynchronous provider calls.
//!
//! A [`Loadable`] tracks one logical resource (the bucket list, the current
//! object listing, the current preview). Each [`begin`](Loadable::begin)
//! bumps a generation counter and hands out a [`Ticket`]; only the result
//! carrying the newest ticket is applied. When the user switches buckets
//! before the previous listing arrives, the late result is dropped, so the
//! last request always wins.

use super::error::StorageError;

/// Status of a single load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Nothing requested
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Request finished
    Ready(T),
    /// Request failed (display-only message)
    Failed(String),
}

/// Generation a load was started with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// A [`LoadState`] guarded by a generation counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loadable<T> {
    generation: u64,
    state: LoadState<T>,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            state: LoadState::Idle,
        }
    }
}

impl<T> Loadable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match &self.state {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Start a new load, invalidating any in-flight one.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = LoadState::Loading;
        Ticket(self.generation)
    }

    /// Apply a finished load.
    ///
    /// Returns `false` (and changes nothing) when the ticket is stale.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, StorageError>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.state = match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(e.to_string()),
        };
        true
    }

    /// Drop back to idle and invalidate any in-flight load.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = LoadState::Idle;
    }
}
