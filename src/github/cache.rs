//! Single-slot response cache.
//!
//! Holds the most recent value together with the instant it was stored and
//! hands it back until the TTL elapses.

use chrono::{DateTime, Duration, Utc};

use crate::core::Clock;

/// Default freshness window for cached responses.
pub const DEFAULT_TTL_SECS: u32 = 60;

/// Capacity-one cache with an injected clock.
#[derive(Debug)]
pub struct ResponseCache<T, C: Clock> {
    clock: C,
    ttl: Duration,
    slot: Option<(DateTime<Utc>, T)>,
}

impl<T, C: Clock> ResponseCache<T, C> {
    pub fn new(clock: C, ttl: Duration) -> Self {
        Self {
            clock,
            ttl,
            slot: None,
        }
    }

    pub fn with_default_ttl(clock: C) -> Self {
        Self::new(clock, Duration::seconds(i64::from(DEFAULT_TTL_SECS)))
    }

    /// The stored value, if it is younger than the TTL.
    pub fn get(&self) -> Option<&T> {
        let (stored_at, value) = self.slot.as_ref()?;
        (self.clock.now() - *stored_at < self.ttl).then_some(value)
    }

    /// Replace the slot.
    pub fn put(&mut self, value: T) {
        self.slot = Some((self.clock.now(), value));
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Return the fresh value or fill the slot from `fetch`.
    ///
    /// # Errors
    ///
    /// Propagates the error from `fetch`; the slot keeps its previous value.
    pub fn get_or_try_insert_with<E, F>(&mut self, fetch: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let now = self.clock.now();
        let entry = match self.slot.take() {
            Some((stored_at, value)) if now - stored_at < self.ttl => (stored_at, value),
            previous => match fetch() {
                Ok(value) => (now, value),
                Err(e) => {
                    self.slot = previous;
                    return Err(e);
                }
            },
        };
        Ok(&self.slot.insert(entry).1)
    }
}
