//! Request generations
//!
//! Each fetch channel carries a generation counter. Starting a request
//! bumps it and hands out a token; a response is applied only if its token
//! is still the latest for the channel. Navigation bumps every channel, so
//! responses to requests made on a previous page are dropped.

use std::sync::atomic::{AtomicU64, Ordering};

/// Independent stream of fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Closet,
    Outfit,
    Saved,
}

impl Channel {
    pub const ALL: [Self; 3] = [Self::Closet, Self::Outfit, Self::Saved];

    fn slot(self) -> usize {
        match self {
            Self::Closet => 0,
            Self::Outfit => 1,
            Self::Saved => 2,
        }
    }
}

/// Proof of which request a response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct RequestToken {
    channel: Channel,
    generation: u64,
}

impl RequestToken {
    #[inline]
    pub fn channel(self) -> Channel {
        self.channel
    }
}

/// Generation counters for every channel
#[derive(Debug, Default)]
pub struct RequestTracker {
    generations: [AtomicU64; 3],
}

impl RequestTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request on `channel`, superseding any in flight
    pub fn begin(&self, channel: Channel) -> RequestToken {
        let generation = self.generations[channel.slot()].fetch_add(1, Ordering::AcqRel) + 1;
        RequestToken {
            channel,
            generation,
        }
    }

    /// Whether `token` is still the latest request on its channel
    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.generations[token.channel.slot()].load(Ordering::Acquire) == token.generation
    }

    /// Supersede any in-flight request on `channel`
    pub fn invalidate(&self, channel: Channel) {
        self.generations[channel.slot()].fetch_add(1, Ordering::AcqRel);
    }

    /// Supersede every in-flight request
    pub fn invalidate_all(&self) {
        for channel in Channel::ALL {
            self.invalidate(channel);
        }
    }
}

/// How a fetch ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    /// Response applied to session state
    Applied(T),
    /// A newer request or a navigation superseded this one
    Stale,
    /// Collaborator failed or no user is signed in; empty result applied
    Unavailable,
}

impl<T> FetchOutcome<T> {
    #[must_use]
    pub fn applied(self) -> Option<T> {
        match self {
            Self::Applied(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_supersedes() {
        let tracker = RequestTracker::new();
        let first = tracker.begin(Channel::Outfit);
        let second = tracker.begin(Channel::Outfit);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn channels_are_independent() {
        let tracker = RequestTracker::new();
        let closet = tracker.begin(Channel::Closet);
        let _ = tracker.begin(Channel::Saved);
        assert!(tracker.is_current(closet));
    }

    #[test]
    fn invalidate_touches_one_channel() {
        let tracker = RequestTracker::new();
        let closet = tracker.begin(Channel::Closet);
        let outfit = tracker.begin(Channel::Outfit);
        tracker.invalidate(Channel::Closet);
        assert!(!tracker.is_current(closet));
        assert!(tracker.is_current(outfit));
    }

    #[test]
    fn navigation_supersedes_everything() {
        let tracker = RequestTracker::new();
        let tokens: Vec<_> = Channel::ALL.iter().map(|c| tracker.begin(*c)).collect();
        tracker.invalidate_all();
        assert!(tokens.iter().all(|t| !tracker.is_current(*t)));
    }
}
