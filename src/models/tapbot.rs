use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Tapbot configuration snapshot.
///
/// Lifecycle: not purchased -> idle (purchasable/startable) -> running
/// (`ends_at` set, attempts consumed) -> claimable (`ends_at` elapsed) ->
/// back to idle. Transitions happen only server-side; this snapshot is
/// re-fetched after every mutating call.
#[derive(Debug, Deserialize, Clone)]
pub struct TapbotState {
    #[serde(rename = "isPurchased")]
    pub is_purchased: bool,
    #[serde(rename = "usedAttempts")]
    pub used_attempts: i64,
    #[serde(rename = "totalAttempts")]
    pub total_attempts: i64,
    #[serde(rename = "endsAt")]
    pub ends_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapbotPhase {
    NotPurchased,
    Idle,
    Running,
    Claimable,
    Exhausted,
}

impl TapbotState {
    pub fn attempts_remaining(&self) -> bool {
        self.used_attempts < self.total_attempts
    }

    pub fn phase(&self, now: DateTime<Utc>) -> TapbotPhase {
        if !self.is_purchased {
            return TapbotPhase::NotPurchased;
        }
        match self.ends_at {
            None if self.attempts_remaining() => TapbotPhase::Idle,
            None => TapbotPhase::Exhausted,
            Some(ends_at) if ends_at <= now => TapbotPhase::Claimable,
            Some(_) => TapbotPhase::Running,
        }
    }
}
