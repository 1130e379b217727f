//! # Public API Surface
//!
//! The facade other plugins consume. Everything here delegates to the
//! lifecycle manager; the point of the type is a stable, minimal surface
//! that does not expose the manager's internals.

use std::sync::Arc;

use payday_core::PaymentEntry;

use crate::collaborators::{PlayerId, StoreResult};
use crate::manager::PaydayManager;

/// Payday operations exposed to other plugins.
#[derive(Clone)]
pub struct PaydayApi {
    manager: Arc<PaydayManager>,
}

impl PaydayApi {
    /// Wraps a manager in the public facade.
    #[must_use]
    pub fn new(manager: Arc<PaydayManager>) -> Self {
        Self { manager }
    }

    /// Fires a manual payday for one player: flat top-up, no accrual.
    ///
    /// # Errors
    ///
    /// Returns an error if the store backend fails.
    pub async fn trigger_payday(&self, player: PlayerId) -> StoreResult<()> {
        self.manager.trigger_manual(player).await
    }

    /// A player's full payment history, oldest first. `None` when the
    /// player has no payday record.
    ///
    /// # Errors
    ///
    /// Returns an error if the store backend fails.
    pub async fn get_history(&self, player: PlayerId) -> StoreResult<Option<Vec<PaymentEntry>>> {
        self.manager.history(player).await
    }

    /// Logs an arbitrary payment (employer payroll, bonuses) through the
    /// player's payday record.
    ///
    /// # Errors
    ///
    /// Returns an error if the store backend fails.
    pub async fn update_payday(
        &self,
        player: PlayerId,
        source: &str,
        amount: u64,
        missed_periods: u64,
    ) -> StoreResult<()> {
        self.manager
            .update_payday(player, source, amount, missed_periods)
            .await
    }

    // Faction payouts are intentionally absent for now; organizations get
    // their own surface once the faction plugin lands.
}
