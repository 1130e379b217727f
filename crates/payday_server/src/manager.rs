//! # Payday Lifecycle Manager
//!
//! Orchestrates the whole payment pipeline per player:
//!
//! ```text
//! character bound ──▶ initialize()          (idempotent record creation)
//! scheduled tick  ──▶ process_scheduled() ─┐
//! manual trigger  ──▶ trigger_manual()   ──┤─▶ process_payday()
//!                                           │    1. Revalidate session
//!                                           │    2. Acquire bank account (fail closed)
//!                                           │    3. Load record (timestamps normalized)
//!                                           │    4. Compute amount due
//!                                           │    5. Deposit
//!                                           │    6. Notify (best effort)
//!                                           │    7. Append history + persist
//! explicit reset  ──▶ reset_default()       (back to unemployed state)
//! ```
//!
//! Expected absences - no character bound, no record, missing ledger
//! capability - are silent no-ops by design: this is a best-effort
//! background payment system and nothing here surfaces to the player as an
//! error. Only genuine store faults come back as `Err`.

use std::sync::Arc;

use payday_core::{compute_payment, PaydayConfig, PaydayRecord, PaymentEntry, Timestamp};

use crate::collaborators::{
    CurrencyLedger, DocumentStore, Notice, NotificationService, PlayerId, PlayerRegistry,
    StoreResult,
};
use crate::diag::Diagnostics;
use crate::store::PaydayStore;

/// History entries written by the regular payday pipeline carry this source,
/// regardless of who the record's configured payer is.
const PAYMENT_LOG_SOURCE: &str = "GENERAL";

/// The payday lifecycle manager.
///
/// All collaborators are injected at construction; the manager holds no
/// global state and can be shared across tasks behind an [`Arc`].
pub struct PaydayManager {
    store: PaydayStore,
    ledger: Arc<dyn CurrencyLedger>,
    notifier: Arc<dyn NotificationService>,
    registry: Arc<dyn PlayerRegistry>,
    config: PaydayConfig,
    diag: Diagnostics,
}

impl PaydayManager {
    /// Creates a manager wired to the host's subsystems.
    #[must_use]
    pub fn new(
        config: PaydayConfig,
        documents: Arc<dyn DocumentStore>,
        ledger: Arc<dyn CurrencyLedger>,
        notifier: Arc<dyn NotificationService>,
        registry: Arc<dyn PlayerRegistry>,
    ) -> Self {
        let store = PaydayStore::new(documents, config.general.db_collection.clone());
        let diag = Diagnostics::new(config.general.debug);

        Self {
            store,
            ledger,
            notifier,
            registry,
            config,
            diag,
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &PaydayConfig {
        &self.config
    }

    /// The injected player registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<dyn PlayerRegistry> {
        &self.registry
    }

    /// One-time system setup: makes sure the backing collection exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store backend fails.
    pub async fn init_system(&self) -> StoreResult<()> {
        self.store.ensure_collection().await?;
        self.diag.message("general", "Payday system initialized.");
        Ok(())
    }

    /// Creates the payday record for a player's bound character if it does
    /// not exist yet. Safe to call on every character-bound signal: an
    /// existing record is never touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the store backend fails.
    pub async fn initialize(&self, player: PlayerId) -> StoreResult<()> {
        let Some(username) = self.registry.character_name(player) else {
            self.diag.message(
                "init",
                &format!("No character bound for {player}. Skipping payday initialization."),
            );
            return Ok(());
        };

        if self.store.get(&username).await?.is_some() {
            self.diag
                .message("init", &format!("Payday record already exists for {username}."));
            return Ok(());
        }

        let record = PaydayRecord::unemployed(&username, &self.config.payments);
        self.store.create(&record).await?;
        self.diag
            .message("init", &format!("Created new payday record for {username}."));
        Ok(())
    }

    /// Scheduled-tick entry point: pays accrued catch-up plus the cycle's
    /// top-up.
    ///
    /// # Errors
    ///
    /// Returns an error if the store backend fails.
    pub async fn process_scheduled(&self, player: PlayerId) -> StoreResult<()> {
        self.process_payday(player, false).await
    }

    /// Manual-trigger entry point: pays the flat top-up only, never accrual.
    ///
    /// # Errors
    ///
    /// Returns an error if the store backend fails.
    pub async fn trigger_manual(&self, player: PlayerId) -> StoreResult<()> {
        self.process_payday(player, true).await
    }

    /// The shared payment path for scheduled and manual paydays.
    async fn process_payday(&self, player: PlayerId, manual: bool) -> StoreResult<()> {
        if !self.registry.is_valid(player) {
            return Ok(());
        }

        // Fail closed: without the currency capability nothing moves, and no
        // history is written for money that was never paid.
        let Some(account) = self.ledger.bank_account(player).await else {
            self.diag.message(
                "process",
                &format!("Currency ledger unavailable; skipping payday for {player}."),
            );
            return Ok(());
        };

        let Some(record) = self.payment_record(player).await? else {
            return Ok(());
        };

        let due = compute_payment(&record, manual, Timestamp::now(), &self.config.payments);
        self.diag.object("process", &due);

        account.deposit(due.amount).await;

        if self.config.plugins.notifications {
            let notice = Notice {
                icon: "💰".to_string(),
                title: "Payday".to_string(),
                message: format!("You've received ${} from {}!", due.amount, record.sender),
                duration_ms: 5_000,
            };
            if !self.notifier.send(player, notice).await {
                self.diag.message(
                    "process",
                    "Notification service unavailable. Cannot send payday notice.",
                );
            }
        }

        self.update_payday(player, PAYMENT_LOG_SOURCE, due.amount, due.missed_periods)
            .await
    }

    /// Appends a history entry and persists the record. Public so other
    /// systems (employer payroll, bonuses) can log payments through the same
    /// record.
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
        let Some(mut record) = self.payment_record(player).await? else {
            return Ok(());
        };

        record.record_payment(source, amount, Timestamp::now());
        self.store.update(&record).await?;

        self.diag.message(
            "update",
            &format!(
                "Logged {amount} from {source} for {} ({missed_periods} missed periods).",
                record.username
            ),
        );
        Ok(())
    }

    /// Resets a player's record to the default unemployed state, clearing
    /// history.
    ///
    /// # Errors
    ///
    /// Returns an error if the store backend fails.
    pub async fn reset_default(&self, player: PlayerId) -> StoreResult<()> {
        let Some(username) = self.registry.character_name(player) else {
            return Ok(());
        };

        let record = PaydayRecord::unemployed(&username, &self.config.payments);
        self.store.update(&record).await
    }

    /// Read-only history accessor. `None` when the player has no record.
    ///
    /// # Errors
    ///
    /// Returns an error if the store backend fails.
    pub async fn history(&self, player: PlayerId) -> StoreResult<Option<Vec<PaymentEntry>>> {
        let record = self.payment_record(player).await?;
        Ok(record.map(|record| record.paydays))
    }

    /// Loads the payment record behind a player session, revalidating the
    /// session first. Any absence along the way is `None`.
    async fn payment_record(&self, player: PlayerId) -> StoreResult<Option<PaydayRecord>> {
        if !self.registry.is_valid(player) {
            return Ok(None);
        }
        let Some(username) = self.registry.character_name(player) else {
            return Ok(None);
        };
        self.store.get(&username).await
    }
}
