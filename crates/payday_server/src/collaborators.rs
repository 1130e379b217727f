//! # Collaborator Contracts
//!
//! Traits for every host subsystem the plugin talks to. The host runtime
//! implements these; the plugin never resolves them from global state.
//!
//! ## Capability model
//!
//! The currency ledger is an *optional capability*: the lookup may come back
//! empty (subsystem not loaded, player mid-disconnect), and callers must
//! branch on presence. A missing ledger aborts the payment fail-closed - no
//! history entry without an actual credit. The notification service is
//! best-effort: an unavailable channel is logged and the payment proceeds.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Opaque handle to a connected player session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

/// A structured on-screen notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Leading icon (emoji or icon name).
    pub icon: String,
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// How long the notice stays on screen, in milliseconds.
    pub duration_ms: u64,
}

/// Errors from the external document store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store backend rejected or failed the operation.
    #[error("document store backend failure: {0}")]
    Backend(String),

    /// A document could not be encoded or decoded.
    #[error("document encoding failure: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Result type for store-touching operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// The host's generic document database.
///
/// Lookups are by filter document; a record that does not exist is
/// `Ok(None)`, never an error.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Creates a collection if it does not already exist.
    async fn create_collection(&self, collection: &str) -> StoreResult<()>;

    /// Returns the first document matching `filter`, if any.
    async fn get(&self, filter: Value, collection: &str) -> StoreResult<Option<Value>>;

    /// Inserts a new document.
    async fn create(&self, document: Value, collection: &str) -> StoreResult<()>;

    /// Replaces the stored document with the same key.
    async fn update(&self, document: Value, collection: &str) -> StoreResult<()>;
}

/// A player's bank account, obtained from the currency ledger.
#[async_trait]
pub trait BankAccount: Send + Sync {
    /// Credits `amount` to the account's bank balance.
    async fn deposit(&self, amount: u64);
}

/// The host's currency subsystem.
#[async_trait]
pub trait CurrencyLedger: Send + Sync {
    /// Looks up the bank account capability for a player.
    ///
    /// `None` means the capability is unavailable right now; the caller must
    /// abort the payment rather than assume it will appear.
    async fn bank_account(&self, player: PlayerId) -> Option<Box<dyn BankAccount>>;
}

/// The host's notification subsystem.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Delivers a notice to a player.
    ///
    /// Returns `false` when no delivery channel is available.
    async fn send(&self, player: PlayerId, notice: Notice) -> bool;
}

/// The host's player/session model.
///
/// Accessors are synchronous: the host keeps this state in memory and the
/// plugin only ever reads it between suspension points.
pub trait PlayerRegistry: Send + Sync {
    /// All currently connected players.
    fn connected(&self) -> Vec<PlayerId>;

    /// Whether the session is still alive. Re-checked right before money
    /// moves, since a player can disconnect mid-pipeline.
    fn is_valid(&self, player: PlayerId) -> bool;

    /// Name of the persistent character bound to this session, or `None`
    /// while the player has not picked a character yet.
    fn character_name(&self, player: PlayerId) -> Option<String>;
}
