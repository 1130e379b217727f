//! In-memory fakes for the collaborator traits.
//!
//! Every fake implements the same trait the host runtime would, so tests
//! exercise the production wiring end to end. Shared state sits behind
//! `parking_lot` locks so tests can seed and inspect it synchronously.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use payday_core::{PaydayConfig, PaydayRecord};
use serde_json::Value;

use crate::collaborators::{
    BankAccount, CurrencyLedger, DocumentStore, Notice, NotificationService, PlayerId,
    PlayerRegistry, StoreResult,
};
use crate::manager::PaydayManager;

/// Document store backed by a map of collections.
#[derive(Default)]
pub(crate) struct MemoryDocumentStore {
    collections: Mutex<HashMap<String, Vec<Value>>>,
}

impl MemoryDocumentStore {
    /// Number of documents in a collection.
    pub(crate) fn count(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .get(collection)
            .map_or(0, Vec::len)
    }

    /// Synchronous insert for test seeding.
    pub(crate) fn insert(&self, collection: &str, document: Value) {
        self.collections
            .lock()
            .entry(collection.to_string())
            .or_default()
            .push(document);
    }

    /// Synchronous lookup by username for test assertions.
    pub(crate) fn find_by_username(&self, collection: &str, username: &str) -> Option<Value> {
        self.collections.lock().get(collection).and_then(|docs| {
            docs.iter()
                .find(|doc| doc.get("username").and_then(Value::as_str) == Some(username))
                .cloned()
        })
    }
}

fn matches(document: &Value, filter: &Value) -> bool {
    filter
        .as_object()
        .is_some_and(|fields| fields.iter().all(|(key, value)| document.get(key) == Some(value)))
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn create_collection(&self, collection: &str) -> StoreResult<()> {
        self.collections
            .lock()
            .entry(collection.to_string())
            .or_default();
        Ok(())
    }

    async fn get(&self, filter: Value, collection: &str) -> StoreResult<Option<Value>> {
        Ok(self.collections.lock().get(collection).and_then(|docs| {
            docs.iter().find(|doc| matches(doc, &filter)).cloned()
        }))
    }

    async fn create(&self, document: Value, collection: &str) -> StoreResult<()> {
        self.insert(collection, document);
        Ok(())
    }

    async fn update(&self, document: Value, collection: &str) -> StoreResult<()> {
        let mut collections = self.collections.lock();
        let docs = collections.entry(collection.to_string()).or_default();
        if let Some(slot) = docs
            .iter_mut()
            .find(|existing| existing.get("username") == document.get("username"))
        {
            *slot = document;
        } else {
            docs.push(document);
        }
        Ok(())
    }
}

/// Currency ledger that records every deposit.
pub(crate) struct RecordingLedger {
    available: AtomicBool,
    deposits: Arc<Mutex<Vec<(PlayerId, u64)>>>,
}

impl Default for RecordingLedger {
    fn default() -> Self {
        Self {
            available: AtomicBool::new(true),
            deposits: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl RecordingLedger {
    pub(crate) fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Relaxed);
    }

    pub(crate) fn deposits(&self) -> Vec<(PlayerId, u64)> {
        self.deposits.lock().clone()
    }
}

struct RecordingAccount {
    player: PlayerId,
    deposits: Arc<Mutex<Vec<(PlayerId, u64)>>>,
}

#[async_trait]
impl BankAccount for RecordingAccount {
    async fn deposit(&self, amount: u64) {
        self.deposits.lock().push((self.player, amount));
    }
}

#[async_trait]
impl CurrencyLedger for RecordingLedger {
    async fn bank_account(&self, player: PlayerId) -> Option<Box<dyn BankAccount>> {
        if !self.available.load(Ordering::Relaxed) {
            return None;
        }
        Some(Box::new(RecordingAccount {
            player,
            deposits: Arc::clone(&self.deposits),
        }))
    }
}

/// Notification service that records every notice.
pub(crate) struct RecordingNotifier {
    available: AtomicBool,
    sent: Mutex<Vec<(PlayerId, Notice)>>,
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self {
            available: AtomicBool::new(true),
            sent: Mutex::new(Vec::new()),
        }
    }
}

impl RecordingNotifier {
    pub(crate) fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Relaxed);
    }

    pub(crate) fn sent(&self) -> Vec<(PlayerId, Notice)> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl NotificationService for RecordingNotifier {
    async fn send(&self, player: PlayerId, notice: Notice) -> bool {
        if !self.available.load(Ordering::Relaxed) {
            return false;
        }
        self.sent.lock().push((player, notice));
        true
    }
}

#[derive(Default)]
struct RegistryState {
    connected: Vec<PlayerId>,
    valid: HashSet<PlayerId>,
    names: HashMap<PlayerId, String>,
}

/// Scriptable player registry.
#[derive(Default)]
pub(crate) struct TestRegistry {
    state: Mutex<RegistryState>,
}

impl TestRegistry {
    /// Connects a player with a bound character.
    pub(crate) fn bind(&self, player: PlayerId, username: &str) {
        let mut state = self.state.lock();
        if !state.connected.contains(&player) {
            state.connected.push(player);
        }
        state.valid.insert(player);
        state.names.insert(player, username.to_string());
    }

    /// Connects a player who has not picked a character yet.
    pub(crate) fn connect_unbound(&self, player: PlayerId) {
        let mut state = self.state.lock();
        if !state.connected.contains(&player) {
            state.connected.push(player);
        }
        state.valid.insert(player);
    }

    /// Marks a session dead without removing it from the connected list,
    /// mimicking a disconnect racing the payment pipeline.
    pub(crate) fn invalidate(&self, player: PlayerId) {
        self.state.lock().valid.remove(&player);
    }
}

impl PlayerRegistry for TestRegistry {
    fn connected(&self) -> Vec<PlayerId> {
        self.state.lock().connected.clone()
    }

    fn is_valid(&self, player: PlayerId) -> bool {
        self.state.lock().valid.contains(&player)
    }

    fn character_name(&self, player: PlayerId) -> Option<String> {
        self.state.lock().names.get(&player).cloned()
    }
}

/// Bundle of fakes plus the collection name the manager writes to.
pub(crate) struct TestWorld {
    pub(crate) documents: Arc<MemoryDocumentStore>,
    pub(crate) ledger: Arc<RecordingLedger>,
    pub(crate) notifier: Arc<RecordingNotifier>,
    pub(crate) registry: Arc<TestRegistry>,
    collection: String,
}

impl TestWorld {
    fn new(config: &PaydayConfig) -> Self {
        Self {
            documents: Arc::new(MemoryDocumentStore::default()),
            ledger: Arc::new(RecordingLedger::default()),
            notifier: Arc::new(RecordingNotifier::default()),
            registry: Arc::new(TestRegistry::default()),
            collection: config.general.db_collection.clone(),
        }
    }

    /// Seeds a record straight into the store.
    pub(crate) fn seed_record(&self, record: &PaydayRecord) {
        let document = serde_json::to_value(record).expect("record serializes");
        self.documents.insert(&self.collection, document);
    }

    /// Reads a record back for assertions.
    pub(crate) fn load_record(&self, username: &str) -> Option<PaydayRecord> {
        self.documents
            .find_by_username(&self.collection, username)
            .map(|doc| serde_json::from_value(doc).expect("record deserializes"))
    }
}

/// Builds a manager wired to a fresh set of fakes.
pub(crate) fn manager_with(config: PaydayConfig) -> (PaydayManager, TestWorld) {
    let world = TestWorld::new(&config);
    let manager = PaydayManager::new(
        config,
        world.documents.clone(),
        world.ledger.clone(),
        world.notifier.clone(),
        world.registry.clone(),
    );
    (manager, world)
}
