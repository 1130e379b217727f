//! # Payday Plugin Runtime
//!
//! The server-side payday plugin: a repeating scheduler fans a "process
//! payday" signal out to every connected player, a lifecycle manager runs
//! the payment pipeline per player, and an append-only history is kept in
//! the host's document store.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      PAYDAY PLUGIN                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐    │
//! │  │ Scheduler    │──▶│ Lifecycle    │──▶│ Record Store │    │
//! │  │ (interval)   │   │ Manager      │   │ Adapter      │    │
//! │  └──────────────┘   └──────┬───────┘   └──────┬───────┘    │
//! │                           │                  │             │
//! │              ┌────────────┼─────────┐        ▼             │
//! │              ▼            ▼         ▼   Document Store     │
//! │        Currency     Notification  Player    (host)         │
//! │        Ledger       Service       Registry                 │
//! │        (host)       (host)        (host)                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All host-owned subsystems are injected through the traits in
//! [`collaborators`]; nothing in this crate reaches for ambient global
//! state.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod api;
pub mod collaborators;
mod diag;
pub mod manager;
pub mod scheduler;
pub mod store;

#[cfg(test)]
pub(crate) mod testutil;

pub use api::PaydayApi;
pub use collaborators::{
    BankAccount, CurrencyLedger, DocumentStore, Notice, NotificationService, PlayerId,
    PlayerRegistry, StoreError, StoreResult,
};
pub use manager::PaydayManager;
pub use scheduler::{PaydayScheduler, SchedulerHandle};
pub use store::PaydayStore;
