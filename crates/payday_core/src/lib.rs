//! # Payday Domain Logic
//!
//! Pure domain logic for the payday plugin: the per-player payment record,
//! the payment calculator, and configuration.
//!
//! ## Design Principles
//!
//! 1. **No floating point** - All monetary amounts are integer currency units
//! 2. **No I/O** - Storage and collaborator access live in `payday_server`
//! 3. **Defensive deserialization** - Timestamps read back from storage are
//!    normalized even when the store hands them back as strings
//!
//! ## Example
//!
//! ```rust
//! use payday_core::{compute_payment, PaydayRecord, PaymentsConfig, Timestamp};
//!
//! let payments = PaymentsConfig::default();
//! let record = PaydayRecord::unemployed("Marcus_Reed", &payments);
//!
//! // A manual trigger pays the flat top-up only.
//! let due = compute_payment(&record, true, Timestamp::now(), &payments);
//! assert_eq!(due.missed_periods, 0);
//! assert_eq!(due.amount, payments.unemployed_amount);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod calculator;
pub mod config;
pub mod error;
pub mod record;

pub use calculator::{compute_payment, PaymentDue};
pub use config::{GeneralConfig, PaydayConfig, PaymentsConfig, PluginsConfig};
pub use error::{PaydayError, PaydayResult};
pub use record::{PaydayRecord, PaymentEntry, Timestamp};
