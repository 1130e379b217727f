//! # Payday Records
//!
//! The per-player payment document stored in the document store, plus the
//! timestamp newtype used throughout the plugin.
//!
//! Stored documents use camelCase field names so records written by earlier
//! deployments of the plugin read back unchanged.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::PaymentsConfig;

/// A moment in time as milliseconds since the Unix epoch.
///
/// Deserialization is deliberately lenient: some store backends hand
/// timestamps back as strings rather than numbers, and those must be
/// normalized here rather than at every call site. An unparseable value
/// decodes as [`Timestamp::UNSET`], which the calculator treats as "no
/// previous payday" (zero accrual) instead of a huge catch-up payment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The zero timestamp, used as the "never paid" sentinel.
    pub const UNSET: Self = Self(0);

    /// The current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or(0);
        Self(u64::try_from(millis).unwrap_or(u64::MAX))
    }

    /// Builds a timestamp from epoch milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Epoch milliseconds.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// True for the "never paid" sentinel.
    #[must_use]
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }

    /// This timestamp moved `millis` into the past, saturating at the epoch.
    #[must_use]
    pub const fn minus_millis(self, millis: u64) -> Self {
        Self(self.0.saturating_sub(millis))
    }

    /// Milliseconds elapsed between `earlier` and `self` (zero if reversed).
    #[must_use]
    pub const fn since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an epoch-milliseconds timestamp")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Timestamp(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Timestamp(u64::try_from(value).unwrap_or(0)))
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                if value.is_finite() && value >= 0.0 {
                    Ok(Timestamp(value as u64))
                } else {
                    Ok(Timestamp::UNSET)
                }
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                // Stringified numbers come back from some store drivers.
                Ok(value.trim().parse::<u64>().map(Timestamp).unwrap_or(Timestamp::UNSET))
            }
        }

        deserializer.deserialize_any(TimestampVisitor)
    }
}

/// One payment in a player's history. Entries are append-only: once written
/// they are never mutated or removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentEntry {
    /// Who paid.
    pub sender: String,
    /// How much was paid.
    pub amount: u64,
    /// When the payment happened.
    pub date: Timestamp,
}

/// The per-player payday document, keyed by character username.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaydayRecord {
    /// Unique key; immutable after creation.
    pub username: String,
    /// Moment of the most recent payment.
    pub last_payday: Timestamp,
    /// The configured recurring payment amount.
    pub amount: u64,
    /// The named payer; equals the configured default sender while
    /// unemployed, anything else marks a custom payer.
    pub sender: String,
    /// Full payment history, insertion order = chronological order.
    pub paydays: Vec<PaymentEntry>,
}

impl PaydayRecord {
    /// A fresh record in the default unemployed state. Used both for first
    /// initialization and for resets.
    #[must_use]
    pub fn unemployed(username: impl Into<String>, payments: &PaymentsConfig) -> Self {
        Self {
            username: username.into(),
            last_payday: Timestamp::now(),
            amount: payments.unemployed_amount,
            sender: payments.default_sender.clone(),
            paydays: Vec::new(),
        }
    }

    /// True while the record is in the default unemployed state.
    #[must_use]
    pub fn is_unemployed(&self, payments: &PaymentsConfig) -> bool {
        self.sender == payments.default_sender
    }

    /// Appends a payment to the history and advances `last_payday`.
    pub fn record_payment(&mut self, sender: impl Into<String>, amount: u64, now: Timestamp) {
        self.paydays.push(PaymentEntry {
            sender: sender.into(),
            amount,
            date: now,
        });
        self.last_payday = now;
    }
}
