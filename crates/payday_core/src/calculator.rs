//! # Payment Calculator
//!
//! Pure payment math. Given a record and the current time this decides how
//! much a player is owed, with no side effects and no I/O.
//!
//! ## The model
//!
//! - **Accrual**: every full interval that elapsed since `last_payday`
//!   without a scheduled payment is a "missed period"; each one pays the
//!   base unemployed stipend as catch-up.
//! - **Top-up**: on top of any accrual, every payment includes one flat
//!   amount for the current cycle - the base stipend while unemployed, the
//!   record's configured amount under a custom payer.
//! - **Manual triggers** never accrue: they pay the top-up only, so a manual
//!   payday cannot double-count elapsed periods that the next scheduled tick
//!   will settle.
//!
//! Note the top-up is paid even at zero missed periods: a tick that fires
//! before a full interval has elapsed still pays the current cycle. That is
//! intentional, not a double payment.

use serde::Serialize;

use crate::config::PaymentsConfig;
use crate::record::{PaydayRecord, Timestamp};

/// Outcome of a payment computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaymentDue {
    /// Total amount to credit.
    pub amount: u64,
    /// Full intervals elapsed since the last payday (zero for manual).
    pub missed_periods: u64,
}

/// Computes the payment owed for `record` at time `now`.
///
/// `manual` marks a player-triggered payday as opposed to a scheduled tick;
/// manual paydays skip elapsed-time accrual entirely.
#[must_use]
pub fn compute_payment(
    record: &PaydayRecord,
    manual: bool,
    now: Timestamp,
    payments: &PaymentsConfig,
) -> PaymentDue {
    let mut missed_periods = 0;
    let mut amount: u64 = 0;

    if !manual {
        // An unset last_payday means "never paid": no catch-up owed.
        let elapsed = if record.last_payday.is_unset() {
            0
        } else {
            now.since(record.last_payday)
        };

        if payments.interval_ms > 0 {
            missed_periods = elapsed / payments.interval_ms;
        }

        amount = missed_periods.saturating_mul(payments.unemployed_amount);
    }

    let top_up = if record.is_unemployed(payments) {
        payments.unemployed_amount
    } else {
        record.amount
    };

    PaymentDue {
        amount: amount.saturating_add(top_up),
        missed_periods,
    }
}
