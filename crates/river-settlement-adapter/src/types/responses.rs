/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response envelopes with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::{Deposit, Withdrawal};

/// A single page of deposits. `next_timestamp` of zero means no further
/// page; pass it back verbatim to continue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositList {
    pub deposits: Vec<Deposit>,
    #[serde(default)]
    pub next_timestamp: i64,
}

impl DepositList {
    /// Number of deposits in this page
    pub fn count(&self) -> usize {
        self.deposits.len()
    }
}

/// A single page of withdrawals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalList {
    pub withdrawals: Vec<Withdrawal>,
    #[serde(default)]
    pub next_timestamp: i64,
}

impl WithdrawalList {
    /// Number of withdrawals in this page
    pub fn count(&self) -> usize {
        self.withdrawals.len()
    }
}
