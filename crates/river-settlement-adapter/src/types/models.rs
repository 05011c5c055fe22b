/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// The default and only valid network
pub const LN: &str = "LN";
/// The default and only currency
pub const BTC: &str = "BTC";
/// Fee limit applied when a withdrawal does not specify one, in sats
pub const DEFAULT_FEE_LIMIT: i64 = 300;

/// Balance held in a specific currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyBalance {
    pub currency: String,
    pub amount: i64,
    pub amount_on_hold: i64,
}

/// Balances of an account. A read-only projection of server state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    #[serde(default)]
    pub balance: i64,
    #[serde(default)]
    pub available_balance: i64,
    #[serde(default)]
    pub currency_balances: Vec<CurrencyBalance>,
}

impl Account {
    /// Balance reserved for in-flight operations. Not clamped; the server
    /// may report an available balance above the total.
    pub fn reserved_balance(&self) -> i64 {
        self.balance - self.available_balance
    }
}

/// A deposit intent: an invoice awaiting payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub network: String,
    pub timestamp: i64,
    pub invoice: String,
}

/// Network-level detail of a settled deposit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositDetail {
    pub network: String,
    pub proof: String,
}

/// A single deposit. `state` is a server-defined string such as
/// `pending` or `settled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    pub id: String,
    #[serde(rename = "deposit_intent")]
    pub invoice: Invoice,
    pub amount: i64,
    #[serde(rename = "deposit_details")]
    pub detail: DepositDetail,
    pub state: String,
    pub timestamp: i64,
}

/// Destination and fee constraint of a withdrawal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalDetail {
    pub network: String,
    #[serde(rename = "destination")]
    pub invoice: String,
    pub fee_limit: i64,
}

/// A withdrawal, both as submitted and as returned by the server.
/// Server-populated fields are empty or zero on submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub amount: i64,
    pub currency: String,
    #[serde(rename = "withdrawal_details")]
    pub details: WithdrawalDetail,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub fee_paid: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub timestamp: i64,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl Withdrawal {
    /// Withdrawal of `amount` sats paying `invoice`, with the default fee
    /// limit
    pub fn new(amount: i64, invoice: impl Into<String>) -> Self {
        Self::with_fee_limit(amount, invoice, DEFAULT_FEE_LIMIT)
    }

    /// Withdrawal with an explicit fee limit in sats
    pub fn with_fee_limit(amount: i64, invoice: impl Into<String>, fee_limit: i64) -> Self {
        Self {
            amount,
            currency: BTC.to_string(),
            details: WithdrawalDetail {
                network: LN.to_string(),
                invoice: invoice.into(),
                fee_limit,
            },
            state: String::new(),
            id: String::new(),
            fee_paid: 0,
            timestamp: 0,
        }
    }

    /// The destination invoice string
    pub fn invoice(&self) -> &str {
        &self.details.invoice
    }

    /// The network the withdrawal settles over
    pub fn network(&self) -> &str {
        &self.details.network
    }

    /// The fee limit submitted with the withdrawal, in sats
    pub fn fee_limit(&self) -> i64 {
        self.details.fee_limit
    }
}

/// Result of decoding a BOLT-11 invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedInvoice {
    pub amount: i64,
    pub memo: String,
    pub node_id: String,
    #[serde(rename = "destination")]
    pub invoice: String,
}

/// Result of a lightning fee estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeEstimate {
    pub amount: i64,
    #[serde(rename = "destination")]
    pub invoice: String,
    pub fee: i64,
}

/// Webhook subscription state. The secret is only present on the
/// creation response; elsewhere it deserializes to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    pub url: String,
    #[serde(default)]
    pub secret: String,
    pub enabled: bool,
}
