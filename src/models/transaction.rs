//! Transaction model
//!
//! One immutable record per ledger row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::period::MonthKey;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlowType {
    /// Money coming in
    Credit,
    /// Money going out
    Debit,
}

impl FlowType {
    /// Parse "credit"/"debit" in any case, ignoring surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("credit") {
            Some(Self::Credit)
        } else if s.eq_ignore_ascii_case("debit") {
            Some(Self::Debit)
        } else {
            None
        }
    }
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit => write!(f, "CREDIT"),
            Self::Debit => write!(f, "DEBIT"),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub flow_type: FlowType,
    /// Non-negative amount; the direction comes from `flow_type`
    pub amount: Money,
    /// Running balance as exported by the bank; not aggregated
    pub balance: Money,
    /// Recipient of a debit (the `destination` column)
    pub counterparty: String,
}

impl TransactionRecord {
    /// Check if this is an outgoing transaction
    pub fn is_debit(&self) -> bool {
        self.flow_type == FlowType::Debit
    }

    /// Check if this is an incoming transaction
    pub fn is_credit(&self) -> bool {
        self.flow_type == FlowType::Credit
    }

    /// The month bucket this record falls into
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {:<15} | {:<12} | {:<6} | {:>10} | {:>12} | {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.description,
            self.flow_type,
            self.amount,
            self.balance,
            self.counterparty
        )
    }
}
