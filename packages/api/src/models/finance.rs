//! Finance DTOs. Read-only: the app lists them but offers no finance mutations yet.

use serde::{Deserialize, Serialize};

use super::{nullable, Id};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinanceAccount {
    pub id: Option<Id>,
    #[serde(rename = "IBAN", alias = "iban", deserialize_with = "nullable")]
    pub iban: String,
    #[serde(deserialize_with = "nullable")]
    pub balance: f64,
    #[serde(deserialize_with = "nullable")]
    pub is_treasurer_account: bool,
}

/// A fundraising collection run by a class treasurer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Collection {
    pub id: Option<Id>,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub goal: f64,
    pub class_id: Option<Id>,
    pub finance_account_id: Option<Id>,
    #[serde(deserialize_with = "nullable")]
    pub total_collected: f64,
    #[serde(deserialize_with = "nullable")]
    pub remaining_amount: f64,
    #[serde(deserialize_with = "nullable")]
    pub goal_per_student: f64,
    #[serde(deserialize_with = "nullable")]
    pub students_paid_in_full: u32,
    #[serde(deserialize_with = "nullable")]
    pub students_count: u32,
}

impl Collection {
    /// Share of the goal collected so far, clamped to `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.goal <= 0.0 {
            return 0.0;
        }
        (self.total_collected / self.goal).clamp(0.0, 1.0)
    }
}

/// A payment the signed-in parent made towards a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contribution {
    pub id: Option<Id>,
    pub collection_id: Option<Id>,
    pub student_id: Option<Id>,
    #[serde(deserialize_with = "nullable")]
    pub amount: f64,
    #[serde(deserialize_with = "nullable")]
    pub created_at: String,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
}
