use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded spending entry.
///
/// Every client-supplied field is stored verbatim: nothing is validated,
/// coerced or defaulted at write time, and a field that was absent in the
/// request stays absent in the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub name: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields for a new expense. All optional on purpose.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewExpense {
    pub name: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}
