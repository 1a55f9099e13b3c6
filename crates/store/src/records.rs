//! Resource collection records: products, sales, expenses, reminders, and
//! the process-wide settings singleton.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use unipos_core::Money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: Money,
    pub cost: Money,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub cost: Money,
    #[serde(default)]
    pub stock: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: u64,
    pub total: Money,
    /// Recorded cost of goods for the sale, when known.
    pub cogs: Option<Money>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSale {
    pub total: Money,
    #[serde(default)]
    pub cogs: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: u64,
    pub description: String,
    pub amount: Money,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: u64,
    pub title: String,
    pub due_date: DateTime<Utc>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    /// Due on the given calendar day (server-local) and not yet completed.
    pub fn is_due_on(&self, day: chrono::NaiveDate) -> bool {
        !self.completed && self.due_date.with_timezone(&chrono::Local).date_naive() == day
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub title: String,
    pub due_date: DateTime<Utc>,
}

/// Process-wide settings singleton. Mutated via `PUT /settings`, never
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Screen lock timeout in milliseconds.
    pub lock_timeout: u64,
    pub currency: String,
    pub company_name: String,
    pub tax_rate: Money,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lock_timeout: 45_000,
            currency: "KSH".to_string(),
            company_name: "Universal POS".to_string(),
            tax_rate: Money::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn default_settings_match_contract() {
        let s = Settings::default();
        assert_eq!(s.lock_timeout, 45_000);
        assert_eq!(s.currency, "KSH");
        assert_eq!(s.company_name, "Universal POS");
        assert_eq!(s.tax_rate, Money::ZERO);

        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["lockTimeout"], 45_000);
        assert_eq!(json["companyName"], "Universal POS");
    }

    #[test]
    fn completed_reminder_is_never_due() {
        let today = Local::now().date_naive();
        let r = Reminder {
            id: 1,
            title: "Restock".to_string(),
            due_date: Utc::now(),
            completed: true,
            created_at: Utc::now(),
        };
        assert!(!r.is_due_on(today));
    }

    #[test]
    fn open_reminder_due_today_matches() {
        let today = Local::now().date_naive();
        let r = Reminder {
            id: 1,
            title: "Restock".to_string(),
            due_date: Utc::now(),
            completed: false,
            created_at: Utc::now(),
        };
        assert!(r.is_due_on(today));
    }
}
