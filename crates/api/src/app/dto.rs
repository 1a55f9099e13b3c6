use serde::{Deserialize, Serialize};

use unipos_auth::{PermissionSet, Plan, Role};
use unipos_core::Money;
use unipos_store::UserView;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub new_password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateStaffRequest {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Partial user update. Which fields a caller may touch depends on their
/// role; see `routes::users::update_user`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub plan: Option<Plan>,
    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub permissions: Option<PermissionSet>,
}

impl UpdateUserRequest {
    /// True when any admin-only field is present.
    pub fn touches_privileged_fields(&self) -> bool {
        self.email.is_some()
            || self.role.is_some()
            || self.plan.is_some()
            || self.price.is_some()
            || self.active.is_some()
            || self.permissions.is_some()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default)]
    pub cost: Option<Money>,
    #[serde(default)]
    pub stock: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReminderRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub completed: Option<bool>,
}

// -------------------------
// Response DTOs
// -------------------------

/// `{token, user}` envelope returned by signup, login, and user updates.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: UserView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_login: Option<bool>,
}

/// Login response when the account still needs a password.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordSetupResponse {
    pub needs_password_setup: bool,
    pub user_id: u64,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_sales: Money,
    #[serde(rename = "totalCOGS")]
    pub total_cogs: Money,
    pub total_expenses: Money,
    pub gross_profit: Money,
    pub net_profit: Money,
    pub sales_count: usize,
    pub product_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_accepts_new_password_field() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"email":"a@b.c","newPassword":"pw"}"#).unwrap();
        assert_eq!(req.new_password.as_deref(), Some("pw"));
        assert!(req.password.is_none());
    }

    #[test]
    fn privileged_field_detection() {
        let name_only: UpdateUserRequest = serde_json::from_str(r#"{"name":"N"}"#).unwrap();
        assert!(!name_only.touches_privileged_fields());

        let promote: UpdateUserRequest = serde_json::from_str(r#"{"role":"admin"}"#).unwrap();
        assert!(promote.touches_privileged_fields());
    }

    #[test]
    fn stats_wire_name_for_cogs_is_upper_case() {
        let stats = StatsResponse {
            total_sales: Money::from(300),
            total_cogs: Money::from(100),
            total_expenses: Money::from(30),
            gross_profit: Money::from(200),
            net_profit: Money::from(170),
            sales_count: 2,
            product_count: 0,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert!(json.get("totalCOGS").is_some());
        assert_eq!(json["netProfit"], 170.0);
    }
}
