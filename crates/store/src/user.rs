use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use unipos_auth::{PermissionSet, Plan, Role};
use unipos_core::Money;

/// How an account came into existence. Decides which invariants apply at
/// creation time (see [`User::create`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserOrigin {
    /// Self-registered through `/auth/signup`.
    SelfSignup,
    /// Added by an admin through `POST /users`; starts with no password.
    AdminCreated,
}

/// Input for creating an account. The store assigns the id and applies the
/// first-user rule atomically.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    /// Bcrypt hash; `None` for admin-created staff awaiting password setup.
    pub password_hash: Option<String>,
    pub name: String,
    pub origin: UserOrigin,
}

/// A stored account record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    /// Never serialized out of the API; see [`UserView`].
    pub password_hash: Option<String>,
    pub name: String,
    pub role: Role,
    pub plan: Option<Plan>,
    pub price: Option<Money>,
    pub active: bool,
    pub permissions: PermissionSet,
    pub needs_password_setup: bool,
    pub added_by_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Shape a record for insertion.
    ///
    /// `is_first` marks the very first account ever created, which becomes
    /// the active admin on the ultra plan. Everyone else starts as a cashier.
    pub fn create(id: u64, new: NewUser, is_first: bool, now: DateTime<Utc>) -> Self {
        match new.origin {
            UserOrigin::SelfSignup => Self {
                id,
                email: new.email,
                password_hash: new.password_hash,
                name: new.name,
                role: if is_first { Role::Admin } else { Role::Cashier },
                plan: is_first.then_some(Plan::Ultra),
                price: is_first.then(|| Money::from(1600)),
                active: is_first,
                permissions: if is_first {
                    PermissionSet::none()
                } else {
                    PermissionSet::cashier_default()
                },
                needs_password_setup: false,
                added_by_admin: false,
                created_at: now,
            },
            UserOrigin::AdminCreated => Self {
                id,
                email: new.email,
                password_hash: None,
                name: new.name,
                role: Role::Cashier,
                plan: Some(Plan::Ultra),
                price: Some(Money::ZERO),
                active: true,
                permissions: PermissionSet::cashier_default(),
                needs_password_setup: true,
                added_by_admin: true,
                created_at: now,
            },
        }
    }
}

/// API-facing projection of a [`User`] with the credential stripped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub plan: Option<Plan>,
    pub price: Option<Money>,
    pub active: bool,
    pub permissions: PermissionSet,
    pub needs_password_setup: bool,
    pub added_by_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserView {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            email: u.email.clone(),
            name: u.name.clone(),
            role: u.role,
            plan: u.plan,
            price: u.price,
            active: u.active,
            permissions: u.permissions,
            needs_password_setup: u.needs_password_setup,
            added_by_admin: u.added_by_admin,
            created_at: u.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: Some("$2b$fake".to_string()),
            name: "Someone".to_string(),
            origin: UserOrigin::SelfSignup,
        }
    }

    #[test]
    fn first_signup_becomes_active_admin_on_ultra() {
        let u = User::create(1, signup("owner@shop.co"), true, Utc::now());
        assert_eq!(u.role, Role::Admin);
        assert_eq!(u.plan, Some(Plan::Ultra));
        assert_eq!(u.price, Some(Money::from(1600)));
        assert!(u.active);
        assert!(!u.needs_password_setup);
    }

    #[test]
    fn later_signups_are_cashiers_with_default_permissions() {
        let u = User::create(2, signup("staff@shop.co"), false, Utc::now());
        assert_eq!(u.role, Role::Cashier);
        assert_eq!(u.plan, None);
        assert!(!u.active);
        assert_eq!(u.permissions, PermissionSet::cashier_default());
    }

    #[test]
    fn admin_created_staff_awaits_password_setup() {
        let new = NewUser {
            email: "new@shop.co".to_string(),
            password_hash: None,
            name: "New Staff".to_string(),
            origin: UserOrigin::AdminCreated,
        };
        let u = User::create(3, new, false, Utc::now());
        assert_eq!(u.role, Role::Cashier);
        assert_eq!(u.plan, Some(Plan::Ultra));
        assert_eq!(u.price, Some(Money::ZERO));
        assert!(u.active);
        assert!(u.needs_password_setup);
        assert!(u.added_by_admin);
        assert!(u.password_hash.is_none());
    }

    #[test]
    fn view_never_carries_the_credential() {
        let u = User::create(1, signup("owner@shop.co"), true, Utc::now());
        let json = serde_json::to_value(UserView::from(&u)).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["needsPasswordSetup"], false);
        assert_eq!(json["role"], "admin");
    }
}
