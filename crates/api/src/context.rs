use unipos_auth::{Claims, Role};

/// Authenticated identity for a request, derived from verified token claims.
///
/// Every request is evaluated independently; the server keeps no session
/// state between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    id: u64,
    email: String,
    role: Role,
}

impl CurrentUser {
    pub fn new(id: u64, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            role,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}
