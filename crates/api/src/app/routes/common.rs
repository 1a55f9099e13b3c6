use unipos_auth::PermissionSet;
use unipos_store::Store;

use crate::app::errors::ApiError;
use crate::context::CurrentUser;

/// Admin-only gate. Runs after authentication, so a 401 always takes
/// precedence over this 403.
pub fn require_admin(current: &CurrentUser) -> Result<(), ApiError> {
    if current.is_admin() {
        Ok(())
    } else {
        Err(ApiError::forbidden("Admin access required"))
    }
}

/// Capability gate for cashier accounts; admins bypass.
///
/// The flag is read from the stored record, not the token, so permission
/// changes take effect without re-issuing tokens.
pub fn require_permission(
    store: &dyn Store,
    current: &CurrentUser,
    check: impl Fn(&PermissionSet) -> bool,
    label: &str,
) -> Result<(), ApiError> {
    if current.is_admin() {
        return Ok(());
    }
    let granted = store
        .get_user(current.id())
        .map(|u| check(&u.permissions))
        .unwrap_or(false);
    if granted {
        Ok(())
    } else {
        Err(ApiError::forbidden(format!("{label} permission required")))
    }
}
