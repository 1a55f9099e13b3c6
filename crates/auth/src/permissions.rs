use serde::{Deserialize, Serialize};

/// Capability flags granted to a cashier account.
///
/// Admins bypass this set entirely; it only gates what a cashier may read or
/// manage. Wire names are camelCase to match the stored JSON contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PermissionSet {
    pub view_sales: bool,
    pub view_inventory: bool,
    pub view_expenses: bool,
    pub manage_products: bool,
}

impl PermissionSet {
    /// No capabilities granted.
    pub fn none() -> Self {
        Self::default()
    }

    /// Default grants for a self-registered cashier.
    pub fn cashier_default() -> Self {
        Self {
            view_sales: true,
            view_inventory: true,
            view_expenses: false,
            manage_products: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cashier_defaults_match_contract() {
        let p = PermissionSet::cashier_default();
        assert!(p.view_sales);
        assert!(p.view_inventory);
        assert!(!p.view_expenses);
        assert!(!p.manage_products);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(PermissionSet::cashier_default()).unwrap();
        assert_eq!(json["viewSales"], true);
        assert_eq!(json["viewInventory"], true);
        assert_eq!(json["viewExpenses"], false);
        assert_eq!(json["manageProducts"], false);
    }

    #[test]
    fn missing_fields_default_to_false() {
        let p: PermissionSet = serde_json::from_str("{\"viewSales\":true}").unwrap();
        assert!(p.view_sales);
        assert!(!p.manage_products);
    }
}
