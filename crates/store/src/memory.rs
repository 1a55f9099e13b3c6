use std::sync::Mutex;

use chrono::Utc;
use unipos_core::{DomainError, DomainResult};

use crate::records::{
    Expense, NewExpense, NewProduct, NewReminder, NewSale, Product, Reminder, Sale, Settings,
};
use crate::user::{NewUser, User};

/// Resource store boundary.
///
/// Object-safe get/put/delete/scan operations over each collection, so the
/// router never touches a concrete backend. Record creation assigns ids
/// inside the store, keeping the "next id" computation atomic with the
/// insert.
pub trait Store: Send + Sync + 'static {
    // users
    fn create_user(&self, new: NewUser) -> DomainResult<User>;
    fn get_user(&self, id: u64) -> Option<User>;
    fn find_user_by_email(&self, email: &str) -> Option<User>;
    /// Replace an existing record wholesale; fails if the id is unknown.
    fn put_user(&self, user: User) -> DomainResult<()>;
    /// Idempotent: deleting an absent id is not an error.
    fn delete_user(&self, id: u64);
    fn scan_users(&self) -> Vec<User>;

    // products
    fn create_product(&self, new: NewProduct) -> Product;
    fn get_product(&self, id: u64) -> Option<Product>;
    fn put_product(&self, product: Product) -> DomainResult<()>;
    fn delete_product(&self, id: u64);
    fn scan_products(&self) -> Vec<Product>;

    // sales
    fn create_sale(&self, new: NewSale) -> Sale;
    fn scan_sales(&self) -> Vec<Sale>;

    // expenses
    fn create_expense(&self, new: NewExpense) -> Expense;
    fn delete_expense(&self, id: u64);
    fn scan_expenses(&self) -> Vec<Expense>;

    // reminders
    fn create_reminder(&self, new: NewReminder) -> Reminder;
    fn put_reminder(&self, reminder: Reminder) -> DomainResult<()>;
    fn scan_reminders(&self) -> Vec<Reminder>;

    // settings singleton
    fn settings(&self) -> Settings;
    fn put_settings(&self, settings: Settings);
}

#[derive(Debug, Default)]
struct State {
    users: Vec<User>,
    products: Vec<Product>,
    sales: Vec<Sale>,
    expenses: Vec<Expense>,
    reminders: Vec<Reminder>,
    settings: Settings,
    next_user_id: u64,
    next_product_id: u64,
    next_sale_id: u64,
    next_expense_id: u64,
    next_reminder_id: u64,
}

impl State {
    fn next_id(counter: &mut u64) -> u64 {
        *counter += 1;
        *counter
    }
}

/// In-memory [`Store`].
///
/// One mutex guards every collection, serializing all reads and writes the
/// way the original single-invocation process model did. Ids are counters,
/// not `len + 1`, so deletes never cause id reuse. Everything vanishes on
/// restart; there is no durability guarantee.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with<R>(&self, f: impl FnOnce(&mut State) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }
}

impl Store for MemoryStore {
    fn create_user(&self, new: NewUser) -> DomainResult<User> {
        self.with(|s| {
            if s.users.iter().any(|u| u.email == new.email) {
                return Err(DomainError::conflict("User already exists"));
            }
            let is_first = s.users.is_empty();
            let id = State::next_id(&mut s.next_user_id);
            let user = User::create(id, new, is_first, Utc::now());
            s.users.push(user.clone());
            Ok(user)
        })
    }

    fn get_user(&self, id: u64) -> Option<User> {
        self.with(|s| s.users.iter().find(|u| u.id == id).cloned())
    }

    fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.with(|s| s.users.iter().find(|u| u.email == email).cloned())
    }

    fn put_user(&self, user: User) -> DomainResult<()> {
        self.with(|s| {
            // Email uniqueness holds across updates too, not just creation.
            if s.users.iter().any(|u| u.id != user.id && u.email == user.email) {
                return Err(DomainError::conflict("User already exists"));
            }
            match s.users.iter_mut().find(|u| u.id == user.id) {
                Some(slot) => {
                    *slot = user;
                    Ok(())
                }
                None => Err(DomainError::NotFound),
            }
        })
    }

    fn delete_user(&self, id: u64) {
        self.with(|s| s.users.retain(|u| u.id != id));
    }

    fn scan_users(&self) -> Vec<User> {
        self.with(|s| s.users.clone())
    }

    fn create_product(&self, new: NewProduct) -> Product {
        self.with(|s| {
            let product = Product {
                id: State::next_id(&mut s.next_product_id),
                name: new.name,
                price: new.price,
                cost: new.cost,
                stock: new.stock,
                created_at: Utc::now(),
            };
            s.products.push(product.clone());
            product
        })
    }

    fn get_product(&self, id: u64) -> Option<Product> {
        self.with(|s| s.products.iter().find(|p| p.id == id).cloned())
    }

    fn put_product(&self, product: Product) -> DomainResult<()> {
        self.with(|s| match s.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product;
                Ok(())
            }
            None => Err(DomainError::NotFound),
        })
    }

    fn delete_product(&self, id: u64) {
        self.with(|s| s.products.retain(|p| p.id != id));
    }

    fn scan_products(&self) -> Vec<Product> {
        self.with(|s| s.products.clone())
    }

    fn create_sale(&self, new: NewSale) -> Sale {
        self.with(|s| {
            let sale = Sale {
                id: State::next_id(&mut s.next_sale_id),
                total: new.total,
                cogs: new.cogs,
                created_at: Utc::now(),
            };
            s.sales.push(sale.clone());
            sale
        })
    }

    fn scan_sales(&self) -> Vec<Sale> {
        self.with(|s| s.sales.clone())
    }

    fn create_expense(&self, new: NewExpense) -> Expense {
        self.with(|s| {
            let expense = Expense {
                id: State::next_id(&mut s.next_expense_id),
                description: new.description,
                amount: new.amount,
                created_at: Utc::now(),
            };
            s.expenses.push(expense.clone());
            expense
        })
    }

    fn delete_expense(&self, id: u64) {
        self.with(|s| s.expenses.retain(|e| e.id != id));
    }

    fn scan_expenses(&self) -> Vec<Expense> {
        self.with(|s| s.expenses.clone())
    }

    fn create_reminder(&self, new: NewReminder) -> Reminder {
        self.with(|s| {
            let reminder = Reminder {
                id: State::next_id(&mut s.next_reminder_id),
                title: new.title,
                due_date: new.due_date,
                completed: false,
                created_at: Utc::now(),
            };
            s.reminders.push(reminder.clone());
            reminder
        })
    }

    fn put_reminder(&self, reminder: Reminder) -> DomainResult<()> {
        self.with(|s| match s.reminders.iter_mut().find(|r| r.id == reminder.id) {
            Some(slot) => {
                *slot = reminder;
                Ok(())
            }
            None => Err(DomainError::NotFound),
        })
    }

    fn scan_reminders(&self) -> Vec<Reminder> {
        self.with(|s| s.reminders.clone())
    }

    fn settings(&self) -> Settings {
        self.with(|s| s.settings.clone())
    }

    fn put_settings(&self, settings: Settings) {
        self.with(|s| s.settings = settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserOrigin;
    use unipos_auth::Role;
    use unipos_core::Money;

    fn signup(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: Some("$2b$fake".to_string()),
            name: email.to_string(),
            origin: UserOrigin::SelfSignup,
        }
    }

    #[test]
    fn first_user_is_admin_subsequent_are_cashiers() {
        let store = MemoryStore::new();
        let first = store.create_user(signup("a@shop.co")).unwrap();
        let second = store.create_user(signup("b@shop.co")).unwrap();

        assert_eq!(first.role, Role::Admin);
        assert_eq!(second.role, Role::Cashier);
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn duplicate_email_is_rejected_regardless_of_other_fields() {
        let store = MemoryStore::new();
        store.create_user(signup("a@shop.co")).unwrap();

        let mut dup = signup("a@shop.co");
        dup.name = "Different Name".to_string();
        assert_eq!(
            store.create_user(dup).unwrap_err(),
            DomainError::conflict("User already exists")
        );
    }

    #[test]
    fn delete_user_is_idempotent() {
        let store = MemoryStore::new();
        let u = store.create_user(signup("a@shop.co")).unwrap();

        store.delete_user(u.id);
        store.delete_user(u.id);
        assert!(store.get_user(u.id).is_none());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let a = store.create_user(signup("a@shop.co")).unwrap();
        store.delete_user(a.id);
        let b = store.create_user(signup("b@shop.co")).unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn put_user_requires_existing_id() {
        let store = MemoryStore::new();
        let mut u = store.create_user(signup("a@shop.co")).unwrap();
        u.name = "Renamed".to_string();
        store.put_user(u.clone()).unwrap();
        assert_eq!(store.get_user(u.id).unwrap().name, "Renamed");

        u.id = 999;
        assert_eq!(store.put_user(u).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn put_user_rejects_an_email_held_by_another_account() {
        let store = MemoryStore::new();
        store.create_user(signup("a@shop.co")).unwrap();
        let mut b = store.create_user(signup("b@shop.co")).unwrap();

        b.email = "a@shop.co".to_string();
        assert_eq!(
            store.put_user(b.clone()).unwrap_err(),
            DomainError::conflict("User already exists")
        );
        // The original record is untouched and lookups stay unambiguous.
        assert_eq!(store.get_user(b.id).unwrap().email, "b@shop.co");
        assert_eq!(store.find_user_by_email("a@shop.co").unwrap().id, 1);

        // Re-putting your own email is not a conflict.
        let b = store.get_user(b.id).unwrap();
        store.put_user(b).unwrap();
    }

    #[test]
    fn settings_singleton_survives_replacement() {
        let store = MemoryStore::new();
        assert_eq!(store.settings(), Settings::default());

        let mut s = store.settings();
        s.company_name = "Corner Shop".to_string();
        store.put_settings(s);
        assert_eq!(store.settings().company_name, "Corner Shop");
    }

    #[test]
    fn concurrent_signups_never_mint_duplicate_ids() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(std::thread::spawn(move || {
                store.create_user(signup(&format!("u{i}@shop.co"))).unwrap().id
            }));
        }
        let mut ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }

    #[test]
    fn sales_and_expenses_accumulate() {
        let store = MemoryStore::new();
        store.create_sale(NewSale {
            total: Money::from(100),
            cogs: Some(Money::from(40)),
        });
        store.create_expense(NewExpense {
            description: "Rent".to_string(),
            amount: Money::from(30),
        });

        assert_eq!(store.scan_sales().len(), 1);
        assert_eq!(store.scan_expenses().len(), 1);
    }
}
