//! `unipos-store` — record types and the resource store boundary.
//!
//! All state lives behind the [`Store`] trait so the backend is swappable;
//! the shipped implementation is process-memory only and resets on restart
//! (documented limitation, not a bug).

pub mod memory;
pub mod records;
pub mod user;

pub use memory::{MemoryStore, Store};
pub use records::{
    Expense, NewExpense, NewProduct, NewReminder, NewSale, Product, Reminder, Sale, Settings,
};
pub use user::{NewUser, User, UserOrigin, UserView};
