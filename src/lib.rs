// InTune Split - Core Library
// Exposes all modules for use in the TUI binary and tests

pub mod expense;
pub mod balance;
pub mod form;
pub mod payment;

// Re-export commonly used types
pub use expense::{fmt_inr, Category, Expense, ExpenseStore, Payer, ROOMMATE_ID};
pub use balance::{net_balance, BalanceStatus};
pub use form::{ExpenseForm, Field};
pub use payment::{open_app_toast, settlement_toast, QrPreview, QrSlot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
