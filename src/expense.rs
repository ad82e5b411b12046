// 🧾 Expense Store - immutable records with a fixed 50/50 split
//
// Records are created once by the entry form and never updated or removed.
// The store is an append-only ordered sequence owned by the app state;
// new records are prepended so display order is newest-first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display identity of the matched roommate. Hardcoded for now; the
/// matching flow that would populate this dynamically lives outside
/// this crate.
pub const ROOMMATE_ID: &str = "CLOUD_7097";

// ============================================================================
// CATEGORY
// ============================================================================

/// Fixed expense category set. Unknown inputs fall back to `Other` at the
/// display layer and are rejected at the form layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Groceries,
    Utilities,
    Rent,
    Food,
    Transport,
    Entertainment,
    Cleaning,
    Other,
}

impl Category {
    /// All categories in selector order.
    pub fn all() -> [Category; 8] {
        [
            Category::Groceries,
            Category::Utilities,
            Category::Rent,
            Category::Food,
            Category::Transport,
            Category::Entertainment,
            Category::Cleaning,
            Category::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Groceries => "groceries",
            Category::Utilities => "utilities",
            Category::Rent => "rent",
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Cleaning => "cleaning",
            Category::Other => "other",
        }
    }

    /// Human-facing label for selectors and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::Utilities => "Utilities",
            Category::Rent => "Rent",
            Category::Food => "Food & Dining",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Cleaning => "Cleaning Supplies",
            Category::Other => "Other",
        }
    }

    /// Parse a category token. Returns None for anything outside the fixed
    /// set; callers that want a display fallback use `Other` themselves.
    pub fn parse(s: &str) -> Option<Category> {
        match s.trim().to_lowercase().as_str() {
            "groceries" => Some(Category::Groceries),
            "utilities" => Some(Category::Utilities),
            "rent" => Some(Category::Rent),
            "food" => Some(Category::Food),
            "transport" => Some(Category::Transport),
            "entertainment" => Some(Category::Entertainment),
            "cleaning" => Some(Category::Cleaning),
            "other" => Some(Category::Other),
            _ => None,
        }
    }
}

// ============================================================================
// PAYER
// ============================================================================

/// The two fixed parties. A tagged enum rather than a free-form string so
/// the balance fold is exhaustive and compiler-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payer {
    You,
    Roommate,
}

impl Payer {
    pub fn label(&self) -> &'static str {
        match self {
            Payer::You => "You",
            Payer::Roommate => ROOMMATE_ID,
        }
    }
}

// ============================================================================
// EXPENSE RECORD
// ============================================================================

/// One shared cost event and its 50/50 split.
///
/// Immutable once created: no field is ever mutated and no edit/delete
/// API exists. Invariant: `your_share + their_share == amount` (within
/// floating-point tolerance) at creation time, permanently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Opaque token minted at creation (UUIDv4) - never changes
    pub id: String,

    /// Total amount paid, always positive
    pub amount: f64,

    /// What the expense was for (non-empty)
    pub description: String,

    pub category: Category,

    /// Optional free-text details
    pub notes: Option<String>,

    /// Who fronted the money
    pub paid_by: Payer,

    /// Roommate display label the cost is split with
    pub split_with: String,

    /// Submission timestamp
    pub date: DateTime<Utc>,

    /// Your half of the amount
    pub your_share: f64,

    /// The roommate's half of the amount
    pub their_share: f64,
}

impl Expense {
    /// Build a record with the fixed 50/50 split, timestamped now.
    pub fn new(
        amount: f64,
        description: String,
        category: Category,
        notes: Option<String>,
        paid_by: Payer,
    ) -> Self {
        let half = amount / 2.0;

        Expense {
            id: uuid::Uuid::new_v4().to_string(),
            amount,
            description,
            category,
            notes,
            paid_by,
            split_with: ROOMMATE_ID.to_string(),
            date: Utc::now(),
            your_share: half,
            their_share: half,
        }
    }

    /// Locale-style date for the expense list, e.g. "5 Mar 2026".
    pub fn date_label(&self) -> String {
        self.date.format("%-d %b %Y").to_string()
    }
}

// ============================================================================
// EXPENSE STORE
// ============================================================================

/// Append-only ordered sequence of expense records, held in memory for
/// the lifetime of the session. Newest records first.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ExpenseStore {
    records: Vec<Expense>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        ExpenseStore {
            records: Vec::new(),
        }
    }

    /// Prepend a record so the store stays newest-first.
    pub fn add(&mut self, expense: Expense) {
        self.records.insert(0, expense);
    }

    /// Records in display order (newest first).
    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.records.iter()
    }

    /// The n newest records, for the entry page's preview list.
    pub fn recent(&self, n: usize) -> &[Expense] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Currency display: fixed symbol, two decimal places.
pub fn fmt_inr(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

// ============================================================================
// TESTS
// ============================================================================
