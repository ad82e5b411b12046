// ⚖️ Balance Calculator - pure fold over the expense record sequence
//
// Positive balance: roommate owes you. Negative: you owe the roommate.
// Zero: settled. No caching; recomputed from scratch on every render pass,
// which is fine at session scale.

use crate::expense::{fmt_inr, ExpenseStore, Payer};

/// Net balance between the two parties.
///
/// For each record: if you paid, the roommate's share is owed to you; if
/// the roommate paid, your share is owed to them. A plain sum, so the
/// result is independent of record order.
pub fn net_balance(store: &ExpenseStore) -> f64 {
    store.iter().fold(0.0, |balance, expense| match expense.paid_by {
        Payer::You => balance + expense.their_share,
        Payer::Roommate => balance - expense.your_share,
    })
}

// ============================================================================
// BALANCE STATUS
// ============================================================================

/// Three-way view of a balance for the payments page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceStatus {
    /// balance > 0 - carries the absolute amount owed
    RoommateOwesYou(f64),
    /// balance < 0 - carries the absolute amount owed
    YouOweRoommate(f64),
    Settled,
}

impl BalanceStatus {
    pub fn from_balance(balance: f64) -> Self {
        if balance > 0.0 {
            BalanceStatus::RoommateOwesYou(balance)
        } else if balance < 0.0 {
            BalanceStatus::YouOweRoommate(-balance)
        } else {
            BalanceStatus::Settled
        }
    }

    /// Absolute amount shown in the balance overview.
    pub fn amount(&self) -> f64 {
        match self {
            BalanceStatus::RoommateOwesYou(a) | BalanceStatus::YouOweRoommate(a) => *a,
            BalanceStatus::Settled => 0.0,
        }
    }

    /// Status line, e.g. "CLOUD_7097 owes you ₹50.00".
    pub fn summary(&self, roommate: &str) -> String {
        match self {
            BalanceStatus::RoommateOwesYou(a) => {
                format!("{} owes you {}", roommate, fmt_inr(*a))
            }
            BalanceStatus::YouOweRoommate(a) => {
                format!("You owe {} {}", roommate, fmt_inr(*a))
            }
            BalanceStatus::Settled => "All settled up! 🎉".to_string(),
        }
    }

    /// Settlement action offered for this state; settled has none.
    pub fn action(&self) -> Option<&'static str> {
        match self {
            BalanceStatus::RoommateOwesYou(_) => Some("Request Payment"),
            BalanceStatus::YouOweRoommate(_) => Some("Pay Now"),
            BalanceStatus::Settled => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::{Category, Expense};

    fn expense(amount: f64, paid_by: Payer) -> Expense {
        Expense::new(amount, "test".to_string(), Category::Other, None, paid_by)
    }

    #[test]
    fn test_empty_store_is_settled() {
        let store = ExpenseStore::new();
        assert_eq!(net_balance(&store), 0.0);
        assert_eq!(BalanceStatus::from_balance(0.0), BalanceStatus::Settled);
    }

    #[test]
    fn test_you_paying_accrues_their_shares() {
        let mut store = ExpenseStore::new();
        let amounts = [100.0, 42.5, 7.0];
        for amount in amounts {
            store.add(expense(amount, Payer::You));
        }

        let expected: f64 = store.iter().map(|e| e.their_share).sum();
        assert!((net_balance(&store) - expected).abs() <= 1e-9);
        assert!((net_balance(&store) - amounts.iter().sum::<f64>() / 2.0).abs() <= 1e-9);
    }

    #[test]
    fn test_roommate_paying_accrues_negative_your_shares() {
        let mut store = ExpenseStore::new();
        for amount in [60.0, 40.0] {
            store.add(expense(amount, Payer::Roommate));
        }

        let expected: f64 = -store.iter().map(|e| e.your_share).sum::<f64>();
        assert!((net_balance(&store) - expected).abs() <= 1e-9);
        assert!((net_balance(&store) + 50.0).abs() <= 1e-9);
    }

    #[test]
    fn test_balance_zero_iff_equal_totals() {
        let mut store = ExpenseStore::new();
        store.add(expense(80.0, Payer::You));
        store.add(expense(30.0, Payer::Roommate));
        store.add(expense(50.0, Payer::Roommate));
        // You paid 80, roommate paid 80
        assert!(net_balance(&store).abs() <= 1e-9);

        store.add(expense(0.02, Payer::You));
        assert!(net_balance(&store).abs() > 1e-9);
    }

    #[test]
    fn test_balance_is_order_insensitive() {
        let a = expense(123.45, Payer::You);
        let b = expense(67.8, Payer::Roommate);
        let c = expense(9.99, Payer::You);

        let mut forward = ExpenseStore::new();
        let mut reverse = ExpenseStore::new();
        for e in [&a, &b, &c] {
            forward.add(e.clone());
        }
        for e in [&c, &b, &a] {
            reverse.add(e.clone());
        }

        assert!((net_balance(&forward) - net_balance(&reverse)).abs() <= 1e-9);
    }

    #[test]
    fn test_worked_example_from_product() {
        // 100 Rent paid by you -> +50.00
        let mut store = ExpenseStore::new();
        store.add(Expense::new(
            100.0,
            "Rent".to_string(),
            Category::Rent,
            None,
            Payer::You,
        ));
        assert!((net_balance(&store) - 50.0).abs() <= 1e-9);

        // then 200 and 50 paid by you -> 50 + 100 + 25
        store.add(expense(200.0, Payer::You));
        store.add(expense(50.0, Payer::You));
        assert!((net_balance(&store) - 175.0).abs() <= 1e-9);
    }

    #[test]
    fn test_two_records_paid_by_you() {
        let mut store = ExpenseStore::new();
        store.add(expense(200.0, Payer::You));
        store.add(expense(50.0, Payer::You));
        assert!((net_balance(&store) - 125.0).abs() <= 1e-9);
    }

    #[test]
    fn test_status_labels_and_actions() {
        let owed = BalanceStatus::from_balance(50.0);
        assert_eq!(owed, BalanceStatus::RoommateOwesYou(50.0));
        assert_eq!(owed.summary("CLOUD_7097"), "CLOUD_7097 owes you ₹50.00");
        assert_eq!(owed.action(), Some("Request Payment"));

        let owing = BalanceStatus::from_balance(-12.5);
        assert_eq!(owing, BalanceStatus::YouOweRoommate(12.5));
        assert_eq!(owing.amount(), 12.5);
        assert_eq!(owing.summary("CLOUD_7097"), "You owe CLOUD_7097 ₹12.50");
        assert_eq!(owing.action(), Some("Pay Now"));

        let settled = BalanceStatus::from_balance(0.0);
        assert_eq!(settled.summary("CLOUD_7097"), "All settled up! 🎉");
        assert_eq!(settled.action(), None);
        assert_eq!(settled.amount(), 0.0);
    }
}
