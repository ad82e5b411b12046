// 📝 Expense Entry Form - draft state and validation
//
// Holds the four inputs as the user types them. Submission either yields a
// complete record (and resets the form) or silently does nothing, leaving
// every field exactly as entered. No per-field error messages exist.

use serde::{Deserialize, Serialize};

use crate::expense::{Category, Expense, Payer};

/// Which input currently has focus in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Amount,
    Category,
    Description,
    Notes,
}

impl Field {
    pub fn next(&self) -> Self {
        match self {
            Field::Amount => Field::Category,
            Field::Category => Field::Description,
            Field::Description => Field::Notes,
            Field::Notes => Field::Amount,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Field::Amount => Field::Notes,
            Field::Category => Field::Amount,
            Field::Description => Field::Category,
            Field::Notes => Field::Description,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Field::Amount => "Amount (₹)",
            Field::Category => "Category",
            Field::Description => "Description",
            Field::Notes => "Notes (Optional)",
        }
    }
}

// ============================================================================
// FORM STATE
// ============================================================================

/// Draft expense being typed. Category is a selection rather than free
/// text so only members of the fixed set can ever be chosen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseForm {
    pub amount: String,
    pub description: String,
    pub category: Option<Category>,
    pub notes: String,
    pub focused: Field,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseForm {
    pub fn new() -> Self {
        ExpenseForm {
            amount: String::new(),
            description: String::new(),
            category: None,
            notes: String::new(),
            focused: Field::Amount,
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    /// Type a character into the focused field. The category field is a
    /// selector, not a text input, so characters there are ignored.
    pub fn push_char(&mut self, c: char) {
        match self.focused {
            Field::Amount => self.amount.push(c),
            Field::Description => self.description.push(c),
            Field::Notes => self.notes.push(c),
            Field::Category => {}
        }
    }

    /// Backspace in the focused field.
    pub fn pop_char(&mut self) {
        match self.focused {
            Field::Amount => {
                self.amount.pop();
            }
            Field::Description => {
                self.description.pop();
            }
            Field::Notes => {
                self.notes.pop();
            }
            Field::Category => {}
        }
    }

    /// Step the category selection forward (wrapping), starting from the
    /// first category when none is selected yet.
    pub fn cycle_category(&mut self) {
        let all = Category::all();
        self.category = match self.category {
            None => Some(all[0]),
            Some(current) => {
                let i = all.iter().position(|c| *c == current).unwrap_or(0);
                Some(all[(i + 1) % all.len()])
            }
        };
    }

    /// Step the category selection backward (wrapping), starting from the
    /// last category when none is selected yet.
    pub fn cycle_category_back(&mut self) {
        let all = Category::all();
        self.category = match self.category {
            None => Some(all[all.len() - 1]),
            Some(current) => {
                let i = all.iter().position(|c| *c == current).unwrap_or(0);
                Some(all[(i + all.len() - 1) % all.len()])
            }
        };
    }

    /// Amount is valid when it parses to a positive finite number.
    fn parsed_amount(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0)
    }

    /// Whether the current draft would be accepted.
    pub fn is_valid(&self) -> bool {
        self.parsed_amount().is_some()
            && !self.description.trim().is_empty()
            && self.category.is_some()
    }

    /// Validate and build the record. Invalid or incomplete input returns
    /// None and leaves the draft untouched; valid input yields a record
    /// paid by you, split 50/50, and resets every field to its default.
    pub fn submit(&mut self) -> Option<Expense> {
        let amount = self.parsed_amount()?;
        let description = self.description.trim();
        if description.is_empty() {
            return None;
        }
        let category = self.category?;

        let notes = self.notes.trim();
        let notes = if notes.is_empty() {
            None
        } else {
            Some(notes.to_string())
        };

        let expense = Expense::new(amount, description.to_string(), category, notes, Payer::You);

        *self = ExpenseForm::new();

        Some(expense)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ExpenseForm {
        let mut form = ExpenseForm::new();
        form.amount = "100".to_string();
        form.description = "Rent".to_string();
        form.category = Some(Category::Rent);
        form
    }

    #[test]
    fn test_valid_submission_builds_record_and_resets() {
        let mut form = filled_form();
        form.notes = "September".to_string();

        let expense = form.submit().expect("valid draft should submit");

        assert_eq!(expense.amount, 100.0);
        assert_eq!(expense.description, "Rent");
        assert_eq!(expense.category, Category::Rent);
        assert_eq!(expense.notes.as_deref(), Some("September"));
        assert_eq!(expense.paid_by, Payer::You);
        assert_eq!(expense.your_share, 50.0);
        assert_eq!(expense.their_share, 50.0);

        // Form cleared back to defaults
        assert!(form.amount.is_empty());
        assert!(form.description.is_empty());
        assert_eq!(form.category, None);
        assert!(form.notes.is_empty());
        assert_eq!(form.focused, Field::Amount);
    }

    #[test]
    fn test_empty_notes_become_none() {
        let mut form = filled_form();
        form.notes = "   ".to_string();

        let expense = form.submit().unwrap();
        assert_eq!(expense.notes, None);
    }

    #[test]
    fn test_missing_amount_is_silent_noop() {
        let mut form = filled_form();
        form.amount = String::new();

        assert!(form.submit().is_none());
        // Draft retained, not cleared
        assert_eq!(form.description, "Rent");
        assert_eq!(form.category, Some(Category::Rent));
    }

    #[test]
    fn test_invalid_amounts_are_rejected() {
        for bad in ["0", "-5", "abc", "1.2.3", "NaN", "inf", ""] {
            let mut form = filled_form();
            form.amount = bad.to_string();
            assert!(form.submit().is_none(), "amount '{}' should be rejected", bad);
            assert_eq!(form.amount, bad, "rejected draft must be untouched");
        }
    }

    #[test]
    fn test_missing_description_is_silent_noop() {
        let mut form = filled_form();
        form.description = "   ".to_string();

        assert!(form.submit().is_none());
        assert_eq!(form.amount, "100");
    }

    #[test]
    fn test_missing_category_is_silent_noop() {
        let mut form = filled_form();
        form.category = None;

        assert!(form.submit().is_none());
        assert_eq!(form.amount, "100");
        assert_eq!(form.description, "Rent");
    }

    #[test]
    fn test_each_missing_field_rejects_regardless_of_others() {
        // Every combination with exactly one required field invalid
        for (amount, description, category) in [
            ("", "Rent", Some(Category::Rent)),
            ("100", "", Some(Category::Rent)),
            ("100", "Rent", None),
            ("", "", Some(Category::Rent)),
            ("", "Rent", None),
            ("100", "", None),
            ("", "", None),
        ] {
            let mut form = ExpenseForm::new();
            form.amount = amount.to_string();
            form.description = description.to_string();
            form.category = category;

            assert!(form.submit().is_none());
        }
    }

    #[test]
    fn test_typing_targets_focused_field() {
        let mut form = ExpenseForm::new();
        form.push_char('4');
        form.push_char('2');
        assert_eq!(form.amount, "42");

        form.focus_next(); // Category - ignores typed chars
        form.push_char('x');
        assert_eq!(form.category, None);

        form.focus_next(); // Description
        form.push_char('T');
        form.push_char('e');
        form.push_char('a');
        assert_eq!(form.description, "Tea");

        form.pop_char();
        assert_eq!(form.description, "Te");

        form.focus_previous();
        form.focus_previous();
        assert_eq!(form.focused, Field::Amount);
    }

    #[test]
    fn test_cycle_category_wraps_through_all() {
        let mut form = ExpenseForm::new();
        assert_eq!(form.category, None);

        let all = Category::all();
        for expected in all {
            form.cycle_category();
            assert_eq!(form.category, Some(expected));
        }

        // Wraps back to the first
        form.cycle_category();
        assert_eq!(form.category, Some(all[0]));
    }

    #[test]
    fn test_cycle_category_back_reverses_forward() {
        let mut form = ExpenseForm::new();
        let all = Category::all();

        // No selection yet: backward starts from the last category
        form.cycle_category_back();
        assert_eq!(form.category, Some(all[all.len() - 1]));

        // Backward undoes forward from every position
        for _ in 0..all.len() {
            let before = form.category;
            form.cycle_category();
            form.cycle_category_back();
            assert_eq!(form.category, before);
            form.cycle_category();
        }

        // Wraps from the first back to the last
        form.category = Some(all[0]);
        form.cycle_category_back();
        assert_eq!(form.category, Some(all[all.len() - 1]));
    }
}
