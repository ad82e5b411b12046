// 💳 Payment Presentation - simulated settlement + ephemeral QR previews
//
// Two independent image slots, one per party. Attaching reads the file
// into memory for the session only; nothing is stored anywhere and a
// failed attach (missing file, unreadable, non-image) leaves the slot
// unchanged with no error state. None of this touches the expense store
// or the balance.

use std::path::Path;

use crate::balance::BalanceStatus;
use crate::expense::{fmt_inr, Payer};

/// Accepted image extensions, lowercase. Mirrors browser-native
/// `accept="image/*"` filtering; content is never inspected.
const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "bmp", "webp", "svg"];

/// In-memory image preview: the file name shown next to the uploaded
/// checkmark, plus the raw bytes held for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct QrPreview {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// One party's QR-code slot.
#[derive(Debug, Clone)]
pub struct QrSlot {
    pub owner: Payer,
    pub preview: Option<QrPreview>,
}

impl QrSlot {
    pub fn new(owner: Payer) -> Self {
        QrSlot {
            owner,
            preview: None,
        }
    }

    /// Read an image file into this slot, replacing any previous preview.
    /// Returns whether the slot was updated; any failure is a no-op.
    pub fn attach(&mut self, path: &Path) -> bool {
        if !is_image_path(path) {
            return false;
        }

        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => return false,
        };

        match std::fs::read(path) {
            Ok(bytes) => {
                self.preview = Some(QrPreview { file_name, bytes });
                true
            }
            Err(_) => false,
        }
    }

    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }

    /// Toast shown after a successful attach.
    pub fn uploaded_toast(&self) -> String {
        let whose = match self.owner {
            Payer::You => "Your",
            Payer::Roommate => "Roommate's",
        };
        format!(
            "QR Code uploaded successfully! {} payment QR code has been saved.",
            whose
        )
    }
}

fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

// ============================================================================
// SIMULATED SETTLEMENT ACTIONS
// ============================================================================

/// Acknowledgement for the balance-overview action button. No payment
/// happens; the message is the whole effect.
pub fn settlement_toast(status: &BalanceStatus, roommate: &str) -> Option<String> {
    match status {
        BalanceStatus::RoommateOwesYou(amount) => Some(format!(
            "Payment Request Sent! 📨 Request for {} has been sent to {}.",
            fmt_inr(*amount),
            roommate
        )),
        BalanceStatus::YouOweRoommate(amount) => Some(format!(
            "Payment Reminder: you need to pay {} to {}.",
            fmt_inr(*amount),
            roommate
        )),
        BalanceStatus::Settled => None,
    }
}

/// Acknowledgement for the "open payment app" shortcut under an uploaded QR.
pub fn open_app_toast(owner: Payer, roommate: &str) -> String {
    match owner {
        Payer::You => "Redirecting to Payment App 🔗 Opening your payment app.".to_string(),
        Payer::Roommate => format!("Opening Payment App... redirecting to {}'s payment method.", roommate),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::net_balance;
    use crate::expense::{Category, Expense, ExpenseStore, ROOMMATE_ID};
    use std::io::Write;

    #[test]
    fn test_attach_reads_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upi-qr.PNG");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"\x89PNG fake image bytes").unwrap();

        let mut slot = QrSlot::new(Payer::You);
        assert!(slot.attach(&path));
        assert!(slot.has_preview());

        let preview = slot.preview.as_ref().unwrap();
        assert_eq!(preview.file_name, "upi-qr.PNG");
        assert_eq!(preview.bytes, b"\x89PNG fake image bytes");
    }

    #[test]
    fn test_attach_rejects_non_image_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "not an image").unwrap();

        let mut slot = QrSlot::new(Payer::Roommate);
        assert!(!slot.attach(&path));
        assert!(!slot.has_preview());
    }

    #[test]
    fn test_attach_missing_file_leaves_slot_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("first.png");
        std::fs::write(&existing, "first").unwrap();

        let mut slot = QrSlot::new(Payer::You);
        slot.attach(&existing);

        let missing = dir.path().join("does-not-exist.png");
        assert!(!slot.attach(&missing));
        assert_eq!(slot.preview.as_ref().unwrap().file_name, "first.png");
    }

    #[test]
    fn test_attach_does_not_touch_store_or_balance() {
        let mut store = ExpenseStore::new();
        store.add(Expense::new(
            100.0,
            "Rent".to_string(),
            Category::Rent,
            None,
            Payer::You,
        ));
        let before = net_balance(&store);
        let len_before = store.len();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qr.jpeg");
        std::fs::write(&path, "bytes").unwrap();

        let mut slot = QrSlot::new(Payer::You);
        assert!(slot.attach(&path));

        assert_eq!(store.len(), len_before);
        assert!((net_balance(&store) - before).abs() <= 1e-9);
    }

    #[test]
    fn test_slots_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let yours = dir.path().join("yours.png");
        std::fs::write(&yours, "y").unwrap();

        let mut your_slot = QrSlot::new(Payer::You);
        let roommate_slot = QrSlot::new(Payer::Roommate);

        your_slot.attach(&yours);
        assert!(your_slot.has_preview());
        assert!(!roommate_slot.has_preview());
    }

    #[test]
    fn test_uploaded_toast_names_the_party() {
        assert!(QrSlot::new(Payer::You).uploaded_toast().starts_with("QR Code uploaded"));
        assert!(QrSlot::new(Payer::Roommate)
            .uploaded_toast()
            .contains("Roommate's"));
    }

    #[test]
    fn test_settlement_toasts() {
        let owed = BalanceStatus::RoommateOwesYou(50.0);
        let msg = settlement_toast(&owed, ROOMMATE_ID).unwrap();
        assert!(msg.contains("₹50.00"));
        assert!(msg.contains(ROOMMATE_ID));

        let owing = BalanceStatus::YouOweRoommate(12.5);
        let msg = settlement_toast(&owing, ROOMMATE_ID).unwrap();
        assert!(msg.contains("₹12.50"));

        assert_eq!(settlement_toast(&BalanceStatus::Settled, ROOMMATE_ID), None);
    }
}
