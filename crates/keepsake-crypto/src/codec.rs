//! Per-kind field sealing policy.
//!
//! Each record kind declares an ordered list of secret field slots; one
//! generic routine walks that list for both sealing and opening. Adding a
//! fifth content kind means writing a new declaration, not new control
//! flow. The declared order is a wire invariant: encrypt and decrypt must
//! visit fields identically or a partially populated record (a card with a
//! number and cvv but no date) would be reassembled against the wrong
//! ciphertext.

use keepsake_core::{CardRecord, ContentKind, FileRecord, PasswordRecord, TextRecord};

use crate::cipher::AeadCipher;
use crate::error::Result;

/// One secret field of a record: where it lives and whether it must be
/// present.
pub struct FieldSlot<'a> {
    /// The field's bytes; plaintext before sealing, sealed bundle after.
    pub data: &'a mut Vec<u8>,
    /// Required fields are always processed; optional fields are skipped
    /// while empty.
    pub required: bool,
}

impl<'a> FieldSlot<'a> {
    fn required(data: &'a mut Vec<u8>) -> Self {
        Self {
            data,
            required: true,
        }
    }

    fn optional(data: &'a mut Vec<u8>) -> Self {
        Self {
            data,
            required: false,
        }
    }
}

/// A record whose secret fields can be sealed and opened in place.
pub trait SecretFields {
    /// Content kind this record belongs to.
    const KIND: ContentKind;

    /// The record's secret fields in their fixed declared order.
    fn secret_fields(&mut self) -> Vec<FieldSlot<'_>>;
}

impl SecretFields for PasswordRecord {
    const KIND: ContentKind = ContentKind::Password;

    fn secret_fields(&mut self) -> Vec<FieldSlot<'_>> {
        vec![
            FieldSlot::required(&mut self.username),
            FieldSlot::required(&mut self.password),
        ]
    }
}

impl SecretFields for TextRecord {
    const KIND: ContentKind = ContentKind::Text;

    fn secret_fields(&mut self) -> Vec<FieldSlot<'_>> {
        vec![FieldSlot::required(&mut self.text)]
    }
}

impl SecretFields for CardRecord {
    const KIND: ContentKind = ContentKind::Card;

    fn secret_fields(&mut self) -> Vec<FieldSlot<'_>> {
        vec![
            FieldSlot::required(&mut self.number),
            FieldSlot::optional(&mut self.date),
            FieldSlot::optional(&mut self.holder),
            FieldSlot::optional(&mut self.cvv),
        ]
    }
}

impl SecretFields for FileRecord {
    const KIND: ContentKind = ContentKind::File;

    fn secret_fields(&mut self) -> Vec<FieldSlot<'_>> {
        vec![FieldSlot::required(&mut self.name)]
    }
}

/// Seal a record's secret fields in place, in declared order.
///
/// Optional fields that are empty are left untouched. The first sealing
/// failure aborts the walk and is returned; the record must then be
/// discarded, not submitted, since later fields are still plaintext.
pub fn encrypt_record<R: SecretFields>(record: &mut R, cipher: &AeadCipher) -> Result<()> {
    for slot in record.secret_fields() {
        if !slot.required && slot.data.is_empty() {
            continue;
        }
        *slot.data = cipher.seal(slot.data)?;
    }
    Ok(())
}

/// Open a record's secret fields in place, mirroring [`encrypt_record`].
///
/// The same order and the same skip-empty-optional rule apply, so a field
/// that was never sealed is never handed to the cipher and cannot trigger
/// a spurious authentication failure.
pub fn decrypt_record<R: SecretFields>(record: &mut R, cipher: &AeadCipher) -> Result<()> {
    for slot in record.secret_fields() {
        if !slot.required && slot.data.is_empty() {
            continue;
        }
        *slot.data = cipher.open(slot.data)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kdf::{derive_key, KEY_SIZE};

    fn test_cipher(secret: &[u8]) -> AeadCipher {
        let key = derive_key(secret, b"codec-salt", 256, KEY_SIZE);
        AeadCipher::new(&key).unwrap()
    }

    #[test]
    fn test_password_round_trip() {
        let cipher = test_cipher(b"master");
        let mut record = PasswordRecord {
            id: 0,
            username: b"alice".to_vec(),
            password: b"s3cret".to_vec(),
            domain: "example.com".to_string(),
            comment: "work".to_string(),
        };

        encrypt_record(&mut record, &cipher).unwrap();
        assert_ne!(record.username, b"alice");
        assert_ne!(record.password, b"s3cret");
        // Plaintext fields stay as they were.
        assert_eq!(record.domain, "example.com");
        assert_eq!(record.comment, "work");

        decrypt_record(&mut record, &cipher).unwrap();
        assert_eq!(record.username, b"alice");
        assert_eq!(record.password, b"s3cret");
    }

    #[test]
    fn test_text_round_trip() {
        let cipher = test_cipher(b"master");
        let mut record = TextRecord {
            id: 0,
            text: b"remember the milk".to_vec(),
            comment: String::new(),
        };

        encrypt_record(&mut record, &cipher).unwrap();
        assert_ne!(record.text, b"remember the milk");

        decrypt_record(&mut record, &cipher).unwrap();
        assert_eq!(record.text, b"remember the milk");
    }

    #[test]
    fn test_card_seals_only_populated_fields() {
        let cipher = test_cipher(b"master");
        let mut card = CardRecord {
            id: 0,
            number: b"4111111111111111".to_vec(),
            date: Vec::new(),
            holder: Vec::new(),
            cvv: Vec::new(),
            comment: String::new(),
        };

        encrypt_record(&mut card, &cipher).unwrap();
        assert_ne!(card.number, b"4111111111111111");
        assert!(card.date.is_empty());
        assert!(card.holder.is_empty());
        assert!(card.cvv.is_empty());

        decrypt_record(&mut card, &cipher).unwrap();
        assert_eq!(card.number, b"4111111111111111");
        assert!(card.date.is_empty());
        assert!(card.holder.is_empty());
        assert!(card.cvv.is_empty());
    }

    #[test]
    fn test_card_partial_optional_fields() {
        let cipher = test_cipher(b"master");
        // Number and cvv set, date and holder absent - the declared order
        // must still pair each field with its own ciphertext.
        let mut card = CardRecord {
            id: 0,
            number: b"5500000000000004".to_vec(),
            date: Vec::new(),
            holder: Vec::new(),
            cvv: b"123".to_vec(),
            comment: String::new(),
        };

        encrypt_record(&mut card, &cipher).unwrap();
        assert!(card.date.is_empty());
        assert!(card.holder.is_empty());
        assert!(!card.cvv.is_empty());

        decrypt_record(&mut card, &cipher).unwrap();
        assert_eq!(card.number, b"5500000000000004");
        assert_eq!(card.cvv, b"123");
        assert!(card.date.is_empty());
        assert!(card.holder.is_empty());
    }

    #[test]
    fn test_card_full_round_trip() {
        let cipher = test_cipher(b"master");
        let mut card = CardRecord {
            id: 0,
            number: b"4111111111111111".to_vec(),
            date: b"12/29".to_vec(),
            holder: b"ALICE EXAMPLE".to_vec(),
            cvv: b"999".to_vec(),
            comment: "travel card".to_string(),
        };

        encrypt_record(&mut card, &cipher).unwrap();
        decrypt_record(&mut card, &cipher).unwrap();

        assert_eq!(card.number, b"4111111111111111");
        assert_eq!(card.date, b"12/29");
        assert_eq!(card.holder, b"ALICE EXAMPLE");
        assert_eq!(card.cvv, b"999");
    }

    #[test]
    fn test_file_metadata_round_trip() {
        let cipher = test_cipher(b"master");
        let mut record = FileRecord {
            id: 0,
            name: b"taxes-2025.pdf".to_vec(),
            file_path: String::new(),
            comment: String::new(),
        };

        encrypt_record(&mut record, &cipher).unwrap();
        assert_ne!(record.name, b"taxes-2025.pdf");

        decrypt_record(&mut record, &cipher).unwrap();
        assert_eq!(record.name, b"taxes-2025.pdf");
    }

    #[test]
    fn test_decrypt_with_wrong_key_fails() {
        let cipher = test_cipher(b"correct-horse");
        let wrong = test_cipher(b"wrong-password");

        let mut record = PasswordRecord {
            id: 0,
            username: b"alice".to_vec(),
            password: b"s3cret".to_vec(),
            domain: String::new(),
            comment: String::new(),
        };
        encrypt_record(&mut record, &cipher).unwrap();

        let result = decrypt_record(&mut record, &wrong);
        assert!(result.is_err());
    }

    #[test]
    fn test_declared_field_order_is_stable() {
        // The codec contract pins this order; reordering it would corrupt
        // every partially populated card already persisted.
        let mut card = CardRecord {
            number: b"n".to_vec(),
            date: b"d".to_vec(),
            holder: b"h".to_vec(),
            cvv: b"c".to_vec(),
            ..Default::default()
        };
        let order: Vec<Vec<u8>> = card
            .secret_fields()
            .iter()
            .map(|slot| slot.data.clone())
            .collect();
        assert_eq!(order, vec![b"n".to_vec(), b"d".to_vec(), b"h".to_vec(), b"c".to_vec()]);

        let required: Vec<bool> = card.secret_fields().iter().map(|s| s.required).collect();
        assert_eq!(required, vec![true, false, false, false]);
    }
}
