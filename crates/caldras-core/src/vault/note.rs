//! Note records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::{decrypt, encrypt};
use crate::error::{CaldrasError, Result};

/// A single note in the vault.
///
/// A record is either readable plaintext or a ciphertext blob that only the
/// matching password opens; the variant is the protection flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Note {
    Plain {
        title: String,
        body: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    },
    Protected {
        title: String,
        #[serde(with = "base64_blob")]
        ciphertext: Vec<u8>,
        /// Stored verbatim next to the ciphertext and compared by plain
        /// equality before decrypting. Anyone who can read the vault file
        /// can read it; see DESIGN.md before changing this.
        password: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    },
}

impl Note {
    /// Build a note, encrypting the body when a non-empty password is given.
    pub fn new(title: &str, body: &str, password: Option<&str>) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CaldrasError::InvalidInput(
                "Note title cannot be empty".to_string(),
            ));
        }
        let now = Utc::now();
        Self::sealed(title.to_string(), body, password, now, now)
    }

    fn sealed(
        title: String,
        body: &str,
        password: Option<&str>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self> {
        match password.filter(|p| !p.is_empty()) {
            Some(password) => Ok(Note::Protected {
                title,
                ciphertext: encrypt(body, password)?,
                password: password.to_string(),
                created_at,
                updated_at,
            }),
            None => Ok(Note::Plain {
                title,
                body: body.to_string(),
                created_at,
                updated_at,
            }),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Note::Plain { title, .. } | Note::Protected { title, .. } => title,
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Note::Protected { .. })
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Note::Plain { created_at, .. } | Note::Protected { created_at, .. } => *created_at,
        }
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        match self {
            Note::Plain { updated_at, .. } | Note::Protected { updated_at, .. } => *updated_at,
        }
    }

    /// Check a caller-supplied password against a protected note.
    ///
    /// Plain notes accept anything.
    pub fn check_password(&self, supplied: Option<&str>) -> Result<()> {
        match self {
            Note::Plain { .. } => Ok(()),
            Note::Protected { password, .. } => match supplied {
                Some(supplied) if supplied == password => Ok(()),
                _ => Err(CaldrasError::WrongPassword),
            },
        }
    }

    /// Return the readable body.
    ///
    /// # Errors
    ///
    /// `WrongPassword` if the note is protected and `supplied` does not match,
    /// or if the stored ciphertext no longer authenticates.
    pub fn open(&self, supplied: Option<&str>) -> Result<String> {
        self.check_password(supplied)?;
        match self {
            Note::Plain { body, .. } => Ok(body.clone()),
            Note::Protected {
                ciphertext,
                password,
                ..
            } => decrypt(ciphertext, password).map_err(|err| match err {
                CaldrasError::Authentication => CaldrasError::WrongPassword,
                other => other,
            }),
        }
    }

    /// Replace the body, keeping the current protection.
    pub fn replace_body(&mut self, body: &str, supplied: Option<&str>) -> Result<()> {
        self.check_password(supplied)?;
        let now = Utc::now();
        match self {
            Note::Plain {
                body: current,
                updated_at,
                ..
            } => {
                *current = body.to_string();
                *updated_at = now;
            }
            Note::Protected {
                ciphertext,
                password,
                updated_at,
                ..
            } => {
                *ciphertext = encrypt(body, password)?;
                *updated_at = now;
            }
        }
        Ok(())
    }

    /// Re-seal the body under a new password, or drop protection when the
    /// new password is absent or empty.
    pub fn reprotect(&mut self, current: Option<&str>, new: Option<&str>) -> Result<()> {
        let body = self.open(current)?;
        let title = self.title().to_string();
        *self = Self::sealed(title, &body, new, self.created_at(), Utc::now())?;
        Ok(())
    }
}

/// Lightweight listing view of a note; never touches protected bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteSummary {
    /// Zero-based position in the vault.
    pub index: usize,
    pub title: String,
    pub is_protected: bool,
    pub updated_at: DateTime<Utc>,
}

impl NoteSummary {
    /// One-based position shown to users.
    pub fn display_index(&self) -> usize {
        self.index + 1
    }
}

mod base64_blob {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_note_ignores_password() {
        let note = Note::new("Groceries", "milk", None).unwrap();
        assert!(!note.is_protected());
        assert_eq!(note.open(None).unwrap(), "milk");
        assert_eq!(note.open(Some("anything")).unwrap(), "milk");
    }

    #[test]
    fn test_empty_password_means_plain() {
        let note = Note::new("Groceries", "milk", Some("")).unwrap();
        assert!(!note.is_protected());
    }

    #[test]
    fn test_protected_note_requires_matching_password() {
        let note = Note::new("Diary", "dear diary", Some("pw")).unwrap();
        assert!(note.is_protected());
        assert_eq!(note.open(Some("pw")).unwrap(), "dear diary");
        assert!(matches!(note.open(None), Err(CaldrasError::WrongPassword)));
        assert!(matches!(
            note.open(Some("PW")),
            Err(CaldrasError::WrongPassword)
        ));
    }

    #[test]
    fn test_blank_title_rejected() {
        let result = Note::new("   ", "body", None);
        assert!(matches!(result, Err(CaldrasError::InvalidInput(_))));
    }

    #[test]
    fn test_title_is_trimmed() {
        let note = Note::new("  Spaced  ", "", None).unwrap();
        assert_eq!(note.title(), "Spaced");
    }

    #[test]
    fn test_replace_body_keeps_protection() {
        let mut note = Note::new("Diary", "old", Some("pw")).unwrap();
        note.replace_body("new", Some("pw")).unwrap();
        assert!(note.is_protected());
        assert_eq!(note.open(Some("pw")).unwrap(), "new");

        let err = note.replace_body("sneaky", Some("nope")).unwrap_err();
        assert!(matches!(err, CaldrasError::WrongPassword));
        assert_eq!(note.open(Some("pw")).unwrap(), "new");
    }

    #[test]
    fn test_reprotect_transitions() {
        let mut note = Note::new("Plan", "step one", None).unwrap();
        let created = note.created_at();

        note.reprotect(None, Some("first")).unwrap();
        assert!(note.is_protected());
        assert_eq!(note.open(Some("first")).unwrap(), "step one");

        note.reprotect(Some("first"), Some("second")).unwrap();
        assert_eq!(note.open(Some("second")).unwrap(), "step one");

        assert!(matches!(
            note.reprotect(Some("first"), None),
            Err(CaldrasError::WrongPassword)
        ));

        note.reprotect(Some("second"), Some("")).unwrap();
        assert!(!note.is_protected());
        assert_eq!(note.open(None).unwrap(), "step one");
        assert_eq!(note.created_at(), created);
    }

    #[test]
    fn test_corrupt_ciphertext_reports_wrong_password() {
        let mut note = Note::new("Diary", "text", Some("pw")).unwrap();
        if let Note::Protected { ciphertext, .. } = &mut note {
            ciphertext.truncate(4);
        }
        assert!(matches!(
            note.open(Some("pw")),
            Err(CaldrasError::WrongPassword)
        ));
    }

    #[test]
    fn test_serialized_shape() {
        let note = Note::new("Diary", "text", Some("pw")).unwrap();
        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["kind"], "protected");
        assert!(value["ciphertext"].is_string());

        let back: Note = serde_json::from_value(value).unwrap();
        assert_eq!(back, note);
    }
}
