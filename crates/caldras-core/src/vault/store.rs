//! The in-memory vault and its persisted blob.
//!
//! Every mutation rewrites the whole file. There is no journal and no
//! temp-file rename: a crash in the middle of a write can leave a damaged
//! file, which the next `open` treats as an empty vault.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::note::{Note, NoteSummary};
use super::search::{SearchHit, SearchScope};
use crate::error::{CaldrasError, Result};

const FILE_FORMAT: &str = "caldras-vault";
const FILE_VERSION: u32 = 1;

/// What `Vault::open` found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No file yet; the vault starts empty.
    Missing,
    /// File parsed successfully.
    Loaded { notes: usize },
    /// File present but unreadable; the vault starts empty.
    Corrupt { reason: String },
}

#[derive(Serialize)]
struct VaultFileRef<'a> {
    format: &'a str,
    version: u32,
    notes: &'a [Note],
}

#[derive(Deserialize)]
struct VaultFile {
    format: String,
    version: u32,
    notes: Vec<Note>,
}

/// Ordered collection of notes backed by a single file.
///
/// Positions are zero-based here; the CLI adds one for display. Deleting a
/// note shifts every later position down by one.
#[derive(Debug)]
pub struct Vault {
    path: PathBuf,
    notes: Vec<Note>,
    status: LoadStatus,
    // Set when the last persist failed and memory is ahead of disk.
    dirty: bool,
}

impl Vault {
    /// Load the vault at `path`, falling back to an empty vault when the file
    /// is missing or unreadable. Never fails; inspect [`Vault::status`].
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let (notes, status) = match fs::read(&path) {
            Ok(bytes) => match Self::decode(&bytes) {
                Ok(notes) => {
                    let count = notes.len();
                    (notes, LoadStatus::Loaded { notes: count })
                }
                Err(reason) => {
                    warn!(path = %path.display(), %reason, "vault file unreadable, starting empty");
                    (Vec::new(), LoadStatus::Corrupt { reason })
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => (Vec::new(), LoadStatus::Missing),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "vault file unreadable, starting empty");
                (
                    Vec::new(),
                    LoadStatus::Corrupt {
                        reason: err.to_string(),
                    },
                )
            }
        };
        debug!(path = %path.display(), notes = notes.len(), "vault opened");

        Self {
            path,
            notes,
            status,
            dirty: false,
        }
    }

    fn decode(bytes: &[u8]) -> std::result::Result<Vec<Note>, String> {
        let file: VaultFile = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
        if file.format != FILE_FORMAT {
            return Err(format!("unexpected format tag {:?}", file.format));
        }
        if file.version != FILE_VERSION {
            return Err(format!("unsupported vault version {}", file.version));
        }
        Ok(file.notes)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Outcome of the initial load.
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Borrow a note by position.
    pub fn get(&self, index: usize) -> Result<&Note> {
        self.notes.get(index).ok_or(CaldrasError::Index {
            index,
            len: self.notes.len(),
        })
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Note> {
        let len = self.notes.len();
        self.notes
            .get_mut(index)
            .ok_or(CaldrasError::Index { index, len })
    }

    /// Iterate notes in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// Add a note at the end and persist. Returns its position.
    pub fn create(&mut self, title: &str, body: &str, password: Option<&str>) -> Result<usize> {
        let note = Note::new(title, body, password)?;
        self.notes.push(note);
        self.persist()?;
        Ok(self.notes.len() - 1)
    }

    /// Titles and protection flags, in order.
    pub fn list(&self) -> Vec<NoteSummary> {
        self.notes
            .iter()
            .enumerate()
            .map(|(index, note)| NoteSummary {
                index,
                title: note.title().to_string(),
                is_protected: note.is_protected(),
                updated_at: note.updated_at(),
            })
            .collect()
    }

    /// Readable body of a note. `password` is ignored for plain notes.
    pub fn read(&self, index: usize, password: Option<&str>) -> Result<String> {
        self.get(index)?.open(password)
    }

    /// Replace a note's body (re-encrypting if protected) and persist.
    pub fn update(&mut self, index: usize, body: &str, password: Option<&str>) -> Result<()> {
        self.get_mut(index)?.replace_body(body, password)?;
        self.persist()
    }

    /// Append text after a blank line and persist.
    pub fn append(&mut self, index: usize, extra: &str, password: Option<&str>) -> Result<()> {
        let current = self.read(index, password)?;
        let combined = format!("{}\n\n{}", current.trim(), extra.trim());
        self.update(index, &combined, password)
    }

    /// Remove a note and persist. Later positions shift down by one.
    pub fn delete(&mut self, index: usize) -> Result<Note> {
        self.get(index)?;
        let removed = self.notes.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Change, add or remove a note's password and persist.
    ///
    /// `current` must match when the note is already protected. A missing or
    /// empty `new` stores the body as plaintext.
    pub fn set_password(
        &mut self,
        index: usize,
        current: Option<&str>,
        new: Option<&str>,
    ) -> Result<()> {
        self.get_mut(index)?.reprotect(current, new)?;
        self.persist()
    }

    /// Case-insensitive substring search over titles and readable bodies.
    ///
    /// Protected bodies are searched only when `scope` holds the note's
    /// password; otherwise (or if decryption fails) only the title counts.
    pub fn search(&self, keyword: &str, scope: &SearchScope) -> Vec<SearchHit> {
        let needle = keyword.to_lowercase();
        self.notes
            .iter()
            .enumerate()
            .filter(|(index, note)| {
                if note.title().to_lowercase().contains(&needle) {
                    return true;
                }
                let password = scope.password_for(*index);
                if note.is_protected() && password.is_none() {
                    return false;
                }
                note.open(password)
                    .map(|body| body.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
            .map(|(index, note)| SearchHit {
                index,
                title: note.title().to_string(),
            })
            .collect()
    }

    /// Rewrite the backing file with the full vault.
    pub fn persist(&mut self) -> Result<()> {
        match self.write_file() {
            Ok(()) => {
                self.dirty = false;
                debug!(path = %self.path.display(), notes = self.notes.len(), "vault persisted");
                Ok(())
            }
            Err(err) => {
                self.dirty = true;
                warn!(path = %self.path.display(), error = %err, "vault persist failed");
                Err(err)
            }
        }
    }

    fn write_file(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    CaldrasError::Persistence(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        let bytes = serde_json::to_vec_pretty(&VaultFileRef {
            format: FILE_FORMAT,
            version: FILE_VERSION,
            notes: &self.notes,
        })?;
        fs::write(&self.path, bytes).map_err(|e| {
            CaldrasError::Persistence(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    /// Explicit teardown: flush if an earlier persist failed.
    pub fn close(mut self) -> Result<()> {
        if self.dirty {
            self.persist()?;
        }
        Ok(())
    }
}
