//! Note vault for Caldras.
//!
//! The vault is the sole owner of its notes. Callers get borrowed views or
//! copies, and operate on notes by zero-based position.
//!
//! ## Persistence
//!
//! The vault lives in a single file rewritten in full on every mutation.
//! Loading never fails: a missing or unreadable file yields an empty vault
//! and a [`LoadStatus`] describing why. Write failures are returned to the
//! caller as `CaldrasError::Persistence`.

pub mod note;
pub mod search;
pub mod store;

pub use note::{Note, NoteSummary};
pub use search::{SearchHit, SearchScope};
pub use store::{LoadStatus, Vault};
