pub mod append;
pub mod delete;
pub mod edit;
pub mod list;
pub mod new;
pub mod passwd;
pub mod show;

pub use append::handle_append;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use list::handle_list;
pub use new::handle_new;
pub use passwd::handle_passwd;
pub use show::handle_show;

use caldras_core::Vault;

use crate::helpers::prompt_note_password;

/// Ask for a password only when the note at `index` is protected.
fn password_for(vault: &Vault, index: usize, number: usize) -> anyhow::Result<Option<String>> {
    if vault.get(index)?.is_protected() {
        Ok(Some(prompt_note_password(number)?))
    } else {
        Ok(None)
    }
}
