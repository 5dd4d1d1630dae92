//! Parsing helpers for user-facing note numbers.

use crate::errors::CliError;

/// Convert a 1-based note number into a vault index.
pub fn resolve_note_index(number: usize, len: usize) -> Result<usize, CliError> {
    if number == 0 || number > len {
        let message = if len == 0 {
            format!("No note #{} (the vault is empty)", number)
        } else {
            format!("No note #{} (valid numbers are 1-{})", number, len)
        };
        return Err(CliError::not_found(
            message,
            "Hint: Run `caldras list` to see note numbers.",
        ));
    }
    Ok(number - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;

    #[test]
    fn test_numbers_are_one_based() {
        assert_eq!(resolve_note_index(1, 3).unwrap(), 0);
        assert_eq!(resolve_note_index(3, 3).unwrap(), 2);
    }

    #[test]
    fn test_zero_is_not_found() {
        let err = resolve_note_index(0, 3).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_past_end_is_not_found() {
        let err = resolve_note_index(4, 3).unwrap_err();
        assert!(err.to_string().contains("valid numbers are 1-3"));
    }

    #[test]
    fn test_empty_vault_message() {
        let err = resolve_note_index(1, 0).unwrap_err();
        assert!(err.to_string().contains("the vault is empty"));
    }
}
