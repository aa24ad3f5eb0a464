use thiserror::Error;

use crate::config::GEMINI_KEY_STORAGE;
use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Enter a valid API key")]
    Empty,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The stored API key. Blank values count as absent.
pub fn load(store: &impl KeyValueStore) -> Option<String> {
    store
        .get(GEMINI_KEY_STORAGE)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

/// Stores the trimmed `input`. Blank input leaves whatever was stored before.
pub fn save(store: &impl KeyValueStore, input: &str) -> Result<String, CredentialError> {
    let key = input.trim();
    if key.is_empty() {
        return Err(CredentialError::Empty);
    }
    store.set(GEMINI_KEY_STORAGE, key)?;
    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn saved_key_reads_back_trimmed() {
        let store = MemoryStore::default();
        for input in ["abc123", "  AIza-key \n", "k"] {
            let saved = save(&store, input).unwrap();
            assert_eq!(saved, input.trim());
            assert_eq!(load(&store), Some(input.trim().to_string()));
        }
    }

    #[test]
    fn blank_input_keeps_previous_key() {
        let store = MemoryStore::default();
        save(&store, "first").unwrap();
        for input in ["", "   ", "\t\n"] {
            assert!(matches!(save(&store, input), Err(CredentialError::Empty)));
        }
        assert_eq!(load(&store).as_deref(), Some("first"));
    }

    #[test]
    fn rejection_message_is_user_facing() {
        assert_eq!(CredentialError::Empty.to_string(), "Enter a valid API key");
    }

    #[test]
    fn nothing_stored_means_no_key() {
        let store = MemoryStore::default();
        assert_eq!(load(&store), None);
        store.set(GEMINI_KEY_STORAGE, "  ").unwrap();
        assert_eq!(load(&store), None);
    }
}
