//! Bearer-token persistence.
//!
//! The token is the only shared, mutable, process-wide resource in the SDK.
//! It is read fresh on every authenticated call and written or deleted only
//! by login, registration and logout; concurrent logins simply let the last
//! write win.

use std::path::PathBuf;

use codebin_domain::{ApiError, Result};
use parking_lot::RwLock;
use tracing::debug;

/// Durable storage for the session token.
///
/// Implementations are injected into the transport explicitly — there is no
/// ambient global — and must be cheap to read, since the transport reads on
/// every authenticated request. All operations are synchronous.
pub trait TokenStore: Send + Sync {
    /// Current token, if one is stored.
    fn load(&self) -> Option<String>;

    /// Persist a token, replacing any previous one.
    fn store(&self, token: &str) -> Result<()>;

    /// Delete the stored token. Succeeds when nothing was stored.
    fn clear(&self) -> Result<()>;
}

/// In-memory token store; the default for tests and short-lived embeddings.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn store(&self, token: &str) -> Result<()> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.write() = None;
        Ok(())
    }
}

/// File-backed token store: one token string in one file.
///
/// The SDK analog of the browser front end's `localStorage["token"]`. The
/// file is re-read on every load so multiple transports pointed at the same
/// path observe each other's logins. The file is written owner-only, but it
/// is still a credential on disk; prefer [`KeyringTokenStore`] for durable
/// sessions on a user machine.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(_) => None,
        }
    }

    fn store(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| ApiError::Auth(format!("cannot create token directory: {err}")))?;
        }
        std::fs::write(&self.path, token)
            .map_err(|err| ApiError::Auth(format!("cannot persist token: {err}")))?;
        // The file holds a bearer credential; keep it owner-only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .map_err(|err| ApiError::Auth(format!("cannot restrict token file: {err}")))?;
        }
        debug!(path = %self.path.display(), "session token stored");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "session token cleared");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApiError::Auth(format!("cannot delete token: {err}"))),
        }
    }
}

/// Token store backed by the platform keychain (macOS Keychain, Windows
/// Credential Manager, Linux keyutils) via the `keyring` crate.
///
/// The durable store of choice on a user machine: the token never touches
/// the filesystem in plaintext. One keychain entry per `(service, account)`
/// pair, so several environments can keep independent sessions.
#[cfg(feature = "keyring")]
#[derive(Debug, Clone)]
pub struct KeyringTokenStore {
    service: String,
    account: String,
}

#[cfg(feature = "keyring")]
impl KeyringTokenStore {
    /// Service name used by [`KeyringTokenStore::default`].
    pub const DEFAULT_SERVICE: &'static str = "codebin";

    pub fn new(service: impl Into<String>, account: impl Into<String>) -> Self {
        Self { service: service.into(), account: account.into() }
    }

    fn entry(&self) -> Result<keyring::Entry> {
        keyring::Entry::new(&self.service, &self.account)
            .map_err(|err| ApiError::Auth(format!("cannot open keychain entry: {err}")))
    }
}

#[cfg(feature = "keyring")]
impl Default for KeyringTokenStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SERVICE, "session")
    }
}

#[cfg(feature = "keyring")]
impl TokenStore for KeyringTokenStore {
    fn load(&self) -> Option<String> {
        self.entry().ok()?.get_password().ok()
    }

    fn store(&self, token: &str) -> Result<()> {
        self.entry()?
            .set_password(token)
            .map_err(|err| ApiError::Auth(format!("cannot persist token: {err}")))?;
        debug!(service = %self.service, account = %self.account, "session token stored");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match self.entry()?.delete_credential() {
            Ok(()) => {
                debug!(service = %self.service, account = %self.account, "session token cleared");
                Ok(())
            }
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(ApiError::Auth(format!("cannot delete token: {err}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::default();
        assert!(store.load().is_none());

        store.store("abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc"));

        store.store("def").unwrap();
        assert_eq!(store.load().as_deref(), Some("def"));

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));

        assert!(store.load().is_none());
        store.store("abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc"));

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn file_store_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn file_store_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested/dir/token"));
        store.store("abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc"));
    }

    #[test]
    fn blank_file_counts_as_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "  \n").unwrap();
        let store = FileTokenStore::new(path);
        assert!(store.load().is_none());
    }

    #[test]
    fn two_stores_on_one_path_share_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        let writer = FileTokenStore::new(&path);
        let reader = FileTokenStore::new(&path);

        writer.store("abc").unwrap();
        assert_eq!(reader.load().as_deref(), Some("abc"));
    }

    #[cfg(unix)]
    #[test]
    fn stored_token_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        store.store("eyJhbGciOiJIUzI1NiJ9").unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0, "token file readable by group/other: {mode:o}");

        store.clear().unwrap();
        assert!(!store.path().exists());
    }

    #[cfg(feature = "keyring")]
    mod keyring_store {
        use std::sync::Once;

        use super::*;

        // The default credential builder is process-global; swap in the
        // in-memory mock once so tests never touch a real keychain.
        fn use_mock_keychain() {
            static INIT: Once = Once::new();
            INIT.call_once(|| {
                keyring::set_default_credential_builder(
                    keyring::mock::default_credential_builder(),
                );
            });
        }

        #[test]
        fn keyring_store_round_trip() {
            use_mock_keychain();
            let store = KeyringTokenStore::new("codebin-test", "round-trip");

            assert!(store.load().is_none());
            store.store("abc").unwrap();
            assert_eq!(store.load().as_deref(), Some("abc"));

            store.store("def").unwrap();
            assert_eq!(store.load().as_deref(), Some("def"));

            store.clear().unwrap();
            assert!(store.load().is_none());
        }

        #[test]
        fn keyring_clear_is_idempotent() {
            use_mock_keychain();
            let store = KeyringTokenStore::new("codebin-test", "clear-twice");
            store.clear().unwrap();
            store.clear().unwrap();
        }

        #[test]
        fn keyring_accounts_are_isolated() {
            use_mock_keychain();
            let work = KeyringTokenStore::new("codebin-test", "work");
            let personal = KeyringTokenStore::new("codebin-test", "personal");

            work.store("work-token").unwrap();
            assert!(personal.load().is_none());
            assert_eq!(work.load().as_deref(), Some("work-token"));
        }
    }
}
