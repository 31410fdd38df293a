//! Session lifecycle: token persistence and the `/auth` client.

mod client;
mod token_store;

pub use client::AuthClient;
#[cfg(feature = "keyring")]
pub use token_store::KeyringTokenStore;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
