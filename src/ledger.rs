//! Collaborator boundary for ledger reads.
//!
//! The crate is view-only with respect to the network: it never opens a
//! connection, submits nothing, and consumes exactly the four reads below.
//! Applications implement [`LedgerClient`] over whatever RPC client they
//! already hold and pass it to [`crate::create_gift`] / [`crate::redeem_gift`].

use async_trait::async_trait;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;

use crate::error::LedgerError;

/// Observed state of an SPL token holding account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAccountStatus {
    /// Set when the mint's freeze authority has frozen the account; a
    /// frozen account cannot receive transfers.
    pub frozen: bool,
}

/// Read-only ledger operations the gift protocol consumes.
///
/// All four are fallible I/O; failures are handed back to the caller
/// untranslated inside [`LedgerError`].
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Whether any account exists at `address`.
    async fn account_exists(&self, address: &Pubkey) -> Result<bool, LedgerError>;

    /// Minimum lamport balance keeping an account of `data_len` bytes
    /// rent-exempt.
    async fn minimum_rent_exempt_balance(&self, data_len: usize) -> Result<u64, LedgerError>;

    /// Latest blockhash, fixing a transaction's validity window.
    async fn latest_blockhash(&self) -> Result<Hash, LedgerError>;

    /// Status of the token holding account at `address`, `None` when the
    /// account does not exist.
    async fn token_account(&self, address: &Pubkey)
        -> Result<Option<TokenAccountStatus>, LedgerError>;
}
