//! Claim-check gift links for Solana.
//!
//! A gift is a throwaway escrow keypair: the creator funds it, the
//! keypair's secret travels inside a `solanagift:` URI, and whoever holds
//! the URI drains the escrow to their own account. The link is a strict
//! bearer instrument with no server-side state and no revocation. Losing
//! the link loses the funds. Racing redeemers are resolved by the
//! ledger's atomic balance update, not by this crate.
//!
//! The crate builds transactions and encodes/decodes URIs. It never
//! submits anything, and the only private key it ever touches is the
//! escrow it generated itself. Ledger reads go through the
//! [`LedgerClient`] trait, implemented by the application over its own
//! RPC connection.
//!
//! Lifecycle:
//! - [`create_gift`] checks preconditions, generates the escrow, builds
//!   the funding transaction (a system transfer for lamports; create +
//!   initialize + transfer for an SPL token) and returns it together with
//!   the encoded URI.
//! - [`redeem_gift`] decodes the URI and builds the draining transaction,
//!   signed by the escrow itself. Native redemptions withhold
//!   [`REDEEM_FEE_RESERVE`] lamports so the escrow can pay its own fee.

pub mod create;
pub mod error;
pub mod ledger;
pub mod redeem;
pub mod tx;
pub mod uri;

pub use create::{create_gift, CreatedGift};
pub use error::{CreateGiftError, LedgerError, ParseUriError, RedeemError};
pub use ledger::{LedgerClient, TokenAccountStatus};
pub use redeem::redeem_gift;
pub use tx::REDEEM_FEE_RESERVE;
pub use uri::{decode_gift, encode_gift, GiftAsset, GiftData, GIFT_SCHEME};

pub use url::Url;
