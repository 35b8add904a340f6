//! Error taxonomy for the gift protocol.
//!
//! Every failure is surfaced immediately; the crate performs no retries
//! and no recovery. Transport failures from the [`crate::ledger::LedgerClient`]
//! collaborator are carried through as [`LedgerError`] without being
//! reinterpreted.

use std::error::Error;
use std::fmt;

use solana_sdk::program_error::ProgramError;
use solana_sdk::signer::SignerError;

/// Opaque transport error produced by a [`crate::ledger::LedgerClient`]
/// implementation. The core neither inspects nor rewrites it; display and
/// source chain come straight from the implementor's error.
pub struct LedgerError(Box<dyn Error + Send + Sync + 'static>);

impl LedgerError {
    pub fn new<E>(source: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        Self(source.into())
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LedgerError").field(&self.0).finish()
    }
}

impl Error for LedgerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

/// A URI that does not conform to the gift protocol.
///
/// Decoding is strict: a URI that decodes successfully always carries a
/// parseable creator, a numeric amount, and a usable escrow keypair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseUriError {
    Scheme { expected: &'static str, found: String },
    MissingCreator,
    InvalidCreator(String),
    InvalidAmount(String),
    InvalidMint(String),
    MissingSecret,
    InvalidSecret(String),
}

impl fmt::Display for ParseUriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scheme { expected, found } => {
                write!(f, "protocol invalid: expected `{expected}`, got `{found}`")
            }
            Self::MissingCreator => write!(f, "creator identity missing"),
            Self::InvalidCreator(s) => write!(f, "creator identity not valid: {s}"),
            Self::InvalidAmount(s) => write!(f, "amount not valid: {s}"),
            Self::InvalidMint(s) => write!(f, "token mint not valid: {s}"),
            Self::MissingSecret => write!(f, "escrow secret missing"),
            Self::InvalidSecret(s) => write!(f, "escrow secret not valid: {s}"),
        }
    }
}

impl Error for ParseUriError {}

/// Precondition violations at funding time.
#[derive(Debug)]
pub enum CreateGiftError {
    CreatorNotFound,
    ZeroAmount,
    Instruction(ProgramError),
    Signing(SignerError),
    Ledger(LedgerError),
}

impl fmt::Display for CreateGiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreatorNotFound => write!(f, "creator not found"),
            Self::ZeroAmount => write!(f, "amount can't be zero"),
            Self::Instruction(e) => write!(f, "instruction build failed: {e}"),
            Self::Signing(e) => write!(f, "escrow signing failed: {e}"),
            Self::Ledger(e) => write!(f, "{e}"),
        }
    }
}

impl Error for CreateGiftError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Instruction(e) => Some(e),
            Self::Signing(e) => Some(e),
            Self::Ledger(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ProgramError> for CreateGiftError {
    fn from(e: ProgramError) -> Self {
        Self::Instruction(e)
    }
}

impl From<SignerError> for CreateGiftError {
    fn from(e: SignerError) -> Self {
        Self::Signing(e)
    }
}

impl From<LedgerError> for CreateGiftError {
    fn from(e: LedgerError) -> Self {
        Self::Ledger(e)
    }
}

/// Protocol-level redemption rejections.
#[derive(Debug)]
pub enum RedeemError {
    RecipientFrozen,
    InsufficientFunds { amount: u64, reserve: u64 },
    MalformedGift(ParseUriError),
    Instruction(ProgramError),
    Signing(SignerError),
    Ledger(LedgerError),
}

impl fmt::Display for RedeemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecipientFrozen => write!(f, "recipient frozen"),
            Self::InsufficientFunds { amount, reserve } => {
                write!(
                    f,
                    "insufficient funds: gift amount {amount} does not cover the {reserve}-lamport fee reserve"
                )
            }
            Self::MalformedGift(e) => write!(f, "malformed gift uri: {e}"),
            Self::Instruction(e) => write!(f, "instruction build failed: {e}"),
            Self::Signing(e) => write!(f, "escrow signing failed: {e}"),
            Self::Ledger(e) => write!(f, "{e}"),
        }
    }
}

impl Error for RedeemError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MalformedGift(e) => Some(e),
            Self::Instruction(e) => Some(e),
            Self::Signing(e) => Some(e),
            Self::Ledger(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseUriError> for RedeemError {
    fn from(e: ParseUriError) -> Self {
        Self::MalformedGift(e)
    }
}

impl From<ProgramError> for RedeemError {
    fn from(e: ProgramError) -> Self {
        Self::Instruction(e)
    }
}

impl From<SignerError> for RedeemError {
    fn from(e: SignerError) -> Self {
        Self::Signing(e)
    }
}

impl From<LedgerError> for RedeemError {
    fn from(e: LedgerError) -> Self {
        Self::Ledger(e)
    }
}
