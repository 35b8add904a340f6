//! Gift creation: precondition checks, a fresh escrow identity, the
//! funding transaction, and the encoded URI.

use solana_sdk::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;
use url::Url;

use crate::error::CreateGiftError;
use crate::ledger::LedgerClient;
use crate::tx::{build_native_funding_tx, build_token_funding_tx};
use crate::uri::{encode_gift, GiftAsset, GiftData};

/// A freshly created gift: the funding transaction for the creator's
/// wallet to sign and submit, and the URI that is the gift itself.
#[derive(Debug, Clone)]
pub struct CreatedGift {
    pub transaction: Transaction,
    pub uri: Url,
}

/// Create a gift of `amount` (smallest units) funded by `creator`.
///
/// Generates a single-use escrow keypair, builds the transaction moving
/// `amount` of `asset` from the creator into it, and encodes the gift
/// URI. Nothing is submitted here: the creator's wallet signs and sends
/// the transaction, and the URI travels to the recipient out of band.
///
/// Preconditions are checked before anything is built: a zero amount
/// fails with [`CreateGiftError::ZeroAmount`], an unknown creator with
/// [`CreateGiftError::CreatorNotFound`].
pub async fn create_gift<L>(
    ledger: &L,
    creator: &Pubkey,
    amount: u64,
    asset: GiftAsset,
) -> Result<CreatedGift, CreateGiftError>
where
    L: LedgerClient + ?Sized,
{
    if amount == 0 {
        return Err(CreateGiftError::ZeroAmount);
    }
    if !ledger.account_exists(creator).await? {
        return Err(CreateGiftError::CreatorNotFound);
    }

    let escrow = Keypair::new();

    let transaction = match asset {
        GiftAsset::Native => build_native_funding_tx(creator, &escrow.pubkey(), amount),
        GiftAsset::Token(mint) => {
            let rent = ledger
                .minimum_rent_exempt_balance(spl_token::state::Account::LEN)
                .await?;
            let recent_blockhash = ledger.latest_blockhash().await?;
            build_token_funding_tx(creator, &escrow, &mint, amount, rent, recent_blockhash)?
        }
    };

    let uri = encode_gift(&GiftData {
        escrow,
        amount,
        creator: *creator,
        asset,
    });

    Ok(CreatedGift { transaction, uri })
}
