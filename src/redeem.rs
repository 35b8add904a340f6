//! Gift redemption: decode the URI and drain the escrow to the receiver.

use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;
use spl_associated_token_account::get_associated_token_address;
use url::Url;

use crate::error::RedeemError;
use crate::ledger::LedgerClient;
use crate::tx::{build_native_redeem_tx, build_token_redeem_tx};
use crate::uri::{decode_gift, GiftAsset};

/// Redeem the gift behind `uri` to `receiver`.
///
/// Native gifts come back fully signed with the escrow as fee payer,
/// ready to submit. Token gifts are partially signed by the escrow; the
/// receiver pays the fee (and the creation of their holding account when
/// one is needed) and must sign before submission.
///
/// The encoded amount is what gets transferred, regardless of the
/// escrow's live balance; a second redemption of the same URI fails on
/// the ledger itself when the escrow can no longer cover it.
pub async fn redeem_gift<L>(
    ledger: &L,
    uri: &Url,
    receiver: &Pubkey,
) -> Result<Transaction, RedeemError>
where
    L: LedgerClient + ?Sized,
{
    let gift = decode_gift(uri)?;

    match gift.asset {
        GiftAsset::Native => {
            let recent_blockhash = ledger.latest_blockhash().await?;
            build_native_redeem_tx(&gift.escrow, receiver, gift.amount, recent_blockhash)
        }
        GiftAsset::Token(mint) => {
            let receiver_holding = get_associated_token_address(receiver, &mint);
            let create_receiver_account = match ledger.token_account(&receiver_holding).await? {
                Some(status) if status.frozen => return Err(RedeemError::RecipientFrozen),
                Some(_) => false,
                None => true,
            };
            let recent_blockhash = ledger.latest_blockhash().await?;
            build_token_redeem_tx(
                &gift.escrow,
                receiver,
                &mint,
                gift.amount,
                create_receiver_account,
                recent_blockhash,
            )
        }
    }
}
