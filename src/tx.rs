//! Pure transaction builders for the gift lifecycle.
//!
//! Everything read from the ledger (rent minimums, blockhashes) comes in
//! as a parameter, keeping these synchronous and unit-testable; the
//! facades in [`crate::create`] and [`crate::redeem`] perform the reads.

use solana_sdk::hash::Hash;
use solana_sdk::instruction::Instruction;
use solana_sdk::program_error::ProgramError;
use solana_sdk::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::system_instruction;
use solana_sdk::transaction::Transaction;
use spl_associated_token_account::get_associated_token_address;
use spl_associated_token_account::instruction::create_associated_token_account;

use crate::error::{CreateGiftError, RedeemError};

/// Lamports withheld from a native redemption so the escrow account, as
/// fee payer of its own draining transaction, can still cover the network
/// fee.
pub const REDEEM_FEE_RESERVE: u64 = 5_000;

// `transfer_checked` needs the mint's decimals, an extra ledger read the
// protocol does not consume.
#[allow(deprecated)]
fn token_transfer(
    source: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    spl_token::instruction::transfer(&spl_token::id(), source, destination, authority, &[], amount)
}

/// Funding, native asset: a single system transfer creator -> escrow.
///
/// Returned unsigned; the creator's wallet signs and submits. Receiving
/// lamports needs no account initialization, so there is nothing else to
/// do.
pub fn build_native_funding_tx(creator: &Pubkey, escrow: &Pubkey, lamports: u64) -> Transaction {
    let transfer = system_instruction::transfer(creator, escrow, lamports);
    Transaction::new_with_payer(&[transfer], Some(creator))
}

/// Funding, token asset: three instructions, order-sensitive.
///
/// 1. allocate a rent-funded account at the escrow address, owned by the
///    token program, paid by the creator;
/// 2. initialize it as a holding account for `mint` with the escrow as
///    its own authority (self-custody, no separate authority key exists);
/// 3. transfer `amount` from the creator's associated account into it.
///
/// The escrow keypair co-signs (the ledger requires the signature of a
/// newly created account); the creator signs later through their wallet,
/// which also pays the fee.
pub fn build_token_funding_tx(
    creator: &Pubkey,
    escrow: &Keypair,
    mint: &Pubkey,
    amount: u64,
    rent: u64,
    recent_blockhash: Hash,
) -> Result<Transaction, CreateGiftError> {
    let escrow_pubkey = escrow.pubkey();
    let creator_holding = get_associated_token_address(creator, mint);

    let instructions = [
        system_instruction::create_account(
            creator,
            &escrow_pubkey,
            rent,
            spl_token::state::Account::LEN as u64,
            &spl_token::id(),
        ),
        spl_token::instruction::initialize_account3(
            &spl_token::id(),
            &escrow_pubkey,
            mint,
            &escrow_pubkey,
        )?,
        token_transfer(&creator_holding, &escrow_pubkey, creator, amount)?,
    ];

    let mut transaction = Transaction::new_with_payer(&instructions, Some(creator));
    transaction.try_partial_sign(&[escrow], recent_blockhash)?;
    Ok(transaction)
}

/// Redemption, native asset: drain `amount - REDEEM_FEE_RESERVE` to the
/// receiver.
///
/// The escrow is the fee payer and the transaction comes back fully
/// signed by it, ready to submit. Amounts at or below the reserve cannot
/// fund a transfer and are rejected.
pub fn build_native_redeem_tx(
    escrow: &Keypair,
    receiver: &Pubkey,
    amount: u64,
    recent_blockhash: Hash,
) -> Result<Transaction, RedeemError> {
    if amount <= REDEEM_FEE_RESERVE {
        return Err(RedeemError::InsufficientFunds {
            amount,
            reserve: REDEEM_FEE_RESERVE,
        });
    }

    let escrow_pubkey = escrow.pubkey();
    let transfer =
        system_instruction::transfer(&escrow_pubkey, receiver, amount - REDEEM_FEE_RESERVE);
    let mut transaction = Transaction::new_with_payer(&[transfer], Some(&escrow_pubkey));
    transaction.try_sign(&[escrow], recent_blockhash)?;
    Ok(transaction)
}

/// Redemption, token asset: move `amount` out of the escrow's holding
/// account into the receiver's associated account.
///
/// With `create_receiver_account` set, the associated account is created
/// first, funded by the receiver. The receiver pays the fee on this path,
/// so the escrow only partially signs (authorizing the transfer); the
/// receiver's wallet signature is still required before submission.
pub fn build_token_redeem_tx(
    escrow: &Keypair,
    receiver: &Pubkey,
    mint: &Pubkey,
    amount: u64,
    create_receiver_account: bool,
    recent_blockhash: Hash,
) -> Result<Transaction, RedeemError> {
    let escrow_pubkey = escrow.pubkey();
    let receiver_holding = get_associated_token_address(receiver, mint);

    let mut instructions = Vec::with_capacity(2);
    if create_receiver_account {
        instructions.push(create_associated_token_account(
            receiver,
            receiver,
            mint,
            &spl_token::id(),
        ));
    }
    instructions.push(token_transfer(
        &escrow_pubkey,
        &receiver_holding,
        &escrow_pubkey,
        amount,
    )?);

    let mut transaction = Transaction::new_with_payer(&instructions, Some(receiver));
    transaction.try_partial_sign(&[escrow], recent_blockhash)?;
    Ok(transaction)
}
