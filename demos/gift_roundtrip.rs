//! Walk the full gift lifecycle offline: create a gift, ship the URI,
//! redeem it.
//!
//! Runs against a stub ledger (fixed rent and blockhash, every account
//! exists), so no node is needed:
//!
//!   cargo run --example gift_roundtrip

use async_trait::async_trait;
use solana_gifts::{
    create_gift, decode_gift, redeem_gift, GiftAsset, LedgerClient, LedgerError,
    TokenAccountStatus, REDEEM_FEE_RESERVE,
};
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;

struct StubLedger {
    blockhash: Hash,
}

#[async_trait]
impl LedgerClient for StubLedger {
    async fn account_exists(&self, _address: &Pubkey) -> Result<bool, LedgerError> {
        Ok(true)
    }

    async fn minimum_rent_exempt_balance(&self, _data_len: usize) -> Result<u64, LedgerError> {
        Ok(2_039_280)
    }

    async fn latest_blockhash(&self) -> Result<Hash, LedgerError> {
        Ok(self.blockhash)
    }

    async fn token_account(
        &self,
        _address: &Pubkey,
    ) -> Result<Option<TokenAccountStatus>, LedgerError> {
        Ok(None)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ledger = StubLedger {
        blockhash: Hash::new_unique(),
    };
    let creator = Pubkey::new_unique();
    let receiver = Pubkey::new_unique();

    println!("Solana gift walkthrough");
    println!("=======================");
    println!();

    println!("Step 1: create a 1.5 SOL gift from {creator}");
    let created = create_gift(&ledger, &creator, 1_500_000_000, GiftAsset::Native).await?;
    println!(
        "  funding tx: {} instruction(s), signed later by the creator's wallet",
        created.transaction.message.instructions.len()
    );
    println!("  gift link (this IS the gift — treat it like cash):");
    println!("    {}", created.uri);
    println!();

    println!("Step 2: decode the link on the receiving side");
    let gift = decode_gift(&created.uri)?;
    println!("  escrow account: {}", gift.escrow_pubkey());
    println!("  amount:         {} lamports", gift.amount);
    println!();

    println!("Step 3: redeem to {receiver}");
    let redeem_tx = redeem_gift(&ledger, &created.uri, &receiver).await?;
    println!(
        "  redemption tx: {} instruction(s), fully signed by the escrow",
        redeem_tx.message.instructions.len()
    );
    println!(
        "  transfers {} lamports ({} withheld as fee reserve)",
        gift.amount - REDEEM_FEE_RESERVE,
        REDEEM_FEE_RESERVE
    );
    println!();

    println!("Step 4: create and redeem a token gift");
    let mint = Pubkey::new_unique();
    let token_gift = create_gift(&ledger, &creator, 100, GiftAsset::Token(mint)).await?;
    let token_redeem = redeem_gift(&ledger, &token_gift.uri, &receiver).await?;
    println!(
        "  funding tx: {} instructions (create account, initialize, transfer)",
        token_gift.transaction.message.instructions.len()
    );
    println!(
        "  redemption tx: {} instructions (create receiver account, transfer)",
        token_redeem.message.instructions.len()
    );

    Ok(())
}
