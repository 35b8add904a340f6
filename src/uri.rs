//! Gift URI codec: lossless mapping between [`GiftData`] and the
//! `solanagift:` link that carries a gift.
//!
//! The URI is the gift. It embeds the escrow keypair's secret, so whoever
//! holds the link holds the funds; there is no other record anywhere.

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use url::{form_urlencoded, Url};
use zeroize::Zeroize;

use crate::error::ParseUriError;

/// Fixed protocol scheme; decoding rejects anything else.
pub const GIFT_SCHEME: &str = "solanagift";

const AMOUNT_PARAM: &str = "amount";
const ASSET_PARAM: &str = "assetIdentifier";
const SECRET_PARAM: &str = "escrowSecret";

/// Which asset a gift carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiftAsset {
    /// Lamports, moved with a plain system transfer. Receiving them needs
    /// no pre-existing account.
    Native,
    /// An SPL token of the given mint; the escrow holds it in a token
    /// account at its own address.
    Token(Pubkey),
}

/// Everything a gift is: the bearer keypair, the promised amount, and
/// provenance.
pub struct GiftData {
    /// Single-use escrow keypair. Generated fresh per gift, never reused.
    pub escrow: Keypair,
    /// Amount in the smallest unit of the asset. After encoding this value
    /// is authoritative for redemption, independent of the escrow's live
    /// balance.
    pub amount: u64,
    /// Funding party, recorded for provenance and display; redemption
    /// never involves it.
    pub creator: Pubkey,
    /// Native lamports or a specific token mint.
    pub asset: GiftAsset,
}

impl GiftData {
    /// Public identity of the escrow account.
    pub fn escrow_pubkey(&self) -> Pubkey {
        self.escrow.pubkey()
    }
}

// The escrow secret must never reach log output; Debug shows the public
// half only.
impl fmt::Debug for GiftData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GiftData")
            .field("escrow", &self.escrow.pubkey())
            .field("amount", &self.amount)
            .field("creator", &self.creator)
            .field("asset", &self.asset)
            .finish()
    }
}

impl PartialEq for GiftData {
    fn eq(&self, other: &Self) -> bool {
        self.escrow.to_bytes() == other.escrow.to_bytes()
            && self.amount == other.amount
            && self.creator == other.creator
            && self.asset == other.asset
    }
}

impl Eq for GiftData {}

/// Encode a gift into its URI.
///
/// Pure transform, never fails for well-formed data. The creator rides in
/// the path, everything else in the query; the secret is standard base64,
/// percent-escaped by the query serializer so the link round-trips
/// byte-exactly.
pub fn encode_gift(data: &GiftData) -> Url {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair(AMOUNT_PARAM, &data.amount.to_string());
    if let GiftAsset::Token(mint) = &data.asset {
        query.append_pair(ASSET_PARAM, &mint.to_string());
    }
    let mut secret = data.escrow.to_bytes();
    query.append_pair(SECRET_PARAM, &BASE64.encode(&secret));
    secret.zeroize();

    let uri = format!("{GIFT_SCHEME}:{}?{}", data.creator, query.finish());
    Url::parse(&uri).expect("scheme and serialized query are always parseable")
}

/// Decode a gift URI.
///
/// Strict on every field: foreign schemes, unparseable creators, amounts
/// and mints, and missing or undecodable escrow secrets are all hard
/// failures. Redemption signs with the embedded keypair unconditionally,
/// so a URI must never decode into a [`GiftData`] without a usable one.
pub fn decode_gift(uri: &Url) -> Result<GiftData, ParseUriError> {
    if uri.scheme() != GIFT_SCHEME {
        return Err(ParseUriError::Scheme {
            expected: GIFT_SCHEME,
            found: uri.scheme().to_string(),
        });
    }

    // Our encoding uses the opaque `solanagift:<creator>` form; in the
    // `solanagift://<creator>` spelling the creator parses as a host.
    let creator_text = match uri.path().trim_start_matches('/') {
        "" => uri.host_str().unwrap_or(""),
        path => path,
    };
    if creator_text.is_empty() {
        return Err(ParseUriError::MissingCreator);
    }
    let creator = Pubkey::from_str(creator_text)
        .map_err(|_| ParseUriError::InvalidCreator(creator_text.to_string()))?;

    let mut amount_text = None;
    let mut mint_text = None;
    let mut secret_text = None;
    for (key, value) in uri.query_pairs() {
        match key.as_ref() {
            AMOUNT_PARAM => amount_text = Some(value.into_owned()),
            ASSET_PARAM => mint_text = Some(value.into_owned()),
            SECRET_PARAM => secret_text = Some(value.into_owned()),
            _ => {}
        }
    }

    let amount_text = amount_text.ok_or_else(|| ParseUriError::InvalidAmount("missing".into()))?;
    let amount: u64 = amount_text
        .parse()
        .map_err(|_| ParseUriError::InvalidAmount(amount_text.clone()))?;

    let asset = match mint_text {
        Some(text) => Pubkey::from_str(&text)
            .map(GiftAsset::Token)
            .map_err(|_| ParseUriError::InvalidMint(text))?,
        None => GiftAsset::Native,
    };

    let secret_text = secret_text.ok_or(ParseUriError::MissingSecret)?;
    let mut secret = BASE64
        .decode(secret_text.as_bytes())
        .map_err(|e| ParseUriError::InvalidSecret(e.to_string()))?;
    let escrow = Keypair::from_bytes(&secret).map_err(|e| ParseUriError::InvalidSecret(e.to_string()));
    secret.zeroize();
    let escrow = escrow?;

    Ok(GiftData {
        escrow,
        amount,
        creator,
        asset,
    })
}
