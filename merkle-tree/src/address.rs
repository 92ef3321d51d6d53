use crate::error::LedgerError;
use alloy_primitives::Address;

const ADDRESS_HEX_LEN: usize = 40;

/// Normalizes a textual ledger address to its 20 bytes.
///
/// Accepts an optional `0x` prefix followed by 40 hex characters. An all-lowercase
/// or all-uppercase address is taken as is, a mixed-case one has to carry
/// a valid EIP-55 checksum. Differently cased forms of the same address
/// normalize to the same value.
pub fn normalize_address(raw: &str) -> Result<Address, LedgerError> {
    let invalid = |reason| LedgerError::InvalidAddress {
        address: raw.to_string(),
        reason,
    };

    let body = raw.strip_prefix("0x").unwrap_or(raw);
    if body.len() != ADDRESS_HEX_LEN {
        return Err(invalid("expected 40 hex characters"));
    }
    let mut bytes = [0_u8; 20];
    hex::decode_to_slice(body, &mut bytes).map_err(|_| invalid("not a hex string"))?;
    let address = Address::new(bytes);

    if is_mixed_case(body) {
        let checksummed = address.to_checksum(None);
        if &checksummed[2..] != body {
            return Err(invalid("bad EIP-55 checksum"));
        }
    }
    Ok(address)
}

fn is_mixed_case(hex_body: &str) -> bool {
    hex_body.chars().any(|c| c.is_ascii_lowercase())
        && hex_body.chars().any(|c| c.is_ascii_uppercase())
}
