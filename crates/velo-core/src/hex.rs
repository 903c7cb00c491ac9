//! Minimal hex encoding helpers shared by the identifier newtypes.
//!
//! Kept internal so every hex-facing type exposes its own validated
//! `from_hex` constructor instead of a generic byte parser.

/// Render bytes as a lowercase hex string.
pub(crate) fn encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Render the first four bytes as hex, for `Debug` impls that must not
/// dump full identifiers into logs.
pub(crate) fn prefix(bytes: &[u8]) -> String {
    encode(&bytes[..bytes.len().min(4)])
}

/// Decode a lowercase/uppercase hex string into bytes.
pub(crate) fn decode(hex: &str) -> Result<Vec<u8>, String> {
    if !hex.is_ascii() {
        return Err("hex string must be ASCII".to_string());
    }
    if hex.len() % 2 != 0 {
        return Err("hex string must have even length".to_string());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| format!("invalid hex at position {i}: {e}"))
        })
        .collect()
}

/// Decode a hex string into a fixed-size array.
pub(crate) fn decode_array<const N: usize>(hex: &str) -> Result<[u8; N], String> {
    let hex = hex.trim().to_lowercase();
    if hex.len() != N * 2 {
        return Err(format!("expected {} hex chars, got {}", N * 2, hex.len()));
    }
    let bytes = decode(&hex)?;
    let mut arr = [0u8; N];
    arr.copy_from_slice(&bytes);
    Ok(arr)
}
