//! Canonical fixture values shared across tests

/// The zero address and zero bytes32, as returned for unset mapping slots.
pub const ZERO_HEX: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

/// An address made of `1` nibbles.
pub const ADDR_ONES: &str = "0x1111111111111111111111111111111111111111111111111111111111111111";

/// An address made of `a` nibbles, lowercase.
pub const ADDR_A_LOWER: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

/// The same address as [`ADDR_A_LOWER`], uppercase.
pub const ADDR_A_UPPER: &str = "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// A conventional 20-byte address, which the 32-byte codec rejects.
pub const ADDR_20_BYTES: &str = "0x1111111111111111111111111111111111111111";

/// The largest value of the u256 kind, 2^256 - 1.
pub const U256_MAX_DEC: &str =
    "115792089237316195423570985008687907853269984665640564039457584007913129639935";

/// Builds a `0x`-prefixed hex string of `len` repetitions of `nibble`.
pub fn repeated_hex(nibble: char, len: usize) -> String {
    let mut s = String::with_capacity(len + 2);
    s.push_str("0x");
    s.extend(std::iter::repeat(nibble).take(len));
    s
}
