// Path: crates/types/src/primitives/fixed.rs

use crate::error::CodecError;

/// Validates a `0x`-prefixed hex string of exactly `N` bytes and decodes it.
///
/// The input is trimmed and lower-cased first. Checks run in a fixed order
/// (prefix, length, charset) and the first one that fails is reported, with
/// `kind` embedded in the message.
pub fn parse_fixed_hex<const N: usize>(
    raw: &str,
    kind: &'static str,
) -> Result<[u8; N], CodecError> {
    let norm = raw.trim().to_ascii_lowercase();
    let digits = norm
        .strip_prefix("0x")
        .ok_or(CodecError::MissingPrefix { kind })?;

    if digits.len() != N * 2 {
        return Err(CodecError::InvalidLength {
            kind,
            expected: N * 2,
            got: digits.len(),
        });
    }
    if !digits
        .bytes()
        .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    {
        return Err(CodecError::InvalidHex { kind });
    }

    let mut out = [0u8; N];
    hex::decode_to_slice(digits, &mut out).map_err(|_| CodecError::InvalidHex { kind })?;
    Ok(out)
}

/// Declares a fixed-width, hex-encoded scalar type.
///
/// The generated type stores raw bytes and renders as `0x` followed by lowercase
/// hex, which is also its serde representation.
macro_rules! fixed_hex_scalar {
    ($(#[$meta:meta])* $name:ident, $kind:literal, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// Width in bytes.
            pub const LEN: usize = $len;
            /// The all-zero value, used as the default for unset mapping slots.
            pub const ZERO: Self = Self([0u8; $len]);
            /// The kind name embedded in parse errors.
            pub const KIND: &'static str = $kind;

            /// Parses and validates a hex string into its canonical value.
            pub fn parse(raw: &str) -> Result<Self, $crate::error::CodecError> {
                $crate::primitives::parse_fixed_hex::<$len>(raw, $kind).map(Self)
            }

            /// Returns the canonical `0x`-prefixed lowercase hex form.
            pub fn to_hex(&self) -> String {
                format!("0x{}", ::hex::encode(self.0))
            }

            /// Returns the raw bytes.
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Returns true if every byte is zero.
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|b| *b == 0)
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::error::CodecError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&raw).map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use fixed_hex_scalar;
