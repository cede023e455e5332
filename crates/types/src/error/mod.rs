// Path: crates/types/src/error/mod.rs
//! Core error types for TOS typed storage.

use crate::kind::Slot;
use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors produced by the canonical scalar codec.
///
/// The three hex variants together form the "invalid format" class; which one is
/// reported is decided by the first failing check (prefix, then length, then charset).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The input did not start with `0x` after trimming and lower-casing.
    #[error("expected {kind} with 0x prefix")]
    MissingPrefix {
        /// The scalar kind being parsed (`address`, `bytes32`).
        kind: &'static str,
    },
    /// The number of hex characters after the prefix was wrong.
    #[error("expected {kind} with {expected} hex chars, got {got}")]
    InvalidLength {
        /// The scalar kind being parsed.
        kind: &'static str,
        /// The required number of hex characters.
        expected: usize,
        /// The number of characters found after the prefix.
        got: usize,
    },
    /// A character outside `[0-9a-f]` was found after the prefix.
    #[error("invalid {kind} hex string")]
    InvalidHex {
        /// The scalar kind being parsed.
        kind: &'static str,
    },
    /// The input is not a valid unsigned 256-bit decimal literal.
    #[error("invalid u256 literal '{input}': {reason}")]
    InvalidNumber {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl CodecError {
    /// Returns true for the prefix, length and charset failures of the hex kinds.
    pub fn is_invalid_format(&self) -> bool {
        matches!(
            self,
            Self::MissingPrefix { .. } | Self::InvalidLength { .. } | Self::InvalidHex { .. }
        )
    }
}

impl ErrorCode for CodecError {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingPrefix { .. } => "CODEC_MISSING_PREFIX",
            Self::InvalidLength { .. } => "CODEC_INVALID_LENGTH",
            Self::InvalidHex { .. } => "CODEC_INVALID_HEX",
            Self::InvalidNumber { .. } => "CODEC_INVALID_NUMBER",
        }
    }
}

/// Errors related to constructing and accessing typed mappings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The host value's dynamic type cannot be coerced to the required kind.
    #[error("expected {expected} {slot}, got {got}")]
    TypeMismatch {
        /// Where the value was used.
        slot: Slot,
        /// The name of the expected kind.
        expected: &'static str,
        /// The host type name of the offending value.
        got: &'static str,
    },
    /// The value had the right type but its contents failed canonical validation.
    #[error("{source}")]
    Codec {
        /// Where the value was used.
        slot: Slot,
        /// The codec failure.
        #[source]
        source: CodecError,
    },
    /// An unknown kind name was passed to the constructor.
    #[error("unsupported mapping {slot} type: {name}")]
    UnsupportedKind {
        /// Key or value position.
        slot: Slot,
        /// The name as given by the caller.
        name: String,
    },
    /// The constructor received more than two kind arguments.
    #[error("wrong number of arguments: expected at most 2 kinds, got {got}")]
    Arity {
        /// The number of arguments received.
        got: usize,
    },
}

impl MappingError {
    /// The operand a coercion failure is attributed to, if any.
    pub fn slot(&self) -> Option<Slot> {
        match self {
            Self::TypeMismatch { slot, .. } | Self::Codec { slot, .. } => Some(*slot),
            Self::UnsupportedKind { slot, .. } => Some(*slot),
            Self::Arity { .. } => None,
        }
    }
}

impl ErrorCode for MappingError {
    fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "MAPPING_TYPE_MISMATCH",
            Self::Codec { source, .. } => source.code(),
            Self::UnsupportedKind { .. } => "MAPPING_UNSUPPORTED_KIND",
            Self::Arity { .. } => "MAPPING_ARITY",
        }
    }
}

/// Why a native callable rejected one of its arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// Fewer arguments were passed than the callable requires.
    #[error("value expected")]
    Missing,
    /// The argument has the wrong host type.
    #[error("{expected} expected, got {got}")]
    WrongType {
        /// What the callable accepts at this position.
        expected: &'static str,
        /// The host type name of the value received.
        got: &'static str,
    },
    /// The argument was rejected by mapping coercion or construction.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl From<CodecError> for ArgumentError {
    fn from(e: CodecError) -> Self {
        Self::Mapping(MappingError::Codec {
            slot: Slot::Argument,
            source: e,
        })
    }
}

impl ErrorCode for ArgumentError {
    fn code(&self) -> &'static str {
        match self {
            Self::Missing => "ARGUMENT_MISSING",
            Self::WrongType { .. } => "ARGUMENT_WRONG_TYPE",
            Self::Mapping(e) => e.code(),
        }
    }
}

/// Errors raised by the host runtime while dispatching calls and operators.
///
/// Every variant corresponds to an error a script would observe as a raised,
/// catchable host error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// A native callable rejected one of its arguments.
    #[error("bad argument #{position} to '{function}' ({source})")]
    BadArgument {
        /// The 1-based argument position.
        position: usize,
        /// The name of the native callable.
        function: String,
        /// The underlying failure.
        #[source]
        source: ArgumentError,
    },
    /// An index or new-index operator could not coerce its key or value.
    #[error("mapping {slot} type error: {source}")]
    OperatorCoercion {
        /// Whether the key or the assigned value failed.
        slot: Slot,
        /// The underlying failure.
        #[source]
        source: MappingError,
    },
    /// A mapping failure not attributable to a single argument.
    #[error(transparent)]
    Mapping(#[from] MappingError),
    /// No global or module function with this name is registered.
    #[error("attempt to call a nil value (function '{0}')")]
    UndefinedFunction(String),
    /// No module with this name is registered.
    #[error("module '{0}' not found")]
    UndefinedModule(String),
    /// The value does not support the index operators.
    #[error("attempt to index a {type_name} value")]
    NotIndexable {
        /// The host type name of the value.
        type_name: &'static str,
    },
    /// The value refuses the generic iteration protocol.
    #[error("attempt to enumerate a {type_name} value: enumeration is not supported")]
    NotEnumerable {
        /// The type name of the value (the metatable name for userdata).
        type_name: String,
    },
    /// A script attempted to replace a protected metatable.
    #[error("cannot change a protected metatable ({type_name})")]
    ProtectedMetatable {
        /// The name of the protected type.
        type_name: String,
    },
    /// The userdata payload was already borrowed, or is not of the requested type.
    #[error("userdata '{type_name}' is not accessible as the requested type")]
    BorrowConflict {
        /// The metatable name of the userdata, or `userdata` when it has none.
        type_name: String,
    },
}

impl ErrorCode for RuntimeError {
    fn code(&self) -> &'static str {
        match self {
            Self::BadArgument { .. } => "RUNTIME_BAD_ARGUMENT",
            Self::OperatorCoercion { .. } => "RUNTIME_OPERATOR_COERCION",
            Self::Mapping(e) => e.code(),
            Self::UndefinedFunction(_) => "RUNTIME_UNDEFINED_FUNCTION",
            Self::UndefinedModule(_) => "RUNTIME_UNDEFINED_MODULE",
            Self::NotIndexable { .. } => "RUNTIME_NOT_INDEXABLE",
            Self::NotEnumerable { .. } => "RUNTIME_NOT_ENUMERABLE",
            Self::ProtectedMetatable { .. } => "RUNTIME_PROTECTED_METATABLE",
            Self::BorrowConflict { .. } => "RUNTIME_BORROW_CONFLICT",
        }
    }
}

/// Errors related to loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A field held a value that is syntactically valid but unusable.
    #[error("Invalid config value for '{field}': {reason}")]
    Invalid {
        /// The offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl ErrorCode for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "CONFIG_PARSE_FAILED",
            Self::Invalid { .. } => "CONFIG_INVALID_VALUE",
        }
    }
}
