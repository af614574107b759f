// crates/powerlink-rs-cli/src/result.rs

//! The `(kind, message)` outcome passed between every fallible operation.

use crate::error_code::CliErrorCode;
use core::fmt;

/// Name of the configuration library's component in the error-code table.
pub const LIBRARY_COMPONENT: &str = "library";

/// Name of the CLI's component in the error-code table.
pub const CLI_COMPONENT: &str = "cli";

/// An error kind that can be carried by an [`Outcome`].
///
/// Each kind belongs to exactly one component of the error-code table and
/// exposes the numeric code that component emits.
pub trait ErrorKind: Copy + fmt::Debug + fmt::Display + PartialEq {
    /// The component whose table entries translate this kind.
    const COMPONENT: &'static str;

    /// The success sentinel.
    const SUCCESS: Self;

    /// The component-local numeric code (`originalCode` in the table).
    fn code(self) -> u32;
}

impl ErrorKind for CliErrorCode {
    const COMPONENT: &'static str = CLI_COMPONENT;
    const SUCCESS: Self = CliErrorCode::Success;

    fn code(self) -> u32 {
        CliErrorCode::code(self)
    }
}

/// A raw numeric error code as returned by the configuration library.
///
/// The library's own enumeration is not mirrored here; only the numeric
/// value is needed to resolve it against the error-code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LibraryErrorCode(pub u32);

impl ErrorKind for LibraryErrorCode {
    const COMPONENT: &'static str = LIBRARY_COMPONENT;
    const SUCCESS: Self = LibraryErrorCode(0);

    fn code(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LibraryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "library error {}", self.0)
    }
}

/// An immutable `(kind, message)` pair.
///
/// A successful outcome may carry an informational message. Any other kind
/// is expected to carry a diagnostic message before it reaches the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<K> {
    kind: K,
    message: String,
}

/// Outcome of a CLI operation.
pub type CliResult = Outcome<CliErrorCode>;

/// Outcome reported by the configuration library.
pub type CoreResult = Outcome<LibraryErrorCode>;

impl<K: ErrorKind> Outcome<K> {
    /// Creates an outcome without a message.
    pub fn new(kind: K) -> Self {
        Self {
            kind,
            message: String::new(),
        }
    }

    /// Creates an outcome carrying a message.
    pub fn with_message(kind: K, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// A successful outcome.
    pub fn success() -> Self {
        Self::new(K::SUCCESS)
    }

    pub fn kind(&self) -> K {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// `true` iff the kind is the success sentinel, regardless of the message.
    pub fn is_successful(&self) -> bool {
        self.kind == K::SUCCESS
    }
}

impl<K: ErrorKind> Default for Outcome<K> {
    fn default() -> Self {
        Self::success()
    }
}

impl<K: ErrorKind> fmt::Display for Outcome<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            f.write_str(&self.message)
        }
    }
}

impl<K: ErrorKind> std::error::Error for Outcome<K> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_success_is_successful() {
        for kind in CliErrorCode::ALL {
            let result = CliResult::with_message(kind, "diagnostic");
            assert_eq!(
                result.is_successful(),
                kind == CliErrorCode::Success,
                "unexpected is_successful() for {}",
                kind
            );
        }
    }

    #[test]
    fn test_success_ignores_message() {
        assert!(CliResult::with_message(CliErrorCode::Success, "all good").is_successful());
        assert!(CliResult::new(CliErrorCode::Success).is_successful());
        assert!(CliResult::default().is_successful());
    }

    #[test]
    fn test_core_result_success_is_code_zero() {
        assert!(CoreResult::default().is_successful());
        assert!(!CoreResult::with_message(LibraryErrorCode(12), "node missing").is_successful());
    }

    #[test]
    fn test_display_falls_back_to_kind() {
        let result = CliResult::new(CliErrorCode::SchemaInvalid);
        assert_eq!(result.to_string(), "SCHEMA_INVALID");

        let result = CliResult::with_message(CliErrorCode::SchemaInvalid, "bad schema");
        assert_eq!(result.to_string(), "bad schema");
    }
}
