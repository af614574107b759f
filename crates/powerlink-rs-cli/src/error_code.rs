// crates/powerlink-rs-cli/src/error_code.rs

//! The closed set of error kinds raised by the command-line front-end.

use core::fmt;

/// Every outcome the CLI itself can report.
///
/// The discriminants are stable identifiers. They are the `originalCode`
/// values used for the `cli` component in the error-code table, so variants
/// must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u32)]
pub enum CliErrorCode {
    #[default]
    Success = 0,
    Usage = 1,
    CoreApiFailed = 2,
    CliApiFailed = 3,
    ExceptionCaught = 4,
    InsufficientParameters = 5,
    OutputPathNotFound = 6,
    XmlFileNotFound = 7,
    FileNotExists = 8,
    FileExtensionIncorrect = 9,
    SchemaFileNotExists = 10,
    OutputPathNotExists = 11,
    GrammarLoadError = 12,
    SchemaInvalid = 13,
    NullPointer = 14,
    NoResultForXPath = 15,
    LogFileOpenFailed = 16,
    ErrorTableNotLoaded = 17,
    ErrorInfoNotFound = 18,
    ConfigGenerationSuccess = 19,
    Failure = 20,
}

impl CliErrorCode {
    /// All variants in declaration order.
    pub const ALL: [CliErrorCode; 21] = [
        CliErrorCode::Success,
        CliErrorCode::Usage,
        CliErrorCode::CoreApiFailed,
        CliErrorCode::CliApiFailed,
        CliErrorCode::ExceptionCaught,
        CliErrorCode::InsufficientParameters,
        CliErrorCode::OutputPathNotFound,
        CliErrorCode::XmlFileNotFound,
        CliErrorCode::FileNotExists,
        CliErrorCode::FileExtensionIncorrect,
        CliErrorCode::SchemaFileNotExists,
        CliErrorCode::OutputPathNotExists,
        CliErrorCode::GrammarLoadError,
        CliErrorCode::SchemaInvalid,
        CliErrorCode::NullPointer,
        CliErrorCode::NoResultForXPath,
        CliErrorCode::LogFileOpenFailed,
        CliErrorCode::ErrorTableNotLoaded,
        CliErrorCode::ErrorInfoNotFound,
        CliErrorCode::ConfigGenerationSuccess,
        CliErrorCode::Failure,
    ];

    /// The numeric code as emitted by the CLI component.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// The symbolic name used in the `value` attribute of the error-code table.
    pub const fn symbol(self) -> &'static str {
        match self {
            CliErrorCode::Success => "SUCCESS",
            CliErrorCode::Usage => "USAGE",
            CliErrorCode::CoreApiFailed => "CORE_API_FAILED",
            CliErrorCode::CliApiFailed => "CLI_API_FAILED",
            CliErrorCode::ExceptionCaught => "EXCEPTION_CAUGHT",
            CliErrorCode::InsufficientParameters => "INSUFFICIENT_PARAMETERS",
            CliErrorCode::OutputPathNotFound => "OUTPUT_PATH_NOT_FOUND",
            CliErrorCode::XmlFileNotFound => "XML_FILE_NOT_FOUND",
            CliErrorCode::FileNotExists => "FILE_NOT_EXISTS",
            CliErrorCode::FileExtensionIncorrect => "FILE_EXTN_INCORRECT",
            CliErrorCode::SchemaFileNotExists => "SCHEMA_FILE_NOT_EXISTS",
            CliErrorCode::OutputPathNotExists => "OUTPUT_PATH_NOT_EXISTS",
            CliErrorCode::GrammarLoadError => "GRAMMAR_LOAD_ERROR",
            CliErrorCode::SchemaInvalid => "SCHEMA_INVALID",
            CliErrorCode::NullPointer => "NULL_POINTER",
            CliErrorCode::NoResultForXPath => "NO_RESULT_FOR_XPATH",
            CliErrorCode::LogFileOpenFailed => "LOG_FILE_OPEN_FAILED",
            CliErrorCode::ErrorTableNotLoaded => "ERROR_TABLE_NOT_LOADED",
            CliErrorCode::ErrorInfoNotFound => "ERROR_INFO_NOT_FOUND",
            CliErrorCode::ConfigGenerationSuccess => "CONFIG_GENERATION_SUCCESS",
            CliErrorCode::Failure => "FAILURE",
        }
    }
}

impl fmt::Display for CliErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
