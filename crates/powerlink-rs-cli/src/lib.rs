// src/lib.rs

#![doc = "Command-line front-end for POWERLINK network configuration projects."]
#![doc = ""]
#![doc = "The library side provides the CLI's result model and error reporting:"]
#![doc = "- `CliResult` / `CoreResult`: `(kind, message)` outcomes with a success sentinel."]
#![doc = "- `ErrorCodeCrossReference`: maps component error codes to user-facing tool codes,"]
#![doc = "  loaded from an XML table."]
#![doc = "- `Reporter`: formats outcomes into localized, tool-coded messages and wraps"]
#![doc = "  failures from nested calls with caller context."]

// --- Crate Modules ---

pub mod cli;
pub mod commands;
mod error;
mod error_code;
pub mod logging;
pub mod messages;
mod model;
mod registry;
mod reporter;
mod result;
mod table;
pub mod validate;

// --- Public API Re-exports ---

pub use error::{LookupError, TableError};
pub use error_code::CliErrorCode;
pub use messages::Language;
pub use registry::{DEFAULT_TABLE_PATH, ErrorCodeCrossReference};
pub use reporter::Reporter;
pub use result::{
    CLI_COMPONENT, CliResult, CoreResult, ErrorKind, LIBRARY_COMPONENT, LibraryErrorCode, Outcome,
};
pub use table::{ComponentErrorTable, ErrorCodeEntry, ErrorCodeTable, parse_error_table};
