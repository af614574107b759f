// crates/powerlink-rs-cli/src/reporter.rs

//! Turns outcomes into user-facing, tool-coded strings.
//!
//! Formatting never fails: when the error-code table cannot supply a tool
//! code, the miss is logged at INFO and the plain message is returned.

use crate::error_code::CliErrorCode;
use crate::messages::{self, Language, Phrase};
use crate::registry::ErrorCodeCrossReference;
use crate::result::{CliResult, CoreResult, ErrorKind, Outcome};
use log::{error, info};
use std::error::Error;

/// Formats and wraps outcomes in one language against one error-code table.
#[derive(Debug, Clone, Copy)]
pub struct Reporter<'a> {
    table: &'a ErrorCodeCrossReference,
    language: Language,
}

impl<'a> Reporter<'a> {
    pub fn new(table: &'a ErrorCodeCrossReference, language: Language) -> Self {
        Self { table, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn table(&self) -> &'a ErrorCodeCrossReference {
        self.table
    }

    /// Renders the template of `kind` in the reporter's language.
    pub fn message(&self, kind: CliErrorCode, args: &[&dyn std::fmt::Display]) -> String {
        messages::message(kind, self.language, args)
    }

    /// Prefixes the outcome's message with its tool code, if one is known.
    pub fn format<K: ErrorKind>(&self, result: &Outcome<K>) -> String {
        self.with_tool_code(result.kind(), result.to_string())
    }

    /// Formats a CLI outcome against the `cli` component.
    pub fn format_cli(&self, result: &CliResult) -> String {
        self.format(result)
    }

    /// Formats a configuration library outcome against the `library` component.
    pub fn format_core(&self, result: &CoreResult) -> String {
        self.format(result)
    }

    /// Converts an unexpected fault into a `Failure` outcome.
    pub fn format_fault(&self, fault: &dyn Error) -> CliResult {
        let text = messages::phrase(Phrase::UnhandledException, self.language, &[&fault]);
        CliResult::with_message(
            CliErrorCode::Failure,
            self.with_tool_code(CliErrorCode::ExceptionCaught, text),
        )
    }

    /// Logs a failed CLI call and wraps it with the caller's API description.
    pub fn handle_cli_api_failed(&self, api: &str, inner: &CliResult) -> CliResult {
        self.log_inner(&self.format_cli(inner));
        CliResult::with_message(
            CliErrorCode::CliApiFailed,
            self.message(CliErrorCode::CliApiFailed, &[&api, inner]),
        )
    }

    /// Logs a failed configuration library call and wraps it with the
    /// caller's API description.
    pub fn handle_core_api_failed(&self, api: &str, inner: &CoreResult) -> CliResult {
        self.log_inner(&self.format_core(inner));
        CliResult::with_message(
            CliErrorCode::CoreApiFailed,
            self.message(CliErrorCode::CoreApiFailed, &[&api, inner]),
        )
    }

    /// Logs an unexpected fault and wraps it with the caller's API description.
    pub fn handle_exception_caught(&self, api: &str, fault: &dyn Error) -> CliResult {
        self.log_inner(&fault.to_string());
        CliResult::with_message(
            CliErrorCode::ExceptionCaught,
            self.message(CliErrorCode::ExceptionCaught, &[&api, &fault]),
        )
    }

    fn log_inner(&self, text: &str) {
        error!("{}", messages::phrase(Phrase::InnerFailure, self.language, &[&text]));
    }

    fn with_tool_code<K: ErrorKind>(&self, kind: K, text: String) -> String {
        let reason = match self.table.tool_code_for(kind) {
            Ok(Some(tool_code)) => return format!("{}: {}", tool_code, text),
            Ok(None) => "tool code is blank".to_string(),
            Err(e) => e.to_string(),
        };
        info!(
            "{}",
            messages::phrase(
                Phrase::ToolCodeUnavailable,
                self.language,
                &[&K::COMPONENT, &kind.code(), &reason]
            )
        );
        text
    }
}
