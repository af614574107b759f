// crates/powerlink-rs-cli/src/commands.rs

//! Command implementations. Each returns the text to print on success.

use crate::cli::Commands;
use crate::error::LookupError;
use crate::error_code::CliErrorCode;
use crate::logging::{self, LogConfig};
use crate::reporter::Reporter;
use crate::result::CliResult;
use crate::table::ErrorCodeEntry;
use crate::validate;
use core::fmt::Write;
use log::{info, warn};
use std::path::Path;

/// Installs logging and loads the error-code table.
///
/// The table is loaded even when logging cannot be installed, so a
/// logging failure can still be reported with its tool code. Reporting
/// works without the table, just without tool codes.
///
/// # Errors
/// The outcome of a failed logger installation.
pub fn prepare(
    reporter: &Reporter<'_>,
    log_config: &LogConfig,
    table_path: &Path,
) -> Result<(), CliResult> {
    let installed = logging::init_logging(log_config, reporter);
    if let Err(e) = reporter.table().load(table_path) {
        warn!("[ErrTable] {}", e);
    }
    installed
}

/// Dispatches a parsed command.
pub fn run(reporter: &Reporter<'_>, command: &Commands) -> Result<String, CliResult> {
    match command {
        Commands::Check {
            project,
            output,
            create_output,
            schema,
        } => check(reporter, project, output, *create_output, schema.as_deref()),
        Commands::Explain { component, code } => explain(reporter, component, *code),
        Commands::List { component } => list(reporter, component.as_deref()),
    }
}

/// Validates a project and its output directory.
pub fn check(
    reporter: &Reporter<'_>,
    project: &Path,
    output: &Path,
    create_output: bool,
    schema: Option<&Path>,
) -> Result<String, CliResult> {
    let language = reporter.language();
    if let Some(schema) = schema {
        validate::validate_schema(schema, language)
            .map_err(|e| reporter.handle_cli_api_failed("validate_schema", &e))?;
    }
    validate::validate_project(project, output, create_output, language)
        .map_err(|e| reporter.handle_cli_api_failed("validate_project", &e))?;

    info!("[Check] Project {} passed input validation.", project.display());
    Ok(reporter.message(
        CliErrorCode::ConfigGenerationSuccess,
        &[&project.display(), &output.display()],
    ))
}

/// Shows the tool code and localized description of one error code.
pub fn explain(reporter: &Reporter<'_>, component: &str, code: u32) -> Result<String, CliResult> {
    let table = reporter.table();
    let tool_code = table
        .tool_code(component, code)
        .map_err(|e| lookup_failed(reporter, &e))?;
    let description = table
        .describe(component, code, reporter.language())
        .map_err(|e| lookup_failed(reporter, &e))?;

    Ok(format!(
        "{} {} -> {}: {}",
        component,
        code,
        display_code(tool_code),
        description.unwrap_or_default()
    ))
}

/// Lists the loaded components and their entries.
pub fn list(reporter: &Reporter<'_>, component: Option<&str>) -> Result<String, CliResult> {
    let table = reporter
        .table()
        .snapshot()
        .map_err(|e| lookup_failed(reporter, &e))?;

    let components: Vec<_> = match component {
        Some(name) => vec![table.component(name).ok_or_else(|| {
            lookup_failed(reporter, &LookupError::InvalidComponent(name.to_string()))
        })?],
        None => table.components().iter().collect(),
    };

    let mut out = String::new();
    for component in components {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{} (version {})", component.name, component.version);
        for entry in &component.entries {
            let _ = writeln!(out, "  {}", entry_line(reporter, entry));
        }
    }
    Ok(out.trim_end().to_string())
}

fn entry_line(reporter: &Reporter<'_>, entry: &ErrorCodeEntry) -> String {
    format!(
        "{:>6} -> {:>6}  {}  {}",
        display_code(entry.original_code),
        display_code(entry.tool_code),
        entry.name,
        entry.description(reporter.language()).unwrap_or_default()
    )
}

fn display_code(code: Option<u32>) -> String {
    code.map_or_else(|| "-".to_string(), |c| c.to_string())
}

fn lookup_failed(reporter: &Reporter<'_>, error: &LookupError) -> CliResult {
    let kind = error.kind();
    let message = match error {
        LookupError::NotLoaded => reporter.message(kind, &[]),
        LookupError::InvalidComponent(component) => {
            reporter.message(kind, &[&"-", component])
        }
        LookupError::NotFound { component, code } => reporter.message(kind, &[code, component]),
    };
    CliResult::with_message(kind, message)
}
