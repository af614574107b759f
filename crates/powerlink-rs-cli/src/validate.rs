// crates/powerlink-rs-cli/src/validate.rs

//! Input checks run before a project is handed to the configuration library.

use crate::error_code::CliErrorCode;
use crate::messages::{self, Language};
use crate::result::CliResult;
use log::trace;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs;
use std::path::Path;

/// Extension of project files.
pub const PROJECT_EXTENSION: &str = "xml";

/// Extension of schema files.
pub const SCHEMA_EXTENSION: &str = "xsd";

/// Root element of a project file.
pub const PROJECT_ROOT_ELEMENT: &str = "openCONFIGURATORProject";

fn fail(kind: CliErrorCode, language: Language, args: &[&dyn std::fmt::Display]) -> CliResult {
    CliResult::with_message(kind, messages::message(kind, language, args))
}

/// Fails with `missing` unless `path` is an existing regular file.
pub fn require_file(path: &Path, missing: CliErrorCode, language: Language) -> Result<(), CliResult> {
    if path.is_file() {
        Ok(())
    } else {
        Err(fail(missing, language, &[&path.display()]))
    }
}

/// Fails with `FileExtensionIncorrect` unless `path` ends in `.extension`
/// (case-insensitive).
pub fn require_extension(path: &Path, extension: &str, language: Language) -> Result<(), CliResult> {
    let matches = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
    if matches {
        Ok(())
    } else {
        Err(fail(
            CliErrorCode::FileExtensionIncorrect,
            language,
            &[&path.display(), &format!(".{}", extension)],
        ))
    }
}

/// Ensures the output directory is usable.
///
/// A missing directory is created when `create` is set; otherwise it fails
/// with `OutputPathNotExists`. A path that exists but is not a directory, or
/// that cannot be created, fails with `OutputPathNotFound`.
pub fn require_output_directory(path: &Path, create: bool, language: Language) -> Result<(), CliResult> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        return Err(fail(CliErrorCode::OutputPathNotFound, language, &[&path.display()]));
    }
    if !create {
        return Err(fail(CliErrorCode::OutputPathNotExists, language, &[&path.display()]));
    }
    fs::create_dir_all(path)
        .map_err(|_| fail(CliErrorCode::OutputPathNotFound, language, &[&path.display()]))?;
    trace!("[Validate] Created output directory {}.", path.display());
    Ok(())
}

/// Checks that `xml_content` is well-formed up to its root element and that
/// the root element is `<openCONFIGURATORProject>`.
pub fn check_project_root(source: &Path, xml_content: &str, language: Language) -> Result<(), CliResult> {
    let mut reader = Reader::from_str(xml_content);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == PROJECT_ROOT_ELEMENT.as_bytes() {
                    return Ok(());
                }
                return Err(no_root(source, language));
            }
            Ok(Event::Eof) => return Err(no_root(source, language)),
            Ok(_) => {}
            Err(e) => {
                return Err(fail(
                    CliErrorCode::SchemaInvalid,
                    language,
                    &[&source.display(), &reader.error_position(), &e],
                ));
            }
        }
    }
}

fn no_root(source: &Path, language: Language) -> CliResult {
    fail(
        CliErrorCode::NoResultForXPath,
        language,
        &[&format!("/{}", PROJECT_ROOT_ELEMENT), &source.display()],
    )
}

/// Runs every check on a project file and its output directory.
pub fn validate_project(
    project: &Path,
    output: &Path,
    create_output: bool,
    language: Language,
) -> Result<(), CliResult> {
    require_file(project, CliErrorCode::XmlFileNotFound, language)?;
    require_extension(project, PROJECT_EXTENSION, language)?;

    let xml_content = fs::read_to_string(project)
        .map_err(|e| fail(CliErrorCode::Failure, language, &[&e]))?;
    check_project_root(project, &xml_content, language)?;

    require_output_directory(output, create_output, language)
}

/// Checks that a schema file exists and has the schema extension.
pub fn validate_schema(schema: &Path, language: Language) -> Result<(), CliResult> {
    require_file(schema, CliErrorCode::SchemaFileNotExists, language)?;
    require_extension(schema, SCHEMA_EXTENSION, language)
}
