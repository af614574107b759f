// crates/powerlink-rs-cli/src/registry.rs

//! The load-once, read-many error-code cross-reference service.

use crate::error::{LookupError, TableError};
use crate::messages::Language;
use crate::result::ErrorKind;
use crate::table::{ErrorCodeTable, parse_error_table};
use log::{debug, info};
use std::fs;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Default location of the error-code table, relative to the working directory.
pub const DEFAULT_TABLE_PATH: &str = "resources/ErrorCodes.xml";

/// Resolves component error codes to the numeric codes shown to users.
///
/// The service starts out unloaded. Each successful load swaps in a fully
/// validated table; a failed load leaves the current state untouched, so
/// queries never observe a partial table.
#[derive(Debug, Default)]
pub struct ErrorCodeCrossReference {
    table: RwLock<Option<Arc<ErrorCodeTable>>>,
}

impl ErrorCodeCrossReference {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and loads the table at `path`.
    ///
    /// # Errors
    /// Returns `TableError::Io` if the file cannot be read, or any error
    /// from [`ErrorCodeCrossReference::load_from_str`].
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(), TableError> {
        let path = path.as_ref();
        let xml_content = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_from_str(&xml_content)?;
        info!("[ErrTable] Loaded error-code table from {}.", path.display());
        Ok(())
    }

    /// Parses `xml_content` and replaces the current table.
    ///
    /// # Errors
    /// Returns a `TableError` if the document cannot be parsed or
    /// validated. The previously loaded table, if any, stays in place.
    pub fn load_from_str(&self, xml_content: &str) -> Result<(), TableError> {
        let table = parse_error_table(xml_content)?;
        for component in table.components() {
            debug!(
                "[ErrTable] Component '{}' v{}: {} codes.",
                component.name,
                component.version,
                component.entries.len()
            );
        }
        *self.table.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(table));
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// A shared handle to the currently loaded table.
    pub fn snapshot(&self) -> Result<Arc<ErrorCodeTable>, LookupError> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(LookupError::NotLoaded)
    }

    /// Looks up the tool code for `original_code` in `component`.
    ///
    /// Returns `Ok(None)` when the entry exists but its tool code is blank
    /// in the table.
    ///
    /// # Errors
    /// `NotLoaded` before any successful load, `InvalidComponent` for an
    /// unknown component name, `NotFound` when no entry matches.
    pub fn tool_code(&self, component: &str, original_code: u32) -> Result<Option<u32>, LookupError> {
        let table = self.snapshot()?;
        let entries = table
            .component(component)
            .ok_or_else(|| LookupError::InvalidComponent(component.to_string()))?;
        entries
            .find(original_code)
            .map(|entry| entry.tool_code)
            .ok_or_else(|| LookupError::NotFound {
                component: component.to_string(),
                code: original_code,
            })
    }

    /// Looks up the tool code for an error kind in its own component.
    pub fn tool_code_for<K: ErrorKind>(&self, kind: K) -> Result<Option<u32>, LookupError> {
        self.tool_code(K::COMPONENT, kind.code())
    }

    /// Localized description of `original_code` in `component`.
    ///
    /// # Errors
    /// Same as [`ErrorCodeCrossReference::tool_code`].
    pub fn describe(
        &self,
        component: &str,
        original_code: u32,
        language: Language,
    ) -> Result<Option<String>, LookupError> {
        let table = self.snapshot()?;
        let entries = table
            .component(component)
            .ok_or_else(|| LookupError::InvalidComponent(component.to_string()))?;
        entries
            .find(original_code)
            .map(|entry| entry.description(language).map(str::to_string))
            .ok_or_else(|| LookupError::NotFound {
                component: component.to_string(),
                code: original_code,
            })
    }
}
