// crates/powerlink-rs-cli/src/messages.rs

//! Localized message templates for every [`CliErrorCode`].
//!
//! Templates use `{}` as positional substitution slots, filled left to right
//! by [`render`]. Supplying the wrong number of arguments is a programming
//! error and trips a debug assertion.

use crate::error_code::CliErrorCode;
use core::fmt::{self, Write};

/// Languages the CLI can report in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Language {
    #[default]
    English,
    German,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::German];

    /// Position of this language in the template tables.
    pub const fn index(self) -> usize {
        match self {
            Language::English => 0,
            Language::German => 1,
        }
    }

    /// The `lang` attribute value used in the error-code table.
    pub const fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
        }
    }

    /// Parses a `lang` attribute (case-insensitive, region suffix ignored).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or("");
        Language::ALL
            .into_iter()
            .find(|lang| lang.tag().eq_ignore_ascii_case(primary))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Fixed phrases used by the reporter that are not tied to an error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    /// `{}` = fault text.
    UnhandledException,
    /// `{}` = component, `{}` = original code, `{}` = reason.
    ToolCodeUnavailable,
    /// `{}` = failure text.
    InnerFailure,
}

type Templates = [&'static str; 2];

const fn templates(kind: CliErrorCode) -> Templates {
    match kind {
        CliErrorCode::Success => ["Operation completed successfully.", "Vorgang erfolgreich abgeschlossen."],
        CliErrorCode::Usage => ["Invalid usage: {}", "Ungültige Verwendung: {}"],
        CliErrorCode::CoreApiFailed => [
            "Configuration library API '{}' failed: {}",
            "API '{}' der Konfigurationsbibliothek fehlgeschlagen: {}",
        ],
        CliErrorCode::CliApiFailed => ["CLI API '{}' failed: {}", "CLI-API '{}' fehlgeschlagen: {}"],
        CliErrorCode::ExceptionCaught => [
            "Unexpected failure in '{}': {}",
            "Unerwarteter Fehler in '{}': {}",
        ],
        CliErrorCode::InsufficientParameters => [
            "Insufficient parameters: {}",
            "Unzureichende Parameter: {}",
        ],
        CliErrorCode::OutputPathNotFound => [
            "Output path '{}' not found.",
            "Ausgabepfad '{}' nicht gefunden.",
        ],
        CliErrorCode::XmlFileNotFound => [
            "XML file '{}' not found.",
            "XML-Datei '{}' nicht gefunden.",
        ],
        CliErrorCode::FileNotExists => [
            "File '{}' does not exist.",
            "Datei '{}' existiert nicht.",
        ],
        CliErrorCode::FileExtensionIncorrect => [
            "File '{}' has an incorrect extension; expected '{}'.",
            "Datei '{}' hat eine falsche Endung; erwartet wird '{}'.",
        ],
        CliErrorCode::SchemaFileNotExists => [
            "Schema file '{}' does not exist.",
            "Schemadatei '{}' existiert nicht.",
        ],
        CliErrorCode::OutputPathNotExists => [
            "Output path '{}' does not exist.",
            "Ausgabepfad '{}' existiert nicht.",
        ],
        CliErrorCode::GrammarLoadError => [
            "Unable to load grammar '{}'.",
            "Grammatik '{}' kann nicht geladen werden.",
        ],
        CliErrorCode::SchemaInvalid => [
            "File '{}' is invalid at position {}: {}",
            "Datei '{}' ist ungültig an Position {}: {}",
        ],
        CliErrorCode::NullPointer => [
            "Missing value in '{}'.",
            "Fehlender Wert in '{}'.",
        ],
        CliErrorCode::NoResultForXPath => [
            "No result for path '{}' in '{}'.",
            "Kein Ergebnis für Pfad '{}' in '{}'.",
        ],
        CliErrorCode::LogFileOpenFailed => [
            "Unable to open log file '{}': {}",
            "Protokolldatei '{}' kann nicht geöffnet werden: {}",
        ],
        CliErrorCode::ErrorTableNotLoaded => [
            "Error-code table is not loaded.",
            "Fehlercodetabelle ist nicht geladen.",
        ],
        CliErrorCode::ErrorInfoNotFound => [
            "No error information for code {} of component '{}'.",
            "Keine Fehlerinformation für Code {} der Komponente '{}'.",
        ],
        CliErrorCode::ConfigGenerationSuccess => [
            "Project '{}' is ready for configuration generation into '{}'.",
            "Projekt '{}' ist bereit für die Konfigurationserzeugung nach '{}'.",
        ],
        CliErrorCode::Failure => ["Operation failed: {}", "Vorgang fehlgeschlagen: {}"],
    }
}

const fn phrase_templates(phrase: Phrase) -> Templates {
    match phrase {
        Phrase::UnhandledException => ["Unhandled failure: {}", "Unbehandelter Fehler: {}"],
        Phrase::ToolCodeUnavailable => [
            "No tool code for {} error {}: {}",
            "Kein Werkzeugcode für {}-Fehler {}: {}",
        ],
        Phrase::InnerFailure => ["Caused by: {}", "Ursache: {}"],
    }
}

/// The template for `kind` in `language`.
pub fn template(kind: CliErrorCode, language: Language) -> &'static str {
    templates(kind)[language.index()]
}

/// The template for a fixed phrase in `language`.
pub fn phrase_template(phrase: Phrase, language: Language) -> &'static str {
    phrase_templates(phrase)[language.index()]
}

/// Number of `{}` slots in a template.
pub fn slot_count(template: &str) -> usize {
    template.matches("{}").count()
}

/// Fills the `{}` slots of `template` with `args`, in order.
pub fn render(template: &str, args: &[&dyn fmt::Display]) -> String {
    debug_assert_eq!(
        slot_count(template),
        args.len(),
        "argument count does not match template {:?}",
        template
    );

    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;
    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        if let Some(arg) = args.next() {
            // Writing into a String cannot fail.
            let _ = write!(out, "{}", arg);
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

/// Renders the message for `kind` in `language`.
pub fn message(kind: CliErrorCode, language: Language, args: &[&dyn fmt::Display]) -> String {
    render(template(kind, language), args)
}

/// Renders a fixed phrase in `language`.
pub fn phrase(phrase: Phrase, language: Language, args: &[&dyn fmt::Display]) -> String {
    render(phrase_template(phrase, language), args)
}
