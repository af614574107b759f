// crates/powerlink-rs-cli/tests/cross_reference.rs

use powerlink_rs_cli::{
    CliErrorCode, CliResult, CoreResult, ErrorCodeCrossReference, Language, LibraryErrorCode,
    LookupError, Reporter,
};
use std::path::PathBuf;

/// Helper function to locate a file in the `tests/data/` directory.
fn test_file(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);
    path
}

fn loaded() -> ErrorCodeCrossReference {
    let table = ErrorCodeCrossReference::new();
    table
        .load(test_file("ErrorCodes.xml"))
        .expect("Failed to load test error-code table");
    table
}

#[test]
fn test_known_codes_resolve_per_component() {
    let table = loaded();
    assert!(table.is_loaded());

    assert_eq!(table.tool_code("library", 6), Ok(Some(2006)));
    assert_eq!(table.tool_code("cli", 6), Ok(Some(1006)));
    assert_eq!(
        table.tool_code("cli", 999),
        Err(LookupError::NotFound {
            component: "cli".into(),
            code: 999
        })
    );
}

#[test]
fn test_unknown_component_never_matches() {
    let table = loaded();
    let result = table.tool_code("server", 6);
    assert_eq!(result, Err(LookupError::InvalidComponent("server".into())));
    assert_eq!(
        result.unwrap_err().kind(),
        CliErrorCode::ErrorInfoNotFound
    );
}

#[test]
fn test_blank_codes_do_not_match_the_old_sentinel() {
    let table = loaded();
    // Only the entry that really carries 65535 matches; the blank one does not.
    assert_eq!(table.tool_code("library", 0xFFFF), Ok(Some(2999)));

    // Found, but without a tool code.
    assert_eq!(table.tool_code("library", 40), Ok(None));

    let snapshot = table.snapshot().unwrap();
    let library = snapshot.component("library").unwrap();
    let unassigned = library
        .entries
        .iter()
        .find(|e| e.name == "LEGACY_UNASSIGNED")
        .unwrap();
    assert_eq!(unassigned.original_code, None);
    assert_eq!(unassigned.tool_code, None);
}

#[test]
fn test_reloading_is_idempotent() {
    let table = loaded();
    let before = table.snapshot().unwrap();
    table.load(test_file("ErrorCodes.xml")).unwrap();
    let after = table.snapshot().unwrap();
    assert_eq!(*before, *after);
    assert_eq!(table.tool_code("cli", 6), Ok(Some(1006)));
}

#[test]
fn test_empty_table_reports_not_found() {
    let table = ErrorCodeCrossReference::new();
    table.load_from_str("<ErrorCodes/>").unwrap();
    assert!(table.is_loaded());
    for component in ["library", "cli"] {
        let err = table.tool_code(component, 6).unwrap_err();
        assert_eq!(err.kind(), CliErrorCode::ErrorInfoNotFound);
    }
}

#[test]
fn test_unloaded_table_reports_not_loaded() {
    let table = ErrorCodeCrossReference::new();
    for (component, code) in [("library", 0), ("cli", 6), ("server", 1)] {
        let err = table.tool_code(component, code).unwrap_err();
        assert_eq!(err.kind(), CliErrorCode::ErrorTableNotLoaded);
    }
}

#[test]
fn test_reporter_prefixes_tool_codes() {
    let table = loaded();
    let reporter = Reporter::new(&table, Language::English);

    let core = CoreResult::with_message(LibraryErrorCode(6), "Node 1 already exists.");
    assert_eq!(reporter.format_core(&core), "2006: Node 1 already exists.");

    // Kind 7 (XmlFileNotFound) is not in this table: message stays unprefixed.
    let cli = CliResult::with_message(CliErrorCode::XmlFileNotFound, "project.xml missing");
    assert_eq!(reporter.format_cli(&cli), "project.xml missing");
}

#[test]
fn test_describe_uses_language_with_english_fallback() {
    let table = loaded();
    assert_eq!(
        table.describe("library", 6, Language::German).unwrap().as_deref(),
        Some("Ein Knoten mit dieser ID existiert bereits.")
    );
    assert_eq!(
        table.describe("cli", 6, Language::German).unwrap().as_deref(),
        Some("The project XML file was not found.")
    );
    assert_eq!(table.describe("library", 65535, Language::English), Ok(None));
}

/// The table shipped with the crate must translate every CLI error kind.
#[test]
fn test_shipped_table_covers_every_cli_kind() {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("resources");
    path.push("ErrorCodes.xml");

    let table = ErrorCodeCrossReference::new();
    table.load(&path).expect("Failed to load shipped error-code table");
    let snapshot = table.snapshot().unwrap();
    let cli = snapshot.component("cli").expect("cli component missing");

    for kind in CliErrorCode::ALL {
        let entry = cli
            .find(kind.code())
            .unwrap_or_else(|| panic!("{} missing from shipped table", kind));
        assert_eq!(entry.name, kind.symbol());
        assert!(entry.tool_code.is_some(), "{} has no tool code", kind);
        assert!(entry.description(Language::German).is_some());
    }
}
