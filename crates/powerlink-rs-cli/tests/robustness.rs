//! Integration tests focused on error handling while loading the error-code table.
//!
//! Each test corrupts a minimal valid table and checks that loading fails
//! with the right error and never exposes a partially loaded table.

use powerlink_rs_cli::{CliErrorCode, ErrorCodeCrossReference, TableError, parse_error_table};

/// A minimal valid table used as a base for creating corrupted test cases.
const MINIMAL_VALID_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ErrorCodes>
  <Component name="library" version="2.1.0">
    <ErrorCode value="NODE_EXISTS" originalCode="6" toolCode="2006">
      <Description lang="en" value="A node with this ID already exists."/>
    </ErrorCode>
  </Component>
  <Component name="cli" version="1.0.0">
    <ErrorCode value="XML_FILE_NOT_FOUND" originalCode="7" toolCode="1007"/>
  </Component>
</ErrorCodes>"#;

#[test]
fn test_minimal_table_is_valid() {
    let table = parse_error_table(MINIMAL_VALID_XML).expect("minimal table should parse");
    assert_eq!(table.components().len(), 2);
}

/// Verifies that malformed XML syntax is reported as a parsing error.
#[test]
fn test_malformed_xml_syntax() {
    let xml = r#"<ErrorCodes><Component name="cli"> ... missing closing tags"#;
    let result = parse_error_table(xml);
    assert!(
        matches!(result, Err(TableError::XmlParsing(_))),
        "Expected XmlParsing error, got {:?}",
        result
    );
}

/// Verifies that a non-numeric original code is rejected.
#[test]
fn test_non_decimal_original_code() {
    let xml = MINIMAL_VALID_XML.replace(r#"originalCode="6""#, r#"originalCode="six""#);
    let result = parse_error_table(&xml);
    assert!(
        matches!(
            result,
            Err(TableError::InvalidNumber {
                attribute: "originalCode",
                ..
            })
        ),
        "Expected InvalidNumber error, got {:?}",
        result
    );
}

/// Verifies that a hex tool code is rejected instead of being read as decimal.
#[test]
fn test_hex_tool_code() {
    let xml = MINIMAL_VALID_XML.replace(r#"toolCode="1007""#, r#"toolCode="0x3EF""#);
    assert!(matches!(
        parse_error_table(&xml),
        Err(TableError::InvalidNumber {
            attribute: "toolCode",
            ..
        })
    ));
}

/// Verifies that a document with another root element is not loaded as an
/// empty table.
#[test]
fn test_wrong_root_element() {
    let xml = r#"<openCONFIGURATORProject Version="1.0"><Generator/></openCONFIGURATORProject>"#;
    let table = ErrorCodeCrossReference::new();
    let result = table.load_from_str(xml);
    assert!(
        matches!(
            result,
            Err(TableError::MissingElement {
                element: "ErrorCodes"
            })
        ),
        "Expected MissingElement error, got {:?}",
        result
    );
    assert!(!table.is_loaded());
}

/// Verifies that a negative code does not wrap around.
#[test]
fn test_negative_tool_code() {
    let xml = MINIMAL_VALID_XML.replace(r#"toolCode="1007""#, r#"toolCode="-1""#);
    assert!(matches!(
        parse_error_table(&xml),
        Err(TableError::InvalidNumber {
            attribute: "toolCode",
            ..
        })
    ));
}

/// Verifies that duplicate original codes within one component are rejected.
#[test]
fn test_duplicate_original_code() {
    let xml = MINIMAL_VALID_XML.replace(
        r#"<ErrorCode value="XML_FILE_NOT_FOUND" originalCode="7" toolCode="1007"/>"#,
        r#"<ErrorCode value="XML_FILE_NOT_FOUND" originalCode="7" toolCode="1007"/>
    <ErrorCode value="FILE_NOT_EXISTS" originalCode="7" toolCode="1008"/>"#,
    );
    let result = parse_error_table(&xml);
    assert!(
        matches!(
            &result,
            Err(TableError::DuplicateCode { component, code: 7 }) if component == "cli"
        ),
        "Expected DuplicateCode error, got {:?}",
        result
    );
}

/// The same original code in different components is fine.
#[test]
fn test_same_code_in_different_components() {
    let xml = MINIMAL_VALID_XML.replace(r#"originalCode="7""#, r#"originalCode="6""#);
    let table = parse_error_table(&xml).expect("codes are scoped per component");
    assert_eq!(table.component("library").unwrap().find(6).unwrap().tool_code, Some(2006));
    assert_eq!(table.component("cli").unwrap().find(6).unwrap().tool_code, Some(1007));
}

/// Verifies that a component without a name is rejected.
#[test]
fn test_missing_component_name() {
    let xml = MINIMAL_VALID_XML.replace(r#"name="cli""#, r#"name="""#);
    assert!(matches!(
        parse_error_table(&xml),
        Err(TableError::MissingAttribute {
            element: "Component",
            attribute: "name"
        })
    ));
}

/// Verifies that a component defined twice is rejected.
#[test]
fn test_duplicate_component() {
    let xml = MINIMAL_VALID_XML.replace(r#"name="cli""#, r#"name="library""#);
    let result = parse_error_table(&xml);
    assert!(
        matches!(&result, Err(TableError::DuplicateComponent { name }) if name == "library"),
        "Expected DuplicateComponent error, got {:?}",
        result
    );
}

/// A rejected reload keeps the previously loaded table queryable.
#[test]
fn test_rejected_reload_keeps_table() {
    let table = ErrorCodeCrossReference::new();
    table.load_from_str(MINIMAL_VALID_XML).unwrap();

    let corrupted = MINIMAL_VALID_XML.replace(r#"toolCode="1007""#, r#"toolCode="x""#);
    let err = table.load_from_str(&corrupted).unwrap_err();
    assert_eq!(err.kind(), CliErrorCode::SchemaInvalid);

    assert_eq!(table.tool_code("cli", 7), Ok(Some(1007)));
}
