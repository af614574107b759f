//! Internal `serde` data structures that map directly to the error-code table XML.
//!
//! These structs mirror the raw document and keep every attribute as a
//! string; numeric conversion and validation happen in [`crate::table`].

#![allow(clippy::pedantic)] // XML naming conventions differ from Rust

use serde::Deserialize;

/// The root `<ErrorCodes>` element.
#[derive(Debug, Deserialize, Default)]
#[serde(rename = "ErrorCodes")]
pub struct ErrorCodesDocument {
    #[serde(rename = "Component", default)]
    pub component: Vec<Component>,
}

/// `<Component name="library" version="...">`
#[derive(Debug, Deserialize, Default)]
pub struct Component {
    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(rename = "@version", default)]
    pub version: String,

    #[serde(rename = "ErrorCode", default)]
    pub error_code: Vec<ErrorCode>,
}

/// `<ErrorCode value="SYMBOL" originalCode="6" toolCode="1006">`
#[derive(Debug, Deserialize, Default)]
pub struct ErrorCode {
    /// Symbolic name of the code.
    #[serde(rename = "@value", default)]
    pub value: String,

    /// Decimal code as emitted by the component. May be blank.
    #[serde(rename = "@originalCode", default)]
    pub original_code: String,

    /// Decimal code shown to the user. May be blank.
    #[serde(rename = "@toolCode", default)]
    pub tool_code: String,

    #[serde(rename = "Description", default)]
    pub description: Vec<Description>,
}

/// `<Description lang="en" value="..."/>`
#[derive(Debug, Deserialize, Default)]
pub struct Description {
    #[serde(rename = "@lang", default)]
    pub lang: String,

    #[serde(rename = "@value", default)]
    pub value: String,
}
