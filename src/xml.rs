//! XML (de)serialization through serde.
//!
//! Thin wrappers over quick-xml's serde support; no schema handling.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ExtensionError, ExtensionResult};
use crate::fs;

/// Serializes the value to an XML string.
pub fn to_xml<T: Serialize>(value: &T) -> ExtensionResult<String> {
    quick_xml::se::to_string(value).map_err(|e| ExtensionError::Xml(e.to_string()))
}

/// Deserializes a value from an XML string.
pub fn from_xml<T: DeserializeOwned>(xml: &str) -> ExtensionResult<T> {
    quick_xml::de::from_str(xml).map_err(|e| ExtensionError::Xml(e.to_string()))
}

/// Serializes the value and writes it to the file, creating parent
/// directories as needed.
pub fn write_xml_file<T: Serialize>(path: impl AsRef<Path>, value: &T) -> ExtensionResult<()> {
    let xml = to_xml(value)?;
    fs::write_bytes(path, xml.as_bytes())
}

/// Reads the file and deserializes its XML content.
pub fn read_xml_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> ExtensionResult<T> {
    let xml = fs::read_string(path)?;
    from_xml(&xml)
}
