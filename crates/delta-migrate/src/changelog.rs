//! Changelog elements.
//!
//! Changes are persisted as XML elements inside a changelog document, e.g.
//! `<addAutoIncrement tableName="T" columnName="C"/>`. [`Element`] is the
//! in-memory form a change serializes to; [`parse_changes`] reads changes
//! back out of a document.

use std::io::Write;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use tracing::{debug, trace};

use crate::error::{MigrateError, Result};
use crate::operations::AddAutoIncrement;

/// A changelog element: a name and ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
}

impl Element {
    /// Creates an element without attributes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Appends an attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Returns the element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Returns the value of attribute `key`, if present.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Writes the element as an empty XML tag into `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }
        writer.write_event(Event::Empty(start))?;
        Ok(())
    }

    /// Renders the element as standalone XML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the element cannot be encoded.
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        self.write_to(&mut writer)?;
        String::from_utf8(writer.into_inner())
            .map_err(|e| MigrateError::InvalidInput(format!("Element is not valid UTF-8: {e}")))
    }

    /// Builds an element from a parsed start tag, dropping any namespace prefix.
    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut element = Self::new(name);
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            element.attributes.push((key, value));
        }
        Ok(element)
    }
}

impl TryFrom<&Element> for AddAutoIncrement {
    type Error = MigrateError;

    fn try_from(element: &Element) -> Result<Self> {
        if element.name() != Self::CHANGE_NAME {
            return Err(MigrateError::InvalidInput(format!(
                "Expected <{}> element, found <{}>",
                Self::CHANGE_NAME,
                element.name()
            )));
        }

        let mut builder = Self::builder();
        if let Some(table_name) = element.attribute("tableName") {
            builder = builder.table_name(table_name);
        }
        if let Some(column_name) = element.attribute("columnName") {
            builder = builder.column_name(column_name);
        }
        if let Some(data_type) = element.attribute("columnDataType") {
            builder = builder.column_data_type(data_type);
        }
        builder.build()
    }
}

/// Reads every `addAutoIncrement` change from a changelog document.
///
/// Elements are found at any depth, so changes wrapped in `<changeSet>` or
/// other containers are picked up in document order.
///
/// # Errors
///
/// Returns an error if the XML is malformed or a change is missing its
/// table or column name.
pub fn parse_changes(xml: &str) -> Result<Vec<AddAutoIncrement>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut changes = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(start) | Event::Empty(start)
                if start.local_name().as_ref() == AddAutoIncrement::CHANGE_NAME.as_bytes() =>
            {
                let element = Element::from_start(&start)?;
                changes.push(AddAutoIncrement::try_from(&element)?);
            }
            Event::Start(start) | Event::Empty(start) => {
                trace!(
                    element = %String::from_utf8_lossy(start.name().as_ref()),
                    "Skipping changelog element"
                );
            }
            Event::Eof => break,
            _ => {}
        }
    }

    debug!(count = changes.len(), "Parsed addAutoIncrement changes");
    Ok(changes)
}

/// Reads a changelog file and parses its changes.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_changes(path: &Path) -> Result<Vec<AddAutoIncrement>> {
    debug!(path = %path.display(), "Loading changelog");
    let xml = std::fs::read_to_string(path)?;
    parse_changes(&xml)
}
