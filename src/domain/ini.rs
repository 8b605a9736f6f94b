//! Ordered INI document model and parser.
//!
//! Course configuration and submission metadata are flat INI files:
//! `[section]` headers followed by `key = value` (or `key : value`)
//! lines. Sections and keys keep their file order. Documents are
//! read-only after parsing.

use thiserror::Error;

/// Structurally invalid INI content.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IniParseError {
    /// A section name appeared more than once.
    #[error("line {line}: duplicate section [{name}]")]
    DuplicateSection { line: usize, name: String },

    /// A key/value line appeared before any section header.
    #[error("line {line}: entry before any section header")]
    EntryBeforeSection { line: usize },

    /// A section header is missing its closing bracket or name.
    #[error("line {line}: malformed section header '{content}'")]
    MalformedHeader { line: usize, content: String },

    /// A line is neither a header, a comment, nor a `key = value` pair.
    #[error("line {line}: expected `key = value`, got '{content}'")]
    MalformedLine { line: usize, content: String },
}

/// Lookup failure in a well-formed document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// The requested section does not exist.
    #[error("section [{0}] not found")]
    MissingSection(String),

    /// The section exists but does not contain the requested key.
    #[error("key '{key}' not found in section [{section}]")]
    MissingKey { section: String, key: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn value_of(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

/// A parsed configuration document: ordered sections of ordered
/// key/value string pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IniDocument {
    sections: Vec<Section>,
}

impl IniDocument {
    /// Parse INI text into a document.
    ///
    /// Comment lines start with `;` or `#`. A duplicate section name is
    /// an error; a duplicate key within a section keeps the last value.
    pub fn parse(content: &str) -> Result<Self, IniParseError> {
        let mut document = IniDocument::default();

        for (index, raw) in content.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
                continue;
            }

            if trimmed.starts_with('[') {
                let name = trimmed
                    .strip_suffix(']')
                    .map(|header| header[1..].trim())
                    .filter(|name| !name.is_empty())
                    .ok_or_else(|| IniParseError::MalformedHeader {
                        line,
                        content: trimmed.to_string(),
                    })?;
                if document.has_section(name) {
                    return Err(IniParseError::DuplicateSection { line, name: name.to_string() });
                }
                document.sections.push(Section { name: name.to_string(), entries: Vec::new() });
                continue;
            }

            let (key, value) = split_entry(trimmed).ok_or_else(|| IniParseError::MalformedLine {
                line,
                content: trimmed.to_string(),
            })?;
            let section = document
                .sections
                .last_mut()
                .ok_or(IniParseError::EntryBeforeSection { line })?;
            match section.entries.iter_mut().find(|(k, _)| k == key) {
                Some(entry) => entry.1 = value.to_string(),
                None => section.entries.push((key.to_string(), value.to_string())),
            }
        }

        Ok(document)
    }

    /// Value of `key` in `section`.
    pub fn get(&self, section: &str, key: &str) -> Result<&str, KeyError> {
        let found = self
            .sections
            .iter()
            .find(|s| s.name == section)
            .ok_or_else(|| KeyError::MissingSection(section.to_string()))?;
        found.value_of(key).ok_or_else(|| KeyError::MissingKey {
            section: section.to_string(),
            key: key.to_string(),
        })
    }

    /// Whether a section with this name exists.
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.iter().any(|s| s.name == name)
    }

    /// Section names in file order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    /// Keys of `section` in file order.
    pub fn keys(&self, section: &str) -> Result<impl Iterator<Item = &str>, KeyError> {
        let found = self
            .sections
            .iter()
            .find(|s| s.name == section)
            .ok_or_else(|| KeyError::MissingSection(section.to_string()))?;
        Ok(found.entries.iter().map(|(k, _)| k.as_str()))
    }
}

/// Split `key = value` or `key : value`, whichever delimiter comes first.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let delimiter = line.find(['=', ':'])?;
    let key = line[..delimiter].trim_end();
    if key.is_empty() {
        return None;
    }
    Some((key, line[delimiter + 1..].trim_start()))
}
