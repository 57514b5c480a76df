// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog source parser
//!
//! A single forward scan over physical lines driven by [`ScanState`]. Two
//! buffers hold the source text and translation of the record being read;
//! a record is committed once it has seen both `msgid` and `msgstr` and the
//! next record (or end of input) begins.
//!
//! Tolerated without error:
//! - a `msgid` that never receives a `msgstr` (the record is dropped)
//! - `msgctxt` lines (content ignored)
//! - plural forms (`msgid_plural`, `msgstr[N]`); such records are dropped
//!
//! Anything else that is neither a comment nor blank is `MalformedSource`.

mod quoted;

pub use quoted::parse_quoted;

use crate::catalog::Catalog;
use crate::error::{CompileError, Result};
use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

/// Where the scanner is within the current record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Between records.
    Idle,
    /// Inside a `msgctxt`; continuations are discarded.
    Context,
    /// Accumulating the source text.
    Key,
    /// Accumulating the translation; the record can be committed.
    Value,
    /// Inside a plural record; everything up to the next record is discarded.
    Plural,
}

struct Scanner {
    state: ScanState,
    key: String,
    value: String,
    key_line: usize,
    catalog: Catalog,
}

impl Scanner {
    fn new() -> Self {
        Self {
            state: ScanState::Idle,
            key: String::new(),
            value: String::new(),
            key_line: 0,
            catalog: Catalog::new(),
        }
    }

    fn line(&mut self, number: usize, raw: &str) -> Result<()> {
        let line = raw.trim_start();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        if line.starts_with('"') {
            let text = quoted(number, line)?;
            return self.continuation(number, text);
        }

        let split = line
            .find(|c: char| c.is_whitespace() || c == '"')
            .unwrap_or(line.len());
        let (keyword, rest) = line.split_at(split);
        let rest = rest.trim_start();

        match keyword {
            "msgctxt" => {
                quoted(number, rest)?;
                self.finish_record();
                self.state = ScanState::Context;
            }
            "msgid" => {
                let text = quoted(number, rest)?;
                self.finish_record();
                self.key = text;
                self.key_line = number;
                self.state = ScanState::Key;
            }
            "msgid_plural" => {
                quoted(number, rest)?;
                if self.state != ScanState::Key {
                    return Err(CompileError::malformed(number, "msgid_plural without msgid"));
                }
                debug!(line = self.key_line, "dropping plural record");
                self.state = ScanState::Plural;
            }
            "msgstr" => {
                let text = quoted(number, rest)?;
                match self.state {
                    ScanState::Key => {
                        self.value = text;
                        self.state = ScanState::Value;
                    }
                    ScanState::Plural => {}
                    ScanState::Value => {
                        return Err(CompileError::malformed(number, "duplicate msgstr"));
                    }
                    ScanState::Idle | ScanState::Context => {
                        return Err(CompileError::malformed(number, "msgstr without msgid"));
                    }
                }
            }
            _ if is_indexed_msgstr(keyword) => {
                quoted(number, rest)?;
                match self.state {
                    ScanState::Plural => {}
                    ScanState::Key => {
                        debug!(line = self.key_line, "dropping record with indexed msgstr");
                        self.state = ScanState::Plural;
                    }
                    _ => {
                        return Err(CompileError::malformed(
                            number,
                            format!("{keyword} without msgid_plural"),
                        ));
                    }
                }
            }
            _ => {
                return Err(CompileError::malformed(
                    number,
                    format!("unrecognized keyword `{keyword}`"),
                ));
            }
        }
        Ok(())
    }

    fn continuation(&mut self, number: usize, text: String) -> Result<()> {
        match self.state {
            ScanState::Key => self.key.push_str(&text),
            ScanState::Value => self.value.push_str(&text),
            ScanState::Context | ScanState::Plural => {}
            ScanState::Idle => {
                return Err(CompileError::malformed(
                    number,
                    "continuation line outside of a record",
                ));
            }
        }
        Ok(())
    }

    /// Commit the pending record if it is complete, otherwise drop it.
    fn finish_record(&mut self) {
        match self.state {
            ScanState::Value => {
                let key = std::mem::take(&mut self.key);
                let value = std::mem::take(&mut self.value);
                if self.catalog.insert(key, value).is_some() {
                    debug!(line = self.key_line, "duplicate msgid, later translation wins");
                }
            }
            ScanState::Key => {
                debug!(line = self.key_line, "dropping msgid without msgstr");
            }
            ScanState::Idle | ScanState::Context | ScanState::Plural => {}
        }
        self.key.clear();
        self.value.clear();
        self.state = ScanState::Idle;
    }

    fn finish(mut self) -> Catalog {
        self.finish_record();
        self.catalog
    }
}

fn quoted(number: usize, input: &str) -> Result<String> {
    parse_quoted(input).map_err(|reason| CompileError::malformed(number, reason))
}

fn is_indexed_msgstr(keyword: &str) -> bool {
    keyword
        .strip_prefix("msgstr[")
        .and_then(|rest| rest.strip_suffix(']'))
        .is_some_and(|index| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse catalog source text.
pub fn parse(text: &str) -> Result<Catalog> {
    let mut scanner = Scanner::new();
    for (index, raw) in text.split('\n').enumerate() {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        scanner.line(index + 1, raw)?;
    }
    Ok(scanner.finish())
}

/// Decode raw source bytes and parse them.
///
/// A byte-order mark selects the encoding (UTF-8 or UTF-16); without one the
/// bytes must be UTF-8. Invalid sequences are rejected, not replaced.
pub fn parse_bytes(bytes: &[u8]) -> Result<Catalog> {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
    let text = encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .ok_or_else(|| {
            CompileError::malformed(0, format!("source is not valid {}", encoding.name()))
        })?;
    parse(&text)
}
