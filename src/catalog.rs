// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-memory translation catalog.
//!
//! Built record by record while parsing. The empty source string holds the
//! header (`Project-Id-Version`, `Content-Type`, ...) and is kept here so
//! callers can inspect it, but it never reaches the binary writer.

use crate::types::{CatalogStats, CompileOptions, TranslationEntry};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. A later record with the same source text replaces
    /// the earlier one; the replaced translation is returned.
    pub fn insert(&mut self, source_text: String, translated_text: String) -> Option<String> {
        self.entries.insert(source_text, translated_text)
    }

    pub fn get(&self, source_text: &str) -> Option<&str> {
        self.entries.get(source_text).map(String::as_str)
    }

    /// Number of records, header included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw header text, if the catalog has a header record.
    pub fn header(&self) -> Option<&str> {
        self.get("")
    }

    /// Header split into `Name: value` fields, in declaration order.
    /// Lines without a colon are ignored.
    pub fn header_fields(&self) -> Vec<(String, String)> {
        let Some(header) = self.header() else {
            return Vec::new();
        };
        header
            .lines()
            .filter_map(|line| {
                let (name, value) = line.split_once(':')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some((name.to_string(), value.trim().to_string()))
            })
            .collect()
    }

    /// Charset declared in the header's `Content-Type` field.
    pub fn charset(&self) -> Option<String> {
        self.header_fields()
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("Content-Type"))
            .and_then(|(_, value)| {
                value.split(';').find_map(|param| {
                    let (key, charset) = param.trim().split_once('=')?;
                    key.trim()
                        .eq_ignore_ascii_case("charset")
                        .then(|| charset.trim().to_string())
                })
            })
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            has_header: self.header().is_some(),
            ..CatalogStats::default()
        };
        for (source, translated) in self.records() {
            stats.total += 1;
            if translated.is_empty() {
                stats.untranslated += 1;
            } else if translated == source {
                stats.identical += 1;
            } else {
                stats.translated += 1;
            }
        }
        stats
    }

    /// Records worth writing: header removed, empty translations removed,
    /// and translations equal to their source removed unless
    /// `options.keep_identical` is set. Order is unspecified.
    pub fn translations(&self, options: &CompileOptions) -> Vec<TranslationEntry> {
        self.records()
            .filter(|(source, translated)| {
                !translated.is_empty() && (options.keep_identical || source != translated)
            })
            .map(|(source, translated)| TranslationEntry::new(source, translated))
            .collect()
    }

    fn records(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|(source, _)| !source.is_empty())
            .map(|(source, translated)| (source.as_str(), translated.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(
            String::new(),
            "Project-Id-Version: demo 1.0\nContent-Type: text/plain; charset=UTF-8\n".to_string(),
        );
        catalog.insert("Hello".to_string(), "Ciao".to_string());
        catalog.insert("Settings".to_string(), String::new());
        catalog.insert("YouTube".to_string(), "YouTube".to_string());
        catalog
    }

    #[test]
    fn header_fields_are_split_on_first_colon() {
        let fields = sample().header_fields();
        assert_eq!(
            fields,
            vec![
                ("Project-Id-Version".to_string(), "demo 1.0".to_string()),
                (
                    "Content-Type".to_string(),
                    "text/plain; charset=UTF-8".to_string()
                ),
            ]
        );
    }

    #[test]
    fn charset_comes_from_content_type() {
        assert_eq!(sample().charset().as_deref(), Some("UTF-8"));
        assert_eq!(Catalog::new().charset(), None);
    }

    #[test]
    fn stats_exclude_the_header() {
        let stats = sample().stats();
        assert_eq!(
            stats,
            CatalogStats {
                total: 3,
                translated: 1,
                untranslated: 1,
                identical: 1,
                has_header: true,
            }
        );
    }

    #[test]
    fn identical_translations_follow_the_policy() {
        let catalog = sample();
        let dropped = catalog.translations(&CompileOptions::default());
        assert_eq!(dropped, vec![TranslationEntry::new("Hello", "Ciao")]);

        let options = CompileOptions {
            keep_identical: true,
            ..CompileOptions::default()
        };
        let mut kept = catalog.translations(&options);
        kept.sort_by(|a, b| a.source_text.cmp(&b.source_text));
        assert_eq!(
            kept,
            vec![
                TranslationEntry::new("Hello", "Ciao"),
                TranslationEntry::new("YouTube", "YouTube"),
            ]
        );
    }

    #[test]
    fn insert_overwrites_previous_translation() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.insert("a".into(), "x".into()), None);
        assert_eq!(catalog.insert("a".into(), "y".into()), Some("x".to_string()));
        assert_eq!(catalog.get("a"), Some("y"));
        assert_eq!(catalog.len(), 1);
    }
}
