//! Core, format-agnostic types for langbridge.
//! Parsers decode into these; serializers consume them read-only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// One logical translatable unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranslationEntry {
    /// Locale → translated text. Sparse: only locales actually known for
    /// this entry are present.
    pub translations: BTreeMap<Locale, String>,

    /// Locale → plural-form hint. Format-specific meaning, e.g. PO's
    /// `msgid_plural`. Empty map means no plural information.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    #[serde(default)]
    pub plurals: BTreeMap<Locale, String>,

    /// Ordered provenance/reference markers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub tags: Vec<String>,

    /// Free-text comment for translators.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub description: Option<String>,
}

impl TranslationEntry {
    /// Entry holding a single translation for one locale.
    pub fn singular(locale: Locale, text: impl Into<String>) -> Self {
        let mut entry = TranslationEntry::default();
        entry.translations.insert(locale, text.into());
        entry
    }
}

/// The canonical dataset: stable string key → entry. Key order is not
/// semantically meaningful; a `BTreeMap` keeps serialization deterministic.
///
/// Every parse call produces a fresh dataset; aggregation mutates it only
/// through [`TranslationDataset::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TranslationDataset(BTreeMap<String, TranslationEntry>);

impl TranslationDataset {
    pub fn new() -> Self {
        TranslationDataset(BTreeMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: TranslationEntry) {
        self.0.insert(key.into(), entry);
    }

    /// Returns the entry for `key`, creating an empty one if absent.
    pub fn entry(&mut self, key: impl Into<String>) -> &mut TranslationEntry {
        self.0.entry(key.into()).or_default()
    }

    pub fn get(&self, key: &str) -> Option<&TranslationEntry> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TranslationEntry)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Deep-merges another dataset into this one.
    ///
    /// Keys are unioned; for keys present on both sides each locale's
    /// `translations`/`plurals` entries are added without overwriting locales
    /// already merged in, so merging per-locale parses is associative and
    /// commutative with respect to locale identity. `tags` and `description`
    /// keep the first non-empty value seen.
    pub fn merge(&mut self, other: TranslationDataset) {
        for (key, incoming) in other.0 {
            let entry = self.0.entry(key).or_default();
            for (locale, text) in incoming.translations {
                entry.translations.entry(locale).or_insert(text);
            }
            for (locale, hint) in incoming.plurals {
                entry.plurals.entry(locale).or_insert(hint);
            }
            if entry.tags.is_empty() {
                entry.tags = incoming.tags;
            }
            if entry.description.is_none() {
                entry.description = incoming.description;
            }
        }
    }

    /// Copy of this dataset with `translations`/`plurals` limited to the
    /// given locales. Keys are kept even when no translation survives.
    pub fn restricted_to(&self, locales: &[Locale]) -> TranslationDataset {
        let entries = self
            .0
            .iter()
            .map(|(key, entry)| {
                let restricted = TranslationEntry {
                    translations: entry
                        .translations
                        .iter()
                        .filter(|(locale, _)| locales.contains(locale))
                        .map(|(locale, text)| (*locale, text.clone()))
                        .collect(),
                    plurals: entry
                        .plurals
                        .iter()
                        .filter(|(locale, _)| locales.contains(locale))
                        .map(|(locale, hint)| (*locale, hint.clone()))
                        .collect(),
                    tags: entry.tags.clone(),
                    description: entry.description.clone(),
                };
                (key.clone(), restricted)
            })
            .collect();
        TranslationDataset(entries)
    }
}

impl FromIterator<(String, TranslationEntry)> for TranslationDataset {
    fn from_iter<T: IntoIterator<Item = (String, TranslationEntry)>>(iter: T) -> Self {
        TranslationDataset(iter.into_iter().collect())
    }
}

impl IntoIterator for TranslationDataset {
    type Item = (String, TranslationEntry);
    type IntoIter = std::collections::btree_map::IntoIter<String, TranslationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Options for a single parse invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// The locale treated as source-of-truth text for formats that need a
    /// base language (Android resources, Qt Linguist).
    pub reference_locale: Locale,

    /// The locale a single-locale-per-file format's content represents
    /// (PO, Apple `.strings`; XLIFF fallback when `trgLang` is absent).
    pub target_locale: Option<Locale>,
}

impl ParseOptions {
    pub fn new(reference_locale: Locale) -> Self {
        ParseOptions {
            reference_locale,
            target_locale: None,
        }
    }

    pub fn with_target(mut self, target_locale: Locale) -> Self {
        self.target_locale = Some(target_locale);
        self
    }
}

/// Options for a single serialize invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    pub reference_locale: Locale,

    /// The locales to emit. Bounds which locales are embedded in blob
    /// formats and which fragments fragmenting formats produce.
    pub locales: Vec<Locale>,
}

impl SerializeOptions {
    pub fn new(reference_locale: Locale, locales: Vec<Locale>) -> Self {
        SerializeOptions {
            reference_locale,
            locales,
        }
    }

    /// The locales a fragmenting serializer must emit fragments for: every
    /// non-reference locale in `locales`, or the reference locale alone when
    /// no other locale is requested (one fragment, never zero).
    pub fn fragment_locales(&self) -> Vec<Locale> {
        let non_reference: Vec<Locale> = self
            .locales
            .iter()
            .copied()
            .filter(|locale| *locale != self.reference_locale)
            .collect();
        if non_reference.is_empty() {
            vec![self.reference_locale]
        } else {
            non_reference
        }
    }
}

/// One per-locale unit of serialized output for fragmenting formats.
/// Packaging fragments into an archive is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Fragment name, in the format's native locale casing (POSIX for
    /// PO/Apple/Android, BCP 47 for Linguist/XLIFF).
    pub identifier: Option<String>,
    pub content: String,
}

/// Result of a serialize invocation: a single blob for multi-locale-embedding
/// formats, one fragment per locale for fragmenting formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializedOutput {
    Blob(String),
    Fragments(Vec<Fragment>),
}

impl SerializedOutput {
    pub fn as_blob(&self) -> Option<&str> {
        match self {
            SerializedOutput::Blob(content) => Some(content),
            SerializedOutput::Fragments(_) => None,
        }
    }

    pub fn as_fragments(&self) -> Option<&[Fragment]> {
        match self {
            SerializedOutput::Blob(_) => None,
            SerializedOutput::Fragments(fragments) => Some(fragments),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(code: &str) -> Locale {
        Locale::from_posix(code).unwrap()
    }

    #[test]
    fn test_merge_unions_locales_without_overwriting() {
        let mut left = TranslationDataset::new();
        left.insert("greeting", TranslationEntry::singular(loc("en_US"), "hello"));

        let mut right = TranslationDataset::new();
        right.insert("greeting", TranslationEntry::singular(loc("nl_NL"), "wereld"));

        left.merge(right);
        let entry = left.get("greeting").unwrap();
        assert_eq!(entry.translations[&loc("en_US")], "hello");
        assert_eq!(entry.translations[&loc("nl_NL")], "wereld");
    }

    #[test]
    fn test_merge_is_commutative_over_locales() {
        let mut a = TranslationDataset::new();
        a.insert("greeting", TranslationEntry::singular(loc("en_US"), "hello"));
        let mut b = TranslationDataset::new();
        b.insert("greeting", TranslationEntry::singular(loc("nl_NL"), "wereld"));

        let mut ab = a.clone();
        ab.merge(b.clone());
        let mut ba = b;
        ba.merge(a);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_merge_keeps_existing_locale_values() {
        let mut left = TranslationDataset::new();
        left.insert("greeting", TranslationEntry::singular(loc("en_US"), "first"));
        let mut right = TranslationDataset::new();
        right.insert("greeting", TranslationEntry::singular(loc("en_US"), "second"));

        left.merge(right);
        assert_eq!(
            left.get("greeting").unwrap().translations[&loc("en_US")],
            "first"
        );
    }

    #[test]
    fn test_merge_unions_keys() {
        let mut left = TranslationDataset::new();
        left.insert("a", TranslationEntry::singular(loc("en_US"), "a"));
        let mut right = TranslationDataset::new();
        right.insert("b", TranslationEntry::singular(loc("en_US"), "b"));

        left.merge(right);
        assert_eq!(left.len(), 2);
    }

    #[test]
    fn test_restricted_to_filters_translations_and_plurals() {
        let mut entry = TranslationEntry::singular(loc("en_US"), "hello");
        entry.translations.insert(loc("nl_NL"), "wereld".into());
        entry.plurals.insert(loc("en_US"), "hellos".into());
        entry.plurals.insert(loc("nl_NL"), "werelden".into());
        let mut dataset = TranslationDataset::new();
        dataset.insert("greeting", entry);

        let restricted = dataset.restricted_to(&[loc("nl_NL")]);
        let entry = restricted.get("greeting").unwrap();
        assert_eq!(entry.translations.len(), 1);
        assert_eq!(entry.translations[&loc("nl_NL")], "wereld");
        assert_eq!(entry.plurals.len(), 1);
        assert_eq!(entry.plurals[&loc("nl_NL")], "werelden");
    }

    #[test]
    fn test_fragment_locales_excludes_reference() {
        let options = SerializeOptions::new(
            loc("en_US"),
            vec![loc("en_US"), loc("nl_NL"), loc("fr_FR")],
        );
        assert_eq!(options.fragment_locales(), vec![loc("nl_NL"), loc("fr_FR")]);
    }

    #[test]
    fn test_fragment_locales_reference_only_yields_one() {
        let options = SerializeOptions::new(loc("en_US"), vec![loc("en_US")]);
        assert_eq!(options.fragment_locales(), vec![loc("en_US")]);

        let empty = SerializeOptions::new(loc("en_US"), vec![]);
        assert_eq!(empty.fragment_locales(), vec![loc("en_US")]);
    }

    #[test]
    fn test_entry_with_empty_translations_is_structurally_valid() {
        let mut dataset = TranslationDataset::new();
        dataset.insert("vacuous", TranslationEntry::default());
        assert!(dataset.get("vacuous").unwrap().translations.is_empty());

        let restricted = dataset.restricted_to(&[loc("en_US")]);
        assert_eq!(restricted.len(), 1);
    }
}
