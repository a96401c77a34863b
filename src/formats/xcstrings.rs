//! Xcode String Catalogs (`.xcstrings`): a JSON dialect with all locales
//! embedded in one document and optional plural variations per locale.
//!
//! Plural handling is lossy by design: the `one` variation maps to the
//! entry's translation, `other` to its plural hint, and a `zero` variation
//! is dropped because the canonical model has no slot for it.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    locale::Locale,
    types::{ParseOptions, SerializeOptions, SerializedOutput, TranslationDataset},
};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct XcstringsDocument {
    version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_language: Option<String>,
    strings: BTreeMap<String, XcstringsEntry>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct XcstringsEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extraction_state: Option<String>,
    #[serde(default)]
    localizations: BTreeMap<String, Localization>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
enum Localization {
    Atomic(AtomicLocalization),
    Plural(PluralLocalization),
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct AtomicLocalization {
    string_unit: StringUnit,
}

#[derive(Debug, Deserialize, Serialize)]
struct StringUnit {
    state: String,
    value: String,
}

#[derive(Debug, Deserialize, Serialize)]
struct PluralLocalization {
    variations: Variations,
}

#[derive(Debug, Deserialize, Serialize)]
struct Variations {
    plural: PluralVariations,
}

#[derive(Debug, Deserialize, Serialize)]
struct PluralVariations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    zero: Option<AtomicLocalization>,
    one: AtomicLocalization,
    other: AtomicLocalization,
}

impl AtomicLocalization {
    fn translated(value: String) -> Self {
        AtomicLocalization {
            string_unit: StringUnit {
                state: "translated".to_string(),
                value,
            },
        }
    }
}

/// Parses an `.xcstrings` catalog. Localization keys may use ISO 639-1,
/// POSIX or BCP 47 spellings; a key that resolves to no registered locale
/// is a hard failure naming the offending entry.
pub fn parse(content: &str, _options: &ParseOptions) -> Result<TranslationDataset, Error> {
    let document: XcstringsDocument = serde_json::from_str(content)
        .map_err(|e| Error::parsing_with("invalid xcstrings structure", e))?;

    let mut dataset = TranslationDataset::new();
    for (key, catalog_entry) in document.strings {
        let entry = dataset.entry(key.clone());
        entry.description = catalog_entry.comment;
        for (code, localization) in catalog_entry.localizations {
            let locale = Locale::resolve(&code).ok_or_else(|| {
                Error::parsing(format!(
                    "invalid locale code `{code}` in xcstrings entry `{key}`"
                ))
            })?;
            match localization {
                Localization::Atomic(atomic) => {
                    entry.translations.insert(locale, atomic.string_unit.value);
                }
                Localization::Plural(plural) => {
                    let variations = plural.variations.plural;
                    entry
                        .translations
                        .insert(locale, variations.one.string_unit.value);
                    entry
                        .plurals
                        .insert(locale, variations.other.string_unit.value);
                }
            }
        }
    }
    Ok(dataset)
}

/// Serializes one catalog blob with every locale that is both present in
/// the dataset and requested in `options.locales`. `sourceLanguage` is the
/// reference locale's bare language code, matching what Xcode writes.
pub fn serialize(
    dataset: &TranslationDataset,
    options: &SerializeOptions,
) -> Result<SerializedOutput, Error> {
    let restricted = dataset.restricted_to(&options.locales);

    let mut strings = BTreeMap::new();
    for (key, entry) in restricted.iter() {
        let locales: BTreeSet<Locale> = entry
            .translations
            .keys()
            .chain(entry.plurals.keys())
            .copied()
            .collect();

        let mut localizations = BTreeMap::new();
        for locale in locales {
            let text = entry
                .translations
                .get(&locale)
                .cloned()
                .unwrap_or_default();
            let localization = match entry.plurals.get(&locale) {
                Some(plural) => Localization::Plural(PluralLocalization {
                    variations: Variations {
                        plural: PluralVariations {
                            zero: None,
                            one: AtomicLocalization::translated(text),
                            other: AtomicLocalization::translated(plural.clone()),
                        },
                    },
                }),
                None => Localization::Atomic(AtomicLocalization::translated(text)),
            };
            localizations.insert(locale.as_posix().to_string(), localization);
        }

        strings.insert(
            key.clone(),
            XcstringsEntry {
                comment: entry.description.clone(),
                extraction_state: Some("manual".to_string()),
                localizations,
            },
        );
    }

    let document = XcstringsDocument {
        version: "1.0".to_string(),
        source_language: Some(options.reference_locale.language().to_string()),
        strings,
    };
    let blob = serde_json::to_string_pretty(&document)
        .map_err(|e| Error::serialization_with("failed to serialize xcstrings", e))?;
    Ok(SerializedOutput::Blob(blob))
}
