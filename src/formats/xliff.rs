//! XLIFF 2.1 (`.xliff`/`.xlf`), one file per locale.
//!
//! One `<file>` per document, one `<unit>` per key, one `<segment>` with
//! `<source>`/`<target>` text. Language attributes on the `<xliff>` root
//! accept ISO 639-1, POSIX and BCP 47 spellings on input and are written
//! as BCP 47, which survives a round trip where a bare language code
//! would not.

use quick_xml::se::Serializer;
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    locale::Locale,
    types::{Fragment, ParseOptions, SerializeOptions, SerializedOutput, TranslationDataset},
};

const XLIFF_NAMESPACE: &str = "urn:oasis:names:tc:xliff:document:2.1";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename = "xliff")]
struct XliffDocument {
    #[serde(rename = "@version")]
    version: String,
    #[serde(rename = "@xmlns")]
    xmlns: String,
    #[serde(rename = "@srcLang")]
    src_lang: String,
    #[serde(rename = "@trgLang", default, skip_serializing_if = "Option::is_none")]
    trg_lang: Option<String>,
    file: XliffFile,
}

#[derive(Debug, Deserialize, Serialize)]
struct XliffFile {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, rename = "unit")]
    units: Vec<XliffUnit>,
}

#[derive(Debug, Deserialize, Serialize)]
struct XliffUnit {
    #[serde(rename = "@id")]
    id: String,
    segment: XliffSegment,
}

#[derive(Debug, Deserialize, Serialize)]
struct XliffSegment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<String>,
}

/// Parses one XLIFF 2.1 document. `srcLang` is mandatory and must resolve
/// to a registered locale; a `trgLang` that is present but unresolvable is
/// a hard failure, while an absent `trgLang` falls back to
/// `options.target_locale` (and to source-only content when that is unset
/// too).
pub fn parse(content: &str, options: &ParseOptions) -> Result<TranslationDataset, Error> {
    let document: XliffDocument = quick_xml::de::from_str(content)
        .map_err(|e| Error::parsing_with("invalid XLIFF 2.1 structure", e))?;

    let source_locale = Locale::resolve(&document.src_lang).ok_or_else(|| {
        Error::parsing(format!(
            "XLIFF srcLang `{}` is missing or not a registered locale",
            document.src_lang
        ))
    })?;
    let target_locale = match document.trg_lang.as_deref() {
        Some(code) => Some(Locale::resolve(code).ok_or_else(|| {
            Error::parsing(format!("XLIFF trgLang `{code}` is not a registered locale"))
        })?),
        None => options.target_locale,
    };

    let mut dataset = TranslationDataset::new();
    for unit in document.file.units {
        let entry = dataset.entry(unit.id);
        entry
            .translations
            .insert(source_locale, unit.segment.source.unwrap_or_default());
        if let Some(target_locale) = target_locale {
            entry
                .translations
                .entry(target_locale)
                .or_insert_with(|| unit.segment.target.unwrap_or_default());
        }
    }
    Ok(dataset)
}

/// Serializes one fragment per locale from [`SerializeOptions::fragment_locales`].
/// Each fragment carries the reference text as `<source>` and the fragment
/// locale's text as `<target>`; the reference-only case omits `trgLang` and
/// all `<target>` elements.
pub fn serialize(
    dataset: &TranslationDataset,
    options: &SerializeOptions,
) -> Result<SerializedOutput, Error> {
    options
        .fragment_locales()
        .into_iter()
        .map(|locale| build_fragment(dataset, options.reference_locale, locale))
        .collect::<Result<Vec<_>, _>>()
        .map(SerializedOutput::Fragments)
}

fn build_fragment(
    dataset: &TranslationDataset,
    reference: Locale,
    locale: Locale,
) -> Result<Fragment, Error> {
    let source_only = locale == reference;
    let units = dataset
        .iter()
        .map(|(key, entry)| XliffUnit {
            id: key.clone(),
            segment: XliffSegment {
                source: Some(
                    entry
                        .translations
                        .get(&reference)
                        .cloned()
                        .unwrap_or_default(),
                ),
                target: if source_only {
                    None
                } else {
                    Some(
                        entry
                            .translations
                            .get(&locale)
                            .cloned()
                            .unwrap_or_default(),
                    )
                },
            },
        })
        .collect();

    let document = XliffDocument {
        version: "2.1".to_string(),
        xmlns: XLIFF_NAMESPACE.to_string(),
        src_lang: reference.to_bcp47(),
        trg_lang: if source_only {
            None
        } else {
            Some(locale.to_bcp47())
        },
        file: XliffFile {
            id: Some("f1".to_string()),
            units,
        },
    };

    Ok(Fragment {
        identifier: Some(locale.to_bcp47()),
        content: to_xml(&document)?,
    })
}

fn to_xml(document: &XliffDocument) -> Result<String, Error> {
    let mut body = String::new();
    let mut serializer = Serializer::new(&mut body);
    serializer.indent(' ', 2);
    document
        .serialize(serializer)
        .map_err(|e| Error::serialization_with("failed to serialize XLIFF 2.1", e))?;
    Ok(format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{body}"))
}
