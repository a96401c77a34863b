//! Qt Linguist translation files (`.ts`), one file per locale.
//!
//! A TS file carries the reference text in `<source>` and one target
//! language in `<translation>`, with the target named by the `language`
//! attribute on the `<TS>` root.

use quick_xml::se::Serializer;
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    locale::Locale,
    types::{Fragment, ParseOptions, SerializeOptions, SerializedOutput, TranslationDataset},
};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename = "TS")]
struct TsDocument {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(rename = "@language", default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    context: TsContext,
}

#[derive(Debug, Deserialize, Serialize)]
struct TsContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, rename = "message")]
    messages: Vec<TsMessage>,
}

#[derive(Debug, Deserialize, Serialize)]
struct TsMessage {
    #[serde(rename = "@key")]
    key: String,
    #[serde(default)]
    source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    translation: Option<String>,
}

/// Parses one TS file. `<source>` text lands under
/// `options.reference_locale`; `<translation>` text lands under the locale
/// named by the root's `language` attribute (POSIX or BCP 47). An absent or
/// unrecognized `language` attribute means the file carries reference text
/// only. An existing reference value is never clobbered by an empty target.
pub fn parse(content: &str, options: &ParseOptions) -> Result<TranslationDataset, Error> {
    let document: TsDocument = quick_xml::de::from_str(content)
        .map_err(|e| Error::parsing_with("invalid Qt Linguist TS structure", e))?;

    let target = document
        .language
        .as_deref()
        .and_then(|code| Locale::from_posix(code).or_else(|| Locale::from_bcp47(code)));

    let mut dataset = TranslationDataset::new();
    for message in document.context.messages {
        let entry = dataset.entry(message.key);
        entry
            .translations
            .insert(options.reference_locale, message.source);
        if let Some(target) = target {
            entry
                .translations
                .entry(target)
                .or_insert_with(|| message.translation.unwrap_or_default());
        }
    }
    Ok(dataset)
}

/// Serializes one fragment per locale from [`SerializeOptions::fragment_locales`].
/// The root's `language` attribute names the fragment's target locale in
/// BCP 47. In the reference-only case no `<translation>` elements are
/// written; a TS file is also valid as a single-language source catalog.
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
    let messages = dataset
        .iter()
        .map(|(key, entry)| TsMessage {
            key: key.clone(),
            source: entry
                .translations
                .get(&reference)
                .cloned()
                .unwrap_or_default(),
            translation: if locale == reference {
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
        })
        .collect();

    let document = TsDocument {
        version: Some("2.1".to_string()),
        language: Some(locale.to_bcp47()),
        context: TsContext {
            name: Some("Translations".to_string()),
            messages,
        },
    };

    Ok(Fragment {
        identifier: Some(locale.to_bcp47()),
        content: to_xml(&document)?,
    })
}

fn to_xml(document: &TsDocument) -> Result<String, Error> {
    let mut body = String::new();
    let mut serializer = Serializer::new(&mut body);
    serializer.indent(' ', 2);
    document
        .serialize(serializer)
        .map_err(|e| Error::serialization_with("failed to serialize Qt Linguist TS", e))?;
    Ok(format!("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n{body}"))
}
