//! Structured key-value JSON: the canonical dataset shape serialized
//! directly, all locales embedded in one document.

use crate::{
    error::Error,
    types::{ParseOptions, SerializeOptions, SerializedOutput, TranslationDataset},
};

/// Parses a structured JSON document of the shape
/// `{ key: { translations, plurals?, tags?, description? } }`.
/// Malformed JSON or a schema mismatch (including unregistered locale codes)
/// is a hard parsing failure.
pub fn parse(content: &str, _options: &ParseOptions) -> Result<TranslationDataset, Error> {
    serde_json::from_str(content)
        .map_err(|e| Error::parsing_with("failed to parse JSON dataset", e))
}

/// Serializes the dataset as one pretty-printed JSON blob containing every
/// locale that is both present in the dataset and requested in
/// `options.locales`.
pub fn serialize(
    dataset: &TranslationDataset,
    options: &SerializeOptions,
) -> Result<SerializedOutput, Error> {
    let restricted = dataset.restricted_to(&options.locales);
    let blob = serde_json::to_string_pretty(&restricted)
        .map_err(|e| Error::serialization_with("failed to serialize JSON dataset", e))?;
    Ok(SerializedOutput::Blob(blob))
}
