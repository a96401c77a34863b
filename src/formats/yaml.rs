//! Structured key-value YAML. Same document shape as the JSON format,
//! all locales embedded in one document.

use crate::{
    error::Error,
    types::{ParseOptions, SerializeOptions, SerializedOutput, TranslationDataset},
};

/// Parses a structured YAML document of the shape
/// `key: { translations, plurals?, tags?, description? }`.
pub fn parse(content: &str, _options: &ParseOptions) -> Result<TranslationDataset, Error> {
    serde_yaml::from_str(content)
        .map_err(|e| Error::parsing_with("failed to parse YAML dataset", e))
}

/// Serializes the dataset as one YAML blob limited to `options.locales`.
pub fn serialize(
    dataset: &TranslationDataset,
    options: &SerializeOptions,
) -> Result<SerializedOutput, Error> {
    let restricted = dataset.restricted_to(&options.locales);
    let blob = serde_yaml::to_string(&restricted)
        .map_err(|e| Error::serialization_with("failed to serialize YAML dataset", e))?;
    Ok(SerializedOutput::Blob(blob))
}
