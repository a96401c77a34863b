//! Format dispatch: the single entry points tying [`FormatId`] to the
//! per-format plugin modules.

use crate::{
    error::Error,
    formats::{self, FormatId},
    locale::Locale,
    types::{ParseOptions, SerializeOptions, SerializedOutput, TranslationDataset},
};

/// Parses `content` as `format` into the canonical dataset.
pub fn parse(
    content: &str,
    format: FormatId,
    options: &ParseOptions,
) -> Result<TranslationDataset, Error> {
    match format {
        FormatId::Json => formats::json::parse(content, options),
        FormatId::Yaml => formats::yaml::parse(content, options),
        FormatId::QtLinguist => formats::qt_linguist::parse(content, options),
        FormatId::Po => formats::po::parse(content, options),
        FormatId::AndroidStrings => formats::android_strings::parse(content, options),
        FormatId::AppleStrings => formats::strings::parse(content, options),
        FormatId::Xliff => formats::xliff::parse(content, options),
        FormatId::Xcstrings => formats::xcstrings::parse(content, options),
    }
}

/// Parses several per-locale files of one fragmenting format and merges
/// them into a single dataset.
///
/// Each `(locale, content)` pair is parsed as that locale's file: for PO
/// and Apple `.strings` the locale becomes the parse target, for Android
/// resources it becomes the file's reference locale. Merging never
/// overwrites a locale already contributed by an earlier pair, so input
/// order only matters for duplicate `(key, locale)` conflicts.
pub fn parse_aggregate(
    files: &[(Locale, String)],
    format: FormatId,
    options: &ParseOptions,
) -> Result<TranslationDataset, Error> {
    let mut dataset = TranslationDataset::new();
    for (locale, content) in files {
        let per_locale_options = match format {
            FormatId::Po | FormatId::AppleStrings => {
                ParseOptions::new(options.reference_locale).with_target(*locale)
            }
            FormatId::AndroidStrings => ParseOptions::new(*locale),
            other => {
                return Err(Error::parsing(format!(
                    "format `{other}` does not support per-locale aggregation"
                )));
            }
        };
        dataset.merge(parse(content, format, &per_locale_options)?);
    }
    Ok(dataset)
}

/// Serializes the dataset as `format`: a single blob for multi-locale
/// formats, one fragment per locale for fragmenting formats.
pub fn serialize(
    dataset: &TranslationDataset,
    format: FormatId,
    options: &SerializeOptions,
) -> Result<SerializedOutput, Error> {
    match format {
        FormatId::Json => formats::json::serialize(dataset, options),
        FormatId::Yaml => formats::yaml::serialize(dataset, options),
        FormatId::QtLinguist => formats::qt_linguist::serialize(dataset, options),
        FormatId::Po => formats::po::serialize(dataset, options),
        FormatId::AndroidStrings => formats::android_strings::serialize(dataset, options),
        FormatId::AppleStrings => formats::strings::serialize(dataset, options),
        FormatId::Xliff => formats::xliff::serialize(dataset, options),
        FormatId::Xcstrings => formats::xcstrings::serialize(dataset, options),
    }
}
