//! Apple `.strings` support: one file per locale.
//!
//! Line-oriented: only `"key" = "value";` pairs are extracted, tolerating
//! escaped quotes, escaped code points and a leading BOM. Anything else
//! (comments, blank lines, garbage) is silently skipped by design.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    error::Error,
    locale::Locale,
    types::{Fragment, ParseOptions, SerializeOptions, SerializedOutput, TranslationDataset},
};

lazy_static! {
    static ref PAIR_REGEX: Regex = Regex::new(
        r#"^\s*\x{FEFF}?"((?:[^"\\]|\\(?:U[0-9A-Fa-f]{4}|.))*)"\s*=\s*"((?:[^"\\]|\\(?:U[0-9A-Fa-f]{4}|.))*)"\s*;\s*$"#
    )
    .expect("valid .strings pair regex");
}

pub fn parse(content: &str, options: &ParseOptions) -> Result<TranslationDataset, Error> {
    let target = options.target_locale.ok_or_else(|| {
        Error::parsing("target locale is required for parsing Apple .strings content")
    })?;

    let mut dataset = TranslationDataset::new();
    for line in content.lines() {
        let Some(captures) = PAIR_REGEX.captures(line) else {
            continue;
        };
        let key = unescape(&captures[1]);
        let value = unescape(&captures[2]);
        dataset
            .entry(key)
            .translations
            .insert(target, value);
    }

    Ok(dataset)
}

pub fn serialize(
    dataset: &TranslationDataset,
    options: &SerializeOptions,
) -> Result<SerializedOutput, Error> {
    let fragments = options
        .fragment_locales()
        .into_iter()
        .map(|locale| build_fragment(dataset, locale))
        .collect();
    Ok(SerializedOutput::Fragments(fragments))
}

fn build_fragment(dataset: &TranslationDataset, locale: Locale) -> Fragment {
    let content = dataset
        .iter()
        .map(|(key, entry)| {
            let value = entry
                .translations
                .get(&locale)
                .map(String::as_str)
                .unwrap_or_default();
            format!("\"{}\" = \"{}\";", escape(key), escape(value))
        })
        .collect::<Vec<_>>()
        .join("\n");

    Fragment {
        identifier: Some(locale.as_posix().to_string()),
        content,
    }
}

fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                // Escaped code points and unknown escapes kept verbatim.
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}
