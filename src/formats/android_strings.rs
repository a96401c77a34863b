//! Android string resources (`res/values*/strings.xml`), one file per locale.
//!
//! Parsing walks the XML event stream rather than deserializing a model:
//! resource files in the wild interleave comments and whitespace freely,
//! and `<string name="..."/>` self-closing entries must behave like empty
//! sibling elements.

use quick_xml::{escape::escape, events::Event, Reader};

use crate::{
    error::Error,
    locale::Locale,
    types::{Fragment, ParseOptions, SerializeOptions, SerializedOutput, TranslationDataset},
};

/// Parses one Android resources file. Entries are recorded under
/// `options.reference_locale`; aggregation re-targets per-locale files.
/// A missing `<resources>` root or a `<string>` without a `name` attribute
/// is a hard failure.
pub fn parse(content: &str, options: &ParseOptions) -> Result<TranslationDataset, Error> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut dataset = TranslationDataset::new();
    let mut saw_resources = false;
    let mut current_key: Option<String> = None;
    let mut current_value = String::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| Error::parsing_with("malformed Android resources XML", e))?;
        match event {
            Event::Start(element) if element.name().as_ref() == b"resources" => {
                saw_resources = true;
            }
            Event::Start(element) if element.name().as_ref() == b"string" => {
                current_key = Some(name_attribute(&element)?);
                current_value.clear();
            }
            Event::Empty(element) if element.name().as_ref() == b"string" => {
                let key = name_attribute(&element)?;
                dataset
                    .entry(key)
                    .translations
                    .insert(options.reference_locale, String::new());
            }
            Event::Text(text) if current_key.is_some() => {
                let unescaped = text
                    .unescape()
                    .map_err(|e| Error::parsing_with("invalid entity in Android resources", e))?;
                current_value.push_str(&unescaped);
            }
            Event::End(element) if element.name().as_ref() == b"string" => {
                if let Some(key) = current_key.take() {
                    dataset
                        .entry(key)
                        .translations
                        .insert(options.reference_locale, std::mem::take(&mut current_value));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_resources {
        return Err(Error::parsing(
            "Android resources XML must have a <resources> root element",
        ));
    }
    Ok(dataset)
}

fn name_attribute(element: &quick_xml::events::BytesStart<'_>) -> Result<String, Error> {
    let attribute = element
        .try_get_attribute("name")
        .map_err(|e| Error::parsing_with("malformed <string> attributes", e))?
        .ok_or_else(|| Error::parsing("<string> element is missing its name attribute"))?;
    let value = attribute
        .unescape_value()
        .map_err(|e| Error::parsing_with("invalid entity in string name", e))?;
    Ok(value.into_owned())
}

/// Serializes one fragment per locale from [`SerializeOptions::fragment_locales`].
/// Every dataset key appears in every fragment; untranslated keys get an
/// empty element body.
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
    let mut content = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n");
    for (key, entry) in dataset.iter() {
        let value = entry
            .translations
            .get(&locale)
            .map(String::as_str)
            .unwrap_or_default();
        content.push_str(&format!(
            "    <string name=\"{}\">{}</string>\n",
            escape(key),
            escape(value)
        ));
    }
    content.push_str("</resources>\n");

    Fragment {
        identifier: Some(locale.as_posix().to_string()),
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TranslationEntry;
    use indoc::indoc;

    fn loc(code: &str) -> Locale {
        Locale::from_posix(code).unwrap()
    }

    fn options() -> ParseOptions {
        ParseOptions::new(loc("en_US"))
    }

    #[test]
    fn test_parse_basic_resources() {
        let content = indoc! {r#"
            <?xml version="1.0" encoding="utf-8"?>
            <resources>
                <!-- greeting shown on launch -->
                <string name="greeting">Hello, world!</string>
                <string name="farewell">Goodbye</string>
            </resources>
        "#};
        let dataset = parse(content, &options()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.get("greeting").unwrap().translations[&loc("en_US")],
            "Hello, world!"
        );
    }

    #[test]
    fn test_parse_entities_are_unescaped() {
        let content = r#"<resources><string name="amp">Fish &amp; chips</string></resources>"#;
        let dataset = parse(content, &options()).unwrap();
        assert_eq!(
            dataset.get("amp").unwrap().translations[&loc("en_US")],
            "Fish & chips"
        );
    }

    #[test]
    fn test_parse_self_closing_string_is_empty() {
        let content = r#"<resources><string name="empty"/></resources>"#;
        let dataset = parse(content, &options()).unwrap();
        assert_eq!(dataset.get("empty").unwrap().translations[&loc("en_US")], "");
    }

    #[test]
    fn test_parse_missing_resources_root_fails() {
        let content = r#"<strings><string name="a">x</string></strings>"#;
        assert!(matches!(
            parse(content, &options()),
            Err(Error::Parsing { .. })
        ));
    }

    #[test]
    fn test_parse_missing_name_attribute_fails() {
        let content = r#"<resources><string>anonymous</string></resources>"#;
        assert!(parse(content, &options()).is_err());
    }

    #[test]
    fn test_parse_records_under_reference_locale() {
        let content = r#"<resources><string name="k">v</string></resources>"#;
        let dataset = parse(content, &ParseOptions::new(loc("nl_NL"))).unwrap();
        assert_eq!(dataset.get("k").unwrap().translations[&loc("nl_NL")], "v");
    }

    #[test]
    fn test_serialize_emits_every_key_per_fragment() {
        let mut dataset = TranslationDataset::new();
        let mut greeting = TranslationEntry::singular(loc("en_US"), "hello");
        greeting.translations.insert(loc("nl_NL"), "hallo".into());
        dataset.insert("greeting", greeting);
        dataset.insert("only_ref", TranslationEntry::singular(loc("en_US"), "ref"));

        let output = serialize(
            &dataset,
            &SerializeOptions::new(loc("en_US"), vec![loc("en_US"), loc("nl_NL")]),
        )
        .unwrap();
        let fragments = output.as_fragments().unwrap();
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].identifier.as_deref(), Some("nl_NL"));
        assert!(fragments[0]
            .content
            .contains(r#"<string name="greeting">hallo</string>"#));
        assert!(fragments[0]
            .content
            .contains(r#"<string name="only_ref"></string>"#));
    }

    #[test]
    fn test_serialize_escapes_markup() {
        let mut dataset = TranslationDataset::new();
        dataset.insert(
            "markup",
            TranslationEntry::singular(loc("en_US"), "a < b & c"),
        );

        let output = serialize(
            &dataset,
            &SerializeOptions::new(loc("en_US"), vec![loc("en_US")]),
        )
        .unwrap();
        let content = &output.as_fragments().unwrap()[0].content;
        assert!(content.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_round_trip() {
        let mut dataset = TranslationDataset::new();
        dataset.insert(
            "greeting",
            TranslationEntry::singular(loc("nl_NL"), "hallo & welkom"),
        );

        let output = serialize(
            &dataset,
            &SerializeOptions::new(loc("en_US"), vec![loc("nl_NL")]),
        )
        .unwrap();
        let fragment = &output.as_fragments().unwrap()[0];
        let reparsed = parse(&fragment.content, &ParseOptions::new(loc("nl_NL"))).unwrap();
        assert_eq!(reparsed, dataset);
    }
}
