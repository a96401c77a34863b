//! Gettext PO support: one file per locale.
//!
//! Parsing needs a target locale (the locale the file's `msgstr` slots
//! represent). Reference comments (`#:`) become ordered tags, extracted
//! comments (`#.`) become the description, the empty-msgid header entry is
//! skipped. A plural hint is recorded only when a `msgid_plural` is present
//! and more than one `msgstr` slot exists.

use indoc::indoc;

use crate::{
    error::Error,
    locale::Locale,
    types::{Fragment, ParseOptions, SerializeOptions, SerializedOutput, TranslationDataset},
};

#[derive(Debug, Default)]
struct Message {
    msgid: String,
    msgid_plural: Option<String>,
    msgstr: Vec<String>,
    references: Vec<String>,
    extracted: Vec<String>,
    started: bool,
}

/// Which quoted field a continuation line appends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    None,
    Msgid,
    MsgidPlural,
    Msgctxt,
    Msgstr(usize),
}

pub fn parse(content: &str, options: &ParseOptions) -> Result<TranslationDataset, Error> {
    let target = options
        .target_locale
        .ok_or_else(|| Error::parsing("target locale is required for parsing PO content"))?;

    let mut dataset = TranslationDataset::new();
    let mut message = Message::default();
    let mut field = Field::None;

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        let line_no = index + 1;

        if line.is_empty() {
            flush(&mut dataset, std::mem::take(&mut message), target);
            field = Field::None;
            continue;
        }

        if let Some(rest) = line.strip_prefix("#:") {
            if matches!(field, Field::Msgstr(_)) {
                flush(&mut dataset, std::mem::take(&mut message), target);
                field = Field::None;
            }
            message.references.push(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("#.") {
            if matches!(field, Field::Msgstr(_)) {
                flush(&mut dataset, std::mem::take(&mut message), target);
                field = Field::None;
            }
            message.extracted.push(rest.trim().to_string());
        } else if line.starts_with('#') {
            // Translator comments and flags are tolerated and dropped.
        } else if let Some(rest) = line.strip_prefix("msgid_plural") {
            message.msgid_plural = Some(quoted(rest, line_no)?);
            field = Field::MsgidPlural;
        } else if let Some(rest) = line.strip_prefix("msgid") {
            if message.started {
                flush(&mut dataset, std::mem::take(&mut message), target);
            }
            message.msgid = quoted(rest, line_no)?;
            message.started = true;
            field = Field::Msgid;
        } else if let Some(rest) = line.strip_prefix("msgctxt") {
            quoted(rest, line_no)?;
            field = Field::Msgctxt;
        } else if let Some(rest) = line.strip_prefix("msgstr[") {
            let (slot, rest) = rest.split_once(']').ok_or_else(|| {
                Error::parsing(format!("malformed msgstr index at line {line_no}"))
            })?;
            let slot: usize = slot.parse().map_err(|_| {
                Error::parsing(format!("malformed msgstr index at line {line_no}"))
            })?;
            if message.msgstr.len() <= slot {
                message.msgstr.resize(slot + 1, String::new());
            }
            message.msgstr[slot] = quoted(rest, line_no)?;
            field = Field::Msgstr(slot);
        } else if let Some(rest) = line.strip_prefix("msgstr") {
            if message.msgstr.is_empty() {
                message.msgstr.push(String::new());
            }
            message.msgstr[0] = quoted(rest, line_no)?;
            field = Field::Msgstr(0);
        } else if line.starts_with('"') {
            let continuation = quoted(line, line_no)?;
            match field {
                Field::Msgid => message.msgid.push_str(&continuation),
                Field::MsgidPlural => {
                    if let Some(plural) = message.msgid_plural.as_mut() {
                        plural.push_str(&continuation);
                    }
                }
                Field::Msgctxt => {}
                Field::Msgstr(slot) => message.msgstr[slot].push_str(&continuation),
                Field::None => {
                    return Err(Error::parsing(format!(
                        "unexpected continuation string at line {line_no}"
                    )));
                }
            }
        } else {
            return Err(Error::parsing(format!(
                "unexpected PO content at line {line_no}: `{line}`"
            )));
        }
    }
    flush(&mut dataset, message, target);

    Ok(dataset)
}

/// Records a completed message into the dataset. The empty-msgid header
/// entry is skipped.
fn flush(dataset: &mut TranslationDataset, message: Message, target: Locale) {
    if !message.started || message.msgid.is_empty() {
        return;
    }

    let entry = dataset.entry(message.msgid);
    let translation = message.msgstr.first().cloned().unwrap_or_default();
    entry.translations.insert(target, translation);

    if let Some(plural) = message.msgid_plural {
        if message.msgstr.len() > 1 {
            entry.plurals.insert(target, plural);
        }
    }
    if !message.references.is_empty() {
        entry.tags = message.references;
    }
    if !message.extracted.is_empty() {
        entry.description = Some(message.extracted.join("\n"));
    }
}

/// Extracts and unescapes the `"..."` payload of a PO line.
fn quoted(rest: &str, line_no: usize) -> Result<String, Error> {
    let rest = rest.trim();
    let inner = rest
        .strip_prefix('"')
        .and_then(|r| r.strip_suffix('"'))
        .ok_or_else(|| Error::parsing(format!("expected quoted string at line {line_no}")))?;
    Ok(unescape(inner))
}

fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some(other) => out.push(other),
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
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
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
    let mut out = String::from(indoc! {r#"
        msgid ""
        msgstr ""
        "Content-Type: text/plain; charset=UTF-8\n"
        "Content-Transfer-Encoding: 8bit\n"
    "#});

    for (key, entry) in dataset.iter() {
        out.push('\n');
        if let Some(description) = &entry.description {
            for line in description.lines() {
                out.push_str("#. ");
                out.push_str(line);
                out.push('\n');
            }
        }
        for tag in &entry.tags {
            out.push_str("#: ");
            out.push_str(tag);
            out.push('\n');
        }
        out.push_str(&format!("msgid \"{}\"\n", escape(key)));

        let translation = entry
            .translations
            .get(&locale)
            .map(String::as_str)
            .unwrap_or_default();
        if let Some(hint) = entry.plurals.get(&locale) {
            out.push_str(&format!("msgid_plural \"{}\"\n", escape(hint)));
            out.push_str(&format!("msgstr[0] \"{}\"\n", escape(translation)));
            out.push_str("msgstr[1] \"\"\n");
        } else {
            out.push_str(&format!("msgstr \"{}\"\n", escape(translation)));
        }
    }

    Fragment {
        identifier: Some(locale.as_posix().to_string()),
        content: out,
    }
}
