//! All supported localization file formats for langbridge.
//!
//! This module holds the [`FormatId`] enum, the static format registry
//! (extensions, MIME type, fragmenting flag) and the per-format plugin
//! submodules.

pub mod android_strings;
pub mod json;
pub mod po;
pub mod qt_linguist;
pub mod strings;
pub mod xcstrings;
pub mod xliff;
pub mod yaml;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::error::Error;

/// Identifies a supported localization file format.
///
/// Variant order equals registry order; see [`REGISTRY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatId {
    /// Structured key-value JSON (multi-locale, single blob).
    Json,
    /// Structured key-value YAML (multi-locale, single blob).
    Yaml,
    /// Qt Linguist translation XML (`.ts`), one file per locale.
    QtLinguist,
    /// Gettext PO, one file per locale.
    Po,
    /// Android string resources XML, one file per locale.
    AndroidStrings,
    /// Apple `.strings`, one file per locale.
    AppleStrings,
    /// XLIFF 2.1, one file per locale.
    Xliff,
    /// Plural-aware JSON dialect (`.xcstrings`, multi-locale, single blob).
    Xcstrings,
}

/// Registry row for one format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatInfo {
    pub id: FormatId,
    pub extensions: &'static [&'static str],
    pub mime_type: &'static str,
    /// Whether serialization produces one file per locale, requiring
    /// container packaging when multiple locales are requested.
    pub fragments_per_locale: bool,
}

/// The format registry, in fixed registration order.
///
/// Extension lookup is first-registered-wins: `.xml` is claimed by both
/// Android resources and (historically) XLIFF; registering Android first is
/// the documented tie-break. Row order must match [`FormatId`] variant order.
pub static REGISTRY: &[FormatInfo] = &[
    FormatInfo {
        id: FormatId::Json,
        extensions: &[".json"],
        mime_type: "application/json",
        fragments_per_locale: false,
    },
    FormatInfo {
        id: FormatId::Yaml,
        extensions: &[".yaml", ".yml"],
        mime_type: "application/yaml",
        fragments_per_locale: false,
    },
    FormatInfo {
        id: FormatId::QtLinguist,
        extensions: &[".ts"],
        mime_type: "application/zip",
        fragments_per_locale: true,
    },
    FormatInfo {
        id: FormatId::Po,
        extensions: &[".po", ".pot"],
        mime_type: "application/zip",
        fragments_per_locale: true,
    },
    FormatInfo {
        id: FormatId::AndroidStrings,
        extensions: &[".xml"],
        mime_type: "application/zip",
        fragments_per_locale: true,
    },
    FormatInfo {
        id: FormatId::AppleStrings,
        extensions: &[".strings"],
        mime_type: "application/zip",
        fragments_per_locale: true,
    },
    FormatInfo {
        id: FormatId::Xliff,
        extensions: &[".xliff", ".xlf"],
        mime_type: "application/zip",
        fragments_per_locale: true,
    },
    FormatInfo {
        id: FormatId::Xcstrings,
        extensions: &[".xcstrings"],
        mime_type: "application/json",
        fragments_per_locale: false,
    },
];

impl FormatId {
    /// The registry row for this format.
    pub fn info(self) -> &'static FormatInfo {
        // Variant order matches registry order; pinned by a test below.
        &REGISTRY[self as usize]
    }

    /// Canonical file extensions, leading dot included.
    pub fn extensions(self) -> &'static [&'static str] {
        self.info().extensions
    }

    /// MIME type advertised for exports of this format. Fragmenting formats
    /// report `application/zip` for the packaging boundary; the core itself
    /// never emits zip bytes.
    pub fn mime_type(self) -> &'static str {
        self.info().mime_type
    }

    /// Whether this format stores one locale per file.
    pub fn fragments_per_locale(self) -> bool {
        self.info().fragments_per_locale
    }

    /// Resolves a file extension (or any path ending in one) to a format by
    /// linear registry scan with suffix equality; first-registered-wins on
    /// shared extensions.
    pub fn for_extension(extension: &str) -> Option<FormatId> {
        REGISTRY
            .iter()
            .find(|info| info.extensions.iter().any(|ext| extension.ends_with(ext)))
            .map(|info| info.id)
    }
}

/// All supported file extensions across the registry, deduplicated,
/// in registry order.
pub fn supported_extensions() -> Vec<&'static str> {
    let mut extensions = Vec::new();
    for info in REGISTRY {
        for ext in info.extensions {
            if !extensions.contains(ext) {
                extensions.push(*ext);
            }
        }
    }
    extensions
}

impl Display for FormatId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FormatId::Json => "json",
            FormatId::Yaml => "yaml",
            FormatId::QtLinguist => "ts",
            FormatId::Po => "po",
            FormatId::AndroidStrings => "android_strings",
            FormatId::AppleStrings => "apple_strings",
            FormatId::Xliff => "xliff",
            FormatId::Xcstrings => "xcstrings",
        };
        write!(f, "{name}")
    }
}

impl FromStr for FormatId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "json" => Ok(FormatId::Json),
            "yaml" | "yml" => Ok(FormatId::Yaml),
            "ts" | "qt_linguist" => Ok(FormatId::QtLinguist),
            "po" | "pot" => Ok(FormatId::Po),
            "android_strings" | "android" => Ok(FormatId::AndroidStrings),
            "apple_strings" | "strings" => Ok(FormatId::AppleStrings),
            "xliff" | "xlf" => Ok(FormatId::Xliff),
            "xcstrings" => Ok(FormatId::Xcstrings),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_variant_order() {
        for (index, info) in REGISTRY.iter().enumerate() {
            assert_eq!(info.id as usize, index, "registry row {index} out of order");
        }
    }

    #[test]
    fn test_po_and_pot_resolve_to_po() {
        assert_eq!(FormatId::for_extension(".po"), Some(FormatId::Po));
        assert_eq!(FormatId::for_extension(".pot"), Some(FormatId::Po));
        assert_eq!(
            FormatId::for_extension("messages.po"),
            Some(FormatId::Po)
        );
    }

    #[test]
    fn test_xml_tie_break_is_android() {
        assert_eq!(
            FormatId::for_extension(".xml"),
            Some(FormatId::AndroidStrings)
        );
    }

    #[test]
    fn test_extension_lookup_misses() {
        assert_eq!(FormatId::for_extension(".csv"), None);
        assert_eq!(FormatId::for_extension(""), None);
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(FormatId::Json.mime_type(), "application/json");
        assert_eq!(FormatId::Xcstrings.mime_type(), "application/json");
        assert_eq!(FormatId::Yaml.mime_type(), "application/yaml");
        for format in [
            FormatId::QtLinguist,
            FormatId::Po,
            FormatId::AndroidStrings,
            FormatId::AppleStrings,
            FormatId::Xliff,
        ] {
            assert_eq!(format.mime_type(), "application/zip");
            assert!(format.fragments_per_locale());
        }
        assert!(!FormatId::Json.fragments_per_locale());
        assert!(!FormatId::Yaml.fragments_per_locale());
        assert!(!FormatId::Xcstrings.fragments_per_locale());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for info in REGISTRY {
            let name = info.id.to_string();
            assert_eq!(name.parse::<FormatId>().unwrap(), info.id);
        }
    }

    #[test]
    fn test_from_str_unknown_format() {
        assert!(matches!(
            "foobar".parse::<FormatId>(),
            Err(Error::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_supported_extensions_deduplicated() {
        let extensions = supported_extensions();
        assert!(extensions.contains(&".json"));
        assert!(extensions.contains(&".pot"));
        let mut unique = extensions.clone();
        unique.dedup();
        assert_eq!(unique.len(), extensions.len());
    }
}
