#![forbid(unsafe_code)]
//! Localization format conversion core.
//!
//! Parses and serializes translation catalogs across JSON, YAML, gettext PO,
//! Apple `.strings`, `.xcstrings`, Android `strings.xml`, Qt Linguist `.ts`
//! and XLIFF 2.1. All conversion happens through the unified
//! [`TranslationDataset`] model.
//!
//! # Quick Start
//!
//! ```rust
//! use langbridge::{parse, serialize, FormatId, Locale, ParseOptions, SerializeOptions};
//!
//! let reference = Locale::from_posix("en_US").unwrap();
//! let dataset = parse(
//!     r#"{ "greeting": { "translations": { "en_US": "hello" } } }"#,
//!     FormatId::Json,
//!     &ParseOptions::new(reference),
//! )?;
//!
//! let output = serialize(
//!     &dataset,
//!     FormatId::AppleStrings,
//!     &SerializeOptions::new(reference, vec![reference]),
//! )?;
//! assert_eq!(output.as_fragments().unwrap().len(), 1);
//! # Ok::<(), langbridge::Error>(())
//! ```
//!
//! # Supported Formats
//!
//! - **JSON / YAML**: the canonical dataset shape, all locales in one file
//! - **Apple `.strings`**: one file per locale
//! - **Apple `.xcstrings`**: Xcode String Catalogs with plural variations
//! - **Android `strings.xml`**: one resource file per locale
//! - **Gettext PO**: one catalog per locale, with plural and comment support
//! - **Qt Linguist `.ts`**: source/translation pairs, one target per file
//! - **XLIFF 2.1**: source/target segments, one target per file
//!
//! Formats either embed every locale in a single blob or fragment into one
//! file per locale; [`FormatId::fragments_per_locale`] tells the two apart
//! so callers know when output needs container packaging.

pub mod codec;
pub mod error;
pub mod formats;
pub mod locale;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    codec::{parse, parse_aggregate, serialize},
    error::Error,
    formats::{supported_extensions, FormatId, FormatInfo, REGISTRY},
    locale::Locale,
    types::{
        Fragment, ParseOptions, SerializeOptions, SerializedOutput, TranslationDataset,
        TranslationEntry,
    },
};
