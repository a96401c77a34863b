//! Locale codec: the supported-locale registry plus conversions between
//! POSIX (`en_US`), BCP 47 (`en-US`) and bare ISO 639-1 (`en`) encodings.
//!
//! Validity is always registry membership, never a pattern check: a
//! syntactically well-formed but unregistered code (say `en_ZZ`) is rejected.
//! The registry is immutable static data and the single source of truth for
//! which locales are supported.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize, de, ser};
use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// All supported POSIX locale codes, in registry order.
///
/// The order is load-bearing: [`Locale::from_iso639_1`] returns the *first*
/// entry whose language prefix matches, so e.g. `"en"` resolves to `en_GB`
/// and `"fr"` to `fr_CA`. Reordering this slice changes observable behavior.
pub static LOCALES: &[&str] = &[
    "af_ZA", // Afrikaans
    "am_ET", // Amharic
    "ar_SA", // Arabic
    "az_AZ", // Azerbaijani
    "be_BY", // Belarusian
    "bg_BG", // Bulgarian
    "bn_BD", // Bengali
    "bs_BA", // Bosnian
    "ca_ES", // Catalan
    "cs_CZ", // Czech
    "cy_GB", // Welsh
    "da_DK", // Danish
    "de_DE", // German
    "el_GR", // Greek
    // English variants
    "en_GB", "en_US", "en_AU", "en_CA", "en_NZ", "en_IN",
    // French variants
    "fr_CA", "fr_BE", "fr_CH",
    // Portuguese variants
    "pt_BR",
    // Chinese variants
    "zh_HK",
    // Norwegian variant
    "nn_NO",
    // Serbian variants
    "sr_BA", "sr_ME",
    // Malay-Indonesian variants
    "id_ID", "ms_BN",
    // Spanish variants
    "es_MX", "es_AR", "es_CO", "es_CL", "es_US",
    "es_ES", // Spanish
    "et_EE", // Estonian
    "eu_ES", // Basque
    "fa_IR", // Persian (Farsi)
    "fi_FI", // Finnish
    "fr_FR", // French
    "nl_BE", // Flemish
    "ga_IE", // Irish
    "gl_ES", // Galician
    "gu_IN", // Gujarati
    "he_IL", // Hebrew
    "hi_IN", // Hindi
    "hr_HR", // Croatian
    "hu_HU", // Hungarian
    "hy_AM", // Armenian
    "is_IS", // Icelandic
    "it_IT", // Italian
    "ja_JP", // Japanese
    "ka_GE", // Georgian
    "kk_KZ", // Kazakh
    "km_KH", // Khmer
    "kn_IN", // Kannada
    "ko_KR", // Korean
    "ky_KG", // Kyrgyz
    "lo_LA", // Lao
    "lt_LT", // Lithuanian
    "lv_LV", // Latvian
    "mk_MK", // Macedonian
    "ml_IN", // Malayalam
    "mn_MN", // Mongolian
    "ms_MY", // Malay
    "mt_MT", // Maltese
    "my_MM", // Burmese
    "ne_NP", // Nepali
    "nl_NL", // Dutch
    "no_NO", // Norwegian
    "pa_IN", // Punjabi
    "pl_PL", // Polish
    "ps_AF", // Pashto
    "pt_PT", // Portuguese
    "ro_RO", // Romanian
    "ru_RU", // Russian
    "si_LK", // Sinhala
    "sk_SK", // Slovak
    "sl_SI", // Slovenian
    "sq_AL", // Albanian
    "sr_RS", // Serbian
    "sv_SE", // Swedish
    "sw_KE", // Swahili
    "ta_IN", // Tamil
    "te_IN", // Telugu
    "th_TH", // Thai
    "tr_TR", // Turkish
    "uk_UA", // Ukrainian
    "ur_PK", // Urdu
    "uz_UZ", // Uzbek
    "vi_VN", // Vietnamese
    "xh_ZA", // Xhosa
    "yo_NG", // Yoruba
    "zh_CN", // Chinese (Simplified)
    "zh_TW", // Chinese (Traditional)
    "zu_ZA", // Zulu
];

/// ISO 639-1 codes of languages written in right-to-left scripts.
///
/// Maintained independently of [`LOCALES`]: a language may be RTL-flagged
/// even when none of its region variants is registered, and vice versa.
static RTL_LANGUAGES: &[&str] = &[
    "ar", // Arabic
    "he", // Hebrew
    "fa", // Persian/Farsi
    "ur", // Urdu
    "yi", // Yiddish
    "ji", // Yiddish (alternative code)
    "iw", // Hebrew (deprecated code, but still used)
    "ku", // Kurdish
    "ps", // Pashto
    "sd", // Sindhi
    "ug", // Uyghur
    "dv", // Dhivehi/Maldivian
    "ks", // Kashmiri
];

/// English display names for the languages in the registry, keyed by
/// ISO 639-1 code.
static LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("ky", "Kyrgyz"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Burmese"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("nn", "Norwegian Nynorsk"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("xh", "Xhosa"),
    ("yo", "Yoruba"),
    ("zh", "Chinese"),
    ("zu", "Zulu"),
];

/// A supported locale in POSIX form (`lang_REGION`).
///
/// Only constructible through registry lookup, so a `Locale` value is always
/// a registered code. Copyable and cheap to compare: it wraps the `'static`
/// registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Locale(&'static str);

impl Locale {
    /// Looks up a POSIX code (`en_US`) in the registry.
    pub fn from_posix(value: &str) -> Option<Locale> {
        LOCALES.iter().find(|l| **l == value).copied().map(Locale)
    }

    /// Looks up a BCP 47 code (`en-US`) in the registry.
    pub fn from_bcp47(value: &str) -> Option<Locale> {
        let (lang, region) = value.split_once('-')?;
        if lang.contains('_') || region.contains('-') {
            return None;
        }
        Self::from_posix(&format!("{lang}_{region}"))
    }

    /// Resolves a bare ISO 639-1 language code to the first registry entry
    /// with that language prefix.
    ///
    /// The result is deterministic but registry-order-dependent, not
    /// semantically canonical: `"en"` yields `en_GB` because the English
    /// variants are enumerated GB-first, and `"fr"` yields `fr_CA`.
    pub fn from_iso639_1(code: &str) -> Option<Locale> {
        let prefix = format!("{code}_");
        LOCALES
            .iter()
            .find(|l| l.starts_with(&prefix))
            .copied()
            .map(Locale)
    }

    /// Resolves a code in any of the three encodings: bare ISO 639-1 first
    /// (via the first-match search), then POSIX, then BCP 47.
    pub fn resolve(value: &str) -> Option<Locale> {
        if is_iso639_1(value) {
            Self::from_iso639_1(value)
        } else if let Some(locale) = Self::from_posix(value) {
            Some(locale)
        } else {
            Self::from_bcp47(value)
        }
    }

    /// The POSIX form (`en_US`).
    pub fn as_posix(&self) -> &'static str {
        self.0
    }

    /// The BCP 47 form (`en-US`). A pure separator substitution, so
    /// `Locale::from_bcp47(&l.to_bcp47()) == Some(l)` for every locale.
    pub fn to_bcp47(&self) -> String {
        self.0.replacen('_', "-", 1)
    }

    /// The ISO 639-1 language prefix (`en`).
    pub fn language(&self) -> &'static str {
        match self.0.split_once('_') {
            Some((lang, _)) => lang,
            None => self.0,
        }
    }

    /// The ISO 3166-1 alpha-2 region code (`US`).
    pub fn region(&self) -> &'static str {
        match self.0.split_once('_') {
            Some((_, region)) => region,
            None => "",
        }
    }

    /// Whether this locale's language is written right to left.
    pub fn is_rtl(&self) -> bool {
        is_rtl_language(self.language())
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_posix(s).ok_or_else(|| Error::parsing(format!("unsupported locale code `{s}`")))
    }
}

impl Serialize for Locale {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LocaleVisitor;

        impl de::Visitor<'_> for LocaleVisitor {
            type Value = Locale;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a registered POSIX locale code such as `en_US`")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Locale, E> {
                Locale::from_posix(value)
                    .ok_or_else(|| E::custom(format!("unsupported locale code `{value}`")))
            }
        }

        deserializer.deserialize_str(LocaleVisitor)
    }
}

/// Whether the value is a registered POSIX locale code.
pub fn is_locale(value: &str) -> bool {
    Locale::from_posix(value).is_some()
}

/// Whether the value is the BCP 47 form of a registered locale.
pub fn is_bcp47(value: &str) -> bool {
    Locale::from_bcp47(value).is_some()
}

/// Whether the value is the ISO 639-1 language prefix of some registered
/// locale.
pub fn is_iso639_1(value: &str) -> bool {
    LOCALES
        .iter()
        .any(|l| l.split_once('_').map(|(lang, _)| lang) == Some(value))
}

/// Whether the ISO 639-1 code names a right-to-left language.
///
/// Consults a fixed RTL set that is independent of the locale registry.
pub fn is_rtl_language(language: &str) -> bool {
    RTL_LANGUAGES.contains(&language)
}

/// Human-readable English name for a locale code in POSIX or BCP 47 form,
/// e.g. `"English (US)"` for `en_US`.
///
/// Unrecognized input falls back to the raw input unchanged, never an error.
pub fn display_name(code: &str) -> String {
    let Ok(id) = code.parse::<LanguageIdentifier>() else {
        return code.to_string();
    };
    let language = id.language.as_str();
    match LANGUAGE_NAMES.iter().find(|(lang, _)| *lang == language) {
        Some((_, name)) => match id.region {
            Some(region) => format!("{name} ({})", region.as_str()),
            None => (*name).to_string(),
        },
        None => code.to_string(),
    }
}
