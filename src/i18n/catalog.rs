// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in translation catalog.
//!
//! Ships the default strings for the seven bundled locales as a JSON
//! tree. The catalog stays in JSON form (rather than a typed struct)
//! because callers may extend or override any part of it through the
//! `translation` setting, and the deep merger works on JSON objects.
//!
//! ## Adding a locale
//!
//! 1. Add the locale object to [`default_catalog`] with `languageChoice`,
//!    `languageSwitchText`, and a `languages` sub-object
//! 2. Add the locale's name to every other locale's `languages` object
//! 3. Append the code to [`BUILT_IN_LOCALES`]

use serde_json::{json, Value};

/// Locales the default catalog ships translations for.
pub const BUILT_IN_LOCALES: &[&str] = &["de", "en", "pl", "fr", "ru", "es", "it"];

/// The bundled catalog: per locale, the selection label, the switch
/// phrase (with a `{{lang}}` placeholder), and localized language names.
pub fn default_catalog() -> Value {
    json!({
        "de": {
            "languageChoice": "Sprachauswahl",
            "languageSwitchText": "Diese Seite in {{lang}} anzeigen",
            "languages": {
                "de": "Deutsch",
                "en": "Englisch",
                "pl": "Polnisch",
                "fr": "Französisch",
                "ru": "Russisch",
                "es": "Spanisch",
                "it": "Italienisch"
            }
        },
        "en": {
            "languageChoice": "Language selection",
            "languageSwitchText": "Display this page in {{lang}}",
            "languages": {
                "de": "German",
                "en": "English",
                "pl": "Polish",
                "fr": "French",
                "ru": "Russian",
                "es": "Spanish",
                "it": "Italian"
            }
        },
        "pl": {
            "languageChoice": "Wybór języka",
            "languageSwitchText": "Wyświetl tę stronę w {{lang}}",
            "languages": {
                "de": "Niemiecki",
                "en": "Angielski",
                "pl": "Polski",
                "fr": "Francuski",
                "ru": "Rosyjski",
                "es": "Hiszpański",
                "it": "Włoski"
            }
        },
        "fr": {
            "languageChoice": "Choix de la langue",
            "languageSwitchText": "Afficher cette page en {{lang}}",
            "languages": {
                "de": "Allemand",
                "en": "Anglais",
                "pl": "Polonais",
                "fr": "Français",
                "ru": "Russe",
                "es": "Espagnol",
                "it": "Italien"
            }
        },
        "ru": {
            "languageChoice": "Выбор языка",
            "languageSwitchText": "Отображать эту страницу на {{lang}}",
            "languages": {
                "de": "Немецкий",
                "en": "Английский",
                "pl": "Польский",
                "fr": "Французский",
                "ru": "Русский",
                "es": "Испанский",
                "it": "Итальянский"
            }
        },
        "es": {
            "languageChoice": "Selección de idioma",
            "languageSwitchText": "Mostrar esta página en {{lang}}",
            "languages": {
                "de": "Alemán",
                "en": "Inglés",
                "pl": "Polaco",
                "fr": "Francés",
                "ru": "Ruso",
                "es": "Español",
                "it": "Italiano"
            }
        },
        "it": {
            "languageChoice": "Selezione della lingua",
            "languageSwitchText": "Mostra questa pagina in {{lang}}",
            "languages": {
                "de": "Tedesco",
                "en": "Inglese",
                "pl": "Polacco",
                "fr": "Francese",
                "ru": "Russo",
                "es": "Spagnolo",
                "it": "Italiano"
            }
        }
    })
}
