//! Internationalization (i18n) support for `riskscope-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/riskscope-ui.ftl   (fallback/reference)
//!   es-ES/riskscope-ui.ftl   (additional locale)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::i18n::init;
//! use crate::t;
//! init(); // idempotent
//! let dashboard_label = t!("nav-dashboard");
//! ```
//!
//! To add a new locale:
//! 1. Copy `en-US/riskscope-ui.ftl` to `i18n/<lang-id>/riskscope-ui.ftl`.
//! 2. Translate each message value (keep IDs and variable placeholders identical).
//! 3. Run tests to ensure completeness.
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
//! - Assets are always embedded on WASM (we enable `debug-embed` feature in that target-specific dependency section).
//!
//! Public API surface:
//! - `init()` – load localization bundles (safe to call multiple times).
//! - `set_language(tag: &str)` – switch language at runtime.
//! - `available_languages()` – discover embedded language tags (for a picker).
//! - Domain label helpers: `risk_label`, `diet_label`, `attribute_label` etc.
//!   (localized names for the enum domains, used by charts and selectors).
//! - `fl` macro re-export (for direct keyed access when needed).
//! - `LOADER` – global `FluentLanguageLoader` consumed by helpers & `fl!` macro.
//!
//! NOTE: The hyphenated filename `riskscope-ui.ftl` is canonical across all locales.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::profile::ProfileAttribute;
use crate::core::record::{ActivityLevel, AlcoholUse, DietType, RiskLevel, StressLevel, YesNo};

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-dashboard")
///     t!("filters-matching", matched = "12", total = "88")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "riskscope-ui"; // pinned explicitly (avoid relying on env! during macro domain resolution)

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            eprintln!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

// --- Localized names for the enum domains ---------------------------------
//
// `fl!` wants literal keys, so each domain gets one match. Charts, selects
// and KPI cards all route through these instead of hardcoding English.

pub fn risk_label(level: RiskLevel) -> String {
    match level {
        RiskLevel::Low => t!("risk-low"),
        RiskLevel::Medium => t!("risk-medium"),
        RiskLevel::High => t!("risk-high"),
    }
}

pub fn yes_no_label(answer: YesNo) -> String {
    match answer {
        YesNo::Yes => t!("answer-yes"),
        YesNo::No => t!("answer-no"),
    }
}

pub fn alcohol_label(level: AlcoholUse) -> String {
    match level {
        AlcoholUse::None => t!("alcohol-none"),
        AlcoholUse::Moderate => t!("alcohol-moderate"),
        AlcoholUse::High => t!("alcohol-high"),
    }
}

pub fn diet_label(diet: DietType) -> String {
    match diet {
        DietType::Fatty => t!("diet-fatty"),
        DietType::Mixed => t!("diet-mixed"),
        DietType::Healthy => t!("diet-healthy"),
    }
}

pub fn activity_label(level: ActivityLevel) -> String {
    match level {
        ActivityLevel::Low => t!("activity-low"),
        ActivityLevel::Moderate => t!("activity-moderate"),
        ActivityLevel::High => t!("activity-high"),
    }
}

pub fn stress_label(level: StressLevel) -> String {
    match level {
        StressLevel::Low => t!("stress-low"),
        StressLevel::Medium => t!("stress-medium"),
        StressLevel::High => t!("stress-high"),
    }
}

pub fn attribute_label(attribute: ProfileAttribute) -> String {
    match attribute {
        ProfileAttribute::Age => t!("axis-age"),
        ProfileAttribute::Bmi => t!("axis-bmi"),
        ProfileAttribute::Smoker => t!("axis-smoker"),
        ProfileAttribute::Alcohol => t!("axis-alcohol"),
        ProfileAttribute::Diet => t!("axis-diet"),
        ProfileAttribute::Activity => t!("axis-activity"),
        ProfileAttribute::FamilyHistory => t!("axis-family-history"),
        ProfileAttribute::Stress => t!("axis-stress"),
        ProfileAttribute::SleepHours => t!("axis-sleep"),
        ProfileAttribute::Checkup => t!("axis-checkup"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == "en-US"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "nav-dashboard");
        assert_eq!(s, "Dashboard");
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        init();
        let before = fl!(&*LOADER, "nav-dashboard");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-dashboard");
        assert_eq!(before, after);
    }

    #[test]
    fn domain_labels_resolve_for_every_variant() {
        init();
        for level in RiskLevel::ALL {
            assert!(!risk_label(level).is_empty());
        }
        for attribute in ProfileAttribute::ALL {
            assert!(!attribute_label(attribute).is_empty());
        }
    }
}
