//! Localization catalog
//!
//! Immutable translation data built once at startup (from the embedded
//! tables or a JSON file) and passed explicitly, behind an `Arc`, to every
//! component that localizes output.
//!
//! Every lookup falls back to English, then to a neutral default; none fail.

use serde::{Deserialize, Serialize};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use super::tables;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Supported language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub rtl: bool,
}

/// Writing direction of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

type ByLanguage<T> = FxHashMap<String, T>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizationCatalog {
    languages: Vec<Language>,
    /// term key → language → text
    terms: FxHashMap<String, ByLanguage<String>>,
    /// English phrase → language → text
    phrases: FxHashMap<String, ByLanguage<String>>,
    /// region → event key → language → alert text
    regional_alerts: FxHashMap<String, FxHashMap<String, ByLanguage<String>>>,
    /// event key → language → actions
    recommendations: FxHashMap<String, ByLanguage<Vec<String>>>,
    /// state → factors
    regional_factors: FxHashMap<String, Vec<String>>,
    default_regional_factors: Vec<String>,
    /// aspect key → language → guidance
    #[serde(default)]
    ethical_guidance: FxHashMap<String, ByLanguage<String>>,
    #[serde(default = "default_ethical_guidance")]
    default_ethical_guidance: String,
    /// region → language → sectors
    #[serde(default)]
    economic_sectors: FxHashMap<String, ByLanguage<Vec<String>>>,
    #[serde(default = "default_economic_sectors")]
    default_economic_sectors: Vec<String>,
    /// language → resources
    #[serde(default)]
    community_resources: ByLanguage<Vec<String>>,
}

fn default_ethical_guidance() -> String {
    tables::DEFAULT_ETHICAL_GUIDANCE.to_string()
}

fn default_economic_sectors() -> Vec<String> {
    owned_list(tables::DEFAULT_ECONOMIC_SECTORS)
}

fn owned_translations(entries: tables::Translations) -> ByLanguage<String> {
    entries
        .iter()
        .map(|(lang, text)| (lang.to_string(), text.to_string()))
        .collect()
}

fn owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn owned_lists(by_lang: &[(&str, &[&str])]) -> ByLanguage<Vec<String>> {
    by_lang
        .iter()
        .map(|(lang, items)| (lang.to_string(), owned_list(items)))
        .collect()
}

/// `language`, else English, else nothing
fn pick<'a, T>(by_lang: &'a ByLanguage<T>, language: &str) -> Option<&'a T> {
    by_lang.get(language).or_else(|| by_lang.get(DEFAULT_LANGUAGE))
}

/// Event types are matched on their lower-cased form ("Cyclone" → "cyclone")
fn event_key(event_type: &str) -> String {
    event_type.trim().to_lowercase()
}

impl LocalizationCatalog {
    /// Build the catalog from the embedded tables
    pub fn builtin() -> Self {
        let languages = tables::LANGUAGES
            .iter()
            .map(|l| Language {
                code: l.code.to_string(),
                name: l.name.to_string(),
                native_name: l.native_name.to_string(),
                rtl: l.rtl,
            })
            .collect();

        let terms = tables::TERMS
            .iter()
            .map(|(key, entries)| (key.to_string(), owned_translations(entries)))
            .collect();

        let phrases = tables::PHRASES
            .iter()
            .map(|(phrase, entries)| (phrase.to_string(), owned_translations(entries)))
            .collect();

        let mut regional_alerts: FxHashMap<String, FxHashMap<String, ByLanguage<String>>> = FxHashMap::default();
        for (region, event, entries) in tables::REGIONAL_ALERTS {
            regional_alerts
                .entry(region.to_string())
                .or_default()
                .insert(event.to_string(), owned_translations(entries));
        }

        let recommendations = tables::RECOMMENDATIONS
            .iter()
            .map(|(event, by_lang)| (event.to_string(), owned_lists(by_lang)))
            .collect();

        let regional_factors = tables::REGIONAL_FACTORS
            .iter()
            .map(|(state, factors)| (state.to_string(), owned_list(factors)))
            .collect();

        Self {
            languages,
            terms,
            phrases,
            regional_alerts,
            recommendations,
            regional_factors,
            default_regional_factors: owned_list(tables::DEFAULT_REGIONAL_FACTORS),
            ethical_guidance: tables::ETHICAL_GUIDANCE
                .iter()
                .map(|(aspect, entries)| (aspect.to_string(), owned_translations(entries)))
                .collect(),
            default_ethical_guidance: default_ethical_guidance(),
            economic_sectors: tables::ECONOMIC_SECTORS
                .iter()
                .map(|(region, by_lang)| (region.to_string(), owned_lists(by_lang)))
                .collect(),
            default_economic_sectors: default_economic_sectors(),
            community_resources: owned_lists(tables::COMMUNITY_RESOURCES),
        }
    }

    /// Load a catalog from a JSON file (same shape as `builtin()` serializes to)
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read localization file: {:?}", path))?;

        let catalog: LocalizationCatalog = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse localization JSON: {:?}", path))?;

        if !catalog.is_supported(DEFAULT_LANGUAGE) {
            anyhow::bail!("Localization file {:?} must include the '{}' language", path, DEFAULT_LANGUAGE);
        }

        Ok(catalog)
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.languages.iter().any(|l| l.code == code)
    }

    /// The language to localize into: `requested` if supported, else English
    pub fn resolve_language<'a>(&self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(code) if self.is_supported(code) => code,
            Some(code) => {
                tracing::debug!("Unsupported language '{}', falling back to {}", code, DEFAULT_LANGUAGE);
                DEFAULT_LANGUAGE
            }
            None => DEFAULT_LANGUAGE,
        }
    }

    pub fn language_direction(&self, code: &str) -> TextDirection {
        match self.languages.iter().find(|l| l.code == code) {
            Some(l) if l.rtl => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }

    /// Translate a term key. Falls back to English, then to the key itself.
    pub fn translate(&self, key: &str, language: &str) -> String {
        let Some(entries) = self.terms.get(key) else {
            return key.to_string();
        };

        pick(entries, language)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Translate an English risk phrase ("High Risk"). Unknown phrases and
    /// languages return the phrase unchanged.
    pub fn translate_phrase(&self, phrase: &str, language: &str) -> String {
        self.phrases
            .get(phrase)
            .and_then(|entries| entries.get(language))
            .cloned()
            .unwrap_or_else(|| phrase.to_string())
    }

    /// Region-specific alert text for an event, if one exists.
    ///
    /// The region must match exactly; the event type is matched lower-cased.
    pub fn regional_alert(&self, region: &str, event_type: &str, language: &str) -> Option<String> {
        let entries = self
            .regional_alerts
            .get(region)?
            .get(&event_key(event_type))?;

        pick(entries, language).cloned()
    }

    /// Localized safety actions for an event type (empty when none are known)
    pub fn localized_recommendations(&self, event_type: &str, language: &str) -> Vec<String> {
        let Some(by_lang) = self.recommendations.get(&event_key(event_type)) else {
            return Vec::new();
        };

        pick(by_lang, language).cloned().unwrap_or_default()
    }

    /// Vulnerability factors for the region's state (text after the first comma)
    pub fn regional_factors(&self, region: &str) -> Vec<String> {
        region
            .split_once(',')
            .map(|(_, state)| state.trim())
            .and_then(|state| self.regional_factors.get(state))
            .cloned()
            .unwrap_or_else(|| self.default_regional_factors.clone())
    }

    /// Guidance text for an ethical aspect ("vulnerablePopulations" etc.)
    pub fn ethical_guidance(&self, aspect: &str, language: &str) -> String {
        self.ethical_guidance
            .get(aspect)
            .and_then(|entries| pick(entries, language))
            .cloned()
            .unwrap_or_else(|| self.default_ethical_guidance.clone())
    }

    /// Main economic sectors of a region (exact match), or a generic profile
    pub fn economic_sectors(&self, region: &str, language: &str) -> Vec<String> {
        self.economic_sectors
            .get(region)
            .and_then(|by_lang| pick(by_lang, language))
            .cloned()
            .unwrap_or_else(|| self.default_economic_sectors.clone())
    }

    /// Shelter and relief resources typically available to a community
    pub fn community_resources(&self, language: &str) -> Vec<String> {
        pick(&self.community_resources, language).cloned().unwrap_or_default()
    }
}

impl Default for LocalizationCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
