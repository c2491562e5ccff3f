//! Validated site configuration.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::preset::{DocsOptions, Preset};
use crate::raw::{RawFuture, RawI18n, RawPreset, RawSiteConfig};
use crate::theme::ThemeConfig;
use crate::validate::{
    optional, parse_or, require_base_url, require_http_url, require_non_empty, required,
};
use crate::ConfigError;

/// Reaction of the site generator to a broken reference found while building.
///
/// Governs content checks performed by the generator. Structural validation
/// in this crate is always strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ignore,
    Warn,
    Throw,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Throw => "throw",
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore" => Ok(Self::Ignore),
            "warn" => Ok(Self::Warn),
            "throw" => Ok(Self::Throw),
            other => Err(format!("expected one of ignore, warn, throw, got `{other}`")),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Internationalization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfig {
    pub default_locale: String,
    /// Ordered set of locales; always contains `default_locale`.
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_owned(),
            locales: vec!["en".to_owned()],
        }
    }
}

impl I18nConfig {
    fn from_raw(raw: RawI18n, field: &str) -> Result<Self, ConfigError> {
        let default_locale = required(raw.default_locale, &format!("{field}.defaultLocale"))?;
        let locales_field = format!("{field}.locales");
        let locales = raw
            .locales
            .ok_or_else(|| ConfigError::missing(&locales_field))?;

        let mut seen = HashSet::new();
        for (i, locale) in locales.iter().enumerate() {
            let locale_field = format!("{locales_field}[{i}]");
            require_non_empty(locale, &locale_field)?;
            if !seen.insert(locale.as_str()) {
                return Err(ConfigError::new(
                    locale_field,
                    format!("duplicate locale `{locale}`"),
                ));
            }
        }

        if !seen.contains(default_locale.as_str()) {
            return Err(ConfigError::new(
                format!("{field}.defaultLocale"),
                format!("`{default_locale}` must be listed in {locales_field}"),
            ));
        }

        Ok(Self {
            default_locale,
            locales,
        })
    }
}

/// Opt-in flags for upcoming generator behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FutureFlags {
    pub v4: bool,
}

impl From<RawFuture> for FutureFlags {
    fn from(raw: RawFuture) -> Self {
        Self {
            v4: raw.v4.unwrap_or(false),
        }
    }
}

/// Validated site configuration.
///
/// Serializes back to the same camelCase shape accepted by [`RawSiteConfig`],
/// so a loaded configuration can be re-loaded unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    pub future: FutureFlags,
    /// Production URL of the site (scheme and host).
    pub url: String,
    /// Path under which the site is served, `/` delimited on both ends.
    pub base_url: String,
    pub organization_name: String,
    pub project_name: String,
    pub on_broken_links: Severity,
    pub on_broken_markdown_links: Severity,
    pub i18n: I18nConfig,
    pub presets: Vec<Preset>,
    pub theme_config: ThemeConfig,
}

impl SiteConfig {
    /// Validate a raw configuration.
    ///
    /// Stops at the first violation and reports it with its field path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required field is missing or empty, a URL
    /// is malformed, `i18n.defaultLocale` is not in `i18n.locales`, or a link
    /// item sets zero or both of `to` / `href`.
    pub fn load(raw: RawSiteConfig) -> Result<Self, ConfigError> {
        let title = required(raw.title, "title")?;
        let tagline = required(raw.tagline, "tagline")?;
        let favicon = optional(raw.favicon, "favicon")?;

        let url = required(raw.url, "url")?;
        require_http_url(&url, "url")?;
        let base_url = required(raw.base_url, "baseUrl")?;
        require_base_url(&base_url, "baseUrl")?;

        let organization_name = required(raw.organization_name, "organizationName")?;
        let project_name = required(raw.project_name, "projectName")?;

        let on_broken_links =
            parse_or(raw.on_broken_links.as_deref(), Severity::Throw, "onBrokenLinks")?;
        let on_broken_markdown_links = parse_or(
            raw.on_broken_markdown_links.as_deref(),
            Severity::Warn,
            "onBrokenMarkdownLinks",
        )?;

        let i18n = match raw.i18n {
            Some(i18n) => I18nConfig::from_raw(i18n, "i18n")?,
            None => {
                tracing::debug!("i18n not configured, using default locale");
                I18nConfig::default()
            }
        };

        let presets = Self::load_presets(raw.presets)?;
        let theme_config = match raw.theme_config {
            Some(theme) => ThemeConfig::from_raw(theme, "themeConfig")?,
            None => ThemeConfig::default(),
        };

        let config = Self {
            title,
            tagline,
            favicon,
            future: raw.future.map(FutureFlags::from).unwrap_or_default(),
            url,
            base_url,
            organization_name,
            project_name,
            on_broken_links,
            on_broken_markdown_links,
            i18n,
            presets,
            theme_config,
        };

        tracing::debug!(
            title = %config.title,
            presets = config.presets.len(),
            navbar_items = config.theme_config.navbar_items().len(),
            "Loaded site configuration"
        );

        Ok(config)
    }

    fn load_presets(raw: Vec<RawPreset>) -> Result<Vec<Preset>, ConfigError> {
        let mut presets: Vec<Preset> = Vec::with_capacity(raw.len());
        for (i, preset) in raw.into_iter().enumerate() {
            let field = format!("presets[{i}]");
            let preset = Preset::from_raw(preset, &field)?;
            if presets.iter().any(|p| p.name == preset.name) {
                return Err(ConfigError::new(
                    format!("{field}[0]"),
                    format!("duplicate preset `{}`", preset.name),
                ));
            }
            presets.push(preset);
        }
        Ok(presets)
    }

    /// Deserialize and validate an in-memory JSON value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the value does not have the raw shape or fails
    /// validation.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let raw: RawSiteConfig =
            serde_json::from_value(value).map_err(|e| ConfigError::serde(&e))?;
        Self::load(raw)
    }

    /// Serialize back to the raw JSON shape.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_value(&self) -> Result<serde_json::Value, ConfigError> {
        serde_json::to_value(self).map_err(|e| ConfigError::serde(&e))
    }

    /// Re-validate this configuration through its serialized form.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration was modified into an invalid
    /// state after loading.
    pub fn revalidate(&self) -> Result<Self, ConfigError> {
        Self::from_value(self.to_value()?)
    }

    /// Find a preset by name.
    pub fn preset(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    /// Docs options of the first preset that enables docs.
    pub fn docs_options(&self) -> Option<&DocsOptions> {
        self.presets
            .iter()
            .find_map(|preset| preset.options.docs.as_ref())
    }

    /// Sidebar ids referenced by `docSidebar` navbar items, in navbar order.
    pub fn navbar_sidebar_ids(&self) -> impl Iterator<Item = &str> {
        self.theme_config
            .navbar_items()
            .iter()
            .filter_map(|item| item.sidebar_id())
    }
}
