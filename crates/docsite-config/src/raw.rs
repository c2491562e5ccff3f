//! Raw site configuration as handed over by the loading code.
//!
//! Every field is optional so that missing values are reported by
//! [`load_site_config`](crate::load_site_config) with their field path rather
//! than by the deserializer. The records are format-agnostic: JSON, YAML and
//! TOML all deserialize into them.

use serde::Deserialize;

/// Raw top-level site configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSiteConfig {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub favicon: Option<String>,
    pub future: Option<RawFuture>,
    pub url: Option<String>,
    pub base_url: Option<String>,
    pub organization_name: Option<String>,
    pub project_name: Option<String>,
    pub on_broken_links: Option<String>,
    pub on_broken_markdown_links: Option<String>,
    pub i18n: Option<RawI18n>,
    pub presets: Vec<RawPreset>,
    pub theme_config: Option<RawThemeConfig>,
}

/// Raw `future` flags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFuture {
    pub v4: Option<bool>,
}

/// Raw `i18n` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawI18n {
    pub default_locale: Option<String>,
    pub locales: Option<Vec<String>>,
}

/// Raw preset entry: either a bare name or a `[name, options]` pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPreset {
    Name(String),
    WithOptions(String, RawPresetOptions),
}

/// Raw options of a preset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPresetOptions {
    pub docs: Option<RawDocsOptions>,
    pub blog: Option<RawBlogOptions>,
    pub theme: Option<RawThemeOptions>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawDocsOptions {
    pub sidebar_path: Option<String>,
    pub edit_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawBlogOptions {
    pub show_reading_time: Option<bool>,
    pub feed_options: Option<RawFeedOptions>,
    pub edit_url: Option<String>,
    pub on_inline_tags: Option<String>,
    pub on_inline_authors: Option<String>,
    pub on_untruncated_blog_posts: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFeedOptions {
    #[serde(rename = "type")]
    pub kind: Option<RawFeedTypes>,
    pub xslt: Option<bool>,
}

/// Feed formats given as one name or a list of names.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawFeedTypes {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawThemeOptions {
    pub custom_css: Option<String>,
}

/// Raw `themeConfig` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawThemeConfig {
    pub image: Option<String>,
    pub navbar: Option<RawNavbar>,
    pub footer: Option<RawFooter>,
    pub prism: Option<RawPrism>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawNavbar {
    pub title: Option<String>,
    pub logo: Option<RawLogo>,
    pub items: Vec<RawNavbarItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawLogo {
    pub alt: Option<String>,
    pub src: Option<String>,
    pub src_dark: Option<String>,
}

/// Raw navbar item. The `type` decides which of the other fields apply.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawNavbarItem {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub label: Option<String>,
    pub sidebar_id: Option<String>,
    pub doc_id: Option<String>,
    pub to: Option<String>,
    pub href: Option<String>,
    pub position: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFooter {
    pub style: Option<String>,
    pub links: Vec<RawFooterLinkGroup>,
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFooterLinkGroup {
    pub title: Option<String>,
    pub items: Vec<RawLinkItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawLinkItem {
    pub label: Option<String>,
    pub to: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPrism {
    pub theme: Option<String>,
    pub dark_theme: Option<String>,
    pub additional_languages: Vec<String>,
}
