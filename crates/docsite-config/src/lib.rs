//! Site configuration for docsite.
//!
//! Validates the declarative configuration of a static documentation site:
//! identity (title, URLs, deployment identifiers), i18n, presets and the
//! navbar/footer theme. Input arrives as [`RawSiteConfig`], already
//! deserialized from whatever format the caller uses, and is turned into a
//! typed [`SiteConfig`] by [`load_site_config`].
//!
//! ## Validation
//!
//! - `title`, `tagline`, `organizationName`, `projectName` are required and non-empty
//! - `url` is an absolute `http(s)` URL, `baseUrl` starts and ends with `/`
//! - `i18n.defaultLocale` is one of `i18n.locales`, which holds no duplicates
//! - every link item sets exactly one of `to` (internal route) or `href` (URL)
//!
//! Errors name the offending field by its camelCase path in the raw input:
//!
//! ```
//! use docsite_config::{RawSiteConfig, load_site_config};
//!
//! let err = load_site_config(RawSiteConfig::default()).unwrap_err();
//! assert_eq!(err.field(), "title");
//! ```

mod error;
mod preset;
mod raw;
mod site;
mod theme;
pub mod validate;

pub use error::{ConfigError, INPUT_FIELD};
pub use preset::{
    BlogOptions, DocsOptions, FeedFormat, FeedOptions, Preset, PresetOptions, ThemeOptions,
};
pub use raw::{
    RawBlogOptions, RawDocsOptions, RawFeedOptions, RawFeedTypes, RawFooter, RawFooterLinkGroup,
    RawFuture, RawI18n, RawLinkItem, RawLogo, RawNavbar, RawNavbarItem, RawPreset,
    RawPresetOptions, RawPrism, RawSiteConfig, RawThemeConfig, RawThemeOptions,
};
pub use site::{FutureFlags, I18nConfig, Severity, SiteConfig};
pub use theme::{
    Footer, FooterLinkGroup, FooterStyle, LinkItem, LinkTarget, Navbar, NavbarItem,
    NavbarItemKind, NavbarLogo, Position, PrismConfig, ThemeConfig,
};

/// Validate a raw site configuration.
///
/// # Errors
///
/// Returns `ConfigError` for the first missing field, malformed URL,
/// unknown default locale or ambiguous link item.
pub fn load_site_config(raw: RawSiteConfig) -> Result<SiteConfig, ConfigError> {
    SiteConfig::load(raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;

    /// Configuration of the QTick documentation site.
    fn qtick_config() -> Value {
        json!({
            "title": "QTick Documentation",
            "tagline": "Smart QR Attendance Tracking - Simple, Fast, Reliable",
            "favicon": "img/favicon.ico",
            "future": { "v4": true },
            "url": "https://docs.qtick.aadish.dev",
            "baseUrl": "/",
            "organizationName": "aadishsamir123",
            "projectName": "asdev-qtick",
            "onBrokenLinks": "throw",
            "onBrokenMarkdownLinks": "warn",
            "i18n": { "defaultLocale": "en", "locales": ["en"] },
            "presets": [[
                "classic",
                {
                    "docs": {
                        "sidebarPath": "./sidebars.js",
                        "editUrl": "https://github.com/aadishsamir123/asdev-qtick/tree/main/docs/"
                    },
                    "blog": {
                        "showReadingTime": true,
                        "feedOptions": { "type": ["rss", "atom"], "xslt": true },
                        "editUrl": "https://github.com/aadishsamir123/asdev-qtick/tree/main/docs/",
                        "onInlineTags": "warn",
                        "onInlineAuthors": "warn",
                        "onUntruncatedBlogPosts": "warn"
                    },
                    "theme": { "customCss": "./src/css/custom.css" }
                }
            ]],
            "themeConfig": {
                "image": "img/qtick-logo.png",
                "navbar": {
                    "title": "QTick",
                    "logo": {
                        "alt": "QTick Logo",
                        "src": "img/qtick-logo.png",
                        "srcDark": "img/qtick-logo.png"
                    },
                    "items": [
                        {
                            "type": "docSidebar",
                            "sidebarId": "tutorialSidebar",
                            "position": "left",
                            "label": "Documentation"
                        },
                        {
                            "href": "https://github.com/aadishsamir123/asdev-qtick",
                            "label": "GitHub",
                            "position": "right"
                        },
                        {
                            "href": "https://github.com/aadishsamir123/asdev-qtick/releases",
                            "label": "Download",
                            "position": "right"
                        }
                    ]
                },
                "footer": {
                    "style": "dark",
                    "links": [
                        {
                            "title": "Documentation",
                            "items": [
                                { "label": "Getting Started", "to": "/docs/getting-started" },
                                { "label": "User Guide", "to": "/docs/user-guide" }
                            ]
                        },
                        {
                            "title": "Community",
                            "items": [
                                {
                                    "label": "Issues",
                                    "href": "https://github.com/aadishsamir123/asdev-qtick/issues"
                                }
                            ]
                        },
                        {
                            "title": "More",
                            "items": [{ "label": "Release Notes", "to": "/blog" }]
                        }
                    ],
                    "copyright": "Copyright © 2025 Aadish Samir. Built with Docusaurus."
                },
                "prism": { "theme": "github", "darkTheme": "dracula" }
            }
        })
    }

    fn load(value: Value) -> Result<SiteConfig, ConfigError> {
        SiteConfig::from_value(value)
    }

    /// Assert that loading fails on `field` with all expected substrings.
    fn assert_config_error(value: Value, field: &str, expected_substrings: &[&str]) {
        let result = load(value);
        assert!(result.is_err(), "Expected loading to fail on {field}");
        let err = result.unwrap_err();
        assert_eq!(err.field(), field, "unexpected field in {err}");
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_load_qtick_config() {
        let config = load(qtick_config()).unwrap();

        assert_eq!(config.title, "QTick Documentation");
        assert_eq!(config.base_url, "/");
        assert_eq!(config.on_broken_links, Severity::Throw);
        assert_eq!(config.on_broken_markdown_links, Severity::Warn);
        assert!(config.future.v4);
        assert_eq!(config.i18n, I18nConfig::default());

        let classic = config.preset("classic").unwrap();
        let blog = classic.options.blog.as_ref().unwrap();
        assert!(blog.show_reading_time);
        assert_eq!(blog.feed_options.formats, vec![FeedFormat::Rss, FeedFormat::Atom]);
        assert_eq!(
            config.docs_options().unwrap().sidebar_path.as_deref(),
            Some("./sidebars.js")
        );

        let items = config.theme_config.navbar_items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].position, Position::Right);
        assert_eq!(
            config.navbar_sidebar_ids().collect::<Vec<_>>(),
            vec!["tutorialSidebar"]
        );

        let footer = config.theme_config.footer.as_ref().unwrap();
        assert_eq!(footer.style, FooterStyle::Dark);
        assert_eq!(footer.links.len(), 3);
        assert!(footer.links[0].items[0].target.is_internal());
        assert_eq!(config.theme_config.prism.dark_theme.as_deref(), Some("dracula"));
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config = load(json!({
            "title": "Docs",
            "tagline": "Reference",
            "url": "https://docs.example.com",
            "baseUrl": "/docs/",
            "organizationName": "example",
            "projectName": "docs"
        }))
        .unwrap();

        assert_eq!(config.on_broken_links, Severity::Throw);
        assert_eq!(config.on_broken_markdown_links, Severity::Warn);
        assert_eq!(config.i18n.default_locale, "en");
        assert!(config.presets.is_empty());
        assert_eq!(config.theme_config, ThemeConfig::default());
        assert!(!config.future.v4);
    }

    #[test]
    fn test_revalidate_is_idempotent() {
        let config = load(qtick_config()).unwrap();
        let again = config.revalidate().unwrap();
        assert_eq!(again, config);
        assert_eq!(again.revalidate().unwrap(), again);
    }

    #[test]
    fn test_json_round_trip() {
        let config = load(qtick_config()).unwrap();
        let text = serde_json::to_string_pretty(&config).unwrap();
        let raw: RawSiteConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(load_site_config(raw).unwrap(), config);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut value = qtick_config();
        value["presets"] = json!([]);
        let config = load(value).unwrap();

        let text = toml::to_string(&config).unwrap();
        let raw: RawSiteConfig = toml::from_str(&text).unwrap();
        assert_eq!(load_site_config(raw).unwrap(), config);
    }

    #[test]
    fn test_missing_title() {
        let mut value = qtick_config();
        value.as_object_mut().unwrap().remove("title");
        assert_config_error(value, "title", &["required"]);
    }

    #[test]
    fn test_empty_tagline() {
        let mut value = qtick_config();
        value["tagline"] = json!("");
        assert_config_error(value, "tagline", &["empty"]);
    }

    #[test]
    fn test_missing_project_name() {
        let mut value = qtick_config();
        value.as_object_mut().unwrap().remove("projectName");
        assert_config_error(value, "projectName", &["required"]);
    }

    #[test]
    fn test_relative_url_rejected() {
        let mut value = qtick_config();
        value["url"] = json!("docs.qtick.aadish.dev");
        assert_config_error(value, "url", &["invalid URL"]);
    }

    #[test]
    fn test_base_url_without_trailing_slash() {
        let mut value = qtick_config();
        value["baseUrl"] = json!("/asdev-qtick");
        assert_config_error(value, "baseUrl", &["'/'"]);
    }

    #[test]
    fn test_invalid_broken_links_severity() {
        let mut value = qtick_config();
        value["onBrokenLinks"] = json!("panic");
        assert_config_error(value, "onBrokenLinks", &["ignore, warn, throw"]);
    }

    #[test]
    fn test_default_locale_not_in_locales() {
        let mut value = qtick_config();
        value["i18n"] = json!({ "defaultLocale": "fr", "locales": ["en", "de"] });
        assert_config_error(value, "i18n.defaultLocale", &["`fr`", "i18n.locales"]);
    }

    #[test]
    fn test_duplicate_locale() {
        let mut value = qtick_config();
        value["i18n"] = json!({ "defaultLocale": "en", "locales": ["en", "de", "en"] });
        assert_config_error(value, "i18n.locales[2]", &["duplicate"]);
    }

    #[test]
    fn test_i18n_locales_required() {
        let mut value = qtick_config();
        value["i18n"] = json!({ "defaultLocale": "en" });
        assert_config_error(value, "i18n.locales", &["required"]);
    }

    #[test]
    fn test_navbar_item_with_to_and_href() {
        let mut value = qtick_config();
        value["themeConfig"]["navbar"]["items"][1]["to"] = json!("/github");
        assert_config_error(
            value,
            "themeConfig.navbar.items[1]",
            &["mutually exclusive"],
        );
    }

    #[test]
    fn test_navbar_item_without_target() {
        let mut value = qtick_config();
        value["themeConfig"]["navbar"]["items"][2]
            .as_object_mut()
            .unwrap()
            .remove("href");
        assert_config_error(value, "themeConfig.navbar.items[2]", &["required"]);
    }

    #[test]
    fn test_footer_item_with_to_and_href() {
        let mut value = qtick_config();
        value["themeConfig"]["footer"]["links"][1]["items"][0]["to"] = json!("/issues");
        assert_config_error(
            value,
            "themeConfig.footer.links[1].items[0]",
            &["mutually exclusive"],
        );
    }

    #[test]
    fn test_footer_item_without_target() {
        let mut value = qtick_config();
        value["themeConfig"]["footer"]["links"][2]["items"][0]
            .as_object_mut()
            .unwrap()
            .remove("to");
        assert_config_error(value, "themeConfig.footer.links[2].items[0]", &["required"]);
    }

    #[test]
    fn test_duplicate_preset() {
        let mut value = qtick_config();
        value["presets"] = json!(["classic", ["classic", {}]]);
        assert_config_error(value, "presets[1][0]", &["duplicate preset"]);
    }

    #[test]
    fn test_wrong_shape_reports_input() {
        let mut value = qtick_config();
        value["presets"] = json!("classic");
        assert_config_error(value, INPUT_FIELD, &[]);
    }
}
