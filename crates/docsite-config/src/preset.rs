//! Presets bundle the docs, blog and theme options of the site generator.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::raw::{
    RawBlogOptions, RawDocsOptions, RawFeedOptions, RawFeedTypes, RawPreset, RawPresetOptions,
    RawThemeOptions,
};
use crate::validate::{optional, parse_or, require_absolute_url, require_non_empty};
use crate::{ConfigError, Severity};

/// A named preset with its options, serialized as a `[name, options]` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: String,
    pub options: PresetOptions,
}

impl Preset {
    pub(crate) fn from_raw(raw: RawPreset, field: &str) -> Result<Self, ConfigError> {
        let (name, options) = match raw {
            RawPreset::Name(name) => (name, RawPresetOptions::default()),
            RawPreset::WithOptions(name, options) => (name, options),
        };
        require_non_empty(&name, &format!("{field}[0]"))?;

        Ok(Self {
            name,
            options: PresetOptions::from_raw(options, &format!("{field}[1]"))?,
        })
    }
}

impl Serialize for Preset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.name, &self.options).serialize(serializer)
    }
}

/// Options of a preset. Absent sections are disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PresetOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<DocsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<BlogOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeOptions>,
}

impl PresetOptions {
    fn from_raw(raw: RawPresetOptions, field: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            docs: raw
                .docs
                .map(|docs| DocsOptions::from_raw(docs, &format!("{field}.docs")))
                .transpose()?,
            blog: raw
                .blog
                .map(|blog| BlogOptions::from_raw(blog, &format!("{field}.blog")))
                .transpose()?,
            theme: raw
                .theme
                .map(|theme| ThemeOptions::from_raw(theme, &format!("{field}.theme")))
                .transpose()?,
        })
    }
}

/// Documentation rendering options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsOptions {
    /// Path of the sidebar declaration file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_path: Option<String>,
    /// Base URL of "edit this page" links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
}

impl DocsOptions {
    fn from_raw(raw: RawDocsOptions, field: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            sidebar_path: optional(raw.sidebar_path, &format!("{field}.sidebarPath"))?,
            edit_url: edit_url(raw.edit_url, &format!("{field}.editUrl"))?,
        })
    }
}

/// Blog rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogOptions {
    pub show_reading_time: bool,
    pub feed_options: FeedOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    /// Reaction to tags declared inline instead of in the tags file.
    pub on_inline_tags: Severity,
    /// Reaction to authors declared inline instead of in the authors file.
    pub on_inline_authors: Severity,
    /// Reaction to posts without a truncation marker.
    pub on_untruncated_blog_posts: Severity,
}

impl Default for BlogOptions {
    fn default() -> Self {
        Self {
            show_reading_time: false,
            feed_options: FeedOptions::default(),
            edit_url: None,
            on_inline_tags: Severity::Warn,
            on_inline_authors: Severity::Warn,
            on_untruncated_blog_posts: Severity::Warn,
        }
    }
}

impl BlogOptions {
    fn from_raw(raw: RawBlogOptions, field: &str) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let feed_options = match raw.feed_options {
            Some(feed) => FeedOptions::from_raw(feed, &format!("{field}.feedOptions"))?,
            None => defaults.feed_options,
        };

        Ok(Self {
            show_reading_time: raw.show_reading_time.unwrap_or(defaults.show_reading_time),
            feed_options,
            edit_url: edit_url(raw.edit_url, &format!("{field}.editUrl"))?,
            on_inline_tags: parse_or(
                raw.on_inline_tags.as_deref(),
                defaults.on_inline_tags,
                &format!("{field}.onInlineTags"),
            )?,
            on_inline_authors: parse_or(
                raw.on_inline_authors.as_deref(),
                defaults.on_inline_authors,
                &format!("{field}.onInlineAuthors"),
            )?,
            on_untruncated_blog_posts: parse_or(
                raw.on_untruncated_blog_posts.as_deref(),
                defaults.on_untruncated_blog_posts,
                &format!("{field}.onUntruncatedBlogPosts"),
            )?,
        })
    }
}

/// Blog feed generation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedOptions {
    /// Formats to generate, without duplicates. Empty disables feeds.
    #[serde(rename = "type")]
    pub formats: Vec<FeedFormat>,
    /// Whether feeds ship with XSLT stylesheets.
    pub xslt: bool,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            formats: vec![FeedFormat::Rss, FeedFormat::Atom],
            xslt: false,
        }
    }
}

impl FeedOptions {
    fn from_raw(raw: RawFeedOptions, field: &str) -> Result<Self, ConfigError> {
        let type_field = format!("{field}.type");
        let formats = match raw.kind {
            None => Self::default().formats,
            Some(RawFeedTypes::One(name)) => {
                let mut formats = Vec::new();
                push_feed_format(&mut formats, &name, &type_field)?;
                formats
            }
            Some(RawFeedTypes::Many(names)) => {
                let mut formats = Vec::new();
                for (i, name) in names.iter().enumerate() {
                    push_feed_format(&mut formats, name, &format!("{type_field}[{i}]"))?;
                }
                formats
            }
        };

        Ok(Self {
            formats,
            xslt: raw.xslt.unwrap_or(false),
        })
    }
}

/// Append a feed format by name, expanding `all` and skipping duplicates.
fn push_feed_format(
    formats: &mut Vec<FeedFormat>,
    name: &str,
    field: &str,
) -> Result<(), ConfigError> {
    let expanded = if name == "all" {
        FeedFormat::ALL.to_vec()
    } else {
        vec![name.parse().map_err(|e: String| ConfigError::new(field, e))?]
    };
    for format in expanded {
        if !formats.contains(&format) {
            formats.push(format);
        }
    }
    Ok(())
}

/// Blog feed format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    Rss,
    Atom,
    Json,
}

impl FeedFormat {
    const ALL: [Self; 3] = [Self::Rss, Self::Atom, Self::Json];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rss => "rss",
            Self::Atom => "atom",
            Self::Json => "json",
        }
    }
}

impl FromStr for FeedFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rss" => Ok(Self::Rss),
            "atom" => Ok(Self::Atom),
            "json" => Ok(Self::Json),
            other => Err(format!("expected one of rss, atom, json, all, got `{other}`")),
        }
    }
}

impl fmt::Display for FeedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme options of a preset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
}

impl ThemeOptions {
    fn from_raw(raw: RawThemeOptions, field: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            custom_css: optional(raw.custom_css, &format!("{field}.customCss"))?,
        })
    }
}

fn edit_url(value: Option<String>, field: &str) -> Result<Option<String>, ConfigError> {
    let value = optional(value, field)?;
    if let Some(ref url) = value {
        require_absolute_url(url, field)?;
    }
    Ok(value)
}
