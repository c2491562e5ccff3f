//! `themeConfig`: social card, navbar, footer and syntax highlighting.
//!
//! Link-shaped items (navbar links and footer items) carry exactly one
//! [`LinkTarget`]: an internal route (`to`) or an external URL (`href`).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::ConfigError;
use crate::raw::{
    RawFooter, RawFooterLinkGroup, RawLinkItem, RawLogo, RawNavbar, RawNavbarItem, RawPrism,
    RawThemeConfig,
};
use crate::validate::{
    optional, parse_or, require_absolute_url, require_non_empty, require_route, required,
};

/// Theme configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    /// Social card image path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navbar: Option<Navbar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    pub prism: PrismConfig,
}

impl ThemeConfig {
    pub(crate) fn from_raw(raw: RawThemeConfig, field: &str) -> Result<Self, ConfigError> {
        let navbar = raw
            .navbar
            .map(|navbar| Navbar::from_raw(navbar, &format!("{field}.navbar")))
            .transpose()?;
        let footer = raw
            .footer
            .map(|footer| Footer::from_raw(footer, &format!("{field}.footer")))
            .transpose()?;
        let prism = match raw.prism {
            Some(prism) => PrismConfig::from_raw(prism, &format!("{field}.prism"))?,
            None => PrismConfig::default(),
        };

        Ok(Self {
            image: optional(raw.image, &format!("{field}.image"))?,
            navbar,
            footer,
            prism,
        })
    }

    /// Navbar items, empty when no navbar is configured.
    pub fn navbar_items(&self) -> &[NavbarItem] {
        match &self.navbar {
            Some(navbar) => &navbar.items,
            None => &[],
        }
    }

    /// All footer link items across every link group, in declaration order.
    pub fn footer_items(&self) -> impl Iterator<Item = &LinkItem> {
        self.footer
            .iter()
            .flat_map(|footer| &footer.links)
            .flat_map(|group| &group.items)
    }
}

/// Navbar shown at the top of every page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Navbar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<NavbarLogo>,
    pub items: Vec<NavbarItem>,
}

impl Navbar {
    fn from_raw(raw: RawNavbar, field: &str) -> Result<Self, ConfigError> {
        let logo = raw
            .logo
            .map(|logo| NavbarLogo::from_raw(logo, &format!("{field}.logo")))
            .transpose()?;
        let items = raw
            .items
            .into_iter()
            .enumerate()
            .map(|(i, item)| NavbarItem::from_raw(item, &format!("{field}.items[{i}]")))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            title: optional(raw.title, &format!("{field}.title"))?,
            logo,
            items,
        })
    }
}

/// Navbar logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarLogo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    pub src: String,
    /// Logo used in dark mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_dark: Option<String>,
}

impl NavbarLogo {
    fn from_raw(raw: RawLogo, field: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            alt: raw.alt,
            src: required(raw.src, &format!("{field}.src"))?,
            src_dark: optional(raw.src_dark, &format!("{field}.srcDark"))?,
        })
    }
}

/// Side of the navbar an item is placed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Left,
    Right,
}

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(format!("expected one of left, right, got `{other}`")),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination of a link item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTarget {
    /// Internal route, e.g. `/docs/intro`.
    To(String),
    /// External URL.
    Href(String),
}

impl LinkTarget {
    /// Resolve the `{to, href}` pair of a raw item; exactly one must be set.
    fn from_raw(to: Option<String>, href: Option<String>, field: &str) -> Result<Self, ConfigError> {
        match (to, href) {
            (Some(to), None) => {
                let to_field = format!("{field}.to");
                require_non_empty(&to, &to_field)?;
                require_route(&to, &to_field)?;
                Ok(Self::To(to))
            }
            (None, Some(href)) => {
                let href_field = format!("{field}.href");
                require_non_empty(&href, &href_field)?;
                require_absolute_url(&href, &href_field)?;
                Ok(Self::Href(href))
            }
            (Some(_), Some(_)) => Err(ConfigError::new(
                field,
                "`to` and `href` are mutually exclusive, set exactly one",
            )),
            (None, None) => Err(ConfigError::new(field, "one of `to` or `href` is required")),
        }
    }

    /// True for internal routes.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::To(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::To(value) | Self::Href(value) => value,
        }
    }
}

/// Labeled link used by footers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkItem {
    pub label: String,
    #[serde(flatten)]
    pub target: LinkTarget,
}

impl LinkItem {
    fn from_raw(raw: RawLinkItem, field: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            label: required(raw.label, &format!("{field}.label"))?,
            target: LinkTarget::from_raw(raw.to, raw.href, field)?,
        })
    }
}

/// Navbar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarItem {
    /// Display label. Required for links; sidebar and doc references fall
    /// back to the referenced title.
    pub label: Option<String>,
    pub position: Position,
    pub kind: NavbarItemKind,
}

/// What a navbar entry points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavbarItemKind {
    /// `type: "docSidebar"`: first document of a sidebar.
    DocSidebar { sidebar_id: String },
    /// `type: "doc"`: a single document.
    Doc { doc_id: String },
    /// Plain link (no `type`, or `type: "default"`).
    Link(LinkTarget),
}

impl NavbarItem {
    fn from_raw(raw: RawNavbarItem, field: &str) -> Result<Self, ConfigError> {
        let position = parse_or(
            raw.position.as_deref(),
            Position::default(),
            &format!("{field}.position"),
        )?;
        let label_field = format!("{field}.label");

        let (label, kind) = match raw.kind.as_deref() {
            Some(kind @ ("docSidebar" | "doc")) => {
                if raw.to.is_some() || raw.href.is_some() {
                    return Err(ConfigError::new(
                        field,
                        format!("{kind} items cannot set `to` or `href`"),
                    ));
                }
                let kind = if kind == "docSidebar" {
                    NavbarItemKind::DocSidebar {
                        sidebar_id: required(raw.sidebar_id, &format!("{field}.sidebarId"))?,
                    }
                } else {
                    NavbarItemKind::Doc {
                        doc_id: required(raw.doc_id, &format!("{field}.docId"))?,
                    }
                };
                (optional(raw.label, &label_field)?, kind)
            }
            None | Some("default") => {
                let label = required(raw.label, &label_field)?;
                let target = LinkTarget::from_raw(raw.to, raw.href, field)?;
                (Some(label), NavbarItemKind::Link(target))
            }
            Some(other) => {
                return Err(ConfigError::new(
                    format!("{field}.type"),
                    format!("unsupported navbar item type `{other}`, expected docSidebar, doc or default"),
                ));
            }
        };

        Ok(Self {
            label,
            position,
            kind,
        })
    }

    /// Sidebar referenced by a `docSidebar` item.
    pub fn sidebar_id(&self) -> Option<&str> {
        match &self.kind {
            NavbarItemKind::DocSidebar { sidebar_id } => Some(sidebar_id),
            _ => None,
        }
    }

    /// Document referenced by a `doc` item.
    pub fn doc_id(&self) -> Option<&str> {
        match &self.kind {
            NavbarItemKind::Doc { doc_id } => Some(doc_id),
            _ => None,
        }
    }
}

impl Serialize for NavbarItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match &self.kind {
            NavbarItemKind::DocSidebar { sidebar_id } => {
                map.serialize_entry("type", "docSidebar")?;
                map.serialize_entry("sidebarId", sidebar_id)?;
            }
            NavbarItemKind::Doc { doc_id } => {
                map.serialize_entry("type", "doc")?;
                map.serialize_entry("docId", doc_id)?;
            }
            NavbarItemKind::Link(LinkTarget::To(to)) => map.serialize_entry("to", to)?,
            NavbarItemKind::Link(LinkTarget::Href(href)) => map.serialize_entry("href", href)?,
        }
        if let Some(label) = &self.label {
            map.serialize_entry("label", label)?;
        }
        map.serialize_entry("position", &self.position)?;
        map.end()
    }
}

/// Footer color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

impl FromStr for FooterStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("expected one of light, dark, got `{other}`")),
        }
    }
}

/// Page footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub style: FooterStyle,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<FooterLinkGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl Footer {
    fn from_raw(raw: RawFooter, field: &str) -> Result<Self, ConfigError> {
        let style = parse_or(
            raw.style.as_deref(),
            FooterStyle::default(),
            &format!("{field}.style"),
        )?;
        let links = raw
            .links
            .into_iter()
            .enumerate()
            .map(|(i, group)| FooterLinkGroup::from_raw(group, &format!("{field}.links[{i}]")))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            style,
            links,
            copyright: optional(raw.copyright, &format!("{field}.copyright"))?,
        })
    }
}

/// Titled column of footer links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLinkGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<LinkItem>,
}

impl FooterLinkGroup {
    fn from_raw(raw: RawFooterLinkGroup, field: &str) -> Result<Self, ConfigError> {
        let items = raw
            .items
            .into_iter()
            .enumerate()
            .map(|(i, item)| LinkItem::from_raw(item, &format!("{field}.items[{i}]")))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            title: optional(raw.title, &format!("{field}.title"))?,
            items,
        })
    }
}

/// Syntax highlighting themes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrismConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_theme: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_languages: Vec<String>,
}

impl PrismConfig {
    fn from_raw(raw: RawPrism, field: &str) -> Result<Self, ConfigError> {
        for (i, language) in raw.additional_languages.iter().enumerate() {
            require_non_empty(language, &format!("{field}.additionalLanguages[{i}]"))?;
        }

        Ok(Self {
            theme: optional(raw.theme, &format!("{field}.theme"))?,
            dark_theme: optional(raw.dark_theme, &format!("{field}.darkTheme"))?,
            additional_languages: raw.additional_languages,
        })
    }
}
