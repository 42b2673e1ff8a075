//! Page Registry
//!
//! The fixed set of portfolio sections, in navigation order, with the
//! display name, icon and accent color shown in the tab bar. Theme family
//! derivation lives here too so that adding a page is a single edit that the
//! compiler checks for completeness.

use thiserror::Error;

/// Accent used when a descriptor lookup or color parse misses (`#00d068`)
pub const FALLBACK_ACCENT: (u8, u8, u8) = (0, 208, 104);

/// Portfolio section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    About,
    Education,
    Work,
    Projects,
    Resume,
    Blogs,
    Research,
    Contact,
}

/// Static description of a page as shown in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    pub page: Page,
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Navigation order
pub const PAGES: [PageDescriptor; 8] = [
    PageDescriptor { page: Page::About, id: "about", name: "About", icon: "👨‍💻", color: "#00d068" },
    PageDescriptor { page: Page::Education, id: "education", name: "Education", icon: "🎓", color: "#007cf0" },
    PageDescriptor { page: Page::Work, id: "work", name: "Work Experience", icon: "💼", color: "#7f00ff" },
    PageDescriptor { page: Page::Projects, id: "projects", name: "Projects", icon: "🚀", color: "#00ffff" },
    PageDescriptor { page: Page::Resume, id: "resume", name: "Resume", icon: "📄", color: "#ff6b35" },
    PageDescriptor { page: Page::Blogs, id: "blogs", name: "Blogs", icon: "📝", color: "#ec008c" },
    PageDescriptor { page: Page::Research, id: "research", name: "Research", icon: "🔬", color: "#ffa040" },
    PageDescriptor { page: Page::Contact, id: "contact", name: "Contact", icon: "📞", color: "#1484cd" },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("unknown page identifier `{0}`")]
    UnknownPage(String),
}

/// Color/style grouping derived from the selected page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFamily {
    Emerald,
    ElectricBlue,
    Purple,
    Cyan,
    Orange,
    Pink,
    Coral,
    DeepBlue,
}

impl ThemeFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeFamily::Emerald => "emerald",
            ThemeFamily::ElectricBlue => "electric-blue",
            ThemeFamily::Purple => "purple",
            ThemeFamily::Cyan => "cyan",
            ThemeFamily::Orange => "orange",
            ThemeFamily::Pink => "pink",
            ThemeFamily::Coral => "coral",
            ThemeFamily::DeepBlue => "deep-blue",
        }
    }
}

impl Page {
    /// Look up a page by its stable identifier
    pub fn from_id(id: &str) -> Option<Page> {
        PAGES.iter().find(|d| d.id == id).map(|d| d.page)
    }

    /// Registry entry for this page, if registered
    pub fn descriptor(self) -> Option<&'static PageDescriptor> {
        PAGES.iter().find(|d| d.page == self)
    }

    /// Position in navigation order
    pub fn index(self) -> Option<usize> {
        PAGES.iter().position(|d| d.page == self)
    }

    pub fn id(self) -> &'static str {
        self.descriptor().map(|d| d.id).unwrap_or("about")
    }

    pub fn name(self) -> &'static str {
        self.descriptor().map(|d| d.name).unwrap_or("About")
    }

    pub fn icon(self) -> &'static str {
        self.descriptor().map(|d| d.icon).unwrap_or("")
    }

    /// Accent color as RGB, falling back to [`FALLBACK_ACCENT`]
    pub fn accent_rgb(self) -> (u8, u8, u8) {
        self.descriptor()
            .and_then(|d| parse_hex_color(d.color))
            .unwrap_or(FALLBACK_ACCENT)
    }
}

/// Map a page to its theme family
pub fn theme_family(page: Page) -> ThemeFamily {
    match page {
        Page::About => ThemeFamily::Emerald,
        Page::Education => ThemeFamily::ElectricBlue,
        Page::Work => ThemeFamily::Purple,
        Page::Projects => ThemeFamily::Cyan,
        Page::Resume => ThemeFamily::Orange,
        Page::Blogs => ThemeFamily::Pink,
        Page::Research => ThemeFamily::Coral,
        Page::Contact => ThemeFamily::DeepBlue,
    }
}

/// String-keyed theme family lookup
///
/// Fails with [`PageError::UnknownPage`] when `id` is not registered.
pub fn theme_family_for_id(id: &str) -> Result<ThemeFamily, PageError> {
    Page::from_id(id)
        .map(theme_family)
        .ok_or_else(|| PageError::UnknownPage(id.to_string()))
}

/// Parse `#rrggbb` into an RGB triple
///
/// # Examples
/// ```
/// use foliotui::pages::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#00d068"), Some((0, 208, 104)));
/// assert_eq!(parse_hex_color("00d068"), None);
/// assert_eq!(parse_hex_color("#zzzzzz"), None);
/// ```
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}
