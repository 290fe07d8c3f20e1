//! Style mapping for rendered constructs.
//!
//! Every node the renderer produces is styled by looking its [`Construct`] up
//! in [`style_for`]. Anything not listed there gets [`StyleClass::Plain`].

/// Links always open in a new browsing context.
pub const LINK_TARGET: &str = "_blank";

/// Links never leak the referrer or a handle to the opening page.
pub const LINK_REL: &str = "noopener noreferrer";

/// URL schemes a rendered link or image may point at.
const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Returns `url` when it is safe to emit as a link or image target: a
/// relative reference, a fragment, or one of the allowed schemes. Anything
/// else (`javascript:`, `data:`, `vbscript:`, ...) yields `None`.
pub fn safe_href(url: &str) -> Option<&str> {
    let Some(colon) = url.find(':') else {
        return Some(url);
    };
    let scheme = &url[..colon];
    // A `/`, `?` or `#` before the first colon makes it a relative reference.
    if scheme.contains(['/', '?', '#']) {
        return Some(url);
    }
    // Browsers drop whitespace and control characters inside the scheme.
    let scheme: String = scheme
        .chars()
        .filter(|ch| !ch.is_whitespace() && !ch.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    SAFE_SCHEMES.contains(&scheme.as_str()).then_some(url)
}

/// Kind of node being styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Heading(u8),
    Paragraph,
    UnorderedList,
    OrderedList,
    ListItem,
    Table,
    TableHead,
    TableHeaderCell,
    TableCell,
    Link,
    Other,
}

/// Visual treatment applied to a construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    /// Large bold heading (levels 1 and 2).
    HeadingLarge,
    /// Medium bold heading (level 3).
    HeadingMedium,
    /// Small body text.
    Body,
    /// Bulleted list.
    BulletList,
    /// Spaced list item.
    ListItem,
    /// Bordered, striped table.
    Table,
    /// Shaded header row.
    TableHead,
    /// Uppercase header cell.
    TableHeaderCell,
    /// Body cell.
    TableCell,
    /// Coloured link, underlined on hover.
    Link,
    /// Default rendering.
    Plain,
}

/// The style-mapping table.
pub fn style_for(construct: Construct) -> StyleClass {
    match construct {
        Construct::Heading(1 | 2) => StyleClass::HeadingLarge,
        Construct::Heading(3) => StyleClass::HeadingMedium,
        Construct::Paragraph => StyleClass::Body,
        Construct::UnorderedList => StyleClass::BulletList,
        Construct::ListItem => StyleClass::ListItem,
        Construct::Table => StyleClass::Table,
        Construct::TableHead => StyleClass::TableHead,
        Construct::TableHeaderCell => StyleClass::TableHeaderCell,
        Construct::TableCell => StyleClass::TableCell,
        Construct::Link => StyleClass::Link,
        Construct::Heading(_) | Construct::OrderedList | Construct::Other => StyleClass::Plain,
    }
}

impl StyleClass {
    /// CSS class used by the HTML export; see [`crate::STYLESHEET`].
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            StyleClass::HeadingLarge => Some("sd-heading-lg"),
            StyleClass::HeadingMedium => Some("sd-heading-md"),
            StyleClass::Body => Some("sd-body"),
            StyleClass::BulletList => Some("sd-bullets"),
            StyleClass::ListItem => Some("sd-item"),
            StyleClass::Table => Some("sd-table"),
            StyleClass::TableHead => Some("sd-thead"),
            StyleClass::TableHeaderCell => Some("sd-th"),
            StyleClass::TableCell => Some("sd-td"),
            StyleClass::Link => Some("sd-link"),
            StyleClass::Plain => None,
        }
    }
}
