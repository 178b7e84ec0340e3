//! Symbolic icon and color tokens.
//!
//! Content entries reference icons and accent colors by name. Both sets are
//! closed enums: parsing an unknown name yields the documented fallback
//! (`Icon::Laptop`, `ColorToken::Emerald`) instead of an error, so stale or
//! hand-edited snapshots still render.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Renderable icon, referenced by name from content entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    DollarSign,
    Leaf,
    Shield,
    Laptop,
    Star,
    Check,
    Mail,
    Phone,
    MapPin,
    ChevronRight,
    Menu,
    X,
}

impl Icon {
    /// Resolve an icon name; unknown names fall back to `Laptop`
    pub fn parse(name: &str) -> Self {
        match name {
            "DollarSign" => Icon::DollarSign,
            "Leaf" => Icon::Leaf,
            "Shield" => Icon::Shield,
            "Laptop" => Icon::Laptop,
            "Star" => Icon::Star,
            "Check" => Icon::Check,
            "Mail" => Icon::Mail,
            "Phone" => Icon::Phone,
            "MapPin" => Icon::MapPin,
            "ChevronRight" => Icon::ChevronRight,
            "Menu" => Icon::Menu,
            "X" => Icon::X,
            _ => Icon::Laptop,
        }
    }

    /// Canonical name, as written to snapshots
    pub fn name(&self) -> &'static str {
        match self {
            Icon::DollarSign => "DollarSign",
            Icon::Leaf => "Leaf",
            Icon::Shield => "Shield",
            Icon::Laptop => "Laptop",
            Icon::Star => "Star",
            Icon::Check => "Check",
            Icon::Mail => "Mail",
            Icon::Phone => "Phone",
            Icon::MapPin => "MapPin",
            Icon::ChevronRight => "ChevronRight",
            Icon::Menu => "Menu",
            Icon::X => "X",
        }
    }

    /// Text glyph used by the static HTML output
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::DollarSign => "$",
            Icon::Leaf => "🌿",
            Icon::Shield => "🛡",
            Icon::Laptop => "💻",
            Icon::Star => "★",
            Icon::Check => "✓",
            Icon::Mail => "✉",
            Icon::Phone => "☎",
            Icon::MapPin => "📍",
            Icon::ChevronRight => "›",
            Icon::Menu => "☰",
            Icon::X => "✕",
        }
    }
}

impl Default for Icon {
    fn default() -> Self {
        Icon::Laptop
    }
}

impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Icon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Icon::parse(&name))
    }
}

/// Accent color token, mapped to a CSS class by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Emerald,
    Green,
    Blue,
    Purple,
    Gray,
    Yellow,
}

impl ColorToken {
    /// Resolve a color name; unknown names fall back to `Emerald`
    pub fn parse(name: &str) -> Self {
        match name {
            "emerald" => ColorToken::Emerald,
            "green" => ColorToken::Green,
            "blue" => ColorToken::Blue,
            "purple" => ColorToken::Purple,
            "gray" => ColorToken::Gray,
            "yellow" => ColorToken::Yellow,
            _ => ColorToken::Emerald,
        }
    }

    /// Canonical name, as written to snapshots
    pub fn name(&self) -> &'static str {
        match self {
            ColorToken::Emerald => "emerald",
            ColorToken::Green => "green",
            ColorToken::Blue => "blue",
            ColorToken::Purple => "purple",
            ColorToken::Gray => "gray",
            ColorToken::Yellow => "yellow",
        }
    }

    /// CSS class suffix for the static HTML output
    pub fn css_class(&self) -> String {
        format!("accent-{}", self.name())
    }
}

impl Default for ColorToken {
    fn default() -> Self {
        ColorToken::Emerald
    }
}

impl Serialize for ColorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ColorToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(ColorToken::parse(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icon_round_trips() {
        let json = serde_json::to_string(&Icon::DollarSign).unwrap();
        assert_eq!(json, "\"DollarSign\"");

        let back: Icon = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Icon::DollarSign);
    }

    #[test]
    fn test_unknown_icon_falls_back_to_laptop() {
        let icon: Icon = serde_json::from_str("\"FloppyDisk\"").unwrap();
        assert_eq!(icon, Icon::Laptop);
    }

    #[test]
    fn test_unknown_color_falls_back_to_emerald() {
        assert_eq!(ColorToken::parse("chartreuse"), ColorToken::Emerald);
    }

    #[test]
    fn test_color_css_class() {
        assert_eq!(ColorToken::Blue.css_class(), "accent-blue");
    }
}
