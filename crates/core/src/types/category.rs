//! Catalog classification enums.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Product category.
///
/// Serialized with the display name (`"Headphones"`), parsed leniently from
/// either the display name or the URL slug in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Headphones,
    Laptops,
    Phones,
    Accessories,
}

impl Category {
    /// All categories in navigation order.
    pub const ALL: [Self; 4] = [
        Self::Headphones,
        Self::Laptops,
        Self::Phones,
        Self::Accessories,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Headphones => "Headphones",
            Self::Laptops => "Laptops",
            Self::Phones => "Phones",
            Self::Accessories => "Accessories",
        }
    }

    /// Lowercase form used in query strings (`?cat=laptops`).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Headphones => "headphones",
            Self::Laptops => "laptops",
            Self::Phones => "phones",
            Self::Accessories => "accessories",
        }
    }

    /// Emoji shown on category tiles.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Headphones => "🎧",
            Self::Laptops => "💻",
            Self::Phones => "📱",
            Self::Accessories => "⌚",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Promotional badge shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Badge {
    New,
    Sale,
    Hot,
}

impl Badge {
    /// Label printed on the badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Sale => "SALE",
            Self::Hot => "HOT",
        }
    }

    /// CSS modifier class (`badge--hot`).
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::New => "badge--new",
            Self::Sale => "badge--sale",
            Self::Hot => "badge--hot",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("laptops".parse::<Category>(), Ok(Category::Laptops));
        assert_eq!("Headphones".parse::<Category>(), Ok(Category::Headphones));
        assert_eq!(" PHONES ".parse::<Category>(), Ok(Category::Phones));
        assert!("Tablets".parse::<Category>().is_err());
        assert!("All".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_display_matches_name() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.name());
            assert_eq!(category.slug(), category.name().to_lowercase());
        }
    }

    #[test]
    fn test_badge_serializes_uppercase() {
        let json = serde_json::to_string(&Badge::Hot).ok();
        assert_eq!(json.as_deref(), Some("\"HOT\""));
    }
}
