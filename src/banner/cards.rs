//! Small cards for category grids, feature lists and brand rows.

use askama::Template;

use super::{filters, impl_banner, initial, Gradient};
use crate::palette;

/// 300x200 category tile with icon and item count.
#[derive(Debug, Clone, Template)]
#[template(path = "category_card.html")]
pub struct CategoryCard {
    /// Category name.
    pub category: String,
    /// Shown as `N peças`.
    pub item_count: u32,
    /// Emoji shown above the name.
    pub icon: String,
    /// Tile background.
    pub gradient: Gradient,
}

impl Default for CategoryCard {
    fn default() -> Self {
        Self {
            category: String::new(),
            item_count: 0,
            icon: "👗".to_string(),
            gradient: Gradient::new(palette::ACCENT, palette::PRIMARY),
        }
    }
}

impl_banner!(CategoryCard, 300, 200, "category_card");

/// 400x300 benefit card.
#[derive(Debug, Clone, Template)]
#[template(path = "feature_card.html")]
pub struct FeatureCard {
    /// Emoji in the icon circle.
    pub icon: String,
    /// Benefit name.
    pub title: String,
    /// Benefit text under the title.
    pub description: String,
    /// Any CSS color.
    pub bg_color: String,
    /// Tints the icon circle at low opacity. Must be `#RRGGBB`, since an
    /// alpha suffix is appended to it.
    pub accent_color: String,
}

impl Default for FeatureCard {
    fn default() -> Self {
        Self {
            icon: String::new(),
            title: String::new(),
            description: String::new(),
            bg_color: palette::BACKGROUND.to_string(),
            accent_color: palette::PRIMARY.to_string(),
        }
    }
}

impl_banner!(FeatureCard, 400, 300, "feature_banner");

/// 350x200 brand card. Without a logo the brand's initial is shown on a
/// gradient tile.
#[derive(Debug, Clone, Template)]
#[template(path = "brand_highlight.html")]
pub struct BrandHighlight {
    /// Brand name, also the source of the placeholder initial.
    pub brand_name: String,
    /// Line under the brand name.
    pub tagline: String,
    /// Brand logo; the initial on a gradient tile when absent.
    pub logo_url: Option<String>,
    /// Card background, any CSS color.
    pub bg_color: String,
    /// Brand name color.
    pub text_color: String,
}

impl BrandHighlight {
    fn initial(&self) -> String {
        initial(&self.brand_name)
    }
}

impl Default for BrandHighlight {
    fn default() -> Self {
        Self {
            brand_name: String::new(),
            tagline: "Peças selecionadas".to_string(),
            logo_url: None,
            bg_color: palette::WHITE.to_string(),
            text_color: palette::TEXT_PRIMARY.to_string(),
        }
    }
}

impl_banner!(BrandHighlight, 350, 200, "brand_highlight");
