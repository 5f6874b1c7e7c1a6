//! Full-width 800x400 banners for the home carousel.

use askama::Template;

use super::{filters, impl_banner, Gradient};
use crate::palette;

/// Carousel hero with headline, subtitle and call-to-action button.
#[derive(Debug, Clone, Template)]
#[template(path = "hero.html")]
pub struct HeroBanner {
    /// Headline.
    pub title: String,
    /// Line under the headline.
    pub subtitle: String,
    /// Button label.
    pub cta_text: String,
    /// Background photo, tinted by the gradient. Gradient only when absent.
    pub image_url: Option<String>,
    /// Background gradient. Both stops must be `#RRGGBB`: the photo tint
    /// appends an alpha suffix to them.
    pub gradient: Gradient,
}

impl Default for HeroBanner {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            cta_text: "VER AGORA".to_string(),
            image_url: None,
            gradient: Gradient::new(palette::PRIMARY, palette::SECONDARY),
        }
    }
}

impl_banner!(HeroBanner, 800, 400, "hero_banner");

/// Discount promotion on a dark background.
#[derive(Debug, Clone, Template)]
#[template(path = "promo.html")]
pub struct PromoBanner {
    /// Discount shown large, e.g. `50%`.
    pub discount: String,
    /// Headline.
    pub title: String,
    /// Line under the headline.
    pub subtitle: String,
    /// Pill text above the discount.
    pub badge_text: String,
    /// Any CSS color.
    pub bg_color: String,
    /// Discount and badge color. Must be `#RRGGBB`; the glow and badge
    /// background append an alpha suffix to it.
    pub accent_color: String,
}

impl Default for PromoBanner {
    fn default() -> Self {
        Self {
            discount: String::new(),
            title: String::new(),
            subtitle: String::new(),
            badge_text: "OFERTA ESPECIAL".to_string(),
            bg_color: palette::BLACK.to_string(),
            accent_color: palette::PRIMARY.to_string(),
        }
    }
}

impl_banner!(PromoBanner, 800, 400, "promo_banner");

/// Cashback offer with the percentage on the right.
#[derive(Debug, Clone, Template)]
#[template(path = "cashback.html")]
pub struct CashbackBanner {
    /// Cashback rate, e.g. `5%`.
    pub percentage: String,
    /// Headline.
    pub title: String,
    /// Line under the headline.
    pub subtitle: String,
}

impl Default for CashbackBanner {
    fn default() -> Self {
        Self {
            percentage: "5%".to_string(),
            title: "CASHBACK EM TODAS AS COMPRAS".to_string(),
            subtitle: "Ganhe de volta em cada compra".to_string(),
        }
    }
}

impl_banner!(CashbackBanner, 800, 400, "cashback_banner");

/// Impact banner with a headline statistic.
#[derive(Debug, Clone, Template)]
#[template(path = "sustainability.html")]
pub struct SustainabilityBanner {
    /// Headline figure, e.g. `500+`.
    pub stat_number: String,
    /// Caption next to the figure.
    pub stat_label: String,
    /// Headline.
    pub title: String,
    /// Line under the headline.
    pub subtitle: String,
}

impl Default for SustainabilityBanner {
    fn default() -> Self {
        Self {
            stat_number: "500+".to_string(),
            stat_label: "peças reutilizadas".to_string(),
            title: "Moda Sustentável".to_string(),
            subtitle: "Cada peça comprada é uma escolha consciente".to_string(),
        }
    }
}

impl_banner!(SustainabilityBanner, 800, 400, "sustainability_banner");
