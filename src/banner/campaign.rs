//! Campaign banners: product showcase, testimonials, collections, flash
//! sales and seller spotlights.

use askama::Template;

use super::{filters, impl_banner, initial, Gradient};
use crate::palette;

/// Product card with struck-through original price and discount badge.
#[derive(Debug, Clone, Default, Template)]
#[template(path = "product_showcase.html")]
pub struct ProductShowcase {
    /// Product name.
    pub product_name: String,
    /// Brand label above the name.
    pub brand: String,
    /// Price before the discount, shown struck through.
    pub original_price: String,
    /// Current price.
    pub sale_price: String,
    /// Shown in the badge with a leading minus, e.g. `60%` becomes `-60%`.
    pub discount_percent: String,
    /// Product photo; a dress icon on a gradient when absent.
    pub image_url: Option<String>,
}

impl_banner!(ProductShowcase, 800, 500, "product_showcase");

/// Customer quote with star rating and author avatar.
#[derive(Debug, Clone, Template)]
#[template(path = "testimonial.html")]
pub struct TestimonialBanner {
    /// Customer quote, shown between curly quotes.
    pub quote: String,
    /// Author name, also the source of the placeholder initial.
    pub author_name: String,
    /// City and state under the author name.
    pub author_location: String,
    /// Number of stars shown.
    pub rating: u8,
    /// Avatar photo; the initial on a gradient disc when absent.
    pub avatar_url: Option<String>,
}

impl TestimonialBanner {
    fn stars(&self) -> String {
        "⭐".repeat(usize::from(self.rating))
    }

    fn initial(&self) -> String {
        initial(&self.author_name)
    }
}

impl Default for TestimonialBanner {
    fn default() -> Self {
        Self {
            quote: String::new(),
            author_name: String::new(),
            author_location: "São Paulo, SP".to_string(),
            rating: 5,
            avatar_url: None,
        }
    }
}

impl_banner!(TestimonialBanner, 800, 350, "testimonial");

/// Dark collection teaser with a piece count and call-to-action.
#[derive(Debug, Clone, Template)]
#[template(path = "collection.html")]
pub struct CollectionBanner {
    /// Collection name.
    pub collection_name: String,
    /// Shown as `N peças disponíveis`.
    pub item_count: u32,
    /// Short description.
    pub description: String,
    /// Background gradient.
    pub gradient: Gradient,
    /// Badge and button color, any CSS color.
    pub accent_color: String,
}

impl Default for CollectionBanner {
    fn default() -> Self {
        Self {
            collection_name: String::new(),
            item_count: 0,
            description: String::new(),
            gradient: Gradient::new(palette::TEXT_PRIMARY, "#4A4A4A"),
            accent_color: palette::PRIMARY.to_string(),
        }
    }
}

impl_banner!(CollectionBanner, 800, 400, "collection");

/// Countdown banner. The timer is static text, zero-padded to two digits.
#[derive(Debug, Clone, Template)]
#[template(path = "flash_sale.html")]
pub struct FlashSaleBanner {
    /// Countdown hours.
    pub hours: u32,
    /// Countdown minutes.
    pub minutes: u32,
    /// Countdown seconds.
    pub seconds: u32,
    /// Headline discount.
    pub discount: String,
}

impl FlashSaleBanner {
    fn hours_label(&self) -> String {
        format!("{:02}", self.hours)
    }

    fn minutes_label(&self) -> String {
        format!("{:02}", self.minutes)
    }

    fn seconds_label(&self) -> String {
        format!("{:02}", self.seconds)
    }
}

impl Default for FlashSaleBanner {
    fn default() -> Self {
        Self { hours: 12, minutes: 34, seconds: 56, discount: "ATÉ 70% OFF".to_string() }
    }
}

impl_banner!(FlashSaleBanner, 800, 300, "flash_sale");

/// Featured seller with rating and sales figures.
#[derive(Debug, Clone, Template)]
#[template(path = "seller_spotlight.html")]
pub struct SellerSpotlight {
    /// Seller name, also the source of the placeholder initial.
    pub seller_name: String,
    /// Average rating, shown with one decimal.
    pub rating: f32,
    /// Completed sales.
    pub sales_count: u32,
    /// Items for sale.
    pub items_count: u32,
    /// Avatar photo; the initial on a gradient disc when absent.
    pub avatar_url: Option<String>,
}

impl SellerSpotlight {
    fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }

    fn initial(&self) -> String {
        initial(&self.seller_name)
    }
}

impl Default for SellerSpotlight {
    fn default() -> Self {
        Self {
            seller_name: String::new(),
            rating: 4.9,
            sales_count: 234,
            items_count: 45,
            avatar_url: None,
        }
    }
}

impl_banner!(SellerSpotlight, 800, 350, "seller_spotlight");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::test_support::{assert_contains_all, assert_resolved};
    use crate::banner::Banner;

    #[test]
    fn product_showcase_pricing_and_fallback_image() {
        let banner = ProductShowcase {
            product_name: "Vestido Midi Floral Farm".into(),
            brand: "FARM".into(),
            original_price: "R$ 489,00".into(),
            sale_price: "R$ 195,00".into(),
            discount_percent: "60%".into(),
            image_url: None,
        };
        let markup = banner.markup();
        assert_resolved(&markup);
        assert_contains_all(
            &markup,
            &["Vestido Midi Floral Farm", "FARM", "R$ 489,00", "R$ 195,00", "-60%", "👗"],
        );
        assert!(!markup.contains("<img"));
        assert_eq!(banner.canvas().to_string(), "800x500");
    }

    #[test]
    fn product_showcase_with_photo() {
        let banner = ProductShowcase {
            product_name: "Bolsa".into(),
            image_url: Some("https://cdn.example.com/bolsa.jpg".into()),
            ..ProductShowcase::default()
        };
        assert!(banner.markup().contains(r#"<img src="https://cdn.example.com/bolsa.jpg""#));
    }

    #[test]
    fn testimonial_stars_follow_rating() {
        let banner = TestimonialBanner {
            quote: "Virei cliente fiel!".into(),
            author_name: "Juliana Santos".into(),
            rating: 3,
            ..TestimonialBanner::default()
        };
        let markup = banner.markup();
        assert_resolved(&markup);
        assert_contains_all(&markup, &["Virei cliente fiel!", "Juliana Santos", "São Paulo, SP"]);
        assert!(markup.contains(">⭐⭐⭐</div>"));
        assert!(markup.contains(">J</div>"));
    }

    #[test]
    fn testimonial_quote_with_apostrophes_is_verbatim() {
        let banner = TestimonialBanner {
            quote: "D'Ávila's closet é uma graça d'água!".into(),
            author_name: "Ana d'Ávila".into(),
            ..TestimonialBanner::default()
        };
        let markup = banner.markup();
        assert_contains_all(&markup, &["D'Ávila's closet é uma graça d'água!", ">Ana d'Ávila</div>"]);
        assert!(!markup.contains("&#39;"));
    }

    #[test]
    fn testimonial_zero_rating_shows_no_stars() {
        let banner = TestimonialBanner { author_name: "Ana".into(), rating: 0, ..TestimonialBanner::default() };
        assert!(!banner.markup().contains('⭐'));
    }

    #[test]
    fn testimonial_avatar_replaces_initial() {
        let banner = TestimonialBanner {
            author_name: "Marina Silva".into(),
            avatar_url: Some("https://cdn.example.com/marina.jpg".into()),
            ..TestimonialBanner::default()
        };
        let markup = banner.markup();
        assert!(markup.contains("https://cdn.example.com/marina.jpg"));
        assert!(!markup.contains(">M</div>"));
    }

    #[test]
    fn collection_contains_texts_and_count() {
        let banner = CollectionBanner {
            collection_name: "Vintage Lovers".into(),
            item_count: 156,
            description: "Clássicos atemporais".into(),
            gradient: Gradient::new("#8B4513", "#A0522D"),
            ..CollectionBanner::default()
        };
        let markup = banner.markup();
        assert_resolved(&markup);
        assert_contains_all(
            &markup,
            &["Vintage Lovers", "Clássicos atemporais", "156 peças disponíveis", "COLEÇÃO EXCLUSIVA"],
        );
        // The button text takes the gradient's start color.
        assert!(markup.contains("color: #8B4513;"));
    }

    #[test]
    fn flash_sale_pads_countdown() {
        let banner = FlashSaleBanner { hours: 3, minutes: 0, seconds: 9, ..FlashSaleBanner::default() };
        let markup = banner.markup();
        assert_resolved(&markup);
        assert_contains_all(&markup, &[">03</div>", ">00</div>", ">09</div>", "ATÉ 70% OFF"]);
    }

    #[test]
    fn flash_sale_defaults() {
        let markup = FlashSaleBanner::default().markup();
        assert_contains_all(&markup, &[">12</div>", ">34</div>", ">56</div>", "HORAS", "MIN", "SEG"]);
    }

    #[test]
    fn seller_spotlight_stats() {
        let banner = SellerSpotlight {
            seller_name: "Closet da Lú".into(),
            rating: 5.0,
            sales_count: 456,
            items_count: 89,
            avatar_url: None,
        };
        let markup = banner.markup();
        assert_resolved(&markup);
        assert_contains_all(&markup, &["Closet da Lú", ">5.0</span>", ">456</div>", ">89</div>", ">C</div>"]);
    }

    #[test]
    fn seller_spotlight_is_deterministic() {
        let banner = SellerSpotlight { seller_name: "Closet da Lú".into(), ..SellerSpotlight::default() };
        assert_eq!(banner.markup(), banner.markup());
        assert!(banner.markup().contains(">4.9</span>"));
    }
}
