//! Banner templates.
//!
//! Every banner type is a plain struct of content fields whose `Default`
//! carries the documented defaults, paired with an askama template under
//! `templates/`. Building markup never fails: optional images fall back to
//! gradient tiles or the initial letter of a name.

pub mod campaign;
pub mod cards;
pub mod hero;

pub use campaign::{
    CollectionBanner, FlashSaleBanner, ProductShowcase, SellerSpotlight, TestimonialBanner,
};
pub use cards::{BrandHighlight, CategoryCard, FeatureCard};
pub use hero::{CashbackBanner, HeroBanner, PromoBanner, SustainabilityBanner};

/// Fixed pixel size of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    /// Width in CSS pixels.
    pub width: u32,
    /// Height in CSS pixels.
    pub height: u32,
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Two-stop diagonal gradient.
///
/// Stops are CSS colors. Templates that tint with the gradient append a
/// two-digit alpha suffix, so those stops must be `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    /// Start color (top left).
    pub from: String,
    /// End color (bottom right).
    pub to: String,
}

impl Gradient {
    /// Create a gradient from two CSS colors.
    #[must_use]
    pub fn new(from: &str, to: &str) -> Self {
        Self { from: from.to_string(), to: to.to_string() }
    }
}

/// A banner type that can be turned into a markup document.
pub trait Banner: Send + Sync {
    /// Fixed canvas of this banner type.
    fn canvas(&self) -> Canvas;

    /// File stem used when the caller does not pick one.
    fn default_stem(&self) -> &'static str;

    /// Build the HTML document. Identical input yields identical output.
    fn markup(&self) -> String;
}

/// First character of a name, used for avatar and logo placeholders.
pub(crate) fn initial(name: &str) -> String {
    name.chars().next().map_or_else(|| "?".to_string(), String::from)
}

/// Render a template whose fields are all infallible `Display` values.
pub(crate) fn render_markup<T: askama::Template>(template: &T) -> String {
    template.render().unwrap_or_else(|e| {
        tracing::error!(error = %e, "template rendering failed");
        String::new()
    })
}

/// Template filters, in scope of every banner template as `filters`.
pub(crate) mod filters {
    use std::fmt::Display;

    /// Escape a value for an HTML text node.
    ///
    /// Only `&` and `<` are replaced, so quotes and apostrophes in copy such
    /// as `Pingo d'Ouro` reach the document unchanged. Attribute and style
    /// slots keep askama's full escaping and must not use this filter.
    #[askama::filter_fn]
    #[allow(clippy::unnecessary_wraps)]
    pub fn html_text<T: Display>(value: T, _: &dyn askama::Values) -> askama::Result<String> {
        let raw = value.to_string();
        let mut escaped = String::with_capacity(raw.len());
        for c in raw.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                _ => escaped.push(c),
            }
        }
        Ok(escaped)
    }
}

/// Implements [`Banner`] for a template struct.
macro_rules! impl_banner {
    ($ty:ty, $width:expr, $height:expr, $stem:literal) => {
        impl $crate::banner::Banner for $ty {
            fn canvas(&self) -> $crate::banner::Canvas {
                $crate::banner::Canvas { width: $width, height: $height }
            }

            fn default_stem(&self) -> &'static str {
                $stem
            }

            fn markup(&self) -> String {
                $crate::banner::render_markup(self)
            }
        }
    };
}
pub(crate) use impl_banner;

#[cfg(test)]
pub(crate) mod test_support {
    /// Assert the markup is a complete document with no template syntax left.
    pub fn assert_resolved(markup: &str) {
        assert!(markup.starts_with("<!DOCTYPE html>"), "not a document: {markup:.80}");
        assert!(markup.trim_end().ends_with("</html>"));
        for token in ["{{", "}}", "{%", "%}"] {
            assert!(!markup.contains(token), "unresolved `{token}` in markup");
        }
    }

    /// Assert every text appears verbatim in the markup.
    pub fn assert_contains_all(markup: &str, texts: &[&str]) {
        for text in texts {
            assert!(markup.contains(text), "missing {text:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_takes_first_character() {
        assert_eq!(initial("Farm"), "F");
        assert_eq!(initial("Úrsula"), "Ú");
        assert_eq!(initial(""), "?");
    }

    #[test]
    fn html_text_keeps_quotes_and_escapes_markup() {
        let out = filters::html_text::default().execute("Pingo d'Ouro \"Bazar\" <b> & cia", &()).unwrap();
        assert_eq!(out, "Pingo d'Ouro \"Bazar\" &lt;b> &amp; cia");
    }

    #[test]
    fn canvas_display() {
        assert_eq!(Canvas { width: 800, height: 400 }.to_string(), "800x400");
    }

    #[test]
    fn every_banner_type_builds_a_document() {
        let banners: Vec<Box<dyn Banner>> = vec![
            Box::new(HeroBanner::default()),
            Box::new(PromoBanner::default()),
            Box::new(CashbackBanner::default()),
            Box::new(SustainabilityBanner::default()),
            Box::new(CategoryCard::default()),
            Box::new(FeatureCard::default()),
            Box::new(BrandHighlight::default()),
            Box::new(ProductShowcase::default()),
            Box::new(TestimonialBanner::default()),
            Box::new(CollectionBanner::default()),
            Box::new(FlashSaleBanner::default()),
            Box::new(SellerSpotlight::default()),
        ];

        let mut stems: Vec<&str> = banners.iter().map(|b| b.default_stem()).collect();
        for banner in &banners {
            let markup = banner.markup();
            test_support::assert_resolved(&markup);
            assert_eq!(markup, banner.markup(), "{} is not deterministic", banner.default_stem());
            let canvas = banner.canvas();
            assert!(markup.contains(&format!("width: {}px", canvas.width)));
            assert!(markup.contains(&format!("height: {}px", canvas.height)));
        }

        stems.sort_unstable();
        stems.dedup();
        assert_eq!(stems.len(), banners.len(), "default stems must be distinct");
    }
}
