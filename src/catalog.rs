//! Sample content for the batch: every banner the app ships with.

use crate::banner::{
    Banner, BrandHighlight, CashbackBanner, CategoryCard, CollectionBanner, FeatureCard,
    FlashSaleBanner, Gradient, HeroBanner, ProductShowcase, PromoBanner, SellerSpotlight,
    SustainabilityBanner, TestimonialBanner,
};
use crate::output::file_stem;
use crate::palette;

/// Banner groups, in batch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Home carousel heroes.
    Hero,
    /// Discount promotions.
    Promo,
    /// Cashback offer.
    Cashback,
    /// Category grid tiles.
    Category,
    /// Benefit cards.
    Feature,
    /// Partner brand cards.
    Brand,
    /// Sustainability impact banner.
    Sustainability,
    /// Product showcase.
    Product,
    /// Customer testimonials.
    Testimonial,
    /// Curated collections.
    Collection,
    /// Flash sale countdown.
    FlashSale,
    /// Seller spotlight.
    Seller,
}

/// Group names accepted by `--only`, including short aliases.
const GROUP_NAMES: &[(&str, Group)] = &[
    ("hero", Group::Hero),
    ("promo", Group::Promo),
    ("cashback", Group::Cashback),
    ("category", Group::Category),
    ("feature", Group::Feature),
    ("brand", Group::Brand),
    ("sustainability", Group::Sustainability),
    ("product", Group::Product),
    ("testimonial", Group::Testimonial),
    ("collection", Group::Collection),
    ("flash-sale", Group::FlashSale),
    ("flash", Group::FlashSale),
    ("seller", Group::Seller),
    ("seller-spotlight", Group::Seller),
];

impl Group {
    /// Canonical name, as printed by `--list`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Promo => "promo",
            Self::Cashback => "cashback",
            Self::Category => "category",
            Self::Feature => "feature",
            Self::Brand => "brand",
            Self::Sustainability => "sustainability",
            Self::Product => "product",
            Self::Testimonial => "testimonial",
            Self::Collection => "collection",
            Self::FlashSale => "flash-sale",
            Self::Seller => "seller",
        }
    }

    /// Console heading printed before the group's first banner.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Hero => "Generating Hero Banners...",
            Self::Promo => "Generating Promo Banners...",
            Self::Cashback => "Generating Cashback Banner...",
            Self::Category => "Generating Category Cards...",
            Self::Feature => "Generating Feature Banners...",
            Self::Brand => "Generating Brand Highlights...",
            Self::Sustainability => "Generating Sustainability Banner...",
            Self::Product => "Generating Product Showcase...",
            Self::Testimonial => "Generating Testimonials...",
            Self::Collection => "Generating Collection Banners...",
            Self::FlashSale => "Generating Flash Sale Banner...",
            Self::Seller => "Generating Seller Spotlight...",
        }
    }

    /// Parse a group name or alias (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error listing the valid names if `name` is unknown.
    pub fn parse(name: &str) -> Result<Self, String> {
        let wanted = name.trim().to_ascii_lowercase();
        GROUP_NAMES.iter().find(|(alias, _)| *alias == wanted).map(|&(_, group)| group).ok_or_else(
            || {
                let valid: Vec<&str> = GROUP_NAMES.iter().map(|(alias, _)| *alias).collect();
                format!("Unknown banner group '{name}'. Valid: {}", valid.join(", "))
            },
        )
    }
}

/// One banner to render, with its output file stem.
pub struct BannerJob {
    /// Group the job is listed and filtered under.
    pub group: Group,
    /// Output file name without extension.
    pub stem: String,
    /// The banner to build.
    pub banner: Box<dyn Banner>,
}

impl BannerJob {
    fn new(group: Group, stem: impl Into<String>, banner: impl Banner + 'static) -> Self {
        Self { group, stem: stem.into(), banner: Box::new(banner) }
    }

    /// A job that writes to the banner type's default stem.
    fn with_default_stem(group: Group, banner: impl Banner + 'static) -> Self {
        let stem = banner.default_stem();
        Self::new(group, stem, banner)
    }
}

impl std::fmt::Debug for BannerJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BannerJob")
            .field("group", &self.group)
            .field("stem", &self.stem)
            .field("canvas", &self.banner.canvas())
            .finish_non_exhaustive()
    }
}

/// A titled set of jobs, rendered as one console section.
#[derive(Debug)]
pub struct Section {
    /// Console header.
    pub title: &'static str,
    /// Jobs in render order, grouped contiguously.
    pub jobs: Vec<BannerJob>,
}

/// The full catalog: the standard app banners, then the campaign set.
#[must_use]
pub fn sections() -> Vec<Section> {
    vec![
        Section { title: "APEGA DESAPEGA - Banner Generator", jobs: standard_jobs() },
        Section { title: "Advanced Banner Templates", jobs: campaign_jobs() },
    ]
}

/// Keep only jobs whose group is in `only`; an empty filter keeps all.
/// Sections left without jobs are dropped.
#[must_use]
pub fn filter_sections(sections: Vec<Section>, only: &[Group]) -> Vec<Section> {
    if only.is_empty() {
        return sections;
    }
    sections
        .into_iter()
        .map(|mut section| {
            section.jobs.retain(|job| only.contains(&job.group));
            section
        })
        .filter(|section| !section.jobs.is_empty())
        .collect()
}

fn standard_jobs() -> Vec<BannerJob> {
    let mut jobs = vec![
        BannerJob::new(
            Group::Hero,
            "hero_moda_circular",
            HeroBanner {
                title: "Moda Circular".into(),
                subtitle: "Renove seu guarda-roupa com peças únicas e sustentáveis".into(),
                cta_text: "EXPLORAR".into(),
                gradient: Gradient::new(palette::PRIMARY, palette::SECONDARY),
                ..HeroBanner::default()
            },
        ),
        BannerJob::new(
            Group::Hero,
            "hero_novidades",
            HeroBanner {
                title: "Novidades da Semana".into(),
                subtitle: "Descubra as peças mais desejadas que acabaram de chegar".into(),
                cta_text: "VER NOVIDADES".into(),
                gradient: Gradient::new(palette::LAVENDER, "#8E7BA8"),
                ..HeroBanner::default()
            },
        ),
        BannerJob::new(
            Group::Hero,
            "hero_premium",
            HeroBanner {
                title: "Peças Premium".into(),
                subtitle: "Seleção especial de marcas renomadas com até 70% off".into(),
                cta_text: "CONFERIR".into(),
                gradient: Gradient::new(palette::BLACK, "#3D3D3D"),
                ..HeroBanner::default()
            },
        ),
        BannerJob::new(
            Group::Promo,
            "promo_black_friday",
            PromoBanner {
                discount: "50%".into(),
                title: "BLACK FRIDAY".into(),
                subtitle: "Em peças selecionadas".into(),
                badge_text: "OFERTA LIMITADA".into(),
                ..PromoBanner::default()
            },
        ),
        BannerJob::new(
            Group::Promo,
            "promo_primeira_compra",
            PromoBanner {
                discount: "30%".into(),
                title: "PRIMEIRA COMPRA".into(),
                subtitle: "Use o cupom BEMVINDA".into(),
                badge_text: "EXCLUSIVO".into(),
                accent_color: palette::ROSE.into(),
                ..PromoBanner::default()
            },
        ),
        BannerJob::with_default_stem(Group::Cashback, CashbackBanner::default()),
    ];

    let categories = [
        ("Vestidos", 234, "👗", (palette::ACCENT, palette::PRIMARY)),
        ("Blusas", 456, "👚", (palette::ROSE, palette::PRIMARY)),
        ("Calças", 189, "👖", (palette::LAVENDER, "#8E7BA8")),
        ("Bolsas", 127, "👜", (palette::SAGE, "#6B8E5C")),
        ("Sapatos", 298, "👠", ("#F5D0C5", palette::ROSE)),
        ("Acessórios", 167, "💍", ("#FFE4B5", palette::PRIMARY)),
    ];
    jobs.extend(categories.into_iter().map(|(category, item_count, icon, (from, to))| {
        BannerJob::new(
            Group::Category,
            format!("category_{}", file_stem(category)),
            CategoryCard {
                category: category.into(),
                item_count,
                icon: icon.into(),
                gradient: Gradient::new(from, to),
            },
        )
    }));

    let features = [
        ("🔒", "Compra Segura", "Pagamento protegido e garantia de entrega"),
        ("🚚", "Frete Grátis", "Em compras acima de R$ 150"),
        ("💚", "Sustentável", "Moda consciente que faz a diferença"),
        ("✨", "Curadoria Premium", "Peças selecionadas com qualidade garantida"),
    ];
    jobs.extend(features.into_iter().enumerate().map(|(i, (icon, title, description))| {
        BannerJob::new(
            Group::Feature,
            format!("feature_{}", i + 1),
            FeatureCard {
                icon: icon.into(),
                title: title.into(),
                description: description.into(),
                ..FeatureCard::default()
            },
        )
    }));

    let brands = ["Farm", "Zara", "Amaro", "Animale", "Le Lis"];
    jobs.extend(brands.into_iter().map(|brand| {
        BannerJob::new(
            Group::Brand,
            format!("brand_{}", file_stem(brand)),
            BrandHighlight { brand_name: brand.into(), ..BrandHighlight::default() },
        )
    }));

    jobs.push(BannerJob::with_default_stem(Group::Sustainability, SustainabilityBanner::default()));
    jobs
}

fn campaign_jobs() -> Vec<BannerJob> {
    let mut jobs = vec![BannerJob::new(
        Group::Product,
        "product_showcase_farm",
        ProductShowcase {
            product_name: "Vestido Midi Floral Farm".into(),
            brand: "FARM".into(),
            original_price: "R$ 489,00".into(),
            sale_price: "R$ 195,00".into(),
            discount_percent: "60%".into(),
            image_url: None,
        },
    )];

    let testimonials = [
        (
            "Encontrei peças incríveis que não acharia em nenhuma loja! A qualidade é surpreendente.",
            "Marina Silva",
            "São Paulo, SP",
        ),
        (
            "Vendi minhas roupas que não usava mais e ainda comprei novidades. Amo essa plataforma!",
            "Ana Carolina",
            "Rio de Janeiro, RJ",
        ),
        ("Atendimento impecável e peças lindas. Virei cliente fiel!", "Juliana Santos", "Belo Horizonte, MG"),
    ];
    jobs.extend(testimonials.into_iter().enumerate().map(|(i, (quote, name, location))| {
        BannerJob::new(
            Group::Testimonial,
            format!("testimonial_{}", i + 1),
            TestimonialBanner {
                quote: quote.into(),
                author_name: name.into(),
                author_location: location.into(),
                ..TestimonialBanner::default()
            },
        )
    }));

    let collections = [
        ("Inverno 2024", 89, "Peças quentinhas e estilosas para os dias mais frios", (palette::TEXT_PRIMARY, "#4A4A4A")),
        ("Vintage Lovers", 156, "Clássicos atemporais com história e personalidade", ("#8B4513", "#A0522D")),
        ("Festa", 67, "Looks perfeitos para ocasiões especiais", ("#1A1A2E", "#16213E")),
    ];
    jobs.extend(collections.into_iter().map(|(name, item_count, description, (from, to))| {
        BannerJob::new(
            Group::Collection,
            format!("collection_{}", file_stem(name)),
            CollectionBanner {
                collection_name: name.into(),
                item_count,
                description: description.into(),
                gradient: Gradient::new(from, to),
                ..CollectionBanner::default()
            },
        )
    }));

    jobs.push(BannerJob::with_default_stem(Group::FlashSale, FlashSaleBanner::default()));
    jobs.push(BannerJob::with_default_stem(
        Group::Seller,
        SellerSpotlight {
            seller_name: "Closet da Lú".into(),
            rating: 4.9,
            sales_count: 456,
            items_count: 89,
            avatar_url: None,
        },
    ));
    jobs
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn all_jobs() -> Vec<BannerJob> {
        sections().into_iter().flat_map(|s| s.jobs).collect()
    }

    #[test]
    fn catalog_sizes() {
        let sections = sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].jobs.len(), 22);
        assert_eq!(sections[1].jobs.len(), 9);
    }

    #[test]
    fn stems_are_distinct() {
        let jobs = all_jobs();
        let stems: HashSet<&str> = jobs.iter().map(|j| j.stem.as_str()).collect();
        assert_eq!(stems.len(), jobs.len());
    }

    #[test]
    fn stems_follow_naming_scheme() {
        let stems: Vec<String> = all_jobs().into_iter().map(|j| j.stem).collect();
        for expected in [
            "hero_moda_circular",
            "promo_black_friday",
            "cashback_banner",
            "category_calças",
            "feature_4",
            "brand_le_lis",
            "sustainability_banner",
            "product_showcase_farm",
            "testimonial_3",
            "collection_inverno_2024",
            "collection_vintage_lovers",
            "flash_sale",
            "seller_spotlight",
        ] {
            assert!(stems.iter().any(|s| s == expected), "missing stem {expected}");
        }
    }

    #[test]
    fn groups_are_contiguous_in_order() {
        let groups: Vec<Group> = all_jobs().iter().map(|j| j.group).collect();
        let mut seen = Vec::new();
        for g in groups {
            if seen.last() != Some(&g) {
                assert!(!seen.contains(&g), "{g:?} appears in two runs");
                seen.push(g);
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn every_sample_markup_contains_its_texts() {
        let jobs = all_jobs();
        let farm = jobs.iter().find(|j| j.stem == "product_showcase_farm").unwrap();
        assert!(farm.banner.markup().contains("Vestido Midi Floral Farm"));
        let lis = jobs.iter().find(|j| j.stem == "brand_le_lis").unwrap();
        assert!(lis.banner.markup().contains("Le Lis"));
        for job in &jobs {
            assert!(!job.banner.markup().is_empty(), "{} rendered empty", job.stem);
        }
    }

    #[test]
    fn parse_group_names_and_aliases() {
        assert_eq!(Group::parse("hero"), Ok(Group::Hero));
        assert_eq!(Group::parse("Flash"), Ok(Group::FlashSale));
        assert_eq!(Group::parse("seller-spotlight"), Ok(Group::Seller));
        let err = Group::parse("banner").unwrap_err();
        assert!(err.contains("Unknown banner group 'banner'"));
        assert!(err.contains("flash-sale"));
    }

    #[test]
    fn canonical_names_parse_back() {
        for job in all_jobs() {
            assert_eq!(Group::parse(job.group.name()), Ok(job.group));
        }
    }

    #[test]
    fn filter_keeps_selected_groups_and_drops_empty_sections() {
        let filtered = filter_sections(sections(), &[Group::Brand, Group::Seller]);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].jobs.len(), 5);
        assert_eq!(filtered[1].jobs.len(), 1);

        let only_hero = filter_sections(sections(), &[Group::Hero]);
        assert_eq!(only_hero.len(), 1);
        assert_eq!(only_hero[0].title, "APEGA DESAPEGA - Banner Generator");
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let total: usize = filter_sections(sections(), &[]).iter().map(|s| s.jobs.len()).sum();
        assert_eq!(total, 31);
    }
}
