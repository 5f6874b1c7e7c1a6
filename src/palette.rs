//! Brand colors of the app theme.
//!
//! All colors are `#RRGGBB` so they can take an alpha suffix in templates.

/// Primary brand color, a warm caramel.
pub const PRIMARY: &str = "#D4A574";
/// Secondary brown.
pub const SECONDARY: &str = "#8B7355";
/// Light beige accent.
pub const ACCENT: &str = "#E8D5C4";
/// Off-white page background.
pub const BACKGROUND: &str = "#FAF8F5";
/// Pure white.
pub const WHITE: &str = "#FFFFFF";
/// Near-black used for dark banners.
pub const BLACK: &str = "#1A1A1A";
/// Body text color.
pub const TEXT_PRIMARY: &str = "#2D2D2D";
/// Dusty rose.
pub const ROSE: &str = "#E8B4B8";
/// Sage green.
pub const SAGE: &str = "#9CAF88";
/// Lavender.
pub const LAVENDER: &str = "#B8A9C9";
