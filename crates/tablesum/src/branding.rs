//! Report branding colors.

use serde::Serialize;

/// Hex colors used to theme rendered reports.
///
/// The palette is a plain value: pass it to whatever renders the report
/// (for example through [`SummaryConfig`](crate::SummaryConfig)).
///
/// # Example
///
/// ```
/// use tablesum::BrandingPalette;
///
/// let palette = BrandingPalette::default();
/// assert_eq!(palette.get("gold"), Some("#946B2D"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BrandingPalette {
    pub gold: &'static str,
    pub dark_blue: &'static str,
    pub grey: &'static str,
    pub light_blue: &'static str,
}

impl BrandingPalette {
    /// The house palette.
    pub const DEFAULT: Self = Self {
        gold: "#946B2D",
        dark_blue: "#0E1A40",
        grey: "#5D5D5D",
        light_blue: "#222F5B",
    };

    /// Look up a color by its name (`gold`, `dark-blue`, `grey`, `light-blue`).
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, hex)| hex)
    }

    /// `(name, hex)` pairs in a fixed order.
    pub fn entries(&self) -> [(&'static str, &'static str); 4] {
        [
            ("gold", self.gold),
            ("dark-blue", self.dark_blue),
            ("grey", self.grey),
            ("light-blue", self.light_blue),
        ]
    }
}

impl Default for BrandingPalette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
