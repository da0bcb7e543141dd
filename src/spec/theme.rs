use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

/// Coffee-house colors shared by every chart.
pub mod colors {
    pub const ESPRESSO: &str = "#362822";
    pub const COFFEE: &str = "#F0C376";
    pub const CREAM: &str = "#F7ECD7";
    pub const DARK_BLUE: &str = "#1A3447";
    pub const NAVY: &str = "#183348";
    pub const TERRACOTTA: &str = "#D26946";
    pub const ROAST: &str = "#614033";
    pub const LATTE: &str = "#F0DEBB";
    pub const CARAMEL: &str = "#BE9757";
    pub const ASH: &str = "#6E6E6E";
    pub const LABEL_BROWN: &str = "#4A2B18";
}

/// Ordered color range for a nominal scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette(Vec<String>);

impl Palette {
    pub fn new<I, S>(colors: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(ChartError::InvalidConfig(
                "palette needs at least one color".to_owned(),
            ));
        }
        if let Some(bad) = colors.iter().find(|color| !is_hex_color(color)) {
            return Err(ChartError::InvalidConfig(format!(
                "palette color `{bad}` is not a #rgb or #rrggbb hex color"
            )));
        }
        Ok(Self(colors))
    }

    fn from_static(colors: &[&str]) -> Self {
        Self(colors.iter().map(|color| (*color).to_owned()).collect())
    }

    /// Low / Medium / High stress levels.
    #[must_use]
    pub fn stress_levels() -> Self {
        Self::from_static(&[colors::COFFEE, colors::NAVY, colors::ASH])
    }

    /// Male / Female (/ other) respondents.
    #[must_use]
    pub fn gender() -> Self {
        Self::from_static(&[colors::ESPRESSO, colors::COFFEE, colors::CREAM])
    }

    /// Poor / Fair / Good / Excellent sleep quality.
    #[must_use]
    pub fn sleep_quality() -> Self {
        Self::from_static(&[colors::ROAST, colors::LATTE, colors::CARAMEL, colors::TERRACOTTA])
    }

    #[must_use]
    pub fn age_groups() -> Self {
        Self::from_static(&[
            colors::ESPRESSO,
            colors::COFFEE,
            colors::CREAM,
            colors::DARK_BLUE,
            colors::TERRACOTTA,
        ])
    }

    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::from(self.0.clone())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::stress_levels()
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = ChartError;

    fn try_from(colors: Vec<String>) -> ChartResult<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.0
    }
}

fn is_hex_color(color: &str) -> bool {
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|ch| ch.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_named_colors() {
        assert!(Palette::new(["#fff", "#F0C376"]).is_ok());
        assert!(Palette::new(["brown"]).is_err());
        assert!(Palette::new(Vec::<String>::new()).is_err());
    }
}
