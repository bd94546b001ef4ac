use crate::config::Config;
use palette::Srgba;

pub struct ThemeColors {
    pub foreground: Srgba<f64>,
    pub background: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_config(config: &Config) -> Self {
        Self {
            foreground: config.foreground.to_rgba(),
            background: config.background.to_rgba(),
        }
    }
}
