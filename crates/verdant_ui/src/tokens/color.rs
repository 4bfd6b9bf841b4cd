//! Color tokens: brand families, the gray ramp, and semantic status roles.

use serde::Serialize;

/// One brand color family with its named shades.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColorFamily {
    /// Base shade, serialized under the framework's `DEFAULT` key.
    #[serde(rename = "DEFAULT")]
    pub base: &'static str,
    /// Lighter hover shade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<&'static str>,
    /// Darker active shade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<&'static str>,
    /// Muted mid shade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<&'static str>,
    /// Accent shade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<&'static str>,
    /// Bright accent shade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bright: Option<&'static str>,
}

impl ColorFamily {
    /// Resolves a shade by its serialized name.
    pub fn shade(&self, shade: &str) -> Option<&'static str> {
        match shade {
            "DEFAULT" => Some(self.base),
            "light" => self.light,
            "dark" => self.dark,
            "muted" => self.muted,
            "accent" => self.accent,
            "bright" => self.bright,
            _ => None,
        }
    }

    /// Shades present in this family, in serialization order.
    pub fn shades(&self) -> Vec<(&'static str, &'static str)> {
        let mut shades = vec![("DEFAULT", self.base)];
        for (name, value) in [
            ("light", self.light),
            ("dark", self.dark),
            ("muted", self.muted),
            ("accent", self.accent),
            ("bright", self.bright),
        ] {
            if let Some(value) = value {
                shades.push((name, value));
            }
        }
        shades
    }
}

/// The brand color families, keyed under the `verdant` namespace.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BrandColors {
    /// Primary brand green.
    pub green: ColorFamily,
    /// Secondary cyan.
    pub cyan: ColorFamily,
    /// Destructive red.
    pub red: ColorFamily,
    /// Link blue.
    pub blue: ColorFamily,
    /// Brand-neutral gray.
    pub neutral: ColorFamily,
}

impl BrandColors {
    /// Resolves a family by its serialized name.
    pub fn family(&self, name: &str) -> Option<ColorFamily> {
        match name {
            "green" => Some(self.green),
            "cyan" => Some(self.cyan),
            "red" => Some(self.red),
            "blue" => Some(self.blue),
            "neutral" => Some(self.neutral),
            _ => None,
        }
    }

    /// Every family with its serialized name.
    pub fn families(&self) -> [(&'static str, ColorFamily); 5] {
        [
            ("green", self.green),
            ("cyan", self.cyan),
            ("red", self.red),
            ("blue", self.blue),
            ("neutral", self.neutral),
        ]
    }
}

/// Numeric 50–950 neutral gray ramp.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GrayRamp {
    /// Near-white.
    #[serde(rename = "50")]
    pub g50: &'static str,
    /// Warm off-white.
    #[serde(rename = "100")]
    pub g100: &'static str,
    /// Light border gray.
    #[serde(rename = "200")]
    pub g200: &'static str,
    /// Placeholder gray.
    #[serde(rename = "300")]
    pub g300: &'static str,
    /// Muted icon gray.
    #[serde(rename = "400")]
    pub g400: &'static str,
    /// Secondary text gray.
    #[serde(rename = "500")]
    pub g500: &'static str,
    /// Body text gray.
    #[serde(rename = "600")]
    pub g600: &'static str,
    /// Emphasized text gray.
    #[serde(rename = "700")]
    pub g700: &'static str,
    /// Dark surface gray.
    #[serde(rename = "800")]
    pub g800: &'static str,
    /// Near-black text.
    #[serde(rename = "900")]
    pub g900: &'static str,
    /// Near-black surface.
    #[serde(rename = "950")]
    pub g950: &'static str,
}

impl GrayRamp {
    /// Resolves a ramp step by its numeric key.
    pub fn step(&self, step: u16) -> Option<&'static str> {
        match step {
            50 => Some(self.g50),
            100 => Some(self.g100),
            200 => Some(self.g200),
            300 => Some(self.g300),
            400 => Some(self.g400),
            500 => Some(self.g500),
            600 => Some(self.g600),
            700 => Some(self.g700),
            800 => Some(self.g800),
            900 => Some(self.g900),
            950 => Some(self.g950),
            _ => None,
        }
    }

    /// Every ramp step with its numeric key, light to dark.
    pub fn steps(&self) -> [(u16, &'static str); 11] {
        [
            (50, self.g50),
            (100, self.g100),
            (200, self.g200),
            (300, self.g300),
            (400, self.g400),
            (500, self.g500),
            (600, self.g600),
            (700, self.g700),
            (800, self.g800),
            (900, self.g900),
            (950, self.g950),
        ]
    }
}

/// The full exported color table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColorTokens {
    /// Brand families.
    pub verdant: BrandColors,
    /// Standalone warm paper tone.
    #[serde(rename = "cloud-dancer")]
    pub cloud_dancer: &'static str,
    /// Neutral gray ramp.
    pub gray: GrayRamp,
    /// Positive status color.
    pub success: &'static str,
    /// Cautionary status color.
    pub warning: &'static str,
    /// Failure status color.
    pub error: &'static str,
    /// Informational status color.
    pub info: &'static str,
}

/// Color token table.
pub const COLORS: ColorTokens = ColorTokens {
    verdant: BrandColors {
        green: ColorFamily {
            base: "#289448",
            light: Some("#34A856"),
            dark: Some("#1F7038"),
            muted: Some("#4CAF6A"),
            accent: None,
            bright: None,
        },
        cyan: ColorFamily {
            base: "#1FACC0",
            light: Some("#3FC5D6"),
            dark: Some("#178A9A"),
            muted: None,
            accent: None,
            bright: None,
        },
        red: ColorFamily {
            base: "#C32421",
            light: Some("#D94744"),
            dark: Some("#9C1D1A"),
            muted: None,
            accent: None,
            bright: None,
        },
        blue: ColorFamily {
            base: "#2b5672",
            light: None,
            dark: None,
            muted: None,
            accent: Some("#116dff"),
            bright: Some("#2F5DFF"),
        },
        neutral: ColorFamily {
            base: "#505050",
            light: Some("#6A6A6A"),
            dark: Some("#3A3A3A"),
            muted: None,
            accent: None,
            bright: None,
        },
    },
    cloud_dancer: "#F0EDE5",
    gray: GrayRamp {
        g50: "#F9FAFB",
        g100: "#FEF6ED",
        g200: "#D7D7D7",
        g300: "#B0B0B0",
        g400: "#767574",
        g500: "#5F5F5F",
        g600: "#525150",
        g700: "#383838",
        g800: "#2d2d2d",
        g900: "#151414",
        g950: "#080808",
    },
    success: "#289448",
    warning: "#FF8044",
    error: "#e03939",
    info: "#116dff",
};

/// Resolves a color token by the dashed name used in class fragments,
/// e.g. `verdant-green`, `verdant-green-light`, `gray-100`, `error`.
pub fn color_token(name: &str) -> Option<&'static str> {
    if let Some(rest) = name.strip_prefix("verdant-") {
        let (family, shade) = match rest.split_once('-') {
            Some((family, shade)) => (family, shade),
            None => (rest, "DEFAULT"),
        };
        return COLORS.verdant.family(family)?.shade(shade);
    }
    if let Some(step) = name.strip_prefix("gray-") {
        return step.parse().ok().and_then(|step| COLORS.gray.step(step));
    }
    match name {
        "cloud-dancer" => Some(COLORS.cloud_dancer),
        "success" => Some(COLORS.success),
        "warning" => Some(COLORS.warning),
        "error" => Some(COLORS.error),
        "info" => Some(COLORS.info),
        _ => None,
    }
}
