use serde::{Deserialize, Serialize};

/// Clock display format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    Hours12,
    #[default]
    #[serde(rename = "24h")]
    Hours24,
}

impl TimeFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hours12 => "12h",
            Self::Hours24 => "24h",
        }
    }

    /// Returns the other format.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Hours12 => Self::Hours24,
            Self::Hours24 => Self::Hours12,
        }
    }
}

impl std::fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeFormat {
    type Err = crate::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "12h" => Ok(Self::Hours12),
            "24h" => Ok(Self::Hours24),
            other => Err(crate::error::CoreError::InvalidInput(format!(
                "unknown time format: {other}"
            ))),
        }
    }
}

/// Viewport width class.
///
/// Drives the layout and the ceiling applied by the adaptive text sizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    VerySmall,
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub const VERY_SMALL_MAX: f64 = 490.0;
    pub const MOBILE_MAX: f64 = 768.0;
    pub const TABLET_MAX: f64 = 1024.0;

    /// ## Summary
    /// Classifies a viewport width in pixels.
    #[must_use]
    pub fn classify(width: f64) -> Self {
        if width < Self::VERY_SMALL_MAX {
            Self::VerySmall
        } else if width < Self::MOBILE_MAX {
            Self::Mobile
        } else if width < Self::TABLET_MAX {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Very small viewports are a subset of mobile ones.
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::VerySmall | Self::Mobile)
    }

    #[must_use]
    pub const fn is_desktop(self) -> bool {
        matches!(self, Self::Desktop)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VerySmall => "very-small",
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
