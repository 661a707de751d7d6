//! Adaptive font sizing for the big clock.
//!
//! ## Summary
//! Text width is estimated from per-character ratios rather than measured,
//! then the font size is stepped down until the text fits the container.
//! The result is capped by a per-breakpoint ceiling and floored at the
//! configured minimum.

use timespot_core::types::{Breakpoint, TimeFormat};

pub const DEFAULT_MIN_FONT_SIZE: f64 = 48.0;
pub const DEFAULT_MAX_FONT_SIZE: f64 = 280.0;

const STEP: f64 = 2.0;
const CHAR_WIDTH_RATIO: f64 = 0.6;
const COLON_WIDTH: f64 = 0.3;
const DIGIT_WIDTH: f64 = 0.55;
const OTHER_WIDTH: f64 = 0.5;

/// AM/PM renders at half the clock size.
const PERIOD_SCALE: f64 = 0.5;
const PERIOD_TEXT: &str = "AM";

const VERY_SMALL_CEILING: f64 = 68.64;
const MOBILE_CEILING: f64 = 96.9;
const TABLET_CEILING: f64 = 145.35;
const DESKTOP_SCALE: f64 = 0.85;

/// ## Summary
/// Estimated rendered width of `text` at `font_size`.
///
/// Colons count 0.3 of a character, digits 0.55 and everything else 0.5, all
/// scaled by 0.6 of the font size.
#[must_use]
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    let units: f64 = text
        .chars()
        .map(|c| match c {
            ':' => COLON_WIDTH,
            c if c.is_ascii_digit() => DIGIT_WIDTH,
            _ => OTHER_WIDTH,
        })
        .sum();
    units * font_size * CHAR_WIDTH_RATIO
}

/// Width of the AM/PM suffix plus its left margin, in font-size units.
fn period_width(font_size: f64, breakpoint: Breakpoint) -> f64 {
    let margin = if breakpoint.is_desktop() { 0.75 } else { 0.5 };
    estimate_text_width(PERIOD_TEXT, font_size * PERIOD_SCALE) + margin * font_size
}

fn total_width(text: &str, font_size: f64, format: TimeFormat, breakpoint: Breakpoint) -> f64 {
    let mut width = estimate_text_width(text, font_size);
    if format == TimeFormat::Hours12 {
        width += period_width(font_size, breakpoint);
    }
    width
}

/// Fixed ceilings below desktop; desktop scales the fitted size instead.
fn apply_breakpoint_cap(size: f64, breakpoint: Breakpoint) -> f64 {
    match breakpoint {
        Breakpoint::VerySmall => size.min(VERY_SMALL_CEILING),
        Breakpoint::Mobile => size.min(MOBILE_CEILING),
        Breakpoint::Tablet => size.min(TABLET_CEILING),
        Breakpoint::Desktop => size * DESKTOP_SCALE,
    }
}

/// Font size bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_FONT_SIZE,
            max: DEFAULT_MAX_FONT_SIZE,
        }
    }
}

/// ## Summary
/// Largest font size at which `text` fits `available_width`.
///
/// Starts at `bounds.max` and steps down by 2 while the text overflows. The
/// 12h format reserves room for the AM/PM suffix. Smaller breakpoints cap the
/// fitted size; desktop shrinks it to 85%. Empty text or a non-positive width
/// yields `bounds.min`.
#[must_use]
pub fn compute_font_size(
    text: &str,
    available_width: f64,
    format: TimeFormat,
    breakpoint: Breakpoint,
    bounds: SizeBounds,
) -> f64 {
    if text.is_empty() || available_width <= 0.0 {
        return bounds.min;
    }

    let mut size = bounds.max;
    while total_width(text, size, format, breakpoint) > available_width && size > bounds.min {
        size -= STEP;
    }

    apply_breakpoint_cap(size, breakpoint).max(bounds.min)
}

/// ## Summary
/// Remembers the last computed size and only recomputes when an input
/// changes.
#[derive(Debug, Clone)]
pub struct AdaptiveSizeState {
    bounds: SizeBounds,
    format: TimeFormat,
    last: Option<(String, u64, Breakpoint)>,
    font_size: f64,
}

impl AdaptiveSizeState {
    #[must_use]
    pub fn new(bounds: SizeBounds, format: TimeFormat) -> Self {
        Self {
            bounds,
            format,
            last: None,
            font_size: bounds.min,
        }
    }

    #[must_use]
    pub const fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Switching formats forces a recompute on the next update.
    pub fn set_format(&mut self, format: TimeFormat) {
        if self.format != format {
            self.format = format;
            self.last = None;
        }
    }

    /// ## Summary
    /// Recomputes for `text` in `available_width` on a viewport of
    /// `viewport_width`, and returns the new size.
    pub fn update(&mut self, text: &str, available_width: f64, viewport_width: f64) -> f64 {
        let breakpoint = Breakpoint::classify(viewport_width);
        let key = (text.to_string(), available_width.to_bits(), breakpoint);
        if self.last.as_ref() == Some(&key) {
            return self.font_size;
        }

        self.font_size =
            compute_font_size(text, available_width, self.format, breakpoint, self.bounds);
        tracing::trace!(text = %text, available_width, font_size = self.font_size, "Resized clock text");
        self.last = Some(key);
        self.font_size
    }
}
