//! Round colouring.
//!
//! Each round gets a hue `(round * step) mod 360` at full saturation and
//! half lightness. Renderers pick whichever form suits them: the CSS-style
//! `hsl(...)` string or an RGB triple for terminals.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default hue distance between consecutive rounds, in degrees.
pub const HUE_STEP: u16 = 40;

/// Hue for `round` using [`HUE_STEP`].
pub fn round_hue(round: u32) -> u16 {
    round_hue_with_step(round, HUE_STEP)
}

/// Hue for `round` using a custom step.
pub fn round_hue_with_step(round: u32, step: u16) -> u16 {
    ((u64::from(round) * u64::from(step)) % 360) as u16
}

/// An HSL colour; saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    /// Colour used for slots drawn in `round`.
    pub fn round_color(round: u32, step: u16) -> Self {
        Self {
            hue: round_hue_with_step(round, step),
            saturation: 100,
            lightness: 50,
        }
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let h = f32::from(self.hue % 360);
        let s = f32::from(self.saturation.min(100)) / 100.0;
        let l = f32::from(self.lightness.min(100)) / 100.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = h / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        (channel(r), channel(g), channel(b))
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}
