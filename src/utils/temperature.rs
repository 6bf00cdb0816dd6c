//! Blackbody palette used by the aging model.
//!
//! The curve is the well-known empirical fit of CIE blackbody chromaticity
//! (parameterized in hundreds of kelvin). It is only meant to look right.

use super::Rgb;

/// Hottest temperature in the palette, used for age 2.
pub const HOTTEST_KELVIN: f64 = 8000.;
/// Coldest temperature in the palette, used for age 255.
pub const COLDEST_KELVIN: f64 = 200.;
/// Below this temperature the color fades linearly towards black.
pub const FADE_KELVIN: f64 = 1000.;

/// Approximate color of a blackbody radiator at `kelvin`.
///
/// Total over all inputs: channels are clamped into `[0, 255]` and
/// non-positive or NaN temperatures give black.
pub fn temperature_color(kelvin: f64) -> Rgb {
    let t = kelvin / 100.;

    let r = if t <= 66. {
        255.
    } else {
        329.698727446 * (t - 60.).powf(-0.1332047592)
    };
    let g = if t <= 66. {
        99.4708025861 * t.ln() - 161.1195681661
    } else {
        288.1221695283 * (t - 60.).powf(-0.0755148492)
    };
    let b = if t >= 66. {
        255.
    } else if t <= 19. {
        0.
    } else {
        138.5177312231 * (t - 10.).ln() - 305.0447927307
    };

    let fade = if kelvin < FADE_KELVIN {
        (kelvin / FADE_KELVIN).clamp(0., 1.)
    } else {
        1.
    };
    let channel = |v: f64| v.clamp(0., u8::MAX as f64) * fade;
    Rgb::from_f64(channel(r), channel(g), channel(b))
}

/// Immutable age -> color lookup table.
#[derive(Clone, Debug)]
pub struct AgePalette {
    colors: [Rgb; 256],
}

impl AgePalette {
    pub const BACKGROUND: Rgb = Rgb::BLACK;
    pub const NEWBORN: Rgb = Rgb::WHITE;

    pub fn new() -> Self {
        let mut colors = [Self::BACKGROUND; 256];
        colors[1] = Self::NEWBORN;
        let ratio = COLDEST_KELVIN / HOTTEST_KELVIN;
        let span = (colors.len() - 3) as f64;
        for (i, color) in colors.iter_mut().enumerate().skip(2) {
            let kelvin = HOTTEST_KELVIN * ratio.powf((i - 2) as f64 / span);
            *color = temperature_color(kelvin);
        }
        log::debug!(
            "age palette built: {:?} at age 2, {:?} at age 255",
            colors[2],
            colors[255]
        );
        Self { colors }
    }

    pub fn color_for_age(&self, age: u8) -> Rgb {
        self.colors[age as usize]
    }
}

impl Default for AgePalette {
    fn default() -> Self {
        Self::new()
    }
}
