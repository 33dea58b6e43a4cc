//! Shade ramps precomputed per color token

use bootstyle_core::Color;

/// Number of steps in every ramp (100 through 900)
pub const SHADE_STEPS: usize = 9;

/// Ramp step holding the unmodified base color
pub const BASE_SHADE: u16 = 500;

/// Lightest and darkest shade numbers
pub const MIN_SHADE: u16 = 100;
pub const MAX_SHADE: u16 = 900;

// Weights toward white for 100..400 and toward black for 600..900.
const TINT_WEIGHTS: [f32; 4] = [0.80, 0.60, 0.40, 0.20];
const TONE_WEIGHTS: [f32; 4] = [0.20, 0.40, 0.60, 0.80];

/// A 9-step shade ramp, lightest first
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadeRamp {
    steps: [Color; SHADE_STEPS],
}

impl ShadeRamp {
    /// Generate the ramp for a base color
    pub fn generate(base: Color) -> Self {
        let mut steps = [base; SHADE_STEPS];
        for (i, weight) in TINT_WEIGHTS.iter().enumerate() {
            steps[i] = base.mix(Color::WHITE, *weight).quantized();
        }
        steps[4] = base.quantized();
        for (i, weight) in TONE_WEIGHTS.iter().enumerate() {
            steps[5 + i] = base.mix(Color::BLACK, *weight).quantized();
        }
        Self { steps }
    }

    /// Ramp index for a shade number, clamped to the nearest valid step.
    ///
    /// `100` maps to the first step and `900` to the last; anything outside
    /// the domain snaps to the closest end.
    pub fn index_for(shade: u16) -> usize {
        let step = (u32::from(shade) + 50) / 100;
        (step.clamp(1, SHADE_STEPS as u32) - 1) as usize
    }

    /// Color for a shade number
    pub fn shade(&self, shade: u16) -> Color {
        self.steps[Self::index_for(shade)]
    }

    pub fn base(&self) -> Color {
        self.steps[4]
    }

    pub fn steps(&self) -> &[Color; SHADE_STEPS] {
        &self.steps
    }
}
