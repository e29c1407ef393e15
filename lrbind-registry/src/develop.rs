//! The develop-module parameter table.
//!
//! These are the photo-develop settings the host plugin exposes to
//! hardware controls. Seven of them predate the 2012 process version and
//! are read through their versioned setting name.

use crate::{ParameterDescriptor, Registry, Result};

struct Entry {
    name: &'static str,
    alias: Option<&'static str>,
    min: f64,
    max: f64,
}

impl Entry {
    const fn generic(name: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            alias: None,
            min,
            max,
        }
    }

    const fn versioned(name: &'static str, alias: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            alias: Some(alias),
            min,
            max,
        }
    }

    fn descriptor(&self) -> ParameterDescriptor {
        let descriptor = ParameterDescriptor::develop(self.name, self.min, self.max);
        match self.alias {
            Some(alias) => descriptor.with_alias(alias),
            None => descriptor,
        }
    }
}

#[rustfmt::skip]
const PARAMETERS: &[Entry] = &[
    Entry::generic("Temperature", 2000.0, 50000.0),
    Entry::generic("Tint", -150.0, 150.0),
    Entry::versioned("Exposure", "Exposure2012", -5.0, 5.0),
    Entry::versioned("Highlights", "Highlights2012", -100.0, 100.0),
    Entry::versioned("Shadows", "Shadows2012", -100.0, 100.0),
    Entry::generic("Brightness", -150.0, 150.0),
    Entry::versioned("Contrast", "Contrast2012", -100.0, 100.0),
    Entry::versioned("Whites", "Whites2012", -100.0, 100.0),
    Entry::versioned("Blacks", "Blacks2012", -100.0, 100.0),
    Entry::generic("Texture", -100.0, 100.0),
    Entry::versioned("Clarity", "Clarity2012", -100.0, 100.0),
    Entry::generic("Dehaze", -100.0, 100.0),
    Entry::generic("Vibrance", -100.0, 100.0),
    Entry::generic("Saturation", -100.0, 100.0),
    Entry::generic("ParametricDarks", -100.0, 100.0),
    Entry::generic("ParametricLights", -100.0, 100.0),
    Entry::generic("ParametricShadows", -100.0, 100.0),
    Entry::generic("ParametricHighlights", -100.0, 100.0),
    Entry::generic("ParametricShadowSplit", 10.0, 70.0),
    Entry::generic("ParametricMidtoneSplit", 20.0, 80.0),
    Entry::generic("ParametricHighlightSplit", 30.0, 90.0),
    Entry::generic("SaturationAdjustmentRed", -100.0, 100.0),
    Entry::generic("SaturationAdjustmentOrange", -100.0, 100.0),
    Entry::generic("SaturationAdjustmentYellow", -100.0, 100.0),
    Entry::generic("SaturationAdjustmentGreen", -100.0, 100.0),
    Entry::generic("SaturationAdjustmentAqua", -100.0, 100.0),
    Entry::generic("SaturationAdjustmentBlue", -100.0, 100.0),
    Entry::generic("SaturationAdjustmentPurple", -100.0, 100.0),
    Entry::generic("SaturationAdjustmentMagenta", -100.0, 100.0),
    Entry::generic("HueAdjustmentRed", -100.0, 100.0),
    Entry::generic("HueAdjustmentOrange", -100.0, 100.0),
    Entry::generic("HueAdjustmentYellow", -100.0, 100.0),
    Entry::generic("HueAdjustmentGreen", -100.0, 100.0),
    Entry::generic("HueAdjustmentAqua", -100.0, 100.0),
    Entry::generic("HueAdjustmentBlue", -100.0, 100.0),
    Entry::generic("HueAdjustmentPurple", -100.0, 100.0),
    Entry::generic("HueAdjustmentMagenta", -100.0, 100.0),
    Entry::generic("LuminanceAdjustmentRed", -100.0, 100.0),
    Entry::generic("LuminanceAdjustmentOrange", -100.0, 100.0),
    Entry::generic("LuminanceAdjustmentYellow", -100.0, 100.0),
    Entry::generic("LuminanceAdjustmentGreen", -100.0, 100.0),
    Entry::generic("LuminanceAdjustmentAqua", -100.0, 100.0),
    Entry::generic("LuminanceAdjustmentBlue", -100.0, 100.0),
    Entry::generic("LuminanceAdjustmentPurple", -100.0, 100.0),
    Entry::generic("LuminanceAdjustmentMagenta", -100.0, 100.0),
    Entry::generic("SplitToningShadowHue", 0.0, 360.0),
    Entry::generic("SplitToningShadowSaturation", 0.0, 100.0),
    Entry::generic("ColorGradeShadowLum", -100.0, 100.0),
    Entry::generic("SplitToningHighlightHue", 0.0, 360.0),
    Entry::generic("SplitToningHighlightSaturation", 0.0, 100.0),
    Entry::generic("ColorGradeHighlightLum", -100.0, 100.0),
    Entry::generic("ColorGradeMidtoneHue", 0.0, 360.0),
    Entry::generic("ColorGradeMidtoneSat", 0.0, 100.0),
    Entry::generic("ColorGradeMidtoneLum", -100.0, 100.0),
    Entry::generic("ColorGradeGlobalHue", 0.0, 360.0),
    Entry::generic("ColorGradeGlobalSat", 0.0, 100.0),
    Entry::generic("ColorGradeGlobalLum", -100.0, 100.0),
    Entry::generic("SplitToningBalance", -100.0, 100.0),
    Entry::generic("ColorGradeBlending", 0.0, 100.0),
    Entry::generic("Sharpness", 0.0, 150.0),
    Entry::generic("SharpenRadius", 0.5, 3.0),
    Entry::generic("SharpenDetail", 0.0, 100.0),
    Entry::generic("SharpenEdgeMasking", 0.0, 100.0),
    Entry::generic("LuminanceSmoothing", 0.0, 100.0),
    Entry::generic("LuminanceNoiseReductionDetail", 0.0, 100.0),
    Entry::generic("LuminanceNoiseReductionContrast", 0.0, 100.0),
    Entry::generic("ColorNoiseReduction", 0.0, 100.0),
    Entry::generic("ColorNoiseReductionDetail", 0.0, 100.0),
    Entry::generic("ColorNoiseReductionSmoothness", 0.0, 100.0),
    Entry::generic("PostCropVignetteAmount", -100.0, 100.0),
    Entry::generic("PostCropVignetteMidpoint", 0.0, 100.0),
    Entry::generic("PostCropVignetteFeather", 0.0, 100.0),
    Entry::generic("PostCropVignetteRoundness", -100.0, 100.0),
    Entry::generic("PostCropVignetteStyle", 1.0, 3.0),
    Entry::generic("PostCropVignetteHighlightContrast", 0.0, 100.0),
    Entry::generic("GrainAmount", 0.0, 100.0),
    Entry::generic("GrainSize", 0.0, 100.0),
    Entry::generic("GrainFrequency", 0.0, 100.0),
    Entry::generic("LensProfileDistortionScale", 0.0, 200.0),
    Entry::generic("LensProfileVignettingScale", 0.0, 200.0),
    Entry::generic("LensManualDistortionAmount", -100.0, 100.0),
    Entry::generic("DefringePurpleAmount", 0.0, 20.0),
    Entry::generic("DefringePurpleHueLo", 0.0, 60.0),
    Entry::generic("DefringePurpleHueHi", 40.0, 100.0),
    Entry::generic("DefringeGreenAmount", 0.0, 20.0),
    Entry::generic("DefringeGreenHueLo", 0.0, 50.0),
    Entry::generic("DefringeGreenHueHi", 50.0, 100.0),
    Entry::generic("PerspectiveVertical", -100.0, 100.0),
    Entry::generic("PerspectiveHorizontal", -100.0, 100.0),
    Entry::generic("PerspectiveRotate", -10.0, 10.0),
    Entry::generic("PerspectiveScale", 50.0, 150.0),
    Entry::generic("PerspectiveAspect", -100.0, 100.0),
    Entry::generic("PerspectiveX", -100.0, 100.0),
    Entry::generic("PerspectiveY", -100.0, 100.0),
    Entry::generic("PerspectiveUpright", 0.0, 5.0),
    Entry::generic("ShadowTint", -100.0, 100.0),
    Entry::generic("RedHue", -100.0, 100.0),
    Entry::generic("RedSaturation", -100.0, 100.0),
    Entry::generic("GreenHue", -100.0, 100.0),
    Entry::generic("GreenSaturation", -100.0, 100.0),
    Entry::generic("BlueHue", -100.0, 100.0),
    Entry::generic("BlueSaturation", -100.0, 100.0),
];

/// Build the develop parameter registry.
pub fn registry() -> Result<Registry> {
    Registry::new(PARAMETERS.iter().map(Entry::descriptor))
}
