use crate::ConfigError;

const MIN_VIBRANT_SATURATION: f32 = 0.35;
const TARGET_VIBRANT_SATURATION: f32 = 1.0;

const TARGET_MUTED_SATURATION: f32 = 0.3;
const MAX_MUTED_SATURATION: f32 = 0.4;

const MIN_LIGHT_LIGHTNESS: f32 = 0.74;
const TARGET_LIGHT_LIGHTNESS: f32 = 0.85;

const TARGET_DARK_LIGHTNESS: f32 = 0.3;
const MAX_DARK_LIGHTNESS: f32 = 0.45;

const MIN_NORMAL_LIGHTNESS: f32 = 0.3;
const TARGET_NORMAL_LIGHTNESS: f32 = 0.5;
const MAX_NORMAL_LIGHTNESS: f32 = 0.7;

const VIBRANT_SATURATION: (f32, f32, f32) = (MIN_VIBRANT_SATURATION, TARGET_VIBRANT_SATURATION, 1.0);
const MUTED_SATURATION: (f32, f32, f32) = (0.0, TARGET_MUTED_SATURATION, MAX_MUTED_SATURATION);
const LIGHT_LIGHTNESS: (f32, f32, f32) = (MIN_LIGHT_LIGHTNESS, TARGET_LIGHT_LIGHTNESS, 1.0);
const NORMAL_LIGHTNESS: (f32, f32, f32) = (MIN_NORMAL_LIGHTNESS, TARGET_NORMAL_LIGHTNESS, MAX_NORMAL_LIGHTNESS);
const DARK_LIGHTNESS: (f32, f32, f32) = (0.0, TARGET_DARK_LIGHTNESS, MAX_DARK_LIGHTNESS);

/// The six canonical swatch categories.
///
/// Each named target corresponds to one built-in [`TargetProfile`], and a generated
/// [`crate::Palette`] can be asked for the best-matching swatch of each. The
/// enumeration is closed: custom saturation/lightness windows are expressed as
/// additional [`TargetProfile`] values instead of new names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamedTarget {
    Vibrant,
    LightVibrant,
    DarkVibrant,
    Muted,
    LightMuted,
    DarkMuted,
}

impl NamedTarget {
    pub const ALL: [NamedTarget; 6] = [
        NamedTarget::Vibrant,
        NamedTarget::LightVibrant,
        NamedTarget::DarkVibrant,
        NamedTarget::Muted,
        NamedTarget::LightMuted,
        NamedTarget::DarkMuted,
    ];

    /// The built-in target profile for this category.
    pub const fn profile(self) -> TargetProfile {
        let (saturation, lightness) = match self {
            NamedTarget::Vibrant => (VIBRANT_SATURATION, NORMAL_LIGHTNESS),
            NamedTarget::LightVibrant => (VIBRANT_SATURATION, LIGHT_LIGHTNESS),
            NamedTarget::DarkVibrant => (VIBRANT_SATURATION, DARK_LIGHTNESS),
            NamedTarget::Muted => (MUTED_SATURATION, NORMAL_LIGHTNESS),
            NamedTarget::LightMuted => (MUTED_SATURATION, LIGHT_LIGHTNESS),
            NamedTarget::DarkMuted => (MUTED_SATURATION, DARK_LIGHTNESS),
        };

        TargetProfile {
            saturation,
            lightness,
            weight: 1.0,
        }
    }

    /// Classify an HSL color directly by thresholding its saturation and
    /// lightness. Saturation above 0.5 selects the vibrant family, lightness
    /// above 0.7 the light variant and below 0.3 the dark variant.
    pub fn from_hsl(saturation: f32, lightness: f32) -> NamedTarget {
        match (saturation > 0.5, lightness > 0.7, lightness < 0.3) {
            (true, true, _) => NamedTarget::LightVibrant,
            (true, _, true) => NamedTarget::DarkVibrant,
            (true, false, false) => NamedTarget::Vibrant,
            (false, true, _) => NamedTarget::LightMuted,
            (false, _, true) => NamedTarget::DarkMuted,
            (false, false, false) => NamedTarget::Muted,
        }
    }
}

/// A saturation/lightness window describing the kind of color a palette should
/// select, together with a scoring weight.
///
/// Profiles are plain values compared field-by-field; two identically configured
/// profiles are interchangeable as palette lookup keys.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetProfile {
    // min, target, max
    saturation: (f32, f32, f32),
    // min, target, max
    lightness: (f32, f32, f32),
    weight: f32,
}

impl TargetProfile {
    /// Build a custom profile. Each axis must satisfy `0 <= min <= target <= max
    /// <= 1` and the weight must be finite and greater than zero.
    pub fn new(
        saturation: (f32, f32, f32),
        lightness: (f32, f32, f32),
        weight: f32,
    ) -> Result<TargetProfile, ConfigError> {
        validate_axis("saturation", saturation)?;
        validate_axis("lightness", lightness)?;

        if !weight.is_finite() || weight <= 0.0 {
            return Err(ConfigError::InvalidTargetWeight(weight));
        }

        Ok(Self {
            saturation,
            lightness,
            weight,
        })
    }

    pub fn default_targets() -> Vec<TargetProfile> {
        NamedTarget::ALL.iter().map(|named| named.profile()).collect()
    }

    pub fn minimum_saturation(self) -> f32 {
        self.saturation.0
    }

    pub fn target_saturation(self) -> f32 {
        self.saturation.1
    }

    pub fn maximum_saturation(self) -> f32 {
        self.saturation.2
    }

    pub fn minimum_lightness(self) -> f32 {
        self.lightness.0
    }

    pub fn target_lightness(self) -> f32 {
        self.lightness.1
    }

    pub fn maximum_lightness(self) -> f32 {
        self.lightness.2
    }

    pub fn weight(self) -> f32 {
        self.weight
    }
}

fn validate_axis(axis: &'static str, (min, target, max): (f32, f32, f32)) -> Result<(), ConfigError> {
    let ordered = min.is_finite()
        && target.is_finite()
        && max.is_finite()
        && 0.0 <= min
        && min <= target
        && target <= max
        && max <= 1.0;

    if ordered {
        Ok(())
    } else {
        Err(ConfigError::InvalidTargetRange {
            axis,
            min,
            target,
            max,
        })
    }
}
