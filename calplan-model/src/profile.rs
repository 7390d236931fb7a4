use strum::{Display, EnumIter, EnumString};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Biological gender as used by the Mifflin-St Jeor equation. Parsing
/// accepts the common synonyms "men" and "women".
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Gender {
    #[strum(to_string = "male", serialize = "men")]
    Male,
    #[strum(to_string = "female", serialize = "women")]
    Female,
}

/// Self-reported physical activity level. Parsing accepts both the
/// space-joined form ("lightly active") and the hyphenated form
/// ("lightly-active").
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, Display)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ActivityLevel {
    #[strum(to_string = "sedentary")]
    Sedentary,
    #[strum(to_string = "lightly active", serialize = "lightly-active")]
    LightlyActive,
    #[strum(to_string = "moderately active", serialize = "moderately-active")]
    ModeratelyActive,
    #[strum(to_string = "very active", serialize = "very-active")]
    VeryActive,
    #[strum(to_string = "super active", serialize = "super-active")]
    SuperActive,
}

impl ActivityLevel {
    /// Fixed scalar applied to the BMR base value to estimate total
    /// daily energy expenditure.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::SuperActive => 1.9,
        }
    }
}

/// Biometric inputs for a single calorie computation. Weight and height
/// are always normalized to kilograms and centimeters before a profile
/// is constructed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Profile {
    pub age: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
}

impl Profile {
    pub fn new(
        age: f64,
        weight_kg: f64,
        height_cm: f64,
        gender: Gender,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            age,
            weight_kg,
            height_cm,
            gender,
            activity_level,
        }
    }
}
