use std::fmt;

/// Accepted weight range in kilograms.
pub const WEIGHT_RANGE: (f64, f64) = (20.0, 300.0);

/// Accepted height range in centimeters.
pub const HEIGHT_RANGE: (f64, f64) = (100.0, 250.0);

/// Accepted age range in years.
pub const AGE_RANGE: (f64, f64) = (13.0, 120.0);

/// Silently pull a weight entry back into range.
pub fn clamp_weight(value: f64) -> f64 {
    value.clamp(WEIGHT_RANGE.0, WEIGHT_RANGE.1)
}

/// Silently pull a height entry back into range.
pub fn clamp_height(value: f64) -> f64 {
    value.clamp(HEIGHT_RANGE.0, HEIGHT_RANGE.1)
}

/// Silently pull an age entry back into range.
pub fn clamp_age(value: f64) -> f64 {
    value.clamp(AGE_RANGE.0, AGE_RANGE.1)
}

/// BMI bands used for the live preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        };
        write!(f, "{}", name)
    }
}

/// Body mass index from weight in kg and height in cm, rounded to one
/// decimal place.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let raw = weight_kg / (height_m * height_m);
    (raw * 10.0).round() / 10.0
}

/// Preview line for the BMI display, e.g. "BMI: 22.9 (Normal)".
///
/// Returns None when either value is missing, non-positive, or not finite;
/// the caller skips the display in that case.
pub fn bmi_label(weight_kg: f64, height_cm: f64) -> Option<String> {
    if !weight_kg.is_finite() || !height_cm.is_finite() || weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }

    let value = bmi(weight_kg, height_cm);
    let category = BmiCategory::classify(value);
    Some(format!("BMI: {:.1} ({})", value, category))
}
