//! Parsing for the two observed entry styles: a single comma-joined
//! line with bare numbers, and separately prompted fields carrying
//! explicit unit suffixes.

use calplan_model::profile::{ActivityLevel, Gender, Profile};

use crate::{Error, Result};

const LBS_TO_KG: f64 = 0.453592;
const IN_TO_CM: f64 = 2.54;

/// Parse "age, weight, height, gender, activity level" from one line.
/// Weight and height are bare numbers already in kg/cm; no unit
/// conversion is applied here.
pub fn parse_inline(line: &str) -> Result<Profile> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 5 {
        return Err(Error::InvalidInputShape);
    }

    Ok(Profile::new(
        parse_positive(fields[0])?,
        parse_positive(fields[1])?,
        parse_positive(fields[2])?,
        parse_gender(fields[3])?,
        parse_activity_level(fields[4])?,
    ))
}

/// Parse five separately prompted fields. Weight must end in "kg" or
/// "lbs", height in "cm" or "in"; any other suffix is rejected.
pub fn parse_fields(
    age: &str,
    weight: &str,
    height: &str,
    gender: &str,
    activity_level: &str,
) -> Result<Profile> {
    Ok(Profile::new(
        parse_positive(age)?,
        parse_weight(weight)?,
        parse_height(height)?,
        parse_gender(gender)?,
        parse_activity_level(activity_level)?,
    ))
}

/// Normalize a weight field with unit suffix to kilograms.
pub fn parse_weight(field: &str) -> Result<f64> {
    let field = field.trim().to_lowercase();
    if let Some(kilograms) = field.strip_suffix("kg") {
        parse_positive(kilograms)
    } else if let Some(pounds) = field.strip_suffix("lbs") {
        Ok(parse_positive(pounds)? * LBS_TO_KG)
    } else {
        Err(Error::InvalidUnit("Weight", "kg or lbs"))
    }
}

/// Normalize a height field with unit suffix to centimeters.
pub fn parse_height(field: &str) -> Result<f64> {
    let field = field.trim().to_lowercase();
    if let Some(centimeters) = field.strip_suffix("cm") {
        parse_positive(centimeters)
    } else if let Some(inches) = field.strip_suffix("in") {
        Ok(parse_positive(inches)? * IN_TO_CM)
    } else {
        Err(Error::InvalidUnit("Height", "cm or in"))
    }
}

fn parse_positive(field: &str) -> Result<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
        .ok_or(Error::InvalidNumericInput)
}

fn parse_gender(field: &str) -> Result<Gender> {
    field
        .trim()
        .to_lowercase()
        .parse()
        .map_err(|_| Error::InvalidGender)
}

fn parse_activity_level(field: &str) -> Result<ActivityLevel> {
    field
        .trim()
        .to_lowercase()
        .parse()
        .map_err(|_| Error::InvalidActivityLevel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_inline_accepts_five_fields() {
        let profile = parse_inline("25, 70, 175, male, sedentary").unwrap();
        assert_eq!(
            profile,
            Profile::new(25.0, 70.0, 175.0, Gender::Male, ActivityLevel::Sedentary)
        );
    }

    #[test]
    fn parse_inline_rejects_wrong_field_count() {
        let test_data = ["", "25", "25, 70, 175, male", "25, 70, 175, male, sedentary, extra"];

        for (i, input) in test_data.into_iter().enumerate() {
            assert!(
                matches!(parse_inline(input), Err(Error::InvalidInputShape)),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn parse_inline_rejects_bad_numbers() {
        let test_data = [
            "abc, 70, 175, male, sedentary",
            "25, -70, 175, male, sedentary",
            "25, 70, NaN, male, sedentary",
            "25, 70, inf, male, sedentary",
        ];

        for (i, input) in test_data.into_iter().enumerate() {
            assert!(
                matches!(parse_inline(input), Err(Error::InvalidNumericInput)),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn parse_inline_rejects_unknown_gender_and_activity() {
        assert!(matches!(
            parse_inline("25, 70, 175, other, sedentary"),
            Err(Error::InvalidGender)
        ));
        assert!(matches!(
            parse_inline("25, 70, 175, male, hyperactive"),
            Err(Error::InvalidActivityLevel)
        ));
    }

    #[test]
    fn parse_weight_normalizes_units() {
        let test_data = [
            ("70kg", 70.0),
            ("70 kg", 70.0),
            (" 70KG ", 70.0),
            ("154lbs", 154.0 * 0.453592),
            ("154 lbs", 154.0 * 0.453592),
        ];

        for (i, (input, expected_output)) in test_data.into_iter().enumerate() {
            let weight = parse_weight(input).unwrap();
            assert!(
                (weight - expected_output).abs() < 1e-9,
                "Test case #{}: {} != {}",
                i,
                weight,
                expected_output
            );
        }
    }

    #[test]
    fn parse_weight_rejects_unknown_suffix() {
        let test_data = ["70", "70 stone", "70g"];

        for (i, input) in test_data.into_iter().enumerate() {
            assert!(
                matches!(parse_weight(input), Err(Error::InvalidUnit("Weight", _))),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn parse_height_normalizes_units() {
        let test_data = [("175cm", 175.0), ("175 cm", 175.0), ("69in", 175.26), ("69 IN", 175.26)];

        for (i, (input, expected_output)) in test_data.into_iter().enumerate() {
            let height = parse_height(input).unwrap();
            assert!(
                (height - expected_output).abs() < 1e-9,
                "Test case #{}: {} != {}",
                i,
                height,
                expected_output
            );
        }
    }

    #[test]
    fn parse_height_rejects_unknown_suffix() {
        let test_data = ["175", "175 m", "5ft"];

        for (i, input) in test_data.into_iter().enumerate() {
            assert!(
                matches!(parse_height(input), Err(Error::InvalidUnit("Height", _))),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn parse_fields_accepts_suffixed_units() {
        let profile = parse_fields("25", "70 kg", "175 cm", "male", "sedentary").unwrap();
        assert_eq!(
            profile,
            Profile::new(25.0, 70.0, 175.0, Gender::Male, ActivityLevel::Sedentary)
        );
    }

    #[test]
    fn parse_fields_converted_units_match_direct_entry() {
        let converted = parse_fields("25", "154 lbs", "69 in", "female", "very active").unwrap();
        let direct =
            parse_fields("25", "69.853168 kg", "175.26 cm", "female", "very active").unwrap();
        assert!((converted.weight_kg - direct.weight_kg).abs() < 1e-6);
        assert!((converted.height_cm - direct.height_cm).abs() < 1e-6);
    }
}
