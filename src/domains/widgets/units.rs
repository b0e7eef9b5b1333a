//! Unit converter.
//!
//! Every category except temperature converts linearly through a base unit
//! (meter, kilogram, square meter, liter, meter per second). Temperature
//! scales do not share a zero, so they pivot through Celsius.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::{ValidationError, WidgetResult};

/// Measurement families the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
    Area,
    Volume,
    Speed,
}

/// A unit and its size relative to the category's base unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    pub key: &'static str,
    pub label: &'static str,
    /// Multiplier to the base unit. Unused for temperature.
    pub factor: f64,
}

const fn unit(key: &'static str, label: &'static str, factor: f64) -> Unit {
    Unit { key, label, factor }
}

const LENGTH: &[Unit] = &[
    unit("meter", "Meter (m)", 1.0),
    unit("kilometer", "Kilometer (km)", 1000.0),
    unit("centimeter", "Centimeter (cm)", 0.01),
    unit("millimeter", "Millimeter (mm)", 0.001),
    unit("inch", "Inch (in)", 0.0254),
    unit("foot", "Foot (ft)", 0.3048),
    unit("yard", "Yard (yd)", 0.9144),
    unit("mile", "Mile (mi)", 1609.34),
];

const WEIGHT: &[Unit] = &[
    unit("kilogram", "Kilogram (kg)", 1.0),
    unit("gram", "Gram (g)", 0.001),
    unit("pound", "Pound (lb)", 0.453592),
    unit("ounce", "Ounce (oz)", 0.0283495),
    unit("ton", "Ton (t)", 1000.0),
    unit("stone", "Stone (st)", 6.35029),
];

const TEMPERATURE: &[Unit] = &[
    unit("celsius", "Celsius (°C)", 1.0),
    unit("fahrenheit", "Fahrenheit (°F)", 1.0),
    unit("kelvin", "Kelvin (K)", 1.0),
];

const AREA: &[Unit] = &[
    unit("squareMeter", "Square Meter (m²)", 1.0),
    unit("squareKilometer", "Square Kilometer (km²)", 1_000_000.0),
    unit("squareCentimeter", "Square Centimeter (cm²)", 0.0001),
    unit("squareInch", "Square Inch (in²)", 0.00064516),
    unit("squareFoot", "Square Foot (ft²)", 0.092903),
    unit("acre", "Acre", 4046.86),
    unit("hectare", "Hectare (ha)", 10_000.0),
];

const VOLUME: &[Unit] = &[
    unit("liter", "Liter (L)", 1.0),
    unit("milliliter", "Milliliter (mL)", 0.001),
    unit("gallon", "Gallon (gal)", 3.78541),
    unit("quart", "Quart (qt)", 0.946353),
    unit("pint", "Pint (pt)", 0.473176),
    unit("cup", "Cup", 0.236588),
    unit("fluidOunce", "Fluid Ounce (fl oz)", 0.0295735),
];

const SPEED: &[Unit] = &[
    unit("meterPerSecond", "Meter/Second (m/s)", 1.0),
    unit("kilometerPerHour", "Kilometer/Hour (km/h)", 0.277778),
    unit("milePerHour", "Mile/Hour (mph)", 0.44704),
    unit("knot", "Knot", 0.514444),
    unit("footPerSecond", "Foot/Second (ft/s)", 0.3048),
];

impl UnitCategory {
    pub const ALL: [UnitCategory; 6] = [
        Self::Length,
        Self::Weight,
        Self::Temperature,
        Self::Area,
        Self::Volume,
        Self::Speed,
    ];

    /// Units in display order; the first is the base unit.
    pub fn units(self) -> &'static [Unit] {
        match self {
            Self::Length => LENGTH,
            Self::Weight => WEIGHT,
            Self::Temperature => TEMPERATURE,
            Self::Area => AREA,
            Self::Volume => VOLUME,
            Self::Speed => SPEED,
        }
    }

    /// Look up a unit by key.
    pub fn unit(self, key: &str) -> WidgetResult<&'static Unit> {
        self.units().iter().find(|u| u.key == key).ok_or_else(|| {
            let known: Vec<_> = self.units().iter().map(|u| u.key).collect();
            ValidationError::new(format!(
                "Unknown {:?} unit '{}'. Expected one of: {}",
                self,
                key,
                known.join(", ")
            ))
        })
    }
}

/// Convert `value` between two units of the same category.
pub fn convert(category: UnitCategory, value: f64, from: &str, to: &str) -> WidgetResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::new("Please enter a valid number"));
    }

    let from = category.unit(from)?;
    let to = category.unit(to)?;

    if category == UnitCategory::Temperature {
        return Ok(from_celsius(to_celsius(value, from.key), to.key));
    }

    Ok(value * from.factor / to.factor)
}

fn to_celsius(value: f64, unit: &str) -> f64 {
    match unit {
        "fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        "kelvin" => value - 273.15,
        _ => value,
    }
}

fn from_celsius(celsius: f64, unit: &str) -> f64 {
    match unit {
        "fahrenheit" => celsius * 9.0 / 5.0 + 32.0,
        "kelvin" => celsius + 273.15,
        _ => celsius,
    }
}

/// Render a result with at most six decimals and no trailing zeros.
pub fn format_value(value: f64) -> String {
    let fixed = format!("{:.6}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_to_feet() {
        let feet = convert(UnitCategory::Length, 1.0, "meter", "foot").unwrap();
        assert!((feet - 3.28084).abs() < 1e-5);
        assert_eq!(format_value(feet), "3.28084");
    }

    #[test]
    fn test_celsius_to_fahrenheit_is_exact() {
        assert_eq!(
            convert(UnitCategory::Temperature, 0.0, "celsius", "fahrenheit").unwrap(),
            32.0
        );
        assert_eq!(
            convert(UnitCategory::Temperature, 100.0, "celsius", "fahrenheit").unwrap(),
            212.0
        );
    }

    #[test]
    fn test_temperature_through_celsius() {
        let kelvin = convert(UnitCategory::Temperature, 212.0, "fahrenheit", "kelvin").unwrap();
        assert_eq!(format_value(kelvin), "373.15");
    }

    #[test]
    fn test_linear_categories() {
        let grams = convert(UnitCategory::Weight, 2.5, "kilogram", "gram").unwrap();
        assert_eq!(format_value(grams), "2500");

        let hectares = convert(UnitCategory::Area, 1.0, "squareKilometer", "hectare").unwrap();
        assert_eq!(format_value(hectares), "100");
    }

    #[test]
    fn test_unknown_unit() {
        let err = convert(UnitCategory::Speed, 1.0, "furlong", "knot").unwrap_err();
        assert!(err.message().contains("furlong"));
    }

    #[test]
    fn test_rejects_non_finite_input() {
        assert!(convert(UnitCategory::Length, f64::NAN, "meter", "foot").is_err());
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1_000_000.0), "1000000");
        assert_eq!(format_value(100.5), "100.5");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn test_every_category_has_units() {
        for category in UnitCategory::ALL {
            assert!(category.units().len() >= 3);
        }
    }
}
