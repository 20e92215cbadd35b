//! Fuel type selection.

use std::fmt;
use std::str::FromStr;

/// Error returned when a fuel label is not one of the supported choices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Not a valid choice.")]
pub struct UnknownFuelType {
    pub given: String,
}

/// Fuel types a user can filter stations by.
///
/// Each variant maps to an OpenStreetMap `fuel:*` tag.
///
/// # Examples
///
/// ```
/// use petrol_map::domain::FuelType;
///
/// let fuel: FuelType = "Octane 95".parse().unwrap();
/// assert_eq!(fuel, FuelType::Octane95);
/// assert_eq!(fuel.osm_key(), "fuel:octane_95");
///
/// assert!("Electric".parse::<FuelType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelType {
    Diesel,
    Octane91,
    Octane95,
    Octane98,
    E10,
    Lpg,
    Lh2,
}

impl FuelType {
    /// All choices, in the order they are offered on the form.
    pub const ALL: [FuelType; 7] = [
        FuelType::Diesel,
        FuelType::Octane91,
        FuelType::Octane95,
        FuelType::Octane98,
        FuelType::E10,
        FuelType::Lpg,
        FuelType::Lh2,
    ];

    /// Human-readable label, also the form value.
    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Diesel => "Diesel",
            FuelType::Octane91 => "Octane 91",
            FuelType::Octane95 => "Octane 95",
            FuelType::Octane98 => "Octane 98",
            FuelType::E10 => "E10",
            FuelType::Lpg => "LPG",
            FuelType::Lh2 => "LH2",
        }
    }

    /// OpenStreetMap tag key advertising this fuel at a station.
    pub fn osm_key(&self) -> &'static str {
        match self {
            FuelType::Diesel => "fuel:diesel",
            FuelType::Octane91 => "fuel:octane_91",
            FuelType::Octane95 => "fuel:octane_95",
            FuelType::Octane98 => "fuel:octane_98",
            FuelType::E10 => "fuel:e10",
            FuelType::Lpg => "fuel:lpg",
            FuelType::Lh2 => "fuel:lh2",
        }
    }
}

impl FromStr for FuelType {
    type Err = UnknownFuelType;

    /// Parse a form label. Matching is exact, as with a select field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FuelType::ALL
            .into_iter()
            .find(|f| f.label() == s)
            .ok_or_else(|| UnknownFuelType {
                given: s.to_string(),
            })
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
