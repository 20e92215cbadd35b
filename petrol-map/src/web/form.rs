//! Search form parsing and validation.

use serde::Deserialize;

use crate::domain::{FuelType, Postcode};
use crate::search::SearchRequest;

const REQUIRED: &str = "This field is required.";

/// Raw urlencoded form body. Missing fields deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PetrolForm {
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub fuel_type: String,
    #[serde(default)]
    pub csrf_token: String,
}

/// Messages to show next to each field, and for the form as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub postcode: Vec<String>,
    pub fuel_type: Vec<String>,
    pub form: Vec<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.postcode.is_empty() && self.fuel_type.is_empty() && self.form.is_empty()
    }
}

impl PetrolForm {
    /// Validate the search fields.
    ///
    /// Every failing check on a field is reported, not just the first.
    pub fn validate(&self) -> Result<SearchRequest, FormErrors> {
        let mut errors = FormErrors {
            postcode: Postcode::validate(&self.postcode)
                .iter()
                .map(ToString::to_string)
                .collect(),
            ..FormErrors::default()
        };

        // The choice check runs before the required check, so a blank
        // selection reports both.
        let fuel_type = self
            .fuel_type
            .parse::<FuelType>()
            .map_err(|e| errors.fuel_type.push(e.to_string()))
            .ok();
        if self.fuel_type.trim().is_empty() {
            errors.fuel_type.push(REQUIRED.to_string());
        }

        match (Postcode::parse(&self.postcode), fuel_type) {
            (Ok(postcode), Some(fuel_type)) if errors.is_empty() => Ok(SearchRequest {
                postcode,
                fuel_type,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(postcode: &str, fuel_type: &str) -> PetrolForm {
        PetrolForm {
            postcode: postcode.into(),
            fuel_type: fuel_type.into(),
            csrf_token: String::new(),
        }
    }

    #[test]
    fn valid_submission() {
        let request = form("N19 4LD", "E10").validate().unwrap();
        assert_eq!(request.postcode.as_str(), "N19 4LD");
        assert_eq!(request.fuel_type, FuelType::E10);
    }

    #[test]
    fn invalid_characters() {
        let errors = form("M1 $!%AA", "Diesel").validate().unwrap_err();
        assert!(errors.postcode.contains(&"Not a recognised postcode".to_string()));
        assert!(errors.fuel_type.is_empty());
    }

    #[test]
    fn invalid_length() {
        for postcode in ["M1", "M11", "M111", "M11111111"] {
            let errors = form(postcode, "Diesel").validate().unwrap_err();
            assert!(
                errors.postcode.contains(&"Should be 5 to 7 letters".to_string()),
                "{postcode}: {errors:?}"
            );
        }
    }

    #[test]
    fn every_fuel_type_accepted() {
        for fuel in FuelType::ALL {
            assert!(form("M1 1AA", fuel.label()).validate().is_ok(), "{fuel}");
        }
    }

    #[test]
    fn unknown_fuel_types_rejected() {
        for fuel in ["Electric", "Oil", "Gas", "Petrol"] {
            let errors = form("M1 1AA", fuel).validate().unwrap_err();
            assert_eq!(errors.fuel_type, vec!["Not a valid choice.".to_string()]);
        }
    }

    #[test]
    fn empty_fields_are_required() {
        let errors = PetrolForm::default().validate().unwrap_err();
        assert_eq!(errors.postcode, vec![REQUIRED.to_string()]);
        assert_eq!(
            errors.fuel_type,
            vec!["Not a valid choice.".to_string(), REQUIRED.to_string()]
        );
    }
}
