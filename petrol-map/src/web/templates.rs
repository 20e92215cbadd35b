//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{FuelType, NormalizedStation};

use super::form::{FormErrors, PetrolForm};

/// Search page: form, map and station list.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub postcode: String,
    pub fuel_options: Vec<FuelOption>,
    pub csrf_token: String,
    pub errors: FormErrors,
    pub notice: Option<String>,
    pub map_html: String,
    pub stations: Vec<StationView>,
}

impl IndexTemplate {
    /// Page for a form that has not been submitted.
    pub fn blank(csrf_token: String, map_html: String) -> Self {
        Self {
            postcode: String::new(),
            fuel_options: FuelOption::all(None),
            csrf_token,
            errors: FormErrors::default(),
            notice: None,
            map_html,
            stations: Vec::new(),
        }
    }

    /// Page echoing back a submitted form.
    pub fn submitted(form: &PetrolForm, csrf_token: String, map_html: String) -> Self {
        Self {
            postcode: form.postcode.clone(),
            fuel_options: FuelOption::all(Some(&form.fuel_type)),
            ..Self::blank(csrf_token, map_html)
        }
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

/// One entry in the fuel type drop-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuelOption {
    pub label: &'static str,
    pub selected: bool,
}

impl FuelOption {
    /// Every fuel type, marking the one matching `selected`.
    pub fn all(selected: Option<&str>) -> Vec<Self> {
        FuelType::ALL
            .iter()
            .map(|fuel| Self {
                label: fuel.label(),
                selected: selected == Some(fuel.label()),
            })
            .collect()
    }
}

/// Station list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationView {
    pub name: String,
    pub address: Option<String>,
}

impl From<&NormalizedStation> for StationView {
    fn from(station: &NormalizedStation) -> Self {
        Self {
            name: station.label().to_string(),
            address: station.display_address.clone(),
        }
    }
}
