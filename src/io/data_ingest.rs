use serde::Serialize;
use std::collections::HashMap;

/////////////// Structs holding the fixed surveillance tables ///////////////

/// Care facility kind. The marker styling rule is a two-way split on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FacilityCategory {
    Hospital,
    NursingHome,
}

impl FacilityCategory {
    /// Marker color for the facility layer. Exhaustive over both variants.
    #[must_use]
    pub fn marker_color(self) -> &'static str {
        match self {
            Self::Hospital => "purple",
            Self::NursingHome => "lightblue",
        }
    }
}

/// A hospital or nursing-home location
#[derive(Debug, Clone, Serialize)]
pub struct Facility {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: FacilityCategory,
}

/// A geocoded disease incidence count
#[derive(Debug, Clone, Serialize)]
pub struct IncidentRecord {
    pub disease: String,
    pub latitude: f64,
    pub longitude: f64,
    pub affected: u32,
}

impl IncidentRecord {
    /// Circle radius in marker-size units. Fractional values are kept exact.
    #[must_use]
    pub fn radius(&self) -> f64 {
        f64::from(self.affected) / 10.0
    }

    /// Hover label shown on the incidence circle.
    #[must_use]
    pub fn popup_label(&self) -> String {
        format!("{} - Affected: {}", self.disease, self.affected)
    }
}

/// Disease to display-color mapping with a fixed fallback for unknown names.
#[derive(Debug, Clone)]
pub struct ColorTable {
    colors: HashMap<String, String>,
    fallback: String,
}

impl ColorTable {
    #[must_use]
    pub fn new(entries: &[(&str, &str)], fallback: &str) -> Self {
        let colors = entries
            .iter()
            .map(|(disease, color)| ((*disease).to_string(), (*color).to_string()))
            .collect();
        Self {
            colors,
            fallback: fallback.to_string(),
        }
    }

    /// Color for a disease name, or the fallback if the name is not mapped.
    #[must_use]
    pub fn lookup_or_default(&self, disease: &str) -> &str {
        self.colors
            .get(disease)
            .map_or(self.fallback.as_str(), String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_color_two_way_split() {
        assert_eq!(FacilityCategory::Hospital.marker_color(), "purple");
        assert_eq!(FacilityCategory::NursingHome.marker_color(), "lightblue");
    }

    #[test]
    fn test_radius_is_tenth_of_affected() {
        let flu = IncidentRecord {
            disease: "Flu".to_string(),
            latitude: 40.7128,
            longitude: -74.0060,
            affected: 100,
        };
        assert_eq!(flu.radius(), 10.0);

        let odd = IncidentRecord {
            disease: "Unknown Disease".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            affected: 55,
        };
        assert_eq!(odd.radius(), 5.5);
    }

    #[test]
    fn test_popup_label_format() {
        let flu = IncidentRecord {
            disease: "Flu".to_string(),
            latitude: 40.7128,
            longitude: -74.0060,
            affected: 100,
        };
        assert_eq!(flu.popup_label(), "Flu - Affected: 100");
    }

    #[test]
    fn test_color_lookup_known_and_fallback() {
        let table = ColorTable::new(&[("Flu", "blue"), ("Cold", "green")], "white");
        assert_eq!(table.lookup_or_default("Flu"), "blue");
        assert_eq!(table.lookup_or_default("Cold"), "green");
        assert_eq!(table.lookup_or_default("Unknown Disease"), "white");
        assert_eq!(table.lookup_or_default(""), "white");
    }
}
