use crate::io::data_ingest::{ColorTable, Facility, FacilityCategory, IncidentRecord};

//Map view defaults
pub const MAP_CENTER: (f64, f64) = (4.0, -76.0);
pub const MAP_ZOOM: u8 = 14;
//Conventional output filenames; the landing page link must match MAP_OUTPUT
pub const MAP_OUTPUT: &str = "disease_analysis_map.html";
pub const LANDING_OUTPUT: &str = "index.html";
//Incidence circle styling
pub const CIRCLE_FILL_OPACITY: f64 = 0.6;
pub const FACILITY_MARKER_SIZE: usize = 12;
//Fallback for diseases missing from DISEASE_COLORS
pub const FALLBACK_COLOR: &str = "white";

//Display colors for the tracked diseases
pub const DISEASE_COLORS: [(&str, &str); 10] = [
    ("Flu", "blue"),
    ("Cold", "green"),
    ("Diabetes", "orange"),
    ("Heart Disease", "red"),
    ("Cancer", "violet"),
    ("Dengue", "purple"),
    ("Corona", "yellow"),
    ("Normal Injury", "brown"),
    ("Psychological Imbalance", "indigo"),
    ("Trauma", "gray"),
];

//Sample tables: name, latitude, longitude, category / disease, latitude,
//longitude, affected count
const FACILITY_ROWS: [(&str, f64, f64, FacilityCategory); 10] = [
    ("Hospital A", 40.7128, -74.0060, FacilityCategory::Hospital),
    ("Nursing Home B", 21.8975, -63.0981, FacilityCategory::NursingHome),
    ("Hospital C", 65.4356, -49.5163, FacilityCategory::Hospital),
    ("Nursing Home D", 33.6521, -21.5647, FacilityCategory::NursingHome),
    ("Hospital B", 75.6857, -75.4562, FacilityCategory::Hospital),
    ("Hospital D", 29.8796, -42.6789, FacilityCategory::Hospital),
    ("Nursing Home E", 4.56231, -25.5631, FacilityCategory::NursingHome),
    ("Nursing Home X", 68.8792, -53.1458, FacilityCategory::NursingHome),
    ("Nursing Home M", 71.589, -61.3287, FacilityCategory::NursingHome),
    ("Hospital Z", 54.6897, -1.69871, FacilityCategory::Hospital),
];

const INCIDENT_ROWS: [(&str, f64, f64, u32); 10] = [
    ("Flu", 40.7128, -74.0060, 100),
    ("Cold", 21.8975, -63.0981, 50),
    ("Diabetes", 65.4356, -49.5163, 30),
    ("Heart Disease", 33.6521, -21.5647, 45),
    ("Cancer", 75.6857, -75.4562, 18),
    ("Dengue", 29.8796, -42.6789, 63),
    ("Corona", 4.56231, -25.5631, 93),
    ("Normal Injury", 68.8792, -53.1458, 33),
    ("Psychological Imbalance", 71.589, -61.3287, 17),
    ("Trauma", 54.6897, -1.69871, 77),
];

#[must_use]
pub fn sample_facilities() -> Vec<Facility> {
    FACILITY_ROWS
        .iter()
        .map(|&(name, latitude, longitude, category)| Facility {
            name: name.to_string(),
            latitude,
            longitude,
            category,
        })
        .collect()
}

#[must_use]
pub fn sample_incidents() -> Vec<IncidentRecord> {
    INCIDENT_ROWS
        .iter()
        .map(|&(disease, latitude, longitude, affected)| IncidentRecord {
            disease: disease.to_string(),
            latitude,
            longitude,
            affected,
        })
        .collect()
}

#[must_use]
pub fn disease_color_table() -> ColorTable {
    ColorTable::new(&DISEASE_COLORS, FALLBACK_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_tables_have_ten_rows() {
        assert_eq!(sample_facilities().len(), 10);
        assert_eq!(sample_incidents().len(), 10);
    }

    #[test]
    fn test_sample_coordinates_in_range() {
        for facility in sample_facilities() {
            assert!((-90.0..=90.0).contains(&facility.latitude));
            assert!((-180.0..=180.0).contains(&facility.longitude));
        }
        for incident in sample_incidents() {
            assert!((-90.0..=90.0).contains(&incident.latitude));
            assert!((-180.0..=180.0).contains(&incident.longitude));
        }
    }

    #[test]
    fn test_every_sample_disease_has_a_color() {
        let table = disease_color_table();
        for incident in sample_incidents() {
            assert_ne!(table.lookup_or_default(&incident.disease), FALLBACK_COLOR);
        }
    }
}
