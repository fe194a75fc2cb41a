use plotly::{
    ScatterMapbox,
    common::Marker,
    layout::{Center, Layout, Mapbox, MapboxStyle, Margin},
};
use serde_json::{Value, json};

use crate::constants::sample_data::{CIRCLE_FILL_OPACITY, FACILITY_MARKER_SIZE};
use crate::io::data_ingest::{ColorTable, Facility, IncidentRecord};

/// Builds the disease map figure: one marker trace for the care facilities
/// and one circle trace per incidence record, over OpenStreetMap tiles.
pub fn create_disease_map_fig(
    facilities: &[Facility],
    incidents: &[IncidentRecord],
    colors: &ColorTable,
    center: (f64, f64),
    zoom: u8,
) -> Result<Value, anyhow::Error> {
    // Facility layer: point markers colored by the category rule
    let lat: Vec<f64> = facilities.iter().map(|f| f.latitude).collect();
    let lon: Vec<f64> = facilities.iter().map(|f| f.longitude).collect();
    let names: Vec<String> = facilities.iter().map(|f| f.name.clone()).collect();
    let marker_colors: Vec<String> = facilities
        .iter()
        .map(|f| f.category.marker_color().to_string())
        .collect();

    let facility_trace = ScatterMapbox::new(lat, lon)
        .text_array(names)
        .name("Care facilities")
        .marker(
            Marker::new()
                .size(FACILITY_MARKER_SIZE)
                .color_array(marker_colors),
        );

    let mut data = vec![serde_json::to_value(&facility_trace)?];

    // Incidence layer. The typed marker size is integral; the circle radii
    // are fractional, so these traces are raw JSON.
    for incident in incidents {
        data.push(json!({
            "type": "scattermapbox",
            "mode": "markers",
            "lat": [incident.latitude],
            "lon": [incident.longitude],
            "marker": {
                "size": incident.radius(),
                "color": colors.lookup_or_default(&incident.disease),
                "opacity": CIRCLE_FILL_OPACITY
            },
            "text": [incident.popup_label()],
            "hoverinfo": "text",
            "name": incident.disease.as_str()
        }));
    }

    let layout = Layout::new()
        .mapbox(
            Mapbox::new()
                .style(MapboxStyle::OpenStreetMap)
                .center(Center::new(center.0, center.1))
                .zoom(zoom),
        )
        .margin(Margin::new().top(0).bottom(0).left(0).right(0))
        .auto_size(true)
        .show_legend(false);

    Ok(json!({
        "data": data,
        "layout": serde_json::to_value(&layout)?
    }))
}
