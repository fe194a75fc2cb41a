use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

const MAP_DIV_ID: &str = "disease_map";

//Static legend block. It mirrors DISEASE_COLORS but is maintained by hand;
//the two must be kept in sync manually when diseases are added or recolored.
const LEGEND_HTML: &str = r#"<div style="position: fixed;
            bottom: 50px; left: 50px; width: 150px; height: auto;
            background-color: white;
            border: 2px solid grey;
            z-index: 9999;
            font-size: 14px;
            padding: 10px;
            box-shadow: 2px 2px 5px rgba(0, 0, 0, 0.3);">
    <b>Disease Legend</b><br>
    <i style="color: blue;">&#9679;</i> Flu<br>
    <i style="color: green;">&#9679;</i> Cold<br>
    <i style="color: orange;">&#9679;</i> Diabetes<br>
    <i style="color: red;">&#9679;</i> Heart Disease<br>
    <i style="color: violet;">&#9679;</i> Cancer<br>
    <i style="color: purple;">&#9679;</i> Dengue<br>
    <i style="color: yellow;">&#9679;</i> Corona<br>
    <i style="color: brown;">&#9679;</i> Normal Injury<br>
    <i style="color: indigo;">&#9679;</i> Psychological Imbalance<br>
    <i style="color: gray;">&#9679;</i> Trauma<br>
</div>"#;

// Helper to splice a plotly figure JSON into a rendered div
fn plotly_map_script(div_id: &str, fig_json: &str) -> String {
    format!(
        r#"
<div id="{div_id}" style="width:100vw; height:100vh;"></div>
<script type="text/javascript">
(function() {{
    var fig = {fig_json};
    Plotly.newPlot('{div_id}', fig.data, fig.layout, {{displayModeBar: false, responsive: true}});
}})();
</script>
"#
    )
}

/// Composes the self-contained interactive map document: base tiles, markers,
/// incidence circles, and the fixed legend overlay.
#[must_use]
pub fn build_map_document(fig: &Value) -> String {
    let map_html = plotly_map_script(MAP_DIV_ID, &fig.to_string());
    format!(
        r#"<!DOCTYPE html>
<html>
    <head>
        <title>Disease Analysis Map</title>
        <script src="https://cdn.plot.ly/plotly-latest.min.js"></script>
        <style>
        body {{margin: 0; padding: 0;}}
        </style>
    </head>
    <body>
        {map_html}
        {LEGEND_HTML}
    </body>
</html>
"#
    )
}

pub fn write_map_document(fig: &Value, output_path: &Path) -> Result<()> {
    let html_string = build_map_document(fig);

    fs::write(output_path, html_string)
        .with_context(|| format!("failed to write map document to {}", output_path.display()))?;
    println!("Disease analysis map written to {}", output_path.display());

    Ok(())
}
