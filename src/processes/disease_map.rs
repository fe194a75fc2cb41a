use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::constants::sample_data::{
    MAP_CENTER, MAP_OUTPUT, MAP_ZOOM, disease_color_table, sample_facilities, sample_incidents,
};
use crate::io::create_map_html::write_map_document;
use crate::utils::plotting::create_disease_map_fig;

#[derive(Parser, Debug)]
#[command(about = "Render the interactive disease incidence and facility map")]
pub struct DiseaseMapArgs {
    /// Output HTML file path
    #[arg(short = 'o', long = "output", default_value = MAP_OUTPUT)]
    pub output: PathBuf,
}

pub fn disease_map_process(args: &DiseaseMapArgs) -> Result<()> {
    let facilities = sample_facilities();
    let incidents = sample_incidents();
    let colors = disease_color_table();

    let fig = create_disease_map_fig(&facilities, &incidents, &colors, MAP_CENTER, MAP_ZOOM)?;
    write_map_document(&fig, &args.output)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_disease_map_process_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let args = DiseaseMapArgs {
            output: dir.path().join("disease_analysis_map.html"),
        };
        disease_map_process(&args).unwrap();

        let document = fs::read_to_string(&args.output).unwrap();
        assert!(document.contains("Plotly.newPlot"));
        assert!(document.contains("Disease Legend"));
        // every facility and incident row made it into the figure
        assert!(document.contains("Hospital A"));
        assert!(document.contains("Flu - Affected: 100"));
    }
}
