use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::constants::sample_data::{LANDING_OUTPUT, MAP_OUTPUT};
use crate::io::create_landing_html::write_landing_document;

#[derive(Parser, Debug)]
#[command(about = "Render the landing page linking to the disease map")]
pub struct LandingPageArgs {
    /// Output HTML file path
    #[arg(short = 'o', long = "output", default_value = LANDING_OUTPUT)]
    pub output: PathBuf,

    /// Link target for the map document; must match the map output filename
    #[arg(short = 'm', long = "map-link", default_value = MAP_OUTPUT)]
    pub map_link: String,
}

pub fn landing_page_process(args: &LandingPageArgs) -> Result<()> {
    write_landing_document(&args.map_link, &args.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_landing_page_process_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let args = LandingPageArgs {
            output: dir.path().join("index.html"),
            map_link: "disease_analysis_map.html".to_string(),
        };
        landing_page_process(&args).unwrap();

        let document = fs::read_to_string(&args.output).unwrap();
        assert!(document.contains(r#"href="disease_analysis_map.html""#));
    }
}
