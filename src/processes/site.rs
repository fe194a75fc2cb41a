use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::constants::sample_data::{LANDING_OUTPUT, MAP_OUTPUT};
use crate::processes::disease_map::{DiseaseMapArgs, disease_map_process};
use crate::processes::landing_page::{LandingPageArgs, landing_page_process};

#[derive(Parser, Debug)]
#[command(about = "Render the disease map and the landing page that links to it")]
pub struct SiteArgs {
    /// Map document output path
    #[arg(long = "map-output", default_value = MAP_OUTPUT)]
    pub map_output: PathBuf,

    /// Landing page output path
    #[arg(long = "landing-output", default_value = LANDING_OUTPUT)]
    pub landing_output: PathBuf,
}

pub fn site_process(args: &SiteArgs) -> Result<()> {
    let map_args = DiseaseMapArgs {
        output: args.map_output.clone(),
    };
    disease_map_process(&map_args)?;

    // The landing page links to the map file by name, not by full path
    let map_link = args
        .map_output
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(MAP_OUTPUT)
        .to_string();
    let landing_args = LandingPageArgs {
        output: args.landing_output.clone(),
        map_link,
    };
    landing_page_process(&landing_args)?;

    println!(
        "HTML files created: {} and {}",
        args.landing_output.display(),
        args.map_output.display()
    );

    Ok(())
}
