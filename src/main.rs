use crate::processes::{disease_map::*, landing_page::*, site::*};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Disease incidence and facility map
    DiseaseMap(DiseaseMapArgs),
    /// Landing page
    LandingPage(LandingPageArgs),
    /// Full site: map plus landing page
    Site(SiteArgs),
}

fn main() {
    let args = Cli::parse();
    let module = module_path!();

    match args.command {
        Commands::DiseaseMap(cmd_args) => disease_map_process(&cmd_args)
            .unwrap_or_else(|e| panic!("{module}::DiseaseMap: {e:#}")),
        Commands::LandingPage(cmd_args) => landing_page_process(&cmd_args)
            .unwrap_or_else(|e| panic!("{module}::LandingPage: {e:#}")),
        Commands::Site(cmd_args) => {
            site_process(&cmd_args).unwrap_or_else(|e| panic!("{module}::Site: {e:#}"))
        }
    }
}

mod constants;
mod io;
mod processes;
pub use crate::processes::*;
pub(crate) mod utils;
