// File: crates/demo/src/cli.rs
// Summary: Command-line flags of the export tool.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use dashboard_core::{CityId, DashboardState, Dataset, Language};

use crate::export::{export_states, ExportOptions};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LangArg {
    En,
    Fr,
}

impl From<LangArg> for Language {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Language::En,
            LangArg::Fr => Language::Fr,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CityArg {
    CityA,
    CityB,
}

impl From<CityArg> for CityId {
    fn from(value: CityArg) -> Self {
        match value {
            CityArg::CityA => CityId::CityA,
            CityArg::CityB => CityId::CityB,
        }
    }
}

#[derive(Parser)]
#[command(name = "coffee-dashboard-demo")]
#[command(about = "Export the coffee consumption dashboard as HTML, SVG and PNG")]
#[command(version)]
pub struct Cli {
    /// Interface language
    #[arg(short, long, value_enum, default_value = "en")]
    pub lang: LangArg,

    /// City shown by the trend chart
    #[arg(short, long, value_enum, default_value = "city-a")]
    pub city: CityArg,

    /// Directory receiving the exported files
    #[arg(short, long, default_value = "target/out")]
    pub out_dir: PathBuf,

    /// Export every language and city combination
    #[arg(long)]
    pub all: bool,

    /// Skip the PNG snapshots
    #[arg(long)]
    pub no_png: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let dataset = Dataset::coffee();
        let opts = ExportOptions { out_dir: self.out_dir, png: !self.no_png };

        let states: Vec<DashboardState> = if self.all {
            Language::ALL
                .into_iter()
                .flat_map(|lang| CityId::ALL.into_iter().map(move |city| DashboardState::new(lang, city)))
                .collect()
        } else {
            vec![DashboardState::new(self.lang.into(), self.city.into())]
        };

        let written = export_states(&dataset, &states, &opts)?;
        tracing::info!(files = written.len(), dir = %opts.out_dir.display(), "export finished");
        Ok(())
    }
}
