use anyhow::Result;
use clap::{Parser, Subcommand};
use common::ReportType;
use std::path::PathBuf;

pub mod commands;

use crate::config::AppConfig;
use commands::{print_options, render_chart, resolve_preset};

#[derive(Parser)]
#[command(name = "crm-reports")]
#[command(about = "Preview report configurations and chart payloads of the CRM reporting UI")]
#[command(version)]
pub struct Cli {
    /// Configuration file, the extension may be omitted
    #[arg(short, long, global = true, env = "CRM_REPORTS_CONFIG", default_value = "crm-reports")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the options offered by the report builder selectors
    Options,
    /// Resolve a date range preset against the default configuration
    ///
    /// Keys: thisMonth, lastMonth, thisQuarter, lastQuarter, ytd, lastYear, custom.
    /// Unknown keys and `custom` leave the default range untouched.
    Preset {
        /// Preset key
        key: String,

        /// Date to treat as today (YYYY-MM-DD), defaults to the configured or local date
        #[arg(short, long)]
        today: Option<chrono::NaiveDate>,
    },
    /// Resolve the chart for report rows read from a JSON file
    ///
    /// Prints the chart state: noData, empty, unsupported or rendered with
    /// the chart data and options.
    Chart {
        /// Report type, defaults to the configured report type
        #[arg(short, long)]
        report_type: Option<ReportType>,

        /// Chart kind key (line, bar, pie), defaults to the configured chart type
        #[arg(short = 't', long)]
        chart_type: Option<String>,

        /// JSON file holding an array of report rows
        #[arg(short, long)]
        data: PathBuf,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

impl Cli {
    pub fn run(self, config: &AppConfig) -> Result<()> {
        match self.command {
            Commands::Options => {
                print_options()?;
            }
            Commands::Preset { key, today } => {
                resolve_preset(config, &key, today)?;
            }
            Commands::Chart {
                report_type,
                chart_type,
                data,
                pretty,
            } => {
                render_chart(config, report_type, chart_type, &data, pretty)?;
            }
        }
        Ok(())
    }
}
