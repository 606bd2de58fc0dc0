use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{check, serve};

#[derive(Parser)]
#[command(name = "kurs-dashboard")]
#[command(about = "USD/IDR exchange rate dashboard server and data tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard web server
    Serve {
        /// Directory holding usd_idr_actual.csv, the forecast CSVs, and the
        /// prediction backup folder
        #[arg(short, long, env = "DATA_DIR", default_value = ".")]
        data_dir: PathBuf,
        /// Address to bind the HTTP server to
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Run the data pipeline once and report what the dashboard would show
    ///
    /// Useful after the nightly forecast export, or from cron, to catch
    /// missing files or empty backup rows before anyone opens the page.
    Check {
        /// Directory holding the CSV sources
        #[arg(short, long, env = "DATA_DIR", default_value = ".")]
        data_dir: PathBuf,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                data_dir,
                bind_address,
            } => {
                serve(data_dir, &bind_address).await?;
            }
            Commands::Check { data_dir } => {
                check(&data_dir)?;
            }
        }
        Ok(())
    }
}
