use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(name = "stackwiz", about = "Interactive project configuration wizard for full-stack setups")]
pub struct Args {
    /// Where the exported configuration is written (defaults to project-config.json)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
    /// Open directly on the configuration summary instead of step one
    #[arg(long, action = ArgAction::SetTrue)]
    pub summary: bool,
}
