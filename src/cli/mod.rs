use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "classroom",
    about = "Small demos of records, overriding and dynamic dispatch",
    version,
    author,
    long_about = None
)]
pub struct ClassroomCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    /// Make the square demo available
    #[arg(long, global = true)]
    pub enable_square: bool,

    /// Fixed seed for the professor's grade
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Print a coloured header before each demo's lines
    #[arg(long, global = true)]
    pub headers: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the perimeters of a square and a triangle
    Shapes,

    /// Introduce a person and a professor, then grade a paper
    People,

    /// Print perimeter and area of a square (requires --enable-square)
    Square,

    /// Run every available demo in order
    All,

    /// List available demos
    List,
}
