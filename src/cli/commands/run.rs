use anyhow::{ anyhow, Result };
use log::info;
use std::io::{ self, Write };

use classroom::implementations::report::{ DemoReport, RunReport };
use classroom::traits::Demo;

use crate::cli::ui;

/// How demo output is rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn parse_output_format(format_str: &str) -> Result<OutputFormat> {
    match format_str.to_lowercase().as_str() {
        "text" | "txt" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(anyhow!("Unsupported output format: {}", format_str)),
    }
}

/// Run the selected demos in order
pub fn execute(demos: &[&dyn Demo], format: OutputFormat, headers: bool) -> Result<()> {
    info!("Running {} demo(s) as {:?}", demos.len(), format);

    match format {
        OutputFormat::Text => {
            for demo in demos {
                if headers {
                    ui::print_header(demo.description());
                }
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                demo.run(&mut handle)?;
                handle.flush()?;
            }
        }
        OutputFormat::Json => {
            let mut report = RunReport::default();
            for demo in demos {
                report.demos.push(DemoReport::capture(*demo)?);
            }
            println!("{}", report.to_json()?);
        }
    }

    Ok(())
}
