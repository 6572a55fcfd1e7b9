use anyhow::Result;

use classroom::config::ClassroomConfig;
use classroom::implementations::catalog::{ DemoCatalog, SQUARE_DEMO };

use crate::cli::ui;

/// List command
pub fn execute(catalog: &DemoCatalog, config: &ClassroomConfig, headers: bool) -> Result<()> {
    if headers {
        ui::print_header("Available Demos");
    }

    for demo in catalog.demos() {
        ui::print_result(demo.name(), demo.description());
    }

    if !config.enable_square && headers {
        ui::print_warning(
            format!("'{}' is disabled; pass --enable-square to include it", SQUARE_DEMO).as_str()
        );
    }

    Ok(())
}
