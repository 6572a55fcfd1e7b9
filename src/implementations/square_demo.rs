use log::info;
use std::io::Write;

use crate::errors::ClassroomResult;
use crate::models::Square;
use crate::traits::Demo;

/// Perimeter and area of a square built from one side length.
///
/// Kept out of the catalog unless explicitly enabled.
#[derive(Debug, Clone)]
pub struct SquareDemo {
    pub side_length: f64,
}

impl Default for SquareDemo {
    fn default() -> Self {
        Self { side_length: 5.0 }
    }
}

impl Demo for SquareDemo {
    fn name(&self) -> &'static str {
        "square"
    }

    fn description(&self) -> &'static str {
        "Perimeter and area of a square (opt-in)"
    }

    fn run(&self, out: &mut dyn Write) -> ClassroomResult<()> {
        info!("Running square demo with side length {}", self.side_length);
        let square = Square::new(self.side_length);
        square.calc_perimeter(out)?;
        square.calc_area(out)?;
        Ok(())
    }
}
