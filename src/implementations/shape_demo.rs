use log::info;
use std::io::Write;

use crate::errors::ClassroomResult;
use crate::models::Shape;
use crate::traits::Demo;

/// Builds a square and a triangle and prints their perimeters
#[derive(Debug, Clone, Default)]
pub struct ShapeDemo;

impl ShapeDemo {
    pub fn shapes() -> Vec<Shape> {
        vec![Shape::new("square", 4, 5.0), Shape::new("triangle", 3, 3.0)]
    }
}

impl Demo for ShapeDemo {
    fn name(&self) -> &'static str {
        "shapes"
    }

    fn description(&self) -> &'static str {
        "Perimeters of a square and a triangle"
    }

    fn run(&self, out: &mut dyn Write) -> ClassroomResult<()> {
        let shapes = Self::shapes();
        info!("Running shape demo with {} shapes", shapes.len());
        for shape in &shapes {
            shape.calc_perimeter(out)?;
        }
        Ok(())
    }
}
