use log::debug;
use std::io::Write;

use crate::errors::ClassroomResult;
use crate::models::number::Measure;

/// A named polygon with equal sides
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub name: String,
    pub sides: i64,
    pub side_length: f64,
}

impl Shape {
    /// Fields are stored as given; zero and negative values are accepted
    pub fn new(name: impl Into<String>, sides: i64, side_length: f64) -> Self {
        Self {
            name: name.into(),
            sides,
            side_length,
        }
    }

    pub(crate) fn perimeter(&self) -> f64 {
        (self.sides as f64) * self.side_length
    }

    /// Write `Perimeter of {name} is {perimeter}` to `out`
    pub fn calc_perimeter<W: Write + ?Sized>(&self, out: &mut W) -> ClassroomResult<()> {
        let perimeter = self.perimeter();
        debug!(
            "Perimeter of {}: {} sides x {} = {}",
            self.name,
            self.sides,
            self.side_length,
            perimeter
        );
        writeln!(out, "Perimeter of {} is {}", self.name, Measure(perimeter))?;
        Ok(())
    }
}

/// A four-sided `Shape` that can also report its area.
///
/// Only reachable from the CLI when the square demo is enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    shape: Shape,
}

impl Square {
    pub const SIDES: i64 = 4;

    pub fn new(side_length: f64) -> Self {
        Self {
            shape: Shape::new("square", Self::SIDES, side_length),
        }
    }

    pub fn side_length(&self) -> f64 {
        self.shape.side_length
    }

    pub fn as_shape(&self) -> &Shape {
        &self.shape
    }

    pub fn calc_perimeter<W: Write + ?Sized>(&self, out: &mut W) -> ClassroomResult<()> {
        self.shape.calc_perimeter(out)
    }

    /// Write `Area of square is {side_length * side_length}` to `out`
    pub fn calc_area<W: Write + ?Sized>(&self, out: &mut W) -> ClassroomResult<()> {
        let area = self.side_length() * self.side_length();
        debug!("Area of square with side {} = {}", self.side_length(), area);
        writeln!(out, "Area of square is {}", Measure(area))?;
        Ok(())
    }
}
