pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ ClassroomConfig, ConfigError, ConfigSource };
pub use errors::{ ClassroomError, ClassroomResult };
pub use implementations::{
    catalog::DemoCatalog,
    person_demo::PersonDemo,
    report::{ DemoReport, RunReport },
    shape_demo::ShapeDemo,
    square_demo::SquareDemo,
};
pub use models::{ number::Measure, Person, Professor, Shape, Square, GRADE_RANGE };
pub use traits::{ Demo, Introducer };
