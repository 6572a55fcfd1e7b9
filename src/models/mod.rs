pub mod number;
pub mod shape;
pub mod person;

// Re-export common model types
pub use shape::{ Shape, Square };
pub use person::{ Person, Professor, GRADE_RANGE };
