pub mod catalog;
pub mod person_demo;
pub mod shape_demo;
pub mod square_demo;
pub mod report;
