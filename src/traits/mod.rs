pub mod introducer;
pub mod demo;

// Re-export traits
pub use introducer::Introducer;
pub use demo::Demo;
