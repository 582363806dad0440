pub mod builder;
pub mod engine;
pub mod report;
