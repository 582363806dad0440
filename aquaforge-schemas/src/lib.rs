pub mod file_formats;
pub mod growth;
pub mod pond;
pub mod pricing;
pub mod roi;
pub mod schedule;
pub mod species;
