pub mod error;
pub mod growth;
pub mod logger;
pub mod planner;
pub mod pricing;
pub mod roi;
pub mod rounding;
pub mod schedule;
pub mod sensitivity;
pub mod species;
pub mod validation;
