pub mod patient;
pub mod prediction;
pub mod report;
pub mod symptoms;
