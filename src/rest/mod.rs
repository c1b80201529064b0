pub mod data;
pub mod index;
pub mod report;
