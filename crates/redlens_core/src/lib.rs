pub mod data;
pub mod runner;
