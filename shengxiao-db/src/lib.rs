pub mod dataset;
pub mod db;
pub mod enrich;
pub mod models;
pub mod tables;

