pub mod cli;
pub mod compare;
pub mod config;
pub mod db;
pub mod ddl;
pub mod entities;
pub mod errors;
pub mod ingest;
pub mod llm;
pub mod repo;
pub mod report;
pub mod services;
pub mod types;
pub mod utils;
