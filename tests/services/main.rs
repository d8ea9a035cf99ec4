#[path = "../common/mod.rs"]
mod common;

mod test_assistant_service;
mod test_compare_service;
mod test_store_service;
