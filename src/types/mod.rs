pub mod config;
pub mod quiz;
pub mod result;
pub mod tier;
