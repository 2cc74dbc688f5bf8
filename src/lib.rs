pub mod catalog;
pub mod output;
pub mod scoring;
pub mod store;
pub mod wizard;
