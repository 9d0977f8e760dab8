pub mod config_helper;
pub mod diff_classifier;
pub mod prompt_generator;
