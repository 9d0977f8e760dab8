pub mod ai;
pub mod cli;
pub mod config;
pub mod finding;
pub mod rule;
pub mod rule_set;
pub mod verdict;
pub mod violation;
