pub mod diff_provider;
pub mod verdict_provider;
