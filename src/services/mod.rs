pub mod ai_providers;
pub mod gate;
pub mod git_manager;
pub mod ignore_filter;
pub mod policy_scanner;
pub mod verdict_parser;
