pub mod animated_logger;
pub mod gate_report_logger;
