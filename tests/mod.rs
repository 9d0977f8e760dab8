mod common;
mod gate_tests;
