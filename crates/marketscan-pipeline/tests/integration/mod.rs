//! Integration test modules.

mod full_pipeline;
mod report_checks;
mod stage_inputs;
