pub mod extractor_orchestrator;
pub mod recognition_cycle;
