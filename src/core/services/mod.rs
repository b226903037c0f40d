pub mod classifier;
pub mod orchestrator;
pub mod resolver;
