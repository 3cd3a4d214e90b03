//! Plan orchestration: a closed set of strategies behind one plan-generation
//! capability.

mod generator;
mod prompts;

pub use generator::PlanGenerator;
