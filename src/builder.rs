#[path = "builder/generator_builder.rs"]
mod generator_builder;

#[path = "builder/tools.rs"]
mod tools;

#[path = "builder/state.rs"]
mod state;

#[path = "builder/build/mod.rs"]
mod build;

#[path = "builder/resilience.rs"]
mod resilience;

pub use generator_builder::GeneratorBuilder;
pub use tools::{FunctionBuilder, ParamBuilder};
