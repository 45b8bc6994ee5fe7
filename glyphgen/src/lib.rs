pub mod alphabet;
pub mod config;
pub mod errors;
pub mod generate;
pub mod length;
pub mod metrics;
pub mod progress;
pub mod results;
pub mod writer;

pub use alphabet::Alphabet;
pub use config::GeneratorConfig;
pub use errors::{GenerateError, GenerateResult};
pub use generate::generate;
pub use results::{Generation, GenerationStats};
