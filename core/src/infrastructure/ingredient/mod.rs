pub mod configured;
pub mod llm_extractor;
pub mod random_extractor;

pub use configured::ConfiguredExtractor;
pub use llm_extractor::LlmIngredientExtractor;
pub use random_extractor::RandomIngredientExtractor;
