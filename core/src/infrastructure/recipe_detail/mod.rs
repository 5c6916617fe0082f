pub mod random_enricher;

pub use random_enricher::RandomPresentationEnricher;
