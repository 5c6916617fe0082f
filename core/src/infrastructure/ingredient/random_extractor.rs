use std::{sync::Arc, time::Duration};

use rand::{Rng, seq::SliceRandom};

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{entities::IngredientName, ports::IngredientExtractor, value_objects::DecodedImage},
};

const MIN_PICKS: usize = 3;
const MAX_PICKS: usize = 7;

/// Stand-in for a vision model: returns a random subset of a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct RandomIngredientExtractor {
    vocabulary: Arc<Vec<IngredientName>>,
    latency: Duration,
}

impl RandomIngredientExtractor {
    pub fn new(vocabulary: Vec<IngredientName>, latency: Duration) -> Result<Self, CoreError> {
        if vocabulary.is_empty() {
            return Err(CoreError::Configuration(
                "ingredient vocabulary must not be empty".to_string(),
            ));
        }

        Ok(Self {
            vocabulary: Arc::new(vocabulary),
            latency,
        })
    }

    pub fn vocabulary(&self) -> &[IngredientName] {
        &self.vocabulary
    }

    fn pick(&self) -> Vec<IngredientName> {
        let mut rng = rand::thread_rng();
        let count = rng
            .gen_range(MIN_PICKS..=MAX_PICKS)
            .min(self.vocabulary.len());

        self.vocabulary
            .choose_multiple(&mut rng, count)
            .cloned()
            .collect()
    }
}

impl IngredientExtractor for RandomIngredientExtractor {
    async fn extract(&self, image: &DecodedImage) -> Result<Vec<IngredientName>, CoreError> {
        tracing::debug!(
            mime_type = %image.mime_type,
            bytes = image.bytes.len(),
            "simulating ingredient detection"
        );

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        Ok(self.pick())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::common::DEFAULT_VOCABULARY;

    fn image() -> DecodedImage {
        DecodedImage {
            mime_type: "image/png".to_string(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        }
    }

    fn vocabulary() -> Vec<String> {
        DEFAULT_VOCABULARY.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_extract_returns_distinct_subset_of_vocabulary() {
        let extractor = RandomIngredientExtractor::new(vocabulary(), Duration::ZERO).unwrap();

        for _ in 0..50 {
            let ingredients = extractor.extract(&image()).await.unwrap();
            assert!((MIN_PICKS..=MAX_PICKS).contains(&ingredients.len()));

            let unique: HashSet<_> = ingredients.iter().collect();
            assert_eq!(unique.len(), ingredients.len());
            assert!(ingredients.iter().all(|i| extractor.vocabulary().contains(i)));
        }
    }

    #[tokio::test]
    async fn test_extract_caps_at_vocabulary_size() {
        let extractor = RandomIngredientExtractor::new(
            vec!["eggs".to_string(), "cheese".to_string()],
            Duration::ZERO,
        )
        .unwrap();

        let ingredients = extractor.extract(&image()).await.unwrap();
        assert_eq!(ingredients.len(), 2);
    }

    #[test]
    fn test_empty_vocabulary_is_rejected() {
        let err = RandomIngredientExtractor::new(Vec::new(), Duration::ZERO).unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }
}
