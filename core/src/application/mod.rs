use crate::{
    domain::common::{RecipeFinderConfig, services::Service},
    infrastructure::{
        ingredient::ConfiguredExtractor, recipe::StaticRecipeCatalog,
        recipe_detail::RandomPresentationEnricher, session::InMemorySessionRepository,
    },
};

pub type RecipeFinderService = Service<
    ConfiguredExtractor,
    StaticRecipeCatalog,
    InMemorySessionRepository,
    RandomPresentationEnricher,
>;

pub async fn create_service(config: RecipeFinderConfig) -> Result<RecipeFinderService, anyhow::Error> {
    let ingredient_extractor = ConfiguredExtractor::from_config(&config.extractor)?;

    let recipe_catalog = match &config.catalog.path {
        Some(path) => StaticRecipeCatalog::from_json_file(path)?,
        None => StaticRecipeCatalog::default(),
    };

    let session_repository =
        InMemorySessionRepository::new(config.session.max_sessions, config.session.ttl);

    tracing::info!(
        backend = ?config.extractor.backend,
        templates = recipe_catalog.len(),
        "recipe finder service ready"
    );

    Ok(Service::new(
        ingredient_extractor,
        recipe_catalog,
        session_repository,
        RandomPresentationEnricher::new(),
        config.extractor.timeout,
    ))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::{
        common::{CatalogConfig, ExtractorConfig, SessionConfig},
        recipe::ports::RecipeService,
    };

    fn config() -> RecipeFinderConfig {
        RecipeFinderConfig {
            extractor: ExtractorConfig::default(),
            catalog: CatalogConfig::default(),
            session: SessionConfig::default(),
        }
    }

    #[tokio::test]
    async fn test_create_service_with_builtin_catalog() {
        let service = create_service(config()).await.unwrap();
        assert_eq!(service.list_catalog().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_create_service_with_missing_catalog_file() {
        let mut config = config();
        config.catalog.path = Some(PathBuf::from("/nonexistent/catalog.json"));

        assert!(create_service(config).await.is_err());
    }
}
