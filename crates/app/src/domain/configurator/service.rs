//! Configurator service.

use std::{
    collections::BTreeMap,
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use partsmith::{
    catalog::{NameMap, names_with_prices},
    configurator::{self, BuildQuote, ConfiguratorComponents},
    energy::total_energy_consumption,
    recommendation::{RecommendationRequest, build_prompt, parse_reply},
    specs::{Multiplicity, SpecsIds, SpecsIdsForEnergyConsumption},
};
use tokio::try_join;
use tracing::{debug, warn};

use crate::{
    domain::{
        catalog::CatalogStores, configurator::errors::ConfiguratorServiceError,
        specs::SpecsResolver,
    },
    recommender::Recommender,
};

/// Catalog listings, recommendations and quotes for the PC configurator.
#[automock]
#[async_trait]
pub trait ConfiguratorService: Send + Sync {
    /// Every hardware item rendered as id → `"<name> ($<price>)"`, one map per
    /// category.
    async fn components(&self) -> Result<ConfiguratorComponents, ConfiguratorServiceError>;

    /// Motherboards whose socket is exactly `socket`.
    async fn motherboards_by_socket(&self, socket: &str)
    -> Result<NameMap, ConfiguratorServiceError>;

    /// Motherboards indexed by socket.
    async fn motherboards_grouped_by_socket(
        &self,
    ) -> Result<BTreeMap<String, NameMap>, ConfiguratorServiceError>;

    /// Asks the language model for one component per category.
    async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<SpecsIds, ConfiguratorServiceError>;

    /// Energy consumption of the six power drawing components.
    async fn energy_consumption(
        &self,
        ids: Option<SpecsIdsForEnergyConsumption>,
    ) -> Result<u32, ConfiguratorServiceError>;

    /// Price, energy and compatibility of a build that is not saved.
    async fn quote(
        &self,
        ids: Option<SpecsIds>,
        multiplicity: Multiplicity,
    ) -> Result<BuildQuote, ConfiguratorServiceError>;
}

/// [`ConfiguratorService`] reading from the catalog stores.
pub struct CatalogConfiguratorService {
    stores: CatalogStores,
    resolver: SpecsResolver,
    recommender: Arc<dyn Recommender>,
}

impl CatalogConfiguratorService {
    #[must_use]
    pub fn new(stores: CatalogStores, recommender: Arc<dyn Recommender>) -> Self {
        Self {
            resolver: SpecsResolver::new(stores.clone()),
            stores,
            recommender,
        }
    }
}

impl Debug for CatalogConfiguratorService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CatalogConfiguratorService")
            .field("stores", &self.stores)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ConfiguratorService for CatalogConfiguratorService {
    async fn components(&self) -> Result<ConfiguratorComponents, ConfiguratorServiceError> {
        let (cpus, gpus, motherboards, rams, ssds, hdds, power_supplies, pc_cases) = try_join!(
            self.stores.cpus.list_all(),
            self.stores.gpus.list_all(),
            self.stores.motherboards.list_all(),
            self.stores.rams.list_all(),
            self.stores.ssds.list_all(),
            self.stores.hdds.list_all(),
            self.stores.power_supplies.list_all(),
            self.stores.pc_cases.list_all(),
        )?;

        Ok(ConfiguratorComponents {
            cpus: names_with_prices(&cpus),
            gpus: names_with_prices(&gpus),
            motherboards: names_with_prices(&motherboards),
            rams: names_with_prices(&rams),
            ssds: names_with_prices(&ssds),
            hdds: names_with_prices(&hdds),
            power_supplies: names_with_prices(&power_supplies),
            pc_cases: names_with_prices(&pc_cases),
        })
    }

    async fn motherboards_by_socket(
        &self,
        socket: &str,
    ) -> Result<NameMap, ConfiguratorServiceError> {
        let motherboards = self.stores.motherboards.list_all().await?;

        Ok(configurator::motherboards_by_socket(&motherboards, socket))
    }

    async fn motherboards_grouped_by_socket(
        &self,
    ) -> Result<BTreeMap<String, NameMap>, ConfiguratorServiceError> {
        let motherboards = self.stores.motherboards.list_all().await?;

        Ok(configurator::motherboards_grouped_by_socket(&motherboards))
    }

    async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<SpecsIds, ConfiguratorServiceError> {
        let components = self.components().await?;
        let prompt = build_prompt(&request, &components);

        debug!(
            computer_type = %request.computer_type,
            budget = %request.budget,
            "requesting recommendation"
        );

        let reply = self.recommender.complete(&prompt).await?;

        parse_reply(reply.as_deref()).map_err(|error| {
            warn!(%error, ?reply, "discarding malformed recommendation");

            ConfiguratorServiceError::from(error)
        })
    }

    async fn energy_consumption(
        &self,
        ids: Option<SpecsIdsForEnergyConsumption>,
    ) -> Result<u32, ConfiguratorServiceError> {
        let specs = self.resolver.resolve_for_energy(ids.as_ref()).await?;

        Ok(total_energy_consumption(&specs)?)
    }

    async fn quote(
        &self,
        ids: Option<SpecsIds>,
        multiplicity: Multiplicity,
    ) -> Result<BuildQuote, ConfiguratorServiceError> {
        let specs = self.resolver.resolve(ids.as_ref()).await?;

        Ok(configurator::quote(&specs, multiplicity)?)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use mockall::predicate::function;
    use partsmith::{
        derivation::DerivationError, fixtures, ids::ItemId, recommendation::MalformedResponse,
    };
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::specs::ResolveError,
        recommender::{MockRecommender, RecommenderError},
        test::seeded_stores,
    };

    use super::*;

    async fn service(recommender: MockRecommender) -> TestResult<CatalogConfiguratorService> {
        Ok(CatalogConfiguratorService::new(
            seeded_stores().await?,
            Arc::new(recommender),
        ))
    }

    fn request() -> RecommendationRequest {
        RecommendationRequest {
            computer_type: "gaming PC".to_string(),
            budget: "2000 USD".to_string(),
        }
    }

    #[tokio::test]
    async fn components_are_listed_in_category_order() -> TestResult {
        let service = service(MockRecommender::new()).await?;

        let components = service.components().await?;

        assert_eq!(
            components.cpus.get("cpu-1").map(String::as_str),
            Some("Ryzen 7 7700 ($300)")
        );
        assert_eq!(
            components.pc_cases.get("pc-case-1").map(String::as_str),
            Some("Meshify C ($82)")
        );
        assert!(components.entries().iter().all(|(_, names)| names.len() == 1));

        Ok(())
    }

    #[tokio::test]
    async fn empty_categories_still_get_a_map() -> TestResult {
        let stores = seeded_stores().await?;

        stores.hdds.delete(&ItemId::new("hdd-1")).await?;

        let service = CatalogConfiguratorService::new(stores, Arc::new(MockRecommender::new()));

        let components = service.components().await?;

        assert!(components.hdds.is_empty());
        assert_eq!(components.into_list().len(), 8);

        Ok(())
    }

    #[tokio::test]
    async fn motherboards_filter_by_exact_socket() -> TestResult {
        let service = service(MockRecommender::new()).await?;

        let am5 = service.motherboards_by_socket("AM5").await?;

        assert_eq!(
            am5.get("motherboard-1").map(String::as_str),
            Some("B650 Tomahawk ($150)")
        );
        assert!(service.motherboards_by_socket("am5").await?.is_empty());

        let grouped = service.motherboards_grouped_by_socket().await?;

        assert_eq!(grouped.get("AM5"), Some(&am5));

        Ok(())
    }

    #[tokio::test]
    async fn recommendation_prompt_lists_catalog_and_reply_maps_positionally() -> TestResult {
        let mut recommender = MockRecommender::new();

        recommender
            .expect_complete()
            .with(function(|prompt: &str| {
                prompt.contains("gaming PC")
                    && prompt.contains("2000 USD")
                    && prompt.contains("cpu-1 - Ryzen 7 7700 ($300)")
            }))
            .times(1)
            .returning(|_| {
                Ok(Some(
                    "cpu-1 gpu-1 motherboard-1 ram-1 ssd-1 hdd-1 power-supply-1 pc-case-1"
                        .to_string(),
                ))
            });

        let service = service(recommender).await?;

        let ids = service.recommend(request()).await?;

        assert_eq!(ids, fixtures::specs().ids());

        Ok(())
    }

    #[tokio::test]
    async fn short_replies_are_malformed() -> TestResult {
        let mut recommender = MockRecommender::new();

        recommender
            .expect_complete()
            .times(1)
            .returning(|_| Ok(Some("cpu-1 gpu-1".to_string())));

        let service = service(recommender).await?;

        assert!(matches!(
            service.recommend(request()).await,
            Err(ConfiguratorServiceError::MalformedResponse(
                MalformedResponse::TokenCount(2)
            ))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn missing_replies_are_malformed() -> TestResult {
        let mut recommender = MockRecommender::new();

        recommender.expect_complete().times(1).returning(|_| Ok(None));

        let service = service(recommender).await?;

        assert!(matches!(
            service.recommend(request()).await,
            Err(ConfiguratorServiceError::MalformedResponse(
                MalformedResponse::Empty
            ))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn recommender_failures_propagate() -> TestResult {
        let mut recommender = MockRecommender::new();

        recommender
            .expect_complete()
            .times(1)
            .returning(|_| Err(RecommenderError::NotConfigured));

        let service = service(recommender).await?;

        assert!(matches!(
            service.recommend(request()).await,
            Err(ConfiguratorServiceError::Recommender(_))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn energy_consumption_is_rounded_to_fifty() -> TestResult {
        let service = service(MockRecommender::new()).await?;

        let watts = service
            .energy_consumption(Some(fixtures::specs().ids().for_energy()))
            .await?;

        assert_eq!(watts, 350);

        Ok(())
    }

    #[tokio::test]
    async fn energy_consumption_requires_ids() -> TestResult {
        let service = service(MockRecommender::new()).await?;

        assert!(matches!(
            service.energy_consumption(None).await,
            Err(ConfiguratorServiceError::Resolve(ResolveError::InvalidArgument(_)))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn quote_matches_pc_derivation_for_single_counts() -> TestResult {
        let service = service(MockRecommender::new()).await?;

        let quote = service
            .quote(Some(fixtures::specs().ids()), Multiplicity::SINGLE)
            .await?;

        assert_eq!(quote.price, Decimal::from(1899));
        assert_eq!(quote.energy_consumption, 350);
        assert!(quote.socket_compatible);
        assert!(quote.power_sufficient);

        let two = NonZeroU32::MIN.saturating_add(1);
        let quote = service
            .quote(Some(fixtures::specs().ids()), Multiplicity::new(two, two))
            .await?;

        // 1452 + 300 + 500 = 2252, + 350 = 2602, rounds to 2700
        assert_eq!(quote.price, Decimal::from(2699));
        // 312 + 65 + 200 = 577
        assert_eq!(quote.energy_consumption, 600);

        Ok(())
    }

    #[tokio::test]
    async fn quote_rejects_counts_whose_draw_overflows() -> TestResult {
        let service = service(MockRecommender::new()).await?;

        let multiplicity = Multiplicity::new(
            NonZeroU32::MIN.saturating_add(69_999_999),
            NonZeroU32::MIN,
        );

        assert!(matches!(
            service.quote(Some(fixtures::specs().ids()), multiplicity).await,
            Err(ConfiguratorServiceError::Derivation(
                DerivationError::EnergyOverflow
            ))
        ));

        Ok(())
    }
}
