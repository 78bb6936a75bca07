//! Configurator Handlers

use std::{collections::BTreeMap, num::NonZeroU32};

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use partsmith::{
    catalog::NameMap,
    configurator::BuildQuote,
    recommendation::RecommendationRequest,
    specs::{Multiplicity, SpecsIds, SpecsIdsForEnergyConsumption},
};

use crate::{errors::configurator_status_error, extensions::*};

/// Component ids, one per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct SpecsIdsBody {
    pub cpu: String,
    pub gpu: String,
    pub motherboard: String,
    pub ram: String,
    pub ssd: String,
    pub hdd: String,
    pub power_supply: String,
    pub pc_case: String,
}

impl From<SpecsIdsBody> for SpecsIds {
    fn from(body: SpecsIdsBody) -> Self {
        SpecsIds::from_positional([
            body.cpu,
            body.gpu,
            body.motherboard,
            body.ram,
            body.ssd,
            body.hdd,
            body.power_supply,
            body.pc_case,
        ])
    }
}

impl From<SpecsIds> for SpecsIdsBody {
    fn from(ids: SpecsIds) -> Self {
        Self {
            cpu: ids.cpu.into_string(),
            gpu: ids.gpu.into_string(),
            motherboard: ids.motherboard.into_string(),
            ram: ids.ram.into_string(),
            ssd: ids.ssd.into_string(),
            hdd: ids.hdd.into_string(),
            power_supply: ids.power_supply.into_string(),
            pc_case: ids.pc_case.into_string(),
        }
    }
}

/// Ids of the six power drawing components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct EnergyIdsBody {
    pub cpu: String,
    pub gpu: String,
    pub motherboard: String,
    pub ram: String,
    pub ssd: String,
    pub hdd: String,
}

impl From<EnergyIdsBody> for SpecsIdsForEnergyConsumption {
    fn from(body: EnergyIdsBody) -> Self {
        SpecsIdsForEnergyConsumption {
            cpu: body.cpu.into(),
            gpu: body.gpu.into(),
            motherboard: body.motherboard.into(),
            ram: body.ram.into(),
            ssd: body.ssd.into(),
            hdd: body.hdd.into(),
        }
    }
}

/// Recommendation Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecommendationBody {
    /// Kind of computer, e.g. "gaming PC"
    pub computer_type: String,

    /// Free text budget, e.g. "1500 USD"
    pub budget: String,
}

/// Energy Consumption Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EnergyConsumptionRequest {
    pub specs_ids: Option<EnergyIdsBody>,
}

/// Energy Consumption Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EnergyConsumptionResponse {
    /// Watts, rounded up to a multiple of 50
    pub energy_consumption: u32,
}

const fn one() -> u32 {
    1
}

/// Quote Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuoteRequest {
    pub specs_ids: Option<SpecsIdsBody>,

    /// Number of processors
    #[serde(default = "one")]
    pub cpu_number: u32,

    /// Number of graphics cards
    #[serde(default = "one")]
    pub gpu_number: u32,
}

impl QuoteRequest {
    fn multiplicity(&self) -> Result<Multiplicity, StatusError> {
        let count = |value: u32, field: &str| {
            NonZeroU32::new(value).ok_or_else(|| {
                StatusError::bad_request()
                    .brief("Invalid component count")
                    .detail(format!("{field} must be at least 1"))
            })
        };

        Ok(Multiplicity::new(
            count(self.cpu_number, "cpu_number")?,
            count(self.gpu_number, "gpu_number")?,
        ))
    }
}

/// Quote Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuoteResponse {
    /// Retail price as a decimal string
    pub price: String,

    /// Watts, rounded up to a multiple of 50
    pub energy_consumption: u32,

    /// Whether the CPU and motherboard share a socket
    pub socket_compatible: bool,

    /// Whether the power supply covers the energy consumption
    pub power_sufficient: bool,
}

impl From<BuildQuote> for QuoteResponse {
    fn from(build_quote: BuildQuote) -> Self {
        Self {
            price: build_quote.price.to_string(),
            energy_consumption: build_quote.energy_consumption,
            socket_compatible: build_quote.socket_compatible,
            power_sufficient: build_quote.power_sufficient,
        }
    }
}

/// Configurator Components Handler
///
/// Returns eight maps of id to `"<name> ($<price>)"`, in the order CPU, GPU,
/// motherboard, RAM, SSD, HDD, power supply, PC case.
#[endpoint(tags("configurator"), summary = "List Configurator Components")]
pub(crate) async fn list_components(depot: &mut Depot) -> Result<Json<Vec<NameMap>>, StatusError> {
    let state = depot.state_or_500()?;

    let components = state
        .app
        .configurator
        .components()
        .await
        .map_err(configurator_status_error)?;

    Ok(Json(components.into_list().into()))
}

/// Motherboards By Socket Handler
#[endpoint(tags("configurator"), summary = "List Motherboards For A Socket")]
pub(crate) async fn motherboards(
    socket: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<NameMap>, StatusError> {
    let state = depot.state_or_500()?;

    let names = state
        .app
        .configurator
        .motherboards_by_socket(&socket.into_inner())
        .await
        .map_err(configurator_status_error)?;

    Ok(Json(names))
}

/// Sockets Handler
///
/// Returns every motherboard grouped by socket.
#[endpoint(tags("configurator"), summary = "List Motherboards By Socket")]
pub(crate) async fn sockets(
    depot: &mut Depot,
) -> Result<Json<BTreeMap<String, NameMap>>, StatusError> {
    let state = depot.state_or_500()?;

    let grouped = state
        .app
        .configurator
        .motherboards_grouped_by_socket()
        .await
        .map_err(configurator_status_error)?;

    Ok(Json(grouped))
}

/// Recommendation Handler
#[endpoint(
    tags("configurator"),
    summary = "Recommend A Build",
    responses(
        (status_code = StatusCode::OK, description = "One component id per category"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Language model reply was malformed"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Recommender not configured"),
    ),
)]
pub(crate) async fn recommendation(
    json: JsonBody<RecommendationBody>,
    depot: &mut Depot,
) -> Result<Json<SpecsIdsBody>, StatusError> {
    let state = depot.state_or_500()?;
    let body = json.into_inner();

    let ids = state
        .app
        .configurator
        .recommend(RecommendationRequest {
            computer_type: body.computer_type,
            budget: body.budget,
        })
        .await
        .map_err(configurator_status_error)?;

    Ok(Json(ids.into()))
}

/// Energy Consumption Handler
#[endpoint(
    tags("configurator"),
    summary = "Compute Energy Consumption",
    responses(
        (status_code = StatusCode::OK, description = "Energy consumption in watts"),
        (status_code = StatusCode::BAD_REQUEST, description = "Component ids missing"),
        (status_code = StatusCode::NOT_FOUND, description = "Component not found"),
    ),
)]
pub(crate) async fn energy_consumption(
    json: JsonBody<EnergyConsumptionRequest>,
    depot: &mut Depot,
) -> Result<Json<EnergyConsumptionResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let watts = state
        .app
        .configurator
        .energy_consumption(json.into_inner().specs_ids.map(Into::into))
        .await
        .map_err(configurator_status_error)?;

    Ok(Json(EnergyConsumptionResponse {
        energy_consumption: watts,
    }))
}

/// Quote Handler
///
/// Prices a build without saving it.
#[endpoint(
    tags("configurator"),
    summary = "Quote A Build",
    responses(
        (status_code = StatusCode::OK, description = "Price, energy and compatibility"),
        (status_code = StatusCode::BAD_REQUEST, description = "Component ids or counts invalid"),
        (status_code = StatusCode::NOT_FOUND, description = "Component not found"),
    ),
)]
pub(crate) async fn quote(
    json: JsonBody<QuoteRequest>,
    depot: &mut Depot,
) -> Result<Json<QuoteResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();
    let multiplicity = request.multiplicity()?;

    let build_quote = state
        .app
        .configurator
        .quote(request.specs_ids.map(Into::into), multiplicity)
        .await
        .map_err(configurator_status_error)?;

    Ok(Json(build_quote.into()))
}

/// Routes under `/configurator`.
pub(crate) fn configurator_router() -> Router {
    Router::with_path("configurator")
        .push(Router::with_path("components").get(list_components))
        .push(Router::with_path("motherboards").get(motherboards))
        .push(Router::with_path("sockets").get(sockets))
        .push(Router::with_path("recommendation").post(recommendation))
        .push(Router::with_path("energy-consumption").post(energy_consumption))
        .push(Router::with_path("quote").post(quote))
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use partsmith::recommendation::MalformedResponse;
    use partsmith_app::domain::{
        catalog::CatalogStores,
        configurator::{ConfiguratorServiceError, MockConfiguratorService},
        specs::ResolveError,
    };

    use crate::test_helpers::{app, app_with_configurator, seeded_stores, service};

    use super::*;

    fn make_service(configurator: MockConfiguratorService) -> Service {
        service(app_with_configurator(configurator), configurator_router())
    }

    fn ids_body() -> SpecsIdsBody {
        SpecsIdsBody {
            cpu: "cpu-1".to_string(),
            gpu: "gpu-1".to_string(),
            motherboard: "motherboard-1".to_string(),
            ram: "ram-1".to_string(),
            ssd: "ssd-1".to_string(),
            hdd: "hdd-1".to_string(),
            power_supply: "power-supply-1".to_string(),
            pc_case: "pc-case-1".to_string(),
        }
    }

    #[tokio::test]
    async fn components_are_eight_positional_maps() -> TestResult {
        let maps: Vec<NameMap> = TestClient::get("http://example.com/configurator/components")
            .send(&service(
                app(seeded_stores().await?),
                configurator_router(),
            ))
            .await
            .take_json()
            .await?;

        assert_eq!(maps.len(), 8);
        assert_eq!(
            maps.first().and_then(|cpus| cpus.get("cpu-1")).map(String::as_str),
            Some("Ryzen 7 7700 ($300)")
        );
        assert_eq!(
            maps.last().and_then(|cases| cases.get("pc-case-1")).map(String::as_str),
            Some("Meshify C ($82)")
        );

        Ok(())
    }

    #[tokio::test]
    async fn empty_catalog_still_lists_eight_maps() -> TestResult {
        let maps: Vec<NameMap> = TestClient::get("http://example.com/configurator/components")
            .send(&service(
                app(CatalogStores::in_memory()),
                configurator_router(),
            ))
            .await
            .take_json()
            .await?;

        assert_eq!(maps, vec![NameMap::new(); 8]);

        Ok(())
    }

    #[tokio::test]
    async fn motherboards_are_filtered_by_socket() -> TestResult {
        let mut configurator = MockConfiguratorService::new();

        configurator
            .expect_motherboards_by_socket()
            .once()
            .with(eq("AM5"))
            .return_once(|_| {
                Ok(NameMap::from([(
                    "motherboard-1".to_string(),
                    "B650 Tomahawk ($150)".to_string(),
                )]))
            });

        configurator.expect_components().never();
        configurator.expect_recommend().never();
        configurator.expect_quote().never();

        let names: NameMap =
            TestClient::get("http://example.com/configurator/motherboards?socket=AM5")
                .send(&make_service(configurator))
                .await
                .take_json()
                .await?;

        assert_eq!(names.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn sockets_group_motherboards() -> TestResult {
        let grouped: BTreeMap<String, NameMap> =
            TestClient::get("http://example.com/configurator/sockets")
                .send(&service(
                    app(seeded_stores().await?),
                    configurator_router(),
                ))
                .await
                .take_json()
                .await?;

        assert_eq!(
            grouped.keys().map(String::as_str).collect::<Vec<_>>(),
            ["AM5"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn recommendation_returns_positional_ids() -> TestResult {
        let mut configurator = MockConfiguratorService::new();

        configurator
            .expect_recommend()
            .once()
            .with(eq(RecommendationRequest {
                computer_type: "gaming PC".to_string(),
                budget: "1500 USD".to_string(),
            }))
            .return_once(|_| Ok(SpecsIds::from(ids_body())));

        configurator.expect_components().never();
        configurator.expect_quote().never();

        let body: SpecsIdsBody = TestClient::post("http://example.com/configurator/recommendation")
            .json(&json!({ "computer_type": "gaming PC", "budget": "1500 USD" }))
            .send(&make_service(configurator))
            .await
            .take_json()
            .await?;

        assert_eq!(body, ids_body());

        Ok(())
    }

    #[tokio::test]
    async fn malformed_recommendation_is_bad_gateway() -> TestResult {
        let mut configurator = MockConfiguratorService::new();

        configurator
            .expect_recommend()
            .once()
            .return_once(|_| {
                Err(ConfiguratorServiceError::MalformedResponse(
                    MalformedResponse::TokenCount(7),
                ))
            });

        let res = TestClient::post("http://example.com/configurator/recommendation")
            .json(&json!({ "computer_type": "gaming PC", "budget": "1500 USD" }))
            .send(&make_service(configurator))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_GATEWAY));

        Ok(())
    }

    #[tokio::test]
    async fn energy_consumption_is_rounded() -> TestResult {
        let body: EnergyConsumptionResponse =
            TestClient::post("http://example.com/configurator/energy-consumption")
                .json(&json!({
                    "specs_ids": {
                        "cpu": "cpu-1",
                        "gpu": "gpu-1",
                        "motherboard": "motherboard-1",
                        "ram": "ram-1",
                        "ssd": "ssd-1",
                        "hdd": "hdd-1"
                    }
                }))
                .send(&service(
                    app(seeded_stores().await?),
                    configurator_router(),
                ))
                .await
                .take_json()
                .await?;

        assert_eq!(body.energy_consumption, 350);

        Ok(())
    }

    #[tokio::test]
    async fn energy_consumption_without_ids_is_bad_request() -> TestResult {
        let mut configurator = MockConfiguratorService::new();

        configurator
            .expect_energy_consumption()
            .once()
            .withf(Option::is_none)
            .return_once(|_| {
                Err(ConfiguratorServiceError::Resolve(
                    ResolveError::InvalidArgument("specs_ids"),
                ))
            });

        let res = TestClient::post("http://example.com/configurator/energy-consumption")
            .json(&json!({}))
            .send(&make_service(configurator))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn quote_prices_unsaved_build() -> TestResult {
        let mut configurator = MockConfiguratorService::new();

        configurator
            .expect_quote()
            .once()
            .withf(|ids, multiplicity| {
                ids.as_ref() == Some(&SpecsIds::from(ids_body()))
                    && multiplicity.cpu_number.get() == 1
                    && multiplicity.gpu_number.get() == 2
            })
            .return_once(|_, _| {
                Ok(BuildQuote {
                    price: Decimal::from(2399),
                    energy_consumption: 550,
                    socket_compatible: true,
                    power_sufficient: true,
                })
            });

        let body: QuoteResponse = TestClient::post("http://example.com/configurator/quote")
            .json(&json!({ "specs_ids": ids_body(), "gpu_number": 2 }))
            .send(&make_service(configurator))
            .await
            .take_json()
            .await?;

        assert_eq!(body.price, "2399");
        assert_eq!(body.energy_consumption, 550);
        assert!(body.socket_compatible);
        assert!(body.power_sufficient);

        Ok(())
    }

    #[tokio::test]
    async fn quote_rejects_zero_counts() -> TestResult {
        let mut configurator = MockConfiguratorService::new();

        configurator.expect_quote().never();

        let res = TestClient::post("http://example.com/configurator/quote")
            .json(&json!({ "specs_ids": ids_body(), "cpu_number": 0 }))
            .send(&make_service(configurator))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn quote_with_unknown_component_is_not_found() -> TestResult {
        let mut body = ids_body();
        body.hdd = "hdd-404".to_string();

        let res = TestClient::post("http://example.com/configurator/quote")
            .json(&json!({ "specs_ids": body }))
            .send(&service(
                app(seeded_stores().await?),
                configurator_router(),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn quote_whose_draw_overflows_is_bad_request() -> TestResult {
        let res = TestClient::post("http://example.com/configurator/quote")
            .json(&json!({ "specs_ids": ids_body(), "cpu_number": 70_000_000 }))
            .send(&service(
                app(seeded_stores().await?),
                configurator_router(),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
