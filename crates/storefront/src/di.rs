use crate::{
    abstract_trait::{
        DynAuthClient, DynBackendHealth, DynEaterViewService, DynMakerViewService, DynMealClient,
        DynOrderClient, DynOrderSummaryService, DynProfileClient, DynReviewClient,
    },
    config::Config,
    service::{
        AuthClientService, BackendClient, EaterViewService, MakerViewService, MealClientService,
        OrderClientService, OrderSummaryService, ProfileClientService, ReviewClientService,
    },
};
use anyhow::{Context, Result};
use shared::utils::Metrics;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_client: DynAuthClient,
    pub backend_health: DynBackendHealth,
    pub maker_view_service: DynMakerViewService,
    pub eater_view_service: DynEaterViewService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_client", &"<AuthClient>")
            .field("backend_health", &"<BackendHealth>")
            .field("maker_view_service", &"<MakerViewService>")
            .field("eater_view_service", &"<EaterViewService>")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(config: &Config, metrics: Metrics) -> Result<Self> {
        let backend = BackendClient::new(&config.api_base_url, config.backend_timeout, metrics)
            .context("Failed to create AussieEat API client")?;

        let auth_client = Arc::new(AuthClientService::new(backend.clone())) as DynAuthClient;
        let meals = Arc::new(MealClientService::new(backend.clone())) as DynMealClient;
        let orders = Arc::new(OrderClientService::new(backend.clone())) as DynOrderClient;
        let reviews = Arc::new(ReviewClientService::new(backend.clone())) as DynReviewClient;
        let profiles = Arc::new(ProfileClientService::new(backend.clone())) as DynProfileClient;
        let backend_health = Arc::new(backend) as DynBackendHealth;

        let summary = Arc::new(OrderSummaryService::new(
            orders.clone(),
            config.view_deadline,
        )) as DynOrderSummaryService;

        let maker_view_service = Arc::new(MakerViewService::new(
            meals.clone(),
            orders.clone(),
            reviews.clone(),
            profiles.clone(),
            summary,
            config.view_deadline,
        )) as DynMakerViewService;

        let eater_view_service = Arc::new(EaterViewService::new(
            meals,
            orders,
            reviews,
            profiles,
            config.view_deadline,
        )) as DynEaterViewService;

        Ok(Self {
            auth_client,
            backend_health,
            maker_view_service,
            eater_view_service,
        })
    }
}
