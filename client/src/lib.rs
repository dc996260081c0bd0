//! Async client for the Printful REST API.
//!
//! ```no_run
//! # async fn run() -> Result<(), printful::Error> {
//! let printful = printful::Printful::from_env()?;
//! let page = printful.products().get_sync_products(0, 20, None).await?;
//! if page.error.is_empty() {
//!     println!("{} of {:?} products", page.products.len(), page.paging.total());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every call returns `Ok` once a JSON envelope came back, including remote
//! failures: those carry a non-empty `error` and empty payload fields. `Err`
//! is reserved for transport faults and unreadable bodies.

mod config;
mod error;
mod executor;

pub mod api;
pub mod models;

pub use config::{Config, BASE_URL_ENV, HTTP_TIMEOUT_ENV, TOKEN_ENV};
pub use error::Error;
pub use executor::Executor;
pub use printful_core::{ApiError, Normalized, Paging, ResourceId};

use api::{
    approval_sheets::ApprovalSheetsApi, catalog::CatalogApi, countries::CountriesApi,
    files::FilesApi, mockups::MockupsApi, oauth::OAuthApi, orders::OrdersApi,
    products::ProductsApi, reports::ReportsApi, shipping::ShippingApi, stores::StoresApi,
    sync::SyncApi, tax::TaxApi, templates::TemplatesApi, warehouse::WarehouseApi,
    webhooks::WebhooksApi,
};

#[derive(Debug, Clone)]
pub struct Printful {
    executor: Executor,
}

impl Printful {
    /// Client for the public endpoint. `None` still sends `Bearer `.
    pub fn new(token: Option<&str>) -> Result<Self, Error> {
        let mut config = Config::default();
        config.token = token.map(str::to_string);
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, Error> {
        tracing::debug!(?config, "creating printful client");
        Ok(Self {
            executor: Executor::new(&config)?,
        })
    }

    pub fn from_env() -> Result<Self, Error> {
        Self::from_config(Config::from_env()?)
    }

    /// Client over a prepared `Executor`, e.g. one built with
    /// `Executor::with_http_client`.
    pub fn from_executor(executor: Executor) -> Self {
        Self { executor }
    }

    /// Raw access for routes without a typed wrapper, or to get the
    /// `Normalized` form directly.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    pub fn catalog(&self) -> CatalogApi<'_> {
        CatalogApi::new(&self.executor)
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(&self.executor)
    }

    pub fn templates(&self) -> TemplatesApi<'_> {
        TemplatesApi::new(&self.executor)
    }

    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi::new(&self.executor)
    }

    pub fn files(&self) -> FilesApi<'_> {
        FilesApi::new(&self.executor)
    }

    pub fn shipping(&self) -> ShippingApi<'_> {
        ShippingApi::new(&self.executor)
    }

    pub fn countries(&self) -> CountriesApi<'_> {
        CountriesApi::new(&self.executor)
    }

    pub fn tax(&self) -> TaxApi<'_> {
        TaxApi::new(&self.executor)
    }

    pub fn mockups(&self) -> MockupsApi<'_> {
        MockupsApi::new(&self.executor)
    }

    pub fn webhooks(&self) -> WebhooksApi<'_> {
        WebhooksApi::new(&self.executor)
    }

    pub fn stores(&self) -> StoresApi<'_> {
        StoresApi::new(&self.executor)
    }

    /// Platform-synced products (Shopify, WooCommerce, ...).
    pub fn sync(&self) -> SyncApi<'_> {
        SyncApi::new(&self.executor)
    }

    pub fn warehouse(&self) -> WarehouseApi<'_> {
        WarehouseApi::new(&self.executor)
    }

    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi::new(&self.executor)
    }

    pub fn approval_sheets(&self) -> ApprovalSheetsApi<'_> {
        ApprovalSheetsApi::new(&self.executor)
    }

    pub fn oauth(&self) -> OAuthApi<'_> {
        OAuthApi::new(&self.executor)
    }
}
