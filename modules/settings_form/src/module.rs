//! Module wiring
//!
//! Builds the frozen schema from the built-in declarations plus registered
//! contributors and wires the domain service over explicitly injected
//! collaborators. There is no process-wide singleton: hosts construct one
//! module and hand its client to whatever serves admin requests.

use crate::api::native::NativeClient;
use crate::api::rest::routes::register_routes;
use crate::config::Config;
use crate::contract::SettingsFormApi;
use crate::domain::{
    BuiltinSettings, NoticeSink, SanitizerRegistry, SchemaBuilder, SchemaContributor, Service,
    SettingsRepository,
};
use crate::render::{FormRenderer, RendererRegistry};
use std::sync::Arc;

/// Settings form module
pub struct SettingsFormModule {
    config: Config,
    service: Arc<Service>,
    renderer: Arc<FormRenderer>,
}

impl SettingsFormModule {
    /// Build the module: run contributors, freeze the schema, and wire the
    /// domain service.
    pub fn new(
        config: Config,
        repository: Arc<dyn SettingsRepository>,
        notices: Arc<dyn NoticeSink>,
        contributors: &[Arc<dyn SchemaContributor>],
        sanitizers: SanitizerRegistry,
        renderers: RendererRegistry,
    ) -> Self {
        let mut builder = SchemaBuilder::new();
        builder.apply(&BuiltinSettings);
        for contributor in contributors {
            builder.apply(contributor.as_ref());
        }
        let schema = builder.build();

        let service = Arc::new(Service::new(
            schema,
            sanitizers,
            repository,
            notices,
            &config,
        ));
        let renderer = Arc::new(FormRenderer::new(renderers));

        tracing::info!("settings form module initialized");
        Self {
            config,
            service,
            renderer,
        }
    }

    /// Module with default sanitizers/renderers and no extra contributors.
    pub fn with_defaults(config: Config, repository: Arc<dyn SettingsRepository>, notices: Arc<dyn NoticeSink>) -> Self {
        Self::new(
            config,
            repository,
            notices,
            &[],
            SanitizerRegistry::new(),
            RendererRegistry::with_defaults(),
        )
    }

    /// Module configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The wired domain service.
    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Native client handle for in-process callers.
    pub fn client(&self) -> Arc<dyn SettingsFormApi> {
        Arc::new(NativeClient::new(
            self.service.clone(),
            self.renderer.clone(),
        ))
    }

    /// REST router exposing the admin settings API.
    pub fn router(&self) -> axum::Router {
        register_routes(
            axum::Router::new(),
            self.service.clone(),
            self.renderer.clone(),
        )
    }
}
