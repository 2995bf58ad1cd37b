//! Builder for creating and configuring Client instances.

use std::{sync::Arc, time::Duration};

use log::debug;

use super::Client;
use crate::{
    config::Config,
    error::{LadleError, Result},
    gateway::{GraphqlGateway, RecipeGateway},
    pipeline::PhaseOrdering,
};

/// Builder for creating and configuring Client instances.
#[derive(Clone, Default)]
pub struct ClientBuilder {
    config: Config,
    timeout: Option<Duration>,
    gateway: Option<Arc<dyn RecipeGateway>>,
}

impl ClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an already resolved configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets the GraphQL endpoint, if given.
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: Option<S>) -> Self {
        if let Some(endpoint) = endpoint {
            self.config = self.config.with_endpoint(endpoint);
        }
        self
    }

    /// Sets the per-call timeout, overriding the configured seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_phase_ordering(mut self, ordering: PhaseOrdering) -> Self {
        self.config = self.config.with_phase_ordering(ordering);
        self
    }

    /// Uses `gateway` instead of an HTTP gateway for the configured endpoint.
    pub fn with_gateway(mut self, gateway: Arc<dyn RecipeGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Builds the configured client.
    ///
    /// # Errors
    ///
    /// Returns `LadleError::InvalidInput` for an empty endpoint or zero
    /// timeout, and `LadleError::Configuration` if the HTTP client cannot be
    /// created.
    pub fn build(self) -> Result<Client> {
        self.config.validate()?;
        let timeout = self.timeout.unwrap_or_else(|| self.config.timeout());
        if timeout.is_zero() {
            return Err(LadleError::invalid_input("timeout").with_reason("must be non-zero"));
        }

        let gateway = match self.gateway {
            Some(gateway) => gateway,
            None => Arc::new(GraphqlGateway::new(self.config.endpoint.clone(), timeout)?),
        };
        debug!("Client targets {}", gateway.describe());

        Ok(Client::new(gateway, timeout, self.config.phase_ordering))
    }
}
