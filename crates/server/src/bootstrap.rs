use std::sync::Arc;

use axum::Router;
use fragrance_core::catalog::{storefront, Catalog};
use fragrance_core::config::{AppConfig, ConfigError, RecommendationConfig};
use fragrance_core::errors::DomainError;
use fragrance_core::session::{SessionCodec, SessionError};
use thiserror::Error;
use tracing::info;

use crate::{health, storefront as api};

/// Immutable state shared by every request handler.
#[derive(Debug)]
pub struct AppState {
    pub catalog: &'static Catalog,
    pub codec: SessionCodec,
    pub recommendations: RecommendationConfig,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self, BootstrapError> {
        let catalog = storefront();
        catalog.validate().map_err(BootstrapError::Catalog)?;

        Ok(Self {
            catalog,
            codec: SessionCodec::from_config(&config.session)?,
            recommendations: config.recommendations.clone(),
        })
    }

    /// Requested recommendation count, defaulted and clamped to the
    /// configured bounds.
    pub fn clamp_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.recommendations.default_limit)
            .clamp(1, self.recommendations.max_limit.max(1))
    }
}

pub struct Application {
    pub config: AppConfig,
    pub state: SharedState,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("session codec initialization failed: {0}")]
    Session(#[from] SessionError),
    #[error("catalog failed validation: {0}")]
    Catalog(#[source] DomainError),
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let state = Arc::new(AppState::from_config(&config)?);
    info!(
        event_name = "system.bootstrap.catalog_loaded",
        correlation_id = "bootstrap",
        products = state.catalog.len(),
        collections = state.catalog.collections().len(),
        "storefront catalog validated"
    );

    Ok(Application { config, state })
}

/// Full HTTP surface: health plus the storefront API.
pub fn app_router(state: SharedState) -> Router {
    api::router(state.clone()).merge(health::router(state))
}

#[cfg(test)]
pub(crate) mod tests {
    use fragrance_core::config::{AppConfig, ConfigOverrides, LoadOptions};

    use super::{bootstrap_with_config, Application, BootstrapError, SharedState};

    pub(crate) const TEST_SECRET: &str = "server-test-secret-0123456789abcdef";

    pub(crate) fn valid_options() -> LoadOptions {
        LoadOptions {
            overrides: ConfigOverrides {
                session_signing_secret: Some(TEST_SECRET.to_string()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        }
    }

    fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
        let config = AppConfig::load(options).map_err(BootstrapError::from)?;
        bootstrap_with_config(config)
    }

    pub(crate) fn test_state() -> SharedState {
        bootstrap(valid_options()).expect("bootstrap should succeed with valid overrides").state
    }

    #[test]
    fn bootstrap_fails_fast_without_signing_secret() {
        let result = bootstrap(LoadOptions {
            overrides: ConfigOverrides {
                session_signing_secret: Some("too-short".to_string()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        });

        let message = result.err().expect("error").to_string();
        assert!(message.contains("session.signing_secret"));
    }

    #[test]
    fn bootstrap_exposes_validated_catalog() {
        let state = test_state();
        assert_eq!(state.catalog.len(), 20);
        assert_eq!(state.codec.ttl().num_seconds(), 86_400);
    }

    #[test]
    fn limit_is_defaulted_and_clamped() {
        let state = test_state();
        assert_eq!(state.clamp_limit(None), 6);
        assert_eq!(state.clamp_limit(Some(0)), 1);
        assert_eq!(state.clamp_limit(Some(3)), 3);
        assert_eq!(state.clamp_limit(Some(500)), 20);
    }
}
