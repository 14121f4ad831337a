use crate::Metrics;

use courier_auth::JwtValidator;
use courier_store::{MessageRepository, UserRepository};

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use uuid::Uuid;

/// Shared application state for REST and websocket handlers
#[derive(Clone)]
pub struct AppState {
    pub users: UserRepository,
    pub messages: MessageRepository,
    /// `None` when authentication is disabled (single-user mode)
    pub jwt_validator: Option<Arc<JwtValidator>>,
    /// Principal used for all requests when authentication is disabled
    pub anonymous_user_id: Uuid,
    pub metrics: Metrics,
    /// `None` when no exporter could be installed (e.g. in tests)
    pub prometheus: Option<PrometheusHandle>,
}
