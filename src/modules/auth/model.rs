use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters carried by the invite/magic-link return URL.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct CallbackParams {
    pub token: Option<String>,
}
