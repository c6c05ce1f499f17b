use std::sync::Arc;

use content::Site;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub site: Arc<Site>,
    pub config: AppConfig,
}
