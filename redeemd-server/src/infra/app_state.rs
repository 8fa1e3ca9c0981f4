use std::fmt;
use std::sync::Arc;

use redeemd_core::{CouponValidator, ProductCatalog};

use crate::infra::config::Config;

/// Shared state handed to every handler.
///
/// The catalog and validator are read-only values constructed once at
/// startup; nothing here is process-wide mutable state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<ProductCatalog>,
    pub validator: Arc<CouponValidator>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        let validator = CouponValidator::with_config(
            config.coupon.data_dir.clone(),
            config.validator_config(),
        );

        Self {
            config,
            catalog: Arc::new(ProductCatalog::seed()),
            validator: Arc::new(validator),
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
