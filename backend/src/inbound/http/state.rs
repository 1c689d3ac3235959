//! Shared HTTP adapter state.
//!
//! Handlers receive this bundle through `actix_web::web::Data` and depend
//! only on driving ports, so they run unchanged against either store.

use std::sync::Arc;

use crate::domain::ports::{
    LoginService, RegistrationService, RestaurantCommand, RestaurantQuery, UserProfileQuery,
};

/// Parameter object bundling the port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub restaurants: Arc<dyn RestaurantQuery>,
    pub catalogue: Arc<dyn RestaurantCommand>,
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn RegistrationService>,
    pub profile: Arc<dyn UserProfileQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub restaurants: Arc<dyn RestaurantQuery>,
    pub catalogue: Arc<dyn RestaurantCommand>,
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn RegistrationService>,
    pub profile: Arc<dyn UserProfileQuery>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            restaurants,
            catalogue,
            login,
            registration,
            profile,
        } = ports;
        Self {
            restaurants,
            catalogue,
            login,
            registration,
            profile,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
