// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Cookie consulted for the session token when no bearer header is sent.
    pub session_cookie_name: Arc<str>,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>, session_cookie_name: impl Into<Arc<str>>) -> Self {
        Self {
            services,
            session_cookie_name: session_cookie_name.into(),
        }
    }
}
