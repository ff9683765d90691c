use crate::backend::Backend;
use crate::config::AppConfig;
use crate::responses::{redirect, ResultResp};
use crate::session::{credentials_from, Session};
use crate::templates::Nav;
use astra::Request;
use url::form_urlencoded;

/// Everything a request handler may touch. Shared read-only by all workers.
pub struct App {
    pub config: AppConfig,
    backend: Box<dyn Backend>,
}

impl App {
    pub fn new(config: AppConfig, backend: impl Backend + 'static) -> Self {
        Self {
            config,
            backend: Box::new(backend),
        }
    }

    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    pub fn session(&self, req: &Request) -> Session {
        Session::load(credentials_from(req), self.backend())
    }

    pub fn nav<'a>(&'a self, session: &'a Session) -> Nav<'a> {
        Nav {
            user: session.user(),
            signin_url: &self.config.signin_url,
            register_url: &self.config.register_url,
        }
    }

    /// Sign-in URL that brings the visitor back to `callback` afterwards.
    pub fn signin_url(&self, callback: &str) -> String {
        let callback: String = form_urlencoded::byte_serialize(callback.as_bytes()).collect();
        let separator = if self.config.signin_url.contains('?') {
            '&'
        } else {
            '?'
        };

        format!("{}{separator}callbackUrl={callback}", self.config.signin_url)
    }

    /// Sends an anonymous visitor to sign in, asking to come back to `callback`.
    pub fn signin_redirect(&self, callback: &str) -> ResultResp {
        redirect(&self.signin_url(callback))
    }
}
