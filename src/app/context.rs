use crate::domain::{InstallConfig, TemplateRenderer};
use crate::ports::{AssetCatalog, CredentialSource, ServiceManager};

/// Application context holding the layout and collaborators for an install run.
pub struct AppContext<M, R, C, A>
where
    M: ServiceManager,
    R: TemplateRenderer,
    C: CredentialSource,
    A: AssetCatalog,
{
    config: InstallConfig,
    manager: M,
    renderer: R,
    credentials: C,
    assets: A,
}

impl<M, R, C, A> AppContext<M, R, C, A>
where
    M: ServiceManager,
    R: TemplateRenderer,
    C: CredentialSource,
    A: AssetCatalog,
{
    /// Create a new application context.
    pub fn new(config: InstallConfig, manager: M, renderer: R, credentials: C, assets: A) -> Self {
        Self { config, manager, renderer, credentials, assets }
    }

    /// Get the install layout.
    pub fn config(&self) -> &InstallConfig {
        &self.config
    }

    /// Get the service manager.
    pub fn manager(&self) -> &M {
        &self.manager
    }

    /// Get the unit template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get the credential byte source.
    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    /// Get the embedded payload catalog.
    pub fn assets(&self) -> &A {
        &self.assets
    }
}
