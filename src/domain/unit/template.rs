use super::{TemplateError, UnitName, UnitParams};

/// Renders unit templates.
///
/// Keeps the template engine (minijinja) out of the domain layer.
pub trait TemplateRenderer {
    /// Render `template` for `unit`, substituting every placeholder from `params`.
    fn render(
        &self,
        template: &str,
        params: &UnitParams,
        unit: &UnitName,
    ) -> Result<String, TemplateError>;
}
