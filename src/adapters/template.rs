use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::unit::validate_template;
use crate::domain::{TemplateError, TemplateRenderer, UnitName, UnitParams};

/// Unit template renderer using Minijinja.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: &str,
        params: &UnitParams,
        unit: &UnitName,
    ) -> Result<String, TemplateError> {
        validate_template(unit, template, params)?;

        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env.set_keep_trailing_newline(true);
            env
        });

        env.render_str(template, params).map_err(|err| TemplateError::Render {
            unit: unit.to_string(),
            reason: err.to_string(),
        })
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();
