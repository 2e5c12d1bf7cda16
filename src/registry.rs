//! The ordered list of modules that make up the status line.
//!
//! Registry order is both sampling order and rendering order. Descriptors are
//! built once at startup and never change afterwards.

use crate::collector::Component;
use crate::config::{DEFAULT_BG, DEFAULT_FG};
use crate::error::ConfigError;
use crate::format::Template;

/// One module: what to sample, how to render it, and its colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDescriptor {
    component: Component,
    template: Template,
    fg: Option<String>,
    bg: Option<String>,
}

impl ModuleDescriptor {
    /// Creates a descriptor with default colors.
    ///
    /// `template` must contain at most one `%s`; see [`Template`].
    pub fn new(component: Component, template: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            component,
            template: Template::parse(template)?,
            fg: None,
            bg: None,
        })
    }

    /// Sets the foreground color. Validated by [`Registry::new`].
    pub fn with_fg(mut self, color: &str) -> Self {
        self.fg = Some(color.to_string());
        self
    }

    /// Sets the background color. Validated by [`Registry::new`].
    pub fn with_bg(mut self, color: &str) -> Self {
        self.bg = Some(color.to_string());
        self
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn fg(&self) -> &str {
        self.fg.as_deref().unwrap_or(DEFAULT_FG)
    }

    pub fn bg(&self) -> &str {
        self.bg.as_deref().unwrap_or(DEFAULT_BG)
    }
}

/// Validated, non-empty module list.
#[derive(Debug, Clone)]
pub struct Registry {
    modules: Vec<ModuleDescriptor>,
}

impl Registry {
    pub fn new(modules: Vec<ModuleDescriptor>) -> Result<Self, ConfigError> {
        if modules.is_empty() {
            return Err(ConfigError::Empty);
        }
        for module in &modules {
            for color in [module.fg.as_deref(), module.bg.as_deref()].into_iter().flatten() {
                if !is_hex_color(color) {
                    return Err(ConfigError::InvalidColor(color.to_string()));
                }
            }
        }
        Ok(Self { modules })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModuleDescriptor> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// `#rgb` or `#rrggbb`.
fn is_hex_color(color: &str) -> bool {
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.bytes().all(|b| b.is_ascii_hexdigit())
}
