//! Single-placeholder templates.
//!
//! `%s` marks where the sampled value goes and `%%` is a literal percent sign.
//! Any other `%` sequence is kept verbatim. The value is spliced in as plain
//! text after parsing, so a value containing `%s` is never expanded again.

use crate::config::MAX_TEMPLATE_LEN;
use crate::error::ConfigError;

/// A parsed template: the literal text around at most one placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    prefix: String,
    /// `None` when the template has no placeholder.
    suffix: Option<String>,
}

impl Template {
    pub fn parse(template: &str) -> Result<Self, ConfigError> {
        let invalid = |reason| ConfigError::InvalidTemplate {
            template: template.to_string(),
            reason,
        };
        if template.len() > MAX_TEMPLATE_LEN {
            return Err(invalid("too long"));
        }

        let mut current = String::new();
        let mut before: Option<String> = None;
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                current.push(c);
                continue;
            }
            match chars.peek() {
                Some('%') => {
                    chars.next();
                    current.push('%');
                }
                Some('s') => {
                    chars.next();
                    if before.is_some() {
                        return Err(invalid("more than one %s placeholder"));
                    }
                    before = Some(std::mem::take(&mut current));
                }
                _ => current.push('%'),
            }
        }

        Ok(match before {
            Some(prefix) => Self {
                prefix,
                suffix: Some(current),
            },
            None => Self {
                prefix: current,
                suffix: None,
            },
        })
    }

    /// Substitutes `value` for the placeholder.
    pub fn render(&self, value: &str) -> String {
        match &self.suffix {
            Some(suffix) => {
                let mut out =
                    String::with_capacity(self.prefix.len() + value.len() + suffix.len());
                out.push_str(&self.prefix);
                out.push_str(value);
                out.push_str(suffix);
                out
            }
            None => self.prefix.clone(),
        }
    }
}
