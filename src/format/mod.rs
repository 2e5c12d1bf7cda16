//! Turns one cycle's samples into the status line.
//!
//! Every module contributes one i3bar block:
//!
//! ```text
//! {"full_text":"<templated text>","color":"<fg>","background":"<bg>"},
//! ```
//!
//! Blocks are appended in registry order to a fixed-capacity [`StatusLine`].
//! When a block does not fit, formatting stops for this cycle and the blocks
//! already written are emitted. The trailing separator is stripped last.

mod status;
mod template;

pub use status::{StatusLine, Truncated};
pub use template::Template;

use serde::Serialize;
use tracing::{debug, warn};

use crate::collector::SampleResult;
use crate::config::MAX_VALUE_LEN;
use crate::registry::Registry;

const SEPARATOR: char = ',';

#[derive(Serialize)]
struct Block<'a> {
    full_text: &'a str,
    color: &'a str,
    background: &'a str,
}

/// What happened while formatting one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOutcome {
    /// Blocks written to the line.
    pub blocks: usize,
    /// Formatting stopped early because the line was full.
    pub truncated: bool,
}

/// Rebuilds `line` from `samples`, which pair with the registry by position.
pub fn render(registry: &Registry, samples: &[SampleResult], line: &mut StatusLine) -> FormatOutcome {
    line.clear();
    let mut outcome = FormatOutcome {
        blocks: 0,
        truncated: false,
    };

    for (module, sample) in registry.iter().zip(samples) {
        let full_text = module.template().render(clip(sample.text(), MAX_VALUE_LEN));
        let block = Block {
            full_text: &full_text,
            color: module.fg(),
            background: module.bg(),
        };

        let mut piece = match serde_json::to_string(&block) {
            Ok(piece) => piece,
            Err(e) => {
                warn!("failed to encode block for {}: {}", module.component().name(), e);
                outcome.truncated = true;
                break;
            }
        };
        piece.push(SEPARATOR);

        if let Err(e) = line.try_push(&piece) {
            debug!("truncating after {} blocks: {}", outcome.blocks, e);
            outcome.truncated = true;
            break;
        }
        outcome.blocks += 1;
    }

    line.strip_trailing(SEPARATOR);
    outcome
}

/// Cuts `text` to at most `max` bytes on a char boundary.
fn clip(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::Component;
    use crate::config::{DEFAULT_BG, DEFAULT_FG, MAX_LEN, MAX_TEMPLATE_LEN, UNKNOWN_STR};
    use crate::registry::ModuleDescriptor;

    fn module(template: &str) -> ModuleDescriptor {
        ModuleDescriptor::new(Component::Literal(String::new()), template).unwrap()
    }

    fn value(s: &str) -> SampleResult {
        SampleResult::Value(s.to_string())
    }

    #[test]
    fn test_renders_blocks_without_trailing_separator() {
        let registry = Registry::new(vec![
            module("cpu %s%%").with_fg("#ff0000"),
            module("%s").with_bg("#222222"),
        ])
        .unwrap();
        let mut line = StatusLine::default();

        let outcome = render(&registry, &[value("12"), value("up")], &mut line);

        assert_eq!(
            outcome,
            FormatOutcome {
                blocks: 2,
                truncated: false
            }
        );
        assert_eq!(
            line.as_str(),
            r##"{"full_text":"cpu 12%","color":"#ff0000","background":"#000000"},{"full_text":"up","color":"#ffffff","background":"#222222"}"##
        );
    }

    #[test]
    fn test_unknown_and_default_colors() {
        let registry = Registry::new(vec![module("bat %s")]).unwrap();
        let mut line = StatusLine::default();

        render(&registry, &[SampleResult::Unknown], &mut line);

        let parsed: serde_json::Value = serde_json::from_str(line.as_str()).unwrap();
        assert_eq!(parsed["full_text"], format!("bat {}", UNKNOWN_STR));
        assert_eq!(parsed["color"], DEFAULT_FG);
        assert_eq!(parsed["background"], DEFAULT_BG);
    }

    #[test]
    fn test_sampled_text_is_escaped() {
        let registry = Registry::new(vec![module("%s")]).unwrap();
        let mut line = StatusLine::default();

        render(&registry, &[value("say \"hi\"\\ %s\n")], &mut line);

        let parsed: serde_json::Value = serde_json::from_str(line.as_str()).unwrap();
        assert_eq!(parsed["full_text"], "say \"hi\"\\ %s\n");
    }

    #[test]
    fn test_truncation_keeps_whole_blocks() {
        let registry = Registry::new(vec![module("%s"), module("%s"), module("%s")]).unwrap();
        let samples = [value("aaaa"), value("bbbb"), value("cccc")];

        let mut full = StatusLine::default();
        render(&registry, &samples, &mut full);
        let first_block_len = full.as_str().find("},").unwrap() + 2;

        // Room for two blocks minus one byte: only the first fits.
        let mut line = StatusLine::with_capacity(2 * first_block_len - 1);
        let outcome = render(&registry, &samples, &mut line);

        assert_eq!(
            outcome,
            FormatOutcome {
                blocks: 1,
                truncated: true
            }
        );
        assert!(!line.as_str().ends_with(','));
        let parsed: serde_json::Value = serde_json::from_str(line.as_str()).unwrap();
        assert_eq!(parsed["full_text"], "aaaa");
    }

    #[test]
    fn test_oversized_values_still_yield_a_block() {
        let template = format!("{}%s", "\"".repeat(MAX_TEMPLATE_LEN - 2));
        let registry = Registry::new(vec![
            ModuleDescriptor::new(Component::Literal(String::new()), &template).unwrap(),
        ])
        .unwrap();
        let mut line = StatusLine::default();

        let outcome = render(&registry, &[value(&"\u{1}".repeat(10_000))], &mut line);

        assert_eq!(outcome.blocks, 1);
        assert!(!line.is_empty());
        assert!(line.len() <= MAX_LEN);
    }

    #[test]
    fn test_many_modules_respect_capacity() {
        let modules = (0..200).map(|_| module("%s")).collect();
        let registry = Registry::new(modules).unwrap();
        let samples: Vec<SampleResult> = (0..200).map(|i| value(&format!("value {i}"))).collect();
        let mut line = StatusLine::default();

        let outcome = render(&registry, &samples, &mut line);

        assert!(outcome.truncated);
        assert!(outcome.blocks > 0 && outcome.blocks < 200);
        assert!(line.len() <= MAX_LEN);
        assert!(line.as_str().ends_with('}'));
        let wrapped = format!("[{}]", line.as_str());
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&wrapped).unwrap();
        assert_eq!(parsed.len(), outcome.blocks);
    }

    #[test]
    fn test_line_is_rebuilt_each_cycle() {
        let registry = Registry::new(vec![module("%s")]).unwrap();
        let mut line = StatusLine::default();

        render(&registry, &[value("first")], &mut line);
        render(&registry, &[value("second")], &mut line);

        assert!(!line.as_str().contains("first"));
        assert!(line.as_str().contains("second"));
    }

    #[test]
    fn test_clip_respects_char_boundaries() {
        assert_eq!(clip("héllo", 2), "h");
        assert_eq!(clip("héllo", 3), "hé");
        assert_eq!(clip("abc", 10), "abc");
    }
}
