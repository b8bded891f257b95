//! SVG icon validator
//!
//! Every service embeds its icon as inline SVG markup. An icon is accepted
//! when it is well-formed XML with a single `<svg>` root, fits the size
//! limit, and carries no script elements or event handler attributes.
//!
//! All violations across all services are collected in one pass.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::domain::entities::ParsedEntity;
use crate::domain::ports::ContentValidator;
use crate::error::ContentViolation;

/// Field holding the icon markup
pub const DEFAULT_ICON_FIELD: &str = "icon_svg";

/// Upper bound on the size of one icon
pub const DEFAULT_MAX_ICON_BYTES: usize = 64 * 1024;

/// Validates inline SVG icons on every entity
#[derive(Debug, Clone)]
pub struct SvgIconValidator {
    field: String,
    require_icon: bool,
    max_bytes: usize,
}

impl Default for SvgIconValidator {
    fn default() -> Self {
        Self {
            field: DEFAULT_ICON_FIELD.to_string(),
            require_icon: true,
            max_bytes: DEFAULT_MAX_ICON_BYTES,
        }
    }
}

impl SvgIconValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the icon from a different field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Whether an entity without an icon is a violation
    pub fn with_require_icon(mut self, require: bool) -> Self {
        self.require_icon = require;
        self
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    fn check_entity(&self, entity: &ParsedEntity, violations: &mut Vec<ContentViolation>) {
        let icon = match entity.field(&self.field) {
            Some(serde_json::Value::String(icon)) => icon,
            Some(_) => {
                violations.push(ContentViolation::new(
                    entity.name(),
                    &self.field,
                    "icon must be a string of SVG markup",
                ));
                return;
            }
            None => {
                if self.require_icon {
                    violations.push(ContentViolation::new(
                        entity.name(),
                        &self.field,
                        "icon is missing",
                    ));
                }
                return;
            }
        };

        if icon.len() > self.max_bytes {
            violations.push(ContentViolation::new(
                entity.name(),
                &self.field,
                format!("icon is {} bytes, limit is {}", icon.len(), self.max_bytes),
            ));
        }

        for message in inspect_svg(icon) {
            violations.push(ContentViolation::new(entity.name(), &self.field, message));
        }
    }
}

impl ContentValidator for SvgIconValidator {
    fn validate(&self, entities: &[ParsedEntity]) -> Result<(), Vec<ContentViolation>> {
        let mut violations = Vec::new();
        for entity in entities {
            self.check_entity(entity, &mut violations);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            tracing::warn!(count = violations.len(), "svg icon validation failed");
            Err(violations)
        }
    }
}

/// Walk the markup and describe every problem found.
///
/// Parsing stops at the first syntax error since nothing after it can be
/// trusted.
fn inspect_svg(markup: &str) -> Vec<String> {
    let mut problems = Vec::new();
    if markup.trim().is_empty() {
        problems.push("icon is empty".to_string());
        return problems;
    }

    let mut reader = Reader::from_str(markup);
    let mut depth = 0usize;
    let mut roots = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                check_element(&e, depth, &mut roots, &mut problems);
                depth += 1;
            }
            Ok(Event::Empty(e)) => {
                check_element(&e, depth, &mut roots, &mut problems);
            }
            Ok(Event::End(_)) => {
                if depth == 0 {
                    problems.push("closing tag without matching opening tag".to_string());
                    break;
                }
                depth -= 1;
            }
            Ok(Event::Eof) => {
                if depth > 0 {
                    problems.push("unclosed element at end of markup".to_string());
                }
                break;
            }
            Ok(_) => {}
            Err(e) => {
                problems.push(format!(
                    "malformed markup at byte {}: {}",
                    reader.buffer_position(),
                    e
                ));
                break;
            }
        }
    }

    if roots == 0 && problems.is_empty() {
        problems.push("missing <svg> root element".to_string());
    }
    problems
}

fn check_element(e: &BytesStart<'_>, depth: usize, roots: &mut usize, problems: &mut Vec<String>) {
    let local = e.local_name();
    let name = String::from_utf8_lossy(local.as_ref()).into_owned();

    if depth == 0 {
        *roots += 1;
        if *roots > 1 {
            problems.push("more than one root element".to_string());
        } else if !name.eq_ignore_ascii_case("svg") {
            problems.push(format!("root element is <{}>, expected <svg>", name));
        }
    }

    if name.eq_ignore_ascii_case("script") {
        problems.push("icon contains a <script> element".to_string());
    }

    for attr in e.attributes() {
        match attr {
            Ok(attr) => {
                let key = attr.key.local_name();
                let key = String::from_utf8_lossy(key.as_ref()).to_ascii_lowercase();
                if key.starts_with("on") {
                    problems.push(format!("<{}> has event handler attribute '{}'", name, key));
                }
            }
            Err(err) => {
                problems.push(format!("<{}> has a malformed attribute: {}", name, err));
            }
        }
    }
}
