//! Message parameters and deferred, renderable catalog messages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single positional message parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageParam {
    /// A literal text value.
    Text(String),
    /// Placeholder for a slot that had no stored value.
    Missing,
}

impl MessageParam {
    /// Build a text parameter.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// The text of this parameter, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Missing => None,
        }
    }

    /// Whether this is the missing-slot placeholder.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for MessageParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Missing => Ok(()),
        }
    }
}

/// A message selected from the catalog, with its parameters bound but not
/// yet interpolated.
///
/// Interpolation happens in [`RenderableMessage::text`], so the caller
/// decides when (and whether) the final string is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderableMessage {
    /// The catalog key that was requested.
    pub key: String,
    /// Positional parameters; `params[0]` fills `$1`.
    pub params: Vec<MessageParam>,
    /// The template the catalog resolved for `key`, if it knows the key.
    pub template: Option<String>,
}

impl RenderableMessage {
    /// Create a renderable message.
    pub fn new(key: impl Into<String>, params: Vec<MessageParam>, template: Option<String>) -> Self {
        Self {
            key: key.into(),
            params,
            template,
        }
    }

    /// Whether the catalog had a template for this key.
    pub fn exists(&self) -> bool {
        self.template.is_some()
    }

    /// Interpolate `$N` placeholders with the bound parameters.
    ///
    /// Unknown keys render as `⧼key⧽`. Placeholders past the end of the
    /// parameter list are left untouched and missing parameters render as
    /// empty text.
    pub fn text(&self) -> String {
        let Some(template) = &self.template else {
            return format!("⧼{}⧽", self.key);
        };

        let mut out = String::with_capacity(template.len());
        let mut chars = template.char_indices().peekable();

        while let Some((_, c)) = chars.next() {
            if c != '$' {
                out.push(c);
                continue;
            }

            let mut digits = String::new();
            while let Some(&(_, d)) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                digits.push(d);
                chars.next();
            }

            let slot = digits.parse::<usize>().ok().filter(|n| *n >= 1);
            match slot.and_then(|n| self.params.get(n - 1)) {
                Some(param) => out.push_str(&param.to_string()),
                None => {
                    out.push('$');
                    out.push_str(&digits);
                }
            }
        }

        out
    }
}

impl fmt::Display for RenderableMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(template: Option<&str>, params: Vec<MessageParam>) -> RenderableMessage {
        RenderableMessage::new("short-header-mention", params, template.map(str::to_string))
    }

    #[test]
    fn test_interpolates_positional_params() {
        let msg = message(
            Some("$1 mentioned you on $2"),
            vec![MessageParam::text("Bob"), MessageParam::text("Talk:Main")],
        );
        assert_eq!(msg.text(), "Bob mentioned you on Talk:Main");
    }

    #[test]
    fn test_missing_param_renders_empty() {
        let msg = message(
            Some("[$1] $2"),
            vec![MessageParam::Missing, MessageParam::text("Alice")],
        );
        assert_eq!(msg.text(), "[] Alice");
    }

    #[test]
    fn test_out_of_range_placeholder_kept() {
        let msg = message(Some("$1 and $3, cost $"), vec![MessageParam::text("x")]);
        assert_eq!(msg.text(), "x and $3, cost $");
    }

    #[test]
    fn test_multi_digit_placeholder() {
        let params = (1..=10).map(|n| MessageParam::text(n.to_string())).collect();
        let msg = message(Some("$10-$1"), params);
        assert_eq!(msg.text(), "10-1");
    }

    #[test]
    fn test_unknown_key() {
        let msg = message(None, vec![]);
        assert!(!msg.exists());
        assert_eq!(msg.text(), "⧼short-header-mention⧽");
    }
}
