//! Placeholder scanning and resolution.
//!
//! Placeholders are `{provider:operation[:argument]}` spans embedded in
//! otherwise arbitrary text. A braced span that does not match the grammar
//! (no colon, or unclosed) is literal text, not an error.

use crate::registry::ProviderRegistry;
use crate::TemplateError;
use std::borrow::Cow;
use std::collections::HashMap;

/// One parsed `provider:operation[:argument]` invocation.
struct Invocation<'a> {
    provider: &'a str,
    operation: &'a str,
    argument: Option<&'a str>,
}

/// Split the inside of a braced span. Returns `None` when the span does not
/// match the placeholder grammar.
fn parse_invocation(inner: &str) -> Option<Invocation<'_>> {
    let mut parts = inner.splitn(3, ':');
    let provider = parts.next()?;
    let operation = parts.next()?;
    if provider.is_empty() || operation.is_empty() {
        return None;
    }
    Some(Invocation {
        provider,
        operation,
        argument: parts.next(),
    })
}

impl ProviderRegistry {
    /// Replace every placeholder in `template` with its operation's return
    /// value. Identical spans resolve once and are replaced identically.
    ///
    /// A template without `{` is returned borrowed: no scanning beyond the
    /// initial check, no lookups, no allocation. That fast path is what keeps
    /// static text free on the per-frame render path.
    pub fn substitute<'a>(&self, template: &'a str) -> Result<Cow<'a, str>, TemplateError> {
        if !template.contains('{') {
            return Ok(Cow::Borrowed(template));
        }

        let mut resolved: HashMap<&str, String> = HashMap::new();
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];
            let Some(close) = tail.find('}') else {
                // Unclosed brace: everything from here on is literal.
                out.push_str(tail);
                rest = "";
                break;
            };
            let span = &tail[..=close];
            let inner = &span[1..span.len() - 1];
            match parse_invocation(inner) {
                Some(call) => {
                    if !resolved.contains_key(span) {
                        let value = self.call(call.provider, call.operation, call.argument)?;
                        resolved.insert(span, value);
                    }
                    out.push_str(&resolved[span]);
                }
                None => out.push_str(span),
            }
            rest = &tail[close + 1..];
        }
        out.push_str(rest);
        Ok(Cow::Owned(out))
    }

    /// Resolve every placeholder in `template` for side effect only.
    ///
    /// Used for scroll-end hooks, where the bound operations advance provider
    /// state and return values are meaningless.
    pub fn trigger(&self, template: &str) -> Result<(), TemplateError> {
        if !template.contains('{') {
            return Ok(());
        }

        let mut rest = template;
        while let Some(open) = rest.find('{') {
            let tail = &rest[open..];
            let Some(close) = tail.find('}') else {
                break;
            };
            let inner = &tail[1..close];
            if let Some(call) = parse_invocation(inner) {
                self.call(call.provider, call.operation, call.argument)?;
            }
            rest = &tail[close + 1..];
        }
        Ok(())
    }
}
