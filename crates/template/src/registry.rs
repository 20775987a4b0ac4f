use crate::TemplateError;
use std::collections::HashMap;

/// A bound text operation. The optional argument is the third placeholder
/// segment, passed through verbatim.
pub type ProviderFn = Box<dyn Fn(Option<&str>) -> String + Send + Sync>;

/// Explicit registration table mapping `(provider, operation)` to a bound
/// function, built once at startup by whoever assembles the process.
///
/// Lookup failure is a regular error value, and the two failure modes are
/// kept distinct so a typo in a provider name reads differently from a typo
/// in an operation name.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, HashMap<String, ProviderFn>>,
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ops: Vec<String> = self
            .providers
            .iter()
            .flat_map(|(p, table)| table.keys().map(move |o| format!("{}:{}", p, o)))
            .collect();
        ops.sort();
        f.debug_struct("ProviderRegistry").field("ops", &ops).finish()
    }
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `provider:operation` to `f`. Re-registering replaces the binding.
    pub fn register<F>(&mut self, provider: &str, operation: &str, f: F)
    where
        F: Fn(Option<&str>) -> String + Send + Sync + 'static,
    {
        self.providers
            .entry(provider.to_string())
            .or_default()
            .insert(operation.to_string(), Box::new(f));
    }

    /// Resolve and invoke one operation.
    pub fn call(
        &self,
        provider: &str,
        operation: &str,
        argument: Option<&str>,
    ) -> Result<String, TemplateError> {
        let table = self
            .providers
            .get(provider)
            .ok_or_else(|| TemplateError::UnknownProvider(provider.to_string()))?;
        let f = table
            .get(operation)
            .ok_or_else(|| TemplateError::UnknownOperation {
                provider: provider.to_string(),
                operation: operation.to_string(),
            })?;
        Ok(f(argument))
    }
}
