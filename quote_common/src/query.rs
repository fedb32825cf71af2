//! Query orchestration: pick a provider by name and run a request against it.
use log::debug;

use crate::attribute::QuoteAttribute;
use crate::error::QuoteError;
use crate::provider::QuoteProvider;
use crate::registry::ProviderRegistry;
use crate::request::QuoteRequest;
use crate::result::Result;
use crate::row::QuoteRow;

/// Resolves providers from a registry and dispatches requests to them.
#[derive(Debug)]
pub struct QueryOrchestrator {
    registry: ProviderRegistry,
}

impl QueryOrchestrator {
    /// Orchestrator over `registry`.
    pub fn new(registry: ProviderRegistry) -> Self {
        Self { registry }
    }

    /// The registry providers are resolved from.
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Finds the provider whose service name equals `name`, ignoring ASCII case.
    ///
    /// `name` is compared as given; callers trim user input.
    pub fn resolve(&self, name: &str) -> Result<&dyn QuoteProvider> {
        self.registry
            .list_providers()
            .iter()
            .find(|provider| provider.answers_to(name))
            .map(|provider| &**provider)
            .ok_or_else(|| QuoteError::ProviderNotFound(name.to_string()))
    }

    /// Runs `request` against `provider`. Errors are passed through unchanged.
    pub fn run(&self, provider: &dyn QuoteProvider, request: &QuoteRequest) -> Result<Vec<QuoteRow>> {
        debug!(
            "Querying {} for {} symbol(s), {} attribute(s)",
            provider.service_name(),
            request.symbols().len(),
            request.attributes().len()
        );
        provider.execute_query(request)
    }

    /// Resolves `service`, builds the request and runs it.
    ///
    /// Provider resolution happens first, so an unknown service is reported
    /// even when the rest of the request is empty.
    pub fn query<I, S>(&self, service: &str, symbols: I, attributes: Vec<QuoteAttribute>) -> Result<Vec<QuoteRow>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let provider = self.resolve(service)?;
        let request = QuoteRequest::new(symbols, attributes)?;
        self.run(provider, &request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Echoes each symbol back under every requested attribute.
    struct Echo {
        name: &'static str,
        calls: Arc<AtomicUsize>,
    }

    impl Echo {
        fn new(name: &'static str) -> Self {
            Self::counted(name, Arc::new(AtomicUsize::new(0)))
        }

        fn counted(name: &'static str, calls: Arc<AtomicUsize>) -> Self {
            Self { name, calls }
        }
    }

    impl QuoteProvider for Echo {
        fn service_name(&self) -> &str {
            self.name
        }

        fn execute_query(&self, request: &QuoteRequest) -> Result<Vec<QuoteRow>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(request
                .symbols()
                .iter()
                .map(|symbol| {
                    request
                        .attributes()
                        .iter()
                        .map(|a| (*a, symbol.clone()))
                        .collect()
                })
                .collect())
        }
    }

    fn orchestrator() -> QueryOrchestrator {
        QueryOrchestrator::new(ProviderRegistry::from_providers(vec![
            Box::new(Echo::new("Yahoo")),
            Box::new(Echo::new("Stub")),
        ]))
    }

    #[test]
    fn resolve_ignores_case() {
        let orchestrator = orchestrator();
        let upper = orchestrator.resolve("YAHOO").unwrap();
        let lower = orchestrator.resolve("yahoo").unwrap();
        assert_eq!(upper.service_name(), "Yahoo");
        assert!(std::ptr::addr_eq(upper, lower));
    }

    #[test]
    fn resolve_unknown_name_fails() {
        let err = orchestrator().resolve("google").err().unwrap();
        match err {
            QuoteError::ProviderNotFound(name) => assert_eq!(name, "google"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn resolve_does_not_trim_names() {
        let err = orchestrator().resolve(" yahoo ").err().unwrap();
        assert!(matches!(err, QuoteError::ProviderNotFound(name) if name == " yahoo "));
    }

    #[test]
    fn resolve_rejects_prefix_match() {
        assert!(orchestrator().resolve("Yah").is_err());
    }

    #[test]
    fn resolve_against_empty_registry_fails() {
        let orchestrator = QueryOrchestrator::new(ProviderRegistry::default());
        assert!(matches!(
            orchestrator.resolve("Yahoo"),
            Err(QuoteError::ProviderNotFound(_))
        ));
    }

    #[test]
    fn query_returns_one_row_per_symbol_in_order() {
        let rows = orchestrator()
            .query("stub", ["ORCL", "MSFT", "AAPL"], vec![QuoteAttribute::Symbol])
            .unwrap();
        let symbols: Vec<_> = rows
            .iter()
            .map(|r| r.get(QuoteAttribute::Symbol).unwrap())
            .collect();
        assert_eq!(symbols, vec!["ORCL", "MSFT", "AAPL"]);
    }

    #[test]
    fn unknown_provider_never_reaches_a_backend() {
        let calls = Arc::new(AtomicUsize::new(0));
        let orchestrator = QueryOrchestrator::new(ProviderRegistry::from_providers(vec![Box::new(
            Echo::counted("Yahoo", Arc::clone(&calls)),
        )]));

        let result = orchestrator.query("missing", ["ORCL"], vec![QuoteAttribute::Symbol]);
        assert!(matches!(result, Err(QuoteError::ProviderNotFound(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        orchestrator
            .query("Yahoo", ["ORCL"], vec![QuoteAttribute::Symbol])
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn invalid_request_is_rejected_before_dispatch() {
        let err = orchestrator()
            .query("Yahoo", Vec::<String>::new(), vec![QuoteAttribute::Symbol])
            .unwrap_err();
        assert!(matches!(err, QuoteError::InvalidRequest(_)));
    }
}
