//! Provider discovery.
//!
//! Each provider module submits a [`ProviderRegistration`] with
//! [`register_provider!`](crate::register_provider). The registrations are
//! collected at link time by `inventory`, so callers can enumerate every
//! compiled-in provider without naming a concrete type.
//!
//! Discovery only runs the factories; it never touches the network.

use std::fmt;

use log::{debug, info};

use crate::config::QuoteConfig;
use crate::provider::QuoteProvider;

/// Compile-time registration record for one provider.
pub struct ProviderRegistration {
    /// Stable key used to order discovered providers. Not necessarily the
    /// service name, which may be overridden by configuration.
    pub id: &'static str,
    /// Builds the provider from process configuration.
    pub factory: fn(&QuoteConfig) -> Box<dyn QuoteProvider>,
}

impl fmt::Debug for ProviderRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistration")
            .field("id", &self.id)
            .field("factory", &"<fn>")
            .finish()
    }
}

inventory::collect!(ProviderRegistration);

/// Registers a provider factory with the global catalog.
///
/// ```ignore
/// fn build(config: &QuoteConfig) -> Box<dyn QuoteProvider> {
///     Box::new(MyService::new(config))
/// }
///
/// quote_common::register_provider!("my_service", build);
/// ```
#[macro_export]
macro_rules! register_provider {
    ($id:expr, $factory:expr) => {
        $crate::inventory::submit! {
            $crate::registry::ProviderRegistration {
                id: $id,
                factory: $factory,
            }
        }
    };
}

/// All compiled-in registration records, sorted by id.
pub fn registrations() -> Vec<&'static ProviderRegistration> {
    let mut all: Vec<_> = inventory::iter::<ProviderRegistration>.into_iter().collect();
    all.sort_by_key(|r| r.id);
    all
}

/// The set of providers available to a process.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Box<dyn QuoteProvider>>,
}

impl ProviderRegistry {
    /// Builds every registered provider exactly once.
    pub fn discover(config: &QuoteConfig) -> Self {
        let providers: Vec<Box<dyn QuoteProvider>> = registrations()
            .into_iter()
            .map(|registration| {
                let provider = (registration.factory)(config);
                debug!(
                    "Registered provider '{}' as service '{}'",
                    registration.id,
                    provider.service_name()
                );
                provider
            })
            .collect();
        info!("Discovered {} quote provider(s)", providers.len());
        Self { providers }
    }

    /// Registry over an explicit provider list, kept in the given order.
    pub fn from_providers(providers: Vec<Box<dyn QuoteProvider>>) -> Self {
        Self { providers }
    }

    /// Every provider in this registry.
    pub fn list_providers(&self) -> &[Box<dyn QuoteProvider>] {
        &self.providers
    }

    /// Service names in registry order.
    pub fn service_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.service_name()).collect()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.service_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::QuoteRequest;
    use crate::result::Result;
    use crate::row::QuoteRow;

    struct Named(&'static str);

    impl QuoteProvider for Named {
        fn service_name(&self) -> &str {
            self.0
        }

        fn execute_query(&self, _request: &QuoteRequest) -> Result<Vec<QuoteRow>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn empty_registry_lists_nothing() {
        let registry = ProviderRegistry::default();
        assert!(registry.list_providers().is_empty());
        assert!(registry.service_names().is_empty());
    }

    #[test]
    fn explicit_registry_keeps_order() {
        let registry = ProviderRegistry::from_providers(vec![Box::new(Named("b")), Box::new(Named("a"))]);
        assert_eq!(registry.service_names(), vec!["b", "a"]);
    }

    #[test]
    fn discovery_finds_each_registration_once() {
        let registry = ProviderRegistry::discover(&QuoteConfig::with_lookup(|_| None));
        assert_eq!(registry.list_providers().len(), registrations().len());
        assert!(registry.service_names().contains(&"Yahoo"));
    }

    #[test]
    fn registrations_are_sorted_and_unique() {
        let ids: Vec<_> = registrations().iter().map(|r| r.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }
}
