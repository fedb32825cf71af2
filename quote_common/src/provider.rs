//! The contract every quote provider implements.
use crate::attribute::QuoteAttribute;
use crate::request::QuoteRequest;
use crate::result::Result;
use crate::row::QuoteRow;

/// A backend that answers quote queries.
///
/// Implementations are built once by their registered factory and then only
/// read, so a provider must be shareable across threads.
pub trait QuoteProvider: Send + Sync {
    /// Name used to select this provider. Compared without regard to ASCII case.
    fn service_name(&self) -> &str;

    /// Fetches one row per requested symbol, in request order.
    ///
    /// Attributes the provider cannot express are left out of the request and
    /// of every returned row. Network failures are reported as
    /// [`QuoteError::Transport`](crate::QuoteError::Transport), never as an empty result.
    fn execute_query(&self, request: &QuoteRequest) -> Result<Vec<QuoteRow>>;

    /// Attributes this provider can deliver.
    fn supported_attributes(&self) -> Vec<QuoteAttribute> {
        QuoteAttribute::enumerate()
    }

    /// `true` if `name` identifies this provider.
    fn answers_to(&self, name: &str) -> bool {
        self.service_name().eq_ignore_ascii_case(name)
    }
}
