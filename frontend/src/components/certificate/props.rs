//! Properties of the `CertificateFormComponent`.

use common::config::ApiConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CertificateFormProps {
    /// Student API deployment every request is sent to.
    ///
    /// Changing it swaps the HTTP client in place; requests already in flight
    /// finish against the old base.
    #[prop_or_default]
    pub config: ApiConfig,
}
