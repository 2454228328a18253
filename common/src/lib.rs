//! Platform-independent core of the certificate desk.
//!
//! Everything the browser form needs that does not touch the DOM lives here:
//! the wire model, form bookkeeping, the wizard state machine, certificate
//! number generation, endpoint configuration and the async CRUD workflows.
//! The `frontend` crate supplies the HTTP transport and the UI around it.

pub mod api;
pub mod certificate;
pub mod config;
pub mod error;
pub mod form;
pub mod latest;
pub mod model;
pub mod wizard;
pub mod workflow;
