//! kurs24 Portal Core Library
//!
//! Provides the business logic of the customer portal, including:
//! - User-id resolution (User Resolver)
//! - Tenant lifecycle operations (Tenant Service)
//! - Provisioning status polling (Status Poller)
//!
//! This library is designed to be platform-independent: the provisioning
//! backend is abstracted through the [`kurs24_backend::ProvisioningApi`]
//! trait, so the web member and tests inject their own implementations.

pub mod error;
pub mod poller;
pub mod progress;
pub mod services;
pub mod subdomain;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use poller::{PollOutcome, PollerConfig, ProgressUpdate, StatusPoller};
pub use services::{ServiceContext, TenantService, UserResolver};
pub use subdomain::validate_subdomain;
