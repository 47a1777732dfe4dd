//! HTTP request handlers.
//!
//! Controllers check access with [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert request DTOs into params, call a service and convert the returned domain
//! model back into a response DTO. Every handler is annotated for the OpenAPI document.

pub mod auth;
pub mod character;
pub mod equipment;
pub mod progression;
