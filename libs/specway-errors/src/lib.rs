//! Error taxonomy for the specway OpenAPI request framework
//!
//! Validation and routing code raise the errors defined here; they carry
//! data only. The response boundary ([`boundary::render`]) turns them into
//! RFC 9457 problem responses through the pure [`problem::problem`]
//! formatter. It includes:
//! - Problem errors with per-kind defaults (`ProblemError`)
//! - Access-control errors for 401/403 (`AccessError`)
//! - Resolver, type-validation and specification errors
//! - The root `SpecwayError` that `?` lifts every failure into
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod access;
#[cfg(feature = "axum")]
mod axum_ext;
pub mod boundary;
pub mod catalog;
pub mod config;
pub mod error;
pub mod exception;
pub mod problem;
pub mod resolver;
pub mod validation;

// Re-export commonly used types
pub use access::{AccessError, AccessKind};
pub use boundary::{render, resolve_or_problem};
pub use catalog::ErrDef;
pub use config::{ConfigError, DetailExposure, RenderConfig};
pub use error::{SpecwayError, SpecwayResult};
pub use exception::{ProblemError, ProblemKind, ResponsePart};
pub use problem::{APPLICATION_PROBLEM_JSON, Problem, ProblemResponse, problem};
pub use resolver::{FailureContext, ResolverError, ResolverErrorPolicy};
pub use validation::{InvalidSpecification, TypeValidationError, ValidationFailure};
