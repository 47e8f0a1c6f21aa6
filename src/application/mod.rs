//! Application layer with the shared context, use cases and DTOs.

/// Shared hospital context.
pub mod context;
/// Data transfer objects.
pub mod dto;
/// Use case implementations.
pub mod use_cases;

pub use context::{ContextUpdate, HospitalContext};
pub use dto::{LoginRequest, LoginResponse, RegistrationRequest, RegistrationResponse};
pub use use_cases::{LoadHospitalsUseCase, LoginUseCase, RegisterUseCase};
