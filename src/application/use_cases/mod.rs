//! Use case implementations.

mod load_hospitals_use_case;
mod login_use_case;
mod register_use_case;

pub use load_hospitals_use_case::LoadHospitalsUseCase;
pub use login_use_case::LoginUseCase;
pub use register_use_case::RegisterUseCase;
