//! Port definitions.

mod hospital_source_port;

pub use hospital_source_port::HospitalSourcePort;

#[cfg(test)]
pub mod mocks {
    pub use super::hospital_source_port::mock::MockHospitalSource;
}
