//! Churches domain module (organizational units and their registry data).

pub mod church;
pub mod zip_lookup;

pub use church::{Church, ChurchAddress, ChurchRequest, RegistryType};
pub use zip_lookup::AddressSuggestion;
