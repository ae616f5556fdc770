pub mod conversion;
pub mod definition;
pub mod lookup;
pub mod normalizer;

pub use conversion::*;
pub use definition::*;
pub use lookup::{GENERIC_INDUSTRY, GENERIC_RESPONSE_TIME, LookupTables};
pub use normalizer::{NormalizedProfile, ProfileNormalizer, email_domain};
