//! Core module containing the listing domain: records, filtering, the
//! property store and the storage interface it is built on

pub mod backend;
pub mod enquiry;
pub mod error;
pub mod filter;
pub mod property;
pub mod store;

pub use backend::PropertyBackend;
pub use enquiry::{Enquiry, EnquirySink, LogEnquirySink};
pub use error::{ErrorResponse, ListingError, ListingResult, StorageError, StorageOperation};
pub use filter::{FilterSpec, PropertyQuery, filter_properties};
pub use property::{Property, PropertyId, PropertyInput, PropertyKind, SaleMode, Usage};
pub use store::{PropertyStore, next_id};
