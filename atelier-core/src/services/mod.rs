pub mod catalog;
pub mod identity;
pub mod ledger;

pub use catalog::CatalogService;
pub use identity::IdentityService;
pub use ledger::OwnershipLedger;
