//! Card system: templates, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `Tier`, `Color`: the two properties that drive every rule
//! - `CardTemplate`: immutable card data shared by all copies
//! - `CardInstance`: a physical card moving between containers
//! - `CardCatalog`: template lookup and deck counts

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::CardCatalog;
pub use definition::{CardTemplate, Color, Tier};
pub use instance::CardInstance;
