//! Products domain module: catalog entities and variant generation.
//!
//! The generator turns a parent product plus its configurator entries into one
//! derived variant record per option combination. Reads and the final write go
//! through the collaborator traits in [`repository`]; everything in between is
//! deterministic in-memory logic (no IO, no HTTP, no storage).

pub mod configurator;
pub mod error;
pub mod generator;
pub mod price;
pub mod product;
pub mod repository;
pub mod variant;

pub use configurator::{ConfigOption, ConfiguratorEntry, OptionGroupRef};
pub use error::{GenerationError, GenerationResult};
pub use generator::combination::{Combination, Combinations};
pub use generator::index::{OptionGroupBucket, OptionIndex};
pub use generator::settings::GeneratorSettings;
pub use generator::window::Window;
pub use generator::{VariantGenerator, build_variants};
pub use price::Price;
pub use product::Product;
pub use repository::{BatchWriter, ConfiguratorReader, ProductReader, RepositoryError};
pub use variant::{VariantRecord, Variation};
