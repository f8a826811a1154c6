//! Variant generation pipeline.
//!
//! ```text
//! configurator entries
//!   ↓ OptionIndex::build      (stable grouping, first-seen order)
//! groups
//!   ↓ combination::enumerate  (cartesian product, last group fastest)
//! combinations
//!   ↓ Window::apply           (optional offset/limit)
//!   ↓ VariantAssembler        (name, variations, group-ordered ids, price)
//! variant records
//!   ↓ BatchWriter::create
//! write acknowledgment
//! ```
//!
//! Everything between the reads and the write is a pure in-memory transform.
//! Either the whole (windowed) batch reaches the writer, or the call fails
//! before the writer is invoked.

pub mod assembler;
pub mod combination;
pub mod index;
pub mod pricing;
pub mod settings;
pub mod window;

#[cfg(test)]
pub(crate) mod fixtures;

use tracing::{debug, instrument, warn};

use variantgen_core::{Context, ProductId};

use crate::configurator::ConfiguratorEntry;
use crate::error::{GenerationError, GenerationResult};
use crate::product::Product;
use crate::repository::{BatchWriter, ConfiguratorReader, ProductReader};
use crate::variant::VariantRecord;

use assembler::VariantAssembler;
use index::OptionIndex;
use settings::GeneratorSettings;
use window::Window;

/// Build the variant records of `product` without touching any store.
///
/// # Errors
///
/// `PriceOverflow` if any variant's price leaves the `i64` range.
pub fn build_variants(
    product: &Product,
    entries: &[ConfiguratorEntry],
    window: Window,
) -> GenerationResult<Vec<VariantRecord>> {
    let index = OptionIndex::build(entries);
    assemble_window(product, entries, &index, window)
}

fn assemble_window(
    product: &Product,
    entries: &[ConfiguratorEntry],
    index: &OptionIndex,
    window: Window,
) -> GenerationResult<Vec<VariantRecord>> {
    let combinations = window.apply(combination::enumerate(index.groups()));
    let assembler = VariantAssembler::new(product, entries, index);
    combinations
        .iter()
        .map(|c| assembler.assemble(c))
        .collect::<Result<_, _>>()
        .map_err(|source| GenerationError::PriceOverflow {
            product_id: product.id_typed(),
            source,
        })
}

/// Generates every option combination of a product as a variant record and
/// hands the batch to a `BatchWriter`.
///
/// Holds no per-call state; one generator may serve concurrent calls for
/// different products.
#[derive(Debug)]
pub struct VariantGenerator<P, C, W> {
    products: P,
    configurators: C,
    writer: W,
    settings: GeneratorSettings,
}

impl<P, C, W> VariantGenerator<P, C, W> {
    pub fn new(products: P, configurators: C, writer: W) -> Self {
        Self {
            products,
            configurators,
            writer,
            settings: GeneratorSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: GeneratorSettings) -> Self {
        self.settings = settings;
        self
    }
}

impl<P, C, W> VariantGenerator<P, C, W>
where
    P: ProductReader,
    C: ConfiguratorReader,
    W: BatchWriter,
{
    /// Generate the variants of `product_id` and write them as one batch.
    ///
    /// With both `offset` and `limit` given only that window of the enumeration
    /// is assembled and written. Returns the writer's acknowledgment unchanged.
    ///
    /// # Errors
    ///
    /// - `ProductNotFound` if the product reader has no such product (the
    ///   configurator store is not queried then)
    /// - `NoConfiguratorFound` if the product has no configurator entries
    /// - `ConfiguratorMismatch` if the configurator store returns foreign entries
    /// - `CombinationLimitExceeded` if `settings.max_combinations` is exceeded
    /// - `PriceOverflow` if a variant's price leaves the `i64` range (nothing
    ///   is written then)
    /// - `Repository` for collaborator failures
    #[instrument(skip(self, ctx), fields(tenant_id = %ctx.tenant_id()))]
    pub fn generate(
        &self,
        product_id: ProductId,
        ctx: &Context,
        offset: Option<usize>,
        limit: Option<usize>,
    ) -> GenerationResult<W::Ack> {
        let (product, entries) = self.load(product_id, ctx)?;

        let index = OptionIndex::build(&entries);
        let total = self.check_limit(product_id, &index)?;

        let variants = assemble_window(&product, &entries, &index, Window::new(offset, limit))?;
        debug!(
            groups = index.group_count(),
            combinations = total,
            batch = variants.len(),
            "assembled variant batch"
        );

        Ok(self.writer.create(variants, ctx)?)
    }

    /// Number of variants a full (unwindowed) `generate` would produce.
    ///
    /// Same preconditions as `generate`; nothing is assembled or written.
    #[instrument(skip(self, ctx), fields(tenant_id = %ctx.tenant_id()))]
    pub fn count_variants(&self, product_id: ProductId, ctx: &Context) -> GenerationResult<usize> {
        let (_, entries) = self.load(product_id, ctx)?;
        Ok(OptionIndex::build(&entries).combination_count())
    }

    fn load(
        &self,
        product_id: ProductId,
        ctx: &Context,
    ) -> GenerationResult<(Product, Vec<ConfiguratorEntry>)> {
        let mut products = self.products.read(&[product_id], ctx)?;
        let Some(product) = products.remove(&product_id) else {
            warn!(%product_id, "product not found");
            return Err(GenerationError::ProductNotFound(product_id));
        };

        let entries = self.configurators.search(product_id, ctx)?;
        if entries.is_empty() {
            warn!(%product_id, "product has no configurator entries");
            return Err(GenerationError::NoConfiguratorFound(product_id));
        }
        if let Some(foreign) = entries.iter().find(|e| e.product_id() != product_id) {
            return Err(GenerationError::ConfiguratorMismatch {
                expected: product_id,
                found: foreign.product_id(),
            });
        }

        Ok((product, entries))
    }

    fn check_limit(&self, product_id: ProductId, index: &OptionIndex) -> GenerationResult<usize> {
        let count = index.combination_count();
        match self.settings.max_combinations {
            Some(limit) if count > limit => {
                warn!(%product_id, count, limit, "combination limit exceeded");
                Err(GenerationError::CombinationLimitExceeded {
                    product_id,
                    count,
                    limit,
                })
            }
            _ => Ok(count),
        }
    }
}
