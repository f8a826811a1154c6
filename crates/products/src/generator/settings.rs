/// Tunables for a `VariantGenerator`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Upper bound on the unsliced combination count of one product.
    /// `None` means unlimited.
    pub max_combinations: Option<usize>,
}

impl GeneratorSettings {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_combinations(mut self, max: usize) -> Self {
        self.max_combinations = Some(max);
        self
    }
}
