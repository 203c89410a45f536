use std::fmt::Debug;

/// Defines the order in which a `DataLoader` visits dataset indices.
pub trait Sampler: Debug {
    /// Returns the indices for one pass over a dataset of `dataset_len` items.
    ///
    /// Takes `&mut self` so seeded samplers advance their generator and
    /// produce a fresh order on every pass.
    fn iter(&mut self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>>;

    /// Number of indices one pass yields.
    fn len(&self, dataset_len: usize) -> usize;
}
