use super::traits::Dataset;
use neurograd_core::NeuroGradError;

/// A simple dataset that wraps a `Vec` of items.
#[derive(Debug, Clone, PartialEq)]
pub struct VecDataset<T: Clone> {
    data: Vec<T>,
}

impl<T: Clone> VecDataset<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone> From<Vec<T>> for VecDataset<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T: Clone> Dataset for VecDataset<T> {
    type Item = T;

    /// Clones the item at `index`.
    fn get(&self, index: usize) -> Result<Self::Item, NeuroGradError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(NeuroGradError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
