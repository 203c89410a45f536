use crate::dataloader::DataLoader;
use crate::datasets::{Dataset, VecDataset};
use crate::samplers::{RandomSampler, SequentialSampler};
use neurograd_core::NeuroGradError;
use std::collections::HashSet;

#[test]
fn test_dataloader_sequential() {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
    let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
    assert_eq!(loader.num_batches(), 3);
    let batches: Vec<Vec<i32>> = loader.map(|b| b.unwrap()).collect();
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
}

#[test]
fn test_dataloader_partial_last_batch() {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
    let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
    assert_eq!(loader.num_batches(), 3);
    let batches: Vec<Vec<i32>> = loader.map(|b| b.unwrap()).collect();
    assert_eq!(batches.last().unwrap(), &vec![5]);
}

#[test]
fn test_dataloader_drop_last() {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
    let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), true).unwrap();
    assert_eq!(loader.num_batches(), 2);
    let batches: Vec<Vec<i32>> = loader.map(|b| b.unwrap()).collect();
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn test_dataloader_reset_starts_new_pass() {
    let dataset = VecDataset::new((0..10).collect::<Vec<i32>>());
    let sampler = RandomSampler::new(false, None).with_seed(5);
    let mut loader = DataLoader::new(dataset, 3, sampler, false).unwrap();

    let first: Vec<i32> = loader.by_ref().flat_map(|b| b.unwrap()).collect();
    assert!(loader.next().is_none());
    loader.reset();
    let second: Vec<i32> = loader.by_ref().flat_map(|b| b.unwrap()).collect();

    for pass in [&first, &second] {
        let seen: HashSet<i32> = pass.iter().copied().collect();
        assert_eq!(pass.len(), 10);
        assert_eq!(seen.len(), 10);
    }
    assert_ne!(first, second);
}

#[test]
fn test_dataloader_rejects_zero_batch_size() {
    let dataset = VecDataset::new(vec![1]);
    assert!(matches!(
        DataLoader::new(dataset, 0, SequentialSampler::new(), false),
        Err(NeuroGradError::ConfigurationError(_))
    ));
}

// A dataset whose `len` overstates its contents.
#[derive(Debug)]
struct ShortDataset;

impl Dataset for ShortDataset {
    type Item = u8;

    fn get(&self, index: usize) -> Result<u8, NeuroGradError> {
        if index < 2 {
            Ok(index as u8)
        } else {
            Err(NeuroGradError::IndexOutOfBounds { index, len: 2 })
        }
    }

    fn len(&self) -> usize {
        4
    }
}

#[test]
fn test_dataloader_yields_get_errors() {
    let mut loader = DataLoader::new(ShortDataset, 2, SequentialSampler::new(), false).unwrap();
    assert_eq!(loader.next().unwrap(), Ok(vec![0, 1]));
    assert_eq!(
        loader.next().unwrap(),
        Err(NeuroGradError::IndexOutOfBounds { index: 2, len: 2 })
    );
}
