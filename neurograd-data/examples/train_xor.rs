//! Trains a small tanh/sigmoid network on XOR with Adam and binary cross-entropy,
//! feeding mini-batches from a `DataLoader`.
//!
//! Run with `RUST_LOG=info` to see per-batch and per-epoch logging.

use neurograd_core::inspect::NetworkSnapshot;
use neurograd_core::nn::{Activation, LossKind, Mlp, Module};
use neurograd_core::optim::OptimizerKind;
use neurograd_core::train::{Example, Trainer, TrainerConfig};
use neurograd_core::NeuroGradError;
use neurograd_data::toy::{train_val_split, xor_dataset};
use neurograd_data::{DataLoader, RandomSampler, VecDataset};
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPOCHS: usize = 60;
const BATCH_SIZE: usize = 8;

fn main() -> Result<(), NeuroGradError> {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(42);

    let data = xor_dataset(200, &mut rng);
    let (train, val) = train_val_split(&data, 0.8, &mut rng)?;
    println!("XOR: {} training / {} validation examples", train.len(), val.len());

    let model =
        Mlp::with_activations(2, &[8, 1], Activation::Tanh, Activation::Sigmoid, &mut rng)?;
    println!("{} ({} parameters)", model, model.num_parameters());

    let config = TrainerConfig::default()
        .with_loss(LossKind::Bce)
        .with_optimizer(OptimizerKind::adam())
        .with_learning_rate(0.05)
        .with_batch_size(BATCH_SIZE);
    let mut trainer = Trainer::new(model, config)?;

    let sampler = RandomSampler::new(false, None).with_seed(7);
    let mut loader = DataLoader::new(VecDataset::new(train), BATCH_SIZE, sampler, false)?;

    for epoch in 0..EPOCHS {
        loader.reset();
        let mut loss_sum = 0.0;
        let num_batches = loader.num_batches();
        for batch in loader.by_ref() {
            let batch = batch?;
            let refs: Vec<&Example> = batch.iter().collect();
            loss_sum += trainer.train_batch(&refs)?;
        }
        if epoch % 10 == 0 || epoch + 1 == EPOCHS {
            let metrics = trainer.evaluate(&val)?;
            println!(
                "epoch {:>3}  loss {:.4}  val accuracy {:.3}",
                epoch,
                loss_sum / num_batches as f64,
                metrics["accuracy"]
            );
        }
    }

    let model = trainer.model();
    for inputs in [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]] {
        let snapshot = NetworkSnapshot::with_activations(model, &inputs)?;
        let output = snapshot.outputs().unwrap_or_default();
        println!("{:?} -> {:.3?}", inputs, output);
    }
    let snapshot = NetworkSnapshot::capture(model);
    println!(
        "layers {:?}, gradient norm after last step {:.4}",
        snapshot.neurons_per_layer(),
        snapshot.gradient_norm()
    );
    Ok(())
}
