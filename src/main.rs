// Small demonstration binary; all network logic lives in the library.
// Usage:
//   RUST_LOG=debug cargo run -- [train_config.json]
use std::process::ExitCode;

use backprop_nn::train::evaluate::accuracy;
use backprop_nn::{Network, Result, Sample, TrainConfig};
use log::{error, info};

fn xor_samples() -> Vec<Sample> {
    vec![
        Sample::new(vec![0.0, 0.0], vec![0.0]),
        Sample::new(vec![0.0, 1.0], vec![1.0]),
        Sample::new(vec![1.0, 0.0], vec![1.0]),
        Sample::new(vec![1.0, 1.0], vec![0.0]),
    ]
}

/// Trains until every sample of `eval_set` is classified correctly or the
/// epochs run out. A failed evaluation aborts training and is returned.
fn train_until_solved(
    network: &mut Network,
    training_data: &mut [Sample],
    eval_set: &[Sample],
    config: &TrainConfig,
) -> Result<()> {
    let mut eval_error = None;
    network.train_with_evaluator(training_data, config, |net, epoch| {
        match accuracy(net, eval_set) {
            Ok(acc) => {
                if epoch % 500 == 0 || acc == 1.0 {
                    info!("epoch {epoch}: accuracy {:.2}", acc);
                }
                acc == 1.0
            }
            Err(e) => {
                eval_error = Some(e);
                true
            }
        }
    })?;

    match eval_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn run() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => TrainConfig::load_json(&path)?,
        None => TrainConfig::new(5000, 4, 2.0).with_mu(0.5),
    };

    let mut network = Network::new(&[2, 3, 1])?;
    let eval_set = xor_samples();
    let mut training_data = xor_samples();

    train_until_solved(&mut network, &mut training_data, &eval_set, &config)?;

    for sample in &eval_set {
        let output = network.feedforward(&sample.input)?;
        println!("Input: {:?} -> Output: {:.4}", sample.input, output[0]);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
