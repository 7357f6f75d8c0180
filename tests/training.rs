use backprop_nn::train::evaluate::{accuracy, total_cost};
use backprop_nn::{NetError, Network, Sample, TrainConfig};

/// Two well separated clusters, one-hot labelled.
fn clusters() -> Vec<Sample> {
    let mut samples = Vec::new();
    for i in 0..10 {
        let t = i as f64 / 10.0;
        samples.push(Sample::new(vec![0.1 + 0.1 * t, 0.2 - 0.1 * t, 0.1], vec![1.0, 0.0]));
        samples.push(Sample::new(vec![0.9 - 0.1 * t, 0.8 + 0.1 * t, 0.9], vec![0.0, 1.0]));
    }
    samples
}

#[test]
fn trains_a_separable_problem_to_full_accuracy() {
    let mut network = Network::with_seed(&[3, 5, 2], 12).unwrap();
    let test_set = clusters();
    let mut data = clusters();

    let before = total_cost(&network, &test_set, 0.0).unwrap();
    let config = TrainConfig::new(200, 3, 1.0).with_lambda(0.01).with_mu(0.3);
    let mut last_epoch = None;
    network
        .train_with_evaluator(&mut data, &config, |net, epoch| {
            last_epoch = Some(epoch);
            accuracy(net, &test_set).unwrap() == 1.0
        })
        .unwrap();

    assert!(last_epoch.unwrap() < 199, "never reached full accuracy");
    assert_eq!(accuracy(&network, &test_set).unwrap(), 1.0);
    assert!(total_cost(&network, &test_set, 0.0).unwrap() < before);
}

#[test]
fn training_only_reorders_the_dataset() {
    let mut network = Network::with_seed(&[3, 2], 1).unwrap();
    let mut data = clusters();
    network.train(&mut data, &TrainConfig::new(3, 7, 0.5)).unwrap();

    let key = |s: &Sample| format!("{:?}{:?}", s.input, s.label);
    let mut shuffled: Vec<String> = data.iter().map(key).collect();
    let mut original: Vec<String> = clusters().iter().map(key).collect();
    shuffled.sort();
    original.sort();
    assert_eq!(shuffled, original);
}

#[test]
fn mismatched_sample_is_reported_before_training() {
    let mut network = Network::with_seed(&[3, 2], 1).unwrap();
    let weights = network.weights().to_vec();
    let mut data = clusters();
    data.push(Sample::new(vec![0.5; 4], vec![1.0, 0.0]));

    let err = network.train(&mut data, &TrainConfig::new(3, 7, 0.5)).unwrap_err();
    assert!(matches!(err, NetError::ShapeMismatch { got: 4, expected: 3, .. }));
    assert_eq!(err.to_string(), "shape mismatch for sample input: got 4, expected 3");
    assert_eq!(network.weights(), weights.as_slice());
}
