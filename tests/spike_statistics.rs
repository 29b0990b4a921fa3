#[cfg(test)]
mod tests {
    use ndarray::Array1;
    use rand::{rngs::StdRng, SeedableRng};
    use neuronal_dynamics::error::ModelError;
    use neuronal_dynamics::neuron::{
        ModelKind,
        input_current::{ConstantInput, InputCurrent, NoisyConstantInput},
        statistics::{find_peaks, RunStatistics, StepStatistics},
    };

    #[test]
    fn test_find_peaks_ignores_subthreshold_maxima() {
        let trace = [0., 1., 0., 3., 0., 1., 0.];
        assert_eq!(find_peaks(&trace, 2., 1), vec![3]);
        assert_eq!(find_peaks(&trace, 0.5, 1), vec![1, 3, 5]);
        assert_eq!(find_peaks(&trace, 10., 1), Vec::<usize>::new());
    }

    #[test]
    fn test_find_peaks_keeps_taller_of_close_peaks() {
        // two peaks 2 samples apart, the taller second one must win
        let trace = [0., 1., 0., 2., 0.];
        assert_eq!(find_peaks(&trace, 0.5, 5), vec![3]);

        // reversed order, the first one is kept
        let trace = [0., 2., 0., 1., 0.];
        assert_eq!(find_peaks(&trace, 0.5, 5), vec![1]);

        // far enough apart both survive
        assert_eq!(find_peaks(&trace, 0.5, 2), vec![1, 3]);
    }

    #[test]
    fn test_find_peaks_requires_strict_local_maximum() {
        // plateaus are not strict maxima
        let trace = [0., 3., 3., 3., 0.];
        assert_eq!(find_peaks(&trace, 1., 1), Vec::<usize>::new());

        // endpoints have no two neighbors and are never peaks
        let trace = [5., 0., 0., 5.];
        assert_eq!(find_peaks(&trace, 1., 1), Vec::<usize>::new());
    }

    #[test]
    fn test_zero_spike_run_yields_zero_mean_and_frequency() {
        let mut stats = RunStatistics::new(100, 0.1);
        for i in 0..100 {
            stats.steps.push(StepStatistics::new(i as f32 * 0.1, 1));
        }

        stats.detect_spikes(1, -56., 10);

        assert!(stats.spikes[0].is_empty());
        assert!(stats.spike_intervals[0].is_empty());
        assert_eq!(stats.mean_interspike_interval[0], 0.);
        assert_eq!(stats.firing_frequency[0], 0.);
    }

    #[test]
    fn test_intervals_scale_with_dt() {
        let mut stats = RunStatistics::new(50, 0.5);
        for i in 0..50 {
            let mut step = StepStatistics::new(i as f32 * 0.5, 1);
            // spikes at indices 10, 20 and 40
            if [10usize, 20, 40].contains(&i) {
                step.voltage.fill(30.);
            } else {
                step.voltage.fill(-70.);
            }
            stats.steps.push(step);
        }

        stats.detect_spikes(1, -56., 5);

        assert_eq!(stats.spikes[0], vec![10, 20, 40]);
        assert_eq!(stats.spike_intervals[0], vec![5., 10.]);
        assert_eq!(stats.mean_interspike_interval[0], 7.5);
        assert!((stats.firing_frequency[0] - 1. / 7.5).abs() < 1e-6);
    }

    #[test]
    fn test_constant_input_window_rule() {
        let mut input = ConstantInput::uniform(2, 4., 10., 20.);

        assert_eq!(input.get_current(5.), Array1::zeros(2));
        assert_eq!(input.get_current(10.), Array1::from_elem(2, 4.));
        assert_eq!(input.get_current(20.), Array1::from_elem(2, 4.));
        assert_eq!(input.get_current(20.01), Array1::zeros(2));
    }

    #[test]
    fn test_noisy_input_is_reproducible_given_a_seed() {
        let amplitude = Array1::from_elem(3, 5.);

        let mut first = NoisyConstantInput::new(
            amplitude.clone(), 2., 0., 10., StdRng::seed_from_u64(42),
        );
        let mut second = NoisyConstantInput::new(
            amplitude.clone(), 2., 0., 10., StdRng::seed_from_u64(42),
        );

        for i in 0..5 {
            let t = i as f32;
            let a = first.get_current(t);
            let b = second.get_current(t);

            assert_eq!(a, b);
            // noise actually perturbs the base amplitude
            assert!(a.iter().any(|&value| (value - 5.).abs() > 1e-6));
        }

        // outside the window the stimulation is exactly zero, no noise
        assert_eq!(first.get_current(11.), Array1::zeros(3));
    }

    #[test]
    fn test_unknown_model_identifier_is_rejected() {
        assert_eq!(ModelKind::try_from("const").unwrap(), ModelKind::ConstantConductance);
        assert_eq!(ModelKind::try_from("lif").unwrap(), ModelKind::LeakyIntegrateAndFire);
        assert_eq!(ModelKind::try_from("hh").unwrap(), ModelKind::HodgkinHuxley);

        let err = ModelKind::try_from("izhikevich").unwrap_err();
        match &err {
            ModelError::UnknownModelKind(name) => assert_eq!(name, "izhikevich"),
        }
        assert_eq!(format!("{}", err), "Unknown model kind: izhikevich");
    }
}
