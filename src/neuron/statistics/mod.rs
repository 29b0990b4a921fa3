//! Per step snapshots of a simulation, whole run accumulation, and the
//! spike detection and interspike interval analysis run over a finished trace.

use ndarray::Array1;


/// A snapshot of a neuron population after a single simulation step,
/// fields that are not meaningful for a given model variant are left unset
#[derive(Debug, Clone)]
pub struct StepStatistics {
    /// Time at this step (ms)
    pub time: f32,
    /// Per neuron membrane potential (mV)
    pub voltage: Array1<f32>,
    /// Per neuron external stimulation (µA/cm²)
    pub i_ext: Array1<f32>,
    /// Per neuron total membrane current (µA/cm²)
    pub i_total: Array1<f32>,
    /// Leak channel current, Hodgkin Huxley only
    pub i_leak: Option<Array1<f32>>,
    /// Potassium channel current, Hodgkin Huxley only
    pub i_potassium: Option<Array1<f32>>,
    /// Sodium channel current, Hodgkin Huxley only
    pub i_sodium: Option<Array1<f32>>,
    /// Total membrane conductance, constant conductance models only
    pub g_membrane: Option<Array1<f32>>,
    /// Leak channel conductance, Hodgkin Huxley only
    pub g_leak: Option<Array1<f32>>,
    /// Potassium channel conductance, Hodgkin Huxley only
    pub g_potassium: Option<Array1<f32>>,
    /// Sodium channel conductance, Hodgkin Huxley only
    pub g_sodium: Option<Array1<f32>>,
    /// Potassium activation gate state, Hodgkin Huxley only
    pub gate_n: Option<Array1<f32>>,
    /// Sodium activation gate state, Hodgkin Huxley only
    pub gate_m: Option<Array1<f32>>,
    /// Sodium inactivation gate state, Hodgkin Huxley only
    pub gate_h: Option<Array1<f32>>,
    /// Whether each neuron spiked at this step, filled in by spike detection
    pub spiked: Vec<bool>,
}

impl StepStatistics {
    /// Creates an empty snapshot for a population of `neuron_count` neurons
    pub fn new(time: f32, neuron_count: usize) -> Self {
        StepStatistics {
            time,
            voltage: Array1::zeros(neuron_count),
            i_ext: Array1::zeros(neuron_count),
            i_total: Array1::zeros(neuron_count),
            i_leak: None,
            i_potassium: None,
            i_sodium: None,
            g_membrane: None,
            g_leak: None,
            g_potassium: None,
            g_sodium: None,
            gate_n: None,
            gate_m: None,
            gate_h: None,
            spiked: vec![false; neuron_count],
        }
    }
}

/// Finds indices of strict local maxima of `trace` that exceed `threshold`,
/// keeping peaks at least `min_separation` samples apart, when two candidates
/// fall closer than that the taller one wins
///
/// The separation constraint keeps the rising and falling flanks of a single
/// action potential from being counted as distinct spikes
pub fn find_peaks(trace: &[f32], threshold: f32, min_separation: usize) -> Vec<usize> {
    let mut peaks: Vec<usize> = Vec::new();

    for i in 1..trace.len().saturating_sub(1) {
        if trace[i] <= threshold || trace[i] <= trace[i - 1] || trace[i] <= trace[i + 1] {
            continue;
        }

        match peaks.last_mut() {
            Some(last) if i - *last < min_separation => {
                if trace[i] > trace[*last] {
                    *last = i;
                }
            }
            _ => peaks.push(i),
        }
    }

    peaks
}

/// The full history of a simulation run along with the per neuron
/// spike analysis computed once the run has finished
#[derive(Debug, Clone)]
pub struct RunStatistics {
    /// Number of simulation steps
    pub n_steps: usize,
    /// Time between two consecutive steps (ms)
    pub dt: f32,
    /// Snapshot of the population at each step
    pub steps: Vec<StepStatistics>,
    /// Per neuron indices of steps where spikes occurred
    pub spikes: Vec<Vec<usize>>,
    /// Per neuron interspike intervals (ms)
    pub spike_intervals: Vec<Vec<f32>>,
    /// Per neuron mean interspike interval (ms), `0.` with fewer than two spikes
    pub mean_interspike_interval: Vec<f32>,
    /// Per neuron spiking frequency (1/ms), `0.` when the mean interval is `0.`
    pub firing_frequency: Vec<f32>,
}

impl RunStatistics {
    /// Creates an empty accumulator for a run of `n_steps` steps
    pub fn new(n_steps: usize, dt: f32) -> Self {
        RunStatistics {
            n_steps,
            dt,
            steps: Vec::with_capacity(n_steps),
            spikes: Vec::new(),
            spike_intervals: Vec::new(),
            mean_interspike_interval: Vec::new(),
            firing_frequency: Vec::new(),
        }
    }

    /// Gets the membrane potential of a single neuron across the whole run
    pub fn voltage_trace(&self, neuron: usize) -> Vec<f32> {
        self.steps.iter().map(|step| step.voltage[neuron]).collect()
    }

    /// Runs spike detection over the stored voltage traces and fills in the
    /// per neuron spike indices, interspike intervals, mean intervals and
    /// firing frequencies, also marks the spike flag of every detected step
    ///
    /// With fewer than two spikes the mean interval and frequency are `0.`
    pub fn detect_spikes(&mut self, neuron_count: usize, threshold: f32, min_separation: usize) {
        self.spikes.clear();
        self.spike_intervals.clear();
        self.mean_interspike_interval.clear();
        self.firing_frequency.clear();

        for neuron in 0..neuron_count {
            let trace = self.voltage_trace(neuron);
            let peaks = find_peaks(&trace, threshold, min_separation);

            for &index in peaks.iter() {
                self.steps[index].spiked[neuron] = true;
            }

            let intervals: Vec<f32> = peaks.windows(2)
                .map(|pair| (pair[1] - pair[0]) as f32 * self.dt)
                .collect();

            let mean = if intervals.is_empty() {
                0.
            } else {
                intervals.iter().sum::<f32>() / intervals.len() as f32
            };
            let frequency = if mean == 0. {
                0.
            } else {
                1. / mean
            };

            self.spikes.push(peaks);
            self.spike_intervals.push(intervals);
            self.mean_interspike_interval.push(mean);
            self.firing_frequency.push(frequency);
        }
    }
}
