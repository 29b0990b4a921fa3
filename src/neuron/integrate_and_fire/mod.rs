//! Constant conductance membrane dynamics in RC circuit form and the
//! leaky integrate and fire model that adds a threshold reset on top.

use ndarray::Array1;
use super::{NeuronGroup, ModelParameters};
use super::ion_channels::{ConstantChannel, IonChannel};
use super::statistics::StepStatistics;


/// A population whose total membrane conductance is fixed, integrated
/// in the equivalent RC circuit form
/// `dv = (-(v - v_rest) + i_ext / g_m) * dt / tau`
#[derive(Debug, Clone)]
pub struct ConstantConductanceGroup {
    /// Per neuron membrane potential (mV)
    pub v: Array1<f32>,
    /// Resting potential (mV)
    pub v_rest: f32,
    /// Voltage threshold for spike detection (mV)
    pub v_threshold: f32,
    /// Membrane time constant (ms)
    pub tau: f32,
    /// Aggregate membrane conductance
    pub membrane: ConstantChannel,
    /// Maximum plausible spiking frequency (1/ms), constrains spike detection
    pub max_spike_frequency: f32,
}

impl ConstantConductanceGroup {
    /// Creates a population of `neuron_count` neurons
    ///
    /// When any channel level parameter (`g_l`, `g_k`, `g_na`, `e_l`, `e_k`,
    /// `e_na`, `c_m`) is supplied, the effective membrane conductance, resting
    /// potential and time constant are derived from them by conductance
    /// weighted averaging in preference to the direct `g_m`/`v_rest`/`tau`
    /// parameters
    pub fn new(neuron_count: usize, params: &ModelParameters) -> Self {
        let has_channel_params = params.g_l.is_some()
            || params.g_k.is_some()
            || params.g_na.is_some()
            || params.e_l.is_some()
            || params.e_k.is_some()
            || params.e_na.is_some()
            || params.c_m.is_some();

        let (g_m, v_rest, tau) = if has_channel_params {
            let g_l = params.g_l.unwrap_or(0.3);
            let g_k = params.g_k.unwrap_or(0.366);
            let g_na = params.g_na.unwrap_or(0.0106);
            let e_l = params.e_l.unwrap_or(-59.4);
            let e_k = params.e_k.unwrap_or(-82.0);
            let e_na = params.e_na.unwrap_or(45.0);
            let c_m = params.c_m.unwrap_or(1.0);

            let g_total = g_l + g_k + g_na;

            (
                g_total,
                (g_l * e_l + g_k * e_k + g_na * e_na) / g_total,
                c_m / g_total,
            )
        } else {
            (params.g_m, params.v_rest, params.tau)
        };

        ConstantConductanceGroup {
            v: Array1::from_elem(neuron_count, params.v_start.unwrap_or(v_rest)),
            v_rest,
            v_threshold: params.v_threshold,
            tau,
            membrane: ConstantChannel::new(neuron_count, g_m),
            max_spike_frequency: params.max_spike_frequency,
        }
    }
}

impl NeuronGroup for ConstantConductanceGroup {
    fn step(&mut self, i_ext: &Array1<f32>, t: f32, dt: f32) -> StepStatistics {
        let mut stats = StepStatistics::new(t, self.v.len());

        let v_rel = &self.v - self.v_rest;
        self.membrane.update_conductance(&v_rel, t, dt);
        let g_m = self.membrane.conductance();

        stats.g_membrane = Some(g_m.clone());
        stats.i_ext = i_ext.clone();
        stats.i_total = i_ext - &(g_m * &v_rel);

        let dv = (-v_rel + i_ext / g_m) * (dt / self.tau);
        self.v += &dv;

        stats.voltage = self.v.clone();

        stats
    }

    fn reset(&mut self, v_init: Option<f32>) {
        let v = v_init.unwrap_or(self.v_rest);
        self.v.fill(v);
        self.membrane.reset(v - self.v_rest);
    }

    fn neuron_count(&self) -> usize {
        self.v.len()
    }

    fn spike_threshold(&self) -> f32 {
        self.v_threshold
    }

    fn max_spike_frequency(&self) -> f32 {
        self.max_spike_frequency
    }
}

/// A leaky integrate and fire population, constant conductance dynamics
/// below threshold with an explicit reset rule above it
///
/// After integration any neuron above threshold is set to the reset
/// potential while its reported potential for the step is overridden with
/// an artificial spike pulse, the pulse makes spikes visible to detection
/// but is never integrated
#[derive(Debug, Clone)]
pub struct LeakyIntegrateAndFireGroup {
    /// Subthreshold membrane dynamics
    pub subthreshold: ConstantConductanceGroup,
    /// Potential the membrane is reset to after a spike (mV)
    pub v_reset: f32,
    /// Reported potential at a spike step (mV)
    pub v_spike: f32,
}

impl LeakyIntegrateAndFireGroup {
    /// Creates a population of `neuron_count` neurons
    pub fn new(neuron_count: usize, params: &ModelParameters) -> Self {
        LeakyIntegrateAndFireGroup {
            subthreshold: ConstantConductanceGroup::new(neuron_count, params),
            v_reset: params.v_reset,
            v_spike: params.v_spike,
        }
    }
}

impl NeuronGroup for LeakyIntegrateAndFireGroup {
    fn step(&mut self, i_ext: &Array1<f32>, t: f32, dt: f32) -> StepStatistics {
        let mut stats = self.subthreshold.step(i_ext, t, dt);

        let threshold = self.subthreshold.v_threshold;
        for (v, reported) in self.subthreshold.v.iter_mut().zip(stats.voltage.iter_mut()) {
            if *v > threshold {
                *v = self.v_reset;
                *reported = self.v_spike;
            }
        }

        stats
    }

    fn reset(&mut self, v_init: Option<f32>) {
        self.subthreshold.reset(v_init);
    }

    fn neuron_count(&self) -> usize {
        self.subthreshold.neuron_count()
    }

    fn spike_threshold(&self) -> f32 {
        self.subthreshold.v_threshold
    }

    fn max_spike_frequency(&self) -> f32 {
        self.subthreshold.max_spike_frequency
    }
}
