//! Neuron population models sharing a step/reset capability set, their
//! configuration record and model registry, and the simulation engine that
//! runs populations and builds f-I curves.

pub mod hodgkin_huxley;
pub mod input_current;
pub mod integrate_and_fire;
pub mod ion_channels;
pub mod statistics;

use ndarray::Array1;
use rand::rngs::StdRng;
use crate::error::ModelError;
use hodgkin_huxley::HodgkinHuxleyGroup;
use input_current::{InputCurrent, NoisyConstantInput};
use integrate_and_fire::{ConstantConductanceGroup, LeakyIntegrateAndFireGroup};
use statistics::{RunStatistics, StepStatistics};


/// Handles the membrane dynamics of a neuron population, every per neuron
/// quantity is carried as a vector and advanced for all neurons in lock-step
pub trait NeuronGroup {
    /// Advances the population by one time step given the per neuron external
    /// stimulation, the current time `t` (ms) and the step size `dt` (ms),
    /// returns a snapshot of the population after the step
    fn step(&mut self, i_ext: &Array1<f32>, t: f32, dt: f32) -> StepStatistics;
    /// Resets every neuron to the given membrane potential, or to the resting
    /// potential if none is given, and re-equilibrates all owned channels
    fn reset(&mut self, v_init: Option<f32>);
    /// Gets the number of neurons in the population
    fn neuron_count(&self) -> usize;
    /// Gets the voltage threshold used for spike detection (mV)
    fn spike_threshold(&self) -> f32;
    /// Gets the maximum plausible spiking frequency (1/ms) used to derive
    /// the minimum separation between detected spikes
    fn max_spike_frequency(&self) -> f32;
}

/// The closed set of available neuron models
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// Fixed total membrane conductance in RC circuit form
    ConstantConductance,
    /// Constant conductance with a threshold triggered reset rule
    LeakyIntegrateAndFire,
    /// Voltage gated potassium and sodium channels with Markov kinetics
    HodgkinHuxley,
}

impl TryFrom<&str> for ModelKind {
    type Error = ModelError;

    fn try_from(name: &str) -> Result<Self, ModelError> {
        match name {
            "const" => Ok(ModelKind::ConstantConductance),
            "lif" => Ok(ModelKind::LeakyIntegrateAndFire),
            "hh" => Ok(ModelKind::HodgkinHuxley),
            _ => Err(ModelError::UnknownModelKind(name.to_string())),
        }
    }
}

/// Configuration for constructing a neuron population, a plain immutable
/// record so defaults can never alias between constructions
///
/// Channel level fields are optional twice over: `None` means the field was
/// not supplied, which the constant conductance model uses to decide between
/// its two parameterizations, and each model substitutes its own documented
/// default when it needs a value (`g_k` is 36.0 for Hodgkin Huxley but 0.366
/// for the constant conductance collapse, likewise `g_na` 120.0 and 0.0106)
///
/// Values are not range validated, the caller is responsible for physically
/// sensible parameters
#[derive(Debug, Clone)]
pub struct ModelParameters {
    /// Resting potential (mV)
    pub v_rest: f32,
    /// Starting membrane potential (mV), resting potential if `None`
    pub v_start: Option<f32>,
    /// Voltage threshold for spike detection (mV)
    pub v_threshold: f32,
    /// Post spike reset potential (mV), integrate and fire only
    pub v_reset: f32,
    /// Reported potential at a spike step (mV), integrate and fire only
    pub v_spike: f32,
    /// Total membrane conductance, constant conductance models only
    pub g_m: f32,
    /// Membrane time constant (ms), constant conductance models only
    pub tau: f32,
    /// Maximum plausible spiking frequency (1/ms)
    pub max_spike_frequency: f32,
    /// Membrane capacitance (µF/cm²)
    pub c_m: Option<f32>,
    /// Leak reversal potential (mV)
    pub e_l: Option<f32>,
    /// Potassium reversal potential (mV)
    pub e_k: Option<f32>,
    /// Sodium reversal potential (mV)
    pub e_na: Option<f32>,
    /// Leak channel conductance
    pub g_l: Option<f32>,
    /// Potassium channel conductance
    pub g_k: Option<f32>,
    /// Sodium channel conductance
    pub g_na: Option<f32>,
}

impl Default for ModelParameters {
    fn default() -> Self {
        ModelParameters {
            v_rest: -70.0, // resting potential (mV)
            v_start: None, // defaults to resting potential
            v_threshold: -56.0, // spike detection threshold (mV)
            v_reset: -80.099, // post spike reset potential (mV)
            v_spike: 35.685, // reported spike pulse potential (mV)
            g_m: 1.0, // total membrane conductance
            tau: 10.0, // membrane time constant (ms)
            max_spike_frequency: 0.5, // maximum plausible firing rate (1/ms)
            c_m: None, // membrane capacitance, defaults to 1.0
            e_l: None, // leak reversal potential, defaults to -59.4
            e_k: None, // potassium reversal potential, defaults to -82.0
            e_na: None, // sodium reversal potential, defaults to 45.0
            g_l: None, // leak conductance, defaults to 0.3
            g_k: None, // potassium conductance, defaults to 36.0 or 0.366
            g_na: None, // sodium conductance, defaults to 120.0 or 0.0106
        }
    }
}

/// Constructs a population of `neuron_count` neurons of the given model kind
pub fn build_group(
    kind: ModelKind,
    neuron_count: usize,
    params: &ModelParameters,
) -> Box<dyn NeuronGroup> {
    match kind {
        ModelKind::ConstantConductance => {
            Box::new(ConstantConductanceGroup::new(neuron_count, params))
        }
        ModelKind::LeakyIntegrateAndFire => {
            Box::new(LeakyIntegrateAndFireGroup::new(neuron_count, params))
        }
        ModelKind::HodgkinHuxley => Box::new(HodgkinHuxleyGroup::new(neuron_count, params)),
    }
}

/// Resets the group and simulates `n_steps` steps of size `dt` (ms) under the
/// given stimulation, then runs spike detection and interspike interval
/// analysis per neuron over the collected trace
pub fn run_simulation(
    group: &mut dyn NeuronGroup,
    n_steps: usize,
    dt: f32,
    input: &mut dyn InputCurrent,
) -> RunStatistics {
    group.reset(None);

    let mut stats = RunStatistics::new(n_steps, dt);
    for i in 0..n_steps {
        let t = i as f32 * dt;
        let i_ext = input.get_current(t);

        stats.steps.push(group.step(&i_ext, t, dt));
    }

    let min_separation = (1. / (group.max_spike_frequency() * dt)) as usize;
    stats.detect_spikes(group.neuron_count(), group.spike_threshold(), min_separation);

    stats
}

/// Computes the f-I (spiking frequency against current stimulation) curve of
/// a model over the given stimulation amplitudes
///
/// Each sweep point is encoded as one neuron of a single population, neuron
/// `i` receives `currents[i]` (plus Gaussian noise when `std > 0`, drawn from
/// the supplied generator) for the whole run, so the sweep executes as one
/// vectorized run instead of one run per amplitude, returns the per neuron
/// spiking frequency vector
pub fn fi_curve(
    kind: ModelKind,
    currents: &Array1<f32>,
    std: f32,
    params: &ModelParameters,
    n_iter: usize,
    dt: f32,
    rng: StdRng,
) -> Array1<f32> {
    let mut group = build_group(kind, currents.len(), params);
    let mut input = NoisyConstantInput::new(currents.clone(), std, 0., f32::INFINITY, rng);

    let stats = run_simulation(group.as_mut(), n_iter, dt, &mut input);

    Array1::from_vec(stats.firing_frequency)
}
