//! A Hodgkin Huxley population with voltage gated potassium and sodium
//! channels driven by Markov gating kinetics.

use ndarray::Array1;
use super::{NeuronGroup, ModelParameters};
use super::ion_channels::{ConstantChannel, IonChannel, PotassiumChannel, SodiumChannel};
use super::statistics::StepStatistics;


/// A population integrating the full gated channel membrane equation,
/// `dv = (i_leak + i_k + i_na + i_ext) * dt / c_m` where each channel
/// current is `-g_x * (v - e_x)`
///
/// Gates see the potential relative to rest while channel currents use the
/// absolute potential, matching the usual parameterization of the model
#[derive(Debug, Clone)]
pub struct HodgkinHuxleyGroup {
    /// Per neuron membrane potential (mV)
    pub v: Array1<f32>,
    /// Resting potential (mV)
    pub v_rest: f32,
    /// Voltage threshold for spike detection (mV)
    pub v_threshold: f32,
    /// Membrane capacitance (µF/cm²)
    pub c_m: f32,
    /// Leak reversal potential (mV)
    pub e_l: f32,
    /// Potassium reversal potential (mV)
    pub e_k: f32,
    /// Sodium reversal potential (mV)
    pub e_na: f32,
    /// Leak channel
    pub leak: ConstantChannel,
    /// Potassium channel
    pub potassium: PotassiumChannel,
    /// Sodium channel
    pub sodium: SodiumChannel,
    /// Maximum plausible spiking frequency (1/ms), constrains spike detection
    pub max_spike_frequency: f32,
}

impl HodgkinHuxleyGroup {
    /// Creates a population of `neuron_count` neurons with every gate
    /// equilibrated at the starting potential
    pub fn new(neuron_count: usize, params: &ModelParameters) -> Self {
        let v_rest = params.v_rest;
        let v_start = params.v_start.unwrap_or(v_rest);
        let v_init_rel = v_start - v_rest;

        HodgkinHuxleyGroup {
            v: Array1::from_elem(neuron_count, v_start),
            v_rest,
            v_threshold: params.v_threshold,
            c_m: params.c_m.unwrap_or(1.0),
            e_l: params.e_l.unwrap_or(-59.4),
            e_k: params.e_k.unwrap_or(-82.0),
            e_na: params.e_na.unwrap_or(45.0),
            leak: ConstantChannel::new(neuron_count, params.g_l.unwrap_or(0.3)),
            potassium: PotassiumChannel::new(neuron_count, params.g_k.unwrap_or(36.0), v_init_rel),
            sodium: SodiumChannel::new(neuron_count, params.g_na.unwrap_or(120.0), v_init_rel),
            max_spike_frequency: params.max_spike_frequency,
        }
    }
}

impl NeuronGroup for HodgkinHuxleyGroup {
    fn step(&mut self, i_ext: &Array1<f32>, t: f32, dt: f32) -> StepStatistics {
        let mut stats = StepStatistics::new(t, self.v.len());

        let v_rel = &self.v - self.v_rest;
        self.leak.update_conductance(&v_rel, t, dt);
        self.potassium.update_conductance(&v_rel, t, dt);
        self.sodium.update_conductance(&v_rel, t, dt);

        stats.g_leak = Some(self.leak.conductance().clone());
        stats.g_potassium = Some(self.potassium.conductance().clone());
        stats.g_sodium = Some(self.sodium.conductance().clone());
        stats.gate_n = Some(self.potassium.n.state.clone());
        stats.gate_m = Some(self.sodium.m.state.clone());
        stats.gate_h = Some(self.sodium.h.state.clone());

        let i_leak = -(self.leak.conductance() * &(&self.v - self.e_l));
        let i_potassium = -(self.potassium.conductance() * &(&self.v - self.e_k));
        let i_sodium = -(self.sodium.conductance() * &(&self.v - self.e_na));
        let i_total = &i_leak + &i_potassium + &i_sodium + i_ext;

        self.v += &(&i_total * (dt / self.c_m));

        stats.i_leak = Some(i_leak);
        stats.i_potassium = Some(i_potassium);
        stats.i_sodium = Some(i_sodium);
        stats.i_ext = i_ext.clone();
        stats.i_total = i_total;
        stats.voltage = self.v.clone();

        stats
    }

    fn reset(&mut self, v_init: Option<f32>) {
        let v = v_init.unwrap_or(self.v_rest);
        self.v.fill(v);

        let v_rel = v - self.v_rest;
        self.leak.reset(v_rel);
        self.potassium.reset(v_rel);
        self.sodium.reset(v_rel);
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
