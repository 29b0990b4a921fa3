//! Voltage-gated and fixed-conductance ion channels along with the
//! Markov gating variables that drive the Hodgkin Huxley channels.

use ndarray::{Array1, Zip};


/// Opening rate of the potassium activation gate (n)
pub fn n_gate_alpha(v: f32) -> f32 {
    ((10. - v) / 100.) / ((0.1 * (10. - v)).exp() - 1.)
}

/// Closing rate of the potassium activation gate (n)
pub fn n_gate_beta(v: f32) -> f32 {
    0.125 * (-v / 80.).exp()
}

/// Opening rate of the sodium activation gate (m)
pub fn m_gate_alpha(v: f32) -> f32 {
    ((25. - v) / 10.) / ((0.1 * (25. - v)).exp() - 1.)
}

/// Closing rate of the sodium activation gate (m)
pub fn m_gate_beta(v: f32) -> f32 {
    4. * (-v / 18.).exp()
}

/// Opening rate of the sodium inactivation gate (h)
pub fn h_gate_alpha(v: f32) -> f32 {
    0.07 * (-v / 20.).exp()
}

/// Closing rate of the sodium inactivation gate (h)
pub fn h_gate_beta(v: f32) -> f32 {
    1. / (((30. - v) / 10.).exp() + 1.)
}

/// A gating variable modeled as a two state Markov process, tracking the
/// fraction of open gates per neuron in a population
///
/// Rate functions take the membrane potential relative to the resting
/// potential (mV) and return transition rates (1/ms)
#[derive(Debug, Clone)]
pub struct MarkovGate {
    /// Rate of a closed gate transitioning to open given potential
    pub alpha: fn(f32) -> f32,
    /// Rate of an open gate transitioning to closed given potential
    pub beta: fn(f32) -> f32,
    /// Fraction of open gates per neuron
    pub state: Array1<f32>,
    /// Equilibrium state at the resting potential, cached at construction
    pub rest_state: f32,
}

impl MarkovGate {
    /// Creates a gate for `neuron_count` neurons, initialized to the steady state
    /// at `v_init` if given, otherwise to the steady state at the resting potential
    pub fn new(
        neuron_count: usize,
        alpha: fn(f32) -> f32,
        beta: fn(f32) -> f32,
        v_init: Option<f32>,
    ) -> Self {
        let rest_state = alpha(0.) / (alpha(0.) + beta(0.));
        let start = match v_init {
            Some(v) => alpha(v) / (alpha(v) + beta(v)),
            None => rest_state,
        };

        MarkovGate {
            alpha,
            beta,
            state: Array1::from_elem(neuron_count, start),
            rest_state,
        }
    }

    /// Advances the gate state by one explicit Euler step given the
    /// per neuron membrane potential (mV, relative to rest)
    ///
    /// No clamping is applied, `dt` must be small enough for the
    /// integration to remain stable
    pub fn update(&mut self, v: &Array1<f32>, dt: f32) {
        let alpha = self.alpha;
        let beta = self.beta;

        Zip::from(&mut self.state).and(v).for_each(|state, &v| {
            *state += (alpha(v) * (1. - *state) - beta(v) * *state) * dt;
        });
    }

    /// Sets the state directly to the steady state at the given potential,
    /// or to the cached resting steady state if no potential is given
    pub fn set_inf_state(&mut self, v: Option<f32>) {
        let value = match v {
            Some(v) => (self.alpha)(v) / ((self.alpha)(v) + (self.beta)(v)),
            None => self.rest_state,
        };

        self.state.fill(value);
    }
}

/// Handles conductance dynamics of an ion channel across a neuron population
pub trait IonChannel {
    /// Advances any internal gate state and recomputes the conductance
    /// given the per neuron membrane potential (mV, relative to rest)
    fn update_conductance(&mut self, v: &Array1<f32>, t: f32, dt: f32);
    /// Gets the per neuron conductance
    fn conductance(&self) -> &Array1<f32>;
    /// Re-equilibrates any internal gate state at the given potential
    /// (mV, relative to rest), used when the membrane potential is
    /// externally reset
    fn reset(&mut self, v_init: f32);
}

/// An ion channel with fixed conductance
#[derive(Debug, Clone)]
pub struct ConstantChannel {
    /// Per neuron conductance
    pub g: Array1<f32>,
}

impl ConstantChannel {
    /// Creates a channel with the given conductance for every neuron
    pub fn new(neuron_count: usize, g: f32) -> Self {
        ConstantChannel {
            g: Array1::from_elem(neuron_count, g),
        }
    }
}

impl IonChannel for ConstantChannel {
    fn update_conductance(&mut self, _v: &Array1<f32>, _t: f32, _dt: f32) {}

    fn conductance(&self) -> &Array1<f32> {
        &self.g
    }

    fn reset(&mut self, _v_init: f32) {}
}

/// A Hodgkin Huxley potassium channel, four identical activation gates
/// in series, `g = g_max * n^4`
#[derive(Debug, Clone)]
pub struct PotassiumChannel {
    /// Conductance when all gates are open
    pub g_max: f32,
    /// Activation gate
    pub n: MarkovGate,
    /// Per neuron conductance
    pub g: Array1<f32>,
}

impl PotassiumChannel {
    /// Creates a channel equilibrated at `v_init` (mV, relative to rest)
    pub fn new(neuron_count: usize, g_max: f32, v_init: f32) -> Self {
        let n = MarkovGate::new(neuron_count, n_gate_alpha, n_gate_beta, Some(v_init));
        let g = n.state.mapv(|n| g_max * n.powi(4));

        PotassiumChannel { g_max, n, g }
    }
}

impl IonChannel for PotassiumChannel {
    fn update_conductance(&mut self, v: &Array1<f32>, _t: f32, dt: f32) {
        self.n.update(v, dt);

        let g_max = self.g_max;
        self.g = self.n.state.mapv(|n| g_max * n.powi(4));
    }

    fn conductance(&self) -> &Array1<f32> {
        &self.g
    }

    fn reset(&mut self, v_init: f32) {
        self.n.set_inf_state(Some(v_init));

        let g_max = self.g_max;
        self.g = self.n.state.mapv(|n| g_max * n.powi(4));
    }
}

/// A Hodgkin Huxley sodium channel, three fast activation gates and one
/// slow inactivation gate in series, `g = g_max * m^3 * h`
#[derive(Debug, Clone)]
pub struct SodiumChannel {
    /// Conductance when all gates are open
    pub g_max: f32,
    /// Fast activation gate
    pub m: MarkovGate,
    /// Slow inactivation gate
    pub h: MarkovGate,
    /// Per neuron conductance
    pub g: Array1<f32>,
}

impl SodiumChannel {
    /// Creates a channel equilibrated at `v_init` (mV, relative to rest)
    pub fn new(neuron_count: usize, g_max: f32, v_init: f32) -> Self {
        let m = MarkovGate::new(neuron_count, m_gate_alpha, m_gate_beta, Some(v_init));
        let h = MarkovGate::new(neuron_count, h_gate_alpha, h_gate_beta, Some(v_init));
        let g = Zip::from(&m.state).and(&h.state)
            .map_collect(|&m, &h| g_max * m.powi(3) * h);

        SodiumChannel { g_max, m, h, g }
    }

    fn recompute_conductance(&mut self) {
        let g_max = self.g_max;
        self.g = Zip::from(&self.m.state).and(&self.h.state)
            .map_collect(|&m, &h| g_max * m.powi(3) * h);
    }
}

impl IonChannel for SodiumChannel {
    fn update_conductance(&mut self, v: &Array1<f32>, _t: f32, dt: f32) {
        self.m.update(v, dt);
        self.h.update(v, dt);
        self.recompute_conductance();
    }

    fn conductance(&self) -> &Array1<f32> {
        &self.g
    }

    fn reset(&mut self, v_init: f32) {
        self.m.set_inf_state(Some(v_init));
        self.h.set_inf_state(Some(v_init));
        self.recompute_conductance();
    }
}
