//! External current stimulation applied to a neuron population over
//! a fixed time window.

use ndarray::Array1;
use rand::rngs::StdRng;
use crate::distribution::gaussian_sample;


/// Produces the external stimulation for a population at a given time
pub trait InputCurrent {
    /// Gets the per neuron stimulation (µA/cm²) at time `t` (ms), the
    /// receiver is mutable so stochastic variants can advance their
    /// random state
    fn get_current(&mut self, t: f32) -> Array1<f32>;
}

/// Constant current stimulation, each neuron receives its fixed amplitude
/// while `start_time <= t <= end_time` and zero outside the window
#[derive(Debug, Clone)]
pub struct ConstantInput {
    /// Per neuron stimulation amplitude
    pub amplitude: Array1<f32>,
    /// Start of the stimulation window (ms)
    pub start_time: f32,
    /// End of the stimulation window (ms)
    pub end_time: f32,
}

impl ConstantInput {
    /// Creates a stimulation with a per neuron amplitude vector
    pub fn new(amplitude: Array1<f32>, start_time: f32, end_time: f32) -> Self {
        ConstantInput { amplitude, start_time, end_time }
    }

    /// Creates a stimulation where every neuron receives the same amplitude
    pub fn uniform(neuron_count: usize, amplitude: f32, start_time: f32, end_time: f32) -> Self {
        ConstantInput {
            amplitude: Array1::from_elem(neuron_count, amplitude),
            start_time,
            end_time,
        }
    }
}

impl InputCurrent for ConstantInput {
    fn get_current(&mut self, t: f32) -> Array1<f32> {
        if t >= self.start_time && t <= self.end_time {
            self.amplitude.clone()
        } else {
            Array1::zeros(self.amplitude.len())
        }
    }
}

/// Constant current stimulation with independent per neuron Gaussian noise,
/// resampled on every call from a caller supplied generator so runs are
/// reproducible given a fixed seed, outside the window the stimulation
/// is exactly zero
#[derive(Debug, Clone)]
pub struct NoisyConstantInput {
    /// Per neuron base stimulation amplitude
    pub amplitude: Array1<f32>,
    /// Standard deviation of the noise
    pub std: f32,
    /// Start of the stimulation window (ms)
    pub start_time: f32,
    /// End of the stimulation window (ms)
    pub end_time: f32,
    rng: StdRng,
}

impl NoisyConstantInput {
    /// Creates a noisy stimulation drawing from the given generator
    pub fn new(
        amplitude: Array1<f32>,
        std: f32,
        start_time: f32,
        end_time: f32,
        rng: StdRng,
    ) -> Self {
        NoisyConstantInput { amplitude, std, start_time, end_time, rng }
    }
}

impl InputCurrent for NoisyConstantInput {
    fn get_current(&mut self, t: f32) -> Array1<f32> {
        if t >= self.start_time && t <= self.end_time {
            let std = self.std;
            let rng = &mut self.rng;

            self.amplitude.mapv(|i| gaussian_sample(i, std, rng))
        } else {
            Array1::zeros(self.amplitude.len())
        }
    }
}
