//! # Neuronal Dynamics
//!
//! `neuronal_dynamics` is a package for simulating the electrical dynamics of
//! biological neurons, as single cells or as vectorized populations advanced in
//! lock-step. Membrane models range from a fixed conductance RC circuit and a
//! leaky integrate and fire model to the full Hodgkin Huxley equations with
//! Markov gating kinetics for the potassium and sodium channels. Finished runs
//! are analyzed for spikes, interspike interval statistics and firing
//! frequencies, which makes building stimulation against frequency (f-I)
//! curves a single vectorized run.
//!
//! ## Example Code
//!
//! ### Simulating a Hodgkin Huxley population with a constant current input
//!
//! ```rust
//! use neuronal_dynamics::neuron::{
//!     build_group, run_simulation, ModelKind, ModelParameters,
//!     input_current::ConstantInput,
//! };
//!
//! // 3 neurons stimulated with 10 µA/cm² between 75 ms and 125 ms
//! let params = ModelParameters::default();
//! let mut group = build_group(ModelKind::HodgkinHuxley, 3, &params);
//! let mut input = ConstantInput::uniform(3, 10., 75., 125.);
//!
//! // 20000 steps of 0.01 ms
//! let stats = run_simulation(group.as_mut(), 20_000, 0.01, &mut input);
//!
//! // spikes are detected per neuron once the run has finished
//! assert!(!stats.spikes[0].is_empty());
//! assert!(stats.spike_intervals[0].len() == stats.spikes[0].len() - 1);
//! ```
//!
//! ### Building an f-I curve
//!
//! ```rust
//! use ndarray::Array1;
//! use rand::{rngs::StdRng, SeedableRng};
//! use neuronal_dynamics::neuron::{fi_curve, ModelKind, ModelParameters};
//!
//! // each stimulation amplitude becomes one neuron of a single population,
//! // the whole sweep runs as one vectorized simulation
//! let currents = Array1::linspace(0., 40., 5);
//! let frequencies = fi_curve(
//!     ModelKind::LeakyIntegrateAndFire,
//!     &currents,
//!     0., // noise standard deviation, the run is deterministic at 0.
//!     &ModelParameters::default(),
//!     10_000,
//!     0.01,
//!     StdRng::seed_from_u64(0),
//! );
//!
//! // no spontaneous firing without stimulation
//! assert_eq!(frequencies[0], 0.);
//! assert!(frequencies[4] > 0.);
//! ```
//!
//! ### Selecting a model from an identifier
//!
//! ```rust
//! use neuronal_dynamics::neuron::ModelKind;
//!
//! assert_eq!(ModelKind::try_from("hh").unwrap(), ModelKind::HodgkinHuxley);
//! assert!(ModelKind::try_from("izhikevich").is_err());
//! ```

pub mod distribution;
pub mod error;
pub mod neuron;
