use std::fmt::{Display, Debug, Formatter, Result};


/// Error set for potential model construction errors
pub enum ModelError {
    /// Identifier does not name a known neuron model
    UnknownModelKind(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ModelError::UnknownModelKind(name) => write!(f, "Unknown model kind: {}", name),
        }
    }
}

impl Debug for ModelError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// A set of errors that may occur when using the library
pub enum NeuronalDynamicsError {
    /// Errors related to model construction
    ModelRelatedError(ModelError),
}

impl Display for NeuronalDynamicsError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            NeuronalDynamicsError::ModelRelatedError(err) => write!(f, "{}", err),
        }
    }
}

impl Debug for NeuronalDynamicsError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl From<ModelError> for NeuronalDynamicsError {
    fn from(err: ModelError) -> NeuronalDynamicsError {
        NeuronalDynamicsError::ModelRelatedError(err)
    }
}
