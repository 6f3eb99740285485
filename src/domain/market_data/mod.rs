//! Price series aggregate: time windows, samples and derived values.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
