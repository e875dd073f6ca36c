//! Field vectors and the electric and magnetic samples built on them.

mod electric;
mod magnetic;
mod sample;
mod vector;

pub use electric::ElectricFieldSample;
pub use magnetic::MagneticFieldSample;
pub use sample::FieldSample;
pub use vector::FieldVector;
