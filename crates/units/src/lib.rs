pub mod energy;
pub mod length;
pub mod luminosity;
pub mod mass;
pub mod temperature;

#[cfg(test)]
mod energy_test;

pub use energy::Energy;
pub use length::{Length, AU_TO_M, SOLAR_RADIUS_M};
pub use luminosity::{Luminosity, SOLAR_LUMINOSITY_W};
pub use mass::{Mass, SOLAR_MASS_KG};
pub use temperature::Temperature;
