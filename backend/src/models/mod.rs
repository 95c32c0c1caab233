pub mod celestial;
pub mod criteria;
pub mod observation_point;
pub mod terrain;
pub mod weather;

pub use celestial::*;
pub use criteria::*;
pub use observation_point::*;
pub use terrain::*;
pub use weather::*;
