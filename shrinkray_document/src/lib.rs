pub mod error;
pub mod io;
pub mod lookup;

pub use error::*;
pub use io::*;
pub use lookup::*;
