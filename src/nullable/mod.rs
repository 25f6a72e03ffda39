mod core;
pub use core::*;

pub mod coercion;
pub use coercion::*;

mod cmp;

mod display;
pub use display::*;

mod hash;
pub use hash::*;

pub mod types;
pub use types::*;
