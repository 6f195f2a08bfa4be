pub use cards::*;
pub use frame::*;
pub use visualization::*;
pub use wrap::*;

#[cfg(test)]
mod arbitrary;
mod cards;
mod frame;
mod visualization;
mod wrap;
