pub mod assessor;


pub use assessor::*;
