pub mod confidence;
pub mod signals;
pub mod synthesizer;
pub mod targets;


pub use confidence::*;
pub use signals::*;
pub use synthesizer::*;
pub use targets::*;
