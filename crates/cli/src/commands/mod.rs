pub mod config;
pub mod export;
pub mod info;
pub mod leads;
pub mod patient;
pub mod util;

pub use config::*;
pub use export::*;
pub use info::*;
pub use leads::*;
pub use patient::*;
pub use util::*;
