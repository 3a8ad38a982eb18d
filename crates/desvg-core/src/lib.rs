pub mod config;
pub mod logging;

pub mod decode;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod stylesheet;
