pub mod assets;
pub mod audio;
pub mod compute;
pub mod constants;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
pub mod timing;
