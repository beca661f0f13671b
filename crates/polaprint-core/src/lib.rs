pub mod code;
pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod io;
pub mod lookup;
pub mod resize;
pub mod session;
pub mod units;
