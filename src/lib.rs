#[macro_use] extern crate log;
extern crate clap;
extern crate fern;
extern crate chrono;
extern crate term_grid;

pub mod cli;
pub mod filters;
pub mod logging;
