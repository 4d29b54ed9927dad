#![allow(non_snake_case)]
/// logging init: console and/or file loggers behind the log facade
/// ________________________________________________________________________________________________________________________________
pub mod logger;
///________________________________________________________________________________________________________________________________
/// saving sampled curves to csv and plain text
/// ________________________________________________________________________________________________________________________________
pub mod io;
