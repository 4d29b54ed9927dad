#![allow(non_snake_case)]
/// a module samples the parsed equation over the x-range and prepares the data
/// the renderer consumes
/// ________________________________________________________________________________________________________________________________
pub mod sampler;
///________________________________________________________________________________________________________________________________
/// the zoom-following camera: given a streaming prefix of sampled points,
/// compute the window that keeps the latest point in view while respecting
/// minimum zoom and the global bounds of the function
/// ________________________________________________________________________________________________________________________________
pub mod viewport;
///________________________________________________________________________________________________________________________________
/// plotters-based frame drawing: animated GIF export and static PNG snapshots
/// ________________________________________________________________________________________________________________________________
pub mod renderer;
///________________________________________________________________________________________________________________________________
/// animation task description: equation, range, speed and export targets,
/// built from interactive prompts or from a TOML task file
/// ________________________________________________________________________________________________________________________________
pub mod scene;
