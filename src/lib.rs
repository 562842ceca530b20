#[macro_use]
extern crate log;

pub mod film;
pub mod geometry;
pub mod math;
pub mod output;
pub mod parsing;
pub mod profile;
pub mod renderer;
pub mod scene;
pub mod shading;
