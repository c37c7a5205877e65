//! Buoyant library - a ship floating on an analytic wave field

pub mod camera;
pub mod cli;
pub mod frame;
pub mod input;
pub mod mesh;
pub mod params;
pub mod rendering;
pub mod shaders;
pub mod ship;
pub mod simulation;
pub mod wave;
