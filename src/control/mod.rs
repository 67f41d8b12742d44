//! Control layer: the per-tick lighting rules built on [`crate::signal`].

pub mod lights;

pub use lights::LightController;
