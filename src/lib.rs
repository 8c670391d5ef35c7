#![allow(clippy::many_single_char_names)]

pub mod camera;
pub mod canvas;
pub mod computation;
pub mod error;
pub mod intersection;
pub mod lighting;
pub mod material;
pub mod math;
pub mod object;
pub mod pattern;
pub mod scene;
pub mod world;

pub use camera::Camera;
pub use canvas::Canvas;
pub use computation::Computation;
pub use error::{Error, Result};
pub use intersection::{hit, Intersection};
pub use lighting::PointLight;
pub use material::{Color, Material};
pub use object::{SceneGraph, Shape, ShapeId};
pub use pattern::Pattern;
pub use scene::{RenderOptions, Scene};
pub use world::World;
