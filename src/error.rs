use thiserror::Error;

use crate::object::ShapeId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("transform is not invertible (determinant {0})")]
    NonInvertible(f64),

    #[error("shape {0} does not exist in this scene graph")]
    UnknownShape(ShapeId),

    #[error("shape {0} is not a group and cannot take children")]
    NotAGroup(ShapeId),

    #[error("shape {child} is already owned by group {parent}")]
    AlreadyOwned { child: ShapeId, parent: ShapeId },

    #[error("adding shape {child} to group {group} would create a cycle")]
    Cycle { group: ShapeId, child: ShapeId },

    #[error("obj error: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("obj file {0} contains no triangles")]
    EmptyObj(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
