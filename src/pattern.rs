use crate::{
    error::{Error, Result},
    material::Color,
    math::{Lerp, Matrix4, Tuple},
    object::ShapeRef,
};

/// The color function of a pattern, evaluated in pattern space.
#[derive(Clone, Debug, PartialEq)]
pub enum PatternKind {
    /// Alternating bands along x, one unit wide.
    Stripe(Color, Color),

    /// A blend from the first color to the second across each unit of x.
    Gradient(Color, Color),

    /// Concentric rings in the xz plane.
    Ring(Color, Color),

    /// A 3D checkerboard of unit cubes.
    Checkers(Color, Color),
}

fn even(v: f64) -> bool {
    v.floor().rem_euclid(2.) == 0.
}

impl PatternKind {
    pub fn at(&self, point: Tuple) -> Color {
        match self {
            Self::Stripe(a, b) => {
                if even(point.x) {
                    *a
                } else {
                    *b
                }
            }
            Self::Gradient(a, b) => a.lerp(*b, point.x - point.x.floor()),
            Self::Ring(a, b) => {
                if even((point.x * point.x + point.z * point.z).sqrt()) {
                    *a
                } else {
                    *b
                }
            }
            Self::Checkers(a, b) => {
                let sum = point.x.floor() + point.y.floor() + point.z.floor();
                if sum.rem_euclid(2.) == 0. {
                    *a
                } else {
                    *b
                }
            }
        }
    }
}

/// A spatial color function with its own placement relative to the shape it
/// is painted on.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    pub kind: PatternKind,
    transform: Matrix4,
    inverse: Matrix4,
}

impl Pattern {
    pub fn new(kind: PatternKind) -> Self {
        Self {
            kind,
            transform: Matrix4::identity(),
            inverse: Matrix4::identity(),
        }
    }

    pub fn stripe(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Stripe(a, b))
    }

    pub fn gradient(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Gradient(a, b))
    }

    pub fn ring(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Ring(a, b))
    }

    pub fn checkers(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Checkers(a, b))
    }

    pub fn with_transform(mut self, transform: Matrix4) -> Result<Self> {
        self.set_transform(transform)?;
        Ok(self)
    }

    /// # Errors
    ///
    /// [`Error::NonInvertible`] for a singular transform; see
    /// [`SINGULAR_DETERMINANT`](crate::math::SINGULAR_DETERMINANT).
    pub fn set_transform(&mut self, transform: Matrix4) -> Result<()> {
        self.inverse = transform
            .inverse()
            .ok_or_else(|| Error::NonInvertible(transform.determinant()))?;
        self.transform = transform;
        Ok(())
    }

    pub fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    /// Color at a point already in pattern space.
    pub fn color_at(&self, point: Tuple) -> Color {
        self.kind.at(point)
    }

    /// Color at a world space point on `object`: the point is taken into the
    /// object's space (through every enclosing group), then into pattern space.
    pub fn color_at_shape(&self, object: ShapeRef<'_>, world_point: Tuple) -> Color {
        let object_point = object.world_to_object(world_point);
        self.color_at(self.inverse * object_point)
    }
}
