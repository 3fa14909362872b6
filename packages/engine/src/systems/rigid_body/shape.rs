use crate::core::math::Vec2;

/// Collision shape in body-local coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Rectangle centered on the body origin
    Box { width: f32, height: f32 },
    /// Infinite half-space. The surface passes through the body origin and
    /// the solid side lies below local +Y.
    Plane,
}

impl Shape {
    pub fn half_extents(&self) -> Option<Vec2> {
        match *self {
            Shape::Box { width, height } => Some(Vec2::new(width * 0.5, height * 0.5)),
            Shape::Plane => None,
        }
    }

    /// Moment of inertia for a body of `mass` with this shape
    pub fn moment_of_inertia(&self, mass: f32) -> f32 {
        match *self {
            Shape::Box { width, height } => mass * (width * width + height * height) / 12.0,
            Shape::Plane => 0.0,
        }
    }

    /// Point test in body-local space (boundary counts as inside)
    pub fn contains_local(&self, p: Vec2) -> bool {
        match *self {
            Shape::Box { width, height } => p.x.abs() <= width * 0.5 && p.y.abs() <= height * 0.5,
            Shape::Plane => p.y <= 0.0,
        }
    }
}

/// Axis-aligned bounding box in world space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}
