use bevy::math::Affine3A;
use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;

/// Axis-aligned bounds of every mesh under the model root, in root-local space.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ModelBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl ModelBounds {
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for point in points {
            bounds.include(point);
        }
        Some(bounds)
    }

    pub fn include(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Bounds of a mesh's vertex positions after `transform`.
    /// Meshes without float positions contribute nothing.
    pub fn of_mesh(mesh: &Mesh, transform: Affine3A) -> Option<Self> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION)? {
            VertexAttributeValues::Float32x3(positions) => Self::from_points(
                positions
                    .iter()
                    .map(|p| transform.transform_point3(Vec3::from_array(*p))),
            ),
            _ => None,
        }
    }
}

/// Translation along Y that rests the lowest point of a model on the ground.
///
/// `bounds_min_y` is measured in model space, before `scale_y` is applied.
pub fn ground_offset(bounds_min_y: f32, scale_y: f32, ground_height: f32) -> f32 {
    ground_height - bounds_min_y * scale_y
}
