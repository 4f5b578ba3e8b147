//! Tiles of the {4, 5} tiling
//!
//! A `Chunk` is a hyperbolic square: four vertices in counter-clockwise
//! order (top-right, top-left, bottom-left, bottom-right) plus the canonical
//! path that reaches it from the origin tile. Identity is the path alone, so
//! the same tile seen from two different viewer positions compares equal.
//!
//! Edges map to directions as
//!
//! ```text
//!            FORWARD (v0, v1)
//!       v1 ────────────── v0
//!        │                 │
//!  LEFT  │                 │  RIGHT
//! (v1,v2)│                 │ (v3,v0)
//!       v2 ────────────── v3
//!            BACKWARD (v2, v3)
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Direction, DirectionPath};
use crate::HyperError;
use crate::geometry::{Geodesic, Point, Reflexion, Rotation, Translation, approx_eq};

/// Half side (in each coordinate) of the origin tile.
///
/// Four squares meet at each vertex of a {4, 5} tiling only if the interior
/// angle is 2π/5, which fixes s = √((tan(3π/10) − 1) / (2(tan(3π/10) + 1))).
pub fn origin_half_size() -> f64 {
    let t = (PI / 2.0 - PI / 5.0).tan();
    ((t - 1.0) / ((t + 1.0) * 2.0)).sqrt()
}

#[derive(Debug, Clone)]
pub struct Chunk {
    vertices: [Point; 4],
    path: DirectionPath,
}

impl Chunk {
    /// The tile centered on the disk center, reached by the empty path
    pub fn origin() -> Self {
        let s = origin_half_size();
        Self {
            vertices: [
                Point::new(s, s),
                Point::new(-s, s),
                Point::new(-s, -s),
                Point::new(s, -s),
            ],
            path: DirectionPath::origin(),
        }
    }

    /// Build a tile from a raw access path, canonicalizing it
    pub fn new(raw: Vec<Direction>, vertices: [Point; 4]) -> Result<Self, HyperError> {
        Ok(Self {
            vertices,
            path: DirectionPath::canonicalize(raw)?,
        })
    }

    pub fn vertices(&self) -> &[Point; 4] {
        &self.vertices
    }

    pub fn path(&self) -> &DirectionPath {
        &self.path
    }

    pub fn encode(&self) -> u64 {
        self.path.encode()
    }

    /// Vertex centroid (Euclidean)
    pub fn center(&self) -> Point {
        self.vertices.iter().copied().sum::<Point>() / 4.0
    }

    /// Endpoints of the edge facing `direction`, in winding order
    pub fn edge(&self, direction: Direction) -> (Point, Point) {
        let i = edge_index(direction);
        (self.vertices[i], self.vertices[(i + 1) % 4])
    }

    pub fn edge_geodesic(&self, direction: Direction) -> Geodesic {
        let (a, b) = self.edge(direction);
        Geodesic::from_two_points(a, b)
    }

    /// Direction of the edge with endpoints `a` and `b` (either order)
    pub fn direction_of_edge(&self, a: Point, b: Point) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&d| {
            let (u, v) = self.edge(d);
            (approx_eq(u, a) && approx_eq(v, b)) || (approx_eq(u, b) && approx_eq(v, a))
        })
    }

    /// The adjacent tile across the edge facing `direction`.
    ///
    /// The crossed edge becomes the neighbor's BACKWARD edge.
    pub fn neighbor(&self, direction: Direction) -> Result<Chunk, HyperError> {
        let mirror = Reflexion::new(self.edge_geodesic(direction));
        let [v0, v1, v2, v3] = self.vertices;
        let reordered = match direction {
            Direction::Forward => [v3, v2, v1, v0],
            Direction::Backward => [v1, v0, v3, v2],
            Direction::Left => [v0, v3, v2, v1],
            Direction::Right => [v2, v1, v0, v3],
        };

        let mut vertices = [Point::ZERO; 4];
        for (slot, v) in vertices.iter_mut().zip(reordered) {
            *slot = mirror.apply(v)?;
        }

        Chunk::new(self.path.extended(direction), vertices)
    }

    pub fn translated(&self, translation: &Translation) -> Chunk {
        Chunk {
            vertices: self.vertices.map(|v| translation.apply(v)),
            path: self.path.clone(),
        }
    }

    pub fn rotated(&self, rotation: &Rotation) -> Chunk {
        Chunk {
            vertices: self.vertices.map(|v| rotation.apply(v)),
            path: self.path.clone(),
        }
    }
}

/// Index of the first vertex of the edge facing `direction`
fn edge_index(direction: Direction) -> usize {
    match direction {
        Direction::Forward => 0,
        Direction::Left => 1,
        Direction::Backward => 2,
        Direction::Right => 3,
    }
}

impl PartialEq for Chunk {
    fn eq(&self, other: &Self) -> bool {
        self.path.steps() == other.path.steps()
    }
}

impl Eq for Chunk {}

impl Hash for Chunk {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.steps().hash(state);
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk{}", self.path)
    }
}
