//! Rays through the tile graph
//!
//! A ray leaves the disk center toward an ideal point. Inside a tile it
//! exits through exactly one edge; if that edge is open the ray continues in
//! the neighbor tile (expressed in the same disk coordinates), otherwise it
//! stops on the wall.

use crate::HyperError;
use crate::geometry::{
    Geodesic, ORIGIN, Point, Segment, hyperbolic_distance_to_center, polar_to_unit,
};
use crate::tiling::{Chunk, Direction, WallOracle};

/// How a ray's propagation ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayOutcome {
    /// Stopped on a wall at this point
    Wall(Point),
    /// The next crossing lies at or past the distance cap
    Beyond,
    /// Step budget ran out before hitting anything
    Exhausted,
    /// No edge of the tile crosses the ray (numerical corner case)
    Stray,
}

/// Straight ray from the disk center to the ideal point at `angle`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub angle: f64,
    pub end: Point,
}

impl Ray {
    pub fn new(angle: f64) -> Self {
        Self {
            angle,
            end: polar_to_unit(angle),
        }
    }

    /// Whether the ray's segment properly crosses the segment a-b
    pub fn crosses(&self, a: Point, b: Point) -> Result<bool, HyperError> {
        let ray = Segment::new(ORIGIN, self.end)?;
        Ok(ray.intersects(&Segment::new(a, b)?))
    }

    /// Euclidean distance from the center to where the ray meets `geodesic`.
    ///
    /// Solves |t·end − c|² = R² for the nearer root. Diameters pass through
    /// the center, so the distance is 0.
    pub fn distance_to(
        &self,
        geodesic: &Geodesic,
        direction: Direction,
    ) -> Result<f64, HyperError> {
        let (Some(center), Some(radius)) =
            (geodesic.euclidean_center(), geodesic.euclidean_radius())
        else {
            return Ok(0.0);
        };

        let b = -2.0 * self.end.dot(center);
        let c = center.length_squared() - radius * radius;
        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return Err(HyperError::NoRealRoot { direction });
        }
        Ok((-b - discriminant.sqrt()) / 2.0)
    }

    pub fn intersection(
        &self,
        geodesic: &Geodesic,
        direction: Direction,
    ) -> Result<Point, HyperError> {
        Ok(self.end * self.distance_to(geodesic, direction)?)
    }

    /// The edge through which the ray leaves `tile`, with the crossing point
    pub fn exit(&self, tile: &Chunk) -> Result<Option<(Direction, Point)>, HyperError> {
        for direction in Direction::ALL {
            let (a, b) = tile.edge(direction);
            if self.crosses(a, b)? {
                let hit = self.intersection(&tile.edge_geodesic(direction), direction)?;
                return Ok(Some((direction, hit)));
            }
        }
        Ok(None)
    }

    /// Follow the ray through at most `step_budget` tiles.
    ///
    /// A non-positive `max_distance` disables the distance cap.
    pub fn propagate(
        &self,
        tile: &Chunk,
        oracle: &WallOracle,
        step_budget: u32,
        max_distance: f64,
    ) -> Result<RayOutcome, HyperError> {
        self.propagate_with(tile, oracle, step_budget, max_distance, |_, _| Ok(()))
    }

    /// [`Ray::propagate`] with a hook run in every traversed tile.
    ///
    /// `visit` receives the tile and the hyperbolic distance to the point
    /// where the ray leaves it, after the distance cap check and before the
    /// wall test.
    pub fn propagate_with<F>(
        &self,
        tile: &Chunk,
        oracle: &WallOracle,
        step_budget: u32,
        max_distance: f64,
        mut visit: F,
    ) -> Result<RayOutcome, HyperError>
    where
        F: FnMut(&Chunk, f64) -> Result<(), HyperError>,
    {
        let mut current = tile.clone();

        for _ in 0..step_budget {
            let Some((direction, hit)) = self.exit(&current)? else {
                log::warn!("Ray at {:.3} rad crosses no edge of {}", self.angle, current);
                return Ok(RayOutcome::Stray);
            };

            let distance = hyperbolic_distance_to_center(hit);
            if max_distance > 0.0 && distance >= max_distance {
                return Ok(RayOutcome::Beyond);
            }

            visit(&current, distance)?;

            if oracle.has_wall(&current, direction)? {
                return Ok(RayOutcome::Wall(hit));
            }
            current = current.neighbor(direction)?;
        }

        Ok(RayOutcome::Exhausted)
    }
}
