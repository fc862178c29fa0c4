use serde::{Deserialize, Serialize};

/// A point in 3D space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Coordinate {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// True when every axis differs by at most `tolerance`
    ///
    /// Compared in f64, like the spatial index cell math.
    pub fn within(&self, other: &Coordinate, tolerance: f32) -> bool {
        let t = tolerance as f64;
        (self.x as f64 - other.x as f64).abs() <= t
            && (self.y as f64 - other.y as f64).abs() <= t
            && (self.z as f64 - other.z as f64).abs() <= t
    }

    /// Euclidean distance
    pub fn distance_to(&self, other: &Coordinate) -> f32 {
        let dz = other.z - self.z;
        (self.horizontal_distance_to(other).powi(2) + dz * dz).sqrt()
    }

    /// Distance in the XY plane
    pub fn horizontal_distance_to(&self, other: &Coordinate) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Signed change in elevation from `self` to `other`
    pub fn rise_to(&self, other: &Coordinate) -> f32 {
        other.z - self.z
    }
}

impl From<[f32; 3]> for Coordinate {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<(f32, f32, f32)> for Coordinate {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_is_per_axis() {
        let a = Coordinate::new(0.0, 0.0, 0.0);
        assert!(a.within(&Coordinate::new(0.00005, -0.00005, 0.0), 1e-4));
        assert!(!a.within(&Coordinate::new(0.0, 0.0, 0.001), 1e-4));
    }

    #[test]
    fn test_distances() {
        let a = Coordinate::new(0.0, 0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0, 12.0);
        assert_eq!(a.horizontal_distance_to(&b), 5.0);
        assert_eq!(a.distance_to(&b), 13.0);
        assert_eq!(a.rise_to(&b), 12.0);
    }
}
