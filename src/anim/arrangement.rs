//! Circle arrangements - the keyframe poses of the animation
//!
//! Each arrangement is four circles in the plane. The table below is fixed at
//! compile time; `load` recenters every group so its centroid sits at the
//! origin, which keeps the morph visually anchored regardless of how a group
//! was authored.

use glam::Vec2;

/// Number of arrangements in the compile-time table
pub const GROUP_COUNT: usize = 9;
/// Circles per arrangement
pub const CIRCLES_PER_GROUP: usize = 4;

/// A circle in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius,
        }
    }

    /// Linear interpolation of all three fields toward `other`
    pub fn lerp(&self, other: &Circle, t: f32) -> Circle {
        Circle {
            center: self.center.lerp(other.center, t),
            radius: self.radius + (other.radius - self.radius) * t,
        }
    }
}

/// One keyframe pose: four circles with centroid at the origin
#[derive(Debug, Clone, Copy)]
pub struct Arrangement {
    pub circles: [Circle; CIRCLES_PER_GROUP],
}

impl Arrangement {
    /// Mean of the four centers
    pub fn centroid(&self) -> Vec2 {
        let sum: Vec2 = self.circles.iter().map(|c| c.center).sum();
        sum / CIRCLES_PER_GROUP as f32
    }

    /// Recenter so the centroid is the origin (radii untouched)
    fn centered(mut self) -> Self {
        let centroid = self.centroid();
        for circle in &mut self.circles {
            circle.center -= centroid;
        }
        self
    }
}

/// Authored poses, (x, y, radius) per circle. Centroids need not be at the
/// origin here; `load` normalizes them.
const GROUPS: [[(f32, f32, f32); CIRCLES_PER_GROUP]; GROUP_COUNT] = [
    // Horizontal row
    [
        (-150.0, 0.0, 45.0),
        (-50.0, 0.0, 45.0),
        (50.0, 0.0, 45.0),
        (150.0, 0.0, 45.0),
    ],
    // Diamond
    [
        (0.0, 140.0, 55.0),
        (140.0, 0.0, 55.0),
        (0.0, -140.0, 55.0),
        (-140.0, 0.0, 55.0),
    ],
    // Concentric rings
    [
        (0.0, 0.0, 40.0),
        (0.0, 0.0, 80.0),
        (0.0, 0.0, 120.0),
        (0.0, 0.0, 160.0),
    ],
    // Tangent chain, radii doubling along it
    [
        (-160.0, 0.0, 20.0),
        (-105.0, 0.0, 35.0),
        (-15.0, 0.0, 55.0),
        (120.0, 0.0, 80.0),
    ],
    // Four-fold overlap
    [
        (-40.0, 40.0, 75.0),
        (40.0, 40.0, 75.0),
        (-40.0, -40.0, 75.0),
        (40.0, -40.0, 75.0),
    ],
    // Three satellites around a core
    [
        (0.0, 0.0, 70.0),
        (0.0, 120.0, 35.0),
        (-104.0, -60.0, 35.0),
        (104.0, -60.0, 35.0),
    ],
    // Two nested pairs
    [
        (-90.0, 0.0, 35.0),
        (-90.0, 0.0, 85.0),
        (90.0, 0.0, 35.0),
        (90.0, 0.0, 85.0),
    ],
    // Diagonal cascade
    [
        (-130.0, -110.0, 25.0),
        (-45.0, -40.0, 45.0),
        (40.0, 35.0, 65.0),
        (125.0, 115.0, 85.0),
    ],
    // Mutually tangent trio with a pip at the middle
    [
        (0.0, 69.3, 60.0),
        (-60.0, -34.6, 60.0),
        (60.0, -34.6, 60.0),
        (0.0, 0.0, 12.0),
    ],
];

/// Build the normalized arrangement table
pub fn load() -> [Arrangement; GROUP_COUNT] {
    GROUPS.map(|group| {
        Arrangement {
            circles: group.map(|(x, y, r)| Circle::new(x, y, r)),
        }
        .centered()
    })
}
