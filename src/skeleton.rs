//! Output model: the branch segments and point markers produced by one
//! interpretation pass.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A single drawn segment of the plant skeleton.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Branch {
    /// World-space start of the segment.
    pub start: Vec3,

    /// World-space end of the segment.
    pub end: Vec3,
}

impl Branch {
    /// Flat `[sx, sy, sz, ex, ey, ez]` view for hosts without a vector type.
    pub fn to_array(&self) -> [f32; 6] {
        [
            self.start.x,
            self.start.y,
            self.start.z,
            self.end.x,
            self.end.y,
            self.end.z,
        ]
    }

    /// Length of the segment.
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// A point recorded for a symbol with no movement meaning.
///
/// This is the extension point for caller-defined decoration: flowers,
/// leaves, buds. The originating symbol is kept so hosts can tell them
/// apart.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Marker {
    /// World-space position of the turtle when the symbol was read.
    pub position: Vec3,

    /// The generation symbol that produced this marker.
    pub symbol: char,
}

impl Marker {
    /// Flat `[x, y, z]` view of the marker position.
    pub fn position_array(&self) -> [f32; 3] {
        self.position.to_array()
    }
}

/// The complete, engine-agnostic geometry produced from one generation
/// string.
///
/// Owned by the caller once returned; interpretation never hands out shared
/// state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlantSkeleton {
    /// Every drawn segment, in drawing order.
    pub branches: Vec<Branch>,

    /// Every marker, in reading order.
    pub markers: Vec<Marker>,
}

impl PlantSkeleton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_branch(&mut self, start: Vec3, end: Vec3) {
        self.branches.push(Branch { start, end });
    }

    pub fn add_marker(&mut self, position: Vec3, symbol: char) {
        self.markers.push(Marker { position, symbol });
    }

    /// Branches as flat 6-tuples.
    pub fn branches_flat(&self) -> Vec<[f32; 6]> {
        self.branches.iter().map(Branch::to_array).collect()
    }

    /// Positions of every marker tagged with `symbol`, as flat 3-tuples.
    pub fn marker_positions(&self, symbol: char) -> Vec<[f32; 3]> {
        self.markers
            .iter()
            .filter(|m| m.symbol == symbol)
            .map(Marker::position_array)
            .collect()
    }
}
