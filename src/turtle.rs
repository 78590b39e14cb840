//! Turtle state and operations for plant interpretation.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The state of the drawing turtle.
///
/// Tracks the pen position and the orientation of its local frame. The
/// frame follows the classic plant-turtle convention: up is local Y, left
/// is local X, and forward (the drawing direction) is local Z. Keeping the
/// orientation as a unit quaternion means the three axes stay orthonormal
/// no matter how many rotations a walk accumulates.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current world-space position of the pen.
    pub position: Vec3,

    /// Current world-space orientation of the local frame.
    pub rotation: Quat,
}

impl TurtleState {
    /// Returns the turtle's local up direction (Y axis) in world space.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Returns the turtle's local left direction (X axis) in world space.
    pub fn left(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Returns the turtle's local forward direction (Z axis) in world space.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Rotates the turtle around its local X axis by `angle` radians.
    pub fn rotate_local_x(&mut self, angle: f32) {
        let rot = Quat::from_axis_angle(Vec3::X, angle);
        self.rotation *= rot;
    }

    /// Rotates the turtle around its local Y axis by `angle` radians.
    pub fn rotate_local_y(&mut self, angle: f32) {
        let rot = Quat::from_axis_angle(Vec3::Y, angle);
        self.rotation *= rot;
    }

    /// Rotates the turtle around its local Z axis by `angle` radians.
    pub fn rotate_local_z(&mut self, angle: f32) {
        let rot = Quat::from_axis_angle(Vec3::Z, angle);
        self.rotation *= rot;
    }

    /// Rotates the turtle around an arbitrary local axis by `angle` radians.
    ///
    /// The axis is normalized first; a near-zero axis is ignored rather
    /// than poisoning the frame with NaNs.
    pub fn rotate_about_axis(&mut self, axis: Vec3, angle: f32) {
        if let Some(axis) = axis.try_normalize() {
            self.rotation *= Quat::from_axis_angle(axis, angle);
        }
    }

    /// Moves the turtle along its forward direction by `distance`.
    pub fn advance(&mut self, distance: f32) {
        self.position += self.forward() * distance;
    }
}

/// Instructions the interpreter can execute.
///
/// Each generation symbol decodes to one of these. The signed factor on the
/// rotation variants carries the +/− sense of the paired symbols.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    /// Move forward and record a branch segment (`F`).
    Draw,
    /// Move forward without recording geometry (`f`).
    Move,
    /// Rotate around the local up axis (`+` / `-`).
    Turn(f32),
    /// Rotate around the local left axis (`&` / `^`).
    Pitch(f32),
    /// Rotate around the local forward axis (`\` / `/`).
    Roll(f32),
    /// Turn 180 degrees around the local up axis (`|`).
    TurnAround,
    /// Save the turtle state onto the stack (`[`).
    Push,
    /// Restore the most recently pushed turtle state (`]`).
    Pop,
    /// Record a point marker tagged with the symbol.
    Marker,
    /// Symbol has no effect.
    Ignore,
}
