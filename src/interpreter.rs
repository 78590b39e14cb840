//! Interpreter that walks a generation string and emits a [`PlantSkeleton`].
//!
//! The entry point is [`PlantInterpreter`]. Configure it with a
//! [`PlantConfig`], optionally rebind symbols via
//! [`PlantInterpreter::set_op`] or [`PlantInterpreter::with_map`], then call
//! [`PlantInterpreter::interpret`] with a generation string.

use crate::error::VerdureError;
use crate::skeleton::PlantSkeleton;
use crate::turtle::{TurtleOp, TurtleState};
use glam::Quat;
use std::collections::HashMap;
use std::f32::consts::{FRAC_PI_2, PI};

/// Configuration for turtle interpretation.
#[derive(Clone, Debug)]
pub struct PlantConfig {
    /// Distance covered by one `F`/`f` step, in world units.
    pub step_length: f32,

    /// Default rotation angle, in degrees.
    pub angle_degrees: f32,

    /// Orientation applied to a fresh turtle before the walk starts.
    ///
    /// The default pitches the forward axis onto world +Y so plants grow
    /// upward from the origin; pass [`Quat::IDENTITY`] to keep the
    /// canonical frame with forward along +Z.
    pub initial_orientation: Quat,

    /// Marker symbol the flat output surface treats as a flower.
    pub flower_symbol: char,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            step_length: 1.0,
            angle_degrees: 22.5,
            initial_orientation: Quat::from_rotation_x(-FRAC_PI_2),
            flower_symbol: '*',
        }
    }
}

/// Interprets generation strings into branch geometry.
pub struct PlantInterpreter {
    op_map: HashMap<char, TurtleOp>,
    config: PlantConfig,
}

impl PlantInterpreter {
    /// Creates an interpreter with the given configuration and the
    /// [standard symbol bindings](standard_ops).
    pub fn new(config: PlantConfig) -> Self {
        Self {
            op_map: standard_ops(),
            config,
        }
    }

    /// Replaces the entire symbol-to-operation map in one step (builder
    /// pattern).
    ///
    /// Symbols absent from `map` emit markers.
    pub fn with_map(mut self, map: HashMap<char, TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Binds a single symbol to an operation.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// The active configuration.
    pub fn config(&self) -> &PlantConfig {
        &self.config
    }

    /// Walks `symbols` once and returns the geometry it draws.
    ///
    /// Every call starts from a fresh turtle with
    /// [`PlantConfig::initial_orientation`] applied and an empty pose
    /// stack. The walk covers the whole string left to right; the only
    /// early exit is a `]` with nothing to restore, which returns
    /// [`VerdureError::StackUnderflow`] instead of continuing from an
    /// undefined pose. Symbols with no binding emit a [`Marker`] at the
    /// current position.
    ///
    /// [`Marker`]: crate::skeleton::Marker
    pub fn interpret(&self, symbols: &str) -> Result<PlantSkeleton, VerdureError> {
        let mut skeleton = PlantSkeleton::new();
        let mut turtle = TurtleState {
            rotation: self.config.initial_orientation,
            ..TurtleState::default()
        };
        let mut stack: Vec<TurtleState> = Vec::new();

        let angle = self.config.angle_degrees.to_radians();

        for (index, symbol) in symbols.chars().enumerate() {
            let op = self
                .op_map
                .get(&symbol)
                .copied()
                .unwrap_or(TurtleOp::Marker);

            match op {
                TurtleOp::Draw => {
                    let start = turtle.position;
                    turtle.advance(self.config.step_length);
                    skeleton.add_branch(start, turtle.position);
                }
                TurtleOp::Move => turtle.advance(self.config.step_length),
                TurtleOp::Turn(sign) => turtle.rotate_local_y(angle * sign),
                TurtleOp::Pitch(sign) => turtle.rotate_local_x(angle * sign),
                TurtleOp::Roll(sign) => turtle.rotate_local_z(angle * sign),
                TurtleOp::TurnAround => turtle.rotate_local_y(PI),
                TurtleOp::Push => stack.push(turtle),
                TurtleOp::Pop => match stack.pop() {
                    Some(saved) => turtle = saved,
                    None => return Err(VerdureError::StackUnderflow { index }),
                },
                TurtleOp::Marker => skeleton.add_marker(turtle.position, symbol),
                TurtleOp::Ignore => {}
            }
        }

        Ok(skeleton)
    }
}

/// The conventional symbol table for plant grammars.
///
/// | symbol | operation |
/// |---|---|
/// | `F` | draw a branch segment |
/// | `f` | move without drawing |
/// | `+` / `-` | turn around the local up axis |
/// | `&` / `^` | pitch around the local left axis |
/// | `\` / `/` | roll around the local forward axis |
/// | `\|` | turn around (180°) |
/// | `[` / `]` | push / pop the pose stack |
///
/// Anything else falls through to a marker.
pub fn standard_ops() -> HashMap<char, TurtleOp> {
    HashMap::from([
        ('F', TurtleOp::Draw),
        ('f', TurtleOp::Move),
        ('+', TurtleOp::Turn(1.0)),
        ('-', TurtleOp::Turn(-1.0)),
        ('&', TurtleOp::Pitch(1.0)),
        ('^', TurtleOp::Pitch(-1.0)),
        ('\\', TurtleOp::Roll(1.0)),
        ('/', TurtleOp::Roll(-1.0)),
        ('|', TurtleOp::TurnAround),
        ('[', TurtleOp::Push),
        (']', TurtleOp::Pop),
    ])
}
