//! Host-facing surface tying the grammar engine and the interpreter
//! together.

use crate::error::VerdureError;
use crate::grammar::{GrowthLimits, LsysGrammar};
use crate::interpreter::{PlantConfig, PlantInterpreter};
use crate::skeleton::{Branch, PlantSkeleton};
use std::path::Path;

/// A complete plant generator: grammar, defaults and interpretation in one
/// handle.
///
/// Intended for single-threaded ownership by one host caller; the memoized
/// generation cache is the only state that persists between calls, which is
/// why everything that might extend it takes `&mut self`.
#[derive(Clone, Debug, Default)]
pub struct PlantGenerator {
    grammar: LsysGrammar,
    config: PlantConfig,
}

impl PlantGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a grammar file, replacing all prior grammar state.
    pub fn load_program(&mut self, path: impl AsRef<Path>) -> Result<(), VerdureError> {
        self.grammar.load_path(path)
    }

    /// Loads grammar text, replacing all prior grammar state.
    pub fn load_program_from_str(&mut self, text: &str) {
        self.grammar.load_str(text);
    }

    /// Sets the default rotation angle, in degrees.
    pub fn set_default_angle(&mut self, degrees: f32) {
        self.config.angle_degrees = degrees;
    }

    /// The default rotation angle, in degrees.
    pub fn default_angle(&self) -> f32 {
        self.config.angle_degrees
    }

    /// Sets the step length, in world units.
    pub fn set_default_step(&mut self, distance: f32) {
        self.config.step_length = distance;
    }

    /// The step length, in world units.
    pub fn default_step(&self) -> f32 {
        self.config.step_length
    }

    /// The grammar text exactly as last loaded.
    pub fn grammar_source(&self) -> &str {
        self.grammar.source()
    }

    /// The generation-`n` symbol string.
    pub fn generation(&mut self, n: usize) -> Result<&str, VerdureError> {
        self.grammar.generation(n)
    }

    /// Interprets generation `n` into branches and markers.
    pub fn process(&mut self, n: usize) -> Result<PlantSkeleton, VerdureError> {
        let interpreter = PlantInterpreter::new(self.config.clone());
        let symbols = self.grammar.generation(n)?;
        interpreter.interpret(symbols)
    }

    /// Interprets generation `n` and keeps only the branch segments.
    pub fn process_branches(&mut self, n: usize) -> Result<Vec<Branch>, VerdureError> {
        Ok(self.process(n)?.branches)
    }

    /// Interprets generation `n` into the numeric-only form: branch
    /// 6-tuples plus flower positions as 3-tuples.
    ///
    /// Markers other than [`PlantConfig::flower_symbol`] are dropped; hosts
    /// that want them typed should use [`process`](Self::process).
    pub fn process_flat(
        &mut self,
        n: usize,
    ) -> Result<(Vec<[f32; 6]>, Vec<[f32; 3]>), VerdureError> {
        let skeleton = self.process(n)?;
        let branches = skeleton.branches_flat();
        let flowers = skeleton.marker_positions(self.config.flower_symbol);
        Ok((branches, flowers))
    }

    /// The active interpretation configuration.
    pub fn config(&self) -> &PlantConfig {
        &self.config
    }

    /// Mutable access to the interpretation configuration.
    pub fn config_mut(&mut self) -> &mut PlantConfig {
        &mut self.config
    }

    /// Expansion caps of the underlying grammar.
    pub fn limits(&self) -> GrowthLimits {
        self.grammar.limits()
    }

    /// Replaces the grammar's expansion caps.
    pub fn set_limits(&mut self, limits: GrowthLimits) {
        self.grammar.set_limits(limits);
    }
}
