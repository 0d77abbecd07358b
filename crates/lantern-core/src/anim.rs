//! Animation engine capability.
//!
//! Character animation is pluggable. An engine implements whichever hooks
//! it supports; the rest fall back to the defaults below, so action
//! dispatch can call any hook without knowing the concrete engine.
//!
//! Lantern itself only catalogs and searches actions; the host's action
//! runner holds a `Box<dyn AnimEngine>` per character and calls it when a
//! character action runs:
//!
//! ```text
//! ActionCharAnim::run ──► engine.run_char_anim(..) ──► wait N seconds
//! ActionCharAnim::skip ─► engine.skip_char_anim(..)
//! ```

use serde::{Deserialize, Serialize};

/// How a character turns to face a new direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurningStyle {
    /// Rotation is driven by script.
    #[default]
    Script,
    /// Rotation is driven by the animation itself.
    Animation,
}

/// Playback hooks invoked by character and animation actions.
///
/// The `run_*` hooks return the number of seconds the calling action
/// should wait before it is considered finished (`0.0` = done).
pub trait AnimEngine {
    /// Reset engine state for a newly declared character.
    fn declare(&mut self, _character: &str) {}

    fn turning_style(&self) -> TurningStyle {
        TurningStyle::Script
    }

    fn root_motion(&self) -> bool {
        false
    }

    fn is_sprite_based(&self) -> bool {
        false
    }

    fn run_char_anim(&mut self, _params: &serde_json::Value) -> f32 {
        0.0
    }

    fn skip_char_anim(&mut self, params: &serde_json::Value) {
        self.run_char_anim(params);
    }

    /// Whether the engine can hold a character on its last frame.
    fn char_hold_possible(&self) -> bool {
        false
    }

    fn run_speech(&mut self, _params: &serde_json::Value) {}

    fn skip_speech(&mut self, params: &serde_json::Value) {
        self.run_speech(params);
    }

    /// Short label used when listing an animation action.
    fn anim_label(&self, _params: &serde_json::Value) -> String {
        String::new()
    }

    fn run_anim(&mut self, _params: &serde_json::Value) -> f32 {
        0.0
    }

    fn skip_anim(&mut self, params: &serde_json::Value) {
        self.run_anim(params);
    }

    fn run_char_render(&mut self, _params: &serde_json::Value) -> f32 {
        0.0
    }

    fn play_idle(&mut self) {}

    fn play_walk(&mut self) {}

    fn play_run(&mut self) {}

    fn play_talk(&mut self) {}

    fn play_vertical(&mut self) {}

    fn play_jump(&mut self) {
        self.play_idle();
    }

    fn play_turn_left(&mut self) {
        self.play_idle();
    }

    fn play_turn_right(&mut self) {
        self.play_idle();
    }

    /// Point the head at screen-space angles.
    fn turn_head(&mut self, _angles: [f32; 2]) {}
}
