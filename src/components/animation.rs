//! Grid animations.
//!
//! - [`AnimationSequence`] – named, timed list of frame indices
//! - [`AnimationSet`] – direction name to sequence, all on one [`FrameGrid`]
//! - [`RowLayout`] – which grid row holds which direction
//! - [`AnimationController`] – builds a set from a grid and binds it to actors
//!
//! Playback is indexed by elapsed time rather than by step count, so a
//! sequence loops naturally: `frame = floor(elapsed / duration) mod len`.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::components::actor::Actor;
use crate::components::framegrid::{FrameGrid, Rect};
use crate::error::{Result, SpriteError};

/// Relative tolerance, in ULPs of the step count, absorbing accumulated
/// float drift so that `k * duration` lands on frame `k`.
const STEP_TOLERANCE_ULPS: f32 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSequence {
    name: String,
    frames: SmallVec<[usize; 8]>,
    duration: f32,
}

impl AnimationSequence {
    pub fn new(
        name: impl Into<String>,
        frames: impl IntoIterator<Item = usize>,
        duration: f32,
    ) -> Result<Self> {
        let name = name.into();
        let frames: SmallVec<[usize; 8]> = frames.into_iter().collect();
        if frames.is_empty() {
            return Err(SpriteError::Configuration(format!(
                "animation '{}' has no frames",
                name
            )));
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(SpriteError::Configuration(format!(
                "animation '{}' needs a positive frame duration (got {})",
                name, duration
            )));
        }
        Ok(Self {
            name,
            frames,
            duration,
        })
    }

    /// One full grid row, left to right.
    pub fn from_row(grid: &FrameGrid, name: impl Into<String>, row: u32, duration: f32) -> Result<Self> {
        let name = name.into();
        if row >= grid.rows() {
            return Err(SpriteError::Configuration(format!(
                "animation '{}' uses row {} but sheet '{}' has {} rows",
                name,
                row,
                grid.sheet().key(),
                grid.rows()
            )));
        }
        let frames = (0..grid.columns()).map(|column| grid.index_of(row, column));
        Self::new(name, frames, duration)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Never true for a constructed sequence.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Position in the sequence at `elapsed` seconds.
    ///
    /// Slot `k` covers `[k * duration, (k + 1) * duration)`. Only a value a few
    /// ULPs below a boundary is rounded up into the next slot.
    pub fn step(&self, elapsed: f32) -> usize {
        let elapsed = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };
        let raw = elapsed / self.duration;
        let steps = (raw + raw * STEP_TOLERANCE_ULPS * f32::EPSILON).floor() as usize;
        steps % self.frames.len()
    }

    /// Grid frame index shown at `elapsed` seconds.
    pub fn frame_index(&self, elapsed: f32) -> usize {
        self.frames[self.step(elapsed)]
    }

    pub fn first_frame_index(&self) -> usize {
        self.frames[0]
    }

    pub fn frames(&self) -> &[usize] {
        &self.frames
    }
}

/// Direction name to sequence mapping sharing one [`FrameGrid`].
///
/// Built once and then shared read-only through `Rc` by every actor that uses
/// the same sheet.
#[derive(Debug, Clone)]
pub struct AnimationSet {
    grid: FrameGrid,
    sequences: FxHashMap<String, AnimationSequence>,
}

impl AnimationSet {
    pub fn new(grid: FrameGrid) -> Self {
        Self {
            grid,
            sequences: FxHashMap::default(),
        }
    }

    /// Add a sequence, validating that every frame index exists in the grid.
    pub fn insert(&mut self, sequence: AnimationSequence) -> Result<()> {
        if let Some(bad) = sequence
            .frames()
            .iter()
            .find(|&&i| i >= self.grid.frame_count())
        {
            return Err(SpriteError::Configuration(format!(
                "animation '{}' references frame {} but sheet '{}' has {} frames",
                sequence.name(),
                bad,
                self.grid.sheet().key(),
                self.grid.frame_count()
            )));
        }
        self.sequences.insert(sequence.name().to_string(), sequence);
        Ok(())
    }

    pub fn grid(&self) -> &FrameGrid {
        &self.grid
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sequences.contains_key(name)
    }

    pub fn sequence(&self, name: &str) -> Result<&AnimationSequence> {
        self.sequences
            .get(name)
            .ok_or_else(|| SpriteError::UnknownAnimation(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sequences.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Frame rectangle of animation `name` at `elapsed` seconds.
    pub fn get_frame(&self, name: &str, elapsed: f32) -> Result<Rect> {
        let sequence = self.sequence(name)?;
        self.rect(sequence.frame_index(elapsed))
    }

    /// First frame of animation `name`, used for idle poses.
    pub fn first_frame(&self, name: &str) -> Result<Rect> {
        let sequence = self.sequence(name)?;
        self.rect(sequence.first_frame_index())
    }

    fn rect(&self, index: usize) -> Result<Rect> {
        // indices are validated on insert
        self.grid.frame_at(index).ok_or_else(|| {
            SpriteError::Configuration(format!("frame {} outside the grid", index))
        })
    }
}

/// Explicit `{direction name -> row index}` table describing a sheet layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowLayout {
    rows: Vec<(String, u32)>,
}

impl RowLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard four-way walking sheet: Down, Left, Right, Up from the top.
    pub fn four_way() -> Self {
        Self::new()
            .with_row("Down", 0)
            .with_row("Left", 1)
            .with_row("Right", 2)
            .with_row("Up", 3)
    }

    /// Each name maps to its own position in `names`.
    pub fn positional<S: AsRef<str>>(names: &[S]) -> Self {
        names
            .iter()
            .enumerate()
            .fold(Self::new(), |layout, (row, name)| {
                layout.with_row(name.as_ref(), row as u32)
            })
    }

    pub fn with_row(mut self, name: impl Into<String>, row: u32) -> Self {
        let name = name.into();
        self.rows.retain(|(n, _)| *n != name);
        self.rows.push((name, row));
        self
    }

    pub fn row_of(&self, name: &str) -> Option<u32> {
        self.rows.iter().find(|(n, _)| n == name).map(|(_, r)| *r)
    }
}

/// Builds an [`AnimationSet`] from one sheet and binds it to actors.
#[derive(Debug, Clone)]
pub struct AnimationController {
    grid: FrameGrid,
    frame_duration: f32,
    layout: RowLayout,
    group: Option<Rc<AnimationSet>>,
}

impl AnimationController {
    pub fn new(grid: FrameGrid, frame_duration: f32) -> Self {
        Self {
            grid,
            frame_duration,
            layout: RowLayout::four_way(),
            group: None,
        }
    }

    pub fn with_layout(mut self, layout: RowLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Build one sequence per name from the row the layout assigns to it.
    pub fn create_animation_group<S: AsRef<str>>(&mut self, names: &[S]) -> Result<Rc<AnimationSet>> {
        let mut set = AnimationSet::new(self.grid.clone());
        for name in names {
            let name = name.as_ref();
            let row = self.layout.row_of(name).ok_or_else(|| {
                SpriteError::Configuration(format!(
                    "no row assigned to animation '{}' on sheet '{}'",
                    name,
                    self.grid.sheet().key()
                ))
            })?;
            set.insert(AnimationSequence::from_row(
                &self.grid,
                name,
                row,
                self.frame_duration,
            )?)?;
        }
        let set = Rc::new(set);
        self.group = Some(Rc::clone(&set));
        Ok(set)
    }

    pub fn group(&self) -> Option<&Rc<AnimationSet>> {
        self.group.as_ref()
    }

    /// Share the built set with `actor`.
    pub fn append_animations_to(&self, actor: &mut Actor) -> Result<()> {
        let set = self.group.as_ref().ok_or_else(|| {
            SpriteError::Configuration(format!(
                "no animation group created for sheet '{}'",
                self.grid.sheet().key()
            ))
        })?;
        actor.bind_animations(Rc::clone(set));
        Ok(())
    }
}
