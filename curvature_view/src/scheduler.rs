// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::any::Any;
use core::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::{debug, warn};

use crate::{Camera, DrawError, Frame, Surface, Viewport};

/// Priority used when none is given.
pub const DEFAULT_PRIORITY: f64 = 100.0;

/// Handle returned by [`Scheduler::attach`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrawableId(u64);

/// Something that paints, or otherwise acts, once per drawn tick.
///
/// Closures of the form `FnMut(&mut Frame<'_>) -> Result<(), DrawError>`
/// implement this trait.
pub trait Drawable {
    /// Runs for one tick.
    ///
    /// An error is logged by the scheduler and only affects this tick.
    fn draw(&mut self, frame: &mut Frame<'_>) -> Result<(), DrawError>;
}

impl<F> Drawable for F
where
    F: FnMut(&mut Frame<'_>) -> Result<(), DrawError>,
{
    fn draw(&mut self, frame: &mut Frame<'_>) -> Result<(), DrawError> {
        self(frame)
    }
}

struct Entry {
    id: DrawableId,
    priority: f64,
    drawable: Box<dyn Drawable>,
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Priority-ordered registry of drawables.
///
/// Drawables run in ascending priority. Ties keep attachment order, so a
/// drawable attached later at an existing priority runs after the ones
/// already there. Typical layering puts a grid at `-20`, labels at `-9`,
/// curves at [`DEFAULT_PRIORITY`] and camera animations at `f64::INFINITY`.
#[derive(Debug, Default)]
pub struct Scheduler {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Scheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a drawable at `priority`.
    ///
    /// A NaN priority is replaced by [`DEFAULT_PRIORITY`].
    pub fn attach(&mut self, drawable: impl Drawable + 'static, priority: f64) -> DrawableId {
        self.attach_boxed(Box::new(drawable), priority)
    }

    /// Registers a closure at `priority`.
    ///
    /// Same as [`Scheduler::attach`], but gives the closure its signature so
    /// argument and error types need no annotations.
    pub fn attach_fn<F>(&mut self, draw: F, priority: f64) -> DrawableId
    where
        F: FnMut(&mut Frame<'_>) -> Result<(), DrawError> + 'static,
    {
        self.attach_boxed(Box::new(draw), priority)
    }

    /// Registers an already boxed drawable at `priority`.
    pub fn attach_boxed(&mut self, drawable: Box<dyn Drawable>, priority: f64) -> DrawableId {
        let priority = if priority.is_nan() {
            warn!(
                default = DEFAULT_PRIORITY,
                "drawable attached with a NaN priority; using the default"
            );
            DEFAULT_PRIORITY
        } else {
            priority
        };
        let id = DrawableId(self.next_id);
        self.next_id += 1;
        let index = self.entries.partition_point(|e| e.priority <= priority);
        self.entries.insert(
            index,
            Entry {
                id,
                priority,
                drawable,
            },
        );
        id
    }

    /// Unregisters a drawable. Returns `false` if it was not attached.
    pub fn detach(&mut self, id: DrawableId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `id` is attached.
    #[must_use]
    pub fn contains(&self, id: DrawableId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Number of attached drawables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Priorities in execution order.
    pub fn priorities(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.priority)
    }

    /// Drawable ids in execution order.
    pub fn ids(&self) -> impl Iterator<Item = DrawableId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    /// Draws one frame.
    ///
    /// Derives the viewport from `camera`, clears `surface` and runs every
    /// drawable in priority order. A drawable that returns an error or
    /// panics is logged and the pass moves on to the next one. Drawables
    /// that call [`Frame::finish`] are detached after the pass. Returns the
    /// viewport the frame used.
    pub fn update(
        &mut self,
        surface: &mut dyn Surface,
        camera: &mut Camera,
        delta_time: f64,
    ) -> Viewport {
        let viewport = camera.viewport();
        let mut frame = Frame::new(surface, camera, viewport, delta_time);
        frame.clear();
        let mut finished = Vec::new();
        for entry in &mut self.entries {
            match catch_unwind(AssertUnwindSafe(|| entry.drawable.draw(&mut frame))) {
                Ok(Ok(())) => {}
                Ok(Err(error)) => warn!(
                    id = ?entry.id,
                    priority = entry.priority,
                    %error,
                    "drawable failed; skipping it for this tick"
                ),
                Err(payload) => warn!(
                    id = ?entry.id,
                    priority = entry.priority,
                    panic = panic_message(&*payload),
                    "drawable panicked; skipping it for this tick"
                ),
            }
            if frame.take_finished() {
                finished.push(entry.id);
            }
        }
        if !finished.is_empty() {
            debug!(count = finished.len(), "detaching finished drawables");
            self.entries.retain(|e| !finished.contains(&e.id));
        }
        viewport
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}
