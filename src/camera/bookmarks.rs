use rustc_hash::FxHashMap;

use crate::camera::frame::Frame;

/// Named in-memory storage for bookmark frames.
///
/// Frames are plain values, so the store never holds controller state;
/// nothing is persisted to disk. Typical flow: capture
/// [`CameraController::current_frame`](crate::CameraController::current_frame)
/// under a name, later feed it to a
/// [`Transition`](crate::animation::Transition) or apply it with
/// [`CameraController::goto_frame`](crate::CameraController::goto_frame).
#[derive(Debug, Default)]
pub struct Bookmarks {
    frames: FxHashMap<String, Frame>,
}

impl Bookmarks {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a frame under `name`, replacing any previous frame with the
    /// same name. Returns the frame that was replaced, if any.
    pub fn save(&mut self, name: &str, frame: Frame) -> Option<Frame> {
        self.frames.insert(name.to_owned(), frame)
    }

    /// Look up a saved frame.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Frame> {
        self.frames.get(name).copied()
    }

    /// Remove a saved frame, returning it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Frame> {
        self.frames.remove(name)
    }

    /// Drop all saved frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Number of saved frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Sorted list of saved frame names.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> =
            self.frames.keys().cloned().collect();
        names.sort();
        names
    }
}
