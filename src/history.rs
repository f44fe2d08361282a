use crate::stroke::Stroke;

/// The ordered stroke log together with its undo/redo stacks.
///
/// The log is in draw order. Undo and redo only ever remove or restore a
/// contiguous trailing range, so the log is never reordered or spliced in
/// the middle.
#[derive(Debug, Clone, Default)]
pub struct StrokeHistory {
    /// Strokes in paint order, oldest first
    log: Vec<Stroke>,
    /// Log lengths recorded at the start of each gesture
    undo_stack: Vec<usize>,
    /// Trailing log ranges removed by undo
    redo_stack: Vec<Vec<Stroke>>,
}

impl StrokeHistory {
    /// Creates an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current log length as the checkpoint of a new gesture.
    ///
    /// Starting a gesture discards everything on the redo stack.
    pub fn begin_gesture(&mut self) {
        let checkpoint = self.log.len();
        self.undo_stack.push(checkpoint);
        if !self.redo_stack.is_empty() {
            log::debug!("Discarding {} redo entries", self.redo_stack.len());
            self.redo_stack.clear();
        }
        log::info!("Gesture started at checkpoint {}", checkpoint);
    }

    /// Appends one stroke to the end of the log
    pub fn append_stroke(&mut self, stroke: Stroke) {
        self.log.push(stroke);
    }

    /// Removes the strokes drawn since the most recent checkpoint.
    ///
    /// Returns `false` when there is nothing to undo; the history is left
    /// untouched in that case.
    pub fn undo(&mut self) -> bool {
        let Some(checkpoint) = self.undo_stack.pop() else {
            log::info!("Nothing to undo.");
            return false;
        };

        // Checkpoints are non-decreasing and never exceed the log length.
        let checkpoint = checkpoint.min(self.log.len());
        let removed = self.log.split_off(checkpoint);
        log::info!("Undo removed {} strokes", removed.len());
        self.redo_stack.push(removed);
        true
    }

    /// Restores the most recently undone range to the end of the log.
    ///
    /// Returns `false` when there is nothing to redo; the history is left
    /// untouched in that case.
    pub fn redo(&mut self) -> bool {
        let Some(segment) = self.redo_stack.pop() else {
            log::info!("Nothing to redo.");
            return false;
        };

        self.undo_stack.push(self.log.len());
        log::info!("Redo restored {} strokes", segment.len());
        self.log.extend(segment);
        true
    }

    /// The stroke log in paint order
    pub fn strokes(&self) -> &[Stroke] {
        &self.log
    }

    pub fn undo_stack(&self) -> &[usize] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Vec<Stroke>] {
        &self.redo_stack
    }

    /// Returns true if there are gestures that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are undone ranges that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
