//! The board store.
//!
//! The store is the single owner of the mutable board state. Gesture and
//! editing code talk to it through events and CRUD calls; renderers read
//! [`BoardStore::view`] and watch [`BoardStore::revision`].

use corkboard_config::{BoardConfig, DragMode};
use corkboard_protocol::{
    Board, Column, ColumnId, ColumnView, DragEndEvent, DragItem, DragStartEvent, FilterCriteria,
    Result, Task, TaskDraft, TaskId,
};
use tracing::{debug, instrument, warn};

/// Owns the current board, filter and active drag.
///
/// `revision` starts at zero and increases by one every time the board is
/// replaced by a different one. Filter changes do not touch it.
#[derive(Debug, Clone)]
pub struct BoardStore {
    board: Board,
    filter: FilterCriteria,
    active_drag: Option<DragItem>,
    revision: u64,
    drag_mode: DragMode,
}

impl BoardStore {
    /// Creates a store around `board` using [`DragMode::Lenient`].
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_protocol::Board;
    /// use corkboard_state::BoardStore;
    ///
    /// let store = BoardStore::new(Board::with_columns(["todo"]));
    /// assert_eq!(store.revision(), 0);
    /// assert!(store.active_drag().is_none());
    /// ```
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_drag_mode(board, DragMode::default())
    }

    /// Creates a store around `board` with an explicit drag mode.
    #[must_use]
    pub fn with_drag_mode(board: Board, drag_mode: DragMode) -> Self {
        Self {
            board,
            filter: FilterCriteria::default(),
            active_drag: None,
            revision: 0,
            drag_mode,
        }
    }

    /// Creates a store with an empty board laid out by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured columns do not validate.
    pub fn from_config(config: &BoardConfig) -> corkboard_config::Result<Self> {
        Ok(Self::with_drag_mode(config.build_board()?, config.drag_mode))
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the active filter.
    #[must_use]
    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    /// Returns the item being dragged, if a drag is in progress.
    #[must_use]
    pub fn active_drag(&self) -> Option<&DragItem> {
        self.active_drag.as_ref()
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn drag_mode(&self) -> DragMode {
        self.drag_mode
    }

    pub fn set_drag_mode(&mut self, drag_mode: DragMode) {
        self.drag_mode = drag_mode;
    }

    /// Consumes the store, returning the current board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Records the item being picked up.
    ///
    /// Only one drag exists at a time; an unfinished drag is replaced.
    #[instrument(skip(self))]
    pub fn drag_start(&mut self, event: DragStartEvent) {
        if let Some(previous) = self.active_drag.replace(event.active) {
            debug!(%previous, "replacing unfinished drag");
        }
    }

    /// Applies a finished drag and clears the active drag.
    ///
    /// Returns `true` if the board changed. Drags that reference items no
    /// longer on the board leave it untouched; in [`DragMode::Strict`] they
    /// are logged as warnings.
    #[instrument(skip(self))]
    pub fn drag_end(&mut self, event: DragEndEvent) -> bool {
        if let Some(started) = self.active_drag.take().filter(|item| item != &event.active) {
            debug!(%started, "drag ended on a different item than it started");
        }

        let next = match self.drag_mode {
            DragMode::Lenient => self.board.apply_drag_end(&event),
            DragMode::Strict => match self.board.try_apply_drag_end(&event) {
                Ok(next) => next,
                Err(error) => {
                    warn!(%error, "rejected drag");
                    return false;
                }
            },
        };
        self.replace(next)
    }

    /// Abandons the current drag, returning the item that was being dragged.
    pub fn drag_cancel(&mut self) -> Option<DragItem> {
        self.active_drag.take()
    }

    /// Adds a task to the end of `column`.
    ///
    /// # Errors
    ///
    /// Propagates [`Board::add_task`] errors; the board is unchanged.
    #[instrument(skip(self))]
    pub fn add_task(&mut self, column: &ColumnId, draft: TaskDraft) -> Result<TaskId> {
        let (next, id) = self.board.add_task(column, draft)?;
        self.replace(next);
        Ok(id)
    }

    /// Replaces a task's fields.
    ///
    /// # Errors
    ///
    /// Propagates [`Board::edit_task`] errors; the board is unchanged.
    #[instrument(skip(self, task), fields(task = %task.id))]
    pub fn edit_task(&mut self, task: Task) -> Result<()> {
        let next = self.board.edit_task(task)?;
        self.replace(next);
        Ok(())
    }

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Propagates [`Board::delete_task`] errors; the board is unchanged.
    #[instrument(skip(self))]
    pub fn delete_task(&mut self, id: &TaskId) -> Result<()> {
        let next = self.board.delete_task(id)?;
        self.replace(next);
        Ok(())
    }

    /// Appends an empty column and returns its id.
    #[instrument(skip(self))]
    pub fn add_column(&mut self, label_key: &str) -> ColumnId {
        let (next, id) = self.board.add_column(label_key);
        self.replace(next);
        id
    }

    /// Sets or clears a column's custom name.
    ///
    /// # Errors
    ///
    /// Propagates [`Board::rename_column`] errors; the board is unchanged.
    #[instrument(skip(self))]
    pub fn rename_column(&mut self, column: &ColumnId, name: Option<String>) -> Result<()> {
        let next = self.board.rename_column(column, name)?;
        self.replace(next);
        Ok(())
    }

    /// Removes a column with its tasks, returning how many tasks went with it.
    ///
    /// # Errors
    ///
    /// Propagates [`Board::delete_column`] errors; the board is unchanged.
    #[instrument(skip(self))]
    pub fn delete_column(&mut self, column: &ColumnId) -> Result<usize> {
        let removed = self.board.column(column).map_or(0, Column::len);
        let next = self.board.delete_column(column)?;
        self.replace(next);
        Ok(removed)
    }

    /// Replaces the active filter.
    pub fn apply_filter(&mut self, criteria: FilterCriteria) {
        debug!(active = criteria.active_count(), "filter applied");
        self.filter = criteria;
    }

    /// Clears every filter criterion.
    pub fn reset_filter(&mut self) {
        self.filter = FilterCriteria::default();
    }

    /// Returns the current board as seen through the active filter.
    #[must_use]
    pub fn view(&self) -> Vec<ColumnView<'_>> {
        self.board.filtered_view(&self.filter)
    }

    fn replace(&mut self, next: Board) -> bool {
        if next == self.board {
            return false;
        }

        self.board = next;
        self.revision += 1;
        debug!(revision = self.revision, tasks = self.board.total_tasks(), "board replaced");

        if self.active_drag.as_ref().is_some_and(|item| !self.contains(item)) {
            debug!("active drag no longer on the board");
            self.active_drag = None;
        }
        true
    }

    fn contains(&self, item: &DragItem) -> bool {
        match item {
            DragItem::Task(id) => self.board.task(id).is_some(),
            DragItem::Column(id) => self.board.column(id).is_some(),
        }
    }
}
