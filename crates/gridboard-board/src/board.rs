//! The [`Board`]: cell storage, coordinate lookup and range queries.

use std::cell::RefCell;
use std::fmt;

use gridboard_core::{BoardInstanceId, Orientation, OrientationConverter, Vector};

use crate::boundary::{BoundaryRule, FnRule};
use crate::config::BoardConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::region::Rect;

/// Per-cell payload storage.
///
/// Slots use interior mutability so that pieces can move between any two
/// cells reachable through shared [`Grid`] views, including cells of a
/// board stitched on through a [`BoundaryRule`].
pub(crate) struct Slot<P, S> {
    pub(crate) piece: RefCell<Option<P>>,
    pub(crate) state: RefCell<Option<S>>,
}

impl<P, S> Slot<P, S> {
    fn empty() -> Self {
        Self {
            piece: RefCell::new(None),
            state: RefCell::new(None),
        }
    }
}

/// A `width × height` board of cells.
///
/// Each cell is addressed by `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`, and stored at index `x * height + y`. Cells hold an
/// optional piece of type `P` and, when the board was built with state
/// tracking, an optional state of type `S`.
///
/// All lookups return `Option`: coordinates that fall outside the board
/// and are not claimed by any installed [`BoundaryRule`] resolve to `None`.
///
/// The board is single-threaded: cell slots use [`RefCell`], so holding a
/// borrow from [`Grid::piece`] while moving that piece panics, as with any
/// `RefCell`.
///
/// # Examples
///
/// ```
/// use gridboard_board::Board;
///
/// let board: Board<&str> = Board::new(3, 3).unwrap();
/// board.cell_at(1, 1).unwrap().set_piece("P");
///
/// let centre = board.cell_at(1, 1).unwrap();
/// let east = centre.neighbor_by_offset(1, 0).unwrap();
/// assert_eq!((east.x(), east.y()), (2, 1));
/// assert!(centre.neighbor_by_offset(2, 0).is_none());
/// ```
pub struct Board<P, S = ()> {
    width: u32,
    height: u32,
    slots: Vec<Slot<P, S>>,
    orientation: Orientation,
    boundaries: Vec<Box<dyn BoundaryRule<P, S>>>,
    tracks_state: bool,
    instance_id: BoardInstanceId,
}

impl<P, S> Board<P, S> {
    /// Create a `width × height` board without per-cell state.
    ///
    /// Returns `Err(ConfigError::EmptyBoard)` if either dimension is 0, or
    /// `Err(ConfigError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        Self::from_config(BoardConfig::new(width, height))
    }

    /// Create a `width × height` board whose cells carry a state slot.
    pub fn with_state(width: u32, height: u32) -> Result<Self, ConfigError> {
        Self::from_config(BoardConfig::new(width, height).track_state(true))
    }

    /// Validate `config` and construct the board with every cell present.
    pub fn from_config(config: BoardConfig) -> Result<Self, ConfigError> {
        let len = config.validate()?;
        let mut board = Self {
            width: config.width,
            height: config.height,
            slots: (0..len).map(|_| Slot::empty()).collect(),
            orientation: config.orientation,
            boundaries: Vec::new(),
            tracks_state: config.track_state,
            instance_id: BoardInstanceId::next(),
        };
        config.edge.install(&mut board);
        Ok(board)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells, `width * height`.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always returns `false`: construction rejects empty boards.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether cells carry a state slot.
    pub fn tracks_state(&self) -> bool {
        self.tracks_state
    }

    /// Unique identity of this board.
    pub fn instance_id(&self) -> BoardInstanceId {
        self.instance_id
    }

    /// The orientation used by the `*_oriented` accessors.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Change the orientation used by the `*_oriented` accessors.
    ///
    /// Stored cells are not touched.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// A coordinate converter for `orientation` on this board.
    pub fn converter(&self, orientation: Orientation) -> OrientationConverter {
        OrientationConverter::new(self.width, self.height, orientation)
    }

    pub(crate) fn slot(&self, index: usize) -> &Slot<P, S> {
        &self.slots[index]
    }

    /// Storage index of `(x, y)`, or `None` if it lies off the board.
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(x as usize * self.height as usize + y as usize)
    }

    /// Coordinate of the cell stored at `index`.
    pub fn position_of(&self, index: usize) -> Option<Vector> {
        if index >= self.slots.len() {
            return None;
        }
        let h = self.height as usize;
        Some(Vector::new((index / h) as i32, (index % h) as i32))
    }

    /// The cell stored at `index`.
    pub fn grid(&self, index: usize) -> Option<Grid<'_, P, S>> {
        (index < self.slots.len()).then(|| Grid::new(self, index))
    }

    /// The cell at `(x, y)` if it lies on this board, ignoring boundary rules.
    pub fn cell_in_bounds(&self, x: i32, y: i32) -> Option<Grid<'_, P, S>> {
        self.index_of(x, y).map(|i| Grid::new(self, i))
    }

    /// The cell at `(x, y)`.
    ///
    /// Off-board coordinates are offered to each boundary rule in
    /// registration order and the first cell returned wins. With no rules
    /// installed, off-board coordinates resolve to `None`.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Grid<'_, P, S>> {
        if let Some(grid) = self.cell_in_bounds(x, y) {
            return Some(grid);
        }
        self.boundaries
            .iter()
            .find_map(|rule| rule.resolve(x, y, self))
    }

    /// The cell at `(x, y)` read through the board's orientation.
    pub fn cell_at_oriented(&self, x: i32, y: i32) -> Option<Grid<'_, P, S>> {
        self.cell_at_in(self.orientation, x, y)
    }

    /// The cell at `(x, y)` read through `orientation`.
    pub fn cell_at_in(&self, orientation: Orientation, x: i32, y: i32) -> Option<Grid<'_, P, S>> {
        let p = self.converter(orientation).convert_absolute(x, y);
        self.cell_at(p.x, p.y)
    }

    /// Every coordinate of the inclusive rectangle from `(start_x, start_y)`
    /// to `(end_x, end_y)`, x-major.
    ///
    /// Each axis is walked ascending or descending depending on whether
    /// its start exceeds its end. Coordinates that resolve to no cell are
    /// kept as `None` so positions in the result stay aligned.
    pub fn cells_in_range(
        &self,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
    ) -> Vec<Option<Grid<'_, P, S>>> {
        Rect::new(start_x, start_y, end_x, end_y)
            .coords()
            .map(|p| self.cell_at(p.x, p.y))
            .collect()
    }

    /// [`cells_in_range`](Self::cells_in_range) read through the board's orientation.
    pub fn cells_in_range_oriented(
        &self,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
    ) -> Vec<Option<Grid<'_, P, S>>> {
        self.cells_in_range_in(self.orientation, start_x, start_y, end_x, end_y)
    }

    /// [`cells_in_range`](Self::cells_in_range) read through `orientation`.
    pub fn cells_in_range_in(
        &self,
        orientation: Orientation,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
    ) -> Vec<Option<Grid<'_, P, S>>> {
        let conv = self.converter(orientation);
        Rect::new(start_x, start_y, end_x, end_y)
            .coords()
            .map(|p| {
                let q = conv.convert_absolute(p.x, p.y);
                self.cell_at(q.x, q.y)
            })
            .collect()
    }

    /// Every cell with the given x, top to bottom.
    ///
    /// An off-board `x` yields only the cells boundary rules resolve.
    pub fn column(&self, x: i32) -> Vec<Grid<'_, P, S>> {
        (0..self.height as i32)
            .filter_map(|y| self.cell_at(x, y))
            .collect()
    }

    /// Every cell with the given y, left to right.
    pub fn row(&self, y: i32) -> Vec<Grid<'_, P, S>> {
        (0..self.width as i32)
            .filter_map(|x| self.cell_at(x, y))
            .collect()
    }

    /// Column `x` of the view through the board's orientation.
    pub fn column_oriented(&self, x: i32) -> Vec<Grid<'_, P, S>> {
        self.column_in(self.orientation, x)
    }

    /// Row `y` of the view through the board's orientation.
    pub fn row_oriented(&self, y: i32) -> Vec<Grid<'_, P, S>> {
        self.row_in(self.orientation, y)
    }

    /// Column `x` of the view through `orientation`.
    ///
    /// The view's extents are swapped relative to the board when the
    /// orientation swaps axes.
    pub fn column_in(&self, orientation: Orientation, x: i32) -> Vec<Grid<'_, P, S>> {
        let (_, view_height) = self.converter(orientation).view_extents();
        (0..view_height as i32)
            .filter_map(|y| self.cell_at_in(orientation, x, y))
            .collect()
    }

    /// Row `y` of the view through `orientation`.
    pub fn row_in(&self, orientation: Orientation, y: i32) -> Vec<Grid<'_, P, S>> {
        let (view_width, _) = self.converter(orientation).view_extents();
        (0..view_width as i32)
            .filter_map(|x| self.cell_at_in(orientation, x, y))
            .collect()
    }

    /// All cells in storage order.
    pub fn iter(&self) -> impl Iterator<Item = Grid<'_, P, S>> {
        (0..self.slots.len()).map(move |i| Grid::new(self, i))
    }

    /// Remove every piece, leaving states untouched.
    pub fn clear(&self) {
        for slot in &self.slots {
            slot.piece.borrow_mut().take();
        }
    }

    /// Append a boundary rule. Rules are consulted in registration order.
    pub fn add_boundary<R>(&mut self, rule: R)
    where
        R: BoundaryRule<P, S> + 'static,
    {
        self.boundaries.push(Box::new(rule));
    }

    /// Append a boundary rule written as a closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridboard_board::Board;
    ///
    /// // Wrap horizontally only: a cylinder.
    /// let mut board: Board<u8> = Board::new(4, 3).unwrap();
    /// board.add_boundary_fn(|x, y, b| b.cell_in_bounds(x.rem_euclid(4), y));
    ///
    /// assert_eq!(board.cell_at(-1, 2).unwrap().x(), 3);
    /// assert!(board.cell_at(0, -1).is_none());
    /// ```
    pub fn add_boundary_fn<F>(&mut self, rule: F)
    where
        F: for<'a> Fn(i32, i32, &'a Board<P, S>) -> Option<Grid<'a, P, S>> + 'static,
    {
        self.boundaries.push(Box::new(FnRule(rule)));
    }

    /// Number of installed boundary rules.
    pub fn boundary_count(&self) -> usize {
        self.boundaries.len()
    }

    /// Remove every boundary rule, restoring plain absorbing edges.
    pub fn clear_boundaries(&mut self) {
        self.boundaries.clear();
    }
}

impl<P, S> fmt::Debug for Board<P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("orientation", &self.orientation)
            .field("boundaries", &self.boundaries.len())
            .field("tracks_state", &self.tracks_state)
            .field("instance_id", &self.instance_id)
            .finish()
    }
}
