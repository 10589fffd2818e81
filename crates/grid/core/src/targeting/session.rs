use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::area::Area;
use crate::coord::Coordinate;
use crate::error::{ErrorSeverity, GridError};
use crate::grid::{Grid, TileState};

use super::{AreaFilter, PointerEvent, query_coordinates};

/// Configuration of a pick session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AreaPickData {
    /// Restricts which tiles may be picked as origin. `None` makes every tile eligible.
    pub origin_area: Option<Area>,
    /// Anchor of `origin_area`.
    pub origin_coordinate: Coordinate,
    /// Shape projected at the hovered or clicked tile.
    pub pick_area: Area,
    /// Filter applied to the tiles under `pick_area`.
    pub area_filter: AreaFilter,
    /// Filter an eligible tile's own pieces must pass to be committed.
    pub origin_filter: AreaFilter,
}

impl AreaPickData {
    pub fn new(pick_area: Area) -> Self {
        Self {
            origin_area: None,
            origin_coordinate: Coordinate::ORIGIN,
            pick_area,
            area_filter: AreaFilter::ANY,
            origin_filter: AreaFilter::ANY,
        }
    }

    #[must_use]
    pub fn with_origin(mut self, origin_area: Area, origin_coordinate: Coordinate) -> Self {
        self.origin_area = Some(origin_area);
        self.origin_coordinate = origin_coordinate;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, area_filter: AreaFilter) -> Self {
        self.area_filter = area_filter;
        self
    }

    #[must_use]
    pub fn with_origin_filter(mut self, origin_filter: AreaFilter) -> Self {
        self.origin_filter = origin_filter;
        self
    }
}

/// Result of a committed pick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickEvent {
    /// Tile that was clicked.
    pub origin: Coordinate,
    /// Anchor of the origin restriction the session was started with.
    pub area_origin: Coordinate,
    /// Filtered in-bounds tiles under the pick area anchored at `origin`.
    pub tiles: Vec<Coordinate>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    Previewing,
    Committed,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A pick session is already running on this board.
    #[error("A pick session is already active; stop it before starting another")]
    AlreadySelecting,
}

impl GridError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SessionError::AlreadySelecting => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SessionError::AlreadySelecting => "SESSION_ALREADY_SELECTING",
        }
    }
}

/// Flags added by the hover preview around one anchor.
#[derive(Debug)]
struct Preview {
    anchor: Coordinate,
    marks: Vec<(Coordinate, TileState)>,
}

type PickCallback = Box<dyn FnOnce(&PickEvent)>;

/// Hover-preview / click-commit workflow over a grid.
///
/// The session owns its observer registrations: one per eligible tile and
/// pointer event. Committing or cancelling detaches all of them at once and
/// restores the tile states recorded when the session began.
pub struct PickSession {
    data: AreaPickData,
    registrations: BTreeSet<(Coordinate, PointerEvent)>,
    snapshot: BTreeMap<Coordinate, TileState>,
    preview: Option<Preview>,
    phase: SessionPhase,
    on_pick: Option<PickCallback>,
}

impl PickSession {
    /// Marks eligible tiles and registers the session's observers on them.
    ///
    /// Eligible tiles whose own pieces fail the origin filter are marked
    /// `INVALID` instead of `SELECTABLE`.
    pub fn begin<G, F>(grid: &mut G, data: AreaPickData, on_pick: F) -> Self
    where
        G: Grid + ?Sized,
        F: FnOnce(&PickEvent) + 'static,
    {
        let eligible: Vec<Coordinate> = match &data.origin_area {
            Some(area) => area
                .resolve_absolute(data.origin_coordinate)
                .into_iter()
                .filter(|coordinate| grid.contains(*coordinate))
                .collect(),
            None => grid.dimensions().coordinates().collect(),
        };

        let mut registrations = BTreeSet::new();
        let mut snapshot = BTreeMap::new();
        for coordinate in eligible {
            let Some(tile) = grid.tile_mut(coordinate) else {
                continue;
            };
            snapshot.insert(coordinate, tile.state());
            let mark = if data.origin_filter.matches(tile.piece_id()) {
                TileState::SELECTABLE
            } else {
                TileState::INVALID
            };
            tile.set_state(mark);

            for event in [PointerEvent::Enter, PointerEvent::Exit, PointerEvent::Click] {
                registrations.insert((coordinate, event));
            }
        }

        tracing::debug!(
            eligible = snapshot.len(),
            pick_cells = data.pick_area.len(),
            "pick session started"
        );

        Self {
            data,
            registrations,
            snapshot,
            preview: None,
            phase: SessionPhase::Previewing,
            on_pick: Some(Box::new(on_pick)),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn data(&self) -> &AreaPickData {
        &self.data
    }

    pub fn is_registered(&self, coordinate: Coordinate, event: PointerEvent) -> bool {
        self.registrations.contains(&(coordinate, event))
    }

    pub fn registration_count(&self) -> usize {
        self.registrations.len()
    }

    /// Anchor of the preview currently shown, if any.
    pub fn preview_anchor(&self) -> Option<Coordinate> {
        self.preview.as_ref().map(|preview| preview.anchor)
    }

    /// Shows the pick area anchored at `anchor`: tiles passing the area
    /// filter gain `VALID`, the others `INVALID`.
    pub fn hover_enter<G>(&mut self, grid: &mut G, anchor: Coordinate)
    where
        G: Grid + ?Sized,
    {
        if !self.is_registered(anchor, PointerEvent::Enter) {
            return;
        }
        self.clear_preview(grid);

        let mut marks = Vec::new();
        for offset in self.data.pick_area.coordinates() {
            let coordinate = anchor + *offset;
            let Some(tile) = grid.tile_mut(coordinate) else {
                continue;
            };
            let flag = if self.data.area_filter.matches(tile.piece_id()) {
                TileState::VALID
            } else {
                TileState::INVALID
            };
            if !tile.state().contains(flag) {
                tile.add_state(flag);
                marks.push((coordinate, flag));
            }
        }

        tracing::trace!(%anchor, marked = marks.len(), "preview shown");
        self.preview = Some(Preview { anchor, marks });
    }

    /// Removes the preview anchored at `anchor`, leaving other flags alone.
    pub fn hover_exit<G>(&mut self, grid: &mut G, anchor: Coordinate)
    where
        G: Grid + ?Sized,
    {
        if !self.is_registered(anchor, PointerEvent::Exit) {
            return;
        }
        if self.preview_anchor() == Some(anchor) {
            self.clear_preview(grid);
        }
    }

    /// Commits the pick at `anchor` when it qualifies.
    ///
    /// A click is ignored when the tile is not registered, fails the origin
    /// filter, or no tile under the pick area passes the area filter. On
    /// commit every registration is detached, non-result tiles get their
    /// pre-session state back, result tiles keep their state plus `VALID`,
    /// and the callback runs once.
    pub fn click<G>(&mut self, grid: &mut G, anchor: Coordinate) -> Option<PickEvent>
    where
        G: Grid + ?Sized,
    {
        if !self.is_registered(anchor, PointerEvent::Click) {
            return None;
        }

        let origin_ok = grid
            .tile(anchor)
            .is_some_and(|tile| self.data.origin_filter.matches(tile.piece_id()));
        if !origin_ok {
            tracing::trace!(%anchor, "click on tile failing the origin filter ignored");
            return None;
        }

        let tiles = query_coordinates(grid, anchor, &self.data.pick_area, self.data.area_filter);
        if tiles.is_empty() {
            tracing::trace!(%anchor, "click without matching tiles ignored");
            return None;
        }

        self.clear_preview(grid);
        self.registrations.clear();

        let result: BTreeSet<Coordinate> = tiles.iter().copied().collect();
        for (coordinate, state) in std::mem::take(&mut self.snapshot) {
            if result.contains(&coordinate) {
                continue;
            }
            if let Some(tile) = grid.tile_mut(coordinate) {
                tile.set_state(state);
            }
        }
        for coordinate in &result {
            if let Some(tile) = grid.tile_mut(*coordinate) {
                tile.add_state(TileState::VALID);
            }
        }

        self.phase = SessionPhase::Committed;
        let event = PickEvent {
            origin: anchor,
            area_origin: self.data.origin_coordinate,
            tiles,
        };
        tracing::debug!(origin = %anchor, tiles = event.tiles.len(), "pick committed");

        if let Some(on_pick) = self.on_pick.take() {
            on_pick(&event);
        }
        Some(event)
    }

    /// Abandons the session: detaches every registration and restores the
    /// recorded tile states. The callback is dropped without running.
    pub fn cancel<G>(&mut self, grid: &mut G)
    where
        G: Grid + ?Sized,
    {
        if self.phase != SessionPhase::Previewing {
            return;
        }

        self.clear_preview(grid);
        self.registrations.clear();
        for (coordinate, state) in std::mem::take(&mut self.snapshot) {
            if let Some(tile) = grid.tile_mut(coordinate) {
                tile.set_state(state);
            }
        }
        self.on_pick = None;
        self.phase = SessionPhase::Idle;
        tracing::debug!("pick session cancelled");
    }

    fn clear_preview<G>(&mut self, grid: &mut G)
    where
        G: Grid + ?Sized,
    {
        let Some(preview) = self.preview.take() else {
            return;
        };
        for (coordinate, flag) in preview.marks {
            if let Some(tile) = grid.tile_mut(coordinate) {
                tile.remove_state(flag);
            }
        }
        tracing::trace!(anchor = %preview.anchor, "preview cleared");
    }
}

impl fmt::Debug for PickSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickSession")
            .field("phase", &self.phase)
            .field("registrations", &self.registrations.len())
            .field("preview", &self.preview_anchor())
            .finish_non_exhaustive()
    }
}
