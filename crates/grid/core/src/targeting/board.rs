use std::collections::BTreeMap;
use std::fmt;

use crate::area::Area;
use crate::coord::Coordinate;
use crate::grid::{Grid, Piece, PieceHandle, Tile, TileState};

use super::{AreaFilter, AreaPickData, PickEvent, PickSession, SessionError, query_tiles};

/// Pointer interaction delivered to a tile.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PointerEvent {
    Enter,
    Exit,
    Click,
}

type GridListener = Box<dyn FnMut(PointerEvent, Coordinate, &Tile)>;
type PieceListener = Box<dyn FnMut(PointerEvent, &Piece, &Tile)>;

/// A grid together with its pointer dispatch and the active pick session.
///
/// Every pointer event on a tile is delivered in a fixed order: listeners of
/// the pieces on that tile, then the tile itself (the session's observers and
/// hovered-tile tracking), then the grid-level listeners.
pub struct Board<G: Grid> {
    grid: G,
    hovered: Option<Coordinate>,
    session: Option<PickSession>,
    grid_listeners: Vec<GridListener>,
    piece_listeners: BTreeMap<PieceHandle, Vec<PieceListener>>,
}

impl<G: Grid> Board<G> {
    pub fn new(grid: G) -> Self {
        Self {
            grid,
            hovered: None,
            session: None,
            grid_listeners: Vec::new(),
            piece_listeners: BTreeMap::new(),
        }
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    pub fn into_grid(self) -> G {
        self.grid
    }

    /// Tile currently under the pointer.
    pub fn hovered(&self) -> Option<Coordinate> {
        self.hovered
    }

    pub fn is_selecting(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&PickSession> {
        self.session.as_ref()
    }

    /// Registers a listener that sees every pointer event on any tile.
    pub fn on_pointer<F>(&mut self, listener: F)
    where
        F: FnMut(PointerEvent, Coordinate, &Tile) + 'static,
    {
        self.grid_listeners.push(Box::new(listener));
    }

    /// Registers a listener for pointer events on whichever tile holds `piece`.
    pub fn on_piece<F>(&mut self, piece: PieceHandle, listener: F)
    where
        F: FnMut(PointerEvent, &Piece, &Tile) + 'static,
    {
        self.piece_listeners
            .entry(piece)
            .or_default()
            .push(Box::new(listener));
    }

    pub fn query_tiles<'a>(
        &'a self,
        origin: Coordinate,
        area: &'a Area,
        filter: AreaFilter,
    ) -> impl Iterator<Item = (Coordinate, &'a Tile)> + 'a {
        query_tiles(&self.grid, origin, area, filter)
    }

    pub fn enter(&mut self, coordinate: Coordinate) -> Option<PickEvent> {
        self.pointer(PointerEvent::Enter, coordinate)
    }

    pub fn exit(&mut self, coordinate: Coordinate) -> Option<PickEvent> {
        self.pointer(PointerEvent::Exit, coordinate)
    }

    pub fn click(&mut self, coordinate: Coordinate) -> Option<PickEvent> {
        self.pointer(PointerEvent::Click, coordinate)
    }

    /// Delivers a pointer event. Returns the pick result when the event
    /// committed the active session. Events outside the grid are dropped.
    pub fn pointer(&mut self, event: PointerEvent, coordinate: Coordinate) -> Option<PickEvent> {
        let tile = self.grid.tile(coordinate)?;
        for piece in tile.pieces() {
            if let Some(listeners) = self.piece_listeners.get_mut(&piece.handle()) {
                for listener in listeners.iter_mut() {
                    listener(event, piece, tile);
                }
            }
        }

        let picked = self.dispatch_tile(event, coordinate);

        if let Some(tile) = self.grid.tile(coordinate) {
            for listener in &mut self.grid_listeners {
                listener(event, coordinate, tile);
            }
        }
        picked
    }

    fn dispatch_tile(&mut self, event: PointerEvent, coordinate: Coordinate) -> Option<PickEvent> {
        match event {
            PointerEvent::Enter => self.hovered = Some(coordinate),
            PointerEvent::Exit if self.hovered == Some(coordinate) => self.hovered = None,
            PointerEvent::Exit | PointerEvent::Click => {}
        }

        let session = self.session.as_mut()?;
        match event {
            PointerEvent::Enter => {
                session.hover_enter(&mut self.grid, coordinate);
                None
            }
            PointerEvent::Exit => {
                session.hover_exit(&mut self.grid, coordinate);
                None
            }
            PointerEvent::Click => {
                let picked = session.click(&mut self.grid, coordinate);
                if picked.is_some() {
                    self.session = None;
                }
                picked
            }
        }
    }

    /// Starts a pick session. If the pointer already rests on an eligible
    /// tile, its preview is shown right away.
    pub fn begin_pick_session<F>(
        &mut self,
        data: AreaPickData,
        on_pick: F,
    ) -> Result<(), SessionError>
    where
        F: FnOnce(&PickEvent) + 'static,
    {
        if self.session.is_some() {
            tracing::warn!("pick session requested while another is active");
            return Err(SessionError::AlreadySelecting);
        }

        let mut session = PickSession::begin(&mut self.grid, data, on_pick);
        if let Some(hovered) = self.hovered {
            session.hover_enter(&mut self.grid, hovered);
        }
        self.session = Some(session);
        Ok(())
    }

    /// Ends any selection: cancels the active session and resets every tile
    /// to `GENERIC`. Calling it again changes nothing.
    pub fn stop_selecting(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.cancel(&mut self.grid);
        }
        self.grid.reset_states(TileState::GENERIC);
        tracing::debug!("selection stopped");
    }
}

impl<G: Grid + fmt::Debug> fmt::Debug for Board<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("grid", &self.grid)
            .field("hovered", &self.hovered)
            .field("session", &self.session)
            .field("grid_listeners", &self.grid_listeners.len())
            .field("piece_listeners", &self.piece_listeners.len())
            .finish()
    }
}
