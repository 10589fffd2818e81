use std::fmt;

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::config::GridConfig;
use crate::coord::Coordinate;

use super::TileError;

bitflags! {
    /// Piece type tags. A tile's piece id is the OR of the tags of everything
    /// placed on it, or [`PieceType::NONE`] when it is empty.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PieceType: u32 {
        const NONE         = 1;
        const GENERIC      = 1 << 1;
        const ENTITY       = 1 << 2;
        const DESTRUCTIBLE = 1 << 3;
        const UNIT         = 1 << 4;
        const ALL          = 255;
    }
}

/// Stable identifier for a piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceHandle(pub u32);

impl fmt::Display for PieceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Closed set of capabilities a piece can carry.
///
/// Each characteristic contributes modifier bits to the piece's id; at most
/// one characteristic of each [`CharacteristicKind`] may be attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Characteristic {
    /// Something that acts on the board.
    Entity,
    /// Can be damaged and removed.
    Destructible { durability: u32 },
    /// Controllable unit with a movement allowance.
    Unit { movement: u32 },
    /// Free-form tag bits for game-specific filters.
    Tag { bits: u32 },
}

/// Variant tag of a [`Characteristic`], used for typed lookup.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CharacteristicKind {
    Entity,
    Destructible,
    Unit,
    Tag,
}

impl Characteristic {
    pub fn kind(&self) -> CharacteristicKind {
        match self {
            Characteristic::Entity => CharacteristicKind::Entity,
            Characteristic::Destructible { .. } => CharacteristicKind::Destructible,
            Characteristic::Unit { .. } => CharacteristicKind::Unit,
            Characteristic::Tag { .. } => CharacteristicKind::Tag,
        }
    }

    /// Bits this characteristic ORs into the piece id.
    pub fn id_modifier(&self) -> PieceType {
        match self {
            Characteristic::Entity => PieceType::ENTITY,
            Characteristic::Destructible { .. } => PieceType::DESTRUCTIBLE,
            Characteristic::Unit { .. } => PieceType::UNIT | PieceType::ENTITY,
            Characteristic::Tag { bits } => PieceType::from_bits_retain(*bits),
        }
    }

    pub fn modify_id(&self, id: PieceType) -> PieceType {
        id | self.id_modifier()
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Characteristic::Entity => write!(f, "entity"),
            Characteristic::Destructible { durability } => {
                write!(f, "destructible (durability {durability})")
            }
            Characteristic::Unit { movement } => write!(f, "unit (movement {movement})"),
            Characteristic::Tag { bits } => write!(f, "tag ({bits:#x})"),
        }
    }
}

type CharacteristicSlots = ArrayVec<Characteristic, { GridConfig::MAX_CHARACTERISTICS }>;

/// Something placed on a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    handle: PieceHandle,
    name: String,
    coordinate: Coordinate,
    characteristics: CharacteristicSlots,
}

impl Piece {
    pub fn new(handle: PieceHandle, name: impl Into<String>) -> Self {
        Self {
            handle,
            name: name.into(),
            coordinate: Coordinate::ORIGIN,
            characteristics: CharacteristicSlots::new(),
        }
    }

    /// Builder variant of [`Piece::add_characteristic`] for fixtures and loaders.
    pub fn with_characteristic(
        mut self,
        characteristic: Characteristic,
    ) -> Result<Self, TileError> {
        self.add_characteristic(characteristic)?;
        Ok(self)
    }

    pub fn handle(&self) -> PieceHandle {
        self.handle
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub(crate) fn set_coordinate(&mut self, coordinate: Coordinate) {
        self.coordinate = coordinate;
    }

    /// Effective id: `GENERIC` with every characteristic's modifier applied
    /// in attachment order.
    pub fn id(&self) -> PieceType {
        self.characteristics
            .iter()
            .fold(PieceType::GENERIC, |id, characteristic| characteristic.modify_id(id))
    }

    pub fn characteristics(&self) -> &[Characteristic] {
        &self.characteristics
    }

    /// Attaches a characteristic, rejecting a second one of the same kind.
    pub fn add_characteristic(&mut self, characteristic: Characteristic) -> Result<(), TileError> {
        let kind = characteristic.kind();
        if self.characteristic(kind).is_some() {
            tracing::warn!(piece = %self.handle, %kind, "characteristic already attached");
            return Err(TileError::DuplicateCharacteristic {
                piece: self.handle,
                kind,
            });
        }

        self.characteristics
            .try_push(characteristic)
            .map_err(|_| TileError::CharacteristicsFull {
                piece: self.handle,
                max: GridConfig::MAX_CHARACTERISTICS,
            })
    }

    /// First attached characteristic of the given kind.
    pub fn characteristic(&self, kind: CharacteristicKind) -> Option<&Characteristic> {
        self.characteristics
            .iter()
            .find(|characteristic| characteristic.kind() == kind)
    }

    pub fn has(&self, kind: CharacteristicKind) -> bool {
        self.characteristic(kind).is_some()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.coordinate)?;
        for characteristic in &self.characteristics {
            write!(f, "\n{characteristic}")?;
        }
        Ok(())
    }
}
