//! Shared types for the parking facility

use serde::{Deserialize, Serialize};

/// Vehicle categories accepted by the facility
///
/// The set is closed: the fare table matches exhaustively over it, so a
/// category without a rate cannot compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
    Bike,
}

impl VehicleKind {
    /// Map an operator menu selection to a category (1 = Car, 2 = Bike)
    pub fn from_selection(selection: i32) -> Option<Self> {
        match selection {
            1 => Some(VehicleKind::Car),
            2 => Some(VehicleKind::Bike),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleKind::Car => "car",
            VehicleKind::Bike => "bike",
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Newtype wrapper for spot ids to provide type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SpotId(pub i32);

impl std::fmt::Display for SpotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A physical parking spot
///
/// Id and category are fixed for the lifetime of the facility; only the
/// availability flag mutates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParkingSpot {
    id: SpotId,
    kind: VehicleKind,
    available: bool,
}

impl ParkingSpot {
    pub fn new(id: SpotId, kind: VehicleKind, available: bool) -> Self {
        Self { id, kind, available }
    }

    #[inline]
    pub fn id(&self) -> SpotId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_selection() {
        assert_eq!(VehicleKind::from_selection(1), Some(VehicleKind::Car));
        assert_eq!(VehicleKind::from_selection(2), Some(VehicleKind::Bike));
        assert_eq!(VehicleKind::from_selection(0), None);
        assert_eq!(VehicleKind::from_selection(3), None);
        assert_eq!(VehicleKind::from_selection(-1), None);
    }

    #[test]
    fn test_kind_as_str() {
        assert_eq!(VehicleKind::Car.as_str(), "car");
        assert_eq!(VehicleKind::Bike.as_str(), "bike");
    }

    #[test]
    fn test_spot_availability_toggles() {
        let mut spot = ParkingSpot::new(SpotId(4), VehicleKind::Bike, true);
        assert_eq!(spot.id(), SpotId(4));
        assert_eq!(spot.kind(), VehicleKind::Bike);
        assert!(spot.is_available());

        spot.set_available(false);
        assert!(!spot.is_available());
        assert_eq!(spot.id(), SpotId(4));
        assert_eq!(spot.kind(), VehicleKind::Bike);
    }
}
