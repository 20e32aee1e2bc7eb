//! In-memory spot inventory
//!
//! The facility layout is fixed at construction: car spots first, then
//! bike spots, numbered sequentially from 1 (the lot's painted numbers).
//! Allocation always hands out the lowest-numbered free spot of a
//! category.

use crate::domain::types::{ParkingSpot, SpotId, VehicleKind};
use crate::services::session::SpotInventory;
use tracing::{info, warn};

pub struct InMemorySpotInventory {
    spots: Vec<ParkingSpot>,
}

impl InMemorySpotInventory {
    /// Build the facility layout from per-category capacities
    pub fn new(car_spots: u32, bike_spots: u32) -> Self {
        let mut spots = Vec::with_capacity((car_spots + bike_spots) as usize);
        let mut next_id = 1;
        for _ in 0..car_spots {
            spots.push(ParkingSpot::new(SpotId(next_id), VehicleKind::Car, true));
            next_id += 1;
        }
        for _ in 0..bike_spots {
            spots.push(ParkingSpot::new(SpotId(next_id), VehicleKind::Bike, true));
            next_id += 1;
        }

        info!(car_spots = %car_spots, bike_spots = %bike_spots, "inventory_initialized");
        Self { spots }
    }

    /// Free spots remaining for a category
    pub fn free_count(&self, kind: VehicleKind) -> usize {
        self.spots.iter().filter(|s| s.kind() == kind && s.is_available()).count()
    }

    fn set_availability(&mut self, id: SpotId, kind: VehicleKind, available: bool) {
        match self.spots.iter_mut().find(|s| s.id() == id && s.kind() == kind) {
            Some(spot) => spot.set_available(available),
            None => warn!(spot = %id, kind = %kind, "unknown_spot_ignored"),
        }
    }
}

impl SpotInventory for InMemorySpotInventory {
    fn next_available(&self, kind: VehicleKind) -> i32 {
        self.spots
            .iter()
            .find(|s| s.kind() == kind && s.is_available())
            .map(|s| s.id().0)
            .unwrap_or(0)
    }

    fn mark_occupied(&mut self, id: SpotId, kind: VehicleKind) {
        self.set_availability(id, kind, false);
    }

    fn mark_available(&mut self, id: SpotId, kind: VehicleKind) {
        self.set_availability(id, kind, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spots_numbered_cars_first() {
        let inventory = InMemorySpotInventory::new(3, 2);

        assert_eq!(inventory.next_available(VehicleKind::Car), 1);
        assert_eq!(inventory.next_available(VehicleKind::Bike), 4);
    }

    #[test]
    fn test_lowest_free_spot_wins() {
        let mut inventory = InMemorySpotInventory::new(3, 0);

        inventory.mark_occupied(SpotId(1), VehicleKind::Car);
        assert_eq!(inventory.next_available(VehicleKind::Car), 2);

        inventory.mark_occupied(SpotId(2), VehicleKind::Car);
        assert_eq!(inventory.next_available(VehicleKind::Car), 3);
    }

    #[test]
    fn test_exhausted_category_yields_sentinel() {
        let mut inventory = InMemorySpotInventory::new(1, 1);

        inventory.mark_occupied(SpotId(1), VehicleKind::Car);

        assert_eq!(inventory.next_available(VehicleKind::Car), 0);
        // The other category is unaffected
        assert_eq!(inventory.next_available(VehicleKind::Bike), 2);
    }

    #[test]
    fn test_freed_spot_returns_to_circulation() {
        let mut inventory = InMemorySpotInventory::new(2, 0);

        inventory.mark_occupied(SpotId(1), VehicleKind::Car);
        inventory.mark_occupied(SpotId(2), VehicleKind::Car);
        assert_eq!(inventory.next_available(VehicleKind::Car), 0);

        inventory.mark_available(SpotId(1), VehicleKind::Car);
        assert_eq!(inventory.next_available(VehicleKind::Car), 1);
        assert_eq!(inventory.free_count(VehicleKind::Car), 1);
    }

    #[test]
    fn test_unknown_spot_is_ignored() {
        let mut inventory = InMemorySpotInventory::new(1, 0);

        // Wrong id and wrong category are both no-ops
        inventory.mark_occupied(SpotId(99), VehicleKind::Car);
        inventory.mark_occupied(SpotId(1), VehicleKind::Bike);

        assert_eq!(inventory.next_available(VehicleKind::Car), 1);
    }
}
