use serde::Serialize;

use groundops_catalog::{aggregate, filter, EquipmentCriteria, StatsRecord};
use groundops_core::models::{EquipmentRecord, EquipmentStatus};
use groundops_core::Catalog;

/// View state of the ground-support-equipment map and list.
#[derive(Debug, Clone)]
pub struct GseScreen {
    fleet: Catalog<EquipmentRecord>,
    criteria: EquipmentCriteria,
    focused: Option<u32>,
}

/// Camera target for the map when a unit is focused.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapFocus {
    pub equipment_id: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

const FOCUS_ZOOM: u8 = 18;

impl GseScreen {
    pub fn new(fleet: Catalog<EquipmentRecord>) -> Self {
        Self {
            fleet,
            criteria: EquipmentCriteria::default(),
            focused: None,
        }
    }

    pub fn fleet(&self) -> &Catalog<EquipmentRecord> {
        &self.fleet
    }

    pub fn criteria_mut(&mut self) -> &mut EquipmentCriteria {
        &mut self.criteria
    }

    pub fn visible(&self) -> Vec<EquipmentRecord> {
        filter(self.fleet.as_slice(), &self.criteria)
    }

    pub fn availability(&self) -> StatsRecord<EquipmentStatus> {
        aggregate(self.fleet.as_slice())
    }

    /// Focus a unit on the map. Unknown ids leave the current focus alone.
    pub fn focus(&mut self, equipment_id: u32) -> Option<MapFocus> {
        if !self.fleet.contains(&equipment_id) {
            tracing::debug!("Ignoring focus on unknown equipment {}", equipment_id);
            return None;
        }
        self.focused = Some(equipment_id);
        self.map_focus()
    }

    /// Camera target for the focused unit, if any.
    pub fn map_focus(&self) -> Option<MapFocus> {
        self.focused().map(|unit| MapFocus {
            equipment_id: unit.id,
            latitude: unit.coordinates.latitude,
            longitude: unit.coordinates.longitude,
            zoom: FOCUS_ZOOM,
        })
    }

    pub fn focused(&self) -> Option<&EquipmentRecord> {
        self.focused.and_then(|id| self.fleet.get(&id))
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }
}
