//! Installation entity and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::status::{InstallationStatus, SystemType};
use crate::types::{nullable, EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs
// ---------------------------------------------------------------------------

/// A row of identical panels mounted at a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub brand: String,
    pub model: String,
    pub wattage: u32,
    pub qty: u32,
}

impl Panel {
    /// A panel row with an empty brand/model or a zero wattage/quantity is
    /// an unfilled form row and is not stored.
    pub fn is_complete(&self) -> bool {
        !self.brand.trim().is_empty()
            && !self.model.trim().is_empty()
            && self.wattage > 0
            && self.qty > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inverter {
    pub brand: String,
    pub model: String,
    pub serial: String,
}

/// A physical solar power system at a client site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installation {
    pub id: EntityId,
    pub company_id: String,
    pub client_name: String,
    pub site_name: String,
    pub address: String,
    pub city: String,
    pub lat: f64,
    pub lng: f64,
    pub system_type: SystemType,
    pub panels: Vec<Panel>,
    pub inverter: Inverter,
    pub installed_at: Timestamp,
    pub status: InstallationStatus,
    pub assigned_technician_id: Option<EntityId>,
}

impl Installation {
    /// Total nameplate capacity in watts.
    pub fn capacity_watts(&self) -> u64 {
        self.panels
            .iter()
            .map(|p| u64::from(p.wattage) * u64::from(p.qty))
            .sum()
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating an installation. Everything except the id.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstallation {
    pub company_id: String,
    #[validate(length(min = 1, message = "clientName must not be empty"))]
    pub client_name: String,
    #[validate(length(min = 1, message = "siteName must not be empty"))]
    pub site_name: String,
    pub address: String,
    pub city: String,
    #[validate(range(min = -90.0, max = 90.0, message = "lat must be within [-90, 90]"))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "lng must be within [-180, 180]"))]
    pub lng: f64,
    pub system_type: SystemType,
    #[serde(default)]
    pub panels: Vec<Panel>,
    pub inverter: Inverter,
    pub installed_at: Timestamp,
    pub status: InstallationStatus,
    #[serde(default)]
    pub assigned_technician_id: Option<EntityId>,
}

impl CreateInstallation {
    /// Build the stored record under the given id.
    pub fn into_installation(self, id: EntityId) -> Installation {
        Installation {
            id,
            company_id: self.company_id,
            client_name: self.client_name,
            site_name: self.site_name,
            address: self.address,
            city: self.city,
            lat: self.lat,
            lng: self.lng,
            system_type: self.system_type,
            panels: self.panels,
            inverter: self.inverter,
            installed_at: self.installed_at,
            status: self.status,
            assigned_technician_id: self.assigned_technician_id,
        }
    }
}

/// DTO for a partial installation update. Absent fields are left untouched;
/// `assignedTechnicianId: null` unassigns.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstallation {
    pub company_id: Option<String>,
    #[validate(length(min = 1, message = "clientName must not be empty"))]
    pub client_name: Option<String>,
    #[validate(length(min = 1, message = "siteName must not be empty"))]
    pub site_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "lat must be within [-90, 90]"))]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "lng must be within [-180, 180]"))]
    pub lng: Option<f64>,
    pub system_type: Option<SystemType>,
    pub panels: Option<Vec<Panel>>,
    pub inverter: Option<Inverter>,
    pub installed_at: Option<Timestamp>,
    pub status: Option<InstallationStatus>,
    #[serde(default, deserialize_with = "nullable")]
    pub assigned_technician_id: Option<Option<EntityId>>,
}

impl UpdateInstallation {
    /// Shallow-merge the present fields into `target`.
    pub fn apply_to(self, target: &mut Installation) {
        if let Some(v) = self.company_id {
            target.company_id = v;
        }
        if let Some(v) = self.client_name {
            target.client_name = v;
        }
        if let Some(v) = self.site_name {
            target.site_name = v;
        }
        if let Some(v) = self.address {
            target.address = v;
        }
        if let Some(v) = self.city {
            target.city = v;
        }
        if let Some(v) = self.lat {
            target.lat = v;
        }
        if let Some(v) = self.lng {
            target.lng = v;
        }
        if let Some(v) = self.system_type {
            target.system_type = v;
        }
        if let Some(v) = self.panels {
            target.panels = v;
        }
        if let Some(v) = self.inverter {
            target.inverter = v;
        }
        if let Some(v) = self.installed_at {
            target.installed_at = v;
        }
        if let Some(v) = self.status {
            target.status = v;
        }
        if let Some(v) = self.assigned_technician_id {
            target.assigned_technician_id = v;
        }
    }
}
