//! Observer settings: display name, bio, role, and home area.
//!
//! Stored as one JSON document under a fixed store key. The role and area
//! codes are the wire values the rest of the app already uses; unknown
//! codes from older clients fold to the catch-all variants instead of
//! failing the load.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::constants::SETTINGS_STORE_KEY;
use crate::store::LocalStore;

/// The observer's relationship to campus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObserverRole {
    #[default]
    UscUndergrad,
    UscGraduate,
    UscFaculty,
    UscStaff,
    Tourist,
    Resident,
    #[serde(other)]
    Other,
}

impl ObserverRole {
    /// Human-readable label for display surfaces.
    pub fn label(self) -> &'static str {
        match self {
            Self::UscUndergrad => "USC Student (Undergraduate)",
            Self::UscGraduate => "USC Student (Graduate)",
            Self::UscFaculty => "USC Faculty",
            Self::UscStaff => "USC Staff",
            Self::Tourist => "Tourist",
            Self::Resident => "Local Resident",
            Self::Other => "Other",
        }
    }
}

/// Where the observer lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeArea {
    #[default]
    La,
    Pasadena,
    Irvine,
    #[serde(rename = "sandiego")]
    SanDiego,
    #[serde(rename = "bayarea")]
    BayArea,
    #[serde(rename = "other_ca")]
    OtherCalifornia,
    #[serde(rename = "outside_ca")]
    OutsideCalifornia,
    #[serde(other)]
    Unknown,
}

impl HomeArea {
    pub fn label(self) -> &'static str {
        match self {
            Self::La => "Los Angeles",
            Self::Pasadena => "Pasadena",
            Self::Irvine => "Irvine",
            Self::SanDiego => "San Diego",
            Self::BayArea => "Bay Area",
            Self::OtherCalifornia => "Other Cities in California",
            Self::OutsideCalifornia => "Outside California",
            Self::Unknown => "(none)",
        }
    }
}

/// The settings page's form state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ObserverSettings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub role: ObserverRole,
    #[serde(default)]
    pub home_area: HomeArea,
}

impl ObserverSettings {
    /// Reload persisted settings; an absent key yields the defaults.
    pub fn load(store: &dyn LocalStore) -> Result<Self> {
        match store.get(SETTINGS_STORE_KEY)? {
            Some(payload) => Ok(serde_json::from_str(&payload)?),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, store: &mut dyn LocalStore) -> Result<()> {
        let payload = serde_json::to_string(self)?;
        store.set(SETTINGS_STORE_KEY, &payload)
    }
}
