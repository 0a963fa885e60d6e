//! Satellite input records and the feed resource

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::satellite::SyncError;

/// One satellite as supplied by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteInfo {
    pub id: String,
    pub name: String,
    /// Inclination of the orbital plane in degrees
    pub angle: f32,
    /// Satellite type name, parsed into [`SatelliteKind`] when the scene is synchronized
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub reverse: bool,
}

impl SatelliteInfo {
    pub fn new(id: &str, name: &str, angle: f32, kind: SatelliteKind, reverse: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            angle,
            kind: kind.as_str().to_string(),
            reverse,
        }
    }

    pub fn parsed_kind(&self) -> Result<SatelliteKind, SyncError> {
        SatelliteKind::parse(&self.kind).ok_or_else(|| SyncError::UnknownSatelliteType {
            id: self.id.clone(),
            kind: self.kind.clone(),
        })
    }
}

/// Satellite type, selects the marker icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SatelliteKind {
    Communication,
    Military,
    Science,
}

impl SatelliteKind {
    pub const ALL: [SatelliteKind; 3] = [
        SatelliteKind::Communication,
        SatelliteKind::Military,
        SatelliteKind::Science,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SatelliteKind::Communication => "communication",
            SatelliteKind::Military => "military",
            SatelliteKind::Science => "science",
        }
    }

    /// Position in [`SatelliteKind::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for SatelliteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The inputs of the view: which satellites to show and which one is selected
///
/// Any mutable access marks the resource as changed, which triggers a full
/// rebuild of the satellite groups.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SatelliteFeed {
    pub satellites: Vec<SatelliteInfo>,
    pub selected: Option<String>,
}

impl SatelliteFeed {
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }
}

/// On-disk representation of a feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedFile {
    pub satellites: Vec<SatelliteInfo>,
    #[serde(default)]
    pub selected_satellite_id: Option<String>,
}

impl From<FeedFile> for SatelliteFeed {
    fn from(file: FeedFile) -> Self {
        Self {
            satellites: file.satellites,
            selected: file.selected_satellite_id,
        }
    }
}
