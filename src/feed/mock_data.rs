//! Built-in demo satellites, shown when no feed file is available

use crate::feed::types::{SatelliteFeed, SatelliteInfo, SatelliteKind};

pub fn demo_feed() -> SatelliteFeed {
    SatelliteFeed {
        satellites: vec![
            SatelliteInfo::new("sat-1", "Relay One", 12.0, SatelliteKind::Communication, false),
            SatelliteInfo::new("sat-2", "Relay Two", -35.0, SatelliteKind::Communication, true),
            SatelliteInfo::new("sat-3", "Sentinel", 58.0, SatelliteKind::Military, false),
            SatelliteInfo::new("sat-4", "Watchtower", 97.5, SatelliteKind::Military, true),
            SatelliteInfo::new("sat-5", "Explorer", 28.5, SatelliteKind::Science, false),
            SatelliteInfo::new("sat-6", "Surveyor", -71.0, SatelliteKind::Science, false),
        ],
        selected: Some("sat-5".to_string()),
    }
}
