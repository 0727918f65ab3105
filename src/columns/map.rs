//! Known headers of the structure-damage inspection export and their canonical labels.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Exact header string -> canonical label, in export column order.
pub const COLUMN_MAP: &[(&str, &str)] = &[
    ("OBJECTID", "object_id"),
    ("* Damage", "damage"),
    ("* Street Number", "street_number"),
    ("* Street Name", "street_name"),
    ("* Street Type (e.g. road, drive, lane, etc.)", "street_type"),
    ("Street Suffix (e.g. apt. 23, blding C)", "street_suffix"),
    ("* City", "city"),
    ("State", "state"),
    ("Zip Code", "zip_code"),
    ("* CAL FIRE Unit", "cal_fire_unit"),
    ("County", "county"),
    ("Community", "community"),
    ("Battalion", "battalion"),
    ("* Incident Name", "incident_name"),
    ("Incident Number (e.g. CAAEU 123456)", "incident_number"),
    ("Incident Start Date", "incident_start_date"),
    ("Hazard Type", "hazard_type"),
    ("If Affected 1-9% - Where did fire start?", "fire_start_location"),
    ("If Affected 1-9% - What started fire?", "fire_cause"),
    ("Structure Defense Actions Taken", "defense_actions"),
    ("* Structure Type", "structure_type"),
    ("Structure Category", "structure_category"),
    ("# Units in Structure (if multi unit)", "num_units"),
    ("# of Damaged Outbuildings < 120 SQFT", "damaged_outbuildings"),
    ("# of Non Damaged Outbuildings < 120 SQFT", "non_damaged_outbuildings"),
    ("* Roof Construction", "roof_construction"),
    ("* Eaves", "eaves"),
    ("* Vent Screen", "vent_screen"),
    ("* Exterior Siding", "exterior_siding"),
    ("* Window Pane", "window_pane"),
    ("* Deck/Porch On Grade", "deck_on_grade"),
    ("* Deck/Porch Elevated", "deck_elevated"),
    ("* Patio Cover/Carport Attached to Structure", "patio_carport_attached"),
    ("* Fence Attached to Structure", "fence_attached"),
    ("Distance - Propane Tank to Structure", "distance_to_propane_tank"),
    (
        "Distance - Residence to Utility/Misc Structure &gt; 120 SQFT",
        "distance_to_utility_structure",
    ),
    ("Fire Name (Secondary)", "fire_name_secondary"),
    ("APN (parcel)", "apn"),
    ("Assessed Improved Value (parcel)", "assessed_value"),
    ("Year Built (parcel)", "built_in"),
    ("Site Address (parcel)", "site_address"),
    ("GLOBALID", "global_id"),
    ("Latitude", "latitude"),
    ("Longitude", "longitude"),
    ("x", "x_coord"),
    ("y", "y_coord"),
];

static LOOKUP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| COLUMN_MAP.iter().copied().collect());

/// Canonical label for an exactly-matching known header.
pub fn known_label(header: &str) -> Option<&'static str> {
    LOOKUP.get(header).copied()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{known_label, COLUMN_MAP};
    use crate::columns::sanitize_label;

    #[test]
    fn map_has_unique_headers_and_targets() {
        let headers: HashSet<_> = COLUMN_MAP.iter().map(|(h, _)| *h).collect();
        let targets: HashSet<_> = COLUMN_MAP.iter().map(|(_, t)| *t).collect();
        assert_eq!(headers.len(), COLUMN_MAP.len());
        assert_eq!(targets.len(), COLUMN_MAP.len());
    }

    #[test]
    fn targets_are_already_canonical() {
        for (_, target) in COLUMN_MAP {
            assert_eq!(sanitize_label(target), *target);
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(known_label("OBJECTID"), Some("object_id"));
        assert_eq!(known_label("* Damage"), Some("damage"));
        assert_eq!(known_label("objectid"), None);
        assert_eq!(known_label("* Damage "), None);
        assert_eq!(known_label("Damage"), None);
    }
}
