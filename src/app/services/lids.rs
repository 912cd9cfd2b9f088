//! Hatch lid transformation
//!
//! Lid records pass through to the document largely as parsed; this step
//! exists so the output type stays decoupled from the wire records.

use tracing::debug;

use crate::app::models::{LidData, LidRecord};

/// Turn parsed lid records into their document form, preserving file order.
pub fn transform_lids(lids: Vec<LidRecord>) -> Vec<LidData> {
    let transformed: Vec<LidData> = lids
        .into_iter()
        .map(|lid| LidData {
            label: lid.label,
            iso_bay: lid.iso_bay,
            level: lid.level,
            port_iso_row: lid.port_iso_row,
            starboard_iso_row: lid.starboard_iso_row,
            join_lid_fwd_label: lid.join_lid_fwd_label,
            join_lid_aft_label: lid.join_lid_aft_label,
            overlap_port: lid.overlap_port,
            overlap_starboard: lid.overlap_starboard,
        })
        .collect();

    debug!("Transformed {} hatch lids", transformed.len());
    transformed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{BayLevel, IsoBay, IsoRow};

    #[test]
    fn test_lids_carry_over_field_for_field() {
        let record = LidRecord {
            label: "H11".to_string(),
            iso_bay: IsoBay::new(1).unwrap(),
            level: BayLevel::Above,
            port_iso_row: IsoRow::new(4),
            starboard_iso_row: IsoRow::new(1),
            join_lid_fwd_label: Some("H09".to_string()),
            join_lid_aft_label: None,
            overlap_port: true,
            overlap_starboard: false,
        };

        let lids = transform_lids(vec![record]);

        assert_eq!(lids.len(), 1);
        let lid = &lids[0];
        assert_eq!(lid.label, "H11");
        assert_eq!(lid.iso_bay.number(), 1);
        assert_eq!(lid.level, BayLevel::Above);
        assert_eq!(lid.port_iso_row, IsoRow::new(4));
        assert_eq!(lid.starboard_iso_row, IsoRow::new(1));
        assert_eq!(lid.join_lid_fwd_label.as_deref(), Some("H09"));
        assert!(lid.join_lid_aft_label.is_none());
        assert!(lid.overlap_port);
        assert!(!lid.overlap_starboard);
    }
}
