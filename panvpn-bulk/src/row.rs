use thiserror::Error;

/// Number of columns in the fixed input layout.
pub const COLUMN_COUNT: usize = 24;

/// Column names in positional order, as documented for the input file.
pub const COLUMN_NAMES: [&str; COLUMN_COUNT] = [
    "tunnel_if_name",
    "tunnel_if_comment",
    "tunnel_if_ip",
    "mgmt_profile",
    "virtual_router",
    "zone",
    "ike_gw_name",
    "ike_interface",
    "ike_local_ip",
    "peer_ip_type",
    "peer_ip_value",
    "psk",
    "local_id",
    "peer_id",
    "passive_mode",
    "nat_traversal",
    "ikev1_exchange_mode",
    "ikev1_crypto_profile",
    "fragmentation",
    "dpd",
    "ipsec_tunnel_name",
    "tunnel_interface_ref",
    "ike_gw_ref",
    "ipsec_crypto_profile",
];

/// Row-level validation errors. `row` is one-based and counts data rows
/// (the discarded header is not counted).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("row {row}: expected 24 columns, found {found}")]
    ColumnCount { row: usize, found: usize },
    #[error("row {row}: missing required value for column '{column}'")]
    MissingField { row: usize, column: &'static str },
    #[error("row {row}: malformed value '{value}' in column '{column}': {reason}")]
    Malformed {
        row: usize,
        column: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// One normalized input row. Empty cells are represented as `None`;
/// all further interpretation (booleans, compound fields, truncation)
/// happens in the spec builder so each field's parsing rule lives at the
/// point it is consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub tunnel_if_name: String,
    pub tunnel_if_comment: Option<String>,
    pub tunnel_if_ip: Option<String>,
    pub mgmt_profile: Option<String>,
    pub virtual_router: String,
    pub zone: String,
    pub ike_gw_name: String,
    pub ike_interface: Option<String>,
    pub ike_local_ip: Option<String>,
    pub peer_ip_type: Option<String>,
    pub peer_ip_value: Option<String>,
    pub psk: Option<String>,
    pub local_id: Option<String>,
    pub peer_id: Option<String>,
    pub passive_mode: Option<String>,
    pub nat_traversal: Option<String>,
    pub ikev1_exchange_mode: Option<String>,
    pub ikev1_crypto_profile: Option<String>,
    pub fragmentation: Option<String>,
    pub dpd: Option<String>,
    pub ipsec_tunnel_name: String,
    pub tunnel_interface_ref: Option<String>,
    pub ike_gw_ref: Option<String>,
    pub ipsec_crypto_profile: Option<String>,
}

impl Row {
    /// Normalize one record of raw cells into a [`Row`].
    ///
    /// Enforces the column count and the required fields: the three object
    /// names, both grouping keys, and the peer IP value whenever the peer
    /// IP mode is not `dynamic`.
    pub fn from_record(row: usize, cells: &[String]) -> Result<Self, RowError> {
        if cells.len() != COLUMN_COUNT {
            return Err(RowError::ColumnCount {
                row,
                found: cells.len(),
            });
        }

        let normalized = Self {
            tunnel_if_name: required(row, cells, 0)?,
            tunnel_if_comment: optional(cells, 1),
            tunnel_if_ip: optional(cells, 2),
            mgmt_profile: optional(cells, 3),
            virtual_router: required(row, cells, 4)?,
            zone: required(row, cells, 5)?,
            ike_gw_name: required(row, cells, 6)?,
            ike_interface: optional(cells, 7),
            ike_local_ip: optional(cells, 8),
            peer_ip_type: optional(cells, 9),
            peer_ip_value: optional(cells, 10),
            psk: optional(cells, 11),
            local_id: optional(cells, 12),
            peer_id: optional(cells, 13),
            passive_mode: optional(cells, 14),
            nat_traversal: optional(cells, 15),
            ikev1_exchange_mode: optional(cells, 16),
            ikev1_crypto_profile: optional(cells, 17),
            fragmentation: optional(cells, 18),
            dpd: optional(cells, 19),
            ipsec_tunnel_name: required(row, cells, 20)?,
            tunnel_interface_ref: optional(cells, 21),
            ike_gw_ref: optional(cells, 22),
            ipsec_crypto_profile: optional(cells, 23),
        };

        if normalized.peer_ip_type.as_deref() != Some("dynamic")
            && normalized.peer_ip_value.is_none()
        {
            return Err(RowError::MissingField {
                row,
                column: COLUMN_NAMES[10],
            });
        }

        Ok(normalized)
    }
}

fn optional(cells: &[String], index: usize) -> Option<String> {
    let cell = &cells[index];
    if cell.is_empty() {
        None
    } else {
        Some(cell.clone())
    }
}

fn required(row: usize, cells: &[String], index: usize) -> Result<String, RowError> {
    optional(cells, index).ok_or(RowError::MissingField {
        row,
        column: COLUMN_NAMES[index],
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Row, RowError, COLUMN_COUNT};

    fn record_with(overrides: &[(usize, &str)]) -> Vec<String> {
        let mut cells = vec![String::new(); COLUMN_COUNT];
        cells[0] = "tunnel.1".to_string();
        cells[4] = "default".to_string();
        cells[5] = "vpn".to_string();
        cells[6] = "gw-1".to_string();
        cells[10] = "198.51.100.10".to_string();
        cells[20] = "tun-1".to_string();
        for (index, value) in overrides {
            cells[*index] = (*value).to_string();
        }
        cells
    }

    #[test]
    fn empty_cells_become_none() {
        let row = Row::from_record(1, &record_with(&[])).expect("row");
        assert_eq!(row.tunnel_if_comment, None);
        assert_eq!(row.psk, None);
        assert_eq!(row.ipsec_crypto_profile, None);
        assert_eq!(row.tunnel_if_name, "tunnel.1");
    }

    #[test]
    fn wrong_column_count_is_rejected() {
        let cells = vec![String::new(); 23];
        assert_eq!(
            Row::from_record(3, &cells),
            Err(RowError::ColumnCount { row: 3, found: 23 })
        );
    }

    #[test]
    fn missing_zone_is_rejected_with_column_name() {
        let err = Row::from_record(2, &record_with(&[(5, "")])).expect_err("should fail");
        assert_eq!(
            err,
            RowError::MissingField {
                row: 2,
                column: "zone"
            }
        );
    }

    #[test]
    fn dynamic_peer_does_not_require_peer_value() {
        let row =
            Row::from_record(1, &record_with(&[(9, "dynamic"), (10, "")])).expect("row");
        assert_eq!(row.peer_ip_value, None);
    }

    #[test]
    fn static_peer_requires_peer_value() {
        let err =
            Row::from_record(4, &record_with(&[(9, "ip"), (10, "")])).expect_err("should fail");
        assert_eq!(
            err,
            RowError::MissingField {
                row: 4,
                column: "peer_ip_value"
            }
        );
    }

    #[test]
    fn absent_peer_type_still_requires_peer_value() {
        let err = Row::from_record(5, &record_with(&[(10, "")])).expect_err("should fail");
        assert!(matches!(err, RowError::MissingField { column: "peer_ip_value", .. }));
    }
}
