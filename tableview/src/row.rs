//! ==============================================================================
//! row.rs - row source for the demo dataset
//! ==============================================================================
//!
//! purpose:
//!     defines the Row record and generates the in-memory sample dataset
//!     that both table pages operate on. rows are immutable once generated;
//!     the caller owns the returned sequence and its order (id ascending
//!     from 1) is the "source order" the pipeline falls back to when no
//!     sort key is active.
//!
//! ==============================================================================

use chrono::{Days, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

// ==============================================================================
// enumerations
// ==============================================================================

/// role assigned to a demo user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    User,
    Editor,
    Viewer,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::User, Role::Editor, Role::Viewer];

    /// display label, also the value filters and sorting operate on
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
            Role::Editor => "Editor",
            Role::Viewer => "Viewer",
        }
    }
}

/// account status of a demo user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Active,
    Inactive,
    Pending,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Active, Status::Inactive, Status::Pending];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
            Status::Pending => "Pending",
        }
    }
}

// ==============================================================================
// row record
// ==============================================================================

/// one record in the demo dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// unique, 1-based, ascending in source order
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
    /// YYYY-MM-DD; lexicographic order on this format is chronological
    pub created_at: String,
}

// ==============================================================================
// generation
// ==============================================================================

/// generate `count` demo rows with ids 1..=count.
///
/// role and status are drawn uniformly at random, created_at is a date
/// uniformly within the 365 days before generation time.
pub fn sample_rows(count: u32) -> Vec<Row> {
    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();

    (1..=count)
        .map(|id| {
            let age_days = rng.gen_range(0..365u64);
            let created = today
                .checked_sub_days(Days::new(age_days))
                .unwrap_or(today);
            Row {
                id,
                name: format!("User {}", id),
                email: format!("user{}@example.com", id),
                role: Role::ALL[rng.gen_range(0..Role::ALL.len())],
                status: Status::ALL[rng.gen_range(0..Status::ALL.len())],
                created_at: created.format("%Y-%m-%d").to_string(),
            }
        })
        .collect()
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================================================
    // generation tests
    // ===========================================================================

    #[test]
    fn test_sample_rows_count_and_ids() {
        let rows = sample_rows(100);
        assert_eq!(rows.len(), 100);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.id, i as u32 + 1);
        }
    }

    #[test]
    fn test_sample_rows_derived_fields() {
        let rows = sample_rows(5);
        assert_eq!(rows[0].name, "User 1");
        assert_eq!(rows[4].name, "User 5");
        assert_eq!(rows[2].email, "user3@example.com");
    }

    #[test]
    fn test_sample_rows_date_format() {
        for row in sample_rows(20) {
            let bytes = row.created_at.as_bytes();
            assert_eq!(bytes.len(), 10, "bad date: {}", row.created_at);
            assert_eq!(bytes[4], b'-');
            assert_eq!(bytes[7], b'-');
            assert!(row.created_at[..4].parse::<u32>().is_ok());
        }
    }

    #[test]
    fn test_sample_rows_empty() {
        assert!(sample_rows(0).is_empty());
    }

    // ===========================================================================
    // enum label tests
    // ===========================================================================

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Admin.as_str(), "Admin");
        assert_eq!(Role::Viewer.as_str(), "Viewer");
        assert_eq!(Role::ALL.len(), 4);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::Active.as_str(), "Active");
        assert_eq!(Status::Pending.as_str(), "Pending");
        assert_eq!(Status::ALL.len(), 3);
    }

    #[test]
    fn test_row_serialization() {
        let row = Row {
            id: 7,
            name: "User 7".to_string(),
            email: "user7@example.com".to_string(),
            role: Role::Editor,
            status: Status::Pending,
            created_at: "2026-01-15".to_string(),
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"role\":\"Editor\""));
        let parsed: Row = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, row);
    }
}
