//! Diesel row models for roster queries.

use diesel::prelude::*;
use diesel::sql_types::{Double, Nullable, Text};

/// Roster member row joined with its profile, role and level names.
#[derive(Debug, Clone, QueryableByName)]
pub struct MemberRow {
    /// Member identifier.
    #[diesel(sql_type = Text)]
    pub id: String,
    /// Name entered on the roster.
    #[diesel(sql_type = Nullable<Text>)]
    pub display_name: Option<String>,
    /// Invitation email.
    #[diesel(sql_type = Nullable<Text>)]
    pub email: Option<String>,
    /// Joined profile name.
    #[diesel(sql_type = Nullable<Text>)]
    pub profile_name: Option<String>,
    /// Role reference.
    #[diesel(sql_type = Nullable<Text>)]
    pub role_id: Option<String>,
    /// Joined role name.
    #[diesel(sql_type = Nullable<Text>)]
    pub role_name: Option<String>,
    /// Level reference.
    #[diesel(sql_type = Nullable<Text>)]
    pub level_id: Option<String>,
    /// Joined level name.
    #[diesel(sql_type = Nullable<Text>)]
    pub level_name: Option<String>,
    /// Declared weekly availability.
    #[diesel(sql_type = Nullable<Double>)]
    pub weekly_hours: Option<f64>,
}
