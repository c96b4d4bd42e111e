//! Export snapshot builder.
//!
//! # Responsibility
//! - Merge included ingredient lines across meals and round them for export.
//! - Define the payload handed to the external share collaborator and the
//!   read-only snapshot built from its answer.
//!
//! # Invariants
//! - An empty included set never produces a payload.
//! - Payload `servings` is always 1; amounts are already scaled.
//! - A snapshot never outlives `created_at + ttl`.

use crate::locale::Locale;
use crate::model::week::WeekRange;
use crate::shopping::aggregate::{MealGroup, MealIngredient};
use crate::shopping::list::flatten_meal_groups;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Payload servings; amounts are pre-scaled to the planned servings.
pub const SNAPSHOT_SERVINGS: u32 = 1;

/// One exported shopping line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotItem {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// Wire payload published by the share collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPayload {
    pub title: String,
    pub items: Vec<SnapshotItem>,
    pub servings: u32,
    /// Serialized as `yyyy-MM-dd`.
    pub source_week_start: NaiveDate,
}

/// Collaborator answer for one published payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedShare {
    pub token: String,
    pub url: String,
    pub expires_at: DateTime<Utc>,
}

/// Read-only record of one export action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareSnapshot {
    pub token: String,
    pub url: String,
    pub title: String,
    pub items: Vec<SnapshotItem>,
    pub servings: u32,
    pub source_week_start: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ShareSnapshot {
    /// Combines the published payload with the collaborator answer.
    ///
    /// `expires_at` is capped at `created_at + ttl`.
    pub fn from_published(
        payload: SnapshotPayload,
        published: PublishedShare,
        created_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let latest_expiry = created_at + ttl;
        Self {
            token: published.token,
            url: published.url,
            title: payload.title,
            items: payload.items,
            servings: payload.servings,
            source_week_start: payload.source_week_start,
            created_at,
            expires_at: published.expires_at.min(latest_expiry),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Failure reported by the share collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareError {
    /// Stable machine-readable code, e.g. `network_error`.
    pub code: String,
    /// Human-readable reason suitable for display.
    pub message: String,
    pub retryable: bool,
}

impl ShareError {
    pub fn new(code: impl Into<String>, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            retryable,
        }
    }
}

impl Display for ShareError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "share failed ({}): {}", self.code, self.message)
    }
}

impl Error for ShareError {}

/// External grocery-list publisher. Networking, retries and storage are the
/// implementor's concern.
pub trait ShareCollaborator {
    fn publish(&self, payload: &SnapshotPayload) -> Result<PublishedShare, ShareError>;
}

/// Collaborator type for hosts without sharing; it has no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoShare {}

impl ShareCollaborator for NoShare {
    fn publish(&self, _payload: &SnapshotPayload) -> Result<PublishedShare, ShareError> {
        match *self {}
    }
}

/// Nothing is left to export after exclusions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySnapshotError;

impl Display for EmptySnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "nothing to export: every ingredient is excluded")
    }
}

impl Error for EmptySnapshotError {}

/// Builds the export payload from the lines accepted by `include`.
///
/// Lines merge by normalized key across all meals; amounts are rounded with
/// the quantity normalizer before packaging.
pub fn build_snapshot_payload<F>(
    groups: &[MealGroup],
    include: F,
    week: WeekRange,
    locale: Locale,
) -> Result<SnapshotPayload, EmptySnapshotError>
where
    F: Fn(&MealGroup, &MealIngredient) -> bool,
{
    let items: Vec<SnapshotItem> = flatten_meal_groups(groups, include, locale)
        .into_iter()
        .map(|item| SnapshotItem {
            name: item.name,
            amount: item.quantity.rounded_amount,
            unit: item.unit,
        })
        .collect();

    if items.is_empty() {
        return Err(EmptySnapshotError);
    }

    Ok(SnapshotPayload {
        title: snapshot_title(week),
        items,
        servings: SNAPSHOT_SERVINGS,
        source_week_start: week.start(),
    })
}

/// Title shown by the grocery app, e.g. `Boodschappen week 11 (10-03 t/m 16-03)`.
pub fn snapshot_title(week: WeekRange) -> String {
    format!(
        "Boodschappen week {} ({} t/m {})",
        week.iso_week(),
        week.start().format("%d-%m"),
        week.end().format("%d-%m")
    )
}

#[cfg(test)]
mod tests {
    use super::{snapshot_title, PublishedShare, ShareSnapshot, SnapshotPayload};
    use crate::model::week::WeekRange;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    #[test]
    fn title_names_iso_week_and_range() {
        let week = WeekRange::containing(NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());
        assert_eq!(snapshot_title(week), "Boodschappen week 11 (10-03 t/m 16-03)");
    }

    #[test]
    fn snapshot_expiry_is_capped_and_compared() {
        let created_at = Utc.with_ymd_and_hms(2025, 3, 12, 18, 0, 0).unwrap();
        let payload = SnapshotPayload {
            title: "t".to_string(),
            items: Vec::new(),
            servings: 1,
            source_week_start: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        };
        let published = PublishedShare {
            token: "tok".to_string(),
            url: "https://share.example/tok".to_string(),
            expires_at: created_at + Duration::days(7),
        };

        let snapshot =
            ShareSnapshot::from_published(payload, published, created_at, Duration::hours(24));

        assert_eq!(snapshot.expires_at, created_at + Duration::hours(24));
        assert!(!snapshot.is_expired(created_at + Duration::hours(23)));
        assert!(snapshot.is_expired(created_at + Duration::hours(24)));
    }
}
