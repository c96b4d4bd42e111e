//! Shopping-list use-case service.
//!
//! # Responsibility
//! - Build the active week's meal groups and included shopping list.
//! - Run the export flow: guard, shape payload, publish, mark exported.
//!
//! # Invariants
//! - Export is refused in `ShareMode::LocalOnly` without calling anything.
//! - An empty included set fails before the collaborator is called.
//! - Exported meals are excluded afterwards so they are not shared twice.

use crate::config::{CoreConfig, ShareMode};
use crate::locale::Locale;
use crate::repo::catalog::{MealPlanProvider, RecipeCatalog};
use crate::repo::kv_store::KeyValueStore;
use crate::service::inclusion_service::{InclusionError, InclusionService, WeekKey};
use crate::shopping::aggregate::{build_meal_groups, MealGroup};
use crate::shopping::list::{flatten_meal_groups, ShoppingListItem};
use crate::shopping::snapshot::{
    build_snapshot_payload, EmptySnapshotError, NoShare, ShareCollaborator, ShareError,
    ShareSnapshot,
};
use chrono::{DateTime, Utc};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Export failures a caller should show to the user.
#[derive(Debug)]
pub enum ExportError {
    /// Sharing is not available in this operating mode.
    ShareUnavailable,
    /// Every ingredient is excluded.
    EmptySnapshot(EmptySnapshotError),
    /// Collaborator rejected or failed the publish.
    Publish(ShareError),
    Inclusion(InclusionError),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShareUnavailable => write!(f, "sharing is not available in local-only mode"),
            Self::EmptySnapshot(err) => write!(f, "{err}"),
            Self::Publish(err) => write!(f, "{err}"),
            Self::Inclusion(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ShareUnavailable => None,
            Self::EmptySnapshot(err) => Some(err),
            Self::Publish(err) => Some(err),
            Self::Inclusion(err) => Some(err),
        }
    }
}

impl From<EmptySnapshotError> for ExportError {
    fn from(value: EmptySnapshotError) -> Self {
        Self::EmptySnapshot(value)
    }
}

impl From<ShareError> for ExportError {
    fn from(value: ShareError) -> Self {
        Self::Publish(value)
    }
}

impl From<InclusionError> for ExportError {
    fn from(value: InclusionError) -> Self {
        Self::Inclusion(value)
    }
}

/// Shopping-list facade over inclusion persistence and sharing.
pub struct ShoppingService<S: KeyValueStore, C: ShareCollaborator> {
    config: CoreConfig,
    locale: Locale,
    inclusion: InclusionService<S>,
    share: Option<C>,
}

impl<S: KeyValueStore> ShoppingService<S, NoShare> {
    /// Creates a service that can never export.
    pub fn local_only(config: CoreConfig, store: S) -> Self {
        Self::new(config, store, None)
    }
}

impl<S: KeyValueStore, C: ShareCollaborator> ShoppingService<S, C> {
    /// Creates a service; `share = None` behaves like `ShareMode::LocalOnly`.
    pub fn new(config: CoreConfig, store: S, share: Option<C>) -> Self {
        let locale = config.number_locale();
        let inclusion = InclusionService::with_config(store, &config);
        Self {
            config,
            locale,
            inclusion,
            share,
        }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn inclusion(&self) -> &InclusionService<S> {
        &self.inclusion
    }

    pub fn inclusion_mut(&mut self) -> &mut InclusionService<S> {
        &mut self.inclusion
    }

    /// Whether export can be offered at all.
    pub fn can_export(&self) -> bool {
        self.config.share_mode == ShareMode::Remote && self.share.is_some()
    }

    /// Selects and loads the inclusion state for `key`.
    pub fn open_week(&mut self, key: WeekKey) -> Result<(), InclusionError> {
        self.inclusion.load_week(key)
    }

    /// Builds meal groups of `key`'s week from the household providers.
    pub fn meal_groups<P>(&self, provider: &P, key: &WeekKey) -> Vec<MealGroup>
    where
        P: RecipeCatalog + MealPlanProvider,
    {
        let recipes = provider.recipes(&key.household_id);
        let meal_plan = provider.entries(&key.household_id);
        build_meal_groups(&meal_plan, &recipes, key.week.interval(), self.locale)
    }

    /// Flat list of everything not excluded for the active week.
    pub fn included_items(&self, groups: &[MealGroup]) -> Vec<ShoppingListItem> {
        let state = self.inclusion.state();
        flatten_meal_groups(
            groups,
            |group, ingredient| !state.is_excluded(group, ingredient),
            self.locale,
        )
    }

    /// Publishes the included items of the active week.
    ///
    /// # Errors
    /// - `ShareUnavailable` in local-only mode or without a collaborator.
    /// - `Inclusion(NotLoaded)` before the week finished loading.
    /// - `EmptySnapshot` when nothing is included.
    /// - `Publish` when the collaborator fails.
    pub fn export_week(
        &mut self,
        groups: &[MealGroup],
        now: DateTime<Utc>,
    ) -> Result<ShareSnapshot, ExportError> {
        if self.config.share_mode == ShareMode::LocalOnly {
            return Err(ExportError::ShareUnavailable);
        }
        let Some(share) = self.share.as_ref() else {
            return Err(ExportError::ShareUnavailable);
        };
        if !self.inclusion.is_loaded() {
            return Err(InclusionError::NotLoaded.into());
        }
        let Some(week) = self.inclusion.active_week().map(|key| key.week) else {
            return Err(InclusionError::NotLoaded.into());
        };

        let state = self.inclusion.state();
        let payload = build_snapshot_payload(
            groups,
            |group, ingredient| !state.is_excluded(group, ingredient),
            week,
            self.locale,
        )?;
        let exported: Vec<MealGroup> = groups
            .iter()
            .filter(|group| {
                group
                    .ingredients
                    .iter()
                    .any(|ingredient| !state.is_excluded(group, ingredient))
            })
            .cloned()
            .collect();

        let published = share.publish(&payload).map_err(|err| {
            error!(
                "event=snapshot_publish module=service status=error week_start={} error_code={} retryable={}",
                week.start_key(),
                err.code,
                err.retryable
            );
            err
        })?;
        info!(
            "event=snapshot_publish module=service status=ok week_start={} items={} meals={}",
            week.start_key(),
            payload.items.len(),
            exported.len()
        );

        let snapshot =
            ShareSnapshot::from_published(payload, published, now, self.config.snapshot_ttl());

        // The share exists already; a failed write only risks a re-export.
        if let Err(err) = self.inclusion.mark_groups_excluded(&exported) {
            warn!(
                "event=snapshot_mark_exported module=service status=error week_start={} error={}",
                week.start_key(),
                err
            );
        }

        Ok(snapshot)
    }
}
