//! Inclusion-state use-case service.
//!
//! # Responsibility
//! - Load one household week's inclusion state from the key-value store.
//! - Apply reducer actions and write every result through to the store.
//!
//! # Invariants
//! - No action is accepted before the active week finished loading.
//! - A load completing for a superseded ticket is discarded.
//! - In-memory state only advances after the store accepted the write.

use crate::config::CoreConfig;
use crate::model::recipe::HouseholdId;
use crate::model::week::WeekRange;
use crate::repo::kv_store::{KeyValueStore, StoreError};
use crate::shopping::aggregate::{MealGroup, MealIngredient};
use crate::shopping::inclusion::{
    decode_inclusion_state, reconcile, reduce, InclusionAction, InclusionDecode, InclusionState,
};
use log::{debug, info, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Household + week scope of one inclusion record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeekKey {
    pub household_id: HouseholdId,
    pub week: WeekRange,
}

impl WeekKey {
    pub fn new(household_id: impl Into<HouseholdId>, week: WeekRange) -> Self {
        Self {
            household_id: household_id.into(),
            week,
        }
    }

    /// `prefix:householdId:yyyy-MM-dd`.
    pub fn storage_key(&self, prefix: &str) -> String {
        format!("{prefix}:{}:{}", self.household_id, self.week.start_key())
    }
}

/// Handle for one in-flight load. Only the newest ticket can complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    key: WeekKey,
    generation: u64,
}

impl LoadTicket {
    pub fn key(&self) -> &WeekKey {
        &self.key
    }
}

/// Inclusion service errors.
#[derive(Debug)]
pub enum InclusionError {
    /// No week selected, or its state has not finished loading.
    NotLoaded,
    Store(StoreError),
}

impl Display for InclusionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotLoaded => write!(f, "shopping selection is still loading"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for InclusionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotLoaded => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for InclusionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Per-week inclusion state over a key-value store.
pub struct InclusionService<S: KeyValueStore> {
    store: S,
    key_prefix: String,
    active: Option<WeekKey>,
    state: InclusionState,
    loaded: bool,
    generation: u64,
}

impl<S: KeyValueStore> InclusionService<S> {
    pub fn new(store: S, key_prefix: impl Into<String>) -> Self {
        Self {
            store,
            key_prefix: key_prefix.into(),
            active: None,
            state: InclusionState::default(),
            loaded: false,
            generation: 0,
        }
    }

    pub fn with_config(store: S, config: &CoreConfig) -> Self {
        Self::new(store, config.inclusion_key_prefix.clone())
    }

    pub fn active_week(&self) -> Option<&WeekKey> {
        self.active.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Current state. Empty while a load is pending.
    pub fn state(&self) -> &InclusionState {
        &self.state
    }

    pub fn is_excluded(&self, group: &MealGroup, ingredient: &MealIngredient) -> bool {
        self.state.is_excluded(group, ingredient)
    }

    /// Switches the active week and invalidates any earlier pending load.
    pub fn begin_load(&mut self, key: WeekKey) -> LoadTicket {
        self.generation += 1;
        self.active = Some(key.clone());
        self.state = InclusionState::default();
        self.loaded = false;
        LoadTicket {
            key,
            generation: self.generation,
        }
    }

    /// Completes a load with the raw stored record.
    ///
    /// Returns `false` when the ticket was superseded; the record is dropped.
    pub fn complete_load(&mut self, ticket: LoadTicket, record: Option<Value>) -> bool {
        if ticket.generation != self.generation || self.active.as_ref() != Some(&ticket.key) {
            debug!(
                "event=inclusion_load module=service status=skip reason=stale_ticket week_start={}",
                ticket.key.week.start_key()
            );
            return false;
        }

        let decode = decode_inclusion_state(record.as_ref());
        let source = match &decode {
            InclusionDecode::Decoded(_) => "stored",
            InclusionDecode::Fallback(reason) => *reason,
        };
        self.state = decode.into_state();
        self.loaded = true;
        info!(
            "event=inclusion_load module=service status=ok week_start={} source={} excluded_meals={} excluded_ingredients={}",
            ticket.key.week.start_key(),
            source,
            self.state.excluded_meal_ids.len(),
            self.state.excluded_ingredient_ids.len()
        );
        true
    }

    /// Loads `key` synchronously from the store.
    ///
    /// # Errors
    /// - `InclusionError::Store` when the backend fails; the week stays
    ///   unloaded so no toggle can overwrite the unread record.
    pub fn load_week(&mut self, key: WeekKey) -> Result<(), InclusionError> {
        let storage_key = key.storage_key(&self.key_prefix);
        let ticket = self.begin_load(key);
        let record = self.store.get(&storage_key).map_err(|err| {
            warn!(
                "event=inclusion_load module=service status=error week_start={} error={}",
                ticket.key.week.start_key(),
                err
            );
            err
        })?;
        self.complete_load(ticket, record);
        Ok(())
    }

    pub fn toggle_meal(&mut self, group: &MealGroup) -> Result<&InclusionState, InclusionError> {
        self.apply(InclusionAction::ToggleMeal(group))
    }

    pub fn toggle_ingredient(
        &mut self,
        group: &MealGroup,
        ingredient_id: &str,
    ) -> Result<&InclusionState, InclusionError> {
        self.apply(InclusionAction::ToggleIngredient {
            group,
            ingredient_id,
        })
    }

    pub fn mark_groups_excluded(
        &mut self,
        groups: &[MealGroup],
    ) -> Result<&InclusionState, InclusionError> {
        self.apply(InclusionAction::MarkGroupsExcluded(groups))
    }

    /// Re-derives meal flags for the visible groups; writes only on change.
    pub fn reconcile(&mut self, groups: &[MealGroup]) -> Result<&InclusionState, InclusionError> {
        let key = self.require_loaded()?;
        let next = reconcile(&self.state, groups);
        if next != self.state {
            self.persist(&key, &next)?;
            self.state = next;
        }
        Ok(&self.state)
    }

    /// Clears the active week and erases its persisted record.
    pub fn reset_week(&mut self) -> Result<(), InclusionError> {
        let key = self.require_loaded()?;
        self.store.remove(&key.storage_key(&self.key_prefix))?;
        self.state = reduce(&self.state, InclusionAction::Reset);
        info!(
            "event=inclusion_reset module=service status=ok week_start={}",
            key.week.start_key()
        );
        Ok(())
    }

    fn apply(&mut self, action: InclusionAction<'_>) -> Result<&InclusionState, InclusionError> {
        let key = self.require_loaded()?;
        let next = reduce(&self.state, action);
        self.persist(&key, &next)?;
        self.state = next;
        Ok(&self.state)
    }

    fn persist(&self, key: &WeekKey, state: &InclusionState) -> Result<(), InclusionError> {
        self.store
            .set(&key.storage_key(&self.key_prefix), &state.to_json())
            .map_err(|err| {
                warn!(
                    "event=inclusion_persist module=service status=error week_start={} error={}",
                    key.week.start_key(),
                    err
                );
                InclusionError::from(err)
            })
    }

    fn require_loaded(&self) -> Result<WeekKey, InclusionError> {
        match (&self.active, self.loaded) {
            (Some(key), true) => Ok(key.clone()),
            _ => Err(InclusionError::NotLoaded),
        }
    }
}
