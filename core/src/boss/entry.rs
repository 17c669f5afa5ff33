//! A single tracked boss and its countdown state
//!
//! Fields are private: the registry is the only place entries are created
//! or mutated. Remaining time is always derived from `next_refresh` and the
//! caller-supplied `now`, never stored.

use std::fmt;
use std::time::Duration;

use bosswatch_types::BossRecord;
use chrono::{NaiveDateTime, TimeDelta};

use super::RegistryError;
use crate::interval::RefreshInterval;

/// Registry-assigned identifier. Unique for the process lifetime, not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BossId(u64);

impl BossId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BossId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-entry countdown state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// No timer started
    Idle,
    /// Next refresh is still in the future
    Running,
    /// Next refresh has passed; stays here until restarted
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossEntry {
    id: BossId,
    map: String,
    level: String,
    refresh_interval: RefreshInterval,
    next_refresh: Option<NaiveDateTime>,
    selected: bool,
}

/// Validated, trimmed field values ready to be stored.
pub(crate) struct BossFields {
    pub map: String,
    pub level: String,
    pub refresh_interval: RefreshInterval,
}

impl BossFields {
    /// Checks map, level and interval in that order.
    pub fn validate(map: &str, level: &str, interval: &str) -> Result<Self, RegistryError> {
        Ok(Self {
            map: non_empty(map, "map")?,
            level: non_empty(level, "level")?,
            refresh_interval: RefreshInterval::parse(interval)?,
        })
    }
}

fn non_empty(value: &str, field: &'static str) -> Result<String, RegistryError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RegistryError::EmptyField { field });
    }
    Ok(value.to_string())
}

impl BossEntry {
    pub(crate) fn new(id: BossId, fields: BossFields) -> Self {
        Self {
            id,
            map: fields.map,
            level: fields.level,
            refresh_interval: fields.refresh_interval,
            next_refresh: None,
            selected: false,
        }
    }

    pub fn id(&self) -> BossId {
        self.id
    }

    pub fn map(&self) -> &str {
        &self.map
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn refresh_interval(&self) -> &RefreshInterval {
        &self.refresh_interval
    }

    /// Absolute time of the next occurrence, if a timer is running
    pub fn next_refresh(&self) -> Option<NaiveDateTime> {
        self.next_refresh
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn state(&self, now: NaiveDateTime) -> TimerState {
        match self.next_refresh {
            None => TimerState::Idle,
            Some(next) if next > now => TimerState::Running,
            Some(_) => TimerState::Expired,
        }
    }

    /// Signed time until the next refresh. Negative once expired.
    pub fn countdown(&self, now: NaiveDateTime) -> Option<TimeDelta> {
        self.next_refresh.map(|next| next.signed_duration_since(now))
    }

    /// Remaining time in whole seconds, clamped to zero. `None` when idle.
    pub fn remaining(&self, now: NaiveDateTime) -> Option<Duration> {
        self.countdown(now)
            .map(|delta| Duration::from_secs(delta.num_seconds().max(0) as u64))
    }

    /// Persisted form: static fields only
    pub fn to_record(&self) -> BossRecord {
        BossRecord::new(&self.map, &self.level, self.refresh_interval.as_str())
    }

    // ─── Mutation (registry only) ───────────────────────────────────────────

    /// Start (or restart) the countdown from `now` and consume the selection.
    pub(crate) fn start(&mut self, now: NaiveDateTime) {
        self.next_refresh = Some(self.deadline_from(now));
        self.selected = false;
    }

    /// Replace the static fields. A running timer is restarted from `now`
    /// with the new interval rather than dropped back to idle.
    pub(crate) fn apply(&mut self, fields: BossFields, now: NaiveDateTime) {
        self.map = fields.map;
        self.level = fields.level;
        self.refresh_interval = fields.refresh_interval;
        if self.next_refresh.is_some() {
            self.next_refresh = Some(self.deadline_from(now));
        }
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn deadline_from(&self, now: NaiveDateTime) -> NaiveDateTime {
        now.checked_add_signed(self.refresh_interval.as_delta())
            .unwrap_or(NaiveDateTime::MAX)
    }
}
