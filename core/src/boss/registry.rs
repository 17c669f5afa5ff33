//! Boss registry
//!
//! Ordered collection of tracked bosses. Owned by the presentation task and
//! passed by reference; it holds no locks and performs no I/O.
//!
//! The storage order is the display order. `resort` applies the
//! soonest-first ordering from `sorted_view` to storage, and entries added
//! in between appear at the end until the next pass.

use bosswatch_types::BossRecord;
use chrono::{NaiveDateTime, TimeDelta};

use super::entry::{BossEntry, BossFields, BossId};
use super::RegistryError;

#[derive(Debug, Default)]
pub struct BossRegistry {
    entries: Vec<BossEntry>,
    next_id: u64,
}

impl BossRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from persisted records.
    ///
    /// All-or-nothing: one invalid record rejects the whole set. Every
    /// entry starts idle and unselected.
    pub fn from_records(records: &[BossRecord]) -> Result<Self, RegistryError> {
        let fields = records
            .iter()
            .map(|r| BossFields::validate(&r.map, &r.level, &r.refresh_interval))
            .collect::<Result<Vec<_>, _>>()?;

        let mut registry = Self::new();
        for f in fields {
            registry.insert(f);
        }
        Ok(registry)
    }

    /// Persisted form of every entry, in current order
    pub fn to_records(&self) -> Vec<BossRecord> {
        self.entries.iter().map(BossEntry::to_record).collect()
    }

    // ─── Queries ────────────────────────────────────────────────────────────

    pub fn entries(&self) -> &[BossEntry] {
        &self.entries
    }

    pub fn get(&self, id: BossId) -> Option<&BossEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected_ids(&self) -> Vec<BossId> {
        self.entries
            .iter()
            .filter(|e| e.is_selected())
            .map(BossEntry::id)
            .collect()
    }

    /// Entries ordered by remaining time, soonest first.
    ///
    /// Idle entries count as infinitely far away and always come last.
    /// Expired entries count as zero. The sort is stable, so entries with
    /// equal remaining time keep their current relative order.
    pub fn sorted_view(&self, now: NaiveDateTime) -> Vec<&BossEntry> {
        let mut view: Vec<&BossEntry> = self.entries.iter().collect();
        view.sort_by_key(|e| sort_key(e, now));
        view
    }

    // ─── Mutations ──────────────────────────────────────────────────────────

    /// Reorder storage to match `sorted_view`.
    pub fn resort(&mut self, now: NaiveDateTime) {
        self.entries.sort_by_key(|e| sort_key(e, now));
    }

    /// Validate and append a new idle entry.
    pub fn add(
        &mut self,
        map: &str,
        level: &str,
        interval: &str,
    ) -> Result<&BossEntry, RegistryError> {
        let fields = BossFields::validate(map, level, interval)?;
        let id = self.insert(fields);
        tracing::debug!(%id, map, level, interval, "Boss added");
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Replace an entry's static fields.
    ///
    /// If the entry has a timer (running or expired) it is restarted from
    /// `now` with the new interval; idle entries stay idle.
    pub fn edit(
        &mut self,
        id: BossId,
        map: &str,
        level: &str,
        interval: &str,
        now: NaiveDateTime,
    ) -> Result<(), RegistryError> {
        let fields = BossFields::validate(map, level, interval)?;
        let entry = self.get_mut(id)?;
        entry.apply(fields, now);
        tracing::debug!(%id, map, level, interval, "Boss edited");
        Ok(())
    }

    /// Flip an entry's selection. Returns the new flag.
    pub fn toggle_selection(&mut self, id: BossId) -> Result<bool, RegistryError> {
        let entry = self.get_mut(id)?;
        let selected = !entry.is_selected();
        entry.set_selected(selected);
        Ok(selected)
    }

    pub fn select_all(&mut self, selected: bool) {
        for entry in &mut self.entries {
            entry.set_selected(selected);
        }
    }

    /// Start the countdown for each given entry and clear its selection.
    ///
    /// Unknown ids are skipped. Returns how many timers were started.
    pub fn start_timers(&mut self, ids: &[BossId], now: NaiveDateTime) -> usize {
        if ids.is_empty() {
            return 0;
        }

        let mut started = 0;
        for entry in self.entries.iter_mut().filter(|e| ids.contains(&e.id())) {
            entry.start(now);
            started += 1;
        }

        tracing::debug!(requested = ids.len(), started, "Timers started");
        started
    }

    /// Start timers for every selected entry.
    pub fn start_selected(&mut self, now: NaiveDateTime) -> usize {
        let ids = self.selected_ids();
        self.start_timers(&ids, now)
    }

    /// Remove every selected entry. Returns how many were removed.
    pub fn delete_selected(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !e.is_selected());
        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::debug!(removed, "Selected bosses deleted");
        }
        removed
    }

    // ─── Internals ──────────────────────────────────────────────────────────

    fn insert(&mut self, fields: BossFields) -> BossId {
        self.next_id += 1;
        let id = BossId::new(self.next_id);
        self.entries.push(BossEntry::new(id, fields));
        id
    }

    fn get_mut(&mut self, id: BossId) -> Result<&mut BossEntry, RegistryError> {
        self.entries
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(RegistryError::NotFound { id })
    }
}

/// Idle entries sort after everything else, then by exact time remaining
/// clamped to zero. Display rounds to whole seconds; ordering does not.
fn sort_key(entry: &BossEntry, now: NaiveDateTime) -> (bool, TimeDelta) {
    match entry.countdown(now) {
        Some(delta) => (false, delta.max(TimeDelta::zero())),
        None => (true, TimeDelta::zero()),
    }
}
