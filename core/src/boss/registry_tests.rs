//! Tests for BossRegistry
//!
//! Verifies that:
//! - Add/edit validate before touching state
//! - Start/delete consume the selection
//! - The sorted view is stable and keeps idle entries last

use bosswatch_types::BossRecord;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use super::{BossId, BossRegistry, RegistryError, TimerState};

// ═══════════════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════════════

fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap()
}

fn at(secs: i64) -> NaiveDateTime {
    t0() + TimeDelta::seconds(secs)
}

fn add(registry: &mut BossRegistry, map: &str, interval: &str) -> BossId {
    registry.add(map, "Veteran", interval).unwrap().id()
}

fn maps(view: &[&super::BossEntry]) -> Vec<String> {
    view.iter().map(|e| e.map().to_string()).collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Add / Edit
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn add_creates_idle_unselected_entry() {
    let mut registry = BossRegistry::new();
    let entry = registry.add("Dxun", "Master", "1:30:00").unwrap();

    assert_eq!(entry.map(), "Dxun");
    assert_eq!(entry.level(), "Master");
    assert_eq!(entry.refresh_interval().as_str(), "1:30:00");
    assert_eq!(entry.state(t0()), TimerState::Idle);
    assert!(!entry.is_selected());
    assert_eq!(registry.len(), 1);
}

#[test]
fn add_assigns_distinct_ids() {
    let mut registry = BossRegistry::new();
    let a = add(&mut registry, "A", "10");
    let b = add(&mut registry, "B", "10");
    assert_ne!(a, b);
}

#[test]
fn add_with_bad_interval_inserts_nothing() {
    let mut registry = BossRegistry::new();
    let err = registry.add("Dxun", "Master", "1:2:3:4").unwrap_err();
    assert!(matches!(err, RegistryError::InvalidFormat(_)));
    assert!(registry.is_empty());
}

#[test]
fn add_with_blank_field_inserts_nothing() {
    let mut registry = BossRegistry::new();
    let err = registry.add("", "Master", "10").unwrap_err();
    assert_eq!(err, RegistryError::EmptyField { field: "map" });
    assert!(registry.is_empty());
}

#[test]
fn edit_idle_entry_stays_idle() {
    let mut registry = BossRegistry::new();
    let id = add(&mut registry, "Dxun", "10:00");

    registry.edit(id, "Ossus", "Story", "20:00", at(5)).unwrap();

    let entry = registry.get(id).unwrap();
    assert_eq!(entry.map(), "Ossus");
    assert_eq!(entry.level(), "Story");
    assert_eq!(entry.refresh_interval().as_str(), "20:00");
    assert_eq!(entry.state(at(5)), TimerState::Idle);
}

#[test]
fn edit_running_entry_restarts_with_new_interval() {
    let mut registry = BossRegistry::new();
    let id = add(&mut registry, "Dxun", "10:00");
    registry.start_timers(&[id], t0());

    registry.edit(id, "Dxun", "Veteran", "30:00", at(120)).unwrap();

    let entry = registry.get(id).unwrap();
    assert_eq!(entry.state(at(120)), TimerState::Running);
    assert_eq!(entry.next_refresh(), Some(at(120 + 1800)));
    assert_eq!(entry.remaining(at(120)).unwrap().as_secs(), 1800);
}

#[test]
fn edit_expired_entry_keeps_counting() {
    let mut registry = BossRegistry::new();
    let id = add(&mut registry, "Dxun", "10");
    registry.start_timers(&[id], t0());
    assert_eq!(registry.get(id).unwrap().state(at(60)), TimerState::Expired);

    registry.edit(id, "Dxun", "Veteran", "1:00", at(60)).unwrap();

    let entry = registry.get(id).unwrap();
    assert_ne!(entry.state(at(60)), TimerState::Idle);
    assert_eq!(entry.remaining(at(60)).unwrap().as_secs(), 60);
}

#[test]
fn edit_preserves_selection() {
    let mut registry = BossRegistry::new();
    let id = add(&mut registry, "Dxun", "10");
    registry.toggle_selection(id).unwrap();

    registry.edit(id, "Dxun", "Veteran", "20", t0()).unwrap();

    assert!(registry.get(id).unwrap().is_selected());
}

#[test]
fn failed_edit_leaves_entry_unchanged() {
    let mut registry = BossRegistry::new();
    let id = add(&mut registry, "Dxun", "10:00");
    registry.start_timers(&[id], t0());
    let before = registry.get(id).unwrap().clone();

    assert!(matches!(
        registry.edit(id, "Ossus", "Story", "abc", at(30)),
        Err(RegistryError::InvalidFormat(_))
    ));
    assert_eq!(
        registry.edit(id, "Ossus", "  ", "1:00", at(30)),
        Err(RegistryError::EmptyField { field: "level" })
    );

    assert_eq!(registry.get(id).unwrap(), &before);
}

#[test]
fn edit_unknown_id_is_not_found() {
    let mut registry = BossRegistry::new();
    add(&mut registry, "Dxun", "10");
    let missing = BossId::new(999);

    assert_eq!(
        registry.edit(missing, "Ossus", "Story", "10", t0()),
        Err(RegistryError::NotFound { id: missing })
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Selection
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn toggle_selection_flips_flag() {
    let mut registry = BossRegistry::new();
    let id = add(&mut registry, "Dxun", "10");

    assert_eq!(registry.toggle_selection(id), Ok(true));
    assert!(registry.get(id).unwrap().is_selected());
    assert_eq!(registry.toggle_selection(id), Ok(false));
    assert!(!registry.get(id).unwrap().is_selected());
}

#[test]
fn toggle_unknown_id_is_not_found() {
    let mut registry = BossRegistry::new();
    let missing = BossId::new(42);
    assert_eq!(
        registry.toggle_selection(missing),
        Err(RegistryError::NotFound { id: missing })
    );
}

#[test]
fn select_all_sets_every_entry() {
    let mut registry = BossRegistry::new();
    let a = add(&mut registry, "A", "10");
    let b = add(&mut registry, "B", "10");

    registry.select_all(true);
    assert_eq!(registry.selected_ids(), vec![a, b]);

    registry.select_all(false);
    assert!(registry.selected_ids().is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// Start / Delete
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn start_timers_with_no_ids_is_a_noop() {
    let mut registry = BossRegistry::new();
    let id = add(&mut registry, "Dxun", "10");
    registry.toggle_selection(id).unwrap();

    assert_eq!(registry.start_timers(&[], t0()), 0);

    let entry = registry.get(id).unwrap();
    assert_eq!(entry.state(t0()), TimerState::Idle);
    assert!(entry.is_selected());
}

#[test]
fn start_timers_sets_deadline_and_clears_selection() {
    let mut registry = BossRegistry::new();
    let a = add(&mut registry, "A", "1:00:00");
    let b = add(&mut registry, "B", "30");
    registry.select_all(true);

    assert_eq!(registry.start_timers(&[a], t0()), 1);

    let a_entry = registry.get(a).unwrap();
    assert_eq!(a_entry.next_refresh(), Some(at(3600)));
    assert!(!a_entry.is_selected());

    let b_entry = registry.get(b).unwrap();
    assert_eq!(b_entry.state(t0()), TimerState::Idle);
    assert!(b_entry.is_selected());
}

#[test]
fn start_timers_skips_unknown_ids() {
    let mut registry = BossRegistry::new();
    let a = add(&mut registry, "A", "10");
    assert_eq!(registry.start_timers(&[a, BossId::new(77)], t0()), 1);
}

#[test]
fn restarting_an_expired_timer_runs_again() {
    let mut registry = BossRegistry::new();
    let id = add(&mut registry, "Dxun", "10");
    registry.start_timers(&[id], t0());
    assert_eq!(registry.get(id).unwrap().state(at(15)), TimerState::Expired);

    registry.start_timers(&[id], at(15));
    assert_eq!(registry.get(id).unwrap().state(at(15)), TimerState::Running);
}

#[test]
fn start_selected_uses_current_selection() {
    let mut registry = BossRegistry::new();
    let a = add(&mut registry, "A", "10");
    let b = add(&mut registry, "B", "10");
    registry.toggle_selection(b).unwrap();

    assert_eq!(registry.start_selected(t0()), 1);
    assert_eq!(registry.get(a).unwrap().state(t0()), TimerState::Idle);
    assert_eq!(registry.get(b).unwrap().state(t0()), TimerState::Running);
    assert!(registry.selected_ids().is_empty());
    assert_eq!(registry.start_selected(t0()), 0);
}

#[test]
fn delete_selected_removes_only_selected() {
    let mut registry = BossRegistry::new();
    let a = add(&mut registry, "A", "10");
    let b = add(&mut registry, "B", "10");
    let c = add(&mut registry, "C", "10");
    registry.toggle_selection(a).unwrap();
    registry.toggle_selection(c).unwrap();

    assert_eq!(registry.delete_selected(), 2);
    assert_eq!(registry.len(), 1);
    assert!(registry.get(b).is_some());
}

#[test]
fn delete_after_select_all_empties_registry() {
    let mut registry = BossRegistry::new();
    for map in ["A", "B", "C", "D"] {
        add(&mut registry, map, "10");
    }
    registry.select_all(true);

    assert_eq!(registry.delete_selected(), 4);
    assert!(registry.is_empty());
}

#[test]
fn delete_with_nothing_selected_returns_zero() {
    let mut registry = BossRegistry::new();
    add(&mut registry, "A", "10");
    assert_eq!(registry.delete_selected(), 0);
    assert_eq!(registry.len(), 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// Sorting
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn sorted_view_orders_by_remaining_time() {
    let mut registry = BossRegistry::new();
    let slow = add(&mut registry, "Slow", "1:00:00");
    let fast = add(&mut registry, "Fast", "5:00");
    let mid = add(&mut registry, "Mid", "30:00");
    registry.start_timers(&[slow, fast, mid], t0());

    assert_eq!(maps(&registry.sorted_view(at(10))), ["Fast", "Mid", "Slow"]);
}

#[test]
fn idle_entries_sort_last_regardless_of_position() {
    let mut registry = BossRegistry::new();
    add(&mut registry, "Idle1", "1");
    let long = add(&mut registry, "Long", "100:00:00");
    add(&mut registry, "Idle2", "1");
    let expired = add(&mut registry, "Expired", "1");
    registry.start_timers(&[long, expired], t0());

    let view = registry.sorted_view(at(60));
    assert_eq!(maps(&view), ["Expired", "Long", "Idle1", "Idle2"]);
}

#[test]
fn sorted_view_is_stable_for_ties() {
    let mut registry = BossRegistry::new();
    let ids: Vec<BossId> = ["C", "A", "B"]
        .into_iter()
        .map(|m| add(&mut registry, m, "10:00"))
        .collect();
    registry.start_timers(&ids, t0());
    add(&mut registry, "Z", "10");
    add(&mut registry, "Y", "10");

    assert_eq!(
        maps(&registry.sorted_view(at(1))),
        ["C", "A", "B", "Z", "Y"]
    );
}

#[test]
fn expired_entries_tie_at_zero() {
    let mut registry = BossRegistry::new();
    let late = add(&mut registry, "Late", "20");
    let early = add(&mut registry, "Early", "10");
    registry.start_timers(&[late, early], t0());

    // Both expired: remaining clamps to zero, insertion order holds
    assert_eq!(maps(&registry.sorted_view(at(300))), ["Late", "Early"]);
    // Both running: shorter first
    assert_eq!(maps(&registry.sorted_view(at(1))), ["Early", "Late"]);
}

#[test]
fn sorted_view_keeps_subsecond_ordering() {
    let mut registry = BossRegistry::new();
    let later = add(&mut registry, "Later", "11");
    let sooner = add(&mut registry, "Sooner", "11");
    registry.start_timers(&[later], t0() + TimeDelta::milliseconds(900));
    registry.start_timers(&[sooner], t0() + TimeDelta::milliseconds(100));

    // 10.1s vs 10.9s left: same whole-second countdown, distinct order
    let now = at(1);
    assert_eq!(maps(&registry.sorted_view(now)), ["Sooner", "Later"]);
    assert_eq!(
        registry.get(sooner).unwrap().remaining(now),
        registry.get(later).unwrap().remaining(now)
    );
}

#[test]
fn sorted_view_does_not_reorder_storage() {
    let mut registry = BossRegistry::new();
    let slow = add(&mut registry, "Slow", "10:00");
    let fast = add(&mut registry, "Fast", "1:00");
    registry.start_timers(&[slow, fast], t0());

    let _ = registry.sorted_view(t0());
    assert_eq!(registry.entries()[0].map(), "Slow");

    registry.resort(t0());
    assert_eq!(registry.entries()[0].map(), "Fast");
    assert_eq!(registry.entries()[1].map(), "Slow");
}

// ═══════════════════════════════════════════════════════════════════════════
// Records
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn records_round_trip_static_fields_only() {
    let mut registry = BossRegistry::new();
    let a = add(&mut registry, "Dxun", "1:30:00");
    add(&mut registry, "Ossus", "45");
    registry.start_timers(&[a], t0());
    registry.select_all(true);

    let records = registry.to_records();
    let reloaded = BossRegistry::from_records(&records).unwrap();

    assert_eq!(reloaded.to_records(), records);
    for entry in reloaded.entries() {
        assert_eq!(entry.state(t0()), TimerState::Idle);
        assert!(!entry.is_selected());
    }
}

#[test]
fn from_records_rejects_whole_set_on_bad_record() {
    let records = vec![
        BossRecord::new("Dxun", "Master", "1:00:00"),
        BossRecord::new("Ossus", "Story", "soon"),
    ];
    assert!(matches!(
        BossRegistry::from_records(&records),
        Err(RegistryError::InvalidFormat(_))
    ));
}
