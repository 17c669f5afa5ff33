//! Clickable regions of the boss table
//!
//! Each table column is a named region. A click is resolved to an action by
//! region name, never by column position.

use bosswatch_core::BossId;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Region {
    Selection,
    MapName,
    Level,
    Interval,
    Countdown,
    EditAction,
}

/// What a click should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Header checkbox: select or clear everything
    ToggleAll,
    Toggle(BossId),
    BeginEdit(BossId),
    Inert,
}

impl Region {
    /// Table column order
    pub const ALL: [Region; 6] = [
        Region::Selection,
        Region::MapName,
        Region::Level,
        Region::Interval,
        Region::Countdown,
        Region::EditAction,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            Region::Selection => "",
            Region::MapName => "Map",
            Region::Level => "Level",
            Region::Interval => "Interval (H:M:S)",
            Region::Countdown => "Countdown",
            Region::EditAction => "Action",
        }
    }

    /// Resolve a click on this region. `target` is `None` for a header click.
    pub fn action(self, target: Option<BossId>) -> ClickAction {
        match (self, target) {
            (Region::Selection, None) => ClickAction::ToggleAll,
            (Region::Selection, Some(id)) => ClickAction::Toggle(id),
            (Region::EditAction, Some(id)) => ClickAction::BeginEdit(id),
            _ => ClickAction::Inert,
        }
    }
}
