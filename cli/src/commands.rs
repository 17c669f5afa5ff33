//! Command handlers
//!
//! Each handler mutates the context through the registry's entry points and
//! returns the status line to show. Errors come back as display strings.

use bosswatch_core::{BossId, RegistryError};

use crate::CliContext;
use crate::context::now;
use crate::region::{ClickAction, Region};
use crate::view;

pub fn list(ctx: &CliContext) -> String {
    view::render_table(ctx.registry.entries(), now())
}

pub fn add(ctx: &mut CliContext, map: &str, level: &str, interval: &str) -> Result<String, String> {
    let entry = ctx
        .registry
        .add(map, level, interval)
        .map_err(|e| e.to_string())?;
    Ok(format!(
        "Added {} ({}), refreshes every {}",
        entry.map(),
        entry.level(),
        entry.refresh_interval().canonical()
    ))
}

/// Edit a boss. Omitted fields keep their current value.
pub fn edit(
    ctx: &mut CliContext,
    id: u64,
    map: Option<&str>,
    level: Option<&str>,
    interval: Option<&str>,
) -> Result<String, String> {
    let id = BossId::new(id);
    let (map, level, interval) = {
        let current = ctx
            .registry
            .get(id)
            .ok_or_else(|| RegistryError::NotFound { id }.to_string())?;
        (
            map.unwrap_or(current.map()).to_string(),
            level.unwrap_or(current.level()).to_string(),
            interval
                .unwrap_or(current.refresh_interval().as_str())
                .to_string(),
        )
    };

    let now = now();
    ctx.registry
        .edit(id, &map, &level, &interval, now)
        .map_err(|e| e.to_string())?;
    ctx.registry.resort(now);
    Ok(format!("Updated boss {}", id))
}

pub fn toggle(ctx: &mut CliContext, id: u64) -> Result<String, String> {
    let id = BossId::new(id);
    let selected = ctx.registry.toggle_selection(id).map_err(|e| e.to_string())?;
    Ok(format!(
        "{} boss {}",
        if selected { "Selected" } else { "Deselected" },
        id
    ))
}

pub fn select_all(ctx: &mut CliContext, selected: bool) -> String {
    ctx.set_all_selected(selected);
    if selected {
        format!("Selected all {} bosses", ctx.registry.len())
    } else {
        "Selection cleared".to_string()
    }
}

/// Start (or reset) timers for the selected bosses.
pub fn start(ctx: &mut CliContext) -> String {
    if ctx.registry.selected_ids().is_empty() {
        return "Select the bosses to start first".to_string();
    }
    let now = now();
    let started = ctx.registry.start_selected(now);
    ctx.registry.resort(now);
    format!("Started timers for {} bosses", started)
}

/// Delete the selected bosses. Without `confirmed` only reports the count.
pub fn delete(ctx: &mut CliContext, confirmed: bool) -> String {
    let selected = ctx.registry.selected_ids().len();
    if selected == 0 {
        return "Select the bosses to delete first".to_string();
    }
    if !confirmed {
        return format!(
            "{} bosses selected. Run `delete --yes` to delete them",
            selected
        );
    }
    let removed = ctx.registry.delete_selected();
    format!("Deleted {} bosses", removed)
}

pub fn click(ctx: &mut CliContext, region: Region, id: Option<u64>) -> Result<String, String> {
    match region.action(id.map(BossId::new)) {
        ClickAction::ToggleAll => {
            let all = ctx.toggle_all();
            Ok(if all {
                format!("Selected all {} bosses", ctx.registry.len())
            } else {
                "Selection cleared".to_string()
            })
        }
        ClickAction::Toggle(id) => toggle(ctx, id.get()),
        ClickAction::BeginEdit(id) => edit_template(ctx, id),
        ClickAction::Inert => Ok(format!("Nothing to do for {:?}", region)),
    }
}

/// An `edit` command pre-filled with the boss's current values.
fn edit_template(ctx: &CliContext, id: BossId) -> Result<String, String> {
    let entry = ctx
        .registry
        .get(id)
        .ok_or_else(|| RegistryError::NotFound { id }.to_string())?;
    let id = id.to_string();
    let command = shlex::try_join([
        "edit",
        id.as_str(),
        "--map",
        entry.map(),
        "--level",
        entry.level(),
        "--interval",
        entry.refresh_interval().as_str(),
    ])
    .map_err(|e| e.to_string())?;
    Ok(format!("Edit with: {}", command))
}

pub fn save(ctx: &mut CliContext) -> Result<String, String> {
    ctx.save().map_err(|e| error_chain(&e))?;
    Ok(format!(
        "Saved {} bosses to {}",
        ctx.registry.len(),
        ctx.store().path().display()
    ))
}

pub fn reload(ctx: &mut CliContext) -> Result<String, String> {
    let count = ctx.reload().map_err(|e| error_chain(&e))?;
    Ok(format!("Reloaded {} bosses", count))
}

pub fn set_live_view(ctx: &mut CliContext, enabled: bool) -> String {
    ctx.config.live_view = enabled;
    let status = format!("Live view {}", if enabled { "on" } else { "off" });
    match ctx.save_config() {
        Ok(_) => status,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to save settings");
            format!("{status} (not saved: {})", error_chain(&e))
        }
    }
}

pub fn show_settings(ctx: &CliContext) -> String {
    let config_path = ctx
        .config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "not persisted".to_string());
    let c = &ctx.config;
    [
        format!("{:<20} {}", "Config file", config_path),
        format!("{:<20} {}", "Boss list", ctx.store().path().display()),
        format!("{:<20} {}ms", "Tick", c.tick_millis),
        format!("{:<20} {} ticks", "Refresh every", c.refresh_every_ticks),
        format!("{:<20} {}", "Save on exit", c.save_on_exit),
        format!("{:<20} {}", "Live view", c.live_view),
    ]
    .join("\n")
}

pub fn exit() -> String {
    "quitting...".to_string()
}

/// Display an error with its sources, e.g. `failed to read x: permission denied`
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
