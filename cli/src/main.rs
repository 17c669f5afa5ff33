use bosswatch_cli::CliContext;
use bosswatch_cli::context::now;
use bosswatch_cli::{commands, logging, repl, respond};
use bosswatch_core::{AppConfig, AppConfigExt, CountdownScheduler, SchedulerConfig, SchedulerEvent};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), String> {
    let _log_guard = logging::init();

    let mut ctx = CliContext::new(AppConfig::load());
    println!("{}", commands::list(&ctx));

    let (refresh_tx, mut refresh_rx) = mpsc::channel(4);
    let scheduler = CountdownScheduler::spawn(SchedulerConfig::from(&ctx.config), refresh_tx);

    let (line_tx, mut line_rx) = mpsc::channel(16);
    repl::spawn_reader(line_tx);
    repl::prompt()?;

    loop {
        tokio::select! {
            line = line_rx.recv() => {
                // stdin closed
                let Some(line) = line else { break };
                let line = line.trim();
                if line.is_empty() {
                    repl::prompt()?;
                    continue;
                }

                match respond(line, &mut ctx) {
                    Ok(response) => {
                        if !response.output.is_empty() {
                            println!("{}", response.output);
                        }
                        if response.quit {
                            break;
                        }
                    }
                    Err(err) => println!("{err}"),
                }
                repl::prompt()?;
            }
            Some(event) = refresh_rx.recv() => {
                on_refresh(&mut ctx, event)?;
            }
        }
    }

    scheduler.shutdown().await;

    if let Err(e) = ctx.save_on_exit() {
        tracing::error!(error = %e, "Failed to save boss list on exit");
        println!("Failed to save: {}", commands::error_chain(&e));
    }

    Ok(())
}

/// Periodic re-sort, with a redraw when live view is on.
fn on_refresh(ctx: &mut CliContext, event: SchedulerEvent) -> Result<(), String> {
    let SchedulerEvent::Refresh { tick } = event;
    tracing::trace!(tick, "Refreshing boss table");
    ctx.registry.resort(now());

    if ctx.config.live_view && !ctx.registry.is_empty() {
        // Clear screen, home cursor
        print!("\x1B[2J\x1B[1;1H");
        println!("{}", commands::list(ctx));
        repl::prompt()?;
    }
    Ok(())
}
