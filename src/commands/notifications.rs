use std::time::Duration;

use clap::ArgMatches;
use colored::*;

use super::{output_format, required, unknown};
use crate::cli_context::CliContext;
use crate::client::TaskboardClient;
use crate::constants::NOTIFICATION_POLL_SECS;
use crate::error::TaskboardResult;
use crate::formatting::tables::{print_notification, print_notifications};
use crate::formatting::print_success;
use crate::logging::{log_error, log_info};
use crate::notification_feed::NotificationFeed;

pub async fn handle_notifications(context: &mut CliContext, matches: &ArgMatches) -> TaskboardResult<()> {
    let client = context.verified_client()?;

    match matches.subcommand() {
        Some(("list", sub)) => {
            let mut notifications = client.get_notifications().await?;
            if sub.get_flag("unread") {
                notifications.retain(|n| !n.read);
            }
            let unread = notifications.iter().filter(|n| !n.read).count();
            print_notifications(&notifications, output_format(sub)?);
            if unread > 0 {
                println!("\n{} unread", unread.to_string().blue().bold());
            }
        }
        Some(("read", sub)) => {
            let id = required(sub, "id")?;
            client.mark_notification_read(id).await?;
            print_success("Notification marked read");
        }
        Some(("read-all", _)) => {
            client.mark_all_notifications_read().await?;
            print_success("All notifications marked read");
        }
        Some(("count", _)) => {
            let count = client.get_unread_count().await?;
            println!("{} unread", count.to_string().blue().bold());
        }
        Some(("watch", sub)) => {
            let secs = sub
                .get_one::<u64>("interval")
                .copied()
                .unwrap_or(NOTIFICATION_POLL_SECS);
            watch(&client, Duration::from_secs(secs)).await?;
        }
        _ => return Err(unknown("notifications")),
    }

    Ok(())
}

/// Polls until Ctrl-C, printing only notifications that arrived since the
/// previous poll. Transient failures are logged and retried next tick; an
/// auth failure ends the watch.
async fn watch(client: &TaskboardClient, every: Duration) -> TaskboardResult<()> {
    let mut feed = NotificationFeed::new();
    let mut ticker = tokio::time::interval(every);

    println!(
        "{} (every {}s, Ctrl-C to stop)",
        "Watching notifications".bold(),
        every.as_secs()
    );
    log_info(&format!("Watching notifications every {}s", every.as_secs()));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let notifications = match client.get_notifications().await {
                    Ok(list) => list,
                    Err(e) if e.is_auth_failure() => return Err(e),
                    Err(e) => {
                        log_error(&format!("Notification poll failed: {}", e));
                        eprintln!("{} {}", "!".yellow(), e.to_string().dimmed());
                        continue;
                    }
                };

                let first_poll = !feed.has_polled();
                let fresh = feed.ingest_arrivals(&notifications);
                if first_poll {
                    println!("{} unread", feed.unread_count().to_string().blue().bold());
                }
                for notification in &fresh {
                    print_notification(notification);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                return Ok(());
            }
        }
    }
}
