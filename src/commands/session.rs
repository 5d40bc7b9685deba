use crate::catalog;
use crate::commands::runtime::recommendation_row;
use crate::*;
use std::io::BufRead;

const DEFAULT_RECOMMENDATIONS: usize = 4;
const DEFAULT_DONATION: f64 = 5.0;

/// Interactive per-process session: the stand-in for the app's per-session
/// store. All state lives in one `Session` value and dies on exit.
pub fn handle_session_command(
    cli: &Cli,
    config: &AppConfig,
    catalog: &catalog::Catalog,
) -> anyhow::Result<bool> {
    if !matches!(cli.command, Commands::Session) {
        return Ok(false);
    }
    let stdin = std::io::stdin();
    run_session(cli, config, catalog, stdin.lock())?;
    Ok(true)
}

fn run_session(
    cli: &Cli,
    config: &AppConfig,
    catalog: &catalog::Catalog,
    input: impl BufRead,
) -> anyhow::Result<()> {
    let mut session = Session::new();
    if !cli.json {
        println!("unstitched session: 'help' lists actions, 'quit' leaves");
    }
    for line in input.lines() {
        let line = line?;
        let action = line.trim();
        if action.is_empty() {
            continue;
        }
        if action == "quit" || action == "exit" {
            break;
        }
        if let Err(e) = apply_action(cli, config, catalog, &mut session, action) {
            // soft failure: report and keep the session alive
            print_error(cli.json, &e);
        }
    }
    Ok(())
}

fn emit(json: bool, action: &str, data: serde_json::Value, text: String) {
    if json {
        println!(
            "{}",
            serde_json::json!({"ok": true, "action": action, "data": data})
        );
    } else {
        println!("{text}");
    }
}

fn apply_action(
    cli: &Cli,
    config: &AppConfig,
    catalog: &catalog::Catalog,
    session: &mut Session,
    action: &str,
) -> anyhow::Result<()> {
    let mut parts = action.split_whitespace();
    let verb = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();

    match verb {
        "help" => {
            let actions = [
                "signin [name]", "guest", "styles <a,b,...>", "scan", "history", "summary",
                "shop", "buy <item-id>", "recommend [k]", "subscribe", "board",
                "donate <charity-id> [amount]", "accessibility on|off", "logout", "quit",
            ];
            emit(
                cli.json,
                "help",
                serde_json::json!(actions),
                actions.join("\n"),
            );
        }
        "signin" => {
            session.sign_in();
            let name = rest.first().copied().unwrap_or("there");
            emit(
                cli.json,
                "signin",
                serde_json::json!({"role": session.role}),
                format!("Hi, {name}! You are signed in."),
            );
        }
        "guest" => {
            session.continue_as_guest();
            emit(
                cli.json,
                "guest",
                serde_json::json!({
                    "role": session.role,
                    "remaining_scans": session.remaining_guest_scans()
                }),
                format!(
                    "Browsing as guest; {} free scans available.",
                    session.remaining_guest_scans()
                ),
            );
        }
        "styles" => {
            session.styles = rest
                .join(" ")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            let mut chosen: Vec<&String> = session.styles.iter().collect();
            chosen.sort();
            emit(
                cli.json,
                "styles",
                serde_json::json!(chosen),
                format!("Style preferences set: {}", rest.join(" ")),
            );
        }
        "accessibility" => {
            session.accessibility = rest.first().copied() == Some("on");
            emit(
                cli.json,
                "accessibility",
                serde_json::json!({"accessibility": session.accessibility}),
                format!("Accessibility mode {}", if session.accessibility { "on" } else { "off" }),
            );
        }
        "scan" => {
            session.ensure_can_scan()?;
            let mut rng = rand::thread_rng();
            let acq = acquire_label(None, &config.label, &mut rng);
            let report = scan_report(&config.scoring, acq.result, acq.note);
            session.record_scan(ScanHistoryEntry {
                risk: report.risk,
                brand: report.brand.clone(),
                material: report.material.clone(),
            })?;
            audit(
                "scan",
                serde_json::json!({"brand": report.brand, "risk": report.risk, "is_real": report.is_real}),
            );
            let mut text = format!(
                "{} | {} | {} -> {}% ({})\n{}",
                report.brand, report.material, report.origin, report.risk, report.band,
                report.explanation
            );
            if let Some(note) = &report.note {
                text.push_str(&format!("\nnote: {note}"));
            }
            emit(cli.json, "scan", serde_json::to_value(&report)?, text);
        }
        "history" => {
            let entries = session.history();
            let text = entries
                .iter()
                .enumerate()
                .map(|(i, e)| format!("{}\t{}%\t{}\t{}", i + 1, e.risk, e.brand, e.material))
                .collect::<Vec<_>>()
                .join("\n");
            emit(cli.json, "history", serde_json::to_value(entries)?, text);
        }
        "summary" => {
            let summary = session.summary();
            let text = if summary.scan_count == 0 {
                "No scan data yet. Go scan some labels!".to_string()
            } else {
                format!(
                    "{} scans, average risk {:.1}%",
                    summary.scan_count, summary.average_risk
                )
            };
            emit(cli.json, "summary", serde_json::to_value(&summary)?, text);
        }
        "shop" => {
            let items = catalog::discover(catalog, None);
            let text = items
                .iter()
                .map(|i| format!("{}\t{}\t£{:.2}\t{}", i.id, i.title, i.price, i.seller))
                .collect::<Vec<_>>()
                .join("\n");
            emit(cli.json, "shop", serde_json::to_value(&items)?, text);
        }
        "buy" => {
            session.ensure_signed_in("sign in to buy")?;
            let id = rest.first().copied().unwrap_or_default();
            let item = catalog::show(catalog, id)?;
            audit("buy", serde_json::json!({"item": item.id}));
            emit(
                cli.json,
                "buy",
                serde_json::json!({"item": item.id, "status": "added_to_cart"}),
                format!("Added {} to cart!", item.title),
            );
        }
        "recommend" => {
            let k = rest
                .first()
                .and_then(|r| r.parse::<usize>().ok())
                .unwrap_or(DEFAULT_RECOMMENDATIONS);
            let materials = session.scan_materials();
            let mut rng = rand::thread_rng();
            let picks = recommend_items(&catalog.items, &session.styles, &materials, k, &mut rng);
            let rows: Vec<RecommendationRow> = picks.iter().map(recommendation_row).collect();
            let text = rows
                .iter()
                .map(|r| format!("{}\t{}\t£{:.2}", r.id, r.title, r.price))
                .collect::<Vec<_>>()
                .join("\n");
            emit(cli.json, "recommend", serde_json::to_value(&rows)?, text);
        }
        "subscribe" => {
            let changed = session.subscribe();
            audit("subscribe", serde_json::json!({"tier": session.tier}));
            emit(
                cli.json,
                "subscribe",
                serde_json::json!({"tier": session.tier, "changed": changed}),
                if changed {
                    "Welcome to the club! Premium unlocked.".to_string()
                } else {
                    "You are already a member.".to_string()
                },
            );
        }
        "board" => {
            session.ensure_premium("the community board is for premium members")?;
            let entries: Vec<serde_json::Value> = BOARD_ENTRIES
                .iter()
                .map(|(user, caption)| serde_json::json!({"user": user, "caption": caption}))
                .collect();
            let text = std::iter::once(BOARD_CHALLENGE.to_string())
                .chain(
                    BOARD_ENTRIES
                        .iter()
                        .map(|(user, caption)| format!("{user}: {caption}")),
                )
                .collect::<Vec<_>>()
                .join("\n");
            emit(
                cli.json,
                "board",
                serde_json::json!({"challenge": BOARD_CHALLENGE, "entries": entries}),
                text,
            );
        }
        "donate" => {
            session.ensure_signed_in("sign in to donate")?;
            let id = rest.first().copied().unwrap_or_default();
            let charity = catalog::find_charity(catalog, id)?;
            let amount = rest
                .get(1)
                .and_then(|r| r.parse::<f64>().ok())
                .unwrap_or(DEFAULT_DONATION);
            audit(
                "donate",
                serde_json::json!({"charity": charity.id, "amount": amount}),
            );
            emit(
                cli.json,
                "donate",
                serde_json::json!({"charity": charity.id, "amount": amount, "status": "thank_you"}),
                format!("Thank you for giving £{:.2} to {}.", amount, charity.name),
            );
        }
        "logout" => {
            session.log_out();
            emit(
                cli.json,
                "logout",
                serde_json::json!({"role": session.role}),
                "Logged out; session reset.".to_string(),
            );
        }
        other => {
            anyhow::bail!("unknown action: {other} (try 'help')");
        }
    }

    Ok(())
}
