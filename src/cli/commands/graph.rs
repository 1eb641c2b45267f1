use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::audit::audit_entries;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::{load_driver_log, load_entries_by_date};
use crate::errors::{AppError, AppResult};
use crate::models::duty_status::DutyStatus;
use crate::models::log_graph::LogGraph;
use crate::ui::messages::warning;
use crate::utils::date;
use crate::utils::hours1;
use crate::utils::table::{Column, Table};

/// Compute and print the graph data (totals, polyline, hour grid) for
/// one stored logbook day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Graph {
        date: date_arg,
        width,
        json,
        audit,
    } = cmd
    {
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let entries = load_entries_by_date(&mut pool, &d)?;

        if entries.is_empty() {
            warning(format!("No logbook entries for {d}."));
            return Ok(());
        }

        let graph_width = (*width).unwrap_or(cfg.graph_width);
        let graph = Core::build_log_graph(&entries, graph_width);

        if *json {
            let out = serde_json::to_string_pretty(&graph)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{out}");
        } else {
            let title = match load_driver_log(&mut pool, &d)? {
                Some(log) if !log.driver_name.is_empty() => {
                    format!("{d} ({})", log.driver_name)
                }
                _ => d.to_string(),
            };
            print_totals(&title, &graph);
        }

        if *audit {
            let issues = audit_entries(&entries);
            if issues.is_empty() {
                println!("\nAudit: no skipped or clamped entries.");
            } else {
                println!();
                for issue in issues {
                    warning(issue);
                }
            }
        }
    }
    Ok(())
}

fn print_totals(date: &str, graph: &LogGraph) {
    println!("\n=== {date} ===");

    let mut table = Table::new(vec![
        Column {
            header: "Status".to_string(),
            width: 10,
        },
        Column {
            header: "Hours".to_string(),
            width: 6,
        },
    ]);

    for status in DutyStatus::ALL {
        table.add_row(vec![
            status.colour().paint(status.label()).to_string(),
            hours1(graph.totals.get(status)),
        ]);
    }

    print!("{}", table.render());
    println!(
        "\nTotal: {} | Polyline points: {}",
        hours1(graph.totals.total()),
        graph.points.len()
    );
}
