use roadlogger::core::calculator::audit::{EntryIssue, audit_entries};
use roadlogger::core::calculator::grid::{HOUR_MARK_COUNT, build_hour_marks};
use roadlogger::core::calculator::polyline::map_to_points;
use roadlogger::core::calculator::totals::calculate_hours;
use roadlogger::core::logic::Core;
use roadlogger::models::day_log::{DayLog, flatten};
use roadlogger::models::duty_status::DutyStatus;
use roadlogger::models::log_entry::LogEntry;

const WIDTH: f64 = 520.0;
const EPS: f64 = 1e-9;

fn entry(time: &str, status: &str) -> LogEntry {
    LogEntry {
        time: Some(time.to_string()),
        duty_status: Some(status.to_string()),
        location: None,
        remarks: None,
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn test_full_day_totals_sum_to_24() {
    let entries = vec![
        entry("00:00", "OFF_DUTY"),
        entry("06:30", "DRIVING"),
        entry("10:15", "ON_DUTY"),
        entry("14:00", "SLEEPER"),
        entry("22:45", "OFF_DUTY"),
    ];

    let totals = calculate_hours(&entries);

    assert!(close(totals.driving, 3.75));
    assert!(close(totals.on_duty, 3.75));
    assert!(close(totals.sleeper, 8.75));
    assert!(close(totals.off_duty, 6.5 + 1.25));
    assert!(close(totals.total(), 24.0));
}

#[test]
fn test_empty_sequence() {
    let entries: Vec<LogEntry> = Vec::new();

    let totals = calculate_hours(&entries);
    assert!(close(totals.total(), 0.0));

    assert!(map_to_points(&entries, WIDTH).is_empty());

    // The hour grid is independent of the data.
    assert_eq!(build_hour_marks(WIDTH).len(), HOUR_MARK_COUNT as usize);
}

#[test]
fn test_single_entry_holds_until_midnight() {
    let entries = vec![entry("00:00", "DRIVING")];

    let totals = calculate_hours(&entries);

    assert!(close(totals.driving, 24.0));
    assert!(close(totals.off_duty, 0.0));
    assert!(close(totals.sleeper, 0.0));
    assert!(close(totals.on_duty, 0.0));
}

#[test]
fn test_zero_length_segment_between_equal_times() {
    let entries = vec![
        entry("06:00", "OFF_DUTY"),
        entry("14:00", "DRIVING"),
        entry("14:00", "ON_DUTY"),
    ];

    let totals = calculate_hours(&entries);

    assert!(close(totals.off_duty, 8.0));
    assert!(close(totals.driving, 0.0));
    assert!(close(totals.on_duty, 10.0));
    assert!(close(totals.sleeper, 0.0));
}

#[test]
fn test_malformed_time_skips_its_pairs_only() {
    let entries = vec![
        entry("00:00", "OFF_DUTY"),
        entry("bad", "DRIVING"),
        entry("12:00", "ON_DUTY"),
    ];

    let totals = calculate_hours(&entries);

    // Both pairs touching the malformed entry contribute nothing; the
    // tail after 12:00 still counts.
    assert!(close(totals.off_duty, 0.0));
    assert!(close(totals.driving, 0.0));
    assert!(close(totals.on_duty, 12.0));

    // The malformed entry is dropped from the polyline, nothing else.
    let points = map_to_points(&entries, WIDTH);
    assert_eq!(points.len(), 2);
    assert!(close(points[0].x, 0.0));
    assert!(close(points[1].x, 0.5 * WIDTH));
}

#[test]
fn test_missing_fields_excluded_from_points() {
    let no_time = LogEntry {
        duty_status: Some("DRIVING".to_string()),
        ..LogEntry::default()
    };
    let no_status = LogEntry {
        time: Some("10:00".to_string()),
        ..LogEntry::default()
    };

    let entries = vec![
        no_time,
        no_status,
        entry("11:00", "YARD_MOVE"),
        entry("12:00", "SLEEPER"),
    ];

    let points = map_to_points(&entries, WIDTH);

    assert_eq!(points.len(), 1);
    assert!(close(points[0].y, DutyStatus::Sleeper.ordinate()));
}

#[test]
fn test_unknown_status_excluded_from_totals() {
    let entries = vec![entry("00:00", "YARD_MOVE"), entry("12:00", "DRIVING")];

    let totals = calculate_hours(&entries);

    // The unknown interval lands in no bucket.
    assert!(close(totals.total(), 12.0));
    assert!(close(totals.driving, 12.0));
}

#[test]
fn test_out_of_order_pair_clamps_to_zero() {
    let entries = vec![entry("10:00", "DRIVING"), entry("08:00", "ON_DUTY")];

    let totals = calculate_hours(&entries);

    assert!(close(totals.driving, 0.0));
    assert!(close(totals.on_duty, 16.0));

    let issues = audit_entries(&entries);
    assert!(issues.iter().any(|i| matches!(
        i,
        EntryIssue::OutOfOrder {
            index: 1,
            minutes: 480,
            prev_minutes: 600
        }
    )));
}

#[test]
fn test_audit_reports_every_skip_reason() {
    let entries = vec![
        LogEntry::default(),
        entry("99x:00", "DRIVING"),
        entry("08:00", "YARD_MOVE"),
    ];

    let issues = audit_entries(&entries);

    assert!(
        issues
            .iter()
            .any(|i| matches!(i, EntryIssue::MissingTime { index: 0 }))
    );
    assert!(
        issues
            .iter()
            .any(|i| matches!(i, EntryIssue::MissingStatus { index: 0 }))
    );
    assert!(
        issues
            .iter()
            .any(|i| matches!(i, EntryIssue::BadTime { index: 1, .. }))
    );
    assert!(
        issues
            .iter()
            .any(|i| matches!(i, EntryIssue::UnknownStatus { index: 2, .. }))
    );
}

#[test]
fn test_clean_sequence_passes_audit() {
    let entries = vec![
        entry("08:00", "ON_DUTY"),
        entry("09:00", "DRIVING"),
        entry("17:00", "OFF_DUTY"),
    ];

    assert!(audit_entries(&entries).is_empty());
}

#[test]
fn test_x_coordinate_boundaries() {
    let entries = vec![entry("00:00", "OFF_DUTY"), entry("24:00", "OFF_DUTY")];

    let points = map_to_points(&entries, WIDTH);

    assert!(close(points[0].x, 0.0));
    assert!(close(points[1].x, WIDTH));
}

#[test]
fn test_points_keep_input_order() {
    // Out-of-order input is mapped as-is: no sorting, no dedup.
    let entries = vec![
        entry("12:00", "DRIVING"),
        entry("06:00", "OFF_DUTY"),
        entry("12:00", "DRIVING"),
    ];

    let points = map_to_points(&entries, WIDTH);

    assert_eq!(points.len(), 3);
    assert!(points[0].x > points[1].x);
    assert!(close(points[0].x, points[2].x));
}

#[test]
fn test_recomputation_is_bit_identical() {
    let entries = vec![
        entry("08:00", "ON_DUTY"),
        entry("09:10", "DRIVING"),
        entry("16:45", "OFF_DUTY"),
    ];

    assert_eq!(calculate_hours(&entries), calculate_hours(&entries));
    assert_eq!(map_to_points(&entries, WIDTH), map_to_points(&entries, WIDTH));
    assert_eq!(
        Core::build_log_graph(&entries, WIDTH),
        Core::build_log_graph(&entries, WIDTH)
    );
}

#[test]
fn test_hour_marks_evenly_spaced_and_labeled() {
    let marks = build_hour_marks(WIDTH);

    assert_eq!(marks.len(), 25);
    assert!(close(marks[0].x, 0.0));
    assert!(close(marks[6].x, WIDTH / 4.0));
    assert!(close(marks[12].x, WIDTH / 2.0));
    assert!(close(marks[24].x, WIDTH));

    for (i, mark) in marks.iter().enumerate() {
        assert_eq!(mark.label, i as u32);
    }
}

#[test]
fn test_status_ordinates_are_fixed() {
    assert_eq!(DutyStatus::OffDuty.ordinate(), 30.0);
    assert_eq!(DutyStatus::Sleeper.ordinate(), 70.0);
    assert_eq!(DutyStatus::Driving.ordinate(), 110.0);
    assert_eq!(DutyStatus::OnDuty.ordinate(), 150.0);

    assert_eq!(DutyStatus::from_tag("DRIVING"), Some(DutyStatus::Driving));
    assert_eq!(DutyStatus::from_tag("YARD_MOVE"), None);
}

#[test]
fn test_flatten_preserves_day_and_entry_order() {
    let days = vec![
        DayLog {
            day: 1,
            logs: vec![entry("08:00", "ON_DUTY"), entry("09:00", "DRIVING")],
        },
        DayLog {
            day: 2,
            logs: vec![entry("08:00", "ON_DUTY")],
        },
    ];

    let flat = flatten(&days);

    assert_eq!(flat.len(), 3);
    assert_eq!(flat[1].duty_status.as_deref(), Some("DRIVING"));
    assert_eq!(flat[2].time.as_deref(), Some("08:00"));
}

#[test]
fn test_build_log_graph_combines_all_three_outputs() {
    let entries = vec![entry("00:00", "DRIVING"), entry("12:00", "SLEEPER")];

    let graph = Core::build_log_graph(&entries, WIDTH);

    assert_eq!(graph.totals, calculate_hours(&entries));
    assert_eq!(graph.points, map_to_points(&entries, WIDTH));
    assert_eq!(graph.hour_marks.len(), 25);
    assert!(close(graph.totals.driving, 12.0));
    assert!(close(graph.totals.sleeper, 12.0));
}
