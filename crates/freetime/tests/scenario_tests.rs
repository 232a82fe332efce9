//! End-to-end availability scenarios: slots → verdicts → ranges → report lines.

use chrono::{NaiveDate, TimeZone, Utc};
use freetime::report::{format_range, write_day};
use freetime::{
    evaluate_slots, find_availability, find_day_availability, generate_slots, merge_verdicts,
    write_json_report, write_text_report, AvailabilityConfig, DayAvailability, Event,
    RequestedNames, User, UserDirectory,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 7, 5).unwrap()
}

fn busy(id: &str, sh: u32, sm: u32, eh: u32, em: u32) -> Event {
    Event::new(
        id,
        Utc.with_ymd_and_hms(2021, 7, 5, sh, sm, 0).unwrap(),
        Utc.with_ymd_and_hms(2021, 7, 5, eh, em, 0).unwrap(),
    )
}

fn config(names: &str, start: i64, end: i64) -> AvailabilityConfig {
    AvailabilityConfig::new(RequestedNames::parse(names).unwrap(), start, end)
        .unwrap()
        .with_days(vec![day()])
}

fn lines(result: &DayAvailability) -> Vec<String> {
    result.ranges.iter().map(format_range).collect()
}

/// Run the pipeline over 13:00-13:30, which whole work hours cannot express:
/// the first two slots of a 13:00-14:00 day.
fn half_hour_day(names: &str, users: &UserDirectory) -> DayAvailability {
    let requested = RequestedNames::parse(names).unwrap();
    let slots = generate_slots(day(), 13, 14);
    let verdicts = evaluate_slots(&slots[..2], &requested, users);
    DayAvailability {
        date: day(),
        ranges: merge_verdicts(&verdicts),
    }
}

// ── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn scenario_free_user_gets_whole_window() {
    let users = UserDirectory::from_users([User::new("1", "Maggie", vec![])]).unwrap();
    let result = half_hour_day("Maggie", &users);
    assert_eq!(lines(&result), vec!["2021-07-05 13:00 - 13:30"]);
}

#[test]
fn scenario_busy_first_slot_leaves_second() {
    let users =
        UserDirectory::from_users([User::new("1", "Maggie", vec![busy("1", 13, 0, 13, 15)])])
            .unwrap();
    let result = half_hour_day("Maggie", &users);
    assert_eq!(lines(&result), vec!["2021-07-05 13:15 - 13:30"]);
}

#[test]
fn scenario_one_busy_member_blocks_group() {
    let users = UserDirectory::from_users([
        User::new("1", "Maggie", vec![]),
        User::new("2", "Joe", vec![busy("2", 13, 0, 13, 30)]),
    ])
    .unwrap();
    let result = half_hour_day("Maggie,Joe", &users);
    assert!(result.ranges.is_empty());
}

#[test]
fn scenario_busy_second_slot_splits_hour() {
    let users =
        UserDirectory::from_users([User::new("1", "Maggie", vec![busy("1", 13, 15, 13, 30)])])
            .unwrap();
    let result = find_day_availability(day(), &config("Maggie", 13, 14), &users);
    assert_eq!(
        lines(&result),
        vec!["2021-07-05 13:00 - 13:15", "2021-07-05 13:30 - 14:00"]
    );
}

// ── Planner across days ─────────────────────────────────────────────────────

#[test]
fn each_day_is_merged_independently() {
    let users = UserDirectory::from_users([User::new(
        "1",
        "Maggie",
        vec![Event::new(
            "1",
            Utc.with_ymd_and_hms(2021, 7, 6, 13, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2021, 7, 6, 14, 0, 0).unwrap(),
        )],
    )])
    .unwrap();
    let cfg = AvailabilityConfig::new(RequestedNames::parse("Maggie").unwrap(), 13, 15).unwrap();

    let days = find_availability(&cfg, &users);

    assert_eq!(days.len(), 3);
    assert_eq!(lines(&days[0]), vec!["2021-07-05 13:00 - 15:00"]);
    assert_eq!(lines(&days[1]), vec!["2021-07-06 14:00 - 15:00"]);
    assert_eq!(lines(&days[2]), vec!["2021-07-07 13:00 - 15:00"]);
}

#[test]
fn empty_work_day_reports_nothing() {
    let users = UserDirectory::from_users([User::new("1", "Maggie", vec![])]).unwrap();
    let days = find_availability(&config("Maggie", 9, 9), &users);
    assert_eq!(days.len(), 1);
    assert!(days[0].ranges.is_empty());
}

#[test]
fn unknown_name_reports_nothing() {
    let users = UserDirectory::from_users([User::new("1", "Maggie", vec![])]).unwrap();
    let days = find_availability(&config("Maggie,Nobody", 13, 21), &users);
    assert!(days[0].ranges.is_empty());
}

// ── Report rendering ────────────────────────────────────────────────────────

#[test]
fn text_report_has_header_and_blank_line_per_day() {
    let users =
        UserDirectory::from_users([User::new("1", "Maggie", vec![busy("1", 13, 15, 13, 30)])])
            .unwrap();
    let cfg = AvailabilityConfig::new(RequestedNames::parse("Maggie").unwrap(), 13, 14)
        .unwrap()
        .with_days(vec![day(), NaiveDate::from_ymd_opt(2021, 7, 6).unwrap()]);
    let days = find_availability(&cfg, &users);

    let mut out = Vec::new();
    write_text_report(&mut out, &days).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Availability\n\
         -----------------------\n\
         2021-07-05 13:00 - 13:15\n\
         2021-07-05 13:30 - 14:00\n\
         \n\
         2021-07-06 13:00 - 14:00\n\
         \n"
    );
}

#[test]
fn day_without_ranges_still_writes_separator() {
    let mut out = Vec::new();
    write_day(
        &mut out,
        &DayAvailability {
            date: day(),
            ranges: vec![],
        },
    )
    .unwrap();
    assert_eq!(out, b"\n");
}

#[test]
fn json_report_lists_dates_and_instants() {
    let users = UserDirectory::from_users([User::new("1", "Maggie", vec![])]).unwrap();
    let days = find_availability(&config("Maggie", 13, 14), &users);

    let mut out = Vec::new();
    write_json_report(&mut out, &days).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(value[0]["date"], "2021-07-05");
    assert_eq!(value[0]["ranges"][0]["start"], "2021-07-05T13:00:00Z");
    assert_eq!(value[0]["ranges"][0]["end"], "2021-07-05T14:00:00Z");
}
