//! End-to-end command flow through parser, session, and run loops.

use std::io::Cursor;

use parklot::builders::build_session;
use parklot::config::SimulatorConfig;
use parklot::parser::Tokenizer;
use parklot::runtime;

fn batch_output(input: &str) -> String {
    let session = build_session(&SimulatorConfig::default()).unwrap();
    let mut tokenizer = Tokenizer::new(Cursor::new(input.to_owned()));
    let mut out = Vec::new();
    runtime::run_batch(&session, &mut tokenizer, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn full_scenario_matches_expected_output() {
    let input = "\
create_parking_lot 6
park KA-01-HH-1234 White
park KA-01-HH-9999 White
park KA-01-BB-0001 Black
park KA-01-HH-7777 Red
park KA-01-HH-2701 Blue
park KA-01-HH-3141 Black
leave 4
status
park KA-01-P-333 White
park DL-12-AA-9999 White
registration_numbers_for_cars_with_colour White
slot_numbers_for_cars_with_colour White
slot_number_for_registration_number KA-01-HH-3141
slot_number_for_registration_number MH-04-AY-1111
";
    let expected = "\
Created a parking lot with 6 slots
Allocated slot number: 1
Allocated slot number: 2
Allocated slot number: 3
Allocated slot number: 4
Allocated slot number: 5
Allocated slot number: 6
Slot number 4 is free
Slot No.    Registration No    Colour
1           KA-01-HH-1234      White
2           KA-01-HH-9999      White
3           KA-01-BB-0001      Black
5           KA-01-HH-2701      Blue
6           KA-01-HH-3141      Black
Allocated slot number: 4
Sorry, parking lot is full
KA-01-HH-1234, KA-01-HH-9999, KA-01-P-333
1, 2, 4
6
Not found
";
    assert_eq!(batch_output(input), expected);
}

#[test]
fn freed_slot_is_reused_before_higher_slots() {
    let output = batch_output(
        "\
create_parking_lot 6
park KA-01-HH-1234 White
park KA-01-HH-9999 White
leave 1
park KA-01-HH-0001 Black
slot_numbers_for_cars_with_colour White
registration_numbers_for_cars_with_colour Black
",
    );
    let expected = "\
Created a parking lot with 6 slots
Allocated slot number: 1
Allocated slot number: 2
Slot number 1 is free
Allocated slot number: 1
2
KA-01-HH-0001
";
    assert_eq!(output, expected);
}

#[test]
fn color_lookups_report_arrival_order_after_churn() {
    // Slot 1 frees up and is refilled by a later White arrival, so arrival
    // order and slot order diverge.
    let output = batch_output(
        "\
create_parking_lot 3
park REG-1 White
park REG-2 White
park REG-3 White
leave 1
park REG-4 White
slot_numbers_for_cars_with_colour White
registration_numbers_for_cars_with_colour White
",
    );
    assert!(output.ends_with("2, 3, 1\nREG-2, REG-3, REG-4\n"));
}

#[test]
fn batch_mode_stops_on_first_error() {
    let session = build_session(&SimulatorConfig::default()).unwrap();
    let mut tokenizer = Tokenizer::new(Cursor::new(
        "create_parking_lot 1\nleave 5\nstatus\n".to_owned(),
    ));
    let mut out = Vec::new();
    let result = runtime::run_batch(&session, &mut tokenizer, &mut out);
    assert!(result.is_err());
    // Nothing after the failing command ran.
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Created a parking lot with 1 slots\n"
    );
}

#[test]
fn batch_mode_fails_on_empty_line() {
    let session = build_session(&SimulatorConfig::default()).unwrap();
    let mut tokenizer = Tokenizer::new(Cursor::new("create_parking_lot 1\n\nstatus\n".to_owned()));
    let mut out = Vec::new();
    assert!(runtime::run_batch(&session, &mut tokenizer, &mut out).is_err());
}

#[test]
fn interactive_mode_recovers_from_errors() {
    let session = build_session(&SimulatorConfig::default()).unwrap();
    let input = "\
create_parking_lot 2
unpark now
leave 9
park KA-01-HH-1234 White
";
    let mut tokenizer = Tokenizer::new(Cursor::new(input.to_owned()));
    let mut out = Vec::new();
    let mut err = Vec::new();
    runtime::run_interactive(&session, &mut tokenizer, "$ ", &mut out, &mut err).unwrap();

    let out = String::from_utf8(out).unwrap();
    let err = String::from_utf8(err).unwrap();
    // One prompt per read attempt, including the final one at end of input.
    assert_eq!(out.matches("$ ").count(), 5);
    assert!(out.contains("Created a parking lot with 2 slots\n"));
    assert!(out.contains("Allocated slot number: 1\n"));
    assert!(err.contains("unknown command `unpark`\n"));
    assert!(err.contains("slot 9 exceeds available parking\n"));
}

#[test]
fn farthest_policy_runs_end_to_end() {
    let cfg = SimulatorConfig::from_json_str(r#"{"policy": "farthest"}"#).unwrap();
    let session = build_session(&cfg).unwrap();
    let mut tokenizer = Tokenizer::new(Cursor::new(
        "create_parking_lot 3\npark KA-01-HH-1234 White\npark KA-01-HH-9999 Black\n".to_owned(),
    ));
    let mut out = Vec::new();
    runtime::run_batch(&session, &mut tokenizer, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Created a parking lot with 3 slots\nAllocated slot number: 3\nAllocated slot number: 2\n"
    );
}
