use std::io::Cursor;

use anyhow::Result;
use lrusim::{read_session, InputError, SimulatorConfig, SimulatorError, TokenReader};

fn session(text: &str, config: &SimulatorConfig) -> Result<lrusim::SimulationInput, InputError> {
    let mut reader = TokenReader::new(Cursor::new(text.as_bytes().to_vec()));
    let mut prompts = Vec::new();
    read_session(&mut reader, &mut prompts, config)
}

#[test]
fn test_reference_string_one_per_line() -> Result<()> {
    let input = session("4\n7\n0\n1\n2\n3\n", &SimulatorConfig::default())?;
    assert_eq!(input.reference, vec![7, 0, 1, 2]);
    assert_eq!(input.frames, 3);
    Ok(())
}

#[test]
fn test_negative_page_numbers_are_pages() -> Result<()> {
    let input = session("2 -1 -1 1", &SimulatorConfig::default())?;
    assert_eq!(input.reference, vec![-1, -1]);
    Ok(())
}

#[test]
fn test_rejects_non_positive_counts() {
    let err = session("0\n", &SimulatorConfig::default()).unwrap_err();
    assert!(matches!(err, InputError::Simulator(SimulatorError::InvalidPageCount(0))));

    let err = session("2\n1 2\n-4\n", &SimulatorConfig::default()).unwrap_err();
    assert!(matches!(err, InputError::Simulator(SimulatorError::InvalidFrameCount(-4))));
}

#[test]
fn test_rejects_counts_over_capacity() {
    let config = SimulatorConfig { max_pages: 3, max_frames: 2 };

    let err = session("4\n", &config).unwrap_err();
    assert!(matches!(
        err,
        InputError::Simulator(SimulatorError::PageCapacityExceeded { requested: 4, capacity: 3 })
    ));

    let err = session("1\n9\n3\n", &config).unwrap_err();
    assert!(matches!(
        err,
        InputError::Simulator(SimulatorError::FrameCapacityExceeded { requested: 3, capacity: 2 })
    ));
}

#[test]
fn test_rejects_non_integer_tokens() {
    let err = session("2\n1 two\n3\n", &SimulatorConfig::default()).unwrap_err();
    assert!(matches!(err, InputError::NotAnInteger(ref token) if token == "two"));
}

#[test]
fn test_missing_frame_count() {
    let err = session("2\n1 2\n", &SimulatorConfig::default()).unwrap_err();
    assert!(matches!(err, InputError::UnexpectedEof("the number of frames")));
}
