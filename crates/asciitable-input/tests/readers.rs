use std::io::Cursor;
use std::time::Duration;

use asciitable_input::{InputError, LineReader, MockReader, StdinReader};

// Drives a reader the way a prompt loop does: read until "exit" or close.
fn collect_commands(reader: &mut dyn LineReader) -> Result<Vec<String>, InputError> {
    let mut commands = Vec::new();
    loop {
        match reader.read_line(Some(Duration::from_secs(5)))? {
            Some(line) if line == "exit" => return Ok(commands),
            Some(line) => commands.push(line),
            None => continue,
        }
    }
}

#[test]
fn stdin_reader_feeds_a_prompt_loop() {
    let mut reader = StdinReader::from_source(Cursor::new("example\n  complex  \nexit\nignored\n"));
    let commands = collect_commands(&mut reader).unwrap();
    assert_eq!(commands, vec!["example", "complex"]);
}

#[test]
fn mock_reader_skips_timeouts() {
    let mut reader = MockReader::new().line("one").timeout().line("two").line("exit");
    let commands = collect_commands(&mut reader).unwrap();
    assert_eq!(commands, vec!["one", "two"]);
    assert_eq!(reader.remaining(), 0);
}

#[test]
fn boxed_readers_forward() {
    let mut reader: Box<dyn LineReader> = Box::new(MockReader::with_lines(["a"]));
    assert_eq!(reader.read_line(None).unwrap(), Some("a".to_string()));
    assert!(reader.read_line(None).unwrap_err().is_closed());
}

#[test]
fn closed_stream_ends_the_loop_with_an_error() {
    let mut reader = StdinReader::from_source(Cursor::new("only\n"));
    let err = collect_commands(&mut reader).unwrap_err();
    assert!(matches!(err, InputError::Closed));
}
