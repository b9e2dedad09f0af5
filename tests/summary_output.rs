use chrono::{Local, TimeZone};
use guess_tally::guesses::Guesses;
use guess_tally::writer::{render_summary, SummaryWriter, OUTPUT_FILE};

fn sample() -> Guesses {
    let mut guesses = Guesses::new();
    guesses.record("@carol", 500);
    guesses.record("@alice", 12345);
    guesses.record("@bob", 2);
    guesses.record("@dave", 500);
    guesses
}

fn values(content: &str) -> Vec<i64> {
    content
        .lines()
        .skip(1)
        .map(|line| line.split_whitespace().nth(1).unwrap().parse().unwrap())
        .collect()
}

#[test]
fn test_last_guess_per_author_wins() {
    let mut guesses = Guesses::new();
    assert_eq!(guesses.record("@alice", 10), None);
    assert_eq!(guesses.record("@alice", 20), Some(10));
    assert_eq!(guesses.len(), 1);
    assert_eq!(guesses.get("@alice"), Some(20));
}

#[test]
fn test_sorted_by_value_then_author() {
    let guesses = sample();
    assert_eq!(
        guesses.sorted(),
        vec![("@bob", 2), ("@carol", 500), ("@dave", 500), ("@alice", 12345)]
    );
}

#[test]
fn test_render_summary() {
    let run_at = Local.with_ymd_and_hms(2018, 6, 15, 12, 30, 5).unwrap();
    let rendered = render_summary(&sample(), &run_at);

    assert_eq!(
        rendered,
        "# Script run at: 2018-06-15 12:30:05.000000\n\
         @bob 2\n\
         @carol 500\n\
         @dave 500\n\
         @alice 12345\n"
    );
    let values = values(&rendered);
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_render_empty_summary_has_header_only() {
    let run_at = Local.with_ymd_and_hms(2018, 6, 15, 12, 30, 5).unwrap();
    let rendered = render_summary(&Guesses::new(), &run_at);
    assert_eq!(rendered, "# Script run at: 2018-06-15 12:30:05.000000\n");
}

#[tokio::test]
async fn test_writer_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(OUTPUT_FILE), "stale\nstale\nstale\n").unwrap();

    let writer = SummaryWriter::new(dir.path());
    let path = writer.write(&sample(), &Local::now()).await.unwrap();
    assert_eq!(path, dir.path().join(OUTPUT_FILE));

    let content = writer.read().await.unwrap();
    assert!(content.starts_with("# Script run at: "));
    assert!(!content.contains("stale"));
    assert_eq!(content.lines().count(), 5);
    assert_eq!(values(&content), vec![2, 500, 500, 12345]);
}
