use guess_tally::prompt::ManualPrompt;

async fn ask(input: &str) -> (Option<i64>, String) {
    let mut prompt = ManualPrompt::new(input.as_bytes(), Vec::new());
    let answer = prompt
        .ask("@someone", "no clue, maybe a lot", "no number-like token in reply")
        .await
        .expect("prompt should not fail on in-memory io");
    let (_, output) = prompt.into_inner();
    (answer, String::from_utf8(output).unwrap())
}

#[tokio::test]
async fn test_accepts_integer() {
    let (answer, output) = ask("1234\n").await;
    assert_eq!(answer, Some(1234));
    assert!(output.contains("Reply from @someone"));
    assert!(output.contains("no clue, maybe a lot"));
    assert!(output.contains("no number-like token in reply"));
}

#[tokio::test]
async fn test_rejects_until_integer() {
    let (answer, output) = ask("lots\n12.5\n  -7  \n").await;
    assert_eq!(answer, Some(-7));
    assert_eq!(output.matches("Input not parseable as an integer!").count(), 2);
    assert_eq!(output.matches("enter it here").count(), 3);
}

#[tokio::test]
async fn test_blank_means_no_guess() {
    let (answer, output) = ask("\n99\n").await;
    assert_eq!(answer, None);
    assert!(output.contains("Skipping"));

    let (answer, _) = ask("\r\n99\n").await;
    assert_eq!(answer, None);
}

#[tokio::test]
async fn test_whitespace_only_is_asked_again() {
    let (answer, output) = ask("   \n5\n").await;
    assert_eq!(answer, Some(5));
    assert_eq!(output.matches("Input not parseable as an integer!").count(), 1);
    assert!(!output.contains("Skipping"));

    let (answer, output) = ask("\t\n\n").await;
    assert_eq!(answer, None);
    assert_eq!(output.matches("Input not parseable as an integer!").count(), 1);
}

#[tokio::test]
async fn test_end_of_input_means_no_guess() {
    let (answer, _) = ask("").await;
    assert_eq!(answer, None);

    let (answer, output) = ask("nope").await;
    assert_eq!(answer, None);
    assert_eq!(output.matches("Input not parseable as an integer!").count(), 1);
}
