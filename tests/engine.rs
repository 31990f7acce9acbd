use std::fs;
use tempfile::TempDir;
use wordmatch::prelude::*;
use wordmatch::report;

fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

const HANDOUT: &str = "Exercise 3. Explain ownership in your own words.";

#[test]
fn test_copied_essays_rank_first() {
  init_tracing();

  let docs = vec![
    Document::from_text(
      "alice.txt",
      "Exercise 3. Explain ownership in your own words. Each value has one owner and is dropped when the owner goes out of scope.",
    ),
    Document::from_text(
      "bob.txt",
      "Exercise 3. Explain ownership in your own words. Each value has one owner and is dropped when the owner goes out of scope.",
    ),
    Document::from_text(
      "carol.txt",
      "Exercise 3. Explain ownership in your own words. Memory is freed automatically once a binding leaves its block.",
    ),
  ];

  let engine = ComparisonEngine::builder()
    .sample(Document::from_text("handout.txt", HANDOUT))
    .build();

  let reports = engine.compare_all(&docs);

  assert_eq!(reports.len(), 3);
  assert_eq!(reports[0].left, "alice.txt");
  assert_eq!(reports[0].right, "bob.txt");
  assert_eq!(reports[0].score(), 1.0);
  assert!(reports[1].score() < 0.5);

  let words = &reports[0].results[0];
  assert!(words.row("exercise").is_none(), "handout words must be discounted");
  assert_eq!(words.row("owner").map(|r| (r.left, r.right)), Some((2, 2)));
}

#[test]
fn test_without_sample_handout_inflates_score() {
  let left = Document::from_text("a.txt", HANDOUT);
  let right = Document::from_text("b.txt", HANDOUT);

  let plain = ComparisonEngine::builder().build().compare(&left, &right);
  assert_eq!(plain.score(), 1.0);

  let discounted = ComparisonEngine::builder()
    .sample(Document::from_text("handout.txt", HANDOUT))
    .build()
    .compare(&left, &right);
  assert!(discounted.results[0].rows.is_empty());
  assert_eq!(discounted.score(), 0.0);
}

#[test]
fn test_load_compare_and_render() -> wordmatch::Result<()> {
  let dir = TempDir::new().expect("temp dir");
  let left_path = dir.path().join("left.txt");
  let right_path = dir.path().join("right.txt");
  fs::write(&left_path, "the fox the fox the").expect("write left");
  fs::write(&right_path, "the fox the the the").expect("write right");

  let settings = Settings::from_json(r#"{ "display": "full", "threshold": 0.6 }"#)?;
  let engine = ComparisonEngine::builder().settings(settings.clone()).build();

  let report = engine.compare(&Document::load(&left_path)?, &Document::load(&right_path)?);
  let text = report::render(&report, &settings);

  assert_eq!(
    text,
    "left.txt <-> right.txt: 62.50% [suspicious]\n  Document Word Counter: 62.50%\n    Word, Left count, Right count, Match\n    fox, 2, 1, 50.00%\n    the, 3, 4, 75.00%\n"
  );
  Ok(())
}

#[test]
fn test_report_serializes_to_json() {
  let engine = ComparisonEngine::builder().build();
  let report = engine.compare(
    &Document::from_text("a.txt", "one two"),
    &Document::from_text("b.txt", "one"),
  );

  let json = serde_json::to_value(&report).expect("serialize");
  assert_eq!(json["left"], "a.txt");
  assert_eq!(json["results"][0]["comparator"], "Document Word Counter");
  assert_eq!(json["results"][0]["rows"].as_array().map(Vec::len), Some(2));

  let back: PairReport = serde_json::from_value(json).expect("deserialize");
  assert_eq!(back, report);
}
