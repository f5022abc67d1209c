use std::sync::Arc;

use async_trait::async_trait;
use pipeline::{Category, ClassificationError, ClassificationService, TitleClassifier};

use super::*;

/// Answers by keyword so tests do not depend on the exact prompt text.
struct KeywordService;

#[async_trait]
impl ClassificationService for KeywordService {
    async fn request(&self, prompt: &str) -> Result<String, ClassificationError> {
        let title = prompt.rsplit("Title: ").next().unwrap_or_default();
        if title.contains("CRISPR") {
            Ok("Biotechnology".to_string())
        } else if title.contains("Wireless") {
            Ok("Electrical\n".to_string())
        } else {
            Err(ClassificationError::Transport {
                message: "offline".to_string(),
            })
        }
    }
}

fn orchestrator() -> PipelineOrchestrator {
    PipelineOrchestrator::new(TitleClassifier::new(Arc::new(KeywordService)))
}

#[tokio::test]
async fn test_execute_writes_sorted_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("patents.csv");
    let output = dir.path().join("sorted.csv");
    std::fs::write(
        &input,
        "Title,Publication Number,Assignee\n\
         Wireless signal amplifier,US10000001B2,Acme\n\
         CRISPR gene editing method,US9999999B1,Broad\n\
         Wireless signal amplifier,US10000000A1,Acme\n\
         Mystery device,US5,Nobody\n",
    )
    .unwrap();

    let summary = execute(&orchestrator(), &input, &output).await.unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "Title,Publication Number,Assignee,Category\n\
         CRISPR gene editing method,US9999999B1,Broad,Biotechnology\n\
         Wireless signal amplifier,US10000000A1,Acme,Electrical\n\
         Wireless signal amplifier,US10000001B2,Acme,Electrical\n\
         Mystery device,US5,Nobody,Unknown\n"
    );
    assert_eq!(summary.rows, 4);
    assert_eq!(summary.count(Category::Electrical), 2);
    assert_eq!(summary.count(Category::Unknown), 1);
}

#[tokio::test]
async fn test_spreadsheet_export_with_trailing_commas_is_processed() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("patents.csv");
    let output = dir.path().join("sorted.csv");
    std::fs::write(
        &input,
        "Title,Publication Number,\n\
         Wireless signal amplifier,US20,\n\
         CRISPR gene editing method,US10\n",
    )
    .unwrap();

    let summary = execute(&orchestrator(), &input, &output).await.unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "Title,Publication Number,,Category\n\
         CRISPR gene editing method,US10,,Biotechnology\n\
         Wireless signal amplifier,US20,,Electrical\n"
    );
    assert_eq!(summary.rows, 2);
}

#[tokio::test]
async fn test_missing_column_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("patents.csv");
    let output = dir.path().join("sorted.csv");
    std::fs::write(&input, "Title,Number\nPump,US1\n").unwrap();

    let err = execute(&orchestrator(), &input, &output).await.unwrap_err();

    assert!(format!("{err:#}").contains("CSV must include 'Title' and 'Publication Number'"));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_bad_publication_number_names_the_row() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("patents.csv");
    let output = dir.path().join("sorted.csv");
    std::fs::write(
        &input,
        "Title,Publication Number\nPump,US1\nValve,N/A\n",
    )
    .unwrap();

    let err = execute(&orchestrator(), &input, &output).await.unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("row 2"), "{message}");
    assert!(message.contains("N/A"), "{message}");
    assert!(!output.exists());
}

#[tokio::test]
async fn test_missing_input_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.csv");

    let err = execute(&orchestrator(), &input, &dir.path().join("out.csv"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn test_render_summary_lists_every_category() {
    let table = pipeline::Table::from_strings(
        ["Title", "Category"],
        vec![vec!["a".to_string(), "Chemical".to_string()]],
    )
    .unwrap();
    let now = pipeline::Timestamp::now();
    let summary = RunSummary::from_table(&table, PipelineRunId::new_random(), now, now);

    let text = render_summary(&summary, Path::new("out.csv"));

    assert!(text.starts_with("Classified 1 rows"));
    for label in ["Biotechnology", "Chemical", "Electrical", "Mechanical", "Software", "Unknown"] {
        assert!(text.contains(label), "{label}");
    }
    assert!(text.ends_with("Wrote out.csv\n"));
}
