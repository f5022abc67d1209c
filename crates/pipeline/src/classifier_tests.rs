use std::sync::Arc;

use super::*;
use crate::test_support::ScriptedService;
use crate::ClassificationError;

fn classifier(service: &Arc<ScriptedService>) -> TitleClassifier {
    TitleClassifier::new(service.clone())
}

#[tokio::test]
async fn test_empty_and_whitespace_titles_skip_the_service() {
    let service = Arc::new(ScriptedService::new());
    let classifier = classifier(&service);

    assert_eq!(classifier.classify("").await, Category::Unknown);
    assert_eq!(classifier.classify("   \t\n").await, Category::Unknown);
    assert_eq!(service.calls(), 0);
}

#[tokio::test]
async fn test_exact_reply_is_accepted() {
    let service = Arc::new(ScriptedService::new().reply("Gear assembly", "Mechanical"));

    assert_eq!(
        classifier(&service).classify("Gear assembly").await,
        Category::Mechanical
    );
    assert_eq!(service.calls(), 1);
}

#[tokio::test]
async fn test_reply_is_trimmed_before_matching() {
    let service = Arc::new(ScriptedService::new().reply("Compiler", "  Software\n"));

    assert_eq!(
        classifier(&service).classify("Compiler").await,
        Category::Software
    );
}

#[tokio::test]
async fn test_title_is_trimmed_before_prompting() {
    let service = Arc::new(ScriptedService::new().reply("Compiler", "Software"));

    assert_eq!(
        classifier(&service).classify("  Compiler  ").await,
        Category::Software
    );
    assert!(service.prompts()[0].ends_with("Title: Compiler"));
}

#[tokio::test]
async fn test_replies_outside_the_set_become_unknown() {
    let service = Arc::new(
        ScriptedService::new()
            .reply("lowercase", "software")
            .reply("typo", "Electricl")
            .reply("extra words", "Category: Software")
            .reply("empty", "")
            .reply("sentinel", "Unknown"),
    );
    let classifier = classifier(&service);

    for title in ["lowercase", "typo", "extra words", "empty", "sentinel"] {
        assert_eq!(classifier.classify(title).await, Category::Unknown, "{title}");
    }
    assert_eq!(service.calls(), 5);
}

#[tokio::test]
async fn test_service_failure_becomes_unknown() {
    let service = Arc::new(ScriptedService::new().fail(
        "Battery",
        ClassificationError::Service {
            status: 500,
            body: "boom".to_string(),
        },
    ));

    assert_eq!(
        classifier(&service).classify("Battery").await,
        Category::Unknown
    );
}

#[test]
fn test_prompt_declares_closed_set_and_embeds_title() {
    let prompt = build_prompt("CRISPR gene editing method");

    assert_eq!(
        prompt,
        "You are a strict classifier.\n\
         Classify the patent title into exactly ONE of: Biotechnology, Chemical, Electrical, Mechanical, Software.\n\
         Return ONLY the category name.\n\n\
         Title: CRISPR gene editing method"
    );
}
