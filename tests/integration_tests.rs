// Integration tests for Talent Algo

use talent_algo::core::Ranker;
use talent_algo::models::{FreelanceProfile, Job};

fn create_test_job(title: &str, description: &str, skills: &str) -> Job {
    Job {
        title: title.to_string(),
        description: description.to_string(),
        skills: skills.to_string(),
    }
}

fn create_test_freelance(id: i64, title: &str, skills: &str, bio: &str) -> FreelanceProfile {
    FreelanceProfile {
        id,
        title: title.to_string(),
        skills: skills.to_string(),
        bio: bio.to_string(),
    }
}

#[test]
fn test_integration_end_to_end_ranking() {
    let ranker = Ranker::new();
    let job = create_test_job("Python Developer", "Build REST APIs", "python fastapi");

    let candidates = vec![
        create_test_freelance(1, "Python Dev", "python fastapi", "5 years experience"),
        create_test_freelance(2, "Graphic Designer", "photoshop illustrator", "creative designer"),
    ];

    let result = ranker.rank(&job, &candidates);

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].freelance_id, 1, "Python dev should rank first");
    assert_eq!(result[1].freelance_id, 2);
    assert!(
        result[0].score > result[1].score,
        "Expected strictly higher score for the matching profile: {} vs {}",
        result[0].score,
        result[1].score
    );
}

#[test]
fn test_length_preservation() {
    let ranker = Ranker::new();
    let job = create_test_job("Data Engineer", "ETL pipelines", "spark airflow");

    for n in [0usize, 1, 5, 50] {
        let candidates: Vec<FreelanceProfile> = (0..n)
            .map(|i| {
                create_test_freelance(
                    i as i64,
                    "Engineer",
                    if i % 2 == 0 { "spark" } else { "excel" },
                    "profile bio",
                )
            })
            .collect();

        let result = ranker.rank(&job, &candidates);
        assert_eq!(result.len(), n);
    }
}

#[test]
fn test_scores_sorted_descending_and_bounded() {
    let ranker = Ranker::new();
    let job = create_test_job("Rust Engineer", "Build backend services", "rust actix tokio");

    let candidates = vec![
        create_test_freelance(1, "Rust Engineer", "rust actix tokio", "backend services"),
        create_test_freelance(2, "Backend Dev", "rust", "some backend work"),
        create_test_freelance(3, "Frontend Dev", "react css", "ui work"),
        create_test_freelance(4, "Rust Dev", "rust tokio", "async services"),
    ];

    let result = ranker.rank(&job, &candidates);

    for r in &result {
        assert!(r.score >= 0.0 && r.score <= 1.0, "Score {} out of [0,1]", r.score);
    }

    for i in 1..result.len() {
        assert!(
            result[i - 1].score >= result[i].score,
            "Results not sorted by score"
        );
    }
}

#[test]
fn test_identifier_correspondence() {
    let ranker = Ranker::new();
    let job = create_test_job("Translator", "French to English", "french english");

    let candidates = vec![
        create_test_freelance(42, "Translator", "french english", "native speaker"),
        create_test_freelance(7, "Writer", "english", "copywriting"),
        create_test_freelance(13, "Developer", "java", "enterprise software"),
    ];

    let result = ranker.rank(&job, &candidates);

    let mut returned: Vec<i64> = result.iter().map(|r| r.freelance_id).collect();
    returned.sort_unstable();
    assert_eq!(returned, vec![7, 13, 42]);
}

#[test]
fn test_self_similar_candidate_scores_highest() {
    let ranker = Ranker::new();
    let job = create_test_job("Mobile Developer", "iOS and Android apps", "swift kotlin");

    let candidates = vec![
        create_test_freelance(1, "Web Dev", "javascript", "websites"),
        // Combined text identical to the job's combined text
        create_test_freelance(2, "Mobile Developer", "iOS and Android apps", "swift kotlin"),
        create_test_freelance(3, "Mobile Dev", "kotlin", "android apps"),
    ];

    let result = ranker.rank(&job, &candidates);

    assert_eq!(result[0].freelance_id, 2);
    assert!((result[0].score - 1.0).abs() < 1e-9, "Expected ~1.0, got {}", result[0].score);
}

#[test]
fn test_zero_text_candidate_scores_zero() {
    let ranker = Ranker::new();
    let job = create_test_job("Python Developer", "Build REST APIs", "python");

    let candidates = vec![
        create_test_freelance(1, "Python Dev", "python", "apis"),
        create_test_freelance(2, "", "", ""),
    ];

    let result = ranker.rank(&job, &candidates);

    let empty = result.iter().find(|r| r.freelance_id == 2).unwrap();
    assert_eq!(empty.score, 0.0);
}

#[test]
fn test_empty_job_gives_zero_scores() {
    let ranker = Ranker::new();
    let job = create_test_job("", "", "");

    let candidates = vec![
        create_test_freelance(1, "Python Dev", "python", "apis"),
        create_test_freelance(2, "Designer", "figma", "ui"),
    ];

    let result = ranker.rank(&job, &candidates);

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|r| r.score == 0.0));
}

#[test]
fn test_scores_rounded_to_four_decimals() {
    let ranker = Ranker::new();
    let job = create_test_job("Python Developer", "Build REST APIs", "python fastapi");

    let candidates = vec![
        create_test_freelance(1, "Python Dev", "python fastapi", "5 years experience"),
        create_test_freelance(2, "Backend Dev", "python", "apis and services"),
    ];

    let result = ranker.rank(&job, &candidates);

    for r in &result {
        let scaled = r.score * 10_000.0;
        assert!(
            (scaled - scaled.round()).abs() < 1e-6,
            "Score {} not rounded to 4 decimals",
            r.score
        );
    }
}

#[test]
fn test_stateless_across_calls() {
    let ranker = Ranker::new();
    let job = create_test_job("Python Developer", "Build REST APIs", "python fastapi");

    let candidates = vec![
        create_test_freelance(1, "Python Dev", "python fastapi", "5 years experience"),
        create_test_freelance(2, "Graphic Designer", "photoshop", "creative"),
    ];

    let first = ranker.rank(&job, &candidates);
    // An unrelated request in between must not affect the next result.
    let _ = ranker.rank(
        &create_test_job("Welder", "Metal fabrication", "welding"),
        &[create_test_freelance(9, "Welder", "welding", "10 yrs")],
    );
    let second = ranker.rank(&job, &candidates);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.freelance_id, b.freelance_id);
        assert_eq!(a.score, b.score);
    }
}
