//! End-to-end seeding tests against the shipped sample catalogs

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use catalog_seeder::{
    cli,
    config::AppConfig,
    error::AppResult,
    models::{SubmissionOutcome, SubmissionRequest},
    services::{CatalogSeeder, FormSubmitter},
};

/// Records every request instead of sending it
#[derive(Clone, Default)]
struct RecordingSubmitter {
    requests: Arc<Mutex<Vec<SubmissionRequest>>>,
}

impl RecordingSubmitter {
    fn requests(&self) -> Vec<SubmissionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl FormSubmitter for RecordingSubmitter {
    async fn submit(&self, request: &SubmissionRequest) -> AppResult<SubmissionOutcome> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(SubmissionOutcome::Status(200))
    }
}

fn catalogs_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("catalogs")
}

fn book_count(file: &Path) -> usize {
    std::fs::read_to_string(file)
        .unwrap()
        .matches("<book>")
        .count()
}

#[tokio::test]
async fn test_default_files_are_seeded_in_order() {
    let config = AppConfig::default();
    let files = cli::resolve_files(&[], &config.catalogs.default_files, &catalogs_dir());
    let paths: Vec<_> = files.iter().map(|f| f.path.clone()).collect();
    assert_eq!(
        paths,
        vec![catalogs_dir().join("book.xml"), catalogs_dir().join("tech.xml")]
    );

    let recorder = RecordingSubmitter::default();
    let target = cli::resolve_uri(Some("local"), &config.target);
    let seeder = CatalogSeeder::new(Box::new(recorder.clone()), target);
    let summary = seeder.seed_files(&files).await;

    assert_eq!(summary.exit_status(), 0);
    assert_eq!(summary.reports.len(), 2);
    assert_eq!(summary.reports[0].catalog, "Books");
    assert_eq!(summary.reports[1].catalog, "TechBooks");

    let expected = book_count(&files[0].path) + book_count(&files[1].path);
    let requests = recorder.requests();
    assert_eq!(requests.len(), expected);
    assert_eq!(summary.submitted(), expected);

    let entities: Vec<_> = requests.iter().map(|r| r.entityname.as_str()).collect();
    let books = book_count(&files[0].path);
    assert!(entities[..books].iter().all(|e| *e == "Books"));
    assert!(entities[books..].iter().all(|e| *e == "TechBooks"));

    assert!(requests
        .iter()
        .all(|r| r.target_uri == "http://localhost:8080/library"));
}

#[tokio::test]
async fn test_tech_catalog_request_bodies() {
    let recorder = RecordingSubmitter::default();
    let seeder = CatalogSeeder::new(Box::new(recorder.clone()), "http://x/y");
    let report = seeder
        .seed_file(&catalogs_dir().join("tech.xml"))
        .await
        .unwrap();

    assert_eq!(report.submitted, 2);
    let bodies: Vec<_> = recorder.requests().iter().map(|r| r.form_body()).collect();
    assert_eq!(
        bodies,
        vec![
            "lastname=Martelli&firstname=Alex&title=Python in a Nutshell&year=2003&action_type=Add&entity=TechBooks",
            "lastname=Kennedy&firstname=Bill&title=HTML and XHTML&year=2007&action_type=Add&entity=TechBooks",
        ]
    );
}

#[tokio::test]
async fn test_three_token_author_keeps_second_token() {
    let recorder = RecordingSubmitter::default();
    let seeder = CatalogSeeder::new(Box::new(recorder.clone()), "http://x/y");
    seeder
        .seed_file(&catalogs_dir().join("book.xml"))
        .await
        .unwrap();

    let hurston = recorder
        .requests()
        .into_iter()
        .find(|r| r.title == "Their Eyes Were Watching God")
        .unwrap();
    assert_eq!(hurston.firstname, "Zora");
    assert_eq!(hurston.lastname, "Neale");
}
