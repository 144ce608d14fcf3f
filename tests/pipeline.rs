use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;

use stackscan::error::{Error, Result};
use stackscan::models::{Priority, RepositoryInfo, TreeEntry};
use stackscan::{AnalysisOrchestrator, AnalysisRequest, RepositoryHost};

/// In-memory repository host. Paths mapped to `None` exist in the tree but
/// fail to fetch, like a blob the contents API refuses to serve.
struct FakeHost {
    description: Option<String>,
    files: HashMap<String, Option<String>>,
}

impl FakeHost {
    fn new(description: &str, files: &[(&str, Option<&str>)]) -> Self {
        Self {
            description: Some(description.to_string()),
            files: files
                .iter()
                .map(|(path, content)| (path.to_string(), content.map(str::to_string)))
                .collect(),
        }
    }
}

#[async_trait]
impl RepositoryHost for FakeHost {
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryInfo> {
        Ok(RepositoryInfo {
            name: repo.to_string(),
            full_name: format!("{owner}/{repo}"),
            description: self.description.clone(),
            language: Some("TypeScript".to_string()),
            size: 4096,
            updated_at: Utc::now(),
            default_branch: "main".to_string(),
        })
    }

    async fn get_tree(&self, _owner: &str, _repo: &str, branch: &str) -> Result<Vec<TreeEntry>> {
        assert_eq!(branch, "main");
        Ok(self
            .files
            .keys()
            .map(|path| TreeEntry {
                path: path.clone(),
                entry_type: "blob".to_string(),
                size: Some(64),
            })
            .collect())
    }

    async fn get_file_content(&self, _owner: &str, _repo: &str, path: &str) -> Result<String> {
        match self.files.get(path) {
            Some(Some(content)) => Ok(content.clone()),
            _ => Err(Error::GitHubApi(format!(
                "failed to fetch {}: 404 Not Found",
                path
            ))),
        }
    }
}

/// Host whose metadata fetch fails outright, for fatal-path coverage.
struct DownHost;

#[async_trait]
impl RepositoryHost for DownHost {
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryInfo> {
        Err(Error::RepoNotFound(format!("{owner}/{repo}")))
    }

    async fn get_tree(&self, _: &str, _: &str, _: &str) -> Result<Vec<TreeEntry>> {
        unreachable!("tree fetch should never run when metadata fails")
    }

    async fn get_file_content(&self, _: &str, _: &str, _: &str) -> Result<String> {
        unreachable!()
    }
}

const PACKAGE_JSON: &str = r#"{
  "dependencies": {
    "next": "^14.0.0",
    "react": "^18.2.0",
    "@supabase/supabase-js": "^2.39.0",
    "tailwindcss": "^3.3.0"
  },
  "devDependencies": {
    "typescript": "^5.3.0",
    "eslint": "^8.50.0"
  }
}"#;

#[tokio::test]
async fn full_pipeline_produces_complete_report() {
    let host = FakeHost::new(
        "AI strategy planning board",
        &[
            ("package.json", Some(PACKAGE_JSON)),
            ("tsconfig.json", Some("{\"compilerOptions\":{}}")),
            ("next.config.js", Some("module.exports = {}")),
            ("src/index.tsx", Some("export default function App() {}")),
            ("supabase/migrations/0001_init.sql", Some("create table cards ();")),
        ],
    );

    let orchestrator = AnalysisOrchestrator::new(host);
    let request = AnalysisRequest::new("https://github.com/acme/planner", "user-1");

    let report = orchestrator.orchestrate(request).await.unwrap();

    // Stage 1
    assert_eq!(report.stage_1_exploration.repository, "acme/planner");
    assert_eq!(report.stage_1_exploration.files_fetched, 5);
    assert_eq!(report.stage_1_exploration.total_files_scanned, 5);

    // Stage 2
    assert_eq!(report.stage_2_technology_analysis.total_dependencies, 6);
    assert!(report
        .stage_2_technology_analysis
        .frameworks
        .contains(&"Next.js".to_string()));
    assert!(report
        .stage_2_technology_analysis
        .languages
        .contains(&"TypeScript".to_string()));

    let technologies = &report.enhanced_tech_stack.stack.technologies;
    assert!(technologies.frontend.contains(&"Next.js-14.0.0".to_string()));
    assert!(technologies.backend.contains(&"Supabase-2.39.0".to_string()));
    assert!(technologies.database.contains(&"PostgreSQL".to_string()));

    // Stage 3
    assert_eq!(report.stage_3_gap_analysis.len(), 8);
    let frontend = &report.stage_3_gap_analysis["frontend"];
    assert!(frontend
        .identified_gaps
        .iter()
        .any(|g| g.contains("state management")));

    // The description mentions both "ai" and "strategy", so AI gaps rank.
    let ai = &report.stage_3_gap_analysis["ai"];
    assert_eq!(ai.priority, Priority::High);

    assert!(report.summary.analysis_success);
    assert!(report.summary.total_technologies > 0);
    assert_eq!(
        report.summary.high_priority_recommendations,
        report
            .enhanced_tech_stack
            .recommendations
            .iter()
            .filter(|r| r.priority == Priority::High)
            .count()
    );
}

#[tokio::test]
async fn failed_file_fetch_reduces_coverage_without_failing() {
    let host = FakeHost::new(
        "a kanban board",
        &[
            ("package.json", Some(PACKAGE_JSON)),
            ("src/index.tsx", None),
            ("src/app.tsx", Some("export {}")),
        ],
    );

    let orchestrator = AnalysisOrchestrator::new(host);
    let report = orchestrator
        .orchestrate(AnalysisRequest::new("acme/board", "user-1"))
        .await
        .unwrap();

    assert_eq!(report.stage_1_exploration.files_fetched, 2);
    assert_eq!(report.stage_1_exploration.total_files_scanned, 3);
}

#[tokio::test]
async fn malformed_url_fails_before_any_network_call() {
    // DownHost panics on any call past metadata, and even metadata returns
    // an error the test would surface as the wrong message.
    let orchestrator = AnalysisOrchestrator::new(DownHost);
    let err = orchestrator
        .orchestrate(AnalysisRequest::new("not-a-url", "user-1"))
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("Orchestration failed: "));
    assert!(message.contains("invalid repository URL"));
}

#[tokio::test]
async fn metadata_failure_aborts_with_wrapped_error() {
    let orchestrator = AnalysisOrchestrator::new(DownHost);
    let err = orchestrator
        .orchestrate(AnalysisRequest::new("https://github.com/acme/gone", "user-1"))
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("Orchestration failed: "));
    assert!(message.contains("acme/gone"));
}

#[tokio::test]
async fn depth_and_focus_are_recorded_but_inert() {
    let files: &[(&str, Option<&str>)] = &[("package.json", Some(PACKAGE_JSON))];

    let mut basic = AnalysisRequest::new("acme/app", "user-1");
    basic.analysis_depth = "basic".parse().unwrap();
    basic.focus_areas = vec!["frontend".to_string()];

    let mut comprehensive = AnalysisRequest::new("acme/app", "user-1");
    comprehensive.analysis_depth = "comprehensive".parse().unwrap();

    let report_basic = AnalysisOrchestrator::new(FakeHost::new("app", files))
        .orchestrate(basic)
        .await
        .unwrap();
    let report_comprehensive = AnalysisOrchestrator::new(FakeHost::new("app", files))
        .orchestrate(comprehensive)
        .await
        .unwrap();

    assert_eq!(report_basic.analysis_metadata.focus_areas, vec!["frontend"]);
    assert_eq!(
        report_basic.enhanced_tech_stack.stack.technologies,
        report_comprehensive.enhanced_tech_stack.stack.technologies
    );
    assert_eq!(
        report_basic.stage_3_gap_analysis,
        report_comprehensive.stage_3_gap_analysis
    );
}
