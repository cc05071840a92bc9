//! Console output formatter for research and review results

use colored::Colorize;
use report_application::ResearchReport;
use report_domain::ReviewResult;
use serde::Serialize;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a complete research run
    pub fn format_research(topic: &str, report: &ResearchReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Research Report"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), topic));

        output.push_str(&Self::section_header("Sources"));
        for (i, source) in report.research_results.iter().enumerate() {
            let mark = if source.login_wall {
                "!".yellow()
            } else if source.fetched_text_length > 0 {
                "v".green()
            } else {
                "x".red()
            };
            output.push_str(&format!(
                "{} {}. {}\n     {} ({} chars)\n",
                mark,
                i + 1,
                source.title.bold(),
                source.url.dimmed(),
                source.fetched_text_length
            ));
        }

        output.push_str(&Self::section_header("Analysis"));
        output.push_str(&format!("{}\n", report.analysis_summary));

        let keywords: Vec<String> = report
            .analysis_tables
            .keyword_frequency
            .iter()
            .map(|k| format!("{} ({})", k.keyword, k.count))
            .collect();
        output.push_str(&format!(
            "\n{} {}\n",
            "Keywords:".cyan().bold(),
            keywords.join(", ")
        ));

        output.push_str(&Self::section_header("Final Report"));
        output.push_str(&format!("{}\n", report.final_report));

        output.push_str(&Self::section_header("Review Notes"));
        output.push_str(&format!("{}\n", report.review_notes));

        output.push_str(&Self::section_header("Stages"));
        for log in &report.agent_logs {
            output.push_str(&format!(
                "  {:<16} {:>8} ms  {}\n",
                log.agent,
                log.duration_ms,
                log.status.green()
            ));
        }
        output.push_str(&format!(
            "\n{} {:.2}s\n",
            "Processing time:".dimmed(),
            report.processing_time
        ));

        output.push_str(&Self::footer());
        output
    }

    /// Format a standalone review
    pub fn format_review(result: &ReviewResult) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Reviewed Report"));
        output.push('\n');
        output.push_str(&format!("{}\n", result.final_report));
        output.push_str(&Self::section_header("Review Notes"));
        output.push_str(&format!("{}\n", result.review_notes));
        output.push_str(&Self::footer());
        output
    }

    /// Format the final report alone
    pub fn format_report_only(final_report: &str) -> String {
        format!("{}\n", final_report)
    }

    /// Format as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_application::StageLog;
    use report_domain::{AnalysisTables, KeywordCount, ResearchSource};
    use std::collections::BTreeMap;

    fn report() -> ResearchReport {
        ResearchReport {
            research_results: vec![ResearchSource {
                url: "https://example.com/a".to_string(),
                title: "Grid batteries".to_string(),
                fetched_text_length: 1200,
                ..Default::default()
            }],
            analysis_summary: "Storage is scaling.".to_string(),
            analysis_tables: AnalysisTables {
                keyword_frequency: vec![KeywordCount {
                    keyword: "storage".to_string(),
                    count: 7,
                }],
                ..Default::default()
            },
            draft_report: "Draft".to_string(),
            final_report: "Final report body".to_string(),
            review_notes: "Clarified the summary.".to_string(),
            processing_time: 3.5,
            agent_logs: vec![StageLog {
                stage: "search".to_string(),
                agent: "Search Agent".to_string(),
                status: "completed".to_string(),
                duration_ms: 42,
                metrics: BTreeMap::new(),
            }],
        }
    }

    #[test]
    fn test_format_research_full() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_research("grid storage", &report());
        assert!(text.contains("Topic: grid storage"));
        assert!(text.contains("1. Grid batteries"));
        assert!(text.contains("storage (7)"));
        assert!(text.contains("Final report body"));
        assert!(text.contains("Clarified the summary."));
        assert!(text.contains("Search Agent"));
        assert!(text.contains("3.50s"));
    }

    #[test]
    fn test_format_review_and_json() {
        colored::control::set_override(false);
        let result = ReviewResult {
            final_report: "Polished".to_string(),
            review_notes: "Fixed tone".to_string(),
        };
        let text = ConsoleFormatter::format_review(&result);
        assert!(text.contains("Polished"));
        assert!(text.contains("Fixed tone"));

        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&result)).unwrap();
        assert_eq!(json["final_report"], "Polished");
        assert_eq!(json["review_notes"], "Fixed tone");
    }
}
