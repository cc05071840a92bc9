//! Prompt templates for the research pipeline

use crate::research::{ReportStyle, ResearchSource};
use crate::review::ResponseContract;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt asking for a short summary of one source
    pub fn summarize_source(source: &ResearchSource) -> String {
        format!(
            r#"Summarize the following content in 2-3 sentences, focusing on key points related to the research topic:

Title: {}
URL: {}
Content: {}"#,
            source.title, source.url, source.content_preview
        )
    }

    /// Prompt combining the per-source summaries into one analysis
    pub fn analysis_summary(summaries: &[(String, String)]) -> String {
        let combined = summaries
            .iter()
            .map(|(title, summary)| format!("{}: {}", title, summary))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            r#"Based on the following summarized research findings, provide a comprehensive analysis summary that identifies key trends, patterns, and insights:

{}"#,
            combined
        )
    }

    /// Prompt for the draft report
    pub fn write_report(analysis_text: &str, style: ReportStyle, current_date: &str) -> String {
        format!(
            r#"Generate a professional business report in a {style} style based on the provided analysis data.

Analysis Data:
{analysis_text}

The report must include the following sections:
1. Executive Summary
2. Key Findings
3. Data Tables
4. Recommendations
5. Sources

Requirements:
- Begin directly with the report title and date without any introductory phrases
- Use the current date: {current_date}
- Maintain a professional, formal tone throughout
- Use clear, concise language
- Structure content with appropriate headings and subheadings
- Present data in well-formatted tables using markdown table syntax
- Ensure all recommendations are actionable and specific
- Include all sources with proper citations
- Do not include conversational openings such as "Of course," "Certainly," or similar phrases
- Avoid excessive markdown symbols (like multiple # or *) - use minimal formatting for clarity"#
        )
    }

    /// Review prompt for the configured response contract
    pub fn review(contract: ResponseContract, draft: &str, current_date: &str) -> String {
        match contract {
            ResponseContract::FreeText => Self::review_free_text(draft, current_date),
            ResponseContract::JsonObject => Self::review_json(draft, current_date),
        }
    }

    fn review_requirements(current_date: &str) -> String {
        format!(
            r#"Requirements:
- Preserve all factual content; do not add or remove facts
- Maintain a professional, formal tone throughout
- Remove any conversational openings or phrases
- Ensure consistent formatting and structure
- Check for proper grammar and punctuation
- Improve readability while keeping the structure and length similar
- Ensure the report uses the current date: {current_date}"#
        )
    }

    /// Review prompt asking for two labelled plain-text parts
    pub fn review_free_text(draft: &str, current_date: &str) -> String {
        format!(
            r#"You are a professional copy editor. Review the following report for clarity, grammar, and professionalism.

{}

Please provide your response in two parts:
1. IMPROVED REPORT: [Your improved version of the report]
2. REVIEW NOTES: [Brief notes on the changes made]

Report to review:
{}"#,
            Self::review_requirements(current_date),
            draft
        )
    }

    /// Review prompt asking for a single JSON object
    pub fn review_json(draft: &str, current_date: &str) -> String {
        format!(
            r#"You are a professional copy editor. Your task is to improve the draft report for clarity, grammar, and presentation without changing any facts.

{}
- Verify that tables are correctly formatted using markdown table syntax
- Remove excessive markdown symbols (like multiple # or *)

IMPORTANT: Respond with ONLY a valid JSON object. Do not include any explanations or text outside the JSON.

JSON schema:
{{
  "final_report": "<polished report>",
  "review_notes": "<max 80 words describing the changes made>"
}}

Draft report:
{}"#,
            Self::review_requirements(current_date),
            draft
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_source_includes_fields() {
        let source = ResearchSource {
            title: "Solid-state batteries".to_string(),
            url: "https://example.com/ssb".to_string(),
            content_preview: "Preview text".to_string(),
            ..Default::default()
        };
        let prompt = PromptTemplate::summarize_source(&source);
        assert!(prompt.contains("Title: Solid-state batteries"));
        assert!(prompt.contains("URL: https://example.com/ssb"));
        assert!(prompt.contains("Content: Preview text"));
    }

    #[test]
    fn test_analysis_summary_joins_findings() {
        let prompt = PromptTemplate::analysis_summary(&[
            ("A".to_string(), "first".to_string()),
            ("B".to_string(), "second".to_string()),
        ]);
        assert!(prompt.contains("A: first\n\nB: second"));
    }

    #[test]
    fn test_write_report_style_and_date() {
        let prompt = PromptTemplate::write_report("data", ReportStyle::Academic, "October 16, 2026");
        assert!(prompt.contains("in a academic style"));
        assert!(prompt.contains("Use the current date: October 16, 2026"));
        assert!(prompt.contains("5. Sources"));
    }

    #[test]
    fn test_review_prompts_follow_contract() {
        let free = PromptTemplate::review(ResponseContract::FreeText, "DRAFT", "October 16, 2026");
        assert!(free.contains("2. REVIEW NOTES:"));
        assert!(free.ends_with("DRAFT"));

        let json = PromptTemplate::review(ResponseContract::JsonObject, "DRAFT", "October 16, 2026");
        assert!(json.contains(r#""final_report": "<polished report>""#));
        assert!(json.contains("max 80 words"));
        assert!(json.contains("Remove any conversational openings"));
        assert!(json.contains("October 16, 2026"));
    }
}
