//! Analysis tables built from research sources.
//!
//! Pure data reshaping: which sources count as meaningful, the overview
//! table, keyword frequencies and the summary used when nothing was readable.

use super::entities::{ResearchSource, SourceSummary};
use crate::core::string::preview;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Sources with more fetched characters than this are analyzed.
pub const MEANINGFUL_CONTENT_THRESHOLD: usize = 500;

/// Number of rows in the keyword table.
pub const TOP_KEYWORDS: usize = 10;

const SNIPPET_PREVIEW_CHARS: usize = 100;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").expect("valid word pattern"));

/// Row of the research overview table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewRow {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Content Length")]
    pub content_length: usize,
    #[serde(rename = "Content Status")]
    pub content_status: String,
    #[serde(rename = "Snippet")]
    pub snippet: String,
}

/// Row of the keyword frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    #[serde(rename = "Keyword")]
    pub keyword: String,
    #[serde(rename = "Count")]
    pub count: usize,
}

/// All tables attached to an analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisTables {
    pub research_overview: Vec<OverviewRow>,
    pub keyword_frequency: Vec<KeywordCount>,
    pub source_summaries: Vec<SourceSummary>,
}

/// Output of the analysis stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOutput {
    pub analysis_summary: String,
    pub analysis_tables: AnalysisTables,
}

/// Whether a source carries enough readable text to summarize.
pub fn is_meaningful(source: &ResearchSource) -> bool {
    source.fetched_text_length > MEANINGFUL_CONTENT_THRESHOLD && !source.login_wall
}

fn content_status(source: &ResearchSource) -> &'static str {
    if is_meaningful(source) {
        "Accessible"
    } else {
        "Limited/Behind Login"
    }
}

/// One overview row per source, in search order.
pub fn overview_rows(sources: &[ResearchSource]) -> Vec<OverviewRow> {
    sources
        .iter()
        .map(|source| OverviewRow {
            title: source.title.clone(),
            url: source.url.clone(),
            content_length: source.fetched_text_length,
            content_status: content_status(source).to_string(),
            snippet: preview(&source.snippet, SNIPPET_PREVIEW_CHARS),
        })
        .collect()
}

/// Most frequent words (3+ ASCII letters, lowercased) across the previews of
/// meaningful sources. Ties keep first-seen order.
pub fn keyword_frequency(sources: &[ResearchSource], top: usize) -> Vec<KeywordCount> {
    let text = sources
        .iter()
        .filter(|s| is_meaningful(s) && !s.content_preview.is_empty())
        .map(|s| s.content_preview.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (order, word) in WORD.find_iter(&text).map(|m| m.as_str()).enumerate() {
        counts.entry(word).or_insert((0, order)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    if ranked.is_empty() {
        return vec![KeywordCount {
            keyword: "N/A".to_string(),
            count: 0,
        }];
    }

    ranked
        .into_iter()
        .take(top)
        .map(|(word, count, _)| KeywordCount {
            keyword: word.to_string(),
            count,
        })
        .collect()
}

/// Summary used when no source had readable content.
pub fn limited_content_summary(sources: &[ResearchSource]) -> String {
    let meaningful = sources.iter().filter(|s| is_meaningful(s)).count();
    format!(
        "Analysis of the research topic was significantly limited by content accessibility issues. \
         Out of {} sources examined, only {} contained accessible content suitable for analysis. \
         The remaining sources were behind login walls or contained minimal content. \
         This limitation prevented a comprehensive analysis of the research topic. \
         Recommendations include exploring alternative sources or implementing authenticated \
         access methods for future research.",
        sources.len(),
        meaningful
    )
}

/// Assemble all tables.
pub fn build_tables(sources: &[ResearchSource], summaries: Vec<SourceSummary>) -> AnalysisTables {
    AnalysisTables {
        research_overview: overview_rows(sources),
        keyword_frequency: keyword_frequency(sources, TOP_KEYWORDS),
        source_summaries: summaries,
    }
}
