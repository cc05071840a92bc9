//! Hand-written port mocks shared by the use case tests.

use crate::ports::content_fetcher::ContentFetcher;
use crate::ports::delay::Delay;
use crate::ports::progress::{PipelineProgress, Stage};
use crate::ports::search_provider::{SearchError, SearchProvider};
use crate::ports::text_generator::{GenerationError, TextGenerator};
use async_trait::async_trait;
use report_domain::{FetchedContent, SearchHit};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

/// Replays scripted replies, then fails with a transport error.
pub struct ScriptedGenerator {
    responses: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(responses: Vec<Result<String, GenerationError>>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub fn failing() -> Self {
        Self::new(vec![])
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::Transport("connection refused".to_string())))
    }
}

/// Generator whose every call panics with the given message.
pub struct PanickingGenerator {
    message: String,
}

impl PanickingGenerator {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for PanickingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        panic!("{}", self.message);
    }
}

/// Records requested waits instead of sleeping.
#[derive(Default)]
pub struct RecordingDelay {
    waits: Mutex<Vec<Duration>>,
}

impl RecordingDelay {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl Delay for RecordingDelay {
    async fn sleep(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}

/// Search provider returning a fixed outcome.
pub struct StaticSearch {
    outcome: Result<Vec<SearchHit>, SearchError>,
    queries: Mutex<Vec<(String, usize)>>,
}

impl StaticSearch {
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self {
            outcome: Ok(hits),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: SearchError) -> Self {
        Self {
            outcome: Err(error),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<(String, usize)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for StaticSearch {
    fn name(&self) -> &str {
        "static"
    }

    async fn search(&self, query: &str, num_results: usize) -> Result<Vec<SearchHit>, SearchError> {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), num_results));
        self.outcome
            .clone()
            .map(|hits| hits.into_iter().take(num_results).collect())
    }
}

/// Fetcher serving pages from a map; unknown URLs fail.
#[derive(Default)]
pub struct MapFetcher {
    pages: HashMap<String, String>,
}

impl MapFetcher {
    pub fn with_page(mut self, url: &str, text: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), text.into());
        self
    }
}

#[async_trait]
impl ContentFetcher for MapFetcher {
    async fn fetch(&self, url: &str) -> FetchedContent {
        match self.pages.get(url) {
            Some(text) => FetchedContent::from_text(text.clone(), 300),
            None => FetchedContent::failed("404 Not Found"),
        }
    }
}

/// Collects progress callbacks as strings.
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl PipelineProgress for RecordingProgress {
    fn on_stage_start(&self, stage: Stage, total: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("start:{}:{}", stage, total));
    }

    fn on_item_complete(&self, stage: Stage, _label: &str, success: bool) {
        self.events
            .lock()
            .unwrap()
            .push(format!("item:{}:{}", stage, success));
    }

    fn on_stage_complete(&self, stage: Stage) {
        self.events.lock().unwrap().push(format!("done:{}", stage));
    }
}

pub fn hit(n: usize) -> SearchHit {
    SearchHit {
        title: format!("Source {}", n),
        url: format!("https://example.com/{}", n),
        snippet: format!("Snippet {}", n),
        published_date: String::new(),
        domain: "example.com".to_string(),
    }
}
