//! Progress reporting for research runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use report_application::{PipelineProgress, Stage};
use std::sync::Mutex;

/// Reports progress with one indicatif bar per stage
pub struct ProgressReporter {
    multi: MultiProgress,
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            stage_bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn stage_display_name(stage: Stage) -> &'static str {
        match stage {
            Stage::Search => "Searching",
            Stage::Fetch => "Fetching sources",
            Stage::Analysis => "Analyzing",
            Stage::Writing => "Writing draft",
            Stage::Review => "Reviewing",
        }
    }

    /// Stages with a single model call get a spinner instead of a bar
    fn is_single_step(stage: Stage) -> bool {
        matches!(stage, Stage::Search | Stage::Writing | Stage::Review)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineProgress for ProgressReporter {
    fn on_stage_start(&self, stage: Stage, total: usize) {
        let pb = if Self::is_single_step(stage) {
            let pb = self.multi.add(ProgressBar::new_spinner());
            pb.set_style(Self::spinner_style());
            pb.enable_steady_tick(std::time::Duration::from_millis(120));
            pb
        } else {
            let pb = self.multi.add(ProgressBar::new(total as u64));
            pb.set_style(Self::bar_style());
            pb
        };
        pb.set_prefix(Self::stage_display_name(stage));
        pb.set_message(stage.agent());

        if let Ok(mut slot) = self.stage_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_item_complete(&self, _stage: Stage, label: &str, success: bool) {
        if let Ok(slot) = self.stage_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), label)
            } else {
                format!("{} {}", "x".red(), label)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, stage: Stage) {
        if let Ok(mut slot) = self.stage_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("{} done", stage.agent().green()));
        }
    }
}

/// Plain line-based progress on stderr, for non-interactive terminals
pub struct SimpleProgress;

impl PipelineProgress for SimpleProgress {
    fn on_stage_start(&self, stage: Stage, total: usize) {
        eprintln!(
            "{} {} ({})",
            "->".cyan(),
            ProgressReporter::stage_display_name(stage).bold(),
            total
        );
    }

    fn on_item_complete(&self, _stage: Stage, label: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), label);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), label);
        }
    }

    fn on_stage_complete(&self, _stage: Stage) {}
}
