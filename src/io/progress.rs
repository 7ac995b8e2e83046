//! Row progress bars for batch generation
//!
//! At most `MAX_INDIVIDUAL_PROGRESS_BARS` job bars are on screen; they always
//! show the most recently started jobs. Batches larger than that also get an
//! overall bar counting finished images.

use std::sync::LazyLock;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

#[derive(Debug, Clone, Default)]
struct JobState {
    label: String,
    rows_done: usize,
    rows_total: usize,
    finished: bool,
}

impl JobState {
    fn show_on(&self, bar: &ProgressBar) {
        bar.set_length(self.rows_total as u64);
        bar.set_position(self.rows_done as u64);
        let digits = self.rows_total.to_string().len();
        bar.set_message(format!("{:>digits$}/{}", self.rows_done, self.rows_total));
        if self.finished {
            bar.set_prefix(format!("✓ {}", self.label));
        } else {
            bar.set_prefix(self.label.clone());
        }
    }
}

/// Progress display for a batch of stereogram jobs
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    row_bars: Vec<ProgressBar>,
    // Indexed by job, unstarted jobs have no state
    jobs: Vec<Option<JobState>>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            row_bars: Vec::new(),
            jobs: Vec::new(),
        }
    }

    /// Create the bars for a batch of `job_count` jobs
    pub fn initialize(&mut self, job_count: usize) {
        if job_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(job_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..job_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(ROW_STYLE.clone());
            self.row_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Begin tracking job `index`, which synthesizes `rows` rows
    pub fn start_job(&mut self, index: usize, label: &str, rows: usize) {
        if index >= self.jobs.len() {
            self.jobs.resize(index + 1, None);
        }
        if let Some(slot) = self.jobs.get_mut(index) {
            *slot = Some(JobState {
                label: label.to_string(),
                rows_total: rows,
                ..JobState::default()
            });
        }
        self.redraw();
    }

    /// Report the number of finished rows of job `index`
    pub fn update_rows(&mut self, index: usize, rows_done: usize) {
        if let Some(Some(job)) = self.jobs.get_mut(index) {
            job.rows_done = rows_done;
        }
        self.redraw();
    }

    /// Mark job `index` as written
    pub fn complete_job(&mut self, index: usize) {
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(Some(job)) = self.jobs.get_mut(index) {
            job.rows_done = job.rows_total;
            job.finished = true;
        }
        self.redraw();
    }

    /// Remove every bar from the terminal
    pub fn finish(&self) {
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.finish_with_message("All images generated");
        }
        let _ = self.multi_progress.clear();
    }

    fn redraw(&self) {
        let started: Vec<&JobState> = self.jobs.iter().flatten().collect();
        let first_visible = started.len().saturating_sub(self.row_bars.len());
        let visible = started.get(first_visible..).unwrap_or(&[]);

        for (index, bar) in self.row_bars.iter().enumerate() {
            match visible.get(index) {
                Some(job) => job.show_on(bar),
                None => {
                    bar.set_length(0);
                    bar.set_position(0);
                    bar.set_message(String::new());
                    bar.set_prefix(String::new());
                }
            }
        }
    }
}
