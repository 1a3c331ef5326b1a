use std::path::PathBuf;
use std::time::Duration;

use crate::browser::ChromeSession;
use crate::error::Result;

/// Settings for launching the Chrome window the run drives.
pub struct BrowserConfig {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub chrome_path: Option<String>,
    /// Timeout for a single CDP request (default: 30s).
    pub request_timeout: Duration,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1920,
            viewport_height: 1080,
            chrome_path: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

pub struct BrowserBuilder {
    config: BrowserConfig,
}

impl BrowserBuilder {
    pub fn new() -> Self {
        Self {
            config: BrowserConfig::default(),
        }
    }

    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.config.viewport_width = width;
        self.config.viewport_height = height;
        self
    }

    pub fn chrome_path(mut self, path: impl Into<String>) -> Self {
        self.config.chrome_path = Some(path.into());
        self
    }

    /// Set the timeout applied to each CDP request.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    pub fn build_config(self) -> BrowserConfig {
        self.config
    }

    pub async fn build(self) -> Result<ChromeSession> {
        ChromeSession::launch(self.build_config()).await
    }
}

impl Default for BrowserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Timings and output settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Budget for every presence/clickability/readiness wait.
    pub wait_timeout: Duration,
    pub poll_interval: Duration,
    /// Pause before each screenshot so late rendering lands in the capture.
    pub settle_delay: Duration,
    /// Pause between the first result appearing and reading the list.
    pub results_settle_delay: Duration,
    /// Pause at the start of the finishing phase.
    pub drain_delay: Duration,
    pub max_results: usize,
    pub image_width_inches: f64,
    pub output_path: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            wait_timeout: Duration::from_secs(10),
            poll_interval: Duration::from_millis(100),
            settle_delay: Duration::from_secs(1),
            results_settle_delay: Duration::from_secs(2),
            drain_delay: Duration::from_secs(5),
            max_results: 5,
            image_width_inches: 6.0,
            output_path: PathBuf::from("reporte.docx"),
        }
    }
}

impl RunConfig {
    pub fn with_wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the screenshot, results and drain delays at once.
    pub fn with_delays(mut self, settle: Duration, results: Duration, drain: Duration) -> Self {
        self.settle_delay = settle;
        self.results_settle_delay = results;
        self.drain_delay = drain;
        self
    }

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Zero delays and a short wait budget, for driving fakes in tests.
    pub fn immediate() -> Self {
        Self::default()
            .with_wait_timeout(Duration::from_millis(50))
            .with_poll_interval(Duration::from_millis(5))
            .with_delays(Duration::ZERO, Duration::ZERO, Duration::ZERO)
    }
}
