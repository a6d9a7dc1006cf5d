use tracing::Level;

/// Settings for adapter failure reporting.
///
/// Builder style, like a connection config:
///
/// ```
/// use adapter_errors::report::ReportConfig;
/// use tracing::Level;
///
/// let config = ReportConfig::new()
///     .target_label("jobs")
///     .include_details(false)
///     .transient_level(Level::INFO);
/// assert_eq!(config.target_label, "jobs");
/// ```
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Recorded as the `adapter` field of every event.
    pub target_label: String,

    /// Whether detail strings are attached to the event.
    pub include_details: bool,

    /// Level for transient failures (no leader, timeout).
    pub transient_level: Level,

    /// Level for every other failure.
    pub failure_level: Level,
}

impl ReportConfig {
    pub fn new() -> Self {
        Self {
            target_label: "adapter".to_string(),
            include_details: true,
            transient_level: Level::WARN,
            failure_level: Level::ERROR,
        }
    }

    pub fn target_label(mut self, label: &str) -> Self {
        self.target_label = label.to_string();
        self
    }

    pub fn include_details(mut self, include: bool) -> Self {
        self.include_details = include;
        self
    }

    pub fn transient_level(mut self, level: Level) -> Self {
        self.transient_level = level;
        self
    }

    pub fn failure_level(mut self, level: Level) -> Self {
        self.failure_level = level;
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new()
    }
}
