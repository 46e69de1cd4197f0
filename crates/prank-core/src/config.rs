use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("at least one terms checkbox is required")]
    NoCheckboxes,
    #[error("the loading status list is empty")]
    NoStatuses,
    #[error("progress ceiling {0} must be in (0, 100]")]
    Ceiling(f32),
    #[error("transition delay must be non-zero")]
    TransitionDelay,
}

/// Run-time parameters of one show.
///
/// `Default` reproduces the production page. The front-end overrides the
/// checkbox and error-item counts from the markup it finds.
#[derive(Clone, Debug)]
pub struct ShowConfig {
    pub checkboxes: usize,
    pub error_items: usize,
    pub statuses: Vec<&'static str>,
    pub progress_ceiling: f32,
    pub transition_delay_ms: u64,
    pub dial_up_ms: u32,
    pub redirect_url: String,
    pub seed: u64,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            checkboxes: 3,
            error_items: 4,
            statuses: LOADING_STATUSES.to_vec(),
            progress_ceiling: PROGRESS_CEILING,
            transition_delay_ms: TRANSITION_DELAY_MS,
            dial_up_ms: DIAL_UP_MS,
            redirect_url: REDIRECT_URL.to_string(),
            seed: 42,
        }
    }
}

impl ShowConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.checkboxes == 0 {
            return Err(ConfigError::NoCheckboxes);
        }
        if self.statuses.is_empty() {
            return Err(ConfigError::NoStatuses);
        }
        if !(self.progress_ceiling > 0.0 && self.progress_ceiling <= 100.0) {
            return Err(ConfigError::Ceiling(self.progress_ceiling));
        }
        if self.transition_delay_ms == 0 {
            return Err(ConfigError::TransitionDelay);
        }
        Ok(())
    }
}
