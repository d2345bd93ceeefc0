//! Configuration consumed by the transition coordinator.
//!
//! A [`TransitionsConfig`] is an immutable value handed to
//! [`TransitionCoordinator::new`](crate::TransitionCoordinator::new). Use
//! [`TransitionsConfig::builder`] to start from the defaults, or
//! [`TransitionsConfig::to_builder`] to override a few fields of an
//! existing value.

/// Log target used when no tag is configured.
pub const DEFAULT_LOG_TARGET: &str = "segue::transitions";

/// What the coordinator does when a creator violates the protocol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop the commit pass and return the error.
    #[default]
    Abort,
    /// Log the error, produce no transition for that node, and go on.
    LogAndSkip,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionsConfig {
    animations_enabled: bool,
    error_policy: ErrorPolicy,
    log_tag: Option<String>,
    warn_on_duplicate_keys: bool,
}

impl Default for TransitionsConfig {
    fn default() -> Self {
        Self {
            animations_enabled: true,
            error_policy: ErrorPolicy::Abort,
            log_tag: None,
            warn_on_duplicate_keys: true,
        }
    }
}

impl TransitionsConfig {
    /// Builder seeded with the defaults.
    pub fn builder() -> TransitionsConfigBuilder {
        TransitionsConfigBuilder {
            config: Self::default(),
        }
    }

    /// Builder seeded with this configuration's values.
    pub fn to_builder(&self) -> TransitionsConfigBuilder {
        TransitionsConfigBuilder {
            config: self.clone(),
        }
    }

    /// When false, creators are still retained for matching but no
    /// transitions are computed.
    pub fn animations_enabled(&self) -> bool {
        self.animations_enabled
    }

    /// What the coordinator does when a creator fails.
    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    /// The configured log tag, if one was set.
    pub fn log_tag(&self) -> Option<&str> {
        self.log_tag.as_deref()
    }

    /// Target for the coordinator's log records.
    pub fn log_target(&self) -> &str {
        self.log_tag.as_deref().unwrap_or(DEFAULT_LOG_TARGET)
    }

    /// Whether a repeated identity key in one commit is logged.
    pub fn warn_on_duplicate_keys(&self) -> bool {
        self.warn_on_duplicate_keys
    }
}

/// Builder for [`TransitionsConfig`].
#[derive(Clone, Debug)]
pub struct TransitionsConfigBuilder {
    config: TransitionsConfig,
}

impl TransitionsConfigBuilder {
    /// Turn transition computation on or off.
    pub fn animations_enabled(mut self, enabled: bool) -> Self {
        self.config.animations_enabled = enabled;
        self
    }

    /// Set the error policy.
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.config.error_policy = policy;
        self
    }

    /// Set the log target. An empty tag is treated as unset.
    pub fn log_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.config.log_tag = if tag.is_empty() { None } else { Some(tag) };
        self
    }

    /// Log a warning for repeated identity keys.
    pub fn warn_on_duplicate_keys(mut self, enabled: bool) -> Self {
        self.config.warn_on_duplicate_keys = enabled;
        self
    }

    /// Finish building.
    pub fn build(self) -> TransitionsConfig {
        self.config
    }
}
