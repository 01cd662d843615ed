//! Configuration for kvreply
//!
//! Decoders are pure functions; the few behaviors that callers may want
//! to tighten live here.

/// How map decoders treat a `Nil` value paired with a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NilPolicy {
    /// Store the value type's default (0, "", ...)
    #[default]
    ZeroFill,

    /// Fail the whole decode with `ReplyError::NilValue`
    Reject,
}

/// Decoder configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Handling of nil values in alternating key/value replies
    pub nil_map_values: NilPolicy,
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the nil map value policy
    pub fn nil_map_values(mut self, policy: NilPolicy) -> Self {
        self.config.nil_map_values = policy;
        self
    }

    /// Finish building the config
    pub fn build(self) -> Config {
        self.config
    }
}
