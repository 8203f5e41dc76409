pub mod config;
pub mod review;
pub mod testing;
pub mod window;
pub mod zendesk;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
};
pub use review::{
    run_sweep, run_sweep_with_context, AuthorIdentity, ReviewError, SubmitOutcome, SweepContext,
    SweepReport,
};
pub use window::{ReviewWindow, WindowError, WindowUnit};
pub use zendesk::{HelpdeskApi, Transport, TransportError, ZendeskClient};
