pub use tracing::{debug, error, info, trace, warn};
use tracing_subscriber::{self, fmt, EnvFilter};
pub mod catalog;
pub mod constants;
pub mod cooldown;
pub mod draw;
pub mod eden;
pub mod error;
pub mod sampler;
pub mod structs;
pub mod utils;

pub use catalog::Catalog;
pub use cooldown::{Action, CooldownTracker};
pub use error::{CatalogError, DrawError, EdenError};

pub type LoggerError = Box<dyn std::error::Error + Send + Sync>;

pub fn setup_logger(level: &str) -> Result<(), LoggerError> {
    let formatter = fmt::format()
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false);
    let filter = EnvFilter::builder()
        .from_env()?
        .add_directive(format!("appletree={}", level.to_lowercase()).parse()?)
        .add_directive(format!("appletree_common={}", level.to_lowercase()).parse()?);
    tracing_subscriber::fmt()
        .event_format(formatter)
        .with_env_filter(filter)
        .try_init()?;
    Ok(())
}
