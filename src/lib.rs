//! Typed client for the GOKZ GlobalAPI, the registry of KZ maps, players and timed runs.
//!
//! ```no_run
//! # async fn example() -> gokz_api::Result<()> {
//! use gokz_api::{Config, GlobalApi, Mode, PlayerIdentifier, RunType};
//!
//! let api = GlobalApi::new(Config::from_env()?)?;
//! let player = PlayerIdentifier::parse("STEAM_1:1:161178172");
//! let unfinished = api
//!     .get_unfinished_maps(&player, Mode::SimpleKZ, RunType::Pro, Some(5))
//!     .await?;
//! println!("{} tier 5 maps left", unfinished.len());
//! # Ok(())
//! # }
//! ```
//!
//! Every fallible operation returns [`Result`]. When an error travels up through several calls,
//! each one appends its name to [`Error::origin`], so a single error tells the whole story.

pub mod config;
pub mod error;
pub mod global_api;
mod identifiers;
pub mod kzgo;
pub mod mapcycle;
mod mode;
mod rank;
pub mod transport;

pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use global_api::{
    composite::{is_global_map, map_tier, most_recent, unfinished_maps},
    health::{HealthSummary, ServiceStatus},
    maps::Map,
    player_ranks::PlayerRank,
    players::Player,
    record_filters::{supported_modes, RecordFilter},
    records::Record,
    GlobalApi, Payload,
};
pub use identifiers::{MapIdentifier, PlayerIdentifier, SteamId};
pub use mode::{Mode, RunType};
pub use rank::Rank;
pub use transport::Transport;
