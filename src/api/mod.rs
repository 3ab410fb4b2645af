//! Host-facing session types: explicit per-chart state, the settings editor
//! contract, and the JSON configuration format.

mod band_session;
mod json_contract;
mod settings_draft;

pub use band_session::{BandSession, SessionUpdate};
pub use json_contract::{BAND_CONFIG_JSON_SCHEMA_V1, BandConfig, BandConfigJsonContractV1};
pub use settings_draft::BandSettingsDraft;
