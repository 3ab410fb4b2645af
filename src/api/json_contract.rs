use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::extensions::BandStyle;
use crate::indicators::BandOptions;

pub const BAND_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Options and style as persisted or exchanged with a settings editor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BandConfig {
    pub options: BandOptions,
    pub style: BandStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: BandConfig,
}

impl BandConfig {
    #[must_use]
    pub fn new(options: BandOptions, style: BandStyle) -> Self {
        Self { options, style }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize band config: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = BandConfigJsonContractV1 {
            schema_version: BAND_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize band config contract v1: {e}"))
        })
    }

    /// Accepts either a versioned contract payload or a bare config object.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(payload) = serde_json::from_str::<BandConfigJsonContractV1>(input) {
            if payload.schema_version != BAND_CONFIG_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported band config schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.config);
        }
        serde_json::from_str::<Self>(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse band config json payload: {e}"))
        })
    }
}
