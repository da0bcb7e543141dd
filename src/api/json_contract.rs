use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::DashboardConfig;

pub const DASHBOARD_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: DashboardConfig,
}

impl DashboardConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = DashboardConfigJsonContractV1 {
            schema_version: DASHBOARD_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidConfig(format!(
                "failed to serialize dashboard config contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare config object or a versioned contract payload,
    /// and validates the result.
    ///
    /// An object carrying `schema_version` is always read as a contract
    /// payload; only objects without it are read as a bare config.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse dashboard config json: {e}"))
        })?;
        let versioned = value
            .as_object()
            .is_some_and(|object| object.contains_key("schema_version"));

        let config = if versioned {
            let payload: DashboardConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    ChartError::InvalidConfig(format!(
                        "failed to parse dashboard config contract v1: {e}"
                    ))
                })?;
            if payload.schema_version != DASHBOARD_CONFIG_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidConfig(format!(
                    "unsupported dashboard config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value::<DashboardConfig>(value).map_err(|e| {
                ChartError::InvalidConfig(format!("failed to parse dashboard config json: {e}"))
            })?
        };
        config.validate()?;
        Ok(config)
    }
}
