use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::BulletViewModel;

pub const VIEW_MODEL_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletViewModelJsonContractV1 {
    pub schema_version: u32,
    pub model: BulletViewModel,
}

impl BulletViewModel {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = BulletViewModelJsonContractV1 {
            schema_version: VIEW_MODEL_JSON_SCHEMA_V1,
            model: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize view model contract v1: {e}"))
        })
    }

    /// Accepts either a bare model or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(model) = serde_json::from_str::<Self>(input) {
            return Ok(model);
        }
        let payload: BulletViewModelJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse view model json payload: {e}"))
        })?;
        if payload.schema_version != VIEW_MODEL_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported view model schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.model)
    }
}
