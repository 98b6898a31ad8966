use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::PlayerId;

/// Points awarded per hole by net score relative to par.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct StablefordTable {
    pub double_eagle_or_better: i32,
    pub eagle: i32,
    pub birdie: i32,
    pub par: i32,
    pub bogey: i32,
    pub double_bogey_or_worse: i32,
}

impl Default for StablefordTable {
    fn default() -> Self {
        Self {
            double_eagle_or_better: 5,
            eagle: 4,
            birdie: 3,
            par: 2,
            bogey: 1,
            double_bogey_or_worse: 0,
        }
    }
}

impl StablefordTable {
    #[must_use]
    pub fn as_array(&self) -> [i32; 6] {
        [
            self.double_eagle_or_better,
            self.eagle,
            self.birdie,
            self.par,
            self.bogey,
            self.double_bogey_or_worse,
        ]
    }

    #[must_use]
    pub fn from_array(values: [i32; 6]) -> Self {
        let [double_eagle_or_better, eagle, birdie, par, bogey, double_bogey_or_worse] = values;
        Self {
            double_eagle_or_better,
            eagle,
            birdie,
            par,
            bogey,
            double_bogey_or_worse,
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if a better score would earn fewer points than a worse one.
    pub fn validate(&self) -> Result<(), CoreError> {
        let values = self.as_array();
        if values.windows(2).any(|w| w[0] < w[1]) {
            return Err(CoreError::Config(format!(
                "stableford points must not increase for worse scores: {values:?}"
            )));
        }
        Ok(())
    }
}

/// Settings the scoring pipeline reads. Passed in explicitly rather than held globally.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub stableford: StablefordTable,
    /// Resolved by the caller from the roster's current-user flag.
    pub current_user: Option<PlayerId>,
}

impl ScoringConfig {
    /// # Errors
    ///
    /// Will return `Err` if the json is malformed or the points table fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_str(json)?;
        config.stableford.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Will return `Err` if the config cannot be serialized.
    pub fn to_json_string(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn stableford(&self) -> &StablefordTable {
        &self.stableford
    }

    /// # Errors
    ///
    /// Will return `Err` if the new table fails validation; the old table is kept.
    pub fn set_stableford(&mut self, table: StablefordTable) -> Result<(), CoreError> {
        table.validate()?;
        log::debug!("stableford table set to {:?}", table.as_array());
        self.stableford = table;
        Ok(())
    }
}
