use business::domain::vision::polling::PollingPolicy;
use business::domain::vision::value_objects::GridLayout;

use super::{grid_config, polling_config, vision_config::VisionConfig};

pub struct AppConfig {
    pub vision: VisionConfig,
    pub polling: PollingPolicy,
    pub grid: GridLayout,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            vision: VisionConfig::from_env()?,
            polling: polling_config::from_env()?,
            grid: grid_config::from_env()?,
        })
    }
}
