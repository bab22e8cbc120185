use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Station {
    #[serde(rename = "station")]
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub elevation: Option<f64>,
}

impl Station {
    pub fn new(
        id: String,
        name: String,
        latitude: f64,
        longitude: f64,
        elevation: Option<f64>,
    ) -> Self {
        Self {
            id,
            name,
            latitude,
            longitude,
            elevation,
        }
    }

    pub fn is_hawaii_station(&self) -> bool {
        self.latitude >= 18.5 && self.latitude <= 22.5 && self.longitude >= -161.0 && self.longitude <= -154.5
    }
}
