use std::sync::Arc;

use async_trait::async_trait;

use showcase_core::geo::{Circle, Distance, GeoIndex, Point, SICILY_KEY};

use super::Runner;

const CITIES: [(&str, f64, f64); 3] = [
    ("Palermo", 13.361389, 38.115556),
    ("Catania", 15.087269, 37.502669),
    ("Agrigento", 13.583333, 37.316667),
];

/// Adds three Sicilian cities and lists those within 100 km of Agrigento.
pub struct GeographyRunner {
    geo: Arc<dyn GeoIndex>,
}

impl GeographyRunner {
    pub fn new(geo: Arc<dyn GeoIndex>) -> Self {
        Self { geo }
    }
}

#[async_trait]
impl Runner for GeographyRunner {
    fn title(&self) -> &str {
        "geography"
    }

    async fn run(&self) -> anyhow::Result<()> {
        for (name, longitude, latitude) in CITIES {
            self.geo
                .add(SICILY_KEY, Point::new(longitude, latitude)?, name)
                .await?;
        }

        let agrigento = Point::new(13.583333, 37.316667)?;
        let circle = Circle::new(agrigento, Distance::kilometers(100.0))?;

        for result in self.geo.radius(SICILY_KEY, &circle).await? {
            tracing::info!("{}", result);
        }

        Ok(())
    }
}
