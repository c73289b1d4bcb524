//! Extraction of the three summary figures from a building-insights response.

use serde::Deserialize;

use crate::error::SolarError;

/// Summary figures for one building. Each is independently absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolarSummary {
    pub num_panels: Option<i64>,
    pub yearly_energy_kwh: Option<f64>,
    pub solar_area_m2: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct BuildingInsights {
    #[serde(rename = "solarPotential", default)]
    solar_potential: Option<SolarPotential>,
}

#[derive(Debug, Deserialize)]
struct SolarPotential {
    #[serde(rename = "solarPanelConfigs", default)]
    panel_configs: Option<Vec<PanelConfig>>,
    #[serde(rename = "maxArrayAreaMeters2", default)]
    max_array_area_m2: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PanelConfig {
    #[serde(rename = "panelsCount", default)]
    panels_count: Option<i64>,
    #[serde(rename = "yearlyEnergyDcKwh", default)]
    yearly_energy_dc_kwh: Option<f64>,
}

/// Pick the configuration with the most panels. Ties go to the later entry.
fn best_config(configs: &[PanelConfig]) -> Option<&PanelConfig> {
    let ascending = configs
        .windows(2)
        .all(|w| w[0].panels_count <= w[1].panels_count);
    if !ascending {
        tracing::warn!("panel configurations are not in ascending panel-count order");
    }
    configs.iter().max_by_key(|c| c.panels_count)
}

/// Extract panel count, yearly energy and maximum array area.
///
/// Panel figures come from the largest configuration; the area is read
/// independently, so it can be present when no configurations are.
///
/// # Errors
///
/// Returns [`SolarError::Deserialize`] if a known field has the wrong type.
pub fn extract_summary(response: &serde_json::Value) -> Result<SolarSummary, SolarError> {
    let insights =
        BuildingInsights::deserialize(response).map_err(|e| SolarError::Deserialize {
            context: "building insights summary".to_string(),
            source: e,
        })?;

    let Some(potential) = insights.solar_potential else {
        return Ok(SolarSummary::default());
    };

    let best = potential
        .panel_configs
        .as_deref()
        .and_then(best_config);

    Ok(SolarSummary {
        num_panels: best.and_then(|c| c.panels_count),
        yearly_energy_kwh: best.and_then(|c| c.yearly_energy_dc_kwh),
        solar_area_m2: potential.max_array_area_m2,
    })
}
