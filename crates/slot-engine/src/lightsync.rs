//! Reading-light sync planning.
//!
//! While a rented book is open in the reader, the room's lights follow
//! the pages currently on screen: each page may carry per-light-type
//! color configurations, and the page nearest the middle of the viewport
//! decides what every light type shows. This module computes that plan —
//! which config goes to which light type, and which device endpoints a
//! type maps to. Actually pushing configs to the controllers is the
//! dispatch layer's job, not ours.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One color command for a light controller.
///
/// `color` is a packed RGB value; the optional alternate color and delta
/// make the controller blink between the two at the given period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightConfig {
    pub color: u32,
    pub color_alter: Option<u32>,
    pub color_alter_ms_delta: Option<u32>,
}

impl LightConfig {
    /// Steady black — what "lights off" looks like to a controller.
    pub const OFF: LightConfig = LightConfig {
        color: 0,
        color_alter: None,
        color_alter_ms_delta: None,
    };
}

/// A page's configuration for one light type, as attached to a readable
/// book by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLighting {
    pub id: i64,
    pub literature_id: i64,
    pub page_number: u32,
    pub light_type_name: String,
    pub configuration: LightConfig,
}

/// A physical light controller bound to a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightDevice {
    pub id: i64,
    pub host: String,
    pub port: u16,
    pub room_id: i64,
    pub light_type_name: Option<String>,
    pub details: Option<String>,
}

/// Reorder visible page numbers from the middle of the viewport outward.
///
/// The page closest to the viewport center carries the most weight, with
/// ties broken toward the later page (a reader scrolling forward is
/// entering the later page, not leaving it).
pub fn center_out_order(pages: &[u32]) -> Vec<u32> {
    let mid = pages.len() as f32 / 2.0;
    let mut indexed: Vec<(usize, u32)> = pages.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| center_key(a.0, mid).total_cmp(&center_key(b.0, mid)));
    indexed.into_iter().map(|(_, page)| page).collect()
}

fn center_key(index: usize, mid: f32) -> f32 {
    let offset = index as f32 - mid;
    if offset > 0.0 {
        offset + 0.5
    } else if offset < 0.0 {
        -offset - 0.5
    } else {
        0.0
    }
}

/// Pick the light plan for the pages currently visible.
///
/// The first page in center-out order that has any configurations wins
/// the whole plan; its configs are grouped by light type name, first
/// config per type. An empty map means no visible page is configured and
/// the lights should be left as they are.
pub fn plan_for_pages(
    visible_pages: &[u32],
    configs: &[PageLighting],
) -> BTreeMap<String, LightConfig> {
    for page in center_out_order(visible_pages) {
        let mut plan = BTreeMap::new();
        for cfg in configs.iter().filter(|c| c.page_number == page) {
            plan.entry(cfg.light_type_name.clone())
                .or_insert_with(|| cfg.configuration.clone());
        }
        if !plan.is_empty() {
            return plan;
        }
    }
    BTreeMap::new()
}

/// The plan sent when the reader is closed: every light type to off.
pub fn shutdown_plan<'a, I>(light_types: I) -> BTreeMap<String, LightConfig>
where
    I: IntoIterator<Item = &'a str>,
{
    light_types
        .into_iter()
        .map(|name| (name.to_string(), LightConfig::OFF))
        .collect()
}

/// Group a room's devices by light type as HTTP endpoint URLs.
///
/// Devices without a light type name cannot receive typed plans and are
/// skipped.
pub fn device_endpoints(devices: &[LightDevice]) -> BTreeMap<String, Vec<String>> {
    let mut endpoints: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for device in devices {
        let Some(type_name) = &device.light_type_name else {
            continue;
        };
        endpoints
            .entry(type_name.clone())
            .or_default()
            .push(format!("http://{}:{}/", device.host, device.port));
    }
    endpoints
}
