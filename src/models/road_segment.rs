use serde::{Deserialize, Serialize};
use super::CongestionLevel;

/// A directed road between two junctions with its live and reference travel times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    pub start: String,
    pub end: String,
    pub live_time: f64,
    pub base_time: f64,
}

impl RoadSegment {
    #[must_use]
    pub fn congestion(&self) -> CongestionLevel {
        CongestionLevel::classify(self.live_time, self.base_time)
    }
}

/// Every known road segment as reported by one traffic poll
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficSnapshot {
    pub roads: Vec<RoadSegment>,
}
