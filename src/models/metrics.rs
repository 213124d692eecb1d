use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One `container_metrics` row. NULL cells serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerMetricSample {
    pub cpu_usage: Option<f64>,
    pub memory_usage: Option<f64>,
    pub timestamp: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStats {
    pub cpu_usage_percent: f32,
    pub memory_usage_percent: f32,
    pub disk_usage_percent: f32,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn given_null_usage_when_sample_serialized_then_fields_are_null() {
        let sample = ContainerMetricSample {
            cpu_usage: None,
            memory_usage: Some(512.0),
            timestamp: NaiveDateTime::parse_from_str("2024-01-01 10:00:00", "%Y-%m-%d %H:%M:%S")
                .ok(),
        };

        let value = serde_json::to_value(&sample).unwrap();

        assert_eq!(
            value,
            json!({
                "cpu_usage": null,
                "memory_usage": 512.0,
                "timestamp": "2024-01-01T10:00:00"
            })
        );
    }
}
