//! DTOs for the health endpoint.

use serde::Serialize;

/// Overall service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// State of a single dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Ok,
    Error,
}

/// Body of `GET /api/v1/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

impl HealthResponse {
    /// Derives the overall status from the component checks.
    pub fn from_checks(checks: HealthChecks) -> Self {
        let status = if checks.database.status == ComponentStatus::Ok {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Degraded
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}

/// The only dependency is the URL store.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: ComponentCheck,
}

#[derive(Debug, Serialize)]
pub struct ComponentCheck {
    pub status: ComponentStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl ComponentCheck {
    pub fn ok() -> Self {
        Self {
            status: ComponentStatus::Ok,
            message: None,
        }
    }

    pub fn failed(message: &'static str) -> Self {
        Self {
            status: ComponentStatus::Error,
            message: Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_healthy_serialization() {
        let response = HealthResponse::from_checks(HealthChecks {
            database: ComponentCheck::ok(),
        });

        assert!(response.is_healthy());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION"),
                "checks": { "database": { "status": "ok" } }
            })
        );
    }

    #[test]
    fn test_failed_database_degrades_service() {
        let response = HealthResponse::from_checks(HealthChecks {
            database: ComponentCheck::failed("Database unavailable"),
        });

        assert!(!response.is_healthy());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "degraded");
        assert_eq!(value["checks"]["database"]["status"], "error");
        assert_eq!(value["checks"]["database"]["message"], "Database unavailable");
    }
}
