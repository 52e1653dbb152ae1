use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Application error codes returned by the deployment service.
pub mod codes {
    /// Deployment does not exist.
    pub const NOT_FOUND: i64 = 5;
    /// One or more required fields are missing or zero.
    pub const MISSING_FIELDS: i64 = 1032;
    /// A port number is outside 1-65535.
    pub const PORT_OUT_OF_RANGE: i64 = 3020;
    /// A deployment with the same id already exists.
    pub const DUPLICATED: i64 = 5000;
}

pub type Labels = HashMap<String, String>;

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct Port {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Port")]
    pub port: i32,
}

impl Port {
    pub fn new(name: impl Into<String>, port: i32) -> Self {
        Self {
            name: name.into(),
            port,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Deployment {
    pub id: String,
    pub replicas: i32,
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Labels,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ports: Vec<Port>,
    #[serde(
        rename = "createAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub create_at: Option<DateTime<Utc>>,
}

/// Input for creating a deployment. When `id` is `None` the client
/// generates one before the request is sent.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CreateDeployment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub replicas: i32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ports: Vec<Port>,
    #[serde(default)]
    pub labels: Labels,
}

impl CreateDeployment {
    pub fn new(replicas: i32, image: impl Into<String>) -> Self {
        Self {
            replicas,
            image: image.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_port(mut self, name: impl Into<String>, port: i32) -> Self {
        self.ports.push(Port::new(name, port));
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Wire body for `POST /deployments` with the identifier resolved.
    pub fn into_payload(self, id: String) -> DeploymentPayload {
        DeploymentPayload {
            id,
            replicas: self.replicas,
            image: self.image,
            labels: self.labels,
            ports: self.ports,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DeploymentPayload {
    pub id: String,
    pub replicas: i32,
    pub image: String,
    pub labels: Labels,
    pub ports: Vec<Port>,
}

/// Error body sent by the service on any non-success status.
#[derive(Serialize, Deserialize, Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extras: ErrorExtras,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorExtras {
    #[serde(default, deserialize_with = "null_as_default")]
    pub failed_fields: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
