use std::env;
use std::fmt;
use std::str::FromStr;

use crate::env_or;

/// Backing implementation for the attendance table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    DynamoDb,
    /// Process-local map; for development and tests only.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dynamodb" | "dynamo" => Ok(Self::DynamoDb),
            "memory" | "in-memory" => Ok(Self::Memory),
            other => Err(format!("unknown store backend: {}", other)),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DynamoDb => write!(f, "dynamodb"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub table_name: String,
    pub aws_region: String,
    /// Seconds a record is kept after its last write.
    pub retention_seconds: i64,
    pub backend: StoreBackend,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| "attendance".to_string()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            retention_seconds: env_or("ATTENDANCE_RETENTION", 86400), // 24 hours
            backend: env_or("STORE_BACKEND", StoreBackend::DynamoDb),
        }
    }
}
