//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    /// Timeout global de requests en segundos (expirar = retryable)
    pub request_timeout_secs: u64,
    /// TTL del snapshot de stock cacheado en Redis
    pub stock_cache_ttl_secs: u64,
    /// Cantidad de journeys recientes por vendedor en GET /api/salesmen
    pub recent_journeys_limit: i64,
}

impl EnvironmentConfig {
    /// Cargar configuración desde el entorno, con defaults de desarrollo
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default(),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("REQUEST_TIMEOUT_SECS must be a valid number"),
            stock_cache_ttl_secs: env::var("STOCK_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .expect("STOCK_CACHE_TTL_SECS must be a valid number"),
            recent_journeys_limit: env::var("RECENT_JOURNEYS_LIMIT")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("RECENT_JOURNEYS_LIMIT must be a valid number"),
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
