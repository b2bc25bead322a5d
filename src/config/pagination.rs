//! Pagination limits for list queries

use serde::Deserialize;

use super::error::ConfigValidationError;

/// Pagination configuration
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Page size when the caller gives none
    #[serde(default = "default_per_page")]
    pub default_per_page: u32,

    /// Largest page size a caller may request
    #[serde(default = "default_max_per_page")]
    pub max_per_page: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_per_page: default_per_page(),
            max_per_page: default_max_per_page(),
        }
    }
}

impl PaginationConfig {
    /// Normalize a request to `page >= 1` and `1 <= per_page <= max_per_page`.
    pub fn clamp(&self, page: Option<u32>, per_page: Option<u32>) -> (u32, u32) {
        let page = page.unwrap_or(1).max(1);
        let per_page = per_page
            .unwrap_or(self.default_per_page)
            .clamp(1, self.max_per_page.max(1));
        (page, per_page)
    }

    /// Validate pagination configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.default_per_page == 0 || self.max_per_page == 0 {
            return Err(ConfigValidationError::InvalidPageSize);
        }
        if self.default_per_page > self.max_per_page {
            return Err(ConfigValidationError::DefaultExceedsMax {
                default: self.default_per_page,
                max: self.max_per_page,
            });
        }
        Ok(())
    }
}

fn default_per_page() -> u32 {
    20
}

fn default_max_per_page() -> u32 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_fills_defaults() {
        assert_eq!(PaginationConfig::default().clamp(None, None), (1, 20));
    }

    #[test]
    fn clamp_bounds_both_values() {
        let config = PaginationConfig::default();
        assert_eq!(config.clamp(Some(0), Some(0)), (1, 1));
        assert_eq!(config.clamp(Some(7), Some(500)), (7, 100));
    }

    #[test]
    fn validate_rejects_inconsistent_limits() {
        let zero = PaginationConfig {
            default_per_page: 0,
            max_per_page: 10,
        };
        let inverted = PaginationConfig {
            default_per_page: 50,
            max_per_page: 10,
        };

        assert_eq!(zero.validate(), Err(ConfigValidationError::InvalidPageSize));
        assert_eq!(
            inverted.validate(),
            Err(ConfigValidationError::DefaultExceedsMax {
                default: 50,
                max: 10
            })
        );
        assert!(PaginationConfig::default().validate().is_ok());
    }
}
