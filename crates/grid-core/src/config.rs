//! 優化器配置

use serde::{Deserialize, Serialize};

use crate::GridError;

/// 每個核心預設最多鑲嵌的星石數
pub const DEFAULT_MAX_ITEMS: usize = 4;

/// 每個核心預設保留的候選組合數
pub const DEFAULT_CANDIDATE_LIMIT: usize = 300;

/// 鑲嵌數上限（超過此值列舉空間失控）
const MAX_ITEMS_CEILING: usize = 8;

/// 優化器參數配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// 每個核心最多鑲嵌的星石數
    pub max_items_per_core: usize,

    /// 每個核心保留的候選組合數
    /// - Some(n): 排序後截斷至前 n 個（啟發式，可能錯過全域最優）
    /// - None: 不截斷，結果精確但三重迴圈成本為候選數的立方
    pub candidate_limit: Option<usize>,

    /// 是否使用 rayon 並行搜尋（結果與循序搜尋完全一致）
    pub parallel: bool,
}

impl OptimizerConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            max_items_per_core: DEFAULT_MAX_ITEMS,
            candidate_limit: Some(DEFAULT_CANDIDATE_LIMIT),
            parallel: false,
        }
    }

    /// 建構器模式：設置鑲嵌數上限
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items_per_core = max_items;
        self
    }

    /// 建構器模式：設置候選組合數
    pub fn with_candidate_limit(mut self, limit: usize) -> Self {
        self.candidate_limit = Some(limit);
        self
    }

    /// 建構器模式：取消候選截斷
    pub fn without_candidate_limit(mut self) -> Self {
        self.candidate_limit = None;
        self
    }

    /// 建構器模式：設置是否並行
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// 驗證配置
    pub fn validate(&self) -> crate::Result<()> {
        if self.max_items_per_core == 0 || self.max_items_per_core > MAX_ITEMS_CEILING {
            return Err(GridError::InvalidConfig(format!(
                "鑲嵌數上限必須介於 1 到 {}，實際為 {}",
                MAX_ITEMS_CEILING, self.max_items_per_core
            )));
        }
        if self.candidate_limit == Some(0) {
            return Err(GridError::InvalidConfig("候選組合數不可為 0".to_string()));
        }
        Ok(())
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OptimizerConfig::default();

        assert_eq!(config.max_items_per_core, 4);
        assert_eq!(config.candidate_limit, Some(300));
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = OptimizerConfig::new()
            .with_max_items(3)
            .with_candidate_limit(50)
            .with_parallel(true);

        assert_eq!(config.max_items_per_core, 3);
        assert_eq!(config.candidate_limit, Some(50));
        assert!(config.parallel);

        let exact = config.without_candidate_limit();
        assert_eq!(exact.candidate_limit, None);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(OptimizerConfig::new().with_max_items(0).validate().is_err());
        assert!(OptimizerConfig::new().with_max_items(9).validate().is_err());
        assert!(OptimizerConfig::new().with_candidate_limit(0).validate().is_err());
    }
}
