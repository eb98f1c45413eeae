use async_trait::async_trait;

use crate::{AnalysisError, IndicatorSet, RiskProfile, Series};

/// Trait for indicator computation engines
#[async_trait]
pub trait IndicatorAnalyzer: Send + Sync {
    async fn analyze(&self, series: &Series) -> Result<IndicatorSet, AnalysisError>;
}

/// Trait for risk assessment engines
#[async_trait]
pub trait RiskAnalyzer: Send + Sync {
    async fn analyze(&self, series: &Series) -> Result<RiskProfile, AnalysisError>;
}
