// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// 下发方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitMode {
    /// 按IP/域名拆分为资产扫描任务
    Direct,
    /// 单个风险巡航任务
    RiskCruising,
}

impl fmt::Display for SubmitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitMode::Direct => write!(f, "direct"),
            SubmitMode::RiskCruising => write!(f, "risk_cruising"),
        }
    }
}

impl FromStr for SubmitMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(SubmitMode::Direct),
            "risk_cruising" => Ok(SubmitMode::RiskCruising),
            other => Err(format!("unknown submit mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct SubmitTaskRequestDto {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(length(min = 1))]
    pub target: String,
    pub mode: SubmitMode,
    /// 任务选项，缺省为空映射
    pub options: Option<serde_json::Value>,
}
