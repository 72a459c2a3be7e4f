// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::FetchError;
use thiserror::Error;
use url::Url;

/// 配置错误类型
///
/// 在启动阶段构建来源注册表时产生，会终止整个运行
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("来源地址格式错误: {location}")]
    MalformedLocation {
        location: String,
        source: url::ParseError,
    },

    #[error("提取模式无效: {pattern}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("配置加载失败: {0}")]
    Settings(#[from] config::ConfigError),
}

/// 表格解析错误类型
#[derive(Error, Debug)]
pub enum TabularError {
    #[error("CSV解析错误: {0}")]
    Csv(#[from] csv::Error),

    #[error("第{row}行列数错误: 期望3列, 实际{found}列")]
    MalformedRow { row: u64, found: usize },
}

/// 单个来源处理错误类型
///
/// 只在来源处理边界内部传播，记录日志后继续处理下一个来源
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("来源不可达: {0}")]
    Unreachable(Url),

    #[error("传输错误: {0}")]
    Transport(#[from] FetchError),

    #[error("表格来源解析失败: {0}")]
    Tabular(#[from] TabularError),

    #[error("来源未配置提取策略: {0}")]
    MissingStrategy(Url),
}
