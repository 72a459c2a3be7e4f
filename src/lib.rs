// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含期刊记录、来源描述以及提取和聚合服务
pub mod domain;

/// 引擎模块
///
/// 实现HTTP获取能力和来源获取
pub mod engines;

/// 工具模块
///
/// 提供错误类型和遥测初始化
pub mod utils;

pub use domain::models::journal::JournalRecord;
pub use domain::services::loader_service::PredatoryJournalLoader;
pub use domain::services::source_registry::SourceRegistry;
