// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 来源注册表（source_registry）：内置或配置的有序来源列表
/// - 表格处理器（tabular_handler）：把CSV行重排为期刊记录
/// - 片段提取器（fragment_extractor）：用粗粒度模式切分HTML页面
/// - 片段清洗器（fragment_cleaner）：从片段中提取名称、缩写和网址
/// - 聚合器（aggregator）：单次运行内只追加的记录序列
/// - 加载服务（loader_service）：按两遍流程编排以上组件
pub mod aggregator;
pub mod fragment_cleaner;
pub mod fragment_extractor;
pub mod loader_service;
pub mod source_registry;
pub mod tabular_handler;
