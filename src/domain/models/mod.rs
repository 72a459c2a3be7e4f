// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心数据结构，包括：
/// - 期刊记录（journal）：所有来源归一化后的输出单元
/// - 来源描述（source）：来源地址及其提取策略
pub mod journal;
pub mod source;
