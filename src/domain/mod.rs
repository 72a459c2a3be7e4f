// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：期刊记录和来源描述
/// - 服务（services）：来源注册、内容提取和记录聚合
pub mod models;
pub mod services;
