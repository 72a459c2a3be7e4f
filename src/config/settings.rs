// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含HTTP客户端配置和可选的来源列表
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// HTTP配置
    pub http: HttpSettings,
    /// 来源配置，为空时使用内置来源
    #[serde(default)]
    pub sources: Vec<SourceSettings>,
}

/// HTTP配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// 请求使用的User-Agent
    pub user_agent: String,
    /// 请求超时时间（秒），未设置时使用底层客户端的默认值
    pub timeout_secs: Option<u64>,
}

/// 来源配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    /// 来源地址
    pub location: String,
    /// 元素模式，仅HTML来源需要
    pub element_pattern: Option<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、配置文件和环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default(
                "http.user_agent",
                "Mozilla/5.0 (compatible; predatory-journals/0.1)",
            )?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("PREDATORY_JOURNALS")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
