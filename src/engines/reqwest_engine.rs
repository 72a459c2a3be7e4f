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

use crate::config::settings::HttpSettings;
use crate::engines::traits::{ContentReader, FetchError, HttpFetcher};
use async_trait::async_trait;
use std::io::Cursor;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// 获取引擎
///
/// 基于reqwest实现的HTTP获取能力
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// 根据HTTP配置创建获取引擎
    ///
    /// 未配置超时时间时沿用reqwest的默认行为
    ///
    /// # 参数
    ///
    /// * `settings` - HTTP配置
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestFetcher)` - 获取引擎
    /// * `Err(FetchError)` - 客户端构建失败
    pub fn new(settings: &HttpSettings) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.as_str());

        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    /// 使用HEAD请求探测，只有2xx状态视为可达
    async fn reachable(&self, url: &Url) -> bool {
        match self.client.head(url.clone()).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(url = %url, error = %e, "Reachability probe failed");
                false
            }
        }
    }

    /// 执行GET请求并返回响应体
    ///
    /// # 返回值
    ///
    /// * `Ok(ContentReader)` - 响应体的字节流
    /// * `Err(FetchError)` - 请求失败或状态码不是2xx
    async fn download(&self, url: &Url) -> Result<ContentReader, FetchError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(Box::new(Cursor::new(body)))
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
