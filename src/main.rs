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

use predatory_journals::config::settings::Settings;
use predatory_journals::engines::reqwest_engine::ReqwestFetcher;
use predatory_journals::utils::telemetry;
use predatory_journals::{PredatoryJournalLoader, SourceRegistry};
use std::io::Write;
use tracing::info;

/// 主函数
///
/// 加载配置并执行一次在线来源加载，结果以JSON输出到标准输出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting predatory journal loader...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Build source registry, a malformed source aborts startup
    let registry = SourceRegistry::from_settings(&settings.sources)?;
    info!(sources = registry.len(), "Source registry built");

    // 4. Run one ingestion
    let http = ReqwestFetcher::new(&settings.http)?;
    let loader = PredatoryJournalLoader::new(registry, http);
    let records = loader.run().await;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &records)?;
    writeln!(stdout)?;

    Ok(())
}
