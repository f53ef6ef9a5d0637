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

use arl_dispatch::application::dto::submit_task_request::{SubmitMode, SubmitTaskRequestDto};
use arl_dispatch::application::use_cases::submit_task_use_case::SubmitTaskUseCase;
use arl_dispatch::config::settings::Settings;
use arl_dispatch::domain::services::target_policy::StaticTargetPolicy;
use arl_dispatch::infrastructure::cache::redis_client::RedisClient;
use arl_dispatch::infrastructure::database::connection;
use arl_dispatch::infrastructure::observability::metrics;
use arl_dispatch::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use arl_dispatch::queue::redis_job_queue::RedisJobQueue;
use arl_dispatch::utils::telemetry;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(author, version, about = "Submit asset scan and risk cruising tasks", long_about = None)]
struct Cli {
    /// Submit mode: `direct` or `risk_cruising`
    mode: SubmitMode,

    /// Task name
    name: String,

    /// Targets separated by commas or whitespace
    target: String,

    /// Task options as a JSON object
    #[arg(short, long)]
    options: Option<String>,
}

/// 主函数
///
/// 初始化日志与配置，连接任务库和队列后下发一次任务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    metrics::describe_metrics();

    let cli = Cli::parse();
    let options = cli
        .options
        .as_deref()
        .map(serde_json::from_str::<serde_json::Value>)
        .transpose()?;

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Connect to database
    let db = Arc::new(connection::connect(&settings.database).await?);

    // 4. Connect to queue
    let redis_client = RedisClient::new(&settings.redis.url)?;
    redis_client.ping().await?;
    let queue = Arc::new(RedisJobQueue::new(redis_client, &settings.queue));
    info!(queue = %settings.queue.key, "Job queue ready");

    // 5. Submit
    let use_case = SubmitTaskUseCase::new(
        Arc::new(StaticTargetPolicy::from_settings(&settings.policy)),
        Arc::new(TaskRepositoryImpl::new(db)),
        queue,
    );
    let dto = SubmitTaskRequestDto {
        name: cli.name,
        target: cli.target,
        mode: cli.mode,
        options,
    };

    match use_case.execute(dto).await {
        Ok(tasks) => {
            println!("{}", serde_json::to_string_pretty(&tasks)?);
            Ok(())
        }
        Err(e) => {
            if !e.submitted.is_empty() {
                println!("{}", serde_json::to_string_pretty(&e.submitted)?);
            }
            error!(submitted = e.submitted.len(), error = %e.error, "Submission failed");
            Err(e.into())
        }
    }
}
