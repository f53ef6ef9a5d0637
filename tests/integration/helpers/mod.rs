// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod mock_queue;

use arl_dispatch::application::use_cases::submit_task_use_case::SubmitTaskUseCase;
use arl_dispatch::domain::services::target_policy::StaticTargetPolicy;
use arl_dispatch::domain::repositories::task_repository::TaskRepository;
use arl_dispatch::queue::job_queue::JobQueue;
use std::sync::Arc;

/// 默认测试策略：屏蔽回环网段与 `gov.cn`
pub fn test_policy() -> Arc<StaticTargetPolicy> {
    Arc::new(StaticTargetPolicy::new(
        vec!["127.0.0.0/8".parse().unwrap()],
        vec!["gov.cn".to_string()],
    ))
}

pub fn use_case<R, Q>(repo: Arc<R>, queue: Arc<Q>) -> SubmitTaskUseCase<StaticTargetPolicy, R, Q>
where
    R: TaskRepository + 'static,
    Q: JobQueue + 'static,
{
    SubmitTaskUseCase::new(test_policy(), repo, queue)
}
