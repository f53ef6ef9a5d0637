// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::describe_counter;

/// 成功下发的任务数，按作业动作区分
pub const TASKS_DISPATCHED_TOTAL: &str = "arl_tasks_dispatched_total";
/// 入队失败后撤销的任务数，按作业动作区分
pub const TASK_ROLLBACKS_TOTAL: &str = "arl_task_rollbacks_total";

/// 注册指标描述
///
/// 不安装任何导出器，由宿主进程决定指标的去向；未安装记录器时计数为空操作。
pub fn describe_metrics() {
    describe_counter!(
        TASKS_DISPATCHED_TOTAL,
        "Total number of tasks persisted and accepted by the job queue"
    );
    describe_counter!(
        TASK_ROLLBACKS_TOTAL,
        "Total number of tasks whose enqueue failed and triggered a rollback"
    );
}
