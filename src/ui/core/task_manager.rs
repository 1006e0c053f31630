use super::actions::Action;
use crate::api::RatesApi;
use crate::conversion::ConversionRequest;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs network calls off the UI task.
///
/// Each spawned task reports its outcome as an [`Action`] on the channel
/// returned by [`TaskManager::new`]; the UI loop drains it and is the only
/// writer of UI state.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn the currency list fetch
    pub fn spawn_currency_load(&mut self, api: Arc<dyn RatesApi>) -> TaskId {
        let task_id = self.next_id();
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let action = match api.fetch_currencies().await {
                Ok(codes) => Action::CurrenciesLoaded { task_id, codes },
                Err(e) => Action::CurrenciesFailed {
                    task_id,
                    error: e.to_string(),
                },
            };
            let _ = action_sender.send(action);
        });

        self.track(task_id, handle, "Load currencies".to_string());
        task_id
    }

    /// Spawn a conversion request. Overlapping requests are neither
    /// serialized nor cancelled.
    pub fn spawn_conversion(&mut self, api: Arc<dyn RatesApi>, request: ConversionRequest) -> TaskId {
        let task_id = self.next_id();
        let action_sender = self.action_sender.clone();
        let description = format!("Convert {} {} to {}", request.amount, request.from, request.to);

        let handle = tokio::spawn(async move {
            let action = match api.convert(&request).await {
                Ok(result) => Action::ConversionCompleted { task_id, result },
                Err(e) => Action::ConversionFailed {
                    task_id,
                    error: e.to_string(),
                },
            };
            let _ = action_sender.send(action);
        });

        self.track(task_id, handle, description);
        task_id
    }

    fn next_id(&mut self) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;
        task_id
    }

    fn track(&mut self, id: TaskId, handle: JoinHandle<()>, description: String) {
        let task = BackgroundTask {
            id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };
        self.tasks.insert(id, task);
    }

    /// Remove finished tasks, returning their ids and descriptions
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        finished
            .into_iter()
            .filter_map(|id| self.tasks.remove(&id).map(|task| (id, task.description)))
            .collect()
    }

    /// Wait for every in-flight task to finish
    pub async fn join_all(&mut self) {
        let tasks: Vec<BackgroundTask> = self.tasks.drain().map(|(_, task)| task).collect();
        for task in tasks {
            if let Err(e) = task.handle.await {
                log::warn!("Background task {} ({}) ended abnormally: {}", task.id, task.description, e);
            }
        }
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Descriptions and ages of the tasks still running
    pub fn running_tasks(&self) -> Vec<(TaskId, String, std::time::Duration)> {
        let mut running: Vec<_> = self
            .tasks
            .values()
            .map(|task| (task.id, task.description.clone(), task.started_at.elapsed()))
            .collect();
        running.sort_by_key(|(id, _, _)| *id);
        running
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
