use tokio::process::Command;

use crate::error::{AppError, AppResult};

use super::LaunchPlan;

pub trait Launcher {
    fn launch(&self, plan: &LaunchPlan) -> impl Future<Output = AppResult<()>> + Send;
}

/// Runs the browser and waits for it to exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, plan: &LaunchPlan) -> impl Future<Output = AppResult<()>> + Send {
        let program = plan.program.clone();
        let mut command = Command::new(&program);
        command.args(plan.args());
        tracing::info!(program = %program, args = ?plan.args(), "launching browser");

        async move {
            let status = command
                .status()
                .await
                .map_err(|err| AppError::Launch(format!("{program}: {err}")))?;

            if !status.success() {
                return Err(AppError::Launch(format!("{program} exited with {status}")));
            }

            Ok(())
        }
    }
}
