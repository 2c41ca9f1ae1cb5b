pub mod deployment_task;
pub mod software;

#[rustfmt::skip]
pub use {
    deployment_task::{DeploymentTask, TaskAction, TaskStatus},
    software::Software,
};
