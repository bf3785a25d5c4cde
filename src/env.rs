//! Jenkins environment variables
//!
//! Names of the variables injected by the Jenkins job runner, and the
//! lookup seam the report reads them through.

use std::collections::BTreeMap;

/// Name of the job (e.g. "deploy-prod" or "folder/job")
pub const JOB_NAME: &str = "JOB_NAME";

/// Sequential number of the current build
pub const BUILD_NUMBER: &str = "BUILD_NUMBER";

/// Identifier of the current build (same as the number on modern Jenkins)
pub const BUILD_ID: &str = "BUILD_ID";

/// Absolute path of the build workspace on the agent
pub const WORKSPACE: &str = "WORKSPACE";

/// Root URL of the Jenkins controller
pub const JENKINS_URL: &str = "JENKINS_URL";

/// URL of the current build
pub const BUILD_URL: &str = "BUILD_URL";

/// User who triggered the build (build-user-vars plugin)
pub const BUILD_USER: &str = "BUILD_USER";

/// Commit hash checked out by the Git plugin
pub const GIT_COMMIT: &str = "GIT_COMMIT";

/// Remote branch checked out by the Git plugin
pub const GIT_BRANCH: &str = "GIT_BRANCH";

/// Name of the agent running the build
pub const NODE_NAME: &str = "NODE_NAME";

/// Build start time (build-timestamp plugin)
pub const BUILD_TIMESTAMP: &str = "BUILD_TIMESTAMP";

/// Executor slot number on the agent
pub const EXECUTOR_NUMBER: &str = "EXECUTOR_NUMBER";

/// Display name of the build (defaults to "#<number>")
pub const BUILD_DISPLAY_NAME: &str = "BUILD_DISPLAY_NAME";

/// Placeholder for an unset variable
pub const NOT_SET: &str = "Not Set";

/// Placeholder for an unset `BUILD_DISPLAY_NAME`
pub const UNKNOWN: &str = "Unknown";

/// Read-only source of environment variables
pub trait EnvSource {
    /// Value of `name`, or `None` if it is not set.
    fn var(&self, name: &str) -> Option<String>;

    /// Value of `name`, or `default` if it is not set.
    ///
    /// An empty value counts as set.
    fn var_or(&self, name: &str, default: &str) -> String {
        self.var(name).unwrap_or_else(|| {
            log::debug!("{name} is not set, using '{default}'");
            default.to_string()
        })
    }
}

/// The environment of the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // Non-UTF-8 values are still "set"; render them lossily.
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
