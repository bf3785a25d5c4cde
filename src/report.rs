//! The build report
//!
//! Fixed section layout and the sequence that prints it. Every variable is
//! read at the point it is printed; an unset variable prints its placeholder.

use std::io::Write;

use anyhow::Result;

use crate::cli::Reporter;
use crate::env::{self, EnvSource, NOT_SET, UNKNOWN};

/// One `label: value` line backed by an environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Label printed before the value
    pub label: &'static str,
    /// Environment variable holding the value
    pub var: &'static str,
}

/// A titled group of fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Title printed on the `>>>` line
    pub title: &'static str,
    /// Fields, in print order
    pub fields: &'static [Field],
}

const fn field(label: &'static str, var: &'static str) -> Field {
    Field { label, var }
}

/// Welcome header text
pub const WELCOME: &str = "Hi, Welcome to Jenkins!";

/// Success line printed after the sections
pub const SUCCESS_MESSAGE: &str = "Build script executed successfully!";

/// Label of the info line showing `BUILD_DISPLAY_NAME`
pub const BUILD_DATE_LABEL: &str = "Build Date";

/// Last line of the report
pub const CLOSING_BANNER: &str = "Jenkins Freestyle Job Execution Complete!";

/// The report sections, in print order
pub const SECTIONS: [Section; 3] = [
    Section {
        title: "Jenkins Build Information",
        fields: &[
            field("Job Name", env::JOB_NAME),
            field("Build Number", env::BUILD_NUMBER),
            field("Build ID", env::BUILD_ID),
            field("Workspace", env::WORKSPACE),
            field("Jenkins URL", env::JENKINS_URL),
            field("Build URL", env::BUILD_URL),
        ],
    },
    Section {
        title: "Build Configuration",
        fields: &[
            field("Build User", env::BUILD_USER),
            field("Git Commit", env::GIT_COMMIT),
            field("Git Branch", env::GIT_BRANCH),
            field("Node Name", env::NODE_NAME),
        ],
    },
    Section {
        title: "Build Execution Details",
        fields: &[
            field("Build Timestamp", env::BUILD_TIMESTAMP),
            field("Executor Number", env::EXECUTOR_NUMBER),
        ],
    },
];

/// Print the full report for `env` through `reporter`.
pub fn run<W, E>(reporter: &mut Reporter<W>, env: &E) -> Result<()>
where
    W: Write,
    E: EnvSource + ?Sized,
{
    reporter.print_header(WELCOME)?;

    for section in &SECTIONS {
        log::debug!("rendering section '{}'", section.title);
        reporter.print_section(section.title)?;
        for field in section.fields {
            reporter.print_variable(field.label, &env.var_or(field.var, NOT_SET))?;
        }
        reporter.blank_line()?;
    }

    reporter.print_success(SUCCESS_MESSAGE)?;
    let display_name = env.var_or(env::BUILD_DISPLAY_NAME, UNKNOWN);
    reporter.print_info(&format!("{BUILD_DATE_LABEL}: {display_name}"))?;

    reporter.blank_line()?;
    reporter.print_banner(CLOSING_BANNER)?;
    reporter.blank_line()
}

/// Render the report for `env` into a byte buffer.
pub fn render<E: EnvSource + ?Sized>(env: &E, colorize: bool) -> Result<Vec<u8>> {
    let mut reporter = Reporter::new(Vec::new(), colorize);
    run(&mut reporter, env)?;
    reporter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::env_of;
    use console::strip_ansi_codes;

    fn plain_report(pairs: &[(&str, &str)]) -> String {
        String::from_utf8(render(&env_of(pairs), false).unwrap()).unwrap()
    }

    const EXPECTED_SECTIONS: &str = "\
>>> Jenkins Build Information
Job Name: Not Set
Build Number: Not Set
Build ID: Not Set
Workspace: Not Set
Jenkins URL: Not Set
Build URL: Not Set

>>> Build Configuration
Build User: Not Set
Git Commit: Not Set
Git Branch: Not Set
Node Name: Not Set

>>> Build Execution Details
Build Timestamp: Not Set
Executor Number: Not Set

✓ Build script executed successfully!
Build Date: Unknown

Jenkins Freestyle Job Execution Complete!

";

    fn expected_empty() -> String {
        let rule = "=".repeat(60);
        // 23 chars centered in 60
        let title = format!("{}{WELCOME}{}", " ".repeat(18), " ".repeat(19));
        format!("{rule}\n{title}\n{rule}\n\n{EXPECTED_SECTIONS}")
    }

    #[test]
    fn test_empty_environment_full_output() {
        assert_eq!(plain_report(&[]), expected_empty());
    }

    #[test]
    fn test_sections_cover_twelve_distinct_variables() {
        let fields: Vec<Field> = SECTIONS.iter().flat_map(|s| s.fields.iter().copied()).collect();
        assert_eq!(fields.len(), 12);

        let mut vars: Vec<&str> = fields.iter().map(|f| f.var).collect();
        vars.sort_unstable();
        vars.dedup();
        assert_eq!(vars.len(), 12);
        assert!(!vars.contains(&env::BUILD_DISPLAY_NAME));
    }

    #[test]
    fn test_each_unset_variable_printed_once() {
        let out = plain_report(&[]);
        for field in SECTIONS.iter().flat_map(|s| s.fields) {
            let line = format!("{}: Not Set", field.label);
            assert_eq!(out.matches(&line).count(), 1, "{line}");
        }
        assert_eq!(out.matches("Build Date: Unknown").count(), 1);
    }

    #[test]
    fn test_set_values_printed_verbatim() {
        let out = plain_report(&[
            (env::GIT_COMMIT, "0123abcd"),
            (env::WORKSPACE, ""),
            (env::NODE_NAME, "\x1b[31magent-7"),
            (env::BUILD_DISPLAY_NAME, "#42"),
        ]);
        assert!(out.contains("Git Commit: 0123abcd\n"));
        assert!(out.contains("Workspace: \n"));
        assert!(out.contains("Node Name: \x1b[31magent-7\n"));
        assert!(out.contains("Build Date: #42\n"));
        assert!(!out.contains("Build Date: Unknown"));
    }

    #[test]
    fn test_deploy_prod_scenario_order() {
        let out = plain_report(&[(env::JOB_NAME, "deploy-prod"), (env::BUILD_NUMBER, "42")]);
        let job = out.find("Job Name: deploy-prod").unwrap();
        let number = out.find("Build Number: 42").unwrap();
        let workspace = out.find("Workspace: Not Set").unwrap();
        assert!(job < number && number < workspace);
    }

    #[test]
    fn test_section_order_is_fixed() {
        let out = plain_report(&[(env::EXECUTOR_NUMBER, "Job Name: fake")]);
        let positions: Vec<usize> = [
            ">>> Jenkins Build Information",
            "Build URL:",
            ">>> Build Configuration",
            "Node Name:",
            ">>> Build Execution Details",
            "Executor Number:",
            "✓ Build script executed successfully!",
            "Build Date:",
            CLOSING_BANNER,
        ]
        .iter()
        .map(|needle| out.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_banners_printed_once() {
        let out = plain_report(&[(env::JOB_NAME, "x")]);
        assert_eq!(out.matches(CLOSING_BANNER).count(), 1);
        assert_eq!(out.matches("✓ Build script executed successfully!").count(), 1);
    }

    #[test]
    fn test_render_is_deterministic() {
        let env = env_of(&[(env::BUILD_ID, "17"), (env::GIT_BRANCH, "origin/main")]);
        assert_eq!(render(&env, false).unwrap(), render(&env, false).unwrap());
        assert_eq!(render(&env, true).unwrap(), render(&env, true).unwrap());
    }

    #[test]
    fn test_colored_report_strips_to_plain() {
        let colored = String::from_utf8(render(&env_of(&[]), true).unwrap()).unwrap();
        assert!(colored.contains('\x1b'));
        assert_eq!(strip_ansi_codes(&colored), expected_empty());
    }

    #[test]
    fn test_colored_report_keeps_values_verbatim() {
        let raw = "a\x1b[0mb";
        let env = env_of(&[(env::JOB_NAME, raw), (env::BUILD_DISPLAY_NAME, raw)]);
        let out = String::from_utf8(render(&env, true).unwrap()).unwrap();
        assert!(out.contains(&format!("\x1b[94mJob Name:\x1b[0m \x1b[92m{raw}\x1b[0m\n")));
        assert!(out.contains(&format!("\x1b[93mBuild Date: {raw}\x1b[0m\n")));
    }
}
