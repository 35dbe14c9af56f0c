use serde::Serialize;

/// Browser invocation: program, switches, then urls.
///
/// Switch reference: <https://peter.sh/experiments/chromium-command-line-switches/>
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct LaunchPlan {
    pub program: String,
    pub switches: Vec<String>,
    pub urls: Vec<String>,
}

impl LaunchPlan {
    pub fn new(
        program: impl Into<String>,
        profile_key: &str,
        incognito: bool,
        urls: Vec<String>,
    ) -> Self {
        let mut switches = vec![
            format!("--profile-directory={profile_key}"),
            "--new-window".to_string(),
        ];
        if incognito {
            switches.push("--incognito".to_string());
        }

        Self {
            program: program.into(),
            switches,
            urls,
        }
    }

    /// Arguments passed to the program, switches first.
    pub fn args(&self) -> Vec<&str> {
        self.switches
            .iter()
            .chain(&self.urls)
            .map(String::as_str)
            .collect()
    }

    /// Program and switches, as echoed before launching.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.switches.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
