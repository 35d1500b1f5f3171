use dockerize_core::{BuildCommand, EnvEntry, ResolvedVersion};

/// Line separator for generated Dockerfiles, independent of the host OS.
pub const LINE_SEPARATOR: &str = "\n";

/// Directory under which the project is copied, namespaced by package name.
const INSTALL_ROOT: &str = "/usr/local";

/// Renders a single-stage Node.js Dockerfile.
pub struct DockerfileGenerator<'a> {
    base_image: &'a str,
    version: &'a ResolvedVersion,
    env: &'a [EnvEntry],
    project_name: &'a str,
    command: &'a BuildCommand,
}

impl<'a> DockerfileGenerator<'a> {
    pub fn new(
        base_image: &'a str,
        version: &'a ResolvedVersion,
        env: &'a [EnvEntry],
        project_name: &'a str,
        command: &'a BuildCommand,
    ) -> Self {
        Self {
            base_image,
            version,
            env,
            project_name,
            command,
        }
    }

    /// Instructions in their fixed order: FROM, ENV*, COPY, WORKDIR, RUN, CMD.
    pub fn lines(&self) -> Vec<String> {
        let app_dir = format!("{INSTALL_ROOT}/{}", self.project_name);

        let mut lines = Vec::with_capacity(self.env.len() + 5);
        lines.push(format!("FROM {}:{}", self.base_image, self.version));
        lines.extend(
            self.env
                .iter()
                .map(|entry| format!("ENV {} {}", entry.key, entry.value)),
        );
        lines.push(format!("COPY . {app_dir}"));
        lines.push(format!("WORKDIR {app_dir}"));
        lines.push("RUN npm install".to_owned());
        lines.push(format!("CMD {}", exec_form(&self.command.argv())));
        lines
    }

    pub fn render(&self) -> String {
        self.lines()
            .into_iter()
            .map(|line| line + LINE_SEPARATOR)
            .collect()
    }
}

/// `["npm", "start"]`: a JSON array, each element escaped as a JSON string.
fn exec_form(argv: &[&str]) -> String {
    let quoted: Vec<String> = argv
        .iter()
        .map(|arg| serde_json::Value::from(*arg).to_string())
        .collect();
    format!("[{}]", quoted.join(", "))
}
