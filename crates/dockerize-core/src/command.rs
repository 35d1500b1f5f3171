use crate::ProjectDescriptor;

/// Container startup command derived from package.json.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildCommand {
    /// Delegate to the `start` script: `npm start`
    NpmStart,
    /// Run the entrypoint directly: `node <entrypoint>`
    Node { entrypoint: String },
}

impl BuildCommand {
    /// Select the startup command for a project.
    ///
    /// Priority:
    /// 1. `scripts.start` (even when `main` is also set)
    /// 2. `main`
    /// 3. None: the caller must report that no command can be determined
    pub fn resolve(descriptor: &ProjectDescriptor) -> Option<Self> {
        let command = if descriptor.start_script.is_some() {
            Some(Self::NpmStart)
        } else {
            descriptor
                .entrypoint
                .as_ref()
                .map(|entrypoint| Self::Node {
                    entrypoint: entrypoint.clone(),
                })
        };

        tracing::debug!(command = ?command, "startup command resolved");
        command
    }

    /// Program and arguments, in exec form.
    pub fn argv(&self) -> Vec<&str> {
        match self {
            Self::NpmStart => vec!["npm", "start"],
            Self::Node { entrypoint } => vec!["node", entrypoint.as_str()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(start: Option<&str>, main: Option<&str>) -> ProjectDescriptor {
        ProjectDescriptor {
            name: "app".to_owned(),
            entrypoint: main.map(str::to_owned),
            start_script: start.map(str::to_owned),
            runtime_constraint: None,
        }
    }

    #[test]
    fn start_script_takes_priority_over_main() {
        let d = descriptor(Some("node server.js"), Some("index.js"));
        assert_eq!(BuildCommand::resolve(&d), Some(BuildCommand::NpmStart));
    }

    #[test]
    fn main_only_runs_node_directly() {
        let d = descriptor(None, Some("index.js"));
        assert_eq!(
            BuildCommand::resolve(&d),
            Some(BuildCommand::Node {
                entrypoint: "index.js".to_owned()
            })
        );
    }

    #[test]
    fn neither_yields_none() {
        assert_eq!(BuildCommand::resolve(&descriptor(None, None)), None);
    }

    #[test]
    fn argv_shapes() {
        assert_eq!(BuildCommand::NpmStart.argv(), ["npm", "start"]);
        let direct = BuildCommand::Node {
            entrypoint: "dist/main.js".to_owned(),
        };
        assert_eq!(direct.argv(), ["node", "dist/main.js"]);
    }
}
