use std::path::Path;

/// Generate the Dockerfile and write it (or print it with `--stdout`).
pub async fn generate(project_dir: &Path, stdout: bool) -> anyhow::Result<()> {
    if stdout {
        let generated = super::render(project_dir).await?;
        print!("{}", generated.content);
        return Ok(());
    }

    let (path, generated) = super::write_generated(project_dir).await?;

    println!("Created {}", path.display());
    print!("{}", generated.content);
    Ok(())
}
