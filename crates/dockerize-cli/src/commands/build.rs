use dockerize_build::docker::{self, DockerClient};
use std::path::Path;

/// Generate and write the Dockerfile, then build the image.
///
/// docker is only invoked once the Dockerfile has been written. The default
/// tag comes from the same package.json load that produced the Dockerfile.
pub async fn build(project_dir: &Path, tag: Option<&str>) -> anyhow::Result<()> {
    let (path, generated) = super::write_generated(project_dir).await?;
    println!("Created {}", path.display());
    print!("{}", generated.content);

    let tag = match tag {
        Some(t) => t.to_owned(),
        None => docker::image_tag(&generated.project_name),
    };

    println!("Building image {tag}...");
    DockerClient::new().build_image(project_dir, &tag).await?;

    println!();
    println!("Built: {tag}");
    Ok(())
}
