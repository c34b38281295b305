use std::path::Path;

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::generator::descriptor::ClassDescriptor;

/// Memory-mapped descriptor file, parsed on demand.
pub struct DescriptorLoader {
  file: AsyncMmapFile,
}

impl DescriptorLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("cannot open descriptor file {}", path.display()))?;

    Ok(Self { file })
  }

  pub fn parse(&self) -> anyhow::Result<ClassDescriptor> {
    serde_json::from_slice::<ClassDescriptor>(self.file.as_slice()).context("malformed class descriptor")
  }
}
