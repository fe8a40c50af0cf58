use std::{fs::File, io::Write, path::Path};

use eyre::{eyre, Context, Result};
use log::info;

pub fn write_cover(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path)
        .wrap_err_with(|| eyre!("Cannot create cover file {}", path.display()))?;

    file.write_all(bytes)
        .wrap_err_with(|| eyre!("Cannot write cover image to {}", path.display()))?;

    info!("Cover image written to {}", path.display());
    Ok(())
}
