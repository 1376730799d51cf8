use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::presenters::file::png::PngFilePresenter;
use crate::presenters::file::ppm::PpmFilePresenter;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedImageFormatError {
    pub path: PathBuf,
}

impl fmt::Display for UnsupportedImageFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot save '{}': expected a .png or .ppm file name",
            self.path.display()
        )
    }
}

impl Error for UnsupportedImageFormatError {}

/// Picks the image writer from the file extension, case-insensitively.
pub fn file_presenter_for_path(
    path: &Path,
) -> Result<Box<dyn FilePresenterPort>, UnsupportedImageFormatError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => Ok(Box::new(PngFilePresenter::new())),
        Some("ppm") => Ok(Box::new(PpmFilePresenter::new())),
        _ => Err(UnsupportedImageFormatError {
            path: path.to_path_buf(),
        }),
    }
}
