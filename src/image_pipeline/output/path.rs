use std::ffi::OsString;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::image_pipeline::common::error::{Result, RailFinderError};

/// Inserted between the input file's stem and its extension.
pub const OUTPUT_SUFFIX: &str = "_wLine";

/// `dir/name.ext` becomes `dir/name_wLine.ext`; extensionless names just gain the suffix.
pub fn default_output_path(input: &Path) -> PathBuf {
    let Some(stem) = input.file_stem() else {
        let mut name = input.as_os_str().to_owned();
        name.push(OUTPUT_SUFFIX);
        return PathBuf::from(name);
    };

    let mut name = OsString::from(stem);
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Picks the encoder from the path's extension.
pub fn format_for_path(path: &Path) -> Result<ImageFormat> {
    let format = ImageFormat::from_path(path).map_err(|e| {
        RailFinderError::OutputError(format!("{}: {}", path.display(), e))
    })?;
    if !format.writing_enabled() {
        return Err(RailFinderError::OutputError(format!(
            "{}: writing {:?} images is not supported",
            path.display(),
            format
        )));
    }
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_goes_before_extension() {
        assert_eq!(
            default_output_path(Path::new("shots/track.png")),
            PathBuf::from("shots/track_wLine.png")
        );
        assert_eq!(
            default_output_path(Path::new("rails.v2.jpg")),
            PathBuf::from("rails.v2_wLine.jpg")
        );
    }

    #[test]
    fn extensionless_input_just_gains_suffix() {
        assert_eq!(
            default_output_path(Path::new("/data/frame")),
            PathBuf::from("/data/frame_wLine")
        );
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(format_for_path(Path::new("a.png")).unwrap(), ImageFormat::Png);
        assert_eq!(format_for_path(Path::new("a.JPG")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(format_for_path(Path::new("a.tif")).unwrap(), ImageFormat::Tiff);
    }

    #[test]
    fn unknown_extension_is_an_output_error() {
        assert!(matches!(
            format_for_path(Path::new("a.notanimage")),
            Err(RailFinderError::OutputError(_))
        ));
        assert!(matches!(
            format_for_path(Path::new("no_extension")),
            Err(RailFinderError::OutputError(_))
        ));
    }
}
