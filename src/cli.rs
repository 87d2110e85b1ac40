//! Command line surface of the `rail_finder` binary.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rail_finder::image_pipeline::{OutOfBoundsPolicy, RailFinderConfig, Result, RunRequest};

/// Long options that may also be spelled with a single leading dash.
const LONG_FLAGS: &[&str] = &["output_file", "line_width", "out_of_bounds", "timings"];

#[derive(Parser, Debug)]
#[command(name = "rail_finder")]
#[command(
    about = "Find the centerline of railroad tracks in an image and save a copy with the centerline drawn in red"
)]
#[command(version)]
pub struct Cli {
    /// Path to the input image.
    pub input_file: PathBuf,

    /// Where to write the annotated image (default: <input>_wLine.<ext>).
    #[arg(long = "output_file", alias = "output-file", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Half-width in pixels of the drawn centerline; the band is 2*N+1 pixels wide.
    #[arg(long = "line_width", alias = "line-width", value_name = "N", default_value_t = 2)]
    pub line_width: usize,

    /// What to do when the centerline band leaves the image on some rows.
    #[arg(long = "out_of_bounds", alias = "out-of-bounds", value_enum, default_value_t = BoundsArg::Clip)]
    pub out_of_bounds: BoundsArg,

    /// Print a per-stage timing summary after a successful run.
    #[arg(long)]
    pub timings: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoundsArg {
    /// Draw only the part of the band inside the image.
    Clip,
    /// Fail without writing any output.
    Error,
}

impl From<BoundsArg> for OutOfBoundsPolicy {
    fn from(arg: BoundsArg) -> Self {
        match arg {
            BoundsArg::Clip => OutOfBoundsPolicy::Clip,
            BoundsArg::Error => OutOfBoundsPolicy::Error,
        }
    }
}

impl Cli {
    pub fn into_request(self) -> Result<RunRequest> {
        let config = RailFinderConfig::builder()
            .line_width(self.line_width)
            .out_of_bounds(self.out_of_bounds.into())
            .build();
        RunRequest::new(self.input_file, self.output_file, config)
    }
}

/// Rewrites `-output_file x` style flags to `--output_file x` so both the
/// single- and double-dash spellings parse. Arguments after `--` are left alone.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        if passthrough {
            out.push(arg);
            continue;
        }
        match arg.to_str() {
            Some("--") => {
                passthrough = true;
                out.push(arg);
            }
            Some(s) if is_single_dash_long_flag(s) => out.push(format!("-{s}").into()),
            _ => out.push(arg),
        }
    }
    out
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rail_finder::image_pipeline::RailFinderError;
    use std::path::Path;

    fn parse(args: &[&str]) -> Cli {
        let args = args.iter().map(OsString::from);
        Cli::try_parse_from(normalize_legacy_flags(args)).unwrap()
    }

    #[test]
    fn single_dash_flags_are_accepted() {
        let cli = parse(&["rail_finder", "track.png", "-output_file", "out.png", "-line_width", "5"]);
        assert_eq!(cli.input_file, PathBuf::from("track.png"));
        assert_eq!(cli.output_file, Some(PathBuf::from("out.png")));
        assert_eq!(cli.line_width, 5);
    }

    #[test]
    fn double_dash_and_equals_forms_are_accepted() {
        let cli = parse(&["rail_finder", "--line_width=3", "-out_of_bounds=error", "track.png"]);
        assert_eq!(cli.line_width, 3);
        assert_eq!(cli.out_of_bounds, BoundsArg::Error);
        assert_eq!(cli.output_file, None);
    }

    #[test]
    fn defaults_match_reference_tool() {
        let cli = parse(&["rail_finder", "track.jpg"]);
        assert_eq!(cli.line_width, 2);
        assert_eq!(cli.out_of_bounds, BoundsArg::Clip);
        assert!(!cli.timings);

        let request = cli.into_request().unwrap();
        assert_eq!(request.config.line_width, 2);
        assert_eq!(request.resolved_output_path(), Path::new("track_wLine.jpg"));
    }

    #[test]
    fn negative_line_width_is_rejected() {
        let args = ["rail_finder", "track.png", "-line_width", "-1"].map(OsString::from);
        assert!(Cli::try_parse_from(normalize_legacy_flags(args)).is_err());
    }

    #[test]
    fn line_width_beyond_pixel_range_is_rejected() {
        let cli = parse(&["rail_finder", "track.png", "-line_width", "18446744073709551615"]);
        assert!(matches!(
            cli.into_request(),
            Err(RailFinderError::InvalidConfig(_))
        ));
    }

    #[test]
    fn missing_input_is_rejected() {
        let args = ["rail_finder", "-line_width", "2"].map(OsString::from);
        assert!(Cli::try_parse_from(normalize_legacy_flags(args)).is_err());
    }

    #[test]
    fn arguments_after_separator_are_untouched() {
        let args = ["rail_finder", "--", "-line_width"].map(OsString::from);
        let normalized = normalize_legacy_flags(args);
        assert_eq!(normalized[2], OsString::from("-line_width"));
    }

    #[test]
    fn unknown_single_dash_words_are_not_rewritten() {
        assert!(!is_single_dash_long_flag("-x"));
        assert!(!is_single_dash_long_flag("--line_width"));
        assert!(!is_single_dash_long_flag("plain.png"));
        assert!(is_single_dash_long_flag("-timings"));
    }
}
