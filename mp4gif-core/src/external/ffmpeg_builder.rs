//! FFmpeg argument construction
//!
//! Maps a [`ConversionJob`] onto the ordered argument vector handed to ffmpeg.
//! ffmpeg is position sensitive: options placed before `-i` apply to the input
//! (`-ss` seeks the input), options after it apply to the output.

use crate::config::{ConversionJob, LOOP_FOREVER, SCALE_FLAGS};

/// Builder for constructing video filter chains
#[derive(Debug, Default)]
pub struct VideoFilterChain {
    filters: Vec<String>,
}

impl VideoFilterChain {
    /// Creates a new empty filter chain
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an `fps` resampling filter
    #[must_use]
    pub fn add_fps(self, fps: f64) -> Self {
        self.add_filter(format!("fps={}", format_number(fps)))
    }

    /// Adds a width-only scale filter; `-1` keeps the aspect ratio
    #[must_use]
    pub fn add_scale_width(self, width: f64) -> Self {
        self.add_filter(format!(
            "scale={}:-1:flags={SCALE_FLAGS}",
            format_number(width)
        ))
    }

    /// Adds a custom filter to the chain
    #[must_use]
    pub fn add_filter(mut self, filter: String) -> Self {
        if !filter.is_empty() {
            self.filters.push(filter);
        }
        self
    }

    /// Builds the filter chain into a single filter string
    #[must_use]
    pub fn build(self) -> Option<String> {
        if self.filters.is_empty() {
            None
        } else {
            Some(self.filters.join(","))
        }
    }
}

/// Renders a number the way it was typed for integral and simple decimal values
/// (`5`, `2.5`), never as `5.0`.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Avoids "-0"
        return "0".to_string();
    }
    value.to_string()
}

/// Builds the ffmpeg argument vector for a conversion.
///
/// Order: `-y`, `-ss <start>`, `-i <input>`, `-t <duration>`, `-vf <filters>`,
/// `-loop 0 <output>`. Optional entries are omitted entirely when unset.
#[must_use]
pub fn build_gif_args(job: &ConversionJob) -> Vec<String> {
    let options = &job.options;
    let mut args: Vec<String> = Vec::new();

    if options.overwrite {
        args.push("-y".to_string());
    }

    if let Some(start) = options.start {
        args.push("-ss".to_string());
        args.push(format_number(start));
    }

    args.push("-i".to_string());
    args.push(job.input_path.to_string_lossy().into_owned());

    if let Some(duration) = options.duration {
        args.push("-t".to_string());
        args.push(format_number(duration));
    }

    let mut chain = VideoFilterChain::new().add_fps(options.fps);
    if let Some(width) = options.width {
        chain = chain.add_scale_width(width);
    }
    if let Some(filters) = chain.build() {
        args.push("-vf".to_string());
        args.push(filters);
    }

    args.push("-loop".to_string());
    args.push(LOOP_FOREVER.to_string());
    args.push(job.output_path.to_string_lossy().into_owned());

    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GifOptions, GifOptionsBuilder};
    use std::path::PathBuf;

    fn job(input: &str, output: &str, options: GifOptions) -> ConversionJob {
        ConversionJob::new(PathBuf::from(input), Some(PathBuf::from(output)), options).unwrap()
    }

    #[test]
    fn test_video_filter_chain_empty() {
        let chain = VideoFilterChain::new();
        assert_eq!(chain.build(), None);
    }

    #[test]
    fn test_video_filter_chain_fps_then_scale() {
        let chain = VideoFilterChain::new().add_fps(24.0).add_scale_width(480.0);
        assert_eq!(
            chain.build(),
            Some("fps=24,scale=480:-1:flags=lanczos".to_string())
        );
    }

    #[test]
    fn test_video_filter_chain_empty_filters_ignored() {
        let chain = VideoFilterChain::new()
            .add_filter(String::new())
            .add_fps(10.0);
        assert_eq!(chain.build(), Some("fps=10".to_string()));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.25), "0.25");
    }

    #[test]
    fn test_minimal_args() {
        let args = build_gif_args(&job("clip.mp4", "clip.gif", GifOptions::default()));
        assert_eq!(
            args,
            vec!["-i", "clip.mp4", "-vf", "fps=10", "-loop", "0", "clip.gif"]
        );
    }

    #[test]
    fn test_full_args_order() {
        let options = GifOptionsBuilder::new()
            .overwrite(true)
            .start(5.0)
            .duration(3.0)
            .fps(12.0)
            .width(320.0)
            .build();
        let args = build_gif_args(&job("in.mp4", "out.gif", options));
        assert_eq!(
            args,
            vec![
                "-y",
                "-ss",
                "5",
                "-i",
                "in.mp4",
                "-t",
                "3",
                "-vf",
                "fps=12,scale=320:-1:flags=lanczos",
                "-loop",
                "0",
                "out.gif",
            ]
        );
    }

    #[test]
    fn test_width_without_explicit_fps_keeps_default_fps() {
        let options = GifOptionsBuilder::new().width(640.0).build();
        let args = build_gif_args(&job("a.mp4", "a.gif", options));
        let vf = args.iter().position(|a| a == "-vf").unwrap();
        assert_eq!(args[vf + 1], "fps=10,scale=640:-1:flags=lanczos");
    }

    #[test]
    fn test_fractional_values_rendered_verbatim() {
        let options = GifOptionsBuilder::new().start(1.5).duration(0.75).build();
        let args = build_gif_args(&job("a.mp4", "a.gif", options));
        assert_eq!(&args[..6], &["-ss", "1.5", "-i", "a.mp4", "-t", "0.75"]);
    }

    #[test]
    fn test_build_is_repeatable() {
        let job = job(
            "clip.mp4",
            "clip.gif",
            GifOptionsBuilder::new().fps(15.0).start(2.0).build(),
        );
        assert_eq!(build_gif_args(&job), build_gif_args(&job));
    }
}
