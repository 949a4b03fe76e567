//! Frame writers
//!
//! Render adapters that turn replayed frames into text: one JSON object per
//! line, or a fixed-width table. Write errors are held until `finish` since
//! `RenderAdapter::apply` cannot fail.

use anyhow::Result;
use clap::ValueEnum;
use std::io::{self, Write};
use tracing::info;
use vantage_animation::ScrollLatches;
use vantage_scene::{FrameState, NavBarState, RenderAdapter};

/// Output format for `vantage simulate`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One JSON object per frame
    #[default]
    Json,
    /// Aligned columns with the main values
    Table,
}

/// Writes each frame as a JSON line
pub struct JsonLines<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> JsonLines<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }
}

impl<W: Write> RenderAdapter for JsonLines<W> {
    fn apply(&mut self, frame: &FrameState) {
        if self.error.is_some() {
            return;
        }
        let result = serde_json::to_writer(&mut self.out, frame)
            .map_err(io::Error::from)
            .and_then(|_| self.out.write_all(b"\n"));
        if let Err(err) = result {
            self.error = Some(err);
        }
    }
}

/// Writes a header and one row per frame
pub struct Table<W: Write> {
    out: W,
    header_written: bool,
    error: Option<io::Error>,
}

impl<W: Write> Table<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
            error: None,
        }
    }

    fn write_row(&mut self, frame: &FrameState) -> io::Result<()> {
        if !self.header_written {
            writeln!(
                self.out,
                "{:>6} {:>8} {:>7} {:>7} {:>7} {:>22} {:>7} {:>6} {:>5} {:>5}",
                "frame", "scroll", "raw", "smooth", "max", "camera", "depth", "clip", "text", "logo"
            )?;
            self.header_written = true;
        }

        let camera = frame.camera.position;
        let clip = frame
            .model
            .clip_time
            .map(|t| format!("{:.2}", t))
            .unwrap_or_else(|| "-".to_string());
        let text = frame.ui.text.iter().map(|item| item.opacity).sum::<f32>()
            / frame.ui.text.len().max(1) as f32;

        writeln!(
            self.out,
            "{:>6} {:>8.1} {:>7.4} {:>7.4} {:>7.4} {:>22} {:>7.3} {:>6} {:>5.2} {:>5.2}",
            frame.frame,
            frame.progress.scroll_y,
            frame.progress.raw,
            frame.progress.smoothed,
            frame.progress.max_reached,
            format!("({:.2}, {:.2}, {:.2})", camera.x, camera.y, camera.z),
            frame.model.position.z,
            clip,
            text,
            frame.ui.logo.opacity,
        )
    }
}

impl<W: Write> RenderAdapter for Table<W> {
    fn apply(&mut self, frame: &FrameState) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_row(frame) {
            self.error = Some(err);
        }
    }
}

/// Common ending for the text writers
pub trait Finish {
    fn finish(self: Box<Self>) -> Result<()>;
}

impl<W: Write> Finish for JsonLines<W> {
    fn finish(mut self: Box<Self>) -> Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err.into());
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Finish for Table<W> {
    fn finish(mut self: Box<Self>) -> Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err.into());
        }
        self.out.flush()?;
        Ok(())
    }
}

/// A frame writer chosen at runtime
pub trait FrameWriter: RenderAdapter + Finish {}

impl<T: RenderAdapter + Finish> FrameWriter for T {}

pub fn writer<W: Write + 'static>(format: Format, out: W) -> Box<dyn FrameWriter> {
    match format {
        Format::Json => Box::new(JsonLines::new(out)),
        Format::Table => Box::new(Table::new(out)),
    }
}

/// Logs latch and navbar transitions before forwarding each frame
pub struct Transitions<'a, A: RenderAdapter + ?Sized> {
    inner: &'a mut A,
    latches: Option<ScrollLatches>,
    nav: Option<NavBarState>,
}

impl<'a, A: RenderAdapter + ?Sized> Transitions<'a, A> {
    pub fn new(inner: &'a mut A) -> Self {
        Self {
            inner,
            latches: None,
            nav: None,
        }
    }
}

impl<A: RenderAdapter + ?Sized> RenderAdapter for Transitions<'_, A> {
    fn apply(&mut self, frame: &FrameState) {
        let latches = frame.ui.latches;
        if self.latches.is_some_and(|prev| prev != latches) {
            info!(
                frame = frame.frame,
                reveal = latches.reveal,
                overlay = latches.show_overlay,
                section = latches.section_reveal,
                "latches changed"
            );
        }
        self.latches = Some(latches);

        let nav = frame.hero.nav;
        if self.nav.is_some_and(|prev| prev != nav) {
            info!(frame = frame.frame, logo = nav.logo_visible, "navbar changed");
        }
        self.nav = Some(nav);

        self.inner.apply(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_animation::SectionBounds;
    use vantage_scene::{PageLayout, SceneAnimator, SceneConfig, Viewport};

    fn frames(count: usize) -> Vec<FrameState> {
        let layout = PageLayout {
            document_height: 6000.0,
            hero_height: 900.0,
            section: SectionBounds::new(900.0, 3000.0),
        };
        let mut scene = SceneAnimator::mount(
            SceneConfig::default(),
            layout,
            Viewport::new(1280.0, 800.0),
            None,
        )
        .unwrap();
        scene.on_scroll(2000.0);

        let mut out = Vec::new();
        for _ in 0..count {
            scene.frame_into(1.0 / 60.0, &mut out);
        }
        out
    }

    #[test]
    fn test_json_lines() {
        let mut buffer = Vec::new();
        let mut writer = JsonLines::new(&mut buffer);
        for frame in frames(3) {
            writer.apply(&frame);
        }
        Box::new(writer).finish().unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["frame"], 0);
        assert!(first["camera"]["position"].is_object());
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let mut buffer = Vec::new();
        let mut writer = Table::new(&mut buffer);
        for frame in frames(2) {
            writer.apply(&frame);
        }
        Box::new(writer).finish().unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("smooth"));
        assert!(lines[1].trim_start().starts_with('0'));
        assert!(lines[1].ends_with("0.00"));
    }

    #[test]
    fn test_transitions_forward_every_frame() {
        let mut collected: Vec<FrameState> = Vec::new();
        {
            let mut logged = Transitions::new(&mut collected);
            for frame in frames(4) {
                logged.apply(&frame);
            }
        }
        assert_eq!(collected.len(), 4);
    }
}
