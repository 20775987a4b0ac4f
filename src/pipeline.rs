// src/pipeline.rs

use crate::config::RuntimeConfig;
use crate::error::PipelineError;
use crate::pacer::FramePacer;
use crate::scroll::ScrollAnimator;
use log::{debug, info, warn};
use marquee_layout::{flatten, Drawable, DrawableKind, LayoutDocument};
use marquee_providers::RefreshSource;
use marquee_render::debug::draw_debug_box;
use marquee_render::{
    draw_markup, ClippedSurface, ColorCache, Display, FontLibrary, FontProvider, Surface,
    WidthCache,
};
use marquee_style::TextAlign;
use marquee_template::ProviderRegistry;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tokio::task;
use tokio::time::{interval, sleep, MissedTickBehavior};

/// Text baseline sits this many pixels above the bottom of each box.
const BASELINE_INSET: i32 = 2;

/// Frames between rate reports in the log.
const RATE_REPORT_EVERY: u64 = 300;

/// Mutable per-frame state, keyed by drawable index. Everything else in the
/// pipeline is immutable after build.
struct FrameState {
    scroll: ScrollAnimator,
    widths: WidthCache,
    colors: ColorCache,
}

impl FrameState {
    fn new(scroll_speed: f32) -> Self {
        Self {
            scroll: ScrollAnimator::new(scroll_speed),
            widths: WidthCache::new(),
            colors: ColorCache::new(),
        }
    }
}

pub struct DisplayPipeline<D: Display> {
    display: D,
    drawables: Vec<Drawable>,
    registry: Arc<ProviderRegistry>,
    fonts: FontLibrary,
    sources: Vec<Arc<dyn RefreshSource>>,
    config: RuntimeConfig,
    state: FrameState,
    back: Option<D::Frame>,
}

impl<D: Display> std::fmt::Debug for DisplayPipeline<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayPipeline").finish_non_exhaustive()
    }
}

impl<D: Display> DisplayPipeline<D> {
    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Render and swap exactly one frame, advancing animations by `dt`
    /// seconds. This is the whole synchronous frame body: placeholder
    /// resolution, then markup drawing, then scroll update, per drawable in
    /// stacking order. The run loop drives it with wall-clock deltas; tests
    /// drive it with fixed ones.
    pub fn render_once(&mut self, dt: f32) {
        let mut frame = match self.back.take() {
            Some(frame) => frame,
            None => self.display.create_frame(),
        };
        frame.clear();

        for drawable in &self.drawables {
            draw_drawable(
                &mut frame,
                drawable,
                &self.registry,
                &self.fonts,
                &mut self.state,
                dt,
            );
        }

        if self.config.debug_overlay {
            for drawable in &self.drawables {
                draw_debug_box(&mut frame, drawable.index, drawable.frame);
            }
        }

        self.back = Some(self.display.swap(frame));
    }

    /// Run the render loop at the configured frame interval, with the
    /// refresh loop scheduled independently alongside it. Returns the
    /// display on shutdown.
    pub async fn run(mut self, shutdown: watch::Receiver<bool>) -> Result<D, PipelineError> {
        info!(
            "[RENDER] Starting: {} drawables, target interval {:?}.",
            self.drawables.len(),
            self.config.frame_interval
        );

        let refresh_handle = task::spawn(refresh_loop(
            self.sources.clone(),
            self.config.refresh_poll_interval,
            shutdown.clone(),
        ));

        let mut pacer = FramePacer::new(self.config.frame_interval, self.config.frame_history);
        let mut shutdown = shutdown;
        let mut last_frame = Instant::now();
        let mut frames: u64 = 0;

        while !*shutdown.borrow() {
            let frame_start = Instant::now();
            let dt = frame_start.duration_since(last_frame).as_secs_f32();
            last_frame = frame_start;

            self.render_once(dt);

            let budget = pacer.sleep_budget(frame_start.elapsed());
            if !budget.is_zero() {
                tokio::select! {
                    _ = sleep(budget) => {}
                    _ = shutdown.changed() => {}
                }
            }

            pacer.record(frame_start.elapsed());
            frames += 1;
            if frames % RATE_REPORT_EVERY == 0 {
                debug!(
                    "[RENDER] Frame {}: {:.1} fps instantaneous, {:.1} fps average.",
                    frames,
                    pacer.instantaneous_fps().unwrap_or(0.0),
                    pacer.average_fps().unwrap_or(0.0)
                );
            }
        }

        info!("[RENDER] Shutdown observed after {} frames; no further swaps.", frames);
        let _ = refresh_handle.await;
        Ok(self.display)
    }
}

/// Resolve a drawable's text for this frame. Template errors degrade to the
/// literal template text so a broken binding is visible on the panel instead
/// of halting animation.
fn resolve_text<'a>(drawable: &'a Drawable, registry: &ProviderRegistry) -> Option<Cow<'a, str>> {
    let content = &drawable.content;
    if let Some(template) = &content.text {
        return match registry.substitute(template) {
            Ok(resolved) => Some(resolved),
            Err(e) => {
                warn!(
                    "[RENDER] Unresolved template on object {}: {}",
                    drawable.index, e
                );
                Some(Cow::Borrowed(template.as_str()))
            }
        };
    }
    if let Some(source) = &content.data_source {
        let Some((provider, operation)) = source.split_once(':') else {
            warn!(
                "[RENDER] Malformed dataSource on object {}: {:?}",
                drawable.index, source
            );
            return Some(Cow::Borrowed(source.as_str()));
        };
        return match registry.call(provider, operation, content.data_params.as_deref()) {
            Ok(resolved) => Some(Cow::Owned(resolved)),
            Err(e) => {
                warn!(
                    "[RENDER] Unresolved dataSource on object {}: {}",
                    drawable.index, e
                );
                Some(Cow::Borrowed(source.as_str()))
            }
        };
    }
    None
}

fn draw_drawable(
    frame: &mut dyn Surface,
    drawable: &Drawable,
    registry: &ProviderRegistry,
    fonts: &FontLibrary,
    state: &mut FrameState,
    dt: f32,
) {
    // Images are placement-only; the overlay still outlines their boxes.
    if !drawable.kind.is_text() {
        return;
    }
    let Some(text) = resolve_text(drawable, registry) else {
        return;
    };
    let font = match fonts.get(&drawable.style.font) {
        Ok(font) => font,
        Err(e) => {
            // Fonts are preloaded at build; this is unreachable in practice.
            warn!("[RENDER] {}", e);
            return;
        }
    };

    let box_frame = drawable.frame;
    let width = state
        .widths
        .width(drawable.index, &text, font.as_ref(), &mut state.colors);
    let baseline = box_frame.height - BASELINE_INSET;
    let mut local = ClippedSurface::new(frame, box_frame);

    match drawable.kind {
        DrawableKind::ScrollingTextbox => {
            let offset = state.scroll.offset(drawable.index, box_frame.width);
            draw_markup(
                &mut local,
                font.as_ref(),
                offset.floor() as i32,
                baseline,
                drawable.style.fg_color,
                &text,
                &mut state.colors,
            );
            let wrapped = state
                .scroll
                .advance(drawable.index, box_frame.width, width, dt);
            if wrapped {
                if let Some(hook) = &drawable.content.on_scroll_end {
                    if let Err(e) = registry.trigger(hook) {
                        warn!(
                            "[RENDER] onScrollEnd trigger failed on object {}: {}",
                            drawable.index, e
                        );
                    }
                }
            }
        }
        _ => {
            let x = match drawable.content.text_align {
                TextAlign::Left => 0,
                TextAlign::Center => (box_frame.width - width) / 2,
                TextAlign::Right => box_frame.width - width,
            };
            draw_markup(
                &mut local,
                font.as_ref(),
                x,
                baseline,
                drawable.style.fg_color,
                &text,
                &mut state.colors,
            );
        }
    }
}

/// The background refresh loop. Polls every source each tick; sources gate
/// themselves on their own cadence. Provider I/O is blocking by contract and
/// runs on the blocking pool, so the render loop's workers never stall on it.
async fn refresh_loop(
    sources: Vec<Arc<dyn RefreshSource>>,
    poll: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    if sources.is_empty() {
        return;
    }
    info!(
        "[REFRESH] Starting: {} sources, polling every {:?}.",
        sources.len(),
        poll
    );
    let mut ticker = interval(poll);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                for source in &sources {
                    let name = source.name();
                    let source = Arc::clone(source);
                    match task::spawn_blocking(move || source.refresh()).await {
                        Ok(Ok(())) => {}
                        Ok(Err(e)) => warn!("[REFRESH] {} refresh failed: {}", name, e),
                        Err(e) => warn!("[REFRESH] {} refresh task panicked: {}", name, e),
                    }
                }
            }
            _ = shutdown.changed() => {}
        }
        if *shutdown.borrow() {
            break;
        }
    }
    info!("[REFRESH] Shutting down.");
}

#[derive(Default)]
pub struct PipelineBuilder {
    layout: Option<LayoutDocument>,
    config: RuntimeConfig,
    registry: ProviderRegistry,
    sources: Vec<Arc<dyn RefreshSource>>,
    font_provider: Option<Arc<dyn FontProvider>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_layout_json(mut self, json: &str) -> Result<Self, PipelineError> {
        let document: LayoutDocument = serde_json::from_str(json)?;
        document.check_version()?;
        self.layout = Some(document);
        Ok(self)
    }

    pub fn with_layout_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let json = fs::read_to_string(path)?;
        self.with_layout_json(&json)
    }

    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_font_provider(mut self, provider: Arc<dyn FontProvider>) -> Self {
        self.font_provider = Some(provider);
        self
    }

    /// Access the provider table for operation registration.
    pub fn registry_mut(&mut self) -> &mut ProviderRegistry {
        &mut self.registry
    }

    pub fn with_refresh_source(mut self, source: Arc<dyn RefreshSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Flatten the layout against the display's panel size and preload every
    /// referenced font. All load-time failures (bad dimensions, missing
    /// fonts, unsupported versions) surface here, before the first frame.
    pub fn build<D: Display>(self, display: D) -> Result<DisplayPipeline<D>, PipelineError> {
        let document = self
            .layout
            .ok_or_else(|| PipelineError::Config("No layout document provided".to_string()))?;
        let font_provider = self
            .font_provider
            .ok_or_else(|| PipelineError::Config("No font provider configured".to_string()))?;

        let drawables = flatten(&document.objects, display.size())?;
        info!(
            "Flattened layout {} into {} drawables on a {}x{} panel.",
            document.version,
            drawables.len(),
            display.size().width,
            display.size().height
        );

        let fonts = FontLibrary::new(font_provider);
        for drawable in drawables.iter().filter(|d| d.kind.is_text()) {
            fonts.get(&drawable.style.font)?;
        }

        let state = FrameState::new(self.config.scroll_speed);
        Ok(DisplayPipeline {
            display,
            drawables,
            registry: Arc::new(self.registry),
            fonts,
            sources: self.sources,
            config: self.config,
            state,
            back: None,
        })
    }
}
