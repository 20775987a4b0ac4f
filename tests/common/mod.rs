pub mod fixtures;

use marquee::{
    DisplayPipeline, FixedAdvanceFont, InMemoryFontProvider, PipelineBuilder, PipelineError,
    ProviderRegistry, RuntimeConfig, SimDisplay,
};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub const PANEL_WIDTH: i32 = 64;
pub const PANEL_HEIGHT: i32 = 32;

/// Test font: 4px advance per character, 6px tall cell.
pub const FONT_ADVANCE: i32 = 4;

pub fn test_fonts() -> Arc<InMemoryFontProvider> {
    let fonts = Arc::new(InMemoryFontProvider::new());
    fonts.add("7x13.bdf", Arc::new(FixedAdvanceFont::new(FONT_ADVANCE, 6)));
    fonts.add("5x8.bdf", Arc::new(FixedAdvanceFont::new(FONT_ADVANCE, 6)));
    fonts
}

/// Build a pipeline over the simulator with a caller-populated registry.
pub fn build_pipeline<F>(
    layout: &serde_json::Value,
    config: RuntimeConfig,
    populate: F,
) -> Result<DisplayPipeline<SimDisplay>, PipelineError>
where
    F: FnOnce(&mut ProviderRegistry),
{
    let mut builder = PipelineBuilder::new()
        .with_layout_json(&layout.to_string())?
        .with_config(config)
        .with_font_provider(test_fonts());
    populate(builder.registry_mut());
    builder.build(SimDisplay::new(PANEL_WIDTH, PANEL_HEIGHT))
}

/// Deterministic pacing for animation tests: ten ticks per second.
pub fn tick(pipeline: &mut DisplayPipeline<SimDisplay>) {
    pipeline.render_once(0.1);
}
