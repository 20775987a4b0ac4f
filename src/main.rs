use marquee::{
    ClockProvider, FeedItem, FeedProvider, FixedAdvanceFont, InMemoryFontProvider, PipelineBuilder,
    PipelineError, RefreshSource, RuntimeConfig, SimDisplay,
};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

// Use Mimalloc to prevent heap fragmentation in a process that renders
// frames indefinitely.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const PANEL_WIDTH: i32 = 128;
const PANEL_HEIGHT: i32 = 32;

/// Headless driver: renders a layout to a simulated panel until Ctrl-C.
/// Wiring a real matrix means swapping `SimDisplay` for a hardware-backed
/// `Display` and the placeholder font for loaded BDF metrics.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Drives a layout on a simulated {}x{} LED matrix.", PANEL_WIDTH, PANEL_HEIGHT);
        eprintln!();
        eprintln!("Usage: {} <path/to/layout.json>", args[0]);
        eprintln!();
        eprintln!("Try: cargo run -- demos/ticker.json");
        std::process::exit(1);
    }

    let fonts = Arc::new(InMemoryFontProvider::new());
    fonts.add("7x13.bdf", Arc::new(FixedAdvanceFont::new(7, 13)));
    fonts.add("5x8.bdf", Arc::new(FixedAdvanceFont::new(5, 8)));

    let news = Arc::new(FeedProvider::new(
        "news",
        Duration::from_secs(600),
        Box::new(demo_fetch),
    ));

    let mut builder = PipelineBuilder::new()
        .with_layout_file(&args[1])?
        .with_config(RuntimeConfig::default())
        .with_font_provider(fonts)
        .with_refresh_source(Arc::clone(&news) as Arc<dyn RefreshSource>);
    Arc::new(ClockProvider::new()).register(builder.registry_mut());
    news.register(builder.registry_mut());

    let display = SimDisplay::new(PANEL_WIDTH, PANEL_HEIGHT);
    let pipeline = builder.build(display)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let (stop_tx, stop_rx) = watch::channel(false);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = stop_tx.send(true);
            }
        });
        pipeline.run(stop_rx).await.map(|_| ())
    })
}

/// Stand-in for a network fetcher: a real deployment plugs RSS/API polling
/// in here, behind the same blocking seam.
fn demo_fetch() -> Result<Vec<FeedItem>, marquee::ProviderError> {
    Ok(vec![
        FeedItem {
            publisher: "wire".to_string(),
            title: "Panel up and rendering".to_string(),
        },
        FeedItem {
            publisher: "wire".to_string(),
            title: "Second headline for the cycle".to_string(),
        },
    ])
}
