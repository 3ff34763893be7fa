//! Model Gallery desktop entry point

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use model_gallery::app::App;
use model_gallery::storage::settings::load_settings;
use tracing_subscriber::EnvFilter;

const HEAD: &str = r#"
<script src="https://cdn.tailwindcss.com"></script>
<style>
  :root {
    --bg-primary: #141210;
    --bg-secondary: #1d1a17;
    --text-primary: #f2ede7;
    --text-secondary: rgba(242, 237, 231, 0.72);
    --text-tertiary: rgba(242, 237, 231, 0.45);
    --border-subtle: rgba(242, 237, 231, 0.08);
    --border-hover: rgba(242, 237, 231, 0.16);
    --accent-primary: #c4993b;
  }
  .glass-md {
    background: rgba(242, 237, 231, 0.03);
    border: 1px solid var(--border-subtle);
  }
  .btn-ghost:hover { background: rgba(242, 237, 231, 0.06); }
  .scrollbar-thin { scrollbar-width: thin; }
  @keyframes scale-in { from { opacity: 0; transform: scale(0.96); } to { opacity: 1; transform: scale(1); } }
  .animate-scale-in { animation: scale-in 0.15s ease-out; }
  @keyframes fade-in-up { from { opacity: 0; transform: translateY(6px); } to { opacity: 1; transform: none; } }
  .animate-fade-in-up { animation: fade-in-up 0.2s ease-out; }
</style>
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Model Gallery v{}", env!("CARGO_PKG_VERSION"));

    let settings = load_settings();
    let window = WindowBuilder::new()
        .with_title(settings.window_title.clone())
        .with_inner_size(LogicalSize::new(1280.0, 860.0));

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(window)
                .with_custom_head(HEAD.to_string()),
        )
        .with_context(settings)
        .launch(App);
}
