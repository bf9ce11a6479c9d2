#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod colors;
mod config;
mod constants;
mod ui;

use clap::Parser;
use config::Settings;
use constants::{WINDOW_SIZE, WINDOW_TITLE};
use eframe::egui;
use pro_paint::{Brush, PageManager, Size, ZoomSteps};
use std::path::PathBuf;

/// Multi-page paint program with zoomable canvases.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Settings file to use instead of the per-user one.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base brush size (1-50), overriding the settings file.
    #[arg(long)]
    brush_size: Option<f64>,

    /// Number of empty pages to open with.
    #[arg(long, default_value_t = 1)]
    pages: usize,
}

/// Main application state for the paint program.
pub struct PaintApp {
    pages: PageManager,
    brush: Brush,
    zoom_steps: ZoomSteps,
    scroll_speed: f64,
    /// Text placed by the note tool.
    note_text: String,
    /// Size of the canvas viewport during the last frame.
    viewport: Size,
    /// Last pointer position sent to the canvas while the button is held.
    pointer: Option<egui::Pos2>,
}

impl PaintApp {
    fn new(settings: &Settings, page_count: usize) -> Self {
        let mut pages = PageManager::new(Size::square(settings.canvas_extent));
        for _ in 1..page_count {
            pages.add_page();
        }
        pages.switch_to(0);

        Self {
            pages,
            brush: Brush::new(
                settings.brush_color,
                settings.eraser_color,
                settings.brush_size,
            ),
            zoom_steps: settings.zoom_steps(),
            scroll_speed: settings.scroll_speed,
            note_text: String::new(),
            viewport: Size::default(),
            pointer: None,
        }
    }
}

impl eframe::App for PaintApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_input(ctx);

        self.show_toolbar(ctx);
        self.show_page_nav(ctx);
        self.show_canvas(ctx);
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let cli = Cli::parse();
    let mut settings = config::load_or_default(cli.config.as_deref());
    if let Some(size) = cli.brush_size {
        settings.brush_size = size;
    }
    log::debug!("Starting with {settings:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(PaintApp::new(&settings, cli.pages)))),
    )
}
