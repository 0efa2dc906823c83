#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod assets;
mod colors;
mod constants;
mod input;
mod scope;
mod ui;

use assets::{
    AssetLoadState, DecodedImage, ImageLoadError, load_embedded_image, load_embedded_reticle,
    load_image_file,
};
use clap::Parser;
use constants::{BACKGROUND_ASSET, RETICLE_ASSET};
use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use scope_sim::config::{ReticleSource, resolve_reticle_spec, user_reticle_path};
use scope_sim::{ReticleGrid, ReticleSpec, ScaleModel};
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use std::thread;

/// Scope view simulator with a mil-dot reticle.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// RON file with the reticle dimensions
    #[arg(long, value_name = "PATH")]
    reticle: Option<PathBuf>,
    /// Background image (PNG or JPEG) to use instead of the bundled photo
    #[arg(long, value_name = "PATH")]
    background: Option<PathBuf>,
    /// Initial zoom, clamped to 1-20
    #[arg(long)]
    zoom: Option<f64>,
    /// Initial target distance in meters
    #[arg(long)]
    distance: Option<f64>,
    /// Initial target width in meters
    #[arg(long)]
    target_width: Option<f64>,
    /// Initial target height in meters
    #[arg(long)]
    target_height: Option<f64>,
}

/// Main application state for the scope simulator.
pub struct ScopeSimApp {
    scale: ScaleModel,
    reticle: ReticleGrid,
    background_state: AssetLoadState,
    background: Option<TextureHandle>,
    toasts: Toasts,
}

impl ScopeSimApp {
    fn new(cc: &eframe::CreationContext<'_>, args: Args) -> Self {
        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        let reticle = ReticleGrid::new(resolve_reticle(args.reticle.as_ref(), &mut toasts));
        let scale = initial_scale(&args);

        // Decode the background off the UI thread
        let (tx, rx) = mpsc::channel();
        let ctx = cc.egui_ctx.clone();
        let background_path = args.background;
        thread::spawn(move || {
            let result = match &background_path {
                Some(path) => load_image_file(path),
                None => load_embedded_image(BACKGROUND_ASSET),
            };
            let _ = tx.send(result);
            ctx.request_repaint();
        });

        Self {
            scale,
            reticle,
            background_state: AssetLoadState::Loading(rx),
            background: None,
            toasts,
        }
    }

    fn background_loading(&self) -> bool {
        matches!(self.background_state, AssetLoadState::Loading(_))
    }

    /// Polls the background decode and uploads the texture once it is ready.
    fn poll_background(&mut self, ctx: &egui::Context) {
        if let AssetLoadState::Loading(rx) = &self.background_state {
            match rx.try_recv() {
                Ok(Ok(decoded)) => self.background_state = AssetLoadState::Ready(decoded),
                Ok(Err(ImageLoadError::AssetNotFound(name))) => {
                    log::info!("{name} not bundled - using procedural background");
                    self.background_state = AssetLoadState::Unavailable;
                }
                Ok(Err(err)) => {
                    self.show_error(err.to_string());
                    self.background_state = AssetLoadState::Unavailable;
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.show_error("background loader: channel disconnected".to_owned());
                    self.background_state = AssetLoadState::Unavailable;
                }
                Err(mpsc::TryRecvError::Empty) => {}
            }
        }

        if let AssetLoadState::Ready(decoded) = &self.background_state {
            self.background = Some(upload_texture(ctx, decoded));
            self.background_state = AssetLoadState::Uploaded;
        }
    }

    fn show_error(&mut self, message: String) {
        log::warn!("{message}");
        self.toasts.add(Toast {
            kind: ToastKind::Error,
            text: message.into(),
            options: ToastOptions::default()
                .duration_in_seconds(8.0)
                .show_icon(true),
            ..Default::default()
        });
    }
}

impl eframe::App for ScopeSimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_background(ctx);
        self.handle_keyboard_input(ctx);

        self.show_status_bar(ctx);
        self.show_controls(ctx);
        self.show_central_panel(ctx);

        self.toasts.show(ctx);
    }
}

fn upload_texture(ctx: &egui::Context, decoded: &DecodedImage) -> TextureHandle {
    let image = ColorImage::from_rgba_unmultiplied(
        [decoded.width as usize, decoded.height as usize],
        &decoded.pixels,
    );
    ctx.load_texture("background", image, TextureOptions::LINEAR)
}

/// Seeds the session state from CLI flags through the validating setters.
fn initial_scale(args: &Args) -> ScaleModel {
    let mut scale = ScaleModel::new();
    let seeds: [(&str, Option<f64>, fn(&mut ScaleModel, f64) -> bool); 4] = [
        ("--zoom", args.zoom, ScaleModel::set_zoom),
        ("--distance", args.distance, ScaleModel::set_distance),
        ("--target-width", args.target_width, ScaleModel::set_target_width),
        ("--target-height", args.target_height, ScaleModel::set_target_height),
    ];

    for (flag, value, setter) in seeds {
        if let Some(value) = value
            && !setter(&mut scale, value)
        {
            log::warn!("Ignoring {flag} {value}: must be a positive number");
        }
    }

    scale
}

/// Picks the reticle dimensions: CLI file, then user config, then the bundled asset.
///
/// Every source that fails to load is reported as a toast.
fn resolve_reticle(cli_path: Option<&PathBuf>, toasts: &mut Toasts) -> ReticleSpec {
    let sources: Vec<ReticleSource> = cli_path
        .cloned()
        .map(ReticleSource::Explicit)
        .into_iter()
        .chain(user_reticle_path().map(ReticleSource::IfPresent))
        .collect();

    let resolved = resolve_reticle_spec(&sources, || load_embedded_reticle(RETICLE_ASSET));

    for message in resolved.errors {
        log::warn!("{message}");
        toasts.add(Toast {
            kind: ToastKind::Error,
            text: message.into(),
            options: ToastOptions::default()
                .duration_in_seconds(10.0)
                .show_icon(true),
            ..Default::default()
        });
    }

    resolved.spec
}

/// Builds the window icon: a small black crosshair with a center dot.
fn reticle_icon() -> egui::IconData {
    const SIZE: u32 = 32;
    let mid = SIZE / 2;
    let mut rgba = Vec::with_capacity((SIZE * SIZE * 4) as usize);

    for y in 0..SIZE {
        for x in 0..SIZE {
            let dx = x.abs_diff(mid);
            let dy = y.abs_diff(mid);
            let on_line = dx == 0 || dy == 0;
            let on_dot = dx * dx + dy * dy <= 9;
            let in_lens = dx * dx + dy * dy <= (mid - 1) * (mid - 1);
            let pixel = if on_line || on_dot {
                [0, 0, 0, 255]
            } else if in_lens {
                [235, 235, 235, 255]
            } else {
                [0, 0, 0, 0]
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    egui::IconData {
        rgba,
        width: SIZE,
        height: SIZE,
    }
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Scope View Simulator")
            .with_inner_size([1280.0, 720.0])
            .with_icon(Arc::new(reticle_icon())),
        ..Default::default()
    };

    eframe::run_native(
        "Scope View Simulator",
        options,
        Box::new(|cc| Ok(Box::new(ScopeSimApp::new(cc, args)))),
    )
}
