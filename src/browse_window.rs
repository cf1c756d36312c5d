//! Native window hosting the browse panel.
//!
//! A standalone winit window with its own egui context and wgpu
//! renderer. The window is a thin display surface: every user gesture
//! becomes a [`PanelRequest`] and every [`PanelReply`] is applied to a
//! local display list, so the interesting bookkeeping stays in
//! [`BrowsePanel`].

use crate::browse_panel::{BrowsePanel, PanelEntry, PanelReply, PanelRequest};
use anyhow::{Context as _, Result};
use fontsnip_catalog::FontFamily;
use std::sync::Arc;
use wgpu::SurfaceError;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

/// Pixels of slack when deciding the view has reached the bottom.
const SCROLL_BOTTOM_SLACK: f32 = 4.0;

/// Open the browse window over an already-fetched catalog and run its
/// event loop until the user closes it.
pub fn run_browse_window(catalog: Vec<FontFamily>, page_size: usize) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = BrowseApp::new(catalog, page_size);
    event_loop.run_app(&mut app)?;

    match app.init_error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Display-side state: what is currently rendered, independent of the
/// panel's pagination cursor.
#[derive(Default)]
struct PanelView {
    /// Entries currently shown.
    entries: Vec<PanelEntry>,
    /// Current contents of the search box.
    query: String,
    /// Query as of the previous frame, to detect edits.
    last_query: String,
    /// One-line confirmation shown after a copy action.
    status: String,
}

impl PanelView {
    fn searching(&self) -> bool {
        !self.query.is_empty()
    }
}

/// The application driving the browse window.
struct BrowseApp {
    panel: BrowsePanel,
    view: PanelView,
    gfx: Option<GfxState>,
    /// Window/device setup failure, reported after the loop exits.
    init_error: Option<anyhow::Error>,
}

impl BrowseApp {
    fn new(catalog: Vec<FontFamily>, page_size: usize) -> Self {
        Self {
            panel: BrowsePanel::new(catalog, page_size),
            view: PanelView::default(),
            gfx: None,
            init_error: None,
        }
    }

    /// Apply one panel reply to the display list.
    fn apply_reply(view: &mut PanelView, reply: PanelReply) {
        match reply {
            PanelReply::AddContent { entries, .. } => {
                view.entries.extend(entries);
            }
            PanelReply::SearchResults { entries } => {
                view.entries = entries;
            }
            PanelReply::Copy {
                family,
                kind,
                snippet,
            } => {
                match arboard::Clipboard::new().and_then(|mut c| c.set_text(snippet)) {
                    Ok(()) => {
                        view.status =
                            format!("{} code of the {} font has been copied!", kind.label(), family);
                        log::info!("Copied {} snippet for '{}'", kind.label(), family);
                    }
                    Err(e) => {
                        view.status = format!("Failed to copy: {e}");
                        log::warn!("Failed to copy to clipboard: {}", e);
                    }
                }
            }
            PanelReply::None => {}
        }
    }
}

impl ApplicationHandler for BrowseApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }
        match GfxState::new(event_loop) {
            Ok(gfx) => {
                self.gfx = Some(gfx);
                // First page before the first frame.
                let reply = self.panel.handle(PanelRequest::Scroll);
                Self::apply_reply(&mut self.view, reply);
            }
            Err(e) => {
                log::error!("Failed to create browse window: {}", e);
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };

        // Let egui see the event first.
        let response = gfx.egui_state.on_window_event(&gfx.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(new_size) => {
                if new_size.width > 0 && new_size.height > 0 {
                    gfx.surface_config.width = new_size.width;
                    gfx.surface_config.height = new_size.height;
                    gfx.surface.configure(&gfx.device, &gfx.surface_config);
                    gfx.window.request_redraw();
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !response.consumed
                    && event.state.is_pressed()
                    && matches!(event.logical_key, Key::Named(NamedKey::Escape))
                {
                    event_loop.exit();
                    return;
                }
            }
            WindowEvent::RedrawRequested => {
                let requests = gfx.render(&mut self.view, &self.panel);
                let mut changed = false;
                for request in requests {
                    let reply = self.panel.handle(request);
                    if reply != PanelReply::None {
                        changed = true;
                    }
                    Self::apply_reply(&mut self.view, reply);
                }
                if changed {
                    gfx.window.request_redraw();
                }
                return;
            }
            _ => {}
        }

        if response.repaint {
            gfx.window.request_redraw();
        }
    }
}

/// Window, surface, and egui renderer state.
struct GfxState {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl GfxState {
    fn new(event_loop: &ActiveEventLoop) -> Result<Self> {
        let window_attrs = Window::default_attributes()
            .with_title("Browse Fonts")
            .with_inner_size(winit::dpi::LogicalSize::new(520, 680))
            .with_min_inner_size(winit::dpi::LogicalSize::new(360, 300))
            .with_resizable(true);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("Failed to find suitable GPU adapter")?;

        let (device, queue) =
            pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default()))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let scale_factor = window.scale_factor() as f32;
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(scale_factor),
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &device,
            surface_format,
            egui_wgpu::RendererOptions {
                msaa_samples: 1,
                depth_stencil_format: None,
                dithering: false,
                predictable_texture_filtering: false,
            },
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            surface_config,
            egui_ctx,
            egui_state,
            egui_renderer,
        })
    }

    /// Render one frame and collect the panel requests the user's
    /// gestures produced.
    fn render(&mut self, view: &mut PanelView, panel: &BrowsePanel) -> Vec<PanelRequest> {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                return Vec::new();
            }
            Err(SurfaceError::Timeout) => {
                log::warn!("Browse window surface timeout");
                return Vec::new();
            }
            Err(e) => {
                log::error!("Browse window surface error: {:?}", e);
                return Vec::new();
            }
        };

        let texture_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut requests = Vec::new();
        let raw_input = self.egui_state.take_egui_input(&self.window);
        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            show_panel(ctx, view, panel, &mut requests);
        });

        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output.clone());

        let paint_jobs = self
            .egui_ctx
            .tessellate(egui_output.shapes, self.egui_ctx.pixels_per_point());

        for (id, delta) in &egui_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, delta);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Browse Window Encoder"),
            });

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_config.width, self.surface_config.height],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Browse Window Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.094,
                            g: 0.094,
                            b: 0.094,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        requests
    }
}

/// Build the panel UI for one frame, pushing a request for every user
/// gesture (edit of the search box, scroll to bottom, copy click).
fn show_panel(
    ctx: &egui::Context,
    view: &mut PanelView,
    panel: &BrowsePanel,
    requests: &mut Vec<PanelRequest>,
) {
    egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.text_edit_singleline(&mut view.query);
        });
    });

    egui::TopBottomPanel::bottom("status_line").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if view.status.is_empty() {
                ui.label(format!("{} families", panel.len()));
            } else {
                ui.label(&view.status);
            }
        });
    });

    if view.query != view.last_query {
        view.last_query = view.query.clone();
        requests.push(PanelRequest::Search {
            query: view.query.clone(),
        });
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        if view.entries.is_empty() {
            ui.label(if view.searching() {
                "No families match."
            } else {
                "The catalog is empty."
            });
            return;
        }

        let output = egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for entry in &view.entries {
                    ui.horizontal(|ui| {
                        if entry.category.is_empty() {
                            ui.label(&entry.family);
                        } else {
                            ui.label(format!("{} ({})", entry.family, entry.category));
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .button("<link>")
                                .on_hover_text(&entry.link_snippet)
                                .clicked()
                            {
                                requests.push(PanelRequest::CopyLink {
                                    family: entry.family.clone(),
                                });
                            }
                            if ui
                                .button("@import")
                                .on_hover_text(&entry.import_snippet)
                                .clicked()
                            {
                                requests.push(PanelRequest::CopyImport {
                                    family: entry.family.clone(),
                                });
                            }
                        });
                    });
                    ui.separator();
                }
            });

        // Lazy pagination: ask for the next page once the view hits
        // the bottom. Search results are complete and never paged.
        let at_bottom = output.state.offset.y + output.inner_rect.height()
            >= output.content_size.y - SCROLL_BOTTOM_SLACK;
        if at_bottom && !view.searching() && !panel.exhausted() {
            requests.push(PanelRequest::Scroll);
        }
    });
}
