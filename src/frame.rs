use crate::core::{self, Camera, CoreHitVolume, InputQueue, OrbCommand, OrbConfig, OrbState};
use crate::dom;
use crate::render;
use crate::ui::Hud;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: OrbState,
    pub config: OrbConfig,
    pub camera: Camera,
    pub hit_volume: CoreHitVolume,
    pub queue: Rc<RefCell<InputQueue>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState,
    pub hud: Hud,

    pub last_instant: Instant,
}

impl FrameContext {
    /// One animation frame. An `Err` is unrecoverable and ends the loop.
    pub fn frame(&mut self) -> anyhow::Result<()> {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        self.camera.set_aspect(w as f32, h as f32);

        let out = {
            let mut queue = self.queue.borrow_mut();
            core::tick(
                &mut self.state,
                &self.config,
                &self.camera,
                &self.hit_volume,
                &mut queue,
                dt_sec,
            )
        };

        for cmd in &out.commands {
            match cmd {
                OrbCommand::Reveal => self.hud.show_revealed(),
                OrbCommand::Download => self.hud.trigger_download(),
            }
        }
        self.hud.sync(&out.visuals);

        match self.gpu.render(&out.visuals, &self.state.pose, &self.camera) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                self.gpu.reconfigure();
                Ok(())
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::debug!("[gpu] frame timeout; skipped");
                Ok(())
            }
            Err(e) => Err(anyhow::anyhow!("render error: {:?}", e)),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let result = frame_ctx_tick.borrow_mut().frame();
        if let Err(e) = result {
            log::error!("[gpu] {:?}; stopping animation loop", e);
            // Nothing drains the queue from here on.
            frame_ctx_tick.borrow().queue.borrow_mut().close();
            // Dropping the closure here would free it mid-call; leave it unscheduled.
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Keep the canvas backing store sized to its CSS box.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
