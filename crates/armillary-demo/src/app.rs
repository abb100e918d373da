use armillary_engine::core::{App, AppControl, FrameCtx};
use armillary_engine::paint::Color;
use armillary_engine::render::{RenderCtx, SceneRenderer};
use armillary_engine::scene::Scene;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

/// Application driving the static calibration scene.
///
/// The scene is uploaded on the first frame; every later frame only re-binds
/// the prepared GPU resources. A failed upload (e.g. rejected shader) is
/// fatal, matching the abort-on-shader-problem behavior of the setup phase.
pub struct CalibrationApp {
    scene: Scene,
    renderer: SceneRenderer,
    uploaded: bool,
}

impl CalibrationApp {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            renderer: SceneRenderer::new(),
            uploaded: false,
        }
    }
}

impl App for CalibrationApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if event.state == ElementState::Pressed
                && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
            {
                return AppControl::Exit;
            }
        }

        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if !self.uploaded {
            let rctx = RenderCtx::new(
                ctx.gpu.device(),
                ctx.gpu.queue(),
                ctx.gpu.surface_format(),
            );

            if let Err(e) = self.renderer.upload(&rctx, &self.scene) {
                log::error!("scene upload failed: {e:#}");
                return AppControl::Exit;
            }
            self.uploaded = true;
        }

        ctx.render(Color::TRANSPARENT, |_rctx, target| {
            self.renderer.render(target);
        })
    }
}
