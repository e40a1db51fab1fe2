use core::f32::consts::{PI, TAU};
use eframe::egui;

use rotorgeom::camera::*;
use rotorgeom::fish::{self, FishAnimation};
use rotorgeom::hierarchy::Hierarchy;
use rotorgeom::orientation::*;
use rotorgeom::re3::*;
use rotorgeom::timing::FrameRateMeter;
use rotorgeom::voxel::World;

pub mod args;
pub mod render;

use args::{Args, SceneKind};
use render::{Outlines, WireframePainter};

const JOINT_NAMES: [&str; fish::ANGLE_COUNT] = [
    "body",
    "top fin 1 bend",
    "top fin 1 twist",
    "top fin 2 bend",
    "top fin 2 twist",
    "tail 1",
    "tail 2",
    "tail 3",
    "head",
    "side fins bend",
    "side fins twist",
];

/// Rolling hills standing in for a noise heightfield
pub fn terrain_height(x: usize, z: usize, size: [usize; 3]) -> usize {
    let [size_x, size_y, size_z] = size;
    let u = x as f32 / size_x as f32 * TAU;
    let v = z as f32 / size_z as f32 * TAU;
    let h = 0.5 + 0.25 * (2. * u).sin() * (v + 1.).cos() + 0.15 * (3. * v).sin();
    (h.max(0.) * size_y as f32) as usize
}

enum Scene {
    Fish {
        fish: Hierarchy<f32>,
        animation: FishAnimation<f32>,
        orientation: Orientation<f32>,
    },
    World {
        world: World,
        camera: Camera<f32>,
    },
}

impl Scene {
    fn orientation_mut(&mut self) -> &mut Orientation<f32> {
        match self {
            Scene::Fish { orientation, .. } => orientation,
            Scene::World { camera, .. } => &mut camera.orientation,
        }
    }
}

/// Angle and plane shown in the orientation controls
struct OrientationControls {
    angle: f32,
    plane: [f32; 3],
}

impl OrientationControls {
    fn read_back(&mut self, orientation: &Orientation<f32>) {
        if let Some((angle, plane)) = orientation.angle_plane() {
            self.angle = angle;
            self.plane = plane.into();
        }
    }
}

pub struct DemoApp {
    scene: Scene,
    drag: DragTracker<f32>,
    controls: OrientationControls,
    meter: FrameRateMeter,
    outlines: Outlines,
}

impl DemoApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        args: &Args,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let config = args.orientation_config();
        let (scene, drag) = match args.scene {
            SceneKind::Fish => (
                Scene::Fish {
                    fish: fish::hierarchy()?,
                    animation: FishAnimation::default(),
                    orientation: Orientation::new(config),
                },
                DragTracker::with_spin(0.01, 0.04, 0.077),
            ),
            SceneKind::World => {
                let size = args.world_size();
                let [x, y, z] = size;
                let world = World::from_heights(x, y, z, |x, z| terrain_height(x, z, size))?;
                let orientation = Orientation::from_rotor(
                    rotation_rotor(0.5_f32, Bivector::yz_hat()),
                    config,
                );
                let camera = Camera::new(world.spawn_position(), orientation, CameraConfig::default());
                (Scene::World { world, camera }, DragTracker::default())
            }
        };
        Ok(DemoApp {
            scene,
            drag,
            controls: OrientationControls {
                angle: 0.,
                plane: [0., 0., 1.],
            },
            meter: FrameRateMeter::new(),
            outlines: Outlines::default(),
        })
    }

    fn handle_pointer(&mut self, ctx: &egui::Context, response: &egui::Response, now_millis: u64) {
        let rect = response.rect;
        let canvas = CanvasRect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        };
        let (pressed, released, pos, shift) = ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
                i.modifiers.shift,
            )
        });
        let Some(pos) = pos else { return };

        if pressed && response.hovered() {
            self.drag.press(canvas.to_device(pos.x, pos.y));
            if shift {
                if let Scene::Fish { animation, .. } = &mut self.scene {
                    animation.poke(now_millis);
                }
            }
        } else if self.drag.is_held() {
            self.drag.drag(canvas.to_device(pos.x, pos.y));
        }
        if released {
            self.drag.release();
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let Scene::World { world, camera } = &mut self.scene else {
            return;
        };
        let moves = [
            (egui::Key::W, CameraMove::Forward),
            (egui::Key::S, CameraMove::Back),
            (egui::Key::A, CameraMove::Left),
            (egui::Key::D, CameraMove::Right),
            (egui::Key::Q, CameraMove::YawLeft),
            (egui::Key::E, CameraMove::YawRight),
        ];
        ctx.input(|i| {
            for (key, mv) in moves {
                if i.key_pressed(key) {
                    *camera = camera.apply(mv);
                }
            }
            if i.key_pressed(egui::Key::Space) {
                world.raise_water();
            }
            if i.key_pressed(egui::Key::H) {
                world.lower_water();
            }
        });
    }

    fn controls_ui(&mut self, ui: &mut egui::Ui, now_millis: u64) {
        if let Some(fps) = self.meter.fps() {
            ui.label(format!("Avg fps in last 5 frames: {fps:.1}"));
        }
        ui.separator();

        ui.heading("Orientation");
        let mut changed = ui
            .add(egui::Slider::new(&mut self.controls.angle, 0. ..=TAU).text("radians"))
            .changed();
        for (value, label) in self.controls.plane.iter_mut().zip(["yz", "zx", "xy"]) {
            changed |= ui
                .add(egui::Slider::new(value, -1. ..=1.).text(label))
                .changed();
        }
        if changed {
            let orientation = self.scene.orientation_mut();
            *orientation = orientation.update(OrientationInput::Set {
                angle: self.controls.angle,
                plane: self.controls.plane.into(),
            });
            self.drag.stop();
        }
        ui.separator();

        match &mut self.scene {
            Scene::Fish { animation, .. } => {
                ui.heading("Joints");
                ui.checkbox(&mut animation.enabled, "Animate");
                if animation.is_poked(now_millis) {
                    ui.label("Poked!");
                }
                let mut angles = animation.angles();
                for (i, name) in JOINT_NAMES.iter().enumerate() {
                    if ui
                        .add(egui::Slider::new(&mut angles[i], -PI..=PI).text(*name))
                        .changed()
                    {
                        animation.set_angle(i, angles[i]);
                    }
                }
                ui.label("Shift-click the fish to poke it.");
            }
            Scene::World { world, camera } => {
                ui.heading("World");
                let [x, y, z]: [f32; 3] = camera.position.into();
                ui.label(format!("Camera at ({x:.1}, {y:.1}, {z:.1})"));
                ui.label(format!("Water level {}", world.water_level()));
                ui.label("W/A/S/D to walk, Q/E to turn");
                ui.label("Space/H to raise/lower the water");
            }
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let time = ctx.input(|i| i.time);
        let now_millis = (time * 1000.) as u64;
        self.meter.record(time * 1000.);

        self.handle_keys(ctx);

        let input = self.drag.input();
        let orientation = self.scene.orientation_mut();
        let before = orientation.rotor();
        *orientation = orientation.update(input);
        if orientation.rotor() != before {
            let updated = *orientation;
            self.controls.read_back(&updated);
        }

        egui::SidePanel::right("controls").show(ctx, |ui| {
            self.controls_ui(ui, now_millis);
        });

        ctx.set_visuals(egui::Visuals::light());
        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            self.handle_pointer(ctx, &response, now_millis);

            let painter = painter.with_clip_rect(response.rect);
            let mut target = WireframePainter::new(&painter, response.rect, &self.outlines);
            match &mut self.scene {
                Scene::Fish {
                    fish: hierarchy,
                    animation,
                    orientation,
                } => {
                    let angles = animation.tick(now_millis);
                    let rotor = orientation.rotor();
                    if let Err(err) = fish::draw(hierarchy, rotor, &angles, &mut target) {
                        log::error!("skipping frame: {err}");
                    }
                }
                Scene::World { world, camera } => {
                    world.draw(camera.view_matrix(), &mut target);
                }
            }
            log::trace!("drew {} segments", target.segments);
        });
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_fits_world() {
        let size = [32, 16, 32];
        for z in 0..32 {
            for x in 0..32 {
                assert!(terrain_height(x, z, size) <= 16);
            }
        }
    }
}
