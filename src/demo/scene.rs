use std::cell::RefCell;
use std::f64::consts::FRAC_PI_2;
use std::rc::Rc;

use anyhow::{anyhow, bail, Context};
use glam::{DQuat, DVec3};
use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element, HtmlCanvasElement, KeyboardEvent};

use super::bindings::{cannon, three};
use super::camera::follow;
use super::content::panel_content;
use super::controls::{
    DriveCommand, KeyState, DRIVE_WHEELS, GRIP_FRICTION_SLIP, STEERING_WHEELS,
};
use super::zones::{default_zones, interaction, Interaction, InteractionZone};
use super::{
    loading_percent, CAMERA_START, CHASSIS_HALF_EXTENTS, CHASSIS_MASS, CHASSIS_SPAWN,
    FIXED_TIME_STEP, FONT_URL, GRAVITY, LOADER_FADE_MS, MAX_SUB_STEPS, MODEL_URL,
    SOLVER_ITERATIONS, WHEEL_CONNECTIONS, WHEEL_RADIUS, ZONE_LABEL_HEIGHT,
};
use crate::dom::{self, object, Listener};

const VISIBLE: &str = "visible";

fn vec3(v: &cannon::Vec3) -> DVec3 {
    DVec3::new(v.x(), v.y(), v.z())
}

fn quat(q: &cannon::Quaternion) -> DQuat {
    DQuat::from_xyzw(q.x(), q.y(), q.z(), q.w())
}

fn place(object: &three::Object3D, position: &cannon::Vec3, orientation: &cannon::Quaternion) {
    object.position().set(position.x(), position.y(), position.z());
    object
        .quaternion()
        .set(orientation.x(), orientation.y(), orientation.z(), orientation.w());
}

/// Overlay elements. Every one is optional; a missing element just means that
/// piece of feedback is not shown.
struct Hud {
    popup: Option<Element>,
    panel: Option<Element>,
    panel_title: Option<Element>,
    panel_content: Option<Element>,
}

impl Hud {
    fn find() -> Self {
        Self {
            popup: dom::query(".popup"),
            panel: dom::query(".section-panel"),
            panel_title: dom::query("#panelTitle"),
            panel_content: dom::query("#panelContent"),
        }
    }

    fn show(&self, interaction: Interaction) {
        if let Some(popup) = &self.popup {
            let _ = popup
                .class_list()
                .toggle_with_force(VISIBLE, interaction.active.is_some());
        }

        let Some(zone) = interaction.open_panel else {
            return;
        };
        let content = panel_content(zone);
        if let Some(title) = &self.panel_title {
            title.set_text_content(Some(content.title));
        }
        if let Some(body) = &self.panel_content {
            body.set_inner_html(content.html);
        }
        if let Some(panel) = &self.panel {
            let _ = panel.class_list().add_1(VISIBLE);
        }
    }
}

pub struct DriveScene {
    scene: three::Scene,
    camera: three::PerspectiveCamera,
    renderer: three::WebGLRenderer,
    clock: three::Clock,
    world: cannon::World,
    vehicle: cannon::RaycastVehicle,
    chassis_mesh: Rc<RefCell<Option<three::Object3D>>>,
    wheel_meshes: Vec<three::Mesh>,
    zones: Vec<InteractionZone>,
    keys: Rc<RefCell<KeyState>>,
    hud: Hud,
}

impl DriveScene {
    pub fn new() -> anyhow::Result<Self> {
        for global in ["THREE", "CANNON"] {
            if !dom::global_defined(global) {
                bail!("{global} is not loaded");
            }
        }

        let canvas: HtmlCanvasElement = dom::query("canvas.webgl")
            .context("missing canvas.webgl")?
            .dyn_into()
            .map_err(|_| anyhow!("canvas.webgl is not a canvas"))?;
        let (width, height) = dom::viewport_size();

        let scene = three::Scene::new();
        let background = three::Color::new(0x111111);
        scene.set_fog(&three::Fog::new(&background, 100.0, 300.0));
        scene.set_background(&background);

        let camera = three::PerspectiveCamera::new(75.0, width / height, 0.1, 1000.0);
        camera
            .position()
            .set(CAMERA_START.x, CAMERA_START.y, CAMERA_START.z);

        let renderer = three::WebGLRenderer::new(&object(&[
            ("canvas", canvas.into()),
            ("antialias", true.into()),
        ]))
        .map_err(|err| anyhow!("WebGL renderer unavailable: {err:?}"))?;
        renderer.set_size(width, height);
        let pixel_ratio = window().map_or(1.0, |w| w.device_pixel_ratio());
        renderer.set_pixel_ratio(pixel_ratio.min(2.0));
        let shadow_map = renderer.shadow_map();
        shadow_map.set_enabled(true);
        shadow_map.set_type(three::PCF_SOFT_SHADOW_MAP);

        let world = cannon::World::new();
        world.gravity().set(0.0, GRAVITY, 0.0);
        world.set_broadphase(&cannon::SapBroadphase::new(&world));
        world.solver().set_iterations(SOLVER_ITERATIONS);

        let manager = loading_manager();
        let zones = default_zones();

        add_lights(&scene);
        add_ground(&scene, &world);
        load_zone_labels(&manager, &scene, &zones);

        let vehicle = build_vehicle();
        let wheel_meshes = add_wheel_meshes(&scene);
        vehicle.add_to_world(&world);

        let chassis_mesh = Rc::new(RefCell::new(None));
        load_car_model(&manager, &scene, &chassis_mesh);

        let keys = Rc::new(RefCell::new(KeyState::default()));
        track_keys(&keys);
        track_resize(&camera, &renderer);
        bind_close_button();

        Ok(Self {
            scene,
            camera,
            renderer,
            clock: three::Clock::new(),
            world,
            vehicle,
            chassis_mesh,
            wheel_meshes,
            zones,
            keys,
            hud: Hud::find(),
        })
    }

    fn wheel(&self, index: usize) -> cannon::WheelInfo {
        self.vehicle.wheel_infos().get(index as u32).unchecked_into()
    }

    fn drive(&self, command: DriveCommand) {
        for wheel in STEERING_WHEELS {
            self.vehicle.set_steering_value(command.steering, wheel as u32);
        }
        for wheel in DRIVE_WHEELS {
            self.vehicle.apply_engine_force(command.engine_force, wheel as u32);
            self.wheel(wheel).set_friction_slip(command.rear_friction_slip);
        }

        if command.reset {
            let chassis = self.vehicle.chassis_body();
            chassis
                .position()
                .set(CHASSIS_SPAWN.x, CHASSIS_SPAWN.y, CHASSIS_SPAWN.z);
            chassis.quaternion().set(0.0, 0.0, 0.0, 1.0);
            chassis.velocity().set(0.0, 0.0, 0.0);
            chassis.angular_velocity().set(0.0, 0.0, 0.0);
        }
    }

    fn sync_meshes(&self) {
        let chassis = self.vehicle.chassis_body();
        if let Some(mesh) = self.chassis_mesh.borrow().as_ref() {
            place(mesh, &chassis.position(), &chassis.quaternion());
        }
        for (index, mesh) in self.wheel_meshes.iter().enumerate() {
            let transform = self.wheel(index).world_transform();
            place(mesh, &transform.position(), &transform.quaternion());
        }
    }

    pub fn frame(&mut self) {
        let (command, interact_held) = {
            let keys = self.keys.borrow();
            (DriveCommand::from_keys(&keys), keys.interact_held())
        };
        self.drive(command);

        let dt = self.clock.get_delta();
        self.world.step(FIXED_TIME_STEP, dt, MAX_SUB_STEPS);
        self.sync_meshes();

        let chassis = self.vehicle.chassis_body();
        let position = vec3(&chassis.position());
        let orientation = quat(&chassis.quaternion());
        self.hud
            .show(interaction(position, &self.zones, interact_held));

        let current = self.camera.position();
        let target = follow(
            DVec3::new(current.x(), current.y(), current.z()),
            position,
            orientation,
        );
        current.set(target.x, target.y, target.z);
        self.camera.look_at(position.x, position.y, position.z);

        self.renderer.render(&self.scene, &self.camera);
    }
}

fn loading_manager() -> three::LoadingManager {
    let manager = three::LoadingManager::new();

    let bar = dom::query_html(".loading-bar");
    let on_progress = Closure::<dyn FnMut(JsValue, u32, u32)>::new(
        move |_url: JsValue, loaded: u32, total: u32| {
            if let Some(bar) = &bar {
                dom::set_style(bar, "width", &format!("{}%", loading_percent(loaded, total)));
            }
        },
    );
    manager.set_on_progress(&on_progress.into_js_value());

    let on_load = Closure::<dyn FnMut()>::new(|| {
        log::info!("drive assets loaded");
        Timeout::new(LOADER_FADE_MS, || {
            if let Some(screen) = dom::query(".loading-screen") {
                let _ = screen.class_list().add_1("fade-out");
            }
        })
        .forget();
    });
    manager.set_on_load(&on_load.into_js_value());

    manager
}

fn add_lights(scene: &three::Scene) {
    scene.add(&three::AmbientLight::new(0xffffff, 0.5));

    let sun = three::DirectionalLight::new(0xffffff, 1.0);
    sun.position().set(50.0, 50.0, 50.0);
    sun.set_cast_shadow(true);
    sun.shadow().map_size().set(2048.0, 2048.0);
    scene.add(&sun);
}

fn add_ground(scene: &three::Scene, world: &cannon::World) {
    let body = cannon::Body::new(&object(&[
        ("mass", 0.into()),
        ("material", cannon::Material::new("ground").into()),
    ]));
    body.add_shape(&cannon::Plane::new());
    body.quaternion().set_from_euler(-FRAC_PI_2, 0.0, 0.0);
    world.add_body(&body);

    let mesh = three::Mesh::new(
        &three::PlaneGeometry::new(500.0, 500.0),
        &three::MeshStandardMaterial::new(&object(&[
            ("color", 0x222222.into()),
            ("roughness", 0.8.into()),
        ])),
    );
    mesh.rotation().set_x(-FRAC_PI_2);
    mesh.set_receive_shadow(true);
    scene.add(&mesh);
}

fn load_zone_labels(
    manager: &three::LoadingManager,
    scene: &three::Scene,
    zones: &[InteractionZone],
) {
    let scene = scene.clone();
    let zones = zones.to_vec();
    let on_load = Closure::once_into_js(move |font: JsValue| {
        let material = three::MeshStandardMaterial::new(&object(&[("color", 0xff8c00.into())]));
        for zone in &zones {
            let geometry = three::TextGeometry::new(
                panel_content(zone.id).title,
                &object(&[
                    ("font", font.clone()),
                    ("size", 5.into()),
                    ("height", 0.5.into()),
                ]),
            );
            geometry.center();
            let label = three::Mesh::new(&geometry, &material);
            label.position().set(
                zone.position.x,
                zone.position.y + ZONE_LABEL_HEIGHT,
                zone.position.z,
            );
            scene.add(&label);
        }
    });
    let on_error = Closure::once_into_js(|err: JsValue| {
        log::warn!("zone label font failed to load: {err:?}");
    });

    three::FontLoader::new(manager).load(FONT_URL, &on_load, &JsValue::UNDEFINED, &on_error);
}

fn build_vehicle() -> cannon::RaycastVehicle {
    let (hx, hy, hz) = CHASSIS_HALF_EXTENTS.into();
    let chassis = cannon::Body::new(&object(&[("mass", CHASSIS_MASS.into())]));
    chassis.add_shape(&cannon::BoxShape::new(&cannon::Vec3::new(hx, hy, hz)));
    chassis
        .position()
        .set(CHASSIS_SPAWN.x, CHASSIS_SPAWN.y, CHASSIS_SPAWN.z);

    let vehicle = cannon::RaycastVehicle::new(&object(&[("chassisBody", chassis.into())]));
    for connection in WHEEL_CONNECTIONS {
        vehicle.add_wheel(&object(&[
            ("radius", WHEEL_RADIUS.into()),
            ("directionLocal", cannon::Vec3::new(0.0, -1.0, 0.0).into()),
            ("suspensionStiffness", 30.into()),
            ("suspensionRestLength", 0.3.into()),
            ("frictionSlip", GRIP_FRICTION_SLIP.into()),
            ("dampingRelaxation", 2.3.into()),
            ("dampingCompression", 4.4.into()),
            ("maxSuspensionForce", 100_000.into()),
            ("rollInfluence", 0.01.into()),
            ("axleLocal", cannon::Vec3::new(0.0, 0.0, 1.0).into()),
            (
                "chassisConnectionPointLocal",
                cannon::Vec3::new(connection.x, connection.y, connection.z).into(),
            ),
            ("maxSuspensionTravel", 0.3.into()),
            ("customSlidingRotationalSpeed", (-30).into()),
            ("useCustomSlidingRotationalSpeed", true.into()),
        ]));
    }
    vehicle
}

/// One cylinder per wheel. The geometry is turned onto the axle axis so the
/// mesh can take the wheel's world orientation unchanged.
fn add_wheel_meshes(scene: &three::Scene) -> Vec<three::Mesh> {
    let geometry = three::CylinderGeometry::new(WHEEL_RADIUS, WHEEL_RADIUS, 0.3, 32);
    geometry.rotate_x(FRAC_PI_2);
    let material = three::MeshStandardMaterial::new(&object(&[
        ("color", 0x111111.into()),
        ("roughness", 0.8.into()),
    ]));

    WHEEL_CONNECTIONS
        .iter()
        .map(|_| {
            let mesh = three::Mesh::new(&geometry, &material);
            mesh.set_cast_shadow(true);
            scene.add(&mesh);
            mesh
        })
        .collect()
}

fn load_car_model(
    manager: &three::LoadingManager,
    scene: &three::Scene,
    chassis_mesh: &Rc<RefCell<Option<three::Object3D>>>,
) {
    let scene = scene.clone();
    let chassis_mesh = chassis_mesh.clone();
    let on_load = Closure::once_into_js(move |gltf: JsValue| {
        let model = gltf.unchecked_into::<three::Gltf>().scene();
        model.scale().set(0.5, 0.5, 0.5);
        scene.add(&model);
        *chassis_mesh.borrow_mut() = Some(model);
    });
    let on_error = Closure::once_into_js(|err: JsValue| {
        log::warn!("car model failed to load; driving without a body: {err:?}");
    });

    three::GLTFLoader::new(manager).load(MODEL_URL, &on_load, &JsValue::UNDEFINED, &on_error);
}

fn track_keys(keys: &Rc<RefCell<KeyState>>) {
    let Some(target) = dom::window_target() else {
        return;
    };

    let pressed = keys.clone();
    Listener::new(&target, "keydown", move |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            pressed.borrow_mut().press(&event.key());
        }
    })
    .forget();

    let released = keys.clone();
    Listener::new(&target, "keyup", move |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            released.borrow_mut().release(&event.key());
        }
    })
    .forget();
}

fn track_resize(camera: &three::PerspectiveCamera, renderer: &three::WebGLRenderer) {
    let Some(target) = dom::window_target() else {
        return;
    };

    let camera = camera.clone();
    let renderer = renderer.clone();
    Listener::new(&target, "resize", move |_| {
        let (width, height) = dom::viewport_size();
        camera.set_aspect(width / height);
        camera.update_projection_matrix();
        renderer.set_size(width, height);
    })
    .forget();
}

fn bind_close_button() {
    let Some(button) = dom::query(".close-button") else {
        return;
    };

    Listener::new(&button, "click", |_| {
        if let Some(panel) = dom::query(".section-panel") {
            let _ = panel.class_list().remove_1(VISIBLE);
        }
    })
    .forget();
}

pub fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    match DriveScene::new() {
        Ok(mut scene) => {
            log::info!("drive scene ready");
            dom::animation_loop(move |_| scene.frame());
        }
        Err(err) => log::error!("drive demo failed to start: {err:#}"),
    }
}
