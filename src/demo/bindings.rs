//! Bindings for the parts of three.js and cannon-es the demo touches. Both
//! libraries are expected as the `THREE` and `CANNON` globals; the loader and
//! text addons are expected on `THREE` too.

pub mod three {
    use wasm_bindgen::prelude::*;

    /// `THREE.PCFSoftShadowMap`.
    pub const PCF_SOFT_SHADOW_MAP: u32 = 2;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = THREE)]
        #[derive(Clone)]
        pub type Object3D;

        #[wasm_bindgen(method, getter)]
        pub fn position(this: &Object3D) -> Vector3;

        #[wasm_bindgen(method, getter)]
        pub fn quaternion(this: &Object3D) -> Quaternion;

        #[wasm_bindgen(method, getter)]
        pub fn rotation(this: &Object3D) -> Euler;

        #[wasm_bindgen(method, getter)]
        pub fn scale(this: &Object3D) -> Vector3;

        #[wasm_bindgen(method)]
        pub fn add(this: &Object3D, child: &Object3D);

        #[wasm_bindgen(method, js_name = lookAt)]
        pub fn look_at(this: &Object3D, x: f64, y: f64, z: f64);

        #[wasm_bindgen(method, setter, js_name = castShadow)]
        pub fn set_cast_shadow(this: &Object3D, value: bool);

        #[wasm_bindgen(method, setter, js_name = receiveShadow)]
        pub fn set_receive_shadow(this: &Object3D, value: bool);

        #[wasm_bindgen(js_namespace = THREE)]
        pub type Vector3;

        #[wasm_bindgen(method, getter)]
        pub fn x(this: &Vector3) -> f64;
        #[wasm_bindgen(method, getter)]
        pub fn y(this: &Vector3) -> f64;
        #[wasm_bindgen(method, getter)]
        pub fn z(this: &Vector3) -> f64;

        #[wasm_bindgen(method)]
        pub fn set(this: &Vector3, x: f64, y: f64, z: f64);

        #[wasm_bindgen(js_namespace = THREE)]
        pub type Vector2;

        #[wasm_bindgen(method)]
        pub fn set(this: &Vector2, x: f64, y: f64);

        #[wasm_bindgen(js_namespace = THREE)]
        pub type Quaternion;

        #[wasm_bindgen(method)]
        pub fn set(this: &Quaternion, x: f64, y: f64, z: f64, w: f64);

        #[wasm_bindgen(js_namespace = THREE)]
        pub type Euler;

        #[wasm_bindgen(method, setter)]
        pub fn set_x(this: &Euler, value: f64);

        #[wasm_bindgen(js_namespace = THREE)]
        pub type Color;

        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(hex: u32) -> Color;

        #[wasm_bindgen(js_namespace = THREE)]
        pub type Fog;

        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(color: &Color, near: f64, far: f64) -> Fog;

        #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
        #[derive(Clone)]
        pub type Scene;

        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new() -> Scene;

        #[wasm_bindgen(method, setter)]
        pub fn set_background(this: &Scene, color: &Color);

        #[wasm_bindgen(method, setter)]
        pub fn set_fog(this: &Scene, fog: &Fog);

        #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
        #[derive(Clone)]
        pub type PerspectiveCamera;

        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(fov: f64, aspect: f64, near: f64, far: f64) -> PerspectiveCamera;

        #[wasm_bindgen(method, setter)]
        pub fn set_aspect(this: &PerspectiveCamera, aspect: f64);

        #[wasm_bindgen(method, js_name = updateProjectionMatrix)]
        pub fn update_projection_matrix(this: &PerspectiveCamera);

        #[wasm_bindgen(js_namespace = THREE)]
        #[derive(Clone)]
        pub type WebGLRenderer;

        #[wasm_bindgen(constructor, catch, js_namespace = THREE)]
        pub fn new(options: &JsValue) -> Result<WebGLRenderer, JsValue>;

        #[wasm_bindgen(method, js_name = setSize)]
        pub fn set_size(this: &WebGLRenderer, width: f64, height: f64);

        #[wasm_bindgen(method, js_name = setPixelRatio)]
        pub fn set_pixel_ratio(this: &WebGLRenderer, ratio: f64);

        #[wasm_bindgen(method)]
        pub fn render(this: &WebGLRenderer, scene: &Scene, camera: &PerspectiveCamera);

        #[wasm_bindgen(method, getter, js_name = shadowMap)]
        pub fn shadow_map(this: &WebGLRenderer) -> ShadowMap;

        pub type ShadowMap;

        #[wasm_bindgen(method, setter)]
        pub fn set_enabled(this: &ShadowMap, enabled: bool);

        #[wasm_bindgen(method, setter, js_name = type)]
        pub fn set_type(this: &ShadowMap, kind: u32);

        #[wasm_bindgen(js_namespace = THREE)]
        pub type Clock;

        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new() -> Clock;

        #[wasm_bindgen(method, js_name = getDelta)]
        pub fn get_delta(this: &Clock) -> f64;

        #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
        pub type AmbientLight;

        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(color: u32, intensity: f64) -> AmbientLight;

        #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
        pub type DirectionalLight;

        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(color: u32, intensity: f64) -> DirectionalLight;

        #[wasm_bindgen(method, getter)]
        pub fn shadow(this: &DirectionalLight) -> LightShadow;

        pub type LightShadow;

        #[wasm_bindgen(method, getter, js_name = mapSize)]
        pub fn map_size(this: &LightShadow) -> Vector2;

        #[wasm_bindgen(js_namespace = THREE)]
        pub type BufferGeometry;

        #[wasm_bindgen(method, js_name = rotateX)]
        pub fn rotate_x(this: &BufferGeometry, angle: f64);

        #[wasm_bindgen(method)]
        pub fn center(this: &BufferGeometry);

        #[wasm_bindgen(extends = BufferGeometry, js_namespace = THREE)]
        pub type PlaneGeometry;

        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(width: f64, height: f64) -> PlaneGeometry;

        #[wasm_bindgen(extends = BufferGeometry, js_namespace = THREE)]
        pub type CylinderGeometry;

        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(
            radius_top: f64,
            radius_bottom: f64,
            height: f64,
            radial_segments: u32,
        ) -> CylinderGeometry;

        #[wasm_bindgen(extends = BufferGeometry, js_namespace = THREE)]
        pub type TextGeometry;

        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(text: &str, parameters: &JsValue) -> TextGeometry;

        #[wasm_bindgen(js_namespace = THREE)]
        pub type MeshStandardMaterial;

        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(parameters: &JsValue) -> MeshStandardMaterial;

        #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
        pub type Mesh;

        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(geometry: &BufferGeometry, material: &MeshStandardMaterial) -> Mesh;

        #[wasm_bindgen(js_namespace = THREE)]
        pub type LoadingManager;

        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new() -> LoadingManager;

        #[wasm_bindgen(method, setter, js_name = onProgress)]
        pub fn set_on_progress(this: &LoadingManager, callback: &JsValue);

        #[wasm_bindgen(method, setter, js_name = onLoad)]
        pub fn set_on_load(this: &LoadingManager, callback: &JsValue);

        #[wasm_bindgen(js_namespace = THREE)]
        pub type FontLoader;

        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(manager: &LoadingManager) -> FontLoader;

        #[wasm_bindgen(method)]
        pub fn load(
            this: &FontLoader,
            url: &str,
            on_load: &JsValue,
            on_progress: &JsValue,
            on_error: &JsValue,
        );

        #[wasm_bindgen(js_namespace = THREE)]
        pub type GLTFLoader;

        #[wasm_bindgen(constructor, js_namespace = THREE)]
        pub fn new(manager: &LoadingManager) -> GLTFLoader;

        #[wasm_bindgen(method)]
        pub fn load(
            this: &GLTFLoader,
            url: &str,
            on_load: &JsValue,
            on_progress: &JsValue,
            on_error: &JsValue,
        );

        /// The object handed to a `GLTFLoader` load callback.
        pub type Gltf;

        #[wasm_bindgen(method, getter)]
        pub fn scene(this: &Gltf) -> Object3D;
    }
}

pub mod cannon {
    use js_sys::Array;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = CANNON)]
        pub type Vec3;

        #[wasm_bindgen(constructor, js_namespace = CANNON)]
        pub fn new(x: f64, y: f64, z: f64) -> Vec3;

        #[wasm_bindgen(method, getter)]
        pub fn x(this: &Vec3) -> f64;
        #[wasm_bindgen(method, getter)]
        pub fn y(this: &Vec3) -> f64;
        #[wasm_bindgen(method, getter)]
        pub fn z(this: &Vec3) -> f64;

        #[wasm_bindgen(method)]
        pub fn set(this: &Vec3, x: f64, y: f64, z: f64);

        #[wasm_bindgen(js_namespace = CANNON)]
        pub type Quaternion;

        #[wasm_bindgen(method, getter)]
        pub fn x(this: &Quaternion) -> f64;
        #[wasm_bindgen(method, getter)]
        pub fn y(this: &Quaternion) -> f64;
        #[wasm_bindgen(method, getter)]
        pub fn z(this: &Quaternion) -> f64;
        #[wasm_bindgen(method, getter)]
        pub fn w(this: &Quaternion) -> f64;

        #[wasm_bindgen(method)]
        pub fn set(this: &Quaternion, x: f64, y: f64, z: f64, w: f64);

        #[wasm_bindgen(method, js_name = setFromEuler)]
        pub fn set_from_euler(this: &Quaternion, x: f64, y: f64, z: f64);

        #[wasm_bindgen(js_namespace = CANNON)]
        pub type World;

        #[wasm_bindgen(constructor, js_namespace = CANNON)]
        pub fn new() -> World;

        #[wasm_bindgen(method, getter)]
        pub fn gravity(this: &World) -> Vec3;

        #[wasm_bindgen(method, setter)]
        pub fn set_broadphase(this: &World, broadphase: &SapBroadphase);

        #[wasm_bindgen(method, getter)]
        pub fn solver(this: &World) -> Solver;

        #[wasm_bindgen(method, js_name = addBody)]
        pub fn add_body(this: &World, body: &Body);

        #[wasm_bindgen(method)]
        pub fn step(this: &World, fixed_time_step: f64, time_since_last_called: f64, max_sub_steps: u32);

        pub type Solver;

        #[wasm_bindgen(method, setter)]
        pub fn set_iterations(this: &Solver, iterations: u32);

        #[wasm_bindgen(js_namespace = CANNON, js_name = SAPBroadphase)]
        pub type SapBroadphase;

        #[wasm_bindgen(constructor, js_namespace = CANNON, js_class = SAPBroadphase)]
        pub fn new(world: &World) -> SapBroadphase;

        #[wasm_bindgen(js_namespace = CANNON)]
        pub type Material;

        #[wasm_bindgen(constructor, js_namespace = CANNON)]
        pub fn new(name: &str) -> Material;

        #[wasm_bindgen(js_namespace = CANNON)]
        #[derive(Clone)]
        pub type Body;

        #[wasm_bindgen(constructor, js_namespace = CANNON)]
        pub fn new(options: &JsValue) -> Body;

        #[wasm_bindgen(method, js_name = addShape)]
        pub fn add_shape(this: &Body, shape: &JsValue);

        #[wasm_bindgen(method, getter)]
        pub fn position(this: &Body) -> Vec3;

        #[wasm_bindgen(method, getter)]
        pub fn quaternion(this: &Body) -> Quaternion;

        #[wasm_bindgen(method, getter)]
        pub fn velocity(this: &Body) -> Vec3;

        #[wasm_bindgen(method, getter, js_name = angularVelocity)]
        pub fn angular_velocity(this: &Body) -> Vec3;

        #[wasm_bindgen(js_namespace = CANNON)]
        pub type Plane;

        #[wasm_bindgen(constructor, js_namespace = CANNON)]
        pub fn new() -> Plane;

        #[wasm_bindgen(js_namespace = CANNON, js_name = Box)]
        pub type BoxShape;

        #[wasm_bindgen(constructor, js_namespace = CANNON, js_class = Box)]
        pub fn new(half_extents: &Vec3) -> BoxShape;

        #[wasm_bindgen(js_namespace = CANNON)]
        pub type RaycastVehicle;

        #[wasm_bindgen(constructor, js_namespace = CANNON)]
        pub fn new(options: &JsValue) -> RaycastVehicle;

        #[wasm_bindgen(method, js_name = addWheel)]
        pub fn add_wheel(this: &RaycastVehicle, options: &JsValue) -> u32;

        #[wasm_bindgen(method, js_name = setSteeringValue)]
        pub fn set_steering_value(this: &RaycastVehicle, value: f64, wheel: u32);

        #[wasm_bindgen(method, js_name = applyEngineForce)]
        pub fn apply_engine_force(this: &RaycastVehicle, force: f64, wheel: u32);

        #[wasm_bindgen(method, js_name = addToWorld)]
        pub fn add_to_world(this: &RaycastVehicle, world: &World);

        #[wasm_bindgen(method, getter, js_name = chassisBody)]
        pub fn chassis_body(this: &RaycastVehicle) -> Body;

        #[wasm_bindgen(method, getter, js_name = wheelInfos)]
        pub fn wheel_infos(this: &RaycastVehicle) -> Array;

        pub type WheelInfo;

        #[wasm_bindgen(method, setter, js_name = frictionSlip)]
        pub fn set_friction_slip(this: &WheelInfo, value: f64);

        #[wasm_bindgen(method, getter, js_name = worldTransform)]
        pub fn world_transform(this: &WheelInfo) -> Transform;

        pub type Transform;

        #[wasm_bindgen(method, getter)]
        pub fn position(this: &Transform) -> Vec3;

        #[wasm_bindgen(method, getter)]
        pub fn quaternion(this: &Transform) -> Quaternion;
    }
}
