use std::rc::Rc;

use yew::prelude::*;

use crate::permissions::{CameraManager, LocationManager};
use crate::utils::geolocation::BrowserGeolocation;
use crate::utils::media::BrowserCamera;

pub type BrowserCameraManager = CameraManager<BrowserCamera>;
pub type BrowserLocationManager = LocationManager<BrowserGeolocation>;

/// Camera lifecycle bound to the calling component. The stream is released
/// when the component unmounts, whatever state it is in.
#[hook]
pub fn use_camera() -> Rc<BrowserCameraManager> {
    let update = use_force_update();
    let camera = use_memo(
        move |_| CameraManager::new(BrowserCamera).observe(move || update.force_update()),
        (),
    );
    {
        let camera = camera.clone();
        use_effect_with_deps(move |_| move || camera.teardown(), ());
    }
    camera
}

#[hook]
pub fn use_location() -> Rc<BrowserLocationManager> {
    let update = use_force_update();
    use_memo(
        move |_| LocationManager::new(BrowserGeolocation).observe(move || update.force_update()),
        (),
    )
}
