#![cfg(target_arch = "wasm32")]

use console_error_panic_hook::set_once as set_panic_hook;
use magnifier::app_router::{options_from_attribute, parse_boot_config_from_query};
use magnifier::{
    ConfigError, Magnifier, MagnifierAction, MagnifierConfig, MagnifierError, MagnifierOptions,
    RenderMode, ToggleTrigger, LENS_CLASS,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

const PIXEL_GIF: &str = "data:image/gif;base64,R0lGODlhAQABAAAAACwAAAAAAQABAAACAkQBADs=";

fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("document available")
}

fn mount_target() -> Element {
    let document = document();
    let img = document.create_element("img").expect("create img");
    img.set_attribute("src", PIXEL_GIF).expect("set src");
    img.set_attribute(
        "style",
        "display:block;position:fixed;left:100px;top:50px;width:200px;height:150px;margin:0;border:0;",
    )
    .expect("set style");
    document
        .body()
        .expect("body available")
        .append_child(&img)
        .expect("append img");
    img
}

fn fire(target: &EventTarget, kind: &str, x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(x);
    init.set_client_y(y);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).expect("mouse event");
    target.dispatch_event(&event).expect("dispatch");
}

fn lens_prop(magnifier: &Magnifier, name: &str) -> String {
    magnifier
        .lens_element()
        .style()
        .get_property_value(name)
        .unwrap_or_default()
}

fn root_cursor() -> String {
    document()
        .document_element()
        .and_then(|root| root.dyn_into::<HtmlElement>().ok())
        .map(|root| root.style().get_property_value("cursor").unwrap_or_default())
        .unwrap_or_default()
}

fn set_target_width(target: &Element, width: &str) {
    target
        .dyn_ref::<HtmlElement>()
        .expect("img is an HTMLElement")
        .style()
        .set_property("width", width)
        .expect("set width");
}

fn set_root_cursor(value: &str) {
    if let Some(root) = document()
        .document_element()
        .and_then(|root| root.dyn_into::<HtmlElement>().ok())
    {
        root.style().set_property("cursor", value).expect("set cursor");
    }
}

fn cleanup(magnifier: Magnifier, target: Element) {
    magnifier.detach();
    target.remove();
}

#[wasm_bindgen_test]
fn rejects_non_image_target() {
    set_panic_hook();
    let div = document().create_element("div").expect("create div");
    let err = Magnifier::new(MagnifierConfig::new(div)).err();
    assert_eq!(err, Some(MagnifierError::Config(ConfigError::TargetNotImage)));
}

#[wasm_bindgen_test]
fn rejects_non_html_lens() {
    set_panic_hook();
    let target = mount_target();
    let svg = document()
        .create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")
        .expect("create svg");
    let err = Magnifier::new(MagnifierConfig::new(target.clone()).with_lens(svg)).err();
    assert_eq!(err, Some(MagnifierError::Config(ConfigError::LensNotElement)));
    target.remove();
}

#[wasm_bindgen_test]
fn creates_hidden_lens_on_body() {
    set_panic_hook();
    let target = mount_target();
    let magnifier = Magnifier::new(MagnifierConfig::new(target.clone())).expect("magnifier");
    let lens = magnifier.lens_element();
    assert_eq!(lens.class_name(), LENS_CLASS);
    assert!(lens.parent_node().is_some());
    assert_eq!(lens_prop(&magnifier, "display"), "none");
    assert_eq!(lens_prop(&magnifier, "position"), "fixed");
    assert_eq!(lens_prop(&magnifier, "width"), "300px");
    assert_eq!(lens_prop(&magnifier, "background-size"), "400px auto");
    assert!(!magnifier.is_visible());
    cleanup(magnifier, target);
}

#[wasm_bindgen_test]
fn click_on_target_shows_and_positions_lens() {
    set_panic_hook();
    let target = mount_target();
    let magnifier = Magnifier::new(MagnifierConfig::new(target.clone())).expect("magnifier");
    fire(target.as_ref(), "click", 150, 80);
    assert!(magnifier.is_visible());
    assert_eq!(lens_prop(&magnifier, "display"), "block");
    assert_eq!(lens_prop(&magnifier, "left"), "150px");
    assert_eq!(lens_prop(&magnifier, "top"), "80px");
    assert_eq!(lens_prop(&magnifier, "background-position-x"), "50px");
    assert_eq!(lens_prop(&magnifier, "background-position-y"), "90px");
    assert_eq!(root_cursor(), "crosshair");

    fire(target.as_ref(), "click", 150, 80);
    assert!(!magnifier.is_visible());
    assert_eq!(lens_prop(&magnifier, "display"), "none");
    cleanup(magnifier, target);
}

#[wasm_bindgen_test]
fn click_elsewhere_hides_lens() {
    set_panic_hook();
    let target = mount_target();
    let magnifier = Magnifier::new(MagnifierConfig::new(target.clone())).expect("magnifier");
    fire(target.as_ref(), "click", 150, 80);
    assert!(magnifier.is_visible());
    let body: EventTarget = document().body().expect("body available").into();
    fire(&body, "click", 150, 80);
    assert!(!magnifier.is_visible());
    assert_eq!(root_cursor(), "unset");
    cleanup(magnifier, target);
}

#[wasm_bindgen_test]
fn leaving_target_hides_lens() {
    set_panic_hook();
    let target = mount_target();
    let magnifier = Magnifier::new(MagnifierConfig::new(target.clone())).expect("magnifier");
    fire(target.as_ref(), "click", 150, 80);
    fire(target.as_ref(), "mousemove", 160, 100);
    assert!(magnifier.is_visible());
    assert_eq!(lens_prop(&magnifier, "left"), "160px");

    let body: EventTarget = document().body().expect("body available").into();
    fire(&body, "mousemove", 20, 20);
    assert!(!magnifier.is_visible());
    assert_eq!(lens_prop(&magnifier, "display"), "none");
    cleanup(magnifier, target);
}

#[wasm_bindgen_test]
fn double_click_trigger_ignores_single_clicks() {
    set_panic_hook();
    let target = mount_target();
    let options = MagnifierOptions {
        trigger: Some(ToggleTrigger::DblClick),
        ..MagnifierOptions::default()
    };
    let magnifier =
        Magnifier::new(MagnifierConfig::new(target.clone()).with_options(options)).expect("magnifier");
    fire(target.as_ref(), "click", 150, 80);
    assert!(!magnifier.is_visible());
    fire(target.as_ref(), "dblclick", 150, 80);
    assert!(magnifier.is_visible());
    cleanup(magnifier, target);
}

#[wasm_bindgen_test]
fn transform_mode_moves_inner_image() {
    set_panic_hook();
    let target = mount_target();
    let options = MagnifierOptions {
        scale: Some(3.0),
        lens_size: Some(200.0),
        mode: Some(RenderMode::Transform),
        ..MagnifierOptions::default()
    };
    let magnifier =
        Magnifier::new(MagnifierConfig::new(target.clone()).with_options(options)).expect("magnifier");
    let inner = magnifier
        .lens_element()
        .first_element_child()
        .and_then(|child| child.dyn_into::<HtmlElement>().ok())
        .expect("inner zoom image");
    assert_eq!(inner.style().get_property_value("width").unwrap_or_default(), "600px");
    fire(target.as_ref(), "click", 150, 125);
    let transform = inner.style().get_property_value("transform").unwrap_or_default();
    assert!(transform.contains("-25%"), "unexpected transform {transform}");
    assert!(transform.contains("-50%"), "unexpected transform {transform}");
    cleanup(magnifier, target);
}

#[wasm_bindgen_test]
fn detach_removes_created_lens() {
    set_panic_hook();
    let target = mount_target();
    let magnifier = Magnifier::new(MagnifierConfig::new(target.clone())).expect("magnifier");
    let lens = magnifier.lens_element();
    magnifier.detach();
    assert!(lens.parent_node().is_none());
    target.remove();
}

#[wasm_bindgen_test]
fn query_overrides_are_parsed() {
    let config = parse_boot_config_from_query("?target=%23hero&scale=3&size=240px&mode=transform&cursor=off");
    assert_eq!(config.target_selector, "#hero");
    assert_eq!(config.options.scale, Some(3.0));
    assert_eq!(config.options.lens_size, Some(240.0));
    assert_eq!(config.options.mode, Some(RenderMode::Transform));
    assert_eq!(config.options.crosshair_cursor, Some(false));

    let fallback = parse_boot_config_from_query("?scale=lots");
    assert_eq!(fallback.target_selector, "#target");
    assert_eq!(fallback.options.scale, None);
}

#[wasm_bindgen_test]
fn data_attribute_options_are_read() {
    let target = mount_target();
    target
        .set_attribute("data-magnifier", r#"{"scale": 4, "magnifierSize": 120}"#)
        .expect("set attribute");
    let settings = options_from_attribute(&target).resolve();
    assert_eq!(settings.scale, 4.0);
    assert_eq!(settings.lens_size, 120.0);
    target.remove();
}

#[wasm_bindgen_test]
fn dispatched_resize_rescales_background() {
    set_panic_hook();
    let target = mount_target();
    let magnifier = Magnifier::new(MagnifierConfig::new(target.clone())).expect("magnifier");
    fire(target.as_ref(), "click", 150, 80);
    set_target_width(&target, "120px");
    let update = magnifier.dispatch(MagnifierAction::Resize);
    assert!(update.resized);
    assert!(!update.visibility_changed);
    assert!(magnifier.is_visible());
    assert_eq!(lens_prop(&magnifier, "background-size"), "240px auto");
    cleanup(magnifier, target);
}

#[wasm_bindgen_test]
fn window_resize_event_rescales_background() {
    set_panic_hook();
    let target = mount_target();
    let magnifier = Magnifier::new(MagnifierConfig::new(target.clone())).expect("magnifier");
    set_target_width(&target, "250px");
    let window: EventTarget = web_sys::window().expect("window available").into();
    let event = Event::new("resize").expect("resize event");
    window.dispatch_event(&event).expect("dispatch");
    assert!(!magnifier.is_visible());
    assert_eq!(lens_prop(&magnifier, "background-size"), "500px auto");
    cleanup(magnifier, target);
}

#[wasm_bindgen_test]
fn resize_while_hidden_keeps_page_cursor() {
    set_panic_hook();
    set_root_cursor("wait");
    let target = mount_target();
    let magnifier = Magnifier::new(MagnifierConfig::new(target.clone())).expect("magnifier");
    set_target_width(&target, "260px");
    magnifier.dispatch(MagnifierAction::Resize);
    assert_eq!(root_cursor(), "wait");
    cleanup(magnifier, target);
    assert_eq!(root_cursor(), "wait");
    set_root_cursor("unset");
}
