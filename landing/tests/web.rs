//! Browser tests for the DOM glue. Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]

use leptos::mount::mount_to;
use leptos::prelude::*;
use nomofobia_core::{PageVariant, ScrollBehavior, SectionLayout, Viewport};
use nomofobia_landing::dom::DomViewport;
use nomofobia_landing::reveal::{
    Reveal, is_observed, is_revealed, mark_revealed, observe, observed_count, unobserve,
};
use nomofobia_landing::{CONFIG_ELEMENT_ID, load_config};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Appends an element to `<body>`; the caller removes it.
fn append(tag: &str, id: &str) -> Element {
    let document = document();
    let element = document.create_element(tag).unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

/// Container pinned to the top of the page, scrolled into view.
fn top_host(id: &str) -> HtmlElement {
    let _ = leptos::task::Executor::init_wasm_bindgen();
    let document = document();
    let host = document.create_element("div").unwrap();
    host.set_id(id);
    document.body().unwrap().prepend_with_node_1(&host).unwrap();
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    host.unchecked_into()
}

/// Lets effects and observer callbacks run.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 150)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn missing_anchor_has_no_bounds() {
    let mut viewport = DomViewport;
    assert_eq!(viewport.bounds("no-such-section"), None);
    assert!(!viewport.scroll_to_anchor("no-such-section", ScrollBehavior::Instant));
}

#[wasm_bindgen_test]
fn rendered_anchor_reports_its_height() {
    let section = append("section", "web-test-section");
    section
        .set_attribute("style", "display: block; height: 240px; margin: 0;")
        .unwrap();

    let bounds = DomViewport.bounds("web-test-section").expect("rendered section");
    assert_eq!(bounds.height, 240.0);
    assert!(bounds.top >= 0.0);
    assert!(DomViewport.has_anchor("web-test-section"));

    let mut viewport = DomViewport;
    assert!(viewport.scroll_to_anchor("web-test-section", ScrollBehavior::Instant));

    section.remove();
}

#[wasm_bindgen_test]
fn scroll_to_top_resets_offset() {
    let spacer = append("div", "web-test-spacer");
    spacer.set_attribute("style", "height: 5000px;").unwrap();
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 1200.0);

    let mut viewport = DomViewport;
    viewport.scroll_to_top(ScrollBehavior::Instant);
    assert_eq!(viewport.scroll_y(), 0.0);

    spacer.remove();
}

#[wasm_bindgen_test]
fn config_defaults_without_element() {
    let config = load_config().expect("defaults");
    assert_eq!(config.variant, PageVariant::Split);
    assert_eq!(config.header_offset, 100.0);
}

#[wasm_bindgen_test]
fn config_reads_inline_script() {
    let script = append("script", CONFIG_ELEMENT_ID);
    script.set_attribute("type", "application/json").unwrap();
    script.set_text_content(Some(r#"{"variant": "merged", "scroll_top_threshold": 500}"#));

    let config = load_config().expect("valid config");
    assert_eq!(config.variant, PageVariant::Merged);
    assert_eq!(config.scroll_top_threshold, 500.0);

    script.remove();
}

#[wasm_bindgen_test]
fn invalid_config_is_reported() {
    let script = append("script", CONFIG_ELEMENT_ID);
    script.set_attribute("type", "application/json").unwrap();
    script.set_text_content(Some(r#"{"header_offset": "lots"}"#));

    assert!(load_config().is_err());

    script.remove();
}

// ============================================================================
// Reveal animations
// ============================================================================

#[wasm_bindgen_test]
fn mark_revealed_adds_class() {
    let element = append("div", "web-test-mark");
    assert!(!is_revealed(&element));

    mark_revealed(&element);
    mark_revealed(&element);
    assert!(is_revealed(&element));
    assert_eq!(element.class_list().length(), 1);

    element.remove();
}

#[wasm_bindgen_test]
async fn observed_element_in_view_is_revealed_once() {
    let host = top_host("web-test-observe-host");
    host.set_text_content(Some("in view"));

    let watch = observe(&host).expect("observer available");
    assert!(is_observed(&host));

    settle().await;
    assert!(is_revealed(&host));
    assert!(!is_observed(&host));

    // Already released by the observer callback
    let remaining = observed_count();
    unobserve(watch);
    assert_eq!(observed_count(), remaining);

    host.remove();
}

#[wasm_bindgen_test]
async fn unobserve_releases_element_below_the_fold() {
    let element = append("div", "web-test-below-fold");
    element
        .set_attribute("style", "position: absolute; top: 20000px; height: 10px;")
        .unwrap();
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);

    let watch = observe(&element).expect("observer available");
    settle().await;
    assert!(!is_revealed(&element));
    assert!(is_observed(&element));

    unobserve(watch);
    assert!(!is_observed(&element));

    element.remove();
}

#[wasm_bindgen_test]
async fn mounted_reveal_in_view_gets_revealed_class() {
    let host = top_host("web-test-reveal-host");
    let handle = mount_to(host.clone(), || {
        view! {
            <Reveal class="web-test-visible">
                <p>"Visible from the start"</p>
            </Reveal>
        }
    });

    settle().await;
    let block = host
        .query_selector(".web-test-visible")
        .unwrap()
        .expect("mounted block");
    assert!(is_revealed(&block));
    assert!(!is_observed(&block));

    drop(handle);
    host.remove();
}

#[wasm_bindgen_test]
async fn unmounted_reveal_is_no_longer_observed() {
    let host = top_host("web-test-unmount-host");
    let before = observed_count();
    let handle = mount_to(host.clone(), || {
        view! {
            <div style="height: 20000px;"></div>
            <Reveal class="web-test-hidden">
                <p>"Never scrolled into view"</p>
            </Reveal>
        }
    });

    settle().await;
    let block = host
        .query_selector(".web-test-hidden")
        .unwrap()
        .expect("mounted block");
    assert!(!is_revealed(&block));
    assert!(is_observed(&block));
    assert_eq!(observed_count(), before + 1);

    // Same path as a mode switch swapping the content block out
    drop(handle);
    settle().await;
    assert!(!is_observed(&block));
    assert_eq!(observed_count(), before);

    host.remove();
}
