//! Browser glue: DOM access through `web-sys`, Chart.js and Prism through
//! `wasm-bindgen` externs, and the event wiring for the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, HtmlTextAreaElement};

use crate::chart::{ChartBackend, ChartHandle, LineChartConfig};
use crate::client::HttpAnalysisClient;
use crate::controller::{run_submission, Frontend};
use crate::error::UiError;
use crate::page::{ids, Page, HIDDEN_CLASS};
use crate::render::Highlighter;

#[wasm_bindgen]
extern "C" {
    /// Chart.js `Chart` class, loaded from the page's `<script>` tag.
    #[wasm_bindgen(js_name = Chart)]
    type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(ctx: &CanvasRenderingContext2d, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method, js_class = "Chart")]
    fn destroy(this: &JsChart);

    #[wasm_bindgen(method, js_class = "Chart")]
    fn resize(this: &JsChart);

    #[wasm_bindgen(js_namespace = Prism, js_name = highlightAll)]
    fn prism_highlight_all();
}

fn js_err(value: JsValue) -> UiError {
    UiError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

// ── Page ──────────────────────────────────────────────────────────────────────

pub struct DomPage {
    window: web_sys::Window,
    document: Document,
}

impl DomPage {
    pub fn new(window: web_sys::Window, document: Document) -> Self {
        Self { window, document }
    }

    fn element<T: JsCast>(&self, id: &str, expected: &'static str) -> Result<T, UiError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| UiError::MissingElement(id.to_string()))?
            .dyn_into::<T>()
            .map_err(|_| UiError::WrongElement { id: id.to_string(), expected })
    }

    fn set_inner_html(&self, id: &str, html: &str) -> Result<(), UiError> {
        self.element::<HtmlElement>(id, "HTML element")?.set_inner_html(html);
        Ok(())
    }
}

impl Page for DomPage {
    fn code_input(&self) -> Result<String, UiError> {
        Ok(self.element::<HtmlTextAreaElement>(ids::CODE_INPUT, "textarea")?.value())
    }

    fn set_spinner_visible(&mut self, visible: bool) -> Result<(), UiError> {
        let display = if visible { "flex" } else { "none" };
        self.element::<HtmlElement>(ids::SPINNER, "HTML element")?
            .style()
            .set_property("display", display)
            .map_err(js_err)
    }

    fn set_analysis_output(&mut self, html: &str) -> Result<(), UiError> {
        self.set_inner_html(ids::ANALYSIS_OUTPUT, html)
    }

    fn set_optimized_code(&mut self, html: &str) -> Result<(), UiError> {
        self.set_inner_html(ids::OPTIMIZED_CODE, html)
    }

    fn reveal_results(&mut self) -> Result<(), UiError> {
        self.element::<HtmlElement>(ids::ANALYSIS_RESULT, "HTML element")?
            .class_list()
            .remove_1(HIDDEN_CLASS)
            .map_err(js_err)
    }

    fn set_feedback(&mut self, html: &str) -> Result<(), UiError> {
        self.set_inner_html(ids::FEEDBACK_MESSAGE, html)
    }

    fn viewport_width(&self) -> Result<f64, UiError> {
        self.window
            .inner_width()
            .map_err(js_err)?
            .as_f64()
            .ok_or_else(|| UiError::Dom("window.innerWidth is not a number".to_string()))
    }
}

// ── Chart.js ──────────────────────────────────────────────────────────────────

pub struct ChartJs {
    document: Document,
}

struct ChartJsHandle(JsChart);

impl ChartHandle for ChartJsHandle {
    fn resize(&self) {
        self.0.resize();
    }

    fn destroy(self: Box<Self>) {
        self.0.destroy();
    }
}

impl ChartBackend for ChartJs {
    fn create(
        &mut self,
        canvas_id: &str,
        config: &LineChartConfig,
    ) -> Result<Box<dyn ChartHandle>, UiError> {
        let canvas = self.document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| UiError::MissingElement(canvas_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| UiError::WrongElement { id: canvas_id.to_string(), expected: "canvas" })?;
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| UiError::Chart(format!("#{canvas_id} has no 2d context")))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| UiError::Chart(format!("#{canvas_id} context is not 2d")))?;

        let json = serde_json::to_string(config).map_err(|e| UiError::Chart(e.to_string()))?;
        let options = js_sys::JSON::parse(&json).map_err(js_err)?;
        let chart = JsChart::new(&ctx, &options).map_err(|e| UiError::Chart(js_err(e).to_string()))?;
        Ok(Box::new(ChartJsHandle(chart)))
    }
}

// ── Prism ─────────────────────────────────────────────────────────────────────

pub struct Prism;

impl Highlighter for Prism {
    fn highlight_all(&mut self) {
        prism_highlight_all();
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

type BrowserFrontend = Frontend<DomPage, ChartJs, Prism>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("console_log init failed: {e}")));
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    if document.get_element_by_id(ids::CODE_FORM).is_some() {
        return mount(window, document);
    }

    // Loaded before the body was parsed: wait for DOMContentLoaded.
    let target = document.clone();
    let on_ready = Closure::once(move || {
        if let Err(e) = mount(window, document) {
            tracing::error!("Mounting analysis UI failed: {e:?}");
        }
    });
    target.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

fn mount(window: web_sys::Window, document: Document) -> Result<(), JsValue> {
    let origin = window.location().origin()?;
    let client = Rc::new(HttpAnalysisClient::new(&origin));
    let frontend: Rc<RefCell<BrowserFrontend>> = Rc::new(RefCell::new(Frontend::new(
        DomPage::new(window.clone(), document.clone()),
        ChartJs { document: document.clone() },
        Prism,
    )));

    let form = document
        .get_element_by_id(ids::CODE_FORM)
        .ok_or_else(|| JsValue::from_str("missing #codeForm"))?;

    let on_submit = {
        let frontend = frontend.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            let frontend = frontend.clone();
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                run_submission(&frontend, client.as_ref()).await;
            });
        })
    };
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    let on_resize = Closure::<dyn FnMut()>::new(move || {
        frontend.borrow().on_resize();
    });
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    tracing::info!(endpoint = %origin, "Analysis UI mounted");
    Ok(())
}
