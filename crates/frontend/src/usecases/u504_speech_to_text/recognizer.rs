//! On-device speech recognition.
//!
//! The constructor is vendor-prefixed in some browsers and has no web-sys
//! binding, so the object is driven through `Reflect`.

use crate::shared::constants::RECOGNIZER_LANG;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

const CONSTRUCTORS: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

fn get(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

/// `(is_final, transcript)` for every result from the event's `resultIndex` on.
fn result_pairs(event: &JsValue) -> Vec<(bool, String)> {
    let start = get(event, "resultIndex").as_f64().unwrap_or(0.0) as u32;
    let results = get(event, "results");
    let len = get(&results, "length").as_f64().unwrap_or(0.0) as u32;

    (start..len)
        .filter_map(|i| {
            let result = Reflect::get_u32(&results, i).ok()?;
            let is_final = get(&result, "isFinal").as_bool().unwrap_or(false);
            let best = Reflect::get_u32(&result, 0).ok()?;
            let text = get(&best, "transcript").as_string()?;
            Some((is_final, text))
        })
        .collect()
}

/// Continuous recognizer with interim results.
pub struct Recognizer {
    inner: JsValue,
}

impl Recognizer {
    /// `None` when the browser has no speech recognition.
    pub fn create() -> Option<Self> {
        let window = web_sys::window()?;
        let ctor: Function = CONSTRUCTORS
            .iter()
            .map(|name| get(&window, name))
            .find(JsValue::is_function)?
            .unchecked_into();
        let inner = Reflect::construct(&ctor, &Array::new()).ok()?;

        let recognizer = Self { inner };
        recognizer.set("continuous", &JsValue::TRUE);
        recognizer.set("interimResults", &JsValue::TRUE);
        recognizer.set("lang", &JsValue::from_str(RECOGNIZER_LANG));
        Some(recognizer)
    }

    fn set(&self, key: &str, value: &JsValue) {
        let _ = Reflect::set(&self.inner, &JsValue::from_str(key), value);
    }

    fn call(&self, method: &str) -> Result<(), JsValue> {
        let f: Function = get(&self.inner, method).dyn_into()?;
        f.call0(&self.inner).map(|_| ())
    }

    pub fn start(&self) -> Result<(), JsValue> {
        self.call("start")
    }

    pub fn stop(&self) {
        if let Err(e) = self.call("stop") {
            log::debug!("recognizer stop: {:?}", e);
        }
    }

    pub fn on_result(&self, mut handler: impl FnMut(Vec<(bool, String)>) + 'static) {
        let closure = Closure::wrap(Box::new(move |event: JsValue| {
            handler(result_pairs(&event));
        }) as Box<dyn FnMut(JsValue)>);
        self.set("onresult", closure.as_ref());
        closure.forget();
    }

    /// `handler` receives the error code, e.g. `not-allowed` or `no-speech`.
    pub fn on_error(&self, mut handler: impl FnMut(Option<String>) + 'static) {
        let closure = Closure::wrap(Box::new(move |event: JsValue| {
            handler(get(&event, "error").as_string());
        }) as Box<dyn FnMut(JsValue)>);
        self.set("onerror", closure.as_ref());
        closure.forget();
    }

    pub fn on_end(&self, mut handler: impl FnMut() + 'static) {
        let closure = Closure::wrap(Box::new(move |_event: JsValue| {
            handler();
        }) as Box<dyn FnMut(JsValue)>);
        self.set("onend", closure.as_ref());
        closure.forget();
    }
}
