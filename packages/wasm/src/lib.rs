use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use roadmap_dashboard::{
    annotate_project_links, fix_svg_units, layout_rows, ImageFormat, PreferenceStore,
    PrivacyNotice, Project, RenderConfig, RenderRequest, RowVisibility, TimelineGeometry,
};
use roadmap_editor::{
    find_indentation_errors, normalize_paste, ClickTarget, EditorConfig, EditorSession,
    FeedbackState, FormFields, InputEvent, Key, Modifiers, Selection,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = localStorage, js_name = getItem)]
    fn local_storage_get(key: &str) -> Option<String>;

    #[wasm_bindgen(js_namespace = localStorage, js_name = setItem)]
    fn local_storage_set(key: &str, value: &str);
}

/// `window.localStorage` as a preference store
struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage_get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        local_storage_set(key, value);
    }
}

/// Outline editor bound to a page's textarea
///
/// Offsets are UTF-16 code units, as used by DOM selections.
#[wasm_bindgen]
pub struct RoadmapEditor {
    session: EditorSession<FeedbackState>,
}

#[wasm_bindgen]
impl RoadmapEditor {
    /// `fields_json` holds the form's initial `title`, `dateFormat` and
    /// `baseUrl`, restored in part by the reset button
    #[wasm_bindgen(constructor)]
    pub fn new(
        text: &str,
        config_json: Option<String>,
        fields_json: Option<String>,
    ) -> Result<RoadmapEditor, JsValue> {
        let config = match config_json {
            Some(json) => EditorConfig::from_json(&json)
                .map_err(|e| JsValue::from_str(&format!("Config error: {}", e)))?,
            None => EditorConfig::default(),
        };

        let fields: FormFields = match fields_json {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| JsValue::from_str(&format!("Form fields error: {}", e)))?,
            None => FormFields::default(),
        };

        Ok(RoadmapEditor {
            session: EditorSession::with_state(text, config).with_fields(fields),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.session.fields().title.clone()
    }

    #[wasm_bindgen(getter, js_name = dateFormat)]
    pub fn date_format(&self) -> String {
        self.session.fields().date_format.clone()
    }

    #[wasm_bindgen(getter, js_name = baseUrl)]
    pub fn base_url(&self) -> String {
        self.session.fields().base_url.clone()
    }

    /// Sync form fields edited natively on the page
    #[wasm_bindgen(js_name = setFormFields)]
    pub fn set_form_fields(&mut self, title: &str, date_format: &str, base_url: &str) {
        self.session
            .set_fields(FormFields::new(title, date_format, base_url));
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.session.text().to_string()
    }

    #[wasm_bindgen(getter, js_name = selectionStart)]
    pub fn selection_start(&self) -> u32 {
        utf16_offset(self.session.text(), self.session.selection().start)
    }

    #[wasm_bindgen(getter, js_name = selectionEnd)]
    pub fn selection_end(&self) -> u32 {
        utf16_offset(self.session.text(), self.session.selection().end)
    }

    #[wasm_bindgen(js_name = setSelection)]
    pub fn set_selection(&mut self, start: u32, end: u32) {
        let text = self.session.text();
        let selection = Selection::new(char_offset(text, start), char_offset(text, end));
        self.session.set_selection(selection);
    }

    /// Sync text typed natively into the textarea
    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, text: &str) {
        self.session.set_text(text);
    }

    /// Returns whether the native paste must be prevented
    #[wasm_bindgen(js_name = handlePaste)]
    pub fn handle_paste(&mut self, text: &str, now_ms: f64) -> bool {
        self.session
            .handle(InputEvent::paste(text), millis(now_ms))
            .prevent_default
    }

    /// Returns whether the native key press must be prevented
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
        now_ms: f64,
    ) -> bool {
        let modifiers = Modifiers {
            ctrl,
            shift,
            alt,
            meta,
        };

        self.session
            .handle(
                InputEvent::key_with(Key::from_dom_key(key), modifiers),
                millis(now_ms),
            )
            .prevent_default
    }

    /// Handle a button click (`reset`, `loadExample` or `submit`)
    pub fn click(&mut self, target: &str, now_ms: f64) -> Result<bool, JsValue> {
        let target: ClickTarget = target
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;

        Ok(self
            .session
            .handle(InputEvent::click(target), millis(now_ms))
            .prevent_default)
    }

    pub fn validate(&mut self, now_ms: f64) -> bool {
        self.session.validate(millis(now_ms)).is_valid()
    }

    pub fn tick(&mut self, now_ms: f64) {
        self.session.tick(millis(now_ms));
    }

    pub fn undo(&mut self) -> bool {
        self.session.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.session.redo()
    }

    /// 1-based lines with invalid indentation
    #[wasm_bindgen(js_name = errorLines)]
    pub fn error_lines(&self) -> Vec<u32> {
        self.session
            .report()
            .error_lines
            .iter()
            .map(|l| *l as u32 + 1)
            .collect()
    }

    /// Message currently shown under the field, if any
    pub fn message(&self) -> Option<String> {
        let state = self.session.surface();
        state
            .invalid_message
            .clone()
            .or_else(|| state.valid_message.clone())
    }

    #[wasm_bindgen(js_name = saveDisabled)]
    pub fn save_disabled(&self) -> bool {
        !self.session.surface().save_enabled
    }

    #[wasm_bindgen(js_name = wasValidated)]
    pub fn was_validated(&self) -> bool {
        self.session.surface().was_validated
    }

    #[wasm_bindgen(js_name = startSaveCooldown)]
    pub fn start_save_cooldown(&mut self, now_ms: f64) {
        self.session.start_save_cooldown(millis(now_ms));
    }

    /// Whole feedback state as JSON
    #[wasm_bindgen(js_name = feedbackJson)]
    pub fn feedback_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.surface())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

/// 1-based lines with invalid indentation
#[wasm_bindgen(js_name = validateOutline)]
pub fn validate_outline(text: &str) -> Vec<u32> {
    find_indentation_errors(text)
        .into_iter()
        .map(|l| l as u32 + 1)
        .collect()
}

#[wasm_bindgen(js_name = normalizePaste)]
pub fn normalize_paste_js(text: &str) -> Result<String, JsValue> {
    normalize_paste(text).map_err(|e| JsValue::from_str(&e.user_message()))
}

#[derive(Serialize)]
struct RenderLink {
    format: ImageFormat,
    url: String,
}

/// Render URLs for every image format, as a JSON array
#[wasm_bindgen(js_name = renderUrls)]
pub fn render_urls(origin: &str, pathname: &str, width: u32) -> Result<String, JsValue> {
    let request = RenderRequest::new(origin, pathname, width, &RenderConfig::default());
    let links: Vec<RenderLink> = request
        .urls()
        .into_iter()
        .map(|(format, url)| RenderLink { format, url })
        .collect();

    serde_json::to_string(&links)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Table rows for a project tree, as JSON
#[wasm_bindgen(js_name = layoutProjects)]
pub fn layout_projects(json: &str) -> Result<String, JsValue> {
    let root = Project::from_json(json).map_err(|e| JsValue::from_str(&format!("{}", e)))?;

    serde_json::to_string(&layout_rows(&root))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Collapse state of the project table rows
#[wasm_bindgen]
pub struct RowToggler {
    rows: RowVisibility,
}

#[wasm_bindgen]
impl RowToggler {
    /// `levels` are the nesting levels of the rows, in table order
    #[wasm_bindgen(constructor)]
    pub fn new(levels: Vec<u32>) -> RowToggler {
        RowToggler {
            rows: RowVisibility::new(levels.into_iter().map(|l| l as usize).collect()),
        }
    }

    pub fn toggle(&mut self, index: u32) {
        self.rows.toggle(index as usize);
    }

    #[wasm_bindgen(js_name = toggleAll)]
    pub fn toggle_all(&mut self) {
        self.rows.toggle_all();
    }

    #[wasm_bindgen(js_name = isVisible)]
    pub fn is_visible(&self, index: u32) -> bool {
        self.rows.is_visible(index as usize)
    }
}

/// Timeline header geometry as JSON; dates are epoch milliseconds
#[wasm_bindgen(js_name = timelineGeometry)]
pub fn timeline_geometry(
    start_ms: f64,
    end_ms: f64,
    today_ms: f64,
    width: f64,
) -> Result<String, JsValue> {
    let geometry = TimelineGeometry::compute(
        timestamp(start_ms)?,
        timestamp(end_ms)?,
        timestamp(today_ms)?,
        width,
    );

    serde_json::to_string(&geometry)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Project title with link glyphs appended; `urls_json` is a JSON string array
#[wasm_bindgen(js_name = annotateLinks)]
pub fn annotate_links(title_html: &str, urls_json: &str, base_url: &str) -> Result<String, JsValue> {
    let urls: Vec<String> = serde_json::from_str(urls_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid URL list: {}", e)))?;

    Ok(annotate_project_links(title_html, &urls, base_url))
}

#[wasm_bindgen(js_name = fixSvgUnits)]
pub fn fix_svg_units_js(markup: &str) -> String {
    fix_svg_units(markup)
}

#[wasm_bindgen(js_name = shouldShowPrivacyPolicy)]
pub fn should_show_privacy_policy() -> bool {
    PrivacyNotice::new(LocalStorage).should_show()
}

#[wasm_bindgen(js_name = suppressPrivacyPolicy)]
pub fn suppress_privacy_policy() {
    PrivacyNotice::new(LocalStorage).suppress_permanently();
}

fn timestamp(ms: f64) -> Result<DateTime<Utc>, JsValue> {
    Utc.timestamp_millis_opt(ms as i64)
        .single()
        .ok_or_else(|| JsValue::from_str(&format!("Invalid timestamp: {}", ms)))
}

fn millis(now_ms: f64) -> Duration {
    Duration::from_millis(now_ms.max(0.0) as u64)
}

fn utf16_offset(text: &str, chars: usize) -> u32 {
    text.chars().take(chars).map(|c| c.len_utf16() as u32).sum()
}

/// Char index of a UTF-16 offset; offsets inside a surrogate pair round up
fn char_offset(text: &str, utf16: u32) -> usize {
    let mut units = 0;
    for (i, c) in text.chars().enumerate() {
        if units >= utf16 {
            return i;
        }
        units += c.len_utf16() as u32;
    }
    text.chars().count()
}
