//! Browser bindings for the navigation panel script.
//!
//! The page owns one [`NavViewHandle`], built from the listing it was served
//! with and the view string found in its URL.

use wasm_bindgen::prelude::*;

use crate::codec::NavView;
use crate::config::VIEW_QUERY_PARAM;
use crate::models::NavTree;
use crate::outline::PageContext;

#[wasm_bindgen]
pub struct NavViewHandle {
    inner: NavView,
}

#[wasm_bindgen]
impl NavViewHandle {
    /// Builds the view from listing JSON, then applies `view` if given.
    #[wasm_bindgen(constructor)]
    pub fn new(listing: &str, view: Option<String>) -> Result<NavViewHandle, JsError> {
        let tree = NavTree::from_listing_json(listing).inspect_err(|err| {
            web_sys::console::warn_1(&format!("Navigation listing rejected: {}", err).into());
        })?;

        let mut inner = NavView::new(tree);
        if let Some(view) = view {
            inner.load(&view);
        }
        Ok(Self { inner })
    }

    pub fn serialize(&self) -> String {
        self.inner.serialize()
    }

    pub fn load(&mut self, view: &str) {
        self.inner.load(view);
    }

    #[wasm_bindgen(js_name = toggleLocales)]
    pub fn toggle_locales(&mut self) -> bool {
        self.inner.toggle_locales()
    }

    #[wasm_bindgen(js_name = toggleSystem)]
    pub fn toggle_system(&mut self, index: usize) -> Result<bool, JsError> {
        Ok(self.inner.toggle_system(index)?)
    }

    #[wasm_bindgen(js_name = togglePackage)]
    pub fn toggle_package(&mut self, system: usize, package: usize) -> Result<bool, JsError> {
        Ok(self.inner.toggle_package(system, package)?)
    }

    /// Visible outline for manual `name`, as a plain JS object.
    pub fn outline(&self, name: String, hash: Option<String>) -> Result<JsValue, JsValue> {
        let outline = self.inner.outline(&PageContext::new(name, hash));
        serde_wasm_bindgen::to_value(&outline).map_err(JsValue::from)
    }
}

/// Reads the view string from the current page URL.
#[wasm_bindgen(js_name = viewFromLocation)]
pub fn view_from_location() -> Option<String> {
    let href = web_sys::window()?.location().href().ok()?;
    let url = web_sys::Url::new(&href).ok()?;
    url.search_params().get(VIEW_QUERY_PARAM)
}
