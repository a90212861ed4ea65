//! Control surface rendered into the page's existing player markup.

use showreel_core::{ControlSurface, FullscreenIcon, PlaybackView, VolumeIcon};
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::config::PlayerElements;

/// DOM elements making up the player chrome.
///
/// Each element is optional; a missing one turns the matching update into a
/// no-op.
#[derive(Debug, Default)]
pub struct DomControls {
    wrapper: Option<Element>,
    overlay: Option<HtmlElement>,
    play_pause: Option<Element>,
    progress_fill: Option<HtmlElement>,
    time_display: Option<Element>,
    volume_button: Option<Element>,
    volume_slider: Option<HtmlInputElement>,
    fullscreen_button: Option<Element>,
    controls: Option<HtmlElement>,
}

impl DomControls {
    /// Looks up every element named in `elements`.
    pub fn lookup(document: &Document, elements: &PlayerElements) -> Self {
        Self {
            wrapper: query(document, &elements.wrapper),
            overlay: by_id(document, &elements.overlay),
            play_pause: by_id(document, &elements.play_pause_button),
            progress_fill: by_id(document, &elements.progress_fill),
            time_display: by_id(document, &elements.time_display),
            volume_button: by_id(document, &elements.volume_button),
            volume_slider: by_id(document, &elements.volume_slider),
            fullscreen_button: by_id(document, &elements.fullscreen_button),
            controls: by_id(document, &elements.controls),
        }
    }

    /// The player wrapper, if the page has one.
    pub fn wrapper(&self) -> Option<&Element> {
        self.wrapper.as_ref()
    }
}

impl ControlSurface for DomControls {
    fn show_playback(&mut self, view: PlaybackView) {
        if let Some(overlay) = &self.overlay {
            let display = if view.overlay_visible { "flex" } else { "none" };
            let _ = overlay.style().set_property("display", display);
        }
        if let Some(wrapper) = &self.wrapper {
            let _ = wrapper
                .class_list()
                .toggle_with_force("playing", view.playing);
        }
        if let Some(button) = &self.play_pause {
            button.set_inner_html(&icon_html(view.icon.glyph()));
        }
    }

    fn set_controls_visible(&mut self, visible: bool) {
        if let Some(controls) = &self.controls {
            let opacity = if visible { "1" } else { "0" };
            let _ = controls.style().set_property("opacity", opacity);
        }
    }

    fn show_progress(&mut self, percent: f64, label: &str) {
        let (Some(fill), Some(time)) = (&self.progress_fill, &self.time_display) else {
            return;
        };
        let _ = fill.style().set_property("width", &format!("{percent}%"));
        time.set_text_content(Some(label));
    }

    fn show_volume_icon(&mut self, icon: VolumeIcon) {
        if let Some(button) = &self.volume_button {
            button.set_inner_html(&icon_html(icon.glyph()));
        }
    }

    fn set_volume_slider(&mut self, value: f64) {
        if let Some(slider) = &self.volume_slider {
            slider.set_value(&value.to_string());
        }
    }

    fn show_fullscreen_icon(&mut self, icon: FullscreenIcon) {
        if let Some(button) = &self.fullscreen_button {
            button.set_inner_html(&icon_html(icon.glyph()));
        }
    }

    fn pointer_over_player(&self) -> bool {
        self.wrapper
            .as_ref()
            .and_then(|w| w.matches(":hover").ok())
            .unwrap_or(false)
    }
}

/// Font Awesome icon markup for `glyph`.
pub(crate) fn icon_html(glyph: &str) -> String {
    format!(r#"<i class="fas fa-{glyph}"></i>"#)
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let found = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<T>().ok());
    if found.is_none() {
        debug!(id, "player element missing");
    }
    found
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    let found = document.query_selector(selector).ok().flatten();
    if found.is_none() {
        debug!(selector, "player element missing");
    }
    found
}
