use crate::constants::HIDDEN_CLASS;
use crate::dom;
use web_sys as web;

/// A text layer whose appearance is animated purely by CSS opacity transitions.
pub struct Overlay {
    el: web::HtmlElement,
}

impl Overlay {
    pub fn new(el: web::HtmlElement) -> Self {
        Self { el }
    }

    pub fn set_html(&self, html: &str) {
        self.el.set_inner_html(html);
    }

    pub fn set_opacity(&self, opacity: f64) {
        dom::set_opacity(&self.el, opacity);
    }
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1(HIDDEN_CLASS);
}

#[inline]
pub fn is_hidden(el: &web::Element) -> bool {
    el.class_list().contains(HIDDEN_CLASS)
}

/// Fade the whole page to transparent over `seconds`.
pub fn fade_out_body(document: &web::Document, seconds: f64) {
    if let Some(body) = document.body() {
        dom::set_style(&body, "transition", &format!("opacity {}s ease", seconds));
        dom::set_opacity(&body, 0.0);
    }
}
