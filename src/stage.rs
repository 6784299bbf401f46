use crate::audio;
use crate::constants::*;
use crate::core::{Node, NodeId, Stage};
use crate::dom;
use crate::overlay::{self, Overlay};
use fnv::FnvHashMap;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The browser page as seen by the show.
///
/// Decorative nodes are tracked by id so later cues can fade or remove them;
/// constellation nodes are never removed and live until the page fades.
pub struct DomStage {
    document: web::Document,
    window: web::Window,
    text: Overlay,
    name: Overlay,
    music: web::HtmlAudioElement,
    start_prompt: web::Element,
    nodes: FnvHashMap<NodeId, web::HtmlElement>,
    next_id: u32,
}

impl DomStage {
    pub fn new(window: web::Window, document: web::Document) -> anyhow::Result<Self> {
        let text = Overlay::new(dom::element_by_id(&document, TEXT_ID)?);
        let name = Overlay::new(dom::element_by_id(&document, NAME_ID)?);
        let music = dom::element_by_id::<web::HtmlAudioElement>(&document, MUSIC_ID)?;
        let start_prompt = dom::element_by_id::<web::Element>(&document, START_PROMPT_ID)?;
        Ok(Self {
            document,
            window,
            text,
            name,
            music,
            start_prompt,
            nodes: FnvHashMap::default(),
            next_id: 0,
        })
    }

    pub fn start_prompt_hidden(&self) -> bool {
        overlay::is_hidden(&self.start_prompt)
    }

    fn create_div(&self, class: &str) -> Option<web::HtmlElement> {
        let el = match self.document.create_element("div") {
            Ok(el) => el,
            Err(e) => {
                log::error!("[stage] createElement error: {:?}", e);
                return None;
            }
        };
        el.set_class_name(class);
        el.dyn_into::<web::HtmlElement>().ok()
    }

    fn build(&self, node: &Node) -> Option<web::HtmlElement> {
        match node {
            Node::Dot { at } => {
                let el = self.create_div(DOT_CLASS)?;
                dom::set_style(&el, "left", &format!("{}px", at.x));
                dom::set_style(&el, "top", &format!("{}px", at.y));
                Some(el)
            }
            Node::Line(geom) => {
                let el = self.create_div(LINE_CLASS)?;
                dom::set_style(&el, "width", &format!("{}px", geom.length));
                dom::set_style(&el, "left", &format!("{}px", geom.origin.x));
                dom::set_style(&el, "top", &format!("{}px", geom.origin.y));
                dom::set_style(
                    &el,
                    "transform",
                    &format!("rotate({}deg)", geom.angle_deg),
                );
                Some(el)
            }
            Node::Kiss {
                emoji,
                at,
                delay_sec,
            } => {
                let el = self.create_div(KISS_CLASS)?;
                el.set_text_content(Some(*emoji));
                dom::set_style(&el, "left", &format!("{}px", at.x));
                dom::set_style(&el, "top", &format!("{}px", at.y));
                dom::set_style(&el, "animation-delay", &format!("{}s", delay_sec));
                Some(el)
            }
        }
    }
}

impl Stage for DomStage {
    fn hide_start_prompt(&mut self) {
        overlay::hide(&self.start_prompt);
    }

    fn play_music(&mut self) {
        audio::play(&self.music);
    }

    fn set_music_volume(&mut self, volume: f64) {
        audio::set_volume(&self.music, volume);
    }

    fn set_text(&mut self, html: &str) {
        self.text.set_html(html);
    }

    fn set_text_opacity(&mut self, opacity: f64) {
        self.text.set_opacity(opacity);
    }

    fn set_name(&mut self, html: &str) {
        self.name.set_html(html);
    }

    fn set_name_opacity(&mut self, opacity: f64) {
        self.name.set_opacity(opacity);
    }

    fn viewport(&self) -> (f64, f64) {
        dom::viewport_size(&self.window)
    }

    fn insert_node(&mut self, node: &Node) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let Some(el) = self.build(node) else {
            return id;
        };
        if let Some(body) = self.document.body() {
            _ = body.append_child(&el);
        }
        self.nodes.insert(id, el);
        id
    }

    fn set_node_opacity(&mut self, id: NodeId, opacity: f64) {
        if let Some(el) = self.nodes.get(&id) {
            dom::set_opacity(el, opacity);
        }
    }

    fn remove_node(&mut self, id: NodeId) {
        if let Some(el) = self.nodes.remove(&id) {
            el.remove();
        }
    }

    fn fade_out_page(&mut self, seconds: f64) {
        overlay::fade_out_body(&self.document, seconds);
    }
}
