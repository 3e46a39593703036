//! DOM-backed scene and frame surface

use crate::animation::frame_cycler::FrameSurface;
use crate::config::ShotConfig;
use crate::gesture::scene::{parse_coordinate, Scene};
use crate::input::types::ScenePoint;
use crate::shot::channel::{ShotError, ShotResult};
use crate::web::js_error;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, SvgElement};

fn inline_style(element: &Element) -> ShotResult<CssStyleDeclaration> {
    if let Some(svg) = element.dyn_ref::<SvgElement>() {
        Ok(svg.style())
    } else if let Some(html) = element.dyn_ref::<HtmlElement>() {
        Ok(html.style())
    } else {
        Err(ShotError::Platform(format!(
            "<{}> has no inline style",
            element.tag_name()
        )))
    }
}

fn set_visible(element: &Element, visible: bool) -> ShotResult<()> {
    let style = inline_style(element)?;
    let display = if visible { "inline" } else { "none" };
    style
        .set_property("display", display)
        .map_err(|e| js_error("set display", e))
}

/// The pool table page: cue ball circle plus the aim line
pub struct DomScene {
    document: Document,
    cue_ball_selector: String,
    cue_ball_fill: String,
    line: Element,
}

impl DomScene {
    pub fn new(document: Document, config: &ShotConfig) -> ShotResult<Self> {
        let line = document
            .get_element_by_id(&config.aim_line_id)
            .ok_or_else(|| ShotError::MissingElement(format!("#{}", config.aim_line_id)))?;

        Ok(Self {
            document,
            cue_ball_selector: config.cue_ball_selector(),
            cue_ball_fill: config.cue_ball_fill.clone(),
            line,
        })
    }

    fn set_line_attribute(&self, name: &str, value: f64) -> ShotResult<()> {
        self.line
            .set_attribute(name, &value.to_string())
            .map_err(|e| js_error("set aim line attribute", e))
    }
}

impl Scene for DomScene {
    fn cue_ball_position(&self) -> ShotResult<ScenePoint> {
        let ball = self
            .document
            .query_selector(&self.cue_ball_selector)
            .map_err(|e| js_error("query cue ball", e))?
            .ok_or_else(|| ShotError::MissingCueBall {
                fill: self.cue_ball_fill.clone(),
            })?;

        let x = parse_coordinate("cx", ball.get_attribute("cx").as_deref())?;
        let y = parse_coordinate("cy", ball.get_attribute("cy").as_deref())?;
        Ok(ScenePoint::new(x, y))
    }

    fn show_aim_line(&mut self) -> ShotResult<()> {
        set_visible(&self.line, true)
    }

    fn hide_aim_line(&mut self) -> ShotResult<()> {
        set_visible(&self.line, false)
    }

    fn set_aim_line(&mut self, anchor: ScenePoint, end: ScenePoint) -> ShotResult<()> {
        self.set_line_attribute("x1", anchor.x)?;
        self.set_line_attribute("y1", anchor.y)?;
        self.set_line_attribute("x2", end.x)?;
        self.set_line_attribute("y2", end.y)
    }
}

/// Rendered shot frames, in document order
pub struct DomFrames {
    frames: Vec<Element>,
}

impl DomFrames {
    pub fn query(document: &Document, selector: &str) -> ShotResult<Self> {
        let nodes = document
            .query_selector_all(selector)
            .map_err(|e| js_error("query frames", e))?;

        let frames = (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();
        Ok(Self { frames })
    }
}

impl FrameSurface for DomFrames {
    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn hide_all(&mut self) -> ShotResult<()> {
        self.frames
            .iter()
            .try_for_each(|frame| set_visible(frame, false))
    }

    fn show(&mut self, index: usize) -> ShotResult<()> {
        let frame = self
            .frames
            .get(index)
            .ok_or_else(|| ShotError::MissingElement(format!("frame {}", index)))?;
        set_visible(frame, true)
    }
}
